//! Error type for the convenience layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_chart::ChartError;
use bazi_cycle::CycleError;
use bazi_time::TimeError;

/// Unified error for the high-level API.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaziError {
    /// Chart construction failed.
    Chart(ChartError),
    /// Date or time text was invalid.
    Time(TimeError),
    /// Stem/branch pair off the 60-cycle.
    Cycle(CycleError),
    /// A symbol name (stem, branch, sex) was not recognized.
    UnknownName { kind: &'static str, text: String },
}

impl Display for BaziError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chart(e) => write!(f, "{e}"),
            Self::Time(e) => write!(f, "{e}"),
            Self::Cycle(e) => write!(f, "{e}"),
            Self::UnknownName { kind, text } => write!(f, "unknown {kind}: {text:?}"),
        }
    }
}

impl Error for BaziError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Chart(e) => Some(e),
            Self::Time(e) => Some(e),
            Self::Cycle(e) => Some(e),
            Self::UnknownName { .. } => None,
        }
    }
}

impl From<ChartError> for BaziError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<TimeError> for BaziError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<CycleError> for BaziError {
    fn from(e: CycleError) -> Self {
        Self::Cycle(e)
    }
}
