//! Error types for chart construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_cycle::CycleError;
use bazi_time::TimeError;

/// Errors from building a chart or its projections.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Invalid date, hour, or date text.
    Time(TimeError),
    /// Stem/branch pair off the 60-cycle.
    Cycle(CycleError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Cycle(e) => write!(f, "cycle error: {e}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Cycle(e) => Some(e),
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<CycleError> for ChartError {
    fn from(e: CycleError) -> Self {
        Self::Cycle(e)
    }
}
