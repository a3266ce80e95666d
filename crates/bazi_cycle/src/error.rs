//! Error types for sexagenary cycle arithmetic.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors from stem/branch cycle lookups.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CycleError {
    /// The stem and branch have different polarity, so the pair never
    /// occurs on the 60-cycle.
    InvalidCombination { stem: Stem, branch: Branch },
}

impl Display for CycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCombination { stem, branch } => write!(
                f,
                "invalid stem/branch combination: {}{} ({} {}) is not on the 60-cycle",
                stem.han(),
                branch.han(),
                stem.name(),
                branch.name()
            ),
        }
    }
}

impl Error for CycleError {}
