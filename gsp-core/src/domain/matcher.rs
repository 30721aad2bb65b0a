//! Windowed sequence matching with a mismatch budget
//!
//! A candidate occurs in a transaction when some contiguous window of the
//! transaction, exactly as long as the candidate, agrees with it on every
//! position except at most `budget` of them. This is a bounded Hamming
//! distance match; elements of the transaction are never skipped.

use super::dataset::Dataset;
use super::types::{Candidate, Element, Item};
use crate::error::{Error, Result};
use std::fmt;

/// Number of position mismatches tolerated inside one window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MismatchBudget(usize);

impl MismatchBudget {
    /// Exact matching
    pub const EXACT: MismatchBudget = MismatchBudget(0);

    /// Create a budget from an unsigned count
    pub const fn new(budget: usize) -> Self {
        MismatchBudget(budget)
    }

    /// The tolerated mismatch count
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for MismatchBudget {
    fn from(budget: usize) -> Self {
        MismatchBudget(budget)
    }
}

impl TryFrom<i64> for MismatchBudget {
    type Error = Error;

    fn try_from(budget: i64) -> Result<Self> {
        usize::try_from(budget).map(MismatchBudget).map_err(|_| {
            Error::invalid_argument(format!(
                "mismatch budget must be non-negative, got {budget}"
            ))
        })
    }
}

impl fmt::Display for MismatchBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether `candidate` occurs in `transaction` under `budget`.
///
/// Every window starts from the full budget; a window fails as soon as a
/// mismatch is found with no budget left.
pub fn occurs<T: Item>(candidate: &[T], transaction: &[Element<T>], budget: MismatchBudget) -> bool {
    let width = candidate.len();
    if width == 0 {
        return true;
    }
    if width > transaction.len() {
        return false;
    }

    transaction
        .windows(width)
        .any(|window| window_matches(candidate, window, budget.get()))
}

fn window_matches<T: Item>(candidate: &[T], window: &[Element<T>], budget: usize) -> bool {
    let mut remaining = budget;
    for (item, element) in candidate.iter().zip(window) {
        if !element.contains(item) {
            if remaining == 0 {
                return false;
            }
            remaining -= 1;
        }
    }
    true
}

/// Number of transactions in which `candidate` occurs
pub fn frequency<T: Item>(
    candidate: &Candidate<T>,
    dataset: &Dataset<T>,
    budget: MismatchBudget,
) -> usize {
    dataset
        .iter()
        .filter(|transaction| occurs(candidate, transaction, budget))
        .count()
}
