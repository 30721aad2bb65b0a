//! Immutable transaction database

use super::types::{Item, Transaction};
use crate::error::{Error, Result};

/// A non-empty collection of transactions.
///
/// The dataset is read-only after construction and is shared by reference
/// with every counting worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset<T> {
    transactions: Vec<Transaction<T>>,
    max_size: usize,
}

impl<T: Item> Dataset<T> {
    /// Create a dataset, rejecting an empty transaction collection
    pub fn new(transactions: Vec<Transaction<T>>) -> Result<Self> {
        if transactions.is_empty() {
            return Err(Error::invalid_argument(
                "transaction collection must not be empty",
            ));
        }

        let max_size = transactions.iter().map(Vec::len).max().unwrap_or(0);

        Ok(Self {
            transactions,
            max_size,
        })
    }

    /// The transactions in load order
    pub fn transactions(&self) -> &[Transaction<T>] {
        &self.transactions
    }

    /// Number of transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Always `false`; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Largest element count of any single transaction
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Iterate over the transactions
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction<T>> {
        self.transactions.iter()
    }

    /// Iterate over every item in the dataset, with item sets expanded
    pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.transactions
            .iter()
            .flat_map(|transaction| transaction.iter().flat_map(|element| element.items()))
    }
}

impl<'a, T: Item> IntoIterator for &'a Dataset<T> {
    type Item = &'a Transaction<T>;
    type IntoIter = std::slice::Iter<'a, Transaction<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
