//! Frequency tables: surviving candidates and their support counts

use super::types::{Candidate, Item};
use crate::error::{Error, Result};
use std::collections::hash_map::{self, Entry};
use std::collections::HashMap;

/// Whether `count` meets a real-valued support threshold.
///
/// The threshold is never rounded: with three transactions and minsup 0.5
/// the threshold is 1.5, so a count of 1 fails and a count of 2 passes.
pub fn meets_threshold(count: usize, threshold: f64) -> bool {
    count as f64 >= threshold
}

/// Mapping from candidate to its support count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<T: Item> {
    counts: HashMap<Candidate<T>, usize>,
}

impl<T: Item> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<T: Item> FrequencyTable<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(candidate, count)` pairs, failing on a duplicate
    /// candidate
    pub fn try_from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Candidate<T>, usize)>,
    {
        let mut table = Self::new();
        for (candidate, count) in counts {
            table.insert_unique(candidate, count)?;
        }
        Ok(table)
    }

    /// Insert a candidate that must not already be present.
    ///
    /// Candidates are deduplicated before counting, so a collision here means
    /// two workers produced the same key.
    pub fn insert_unique(&mut self, candidate: Candidate<T>, count: usize) -> Result<()> {
        match self.counts.entry(candidate) {
            Entry::Occupied(entry) => Err(Error::worker_failure(format!(
                "duplicate result for candidate {:?}",
                entry.key()
            ))),
            Entry::Vacant(entry) => {
                entry.insert(count);
                Ok(())
            }
        }
    }

    /// Drop every candidate whose count is below `threshold`
    pub fn retain_frequent(mut self, threshold: f64) -> Self {
        self.counts.retain(|_, count| meets_threshold(*count, threshold));
        self
    }

    /// Support count of `candidate`, if it survived
    pub fn get(&self, candidate: &Candidate<T>) -> Option<usize> {
        self.counts.get(candidate).copied()
    }

    /// Whether `candidate` survived
    pub fn contains(&self, candidate: &Candidate<T>) -> bool {
        self.counts.contains_key(candidate)
    }

    /// Number of surviving candidates
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no candidate survived
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Surviving candidates, in arbitrary order
    pub fn candidates(&self) -> hash_map::Keys<'_, Candidate<T>, usize> {
        self.counts.keys()
    }

    /// `(candidate, count)` pairs, in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&Candidate<T>, usize)> + '_ {
        self.counts.iter().map(|(candidate, count)| (candidate, *count))
    }

    /// Entries sorted by descending count, then by candidate
    pub fn sorted(&self) -> Vec<(&Candidate<T>, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(a, a_count), (b, b_count)| b_count.cmp(a_count).then_with(|| a.cmp(b)));
        entries
    }

    /// Owned entries in [`sorted`](Self::sorted) order
    pub fn entries(&self) -> Vec<PatternEntry<T>> {
        self.sorted()
            .into_iter()
            .map(|(candidate, support)| PatternEntry {
                pattern: candidate.clone(),
                support,
            })
            .collect()
    }
}

impl<T: Item> IntoIterator for FrequencyTable<T> {
    type Item = (Candidate<T>, usize);
    type IntoIter = hash_map::IntoIter<Candidate<T>, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// A frequent pattern with its support count
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>"
    ))
)]
pub struct PatternEntry<T> {
    /// The item sequence
    pub pattern: Candidate<T>,
    /// Number of transactions it occurs in
    pub support: usize,
}
