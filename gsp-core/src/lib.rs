//! Generalized Sequential Pattern (GSP) mining
//!
//! This crate discovers frequent item sequences in a database of ordered
//! transactions. Each transaction position holds either a single item or a
//! set of items occurring together. Candidates grow one item per level: the
//! level-1 seeds are every distinct item, and each further level joins the
//! previous level's survivors where one's tail overlaps another's head.
//! Support is counted in parallel, one task per candidate, and anything below
//! `minsup × |transactions|` is pruned.
//!
//! # Example
//!
//! ```rust
//! use gsp_core::{Candidate, Element, Miner};
//!
//! let transactions = vec![
//!     vec![Element::item("a"), Element::item("b"), Element::item("c"),
//!          Element::set(["c", "d"]), Element::item("d")],
//!     vec![Element::item("a"), Element::item("a"), Element::item("b"),
//!          Element::set(["c", "d"])],
//!     vec![Element::item("a"), Element::item("a")],
//! ];
//!
//! let miner = Miner::new(transactions, 0.5).unwrap();
//! let patterns = miner.run().unwrap();
//!
//! assert_eq!(patterns.get(&Candidate::new(["a", "b", "c"])), Some(2));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod domain;
pub mod error;
pub mod executor;
pub mod miner;
pub mod support;

// Re-export key types
pub use config::{MinerConfig, MinerConfigBuilder};
pub use domain::{
    Candidate, Dataset, Element, FrequencyTable, Item, JoinStrategy, MismatchBudget, PatternEntry,
    Transaction,
};
pub use error::{Error, Result, Stage};
pub use executor::ExecutionMode;
pub use miner::{LevelSummary, Miner, MiningMetadata, MiningReport};
pub use support::SupportCounter;
