//! Domain layer: the data model and the pure algorithmic pieces of GSP
//!
//! Nothing in this module performs I/O or spawns threads; counting across
//! workers lives in [`crate::executor`].

pub mod dataset;
pub mod frequency;
pub mod generator;
pub mod matcher;
pub mod types;

pub use dataset::Dataset;
pub use frequency::{meets_threshold, FrequencyTable, PatternEntry};
pub use generator::{join, seed, JoinStrategy};
pub use matcher::{frequency, occurs, MismatchBudget};
pub use types::{Candidate, Element, Item, Transaction};
