//! Error types for mining operations

use std::fmt;
use thiserror::Error;

/// Stage of a mining level at which an error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Level-1 candidate generation
    Seed,
    /// Joining survivors into longer candidates
    Join,
    /// Support counting and pruning
    Count,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Seed => write!(f, "seed"),
            Stage::Join => write!(f, "join"),
            Stage::Count => write!(f, "count"),
        }
    }
}

/// Mining errors
#[derive(Error, Debug)]
pub enum Error {
    /// A precondition on the inputs was violated
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A counting unit failed; the level's counts cannot be trusted
    #[error("worker failure: {reason}")]
    WorkerFailure {
        /// What went wrong in the worker
        reason: String,
    },

    /// An error raised while processing a specific level
    #[error("level {level} ({stage}) failed: {source}")]
    Level {
        /// Candidate length of the level being processed
        level: usize,
        /// Stage within the level
        stage: Stage,
        /// The underlying error
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Shorthand for an [`Error::InvalidArgument`]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Shorthand for an [`Error::WorkerFailure`]
    pub fn worker_failure(reason: impl Into<String>) -> Self {
        Error::WorkerFailure {
            reason: reason.into(),
        }
    }

    /// Attach level and stage context to this error
    pub fn at_level(self, level: usize, stage: Stage) -> Self {
        Error::Level {
            level,
            stage,
            source: Box::new(self),
        }
    }

    /// The innermost error, with level context stripped
    pub fn root(&self) -> &Error {
        match self {
            Error::Level { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type for mining operations
pub type Result<T> = std::result::Result<T, Error>;
