//! Error types for the benchmark catalog.
//!
//! Arity errors signal a caller defect (wrong input length for a criterion);
//! lookup errors carry every unresolved name so a harness can fix all typos in
//! one pass. Floating-point specials produced by well-shaped inputs are not
//! errors and propagate as ordinary values.

use thiserror::Error;

/// Errors that can occur when querying the catalog or evaluating a criterion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenchmarkError {
    /// A criterion was called with a vector of the wrong length.
    #[error("criterion '{function}' expects {expected} variables, got {got}")]
    ArityMismatch {
        /// Name of the criterion function
        function: &'static str,
        /// Declared input length
        expected: usize,
        /// Length of the vector actually passed
        got: usize,
    },

    /// One or more requested problem names are not registered.
    #[error("unknown problem name(s): {}", names.join(", "))]
    UnknownProblems {
        /// Every requested name that failed to resolve
        names: Vec<String>,
    },

    /// A tag lookup used an unregistered function family name.
    #[error("unknown function family: '{name}'")]
    UnknownFamily {
        /// The unresolved family name
        name: String,
    },
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, BenchmarkError>;

impl BenchmarkError {
    /// Returns `true` if this error signals a wrong-length input vector.
    pub fn is_arity_error(&self) -> bool {
        matches!(self, BenchmarkError::ArityMismatch { .. })
    }

    /// Returns `true` if this error is a failed lookup by name.
    ///
    /// This includes `UnknownProblems` and `UnknownFamily`.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BenchmarkError::UnknownProblems { .. } | BenchmarkError::UnknownFamily { .. }
        )
    }
}
