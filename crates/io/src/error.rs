//! Error types for release-file reading and solution writing.

use sprintplan_core::InvalidRelease;

/// Errors that can occur while reading a releases file.
///
/// All variants are fatal: the whole run aborts and no partial schedule is
/// produced.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A non-blank line does not parse into exactly two integers
    #[error("invalid format in line {line_number}: {content:?}, expected two integers")]
    InvalidRecord {
        /// 1-based line number in the input
        line_number: usize,
        /// The offending line, as read
        content: String,
    },

    /// A line parsed but carries an out-of-domain value
    #[error("invalid release in line {line_number}: {source}")]
    InvalidRelease {
        /// 1-based line number in the input
        line_number: usize,
        /// The underlying domain rejection
        source: InvalidRelease,
    },
}

/// Errors that can occur while writing a solution file.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
