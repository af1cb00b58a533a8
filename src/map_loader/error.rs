use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for map loading operations.
/// This error type is used to represent the ways a map file can fail
/// validation before any route search starts.
#[derive(Error, Debug)]
pub enum MapLoaderError {
    /// Error when reading a file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when the first line is not a positive node count.
    #[error("Invalid node count '{0}'")]
    InvalidNodeCount(String),

    /// Error when a link line is malformed, names a node twice, or carries
    /// an unparsable length.
    #[error("Line {line} is not valid")]
    InvalidLine { line: usize },

    /// Error when the same pair of nodes is linked twice.
    #[error("Line {line} declares a duplicate link")]
    DuplicateLink { line: usize },

    /// Error when the declared node count does not match the distinct
    /// node names used by the link lines.
    #[error("Declared {declared} node(s) but the links name {found}")]
    NodeCountMismatch { declared: usize, found: usize },

    /// Error when the sum of all link lengths does not fit the weight
    /// domain.
    #[error("Invalid sum of link lengths")]
    LengthOverflow,
}
