use thiserror::Error;

// Error type for route search operations.
#[derive(Error, Debug, Clone)]
pub enum PathError {
    /// Error when growing or copying route storage fails. The search call
    /// that hit it is aborted and its partial result set must be discarded.
    #[error("Failed to allocate route storage: {0}")]
    Allocation(#[from] std::collections::TryReserveError),
}
