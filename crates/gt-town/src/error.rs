//! Error types for the town engine.

use thiserror::Error;

/// Result type for town operations.
pub type TownResult<T> = Result<T, TownError>;

/// Errors that can occur during a town visit.
#[derive(Debug, Error)]
pub enum TownError {
    /// A hunter-dependent action was invoked before any hunter arrived.
    #[error("no hunter is in town")]
    NoHunter,
}
