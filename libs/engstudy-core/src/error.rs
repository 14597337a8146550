//! Error types for engstudy-core.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias using ReviewError.
pub type Result<T> = std::result::Result<T, ReviewError>;

/// Errors surfaced by the scheduler, the item store and study sessions.
///
/// None of these are fatal to the process; each one is corrected by the
/// caller fixing its input (re-fetching the current item, choosing a valid
/// rating, starting a new session).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("invalid rating: {0}")]
    InvalidRating(String),

    #[error("stale item {got}: current item is {expected}")]
    StaleItem { expected: Uuid, got: Uuid },

    #[error("session is empty")]
    EmptySession,

    #[error("item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("store error: {0}")]
    Store(String),
}
