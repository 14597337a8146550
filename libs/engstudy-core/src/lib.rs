//! Review scheduling engine for word flashcards.
//!
//! Provides:
//! - Word extraction from pasted text
//! - Fixed-interval review scheduler and the item lifecycle state machine
//! - Study session queue (again re-queues, anything else completes)
//! - Item store trait with an in-memory implementation
//! - Shared types (Item, ItemStatus, Rating, etc.)

pub mod error;
pub mod scheduler;
pub mod session;
pub mod store;
pub mod tokenizer;
pub mod types;

pub use error::{Result, ReviewError};
pub use scheduler::{compute_next_review, get_scheduler, FixedIntervals, ScheduleResult, Scheduler};
pub use session::{Session, SessionOutcome, SessionSummary};
pub use store::{ItemStore, MemoryStore};
pub use tokenizer::{extract, extract_with, ContextMode, ExtractOptions};
pub use types::{rating_options, Item, ItemStatus, Rating, RatingOption};
