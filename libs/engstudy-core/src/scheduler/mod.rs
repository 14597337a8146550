//! Review scheduling.
//!
//! A scheduler maps an item and a rating to the item's next due time,
//! interval and lifecycle status. Schedulers are pure: they read the clock
//! only through the `now` argument and never mutate the item.

pub mod fixed;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Item, ItemStatus, Rating};

pub use fixed::FixedIntervals;

/// Result of scheduling an item after a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub next_review_at: DateTime<Utc>,
    pub interval_ms: i64,
    pub next_status: ItemStatus,
}

/// Trait for review schedulers.
pub trait Scheduler: Send + Sync {
    /// Scheduler identifier.
    fn name(&self) -> &'static str;

    /// Calculate the next review for `item` rated `rating` at `now`.
    fn schedule(&self, item: &Item, rating: Rating, now: DateTime<Utc>) -> ScheduleResult;
}

/// Schedule with the default fixed-interval table.
pub fn compute_next_review(item: &Item, rating: Rating, now: DateTime<Utc>) -> ScheduleResult {
    FixedIntervals::default().schedule(item, rating, now)
}

/// Get scheduler by name.
pub fn get_scheduler(name: &str) -> Option<Box<dyn Scheduler>> {
    match name {
        "fixed" => Some(Box::new(FixedIntervals::default())),
        _ => None,
    }
}
