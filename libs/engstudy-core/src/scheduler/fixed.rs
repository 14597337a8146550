//! Fixed-interval scheduler.
//!
//! Each rating button always maps to the same exposure delay regardless of
//! the item's history: 1 minute, 6 minutes, 10 minutes or 4 days.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::{ScheduleResult, Scheduler};
use crate::types::{Item, Rating};

/// Fixed delay per rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIntervals {
    pub again: Duration,
    pub hard: Duration,
    pub good: Duration,
    pub easy: Duration,
}

impl Default for FixedIntervals {
    fn default() -> Self {
        Self {
            again: Duration::minutes(1),
            hard: Duration::minutes(6),
            good: Duration::minutes(10),
            easy: Duration::days(4),
        }
    }
}

impl FixedIntervals {
    /// Delay assigned to a rating.
    pub fn delay(&self, rating: Rating) -> Duration {
        match rating {
            Rating::Again => self.again,
            Rating::Hard => self.hard,
            Rating::Good => self.good,
            Rating::Easy => self.easy,
        }
    }
}

impl Scheduler for FixedIntervals {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn schedule(&self, item: &Item, rating: Rating, now: DateTime<Utc>) -> ScheduleResult {
        let delay = self.delay(rating);
        let next_status = item.status().transition(rating);

        debug!(
            item = %item.id(),
            %rating,
            from = %item.status(),
            to = %next_status,
            "scheduled item"
        );

        ScheduleResult {
            next_review_at: now + delay,
            interval_ms: delay.num_milliseconds(),
            next_status,
        }
    }
}
