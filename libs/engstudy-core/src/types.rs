//! Core types for the word review engine.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ReviewError;
use crate::scheduler::ScheduleResult;

/// Ease multiplier carried on every item for future adaptive scheduling.
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Item learning status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    New,
    Learning,
    Review,
    Graduated,
}

impl ItemStatus {
    /// Status reached after rating an item in this status.
    ///
    /// `Easy` always graduates, `Again` always demotes to `Learning`, and
    /// `Hard`/`Good` hold the item where it is once it has left `New`.
    pub fn transition(self, rating: Rating) -> Self {
        match (self, rating) {
            (_, Rating::Easy) => Self::Graduated,
            (_, Rating::Again) => Self::Learning,
            (Self::New, Rating::Hard | Rating::Good) => Self::Learning,
            (status, Rating::Hard | Rating::Good) => status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Learning => "learning",
            Self::Review => "review",
            Self::Graduated => "graduated",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Learner's self-reported recall quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    /// All ratings in button order.
    pub const ALL: [Rating; 4] = [Self::Again, Self::Hard, Self::Good, Self::Easy];

    /// Convert to 4-point numeric value (1-4).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Again => 1,
            Self::Hard => 2,
            Self::Good => 3,
            Self::Easy => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }

    /// Button label shown to the learner.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Again => "Again",
            Self::Hard => "Hard",
            Self::Good => "Good",
            Self::Easy => "Easy",
        }
    }

    /// Exposure-delay hint shown under the button.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Again => "1m",
            Self::Hard => "6m",
            Self::Good => "10m",
            Self::Easy => "4d",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "again" => Ok(Self::Again),
            "hard" => Ok(Self::Hard),
            "good" => Ok(Self::Good),
            "easy" => Ok(Self::Easy),
            _ => Err(ReviewError::InvalidRating(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = ReviewError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Again),
            2 => Ok(Self::Hard),
            3 => Ok(Self::Good),
            4 => Ok(Self::Easy),
            other => Err(ReviewError::InvalidRating(other.to_string())),
        }
    }
}

/// A rating button as presented to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingOption {
    pub rating: Rating,
    pub label: String,
    pub hint: String,
}

impl From<Rating> for RatingOption {
    fn from(rating: Rating) -> Self {
        Self {
            rating,
            label: rating.label().to_string(),
            hint: rating.hint().to_string(),
        }
    }
}

/// The four rating buttons, in order.
pub fn rating_options() -> Vec<RatingOption> {
    Rating::ALL.into_iter().map(RatingOption::from).collect()
}

/// Normalize a raw token: trim and lower-case.
pub fn normalize_text(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A single word under review with its scheduling metadata.
///
/// Scheduling fields change only through [`Item::apply`], which takes the
/// output of a [`Scheduler`](crate::scheduler::Scheduler).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: Uuid,
    text: String,
    context: String,
    #[serde(default)]
    definition: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    next_review_at: DateTime<Utc>,
    status: ItemStatus,
    interval_ms: i64,
    ease_factor: f64,
}

impl Item {
    /// Create a new item, immediately due.
    pub fn new(text: &str, context: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: normalize_text(text),
            context: context.to_string(),
            definition: String::new(),
            created_at: now,
            next_review_at: now,
            status: ItemStatus::New,
            interval_ms: 0,
            ease_factor: DEFAULT_EASE_FACTOR,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn set_definition(&mut self, definition: impl Into<String>) {
        self.definition = definition.into();
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn next_review_at(&self) -> DateTime<Utc> {
        self.next_review_at
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    pub fn interval_ms(&self) -> i64 {
        self.interval_ms
    }

    pub fn ease_factor(&self) -> f64 {
        self.ease_factor
    }

    /// Whether the item is eligible for review at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_at <= now
    }

    /// Apply a scheduling result. The ease factor is carried unchanged.
    pub fn apply(&mut self, result: &ScheduleResult) {
        // next_review_at never precedes creation, even with a skewed clock
        self.next_review_at = result.next_review_at.max(self.created_at);
        self.interval_ms = result.interval_ms;
        self.status = result.next_status;
    }
}
