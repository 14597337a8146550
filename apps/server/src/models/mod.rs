//! API request and response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from engstudy-core
pub use engstudy_core::{
    ContextMode, Item, ItemStatus, Rating, RatingOption, SessionOutcome, SessionSummary,
};

/// POST /api/extract body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
    #[serde(default)]
    pub context: ContextMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    /// Newly stored items, in text order.
    pub items: Vec<Item>,
    /// Extracted words that were already in the store.
    pub skipped: usize,
}

/// PUT /api/items/:id/definition body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionRequest {
    pub definition: String,
}

/// POST /api/sessions body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    /// Items to study, in order. All due items when absent.
    #[serde(default)]
    pub item_ids: Option<Vec<Uuid>>,
}

/// Current state of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub current: Option<Item>,
    pub remaining: usize,
    pub completed: usize,
    pub complete: bool,
}

/// POST /api/sessions/:id/review body
///
/// The rating is taken as a string so an unknown value is reported as an
/// invalid rating rather than a body deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub item_id: Uuid,
    pub rating: String,
}
