//! Word extraction and item endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use engstudy_core::{extract_with, ExtractOptions, ItemStore};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{DefinitionRequest, ExtractRequest, ExtractResponse, Item};
use crate::AppState;

/// POST /api/extract
/// Extracts words from pasted text and stores the ones not seen before
pub async fn extract(
    State(state): State<AppState>,
    Json(payload): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>> {
    if payload.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text is empty".to_string()));
    }

    let options = ExtractOptions {
        context: payload.context,
    };
    let extracted = extract_with(&payload.text, Utc::now(), &options);
    let total = extracted.len();

    let items = state.store()?.insert_batch(extracted);
    let skipped = total - items.len();

    tracing::info!("Extracted {} words ({} already known)", items.len(), skipped);

    Ok(Json(ExtractResponse { items, skipped }))
}

/// GET /api/items/due
pub async fn due(State(state): State<AppState>) -> Result<Json<Vec<Item>>> {
    let items = state.store()?.query_due(Utc::now())?;
    Ok(Json(items))
}

/// GET /api/items/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Item>> {
    let item = state
        .store()?
        .get(id)?
        .ok_or_else(|| ApiError::NotFound(format!("Item {}", id)))?;
    Ok(Json(item))
}

/// PUT /api/items/:id/definition
pub async fn set_definition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DefinitionRequest>,
) -> Result<Json<Item>> {
    let mut store = state.store()?;
    let mut item = store
        .get(id)?
        .ok_or_else(|| ApiError::NotFound(format!("Item {}", id)))?;

    item.set_definition(payload.definition.trim());
    store.upsert(item.clone())?;

    Ok(Json(item))
}
