//! Study session endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use engstudy_core::{ItemStore, MemoryStore, Session};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

fn session_not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("Session {}", id))
}

fn view(session_id: Uuid, session: &Session, store: &MemoryStore) -> Result<SessionView> {
    Ok(SessionView {
        session_id,
        current: session.current_item(store)?,
        remaining: session.remaining(),
        completed: session.completed_count(),
        complete: session.is_complete(),
    })
}

/// POST /api/sessions
/// Starts a session over the listed items, or over everything due now
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<Json<SessionView>> {
    let mut sessions = state.sessions()?;
    let mut store = state.store()?;

    // finished sessions are only kept until the learner goes back to seeding
    let before = sessions.len();
    sessions.retain(|_, session| !session.is_complete());
    if sessions.len() < before {
        tracing::debug!("Evicted {} completed sessions", before - sessions.len());
    }

    let items = match payload.item_ids {
        Some(ids) => ids
            .into_iter()
            .map(|id| {
                store
                    .get(id)?
                    .ok_or_else(|| ApiError::NotFound(format!("Item {}", id)))
            })
            .collect::<Result<Vec<_>>>()?,
        None => store.query_due(Utc::now())?,
    };

    let session = Session::start(&mut *store, items)?;
    let session_id = Uuid::new_v4();
    let response = view(session_id, &session, &store)?;

    tracing::info!("Started session {} with {} items", session_id, session.remaining());
    sessions.insert(session_id, session);

    Ok(Json(response))
}

/// GET /api/sessions/:id
pub async fn get(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>> {
    let sessions = state.sessions()?;
    let store = state.store()?;

    let session = sessions
        .get(&session_id)
        .ok_or_else(|| session_not_found(session_id))?;

    Ok(Json(view(session_id, session, &store)?))
}

/// POST /api/sessions/:id/review
/// Rates the current item of the session
pub async fn review(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<ReviewRequest>,
) -> Result<Json<SessionOutcome>> {
    let rating: Rating = payload.rating.parse()?;

    let mut sessions = state.sessions()?;
    let mut store = state.store()?;

    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| session_not_found(session_id))?;

    let outcome = session.rate(&mut *store, payload.item_id, rating, Utc::now())?;

    if outcome.session_complete {
        tracing::info!(
            "Session {} complete: {} items reviewed",
            session_id,
            outcome.completed
        );
    }

    Ok(Json(outcome))
}

/// DELETE /api/sessions/:id
/// Ends a session, discarding whatever is left in its queue
pub async fn end(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSummary>> {
    let session = state
        .sessions()?
        .remove(&session_id)
        .ok_or_else(|| session_not_found(session_id))?;

    let summary = session.summary();
    tracing::info!(
        "Ended session {}: {} completed, {} left",
        session_id,
        summary.completed,
        summary.remaining
    );

    Ok(Json(summary))
}
