//! Common test utilities and fixtures for integration tests.
//!
//! `TestContext` wraps an in-memory application state and a test server
//! over the full router, plus helpers for the calls most tests repeat.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::{TestResponse, TestServer};
use serde_json::json;
use uuid::Uuid;

use engstudy_server::models::{ExtractResponse, Item, SessionView};
use engstudy_server::{router, AppState};

/// Test context holding the shared state and a server over it.
pub struct TestContext {
    pub state: AppState,
    pub server: TestServer,
}

impl TestContext {
    pub fn new() -> Self {
        let state = AppState::new();
        let server = TestServer::new(router(state.clone())).expect("failed to build test server");
        Self { state, server }
    }

    /// Extract words from `text` and return the newly stored items.
    pub async fn extract(&self, text: &str) -> Vec<Item> {
        let response = self
            .server
            .post("/api/extract")
            .json(&fixtures::extract_body(text))
            .await;
        response.assert_status_ok();
        response.json::<ExtractResponse>().items
    }

    /// Start a session over the given items.
    pub async fn start_session(&self, items: &[Item]) -> SessionView {
        let ids: Vec<Uuid> = items.iter().map(|i| i.id()).collect();
        let response = self
            .server
            .post("/api/sessions")
            .json(&json!({ "item_ids": ids }))
            .await;
        response.assert_status_ok();
        response.json()
    }

    pub async fn session(&self, session_id: Uuid) -> SessionView {
        let response = self.server.get(&format!("/api/sessions/{}", session_id)).await;
        response.assert_status_ok();
        response.json()
    }

    pub async fn review(&self, session_id: Uuid, item_id: Uuid, rating: &str) -> TestResponse {
        self.server
            .post(&format!("/api/sessions/{}/review", session_id))
            .json(&fixtures::review_body(item_id, rating))
            .await
    }

    /// Texts of the session queue, head first, read from the shared state.
    pub fn queue_texts(&self, session_id: Uuid) -> Vec<String> {
        let sessions = self.state.sessions.lock().unwrap();
        let store = self.state.store.lock().unwrap();
        sessions[&session_id]
            .queue_ids()
            .into_iter()
            .map(|id| {
                engstudy_core::ItemStore::get(&*store, id)
                    .unwrap()
                    .unwrap()
                    .text()
                    .to_string()
            })
            .collect()
    }
}
