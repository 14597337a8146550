//! Shared application state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use engstudy_core::{MemoryStore, Session};
use uuid::Uuid;

use crate::error::{ApiError, Result};

/// Item store and live sessions.
///
/// The store mutex serializes every write to an item's schedule. Handlers
/// that need both locks take `sessions` first.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<Mutex<MemoryStore>>,
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> Result<MutexGuard<'_, MemoryStore>> {
        self.store
            .lock()
            .map_err(|_| ApiError::Internal("item store lock poisoned".to_string()))
    }

    pub fn sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>> {
        self.sessions
            .lock()
            .map_err(|_| ApiError::Internal("session map lock poisoned".to_string()))
    }
}
