//! Study session queue.
//!
//! A session serves one item at a time. Rating the current item `again`
//! moves it to the back of the queue; any other rating removes it for the
//! rest of the sitting. Items leaving the queue stay in the store with their
//! updated schedule.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, ReviewError};
use crate::scheduler::{FixedIntervals, Scheduler};
use crate::store::ItemStore;
use crate::types::{Item, Rating};

/// Outcome of rating the current item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// The item with its updated schedule.
    pub item: Item,
    pub remaining: usize,
    pub completed: usize,
    pub requeued: bool,
    pub session_complete: bool,
}

/// End-of-session report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub completed: usize,
    pub remaining: usize,
    pub requeues: usize,
}

/// One review sitting over an in-memory queue of item ids.
pub struct Session {
    queue: VecDeque<Uuid>,
    completed: usize,
    requeues: usize,
    scheduler: Box<dyn Scheduler>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("queue", &self.queue)
            .field("completed", &self.completed)
            .field("requeues", &self.requeues)
            .field("scheduler", &self.scheduler.name())
            .finish()
    }
}

impl Session {
    /// Start a session over exactly `items`, in the given order, using the
    /// fixed-interval scheduler.
    pub fn start<S: ItemStore + ?Sized>(store: &mut S, items: Vec<Item>) -> Result<Self> {
        Self::with_scheduler(store, items, Box::new(FixedIntervals::default()))
    }

    /// Start a session with a specific scheduler.
    ///
    /// Items the store does not hold yet are written to it; an item the
    /// store already has keeps its stored schedule, whatever the copy passed
    /// in says. A repeated id keeps only its first position in the queue.
    pub fn with_scheduler<S: ItemStore + ?Sized>(
        store: &mut S,
        items: Vec<Item>,
        scheduler: Box<dyn Scheduler>,
    ) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        let mut queue = VecDeque::with_capacity(items.len());

        for item in items {
            let id = item.id();
            if !seen.insert(id) {
                debug!(item = %id, "dropping repeated item from session seed");
                continue;
            }
            if store.get(id)?.is_none() {
                store.upsert(item)?;
            }
            queue.push_back(id);
        }

        debug!(size = queue.len(), scheduler = scheduler.name(), "session started");

        Ok(Self {
            queue,
            completed: 0,
            requeues: 0,
            scheduler,
        })
    }

    /// Id of the item at the head of the queue.
    pub fn current_id(&self) -> Option<Uuid> {
        self.queue.front().copied()
    }

    /// The item at the head of the queue; `None` once the session is complete.
    pub fn current_item<S: ItemStore + ?Sized>(&self, store: &S) -> Result<Option<Item>> {
        match self.current_id() {
            Some(id) => store.get(id)?.map(Some).ok_or(ReviewError::ItemNotFound(id)),
            None => Ok(None),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Items removed from the queue so far.
    pub fn completed_count(&self) -> usize {
        self.completed
    }

    pub fn is_complete(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queue order, head first.
    pub fn queue_ids(&self) -> Vec<Uuid> {
        self.queue.iter().copied().collect()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            completed: self.completed,
            remaining: self.queue.len(),
            requeues: self.requeues,
        }
    }

    /// Rate the current item.
    ///
    /// `item_id` must be the head of the queue. The updated item is written
    /// to the store before the queue moves, so a failed write leaves the
    /// session exactly as it was.
    pub fn rate<S: ItemStore + ?Sized>(
        &mut self,
        store: &mut S,
        item_id: Uuid,
        rating: Rating,
        now: DateTime<Utc>,
    ) -> Result<SessionOutcome> {
        let expected = self.current_id().ok_or(ReviewError::EmptySession)?;
        if expected != item_id {
            return Err(ReviewError::StaleItem {
                expected,
                got: item_id,
            });
        }

        let mut item = store
            .get(item_id)?
            .ok_or(ReviewError::ItemNotFound(item_id))?;
        let result = self.scheduler.schedule(&item, rating, now);
        item.apply(&result);
        store.upsert(item.clone())?;

        self.queue.pop_front();
        let requeued = rating == Rating::Again;
        if requeued {
            self.queue.push_back(item_id);
            self.requeues += 1;
        } else {
            self.completed += 1;
        }

        debug!(
            item = %item_id,
            %rating,
            remaining = self.queue.len(),
            completed = self.completed,
            "rated item"
        );

        Ok(SessionOutcome {
            item,
            remaining: self.queue.len(),
            completed: self.completed,
            requeued,
            session_complete: self.queue.is_empty(),
        })
    }
}
