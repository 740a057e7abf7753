use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::debug;

use crate::models::{CourseId, LectureId};

pub type StoreEventTx = mpsc::Sender<Arc<StoreEvent>>;
pub type StoreEventRx = mpsc::Receiver<Arc<StoreEvent>>;

pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    CourseAdded {
        course_id: CourseId,
        revision: u64,
        at: DateTime<Utc>,
    },
    LectureAdded {
        course_id: CourseId,
        lecture_id: LectureId,
        number: u32,
        revision: u64,
        at: DateTime<Utc>,
    },
}

impl StoreEvent {
    pub fn revision(&self) -> u64 {
        match self {
            StoreEvent::CourseAdded { revision, .. }
            | StoreEvent::LectureAdded { revision, .. } => *revision,
        }
    }
}

/// Fan-out list of store observers.
///
/// Sends are best-effort: a full channel loses the event, a closed one is
/// dropped from the list.
#[derive(Debug, Default)]
pub struct Subscribers {
    senders: Vec<StoreEventTx>,
}

impl Subscribers {
    pub fn subscribe(&mut self) -> StoreEventRx {
        let (tx, rx) = mpsc::channel(DEFAULT_EVENT_CHANNEL_CAPACITY);
        self.senders.push(tx);
        rx
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }

    pub fn publish(&mut self, event: StoreEvent) {
        let event = Arc::new(event);
        self.senders.retain(|tx| match tx.try_send(Arc::clone(&event)) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                debug!("subscriber lagging, dropped revision {}", event.revision());
                true
            }
            Err(TrySendError::Closed(_)) => false,
        });
    }
}
