use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::{Flock, NewFlock};
use crate::store::FarmStore;

/// Service owning flock registration and lookup. Ledger mutations triggered
/// by report submissions live in `ReportService`, which goes through the
/// same store.
#[derive(Clone)]
pub struct FlockService {
    store: Arc<FarmStore>,
    event_sender: EventSender,
}

impl FlockService {
    pub fn new(store: Arc<FarmStore>, event_sender: EventSender) -> Self {
        Self {
            store,
            event_sender,
        }
    }

    /// Registers a new flock with a fresh identifier, the current bird
    /// count equal to the initial count, and all cumulative counters zero.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn register_flock(&self, input: NewFlock) -> Result<Flock, ServiceError> {
        input.validate()?;

        let flock = self.store.write(|data| {
            let flock = Flock::register(input);
            data.flocks.push(flock.clone());
            flock
        });

        self.event_sender
            .send(Event::FlockRegistered {
                flock_id: flock.id,
                name: flock.name.clone(),
                initial_bird_count: flock.initial_bird_count,
            })
            .await
            .map_err(ServiceError::EventError)?;

        info!(flock_id = %flock.id, "registered flock");
        Ok(flock)
    }

    pub async fn list_flocks(&self) -> Vec<Flock> {
        self.store.read(|data| data.flocks.clone())
    }

    pub async fn get_flock(&self, id: Uuid) -> Result<Flock, ServiceError> {
        self.store
            .read(|data| data.flock(id).cloned())
            .ok_or_else(|| ServiceError::NotFound(format!("flock {}", id)))
    }
}
