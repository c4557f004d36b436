use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::clock::SharedClock;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::{NewSecurityLog, SecurityLog};
use crate::store::FarmStore;

/// Service for the farm gate log.
#[derive(Clone)]
pub struct SecurityService {
    store: Arc<FarmStore>,
    event_sender: EventSender,
    clock: SharedClock,
}

impl SecurityService {
    pub fn new(store: Arc<FarmStore>, event_sender: EventSender, clock: SharedClock) -> Self {
        Self {
            store,
            event_sender,
            clock,
        }
    }

    #[instrument(skip(self, input), fields(vehicle = %input.vehicle_number))]
    pub async fn record_log(&self, input: NewSecurityLog) -> Result<SecurityLog, ServiceError> {
        input.validate()?;

        let timestamp = input.timestamp.unwrap_or_else(|| self.clock.now());
        let log = self.store.write(|data| {
            let log = SecurityLog {
                id: Uuid::new_v4(),
                timestamp,
                movement: input.movement,
                vehicle_number: input.vehicle_number,
                driver_name: input.driver_name,
                material_type: input.material_type,
                quantity: input.quantity,
                photo_or_doc_url: input.photo_or_doc_url,
            };
            data.security_logs.insert(0, log.clone());
            log
        });

        self.event_sender
            .send(Event::SecurityLogRecorded {
                log_id: log.id,
                vehicle_number: log.vehicle_number.clone(),
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(log)
    }

    pub async fn list_logs(&self) -> Vec<SecurityLog> {
        self.store.read(|data| {
            let mut logs = data.security_logs.clone();
            logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            logs
        })
    }
}
