use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::info;
use uuid::Uuid;

use crate::models::TransactionDirection;

/// Domain events emitted by every mutating operation. The processor logs
/// them; the UI layer surfaces the same submissions as transient
/// notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    FlockRegistered {
        flock_id: Uuid,
        name: String,
        initial_bird_count: i64,
    },
    FeedReportRecorded {
        report_id: Uuid,
        flock_id: Uuid,
        total_feed_used_kg: f64,
    },
    MortalityRecorded {
        report_id: Uuid,
        flock_id: Uuid,
        total: i64,
        current_bird_count: i64,
    },
    MedicineReportRecorded {
        report_id: Uuid,
        flock_id: Uuid,
        medicine_name: String,
    },
    EggProductionRecorded {
        report_id: Uuid,
        flock_id: Uuid,
        eggs_today: i64,
    },
    FinanceTransactionRecorded {
        transaction_id: Uuid,
        direction: TransactionDirection,
        amount: Decimal,
    },
    InventoryItemRegistered {
        item_id: Uuid,
        name: String,
        low_stock: bool,
    },
    SecurityLogRecorded {
        log_id: Uuid,
        vehicle_number: String,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Drains the event channel, logging each event. Runs until every sender is
/// dropped.
pub async fn process_events(mut receiver: mpsc::Receiver<Event>) {
    while let Some(event) = receiver.recv().await {
        info!(event = ?event, "domain event");
    }
    info!("event channel closed; processor exiting");
}
