use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::{InventoryItem, NewInventoryItem};
use crate::services::metrics;
use crate::store::FarmStore;

/// Service for farm-wide stock items.
#[derive(Clone)]
pub struct InventoryService {
    store: Arc<FarmStore>,
    event_sender: EventSender,
}

impl InventoryService {
    pub fn new(store: Arc<FarmStore>, event_sender: EventSender) -> Self {
        Self {
            store,
            event_sender,
        }
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn add_item(&self, input: NewInventoryItem) -> Result<InventoryItem, ServiceError> {
        input.validate()?;

        let item = self.store.write(|data| {
            let item = InventoryItem {
                id: Uuid::new_v4(),
                name: input.name,
                category: input.category,
                unit: input.unit,
                stock: input.stock,
                low_stock_threshold: input.low_stock_threshold,
                supplier: input.supplier,
            };
            data.inventory.insert(0, item.clone());
            item
        });

        let low_stock = item.is_low_stock();
        self.event_sender
            .send(Event::InventoryItemRegistered {
                item_id: item.id,
                name: item.name.clone(),
                low_stock,
            })
            .await
            .map_err(ServiceError::EventError)?;

        if low_stock {
            info!(item_id = %item.id, stock = item.stock, "item registered already below threshold");
        }
        Ok(item)
    }

    pub async fn list_items(&self) -> Vec<InventoryItem> {
        self.store.read(|data| data.inventory.clone())
    }

    /// Items at or below their threshold, recomputed on every read.
    pub async fn low_stock_items(&self) -> Vec<InventoryItem> {
        self.store
            .read(|data| metrics::low_stock_items(&data.inventory))
    }
}
