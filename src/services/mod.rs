pub mod finance;
pub mod flocks;
pub mod inventory;
pub mod metrics;
pub mod reports;
pub mod security;

use std::sync::Arc;

use crate::clock::SharedClock;
use crate::config::AppConfig;
use crate::events::EventSender;
use crate::store::FarmStore;

/// Services layer encapsulating the business logic used by HTTP handlers.
#[derive(Clone)]
pub struct AppServices {
    pub flocks: Arc<flocks::FlockService>,
    pub reports: Arc<reports::ReportService>,
    pub finance: Arc<finance::FinanceService>,
    pub inventory: Arc<inventory::InventoryService>,
    pub security: Arc<security::SecurityService>,
    pub metrics: Arc<metrics::MetricsService>,
}

impl AppServices {
    pub fn new(
        store: Arc<FarmStore>,
        clock: SharedClock,
        event_sender: EventSender,
        config: &AppConfig,
    ) -> Self {
        Self {
            flocks: Arc::new(flocks::FlockService::new(
                store.clone(),
                event_sender.clone(),
            )),
            reports: Arc::new(reports::ReportService::new(
                store.clone(),
                event_sender.clone(),
            )),
            finance: Arc::new(finance::FinanceService::new(
                store.clone(),
                event_sender.clone(),
            )),
            inventory: Arc::new(inventory::InventoryService::new(
                store.clone(),
                event_sender.clone(),
            )),
            security: Arc::new(security::SecurityService::new(
                store.clone(),
                event_sender,
                clock.clone(),
            )),
            metrics: Arc::new(metrics::MetricsService::new(
                store,
                clock,
                config.finance_opening_balance,
                config.trend_window_days,
            )),
        }
    }
}
