use std::sync::RwLock;

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{
    DailyFeedReport, EggProductionReport, FinanceTransaction, Flock, InventoryItem,
    MedicineReport, MortalityReport, SecurityLog,
};

/// Inclusive calendar-date bounds for report filtering. Either side may be
/// open; an inverted range matches nothing.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// All shared farm state: the flock ledger plus the append-only report
/// collections. Report lists are kept newest-first.
#[derive(Debug, Default)]
pub struct FarmData {
    pub flocks: Vec<Flock>,
    pub feed_reports: Vec<DailyFeedReport>,
    pub mortality_reports: Vec<MortalityReport>,
    pub medicine_reports: Vec<MedicineReport>,
    pub egg_reports: Vec<EggProductionReport>,
    pub finance_transactions: Vec<FinanceTransaction>,
    pub inventory: Vec<InventoryItem>,
    pub security_logs: Vec<SecurityLog>,
}

impl FarmData {
    pub fn flock(&self, id: Uuid) -> Option<&Flock> {
        self.flocks.iter().find(|flock| flock.id == id)
    }

    pub fn flock_mut(&mut self, id: Uuid) -> Option<&mut Flock> {
        self.flocks.iter_mut().find(|flock| flock.id == id)
    }
}

/// Owner of all mutable farm state. Every submission runs its report append
/// and ledger mutation under one write guard, so reads never observe a
/// report whose ledger effect has not landed yet.
#[derive(Debug, Default)]
pub struct FarmStore {
    inner: RwLock<FarmData>,
}

impl FarmStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: FarmData) -> Self {
        Self {
            inner: RwLock::new(data),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&FarmData) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&guard)
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut FarmData) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

/// Filters a report list to entries whose date falls inside the range,
/// preserving the caller's ordering.
pub fn filter_by_date<'a, T>(
    items: &'a [T],
    range: DateRange,
    date_of: impl Fn(&T) -> NaiveDate,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| range.contains(date_of(item)))
        .collect()
}
