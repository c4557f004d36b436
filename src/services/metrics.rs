use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::clock::SharedClock;
use crate::models::{EggProductionReport, FinanceTransaction, Flock, InventoryItem, TransactionDirection};
use crate::store::{filter_by_date, DateRange, FarmData, FarmStore};

/// Today's headline numbers for the dashboard cards.
#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_birds: i64,
    pub eggs_collected: i64,
    pub feed_used_kg: f64,
    pub mortality: i64,
    pub cash_inward: Decimal,
    pub cash_outward: Decimal,
}

/// One day of the per-flock egg production trend.
#[derive(Debug, Clone, Serialize)]
pub struct EggTrendPoint {
    pub date: NaiveDate,
    pub flocks: Vec<FlockProduction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlockProduction {
    pub flock_id: Uuid,
    pub flock_name: String,
    pub eggs: i64,
}

/// One day of the aggregate feed usage trend.
#[derive(Debug, Clone, Serialize)]
pub struct FeedTrendPoint {
    pub date: NaiveDate,
    pub feed_kg: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardTrends {
    pub egg_production: Vec<EggTrendPoint>,
    pub feed_usage: Vec<FeedTrendPoint>,
}

/// All-time cash position. The running balance covers the full transaction
/// history even though the summary cards show same-day flow only.
#[derive(Debug, Clone, Serialize)]
pub struct CashBalances {
    pub opening: Decimal,
    pub total_inward: Decimal,
    pub total_outward: Decimal,
    pub closing: Decimal,
}

/// Per-category totals for one egg production report row.
#[derive(Debug, Clone, Serialize)]
pub struct EggCategoryTotals {
    pub starter: i64,
    pub medium: i64,
    pub standard: i64,
    pub jumbo: i64,
    pub dirty: i64,
    pub broken: i64,
    pub liquid: i64,
}

/// A report-page row: per-category totals, the day's total, and the
/// production percentage against the flock's current head count.
#[derive(Debug, Clone, Serialize)]
pub struct EggProductionRow {
    pub report_id: Uuid,
    pub date: NaiveDate,
    pub flock_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flock_name: Option<String>,
    pub categories: EggCategoryTotals,
    pub total_eggs: i64,
    /// Not applicable when the flock cannot be resolved or has no birds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_percentage: Option<f64>,
}

/// Sums today's headline numbers from a store snapshot. Calendar-date
/// equality only; feed mass comes from the stored per-report figure.
pub fn todays_summary(data: &FarmData, today: NaiveDate) -> DailySummary {
    let total_birds = data.flocks.iter().map(|f| f.current_bird_count).sum();

    let eggs_collected = data
        .egg_reports
        .iter()
        .filter(|r| r.date == today)
        .map(|r| r.total_eggs_today())
        .sum();

    let feed_used_kg = data
        .feed_reports
        .iter()
        .filter(|r| r.date == today)
        .map(|r| r.total_feed_used)
        .sum();

    let mortality = data
        .mortality_reports
        .iter()
        .filter(|r| r.date == today)
        .map(|r| r.total)
        .sum();

    let cash_on = |direction: TransactionDirection| -> Decimal {
        data.finance_transactions
            .iter()
            .filter(|t| t.date == today && t.direction == direction)
            .map(|t| t.amount)
            .sum()
    };

    DailySummary {
        date: today,
        total_birds,
        eggs_collected,
        feed_used_kg,
        mortality,
        cash_inward: cash_on(TransactionDirection::Inward),
        cash_outward: cash_on(TransactionDirection::Outward),
    }
}

/// The last `days` calendar days inclusive of `today`, oldest first.
fn trend_window(today: NaiveDate, days: usize) -> Vec<NaiveDate> {
    (0..days as i64)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect()
}

/// Per-flock egg production for each day of the window, zero-filled when a
/// flock has no report that day.
pub fn egg_production_trend(data: &FarmData, today: NaiveDate, days: usize) -> Vec<EggTrendPoint> {
    trend_window(today, days)
        .into_iter()
        .map(|date| EggTrendPoint {
            date,
            flocks: data
                .flocks
                .iter()
                .map(|flock| FlockProduction {
                    flock_id: flock.id,
                    flock_name: flock.name.clone(),
                    eggs: data
                        .egg_reports
                        .iter()
                        .filter(|r| r.date == date && r.flock_id == flock.id)
                        .map(|r| r.total_eggs_today())
                        .sum(),
                })
                .collect(),
        })
        .collect()
}

/// Aggregate feed usage for each day of the window, zero-filled.
pub fn feed_usage_trend(data: &FarmData, today: NaiveDate, days: usize) -> Vec<FeedTrendPoint> {
    trend_window(today, days)
        .into_iter()
        .map(|date| FeedTrendPoint {
            date,
            feed_kg: data
                .feed_reports
                .iter()
                .filter(|r| r.date == date)
                .map(|r| r.total_feed_used)
                .sum(),
        })
        .collect()
}

/// Items at or below their threshold, in stored order.
pub fn low_stock_items(items: &[InventoryItem]) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|item| item.is_low_stock())
        .cloned()
        .collect()
}

/// Today's production against the flock's current head count, as a
/// percentage rounded to two decimals. `None` when the flock is missing or
/// empty.
pub fn production_percentage(report: &EggProductionReport, flock: Option<&Flock>) -> Option<f64> {
    let flock = flock?;
    if flock.current_bird_count <= 0 {
        return None;
    }
    let pct = report.total_eggs_today() as f64 / flock.current_bird_count as f64 * 100.0;
    Some((pct * 100.0).round() / 100.0)
}

/// All-time cash position over the full transaction history.
pub fn cash_balances(transactions: &[FinanceTransaction], opening: Decimal) -> CashBalances {
    let sum_of = |direction: TransactionDirection| -> Decimal {
        transactions
            .iter()
            .filter(|t| t.direction == direction)
            .map(|t| t.amount)
            .sum()
    };
    let total_inward = sum_of(TransactionDirection::Inward);
    let total_outward = sum_of(TransactionDirection::Outward);

    CashBalances {
        opening,
        total_inward,
        total_outward,
        closing: opening + total_inward - total_outward,
    }
}

fn egg_production_row(report: &EggProductionReport, flock: Option<&Flock>) -> EggProductionRow {
    EggProductionRow {
        report_id: report.id,
        date: report.date,
        flock_id: report.flock_id,
        flock_name: flock.map(|f| f.name.clone()),
        categories: EggCategoryTotals {
            starter: report.starter.today.total(),
            medium: report.medium.today.total(),
            standard: report.standard.today.total(),
            jumbo: report.jumbo.today.total(),
            dirty: report.dirty.today.total(),
            broken: report.broken.today.total(),
            liquid: report.liquid.today.total(),
        },
        total_eggs: report.total_eggs_today(),
        production_percentage: production_percentage(report, flock),
    }
}

/// Derived metrics engine. Holds no state of its own; every method reads a
/// snapshot and computes.
#[derive(Clone)]
pub struct MetricsService {
    store: Arc<FarmStore>,
    clock: SharedClock,
    opening_balance: Decimal,
    trend_window_days: usize,
}

impl MetricsService {
    pub fn new(
        store: Arc<FarmStore>,
        clock: SharedClock,
        opening_balance: Decimal,
        trend_window_days: usize,
    ) -> Self {
        Self {
            store,
            clock,
            opening_balance,
            trend_window_days,
        }
    }

    pub async fn todays_summary(&self) -> DailySummary {
        let today = self.clock.today();
        self.store.read(|data| todays_summary(data, today))
    }

    pub async fn trends(&self) -> DashboardTrends {
        let today = self.clock.today();
        let days = self.trend_window_days;
        self.store.read(|data| DashboardTrends {
            egg_production: egg_production_trend(data, today, days),
            feed_usage: feed_usage_trend(data, today, days),
        })
    }

    pub async fn low_stock_items(&self) -> Vec<InventoryItem> {
        self.store.read(|data| low_stock_items(&data.inventory))
    }

    pub async fn cash_balances(&self) -> CashBalances {
        self.store
            .read(|data| cash_balances(&data.finance_transactions, self.opening_balance))
    }

    /// Report-page rows for egg production inside the range, newest first.
    pub async fn egg_production_rows(&self, range: DateRange) -> Vec<EggProductionRow> {
        self.store.read(|data| {
            let mut rows: Vec<EggProductionRow> =
                filter_by_date(&data.egg_reports, range, |r| r.date)
                    .into_iter()
                    .map(|report| egg_production_row(report, data.flock(report.flock_id)))
                    .collect();
            rows.sort_by(|a, b| b.date.cmp(&a.date));
            rows
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EggCategoryProduction, EggStock, InventoryCategory, InventoryUnit, NewFlock};
    use rust_decimal_macros::dec;

    fn test_date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn flock_named(name: &str, birds: i64) -> Flock {
        Flock::register(NewFlock {
            name: name.into(),
            breed: "Lohmann Brown".into(),
            arrival_date: test_date(1),
            initial_bird_count: birds,
            cost_per_chick: Decimal::ZERO,
        })
    }

    fn egg_report(flock_id: Uuid, date: NaiveDate, standard_today: EggStock) -> EggProductionReport {
        EggProductionReport {
            id: Uuid::new_v4(),
            date,
            flock_id,
            starter: EggCategoryProduction::default(),
            medium: EggCategoryProduction::default(),
            standard: EggCategoryProduction {
                today: standard_today,
                ..Default::default()
            },
            jumbo: EggCategoryProduction::default(),
            dirty: EggCategoryProduction::default(),
            broken: EggCategoryProduction::default(),
            liquid: EggCategoryProduction::default(),
        }
    }

    #[test]
    fn trend_on_empty_store_is_seven_zero_points() {
        let data = FarmData::default();
        let today = test_date(27);

        let feed = feed_usage_trend(&data, today, 7);
        assert_eq!(feed.len(), 7);
        assert_eq!(feed[0].date, test_date(21));
        assert_eq!(feed[6].date, today);
        assert!(feed.iter().all(|p| p.feed_kg == 0.0));

        let eggs = egg_production_trend(&data, today, 7);
        assert_eq!(eggs.len(), 7);
        assert!(eggs.iter().all(|p| p.flocks.is_empty()));
    }

    #[test]
    fn trend_is_zero_filled_per_flock() {
        let flock = flock_named("H1", 4850);
        let flock_id = flock.id;
        let data = FarmData {
            flocks: vec![flock],
            egg_reports: vec![egg_report(flock_id, test_date(26), EggStock::new(0, 10, 0))],
            ..Default::default()
        };

        let trend = egg_production_trend(&data, test_date(27), 7);
        assert_eq!(trend.len(), 7);
        let yesterday = &trend[5];
        assert_eq!(yesterday.flocks[0].eggs, 300);
        let today = &trend[6];
        assert_eq!(today.flocks[0].eggs, 0);
    }

    #[test]
    fn production_percentage_is_two_decimals() {
        let flock = flock_named("H1", 4850);
        let report = egg_report(flock.id, test_date(27), EggStock::new(9, 23, 4));
        // 3934 / 4850 * 100 = 81.11340...
        assert_eq!(production_percentage(&report, Some(&flock)), Some(81.11));
        assert_eq!(production_percentage(&report, None), None);
    }

    #[test]
    fn production_percentage_undefined_for_empty_flock() {
        let mut flock = flock_named("H1", 10);
        flock.current_bird_count = 0;
        let report = egg_report(flock.id, test_date(27), EggStock::new(0, 1, 0));
        assert_eq!(production_percentage(&report, Some(&flock)), None);
    }

    #[test]
    fn cash_balance_is_all_time() {
        let transactions = vec![
            FinanceTransaction {
                id: Uuid::new_v4(),
                date: test_date(1),
                voucher_no: "IN-001".into(),
                direction: TransactionDirection::Inward,
                source_or_expense_type: "Egg Sales".into(),
                amount: dec!(55000),
                remarks: String::new(),
            },
            FinanceTransaction {
                id: Uuid::new_v4(),
                date: test_date(27),
                voucher_no: "OUT-001".into(),
                direction: TransactionDirection::Outward,
                source_or_expense_type: "Feed Purchase".into(),
                amount: dec!(120000),
                remarks: String::new(),
            },
        ];

        let balances = cash_balances(&transactions, dec!(50000));
        assert_eq!(balances.total_inward, dec!(55000));
        assert_eq!(balances.total_outward, dec!(120000));
        assert_eq!(balances.closing, dec!(-15000));
    }

    #[test]
    fn low_stock_boundary_is_inclusive() {
        let item = |stock: f64, threshold: f64| InventoryItem {
            id: Uuid::new_v4(),
            name: "Calcium Vita".into(),
            category: InventoryCategory::Medicine,
            unit: InventoryUnit::Bottles,
            stock,
            low_stock_threshold: threshold,
            supplier: String::new(),
        };
        let items = vec![item(50.0, 10.0), item(10.0, 10.0)];
        let low = low_stock_items(&items);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].stock, 10.0);
    }
}
