use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::clock::Clock;
use crate::models::{
    DailyFeedReport, EggCategoryProduction, EggProductionReport, EggStock, FinanceTransaction,
    Flock, GateMovement, InventoryCategory, InventoryItem, InventoryUnit, MedicineReport,
    MortalityReport, SecurityLog, TransactionDirection,
};
use crate::store::FarmData;

fn flock(
    name: &str,
    breed: &str,
    arrival: NaiveDate,
    initial: i64,
    current: i64,
    cost_per_chick: rust_decimal::Decimal,
    total_feed_kg: f64,
    total_eggs: i64,
) -> Flock {
    Flock {
        id: Uuid::new_v4(),
        name: name.to_string(),
        breed: breed.to_string(),
        arrival_date: arrival,
        initial_bird_count: initial,
        current_bird_count: current,
        cost_per_chick,
        total_mortality: initial - current,
        total_feed_kg,
        total_eggs,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// Builds the fixed boot dataset: three flocks with their historical
/// totals, a handful of reports per category, three inventory items and two
/// gate logs. Report dates are anchored to the injected clock so the
/// dashboard paths have data from first boot.
pub fn seed_data(clock: &dyn Clock) -> FarmData {
    let today = clock.today();

    let h1 = flock(
        "H1",
        "Lohmann Brown",
        date(2023, 1, 15),
        5000,
        4850,
        dec!(120),
        55_000.0,
        950_000,
    );
    let h2 = flock(
        "H2",
        "Hy-Line Brown",
        date(2023, 3, 20),
        5000,
        4910,
        dec!(125),
        52_000.0,
        925_000,
    );
    let h3 = flock(
        "H3",
        "ISA Brown",
        date(2023, 6, 10),
        5000,
        4950,
        dec!(122),
        48_000.0,
        890_000,
    );

    let feed_reports = vec![
        DailyFeedReport {
            id: Uuid::new_v4(),
            date: today,
            flock_id: h1.id,
            feed_consumed_per_bird: 110.0,
            water_consumed_normal: 800.0,
            water_consumed_medicated: 0.0,
            opening_stock_feed: 1500.0,
            feed_received: 500.0,
            total_feed_used: 110.0 * 4850.0 / 1000.0,
            bird_count_at_report: 4850,
            remarks: "Normal consumption".to_string(),
        },
        DailyFeedReport {
            id: Uuid::new_v4(),
            date: today,
            flock_id: h2.id,
            feed_consumed_per_bird: 112.0,
            water_consumed_normal: 810.0,
            water_consumed_medicated: 0.0,
            opening_stock_feed: 1800.0,
            feed_received: 0.0,
            total_feed_used: 112.0 * 4910.0 / 1000.0,
            bird_count_at_report: 4910,
            remarks: "Slightly increased water intake".to_string(),
        },
    ];

    let mortality_reports = vec![MortalityReport {
        id: Uuid::new_v4(),
        date: today,
        flock_id: h1.id,
        night_mortality: 2,
        hospital_mortality: 1,
        total: 3,
        remarks: "Normal mortality rate".to_string(),
    }];

    let medicine_reports = vec![MedicineReport {
        id: Uuid::new_v4(),
        date: today,
        flock_id: h1.id,
        medicine_name: "Kanamycin".to_string(),
        dose: "1ml/L".to_string(),
        medicine_used: "4 Bottles".to_string(),
        total_hours: "2 hrs".to_string(),
        remarks: "For respiratory issues".to_string(),
    }];

    let category = |today_stock: EggStock| EggCategoryProduction {
        today: today_stock,
        ..Default::default()
    };

    let egg_reports = vec![EggProductionReport {
        id: Uuid::new_v4(),
        date: today,
        flock_id: h1.id,
        starter: category(EggStock::new(0, 3, 10)),
        medium: category(EggStock::new(2, 20, 0)),
        standard: category(EggStock::new(9, 23, 4)),
        jumbo: category(EggStock::new(1, 3, 4)),
        dirty: EggCategoryProduction::default(),
        broken: category(EggStock::new(0, 1, 20)),
        liquid: category(EggStock::new(0, 0, 10)),
    }];

    let finance_transactions = vec![
        FinanceTransaction {
            id: Uuid::new_v4(),
            date: today,
            voucher_no: "IN-001".to_string(),
            direction: TransactionDirection::Inward,
            source_or_expense_type: "Egg Sales - Local Market".to_string(),
            amount: dec!(55000),
            remarks: "Payment from Tariq Traders".to_string(),
        },
        FinanceTransaction {
            id: Uuid::new_v4(),
            date: today,
            voucher_no: "OUT-001".to_string(),
            direction: TransactionDirection::Outward,
            source_or_expense_type: "Feed Purchase".to_string(),
            amount: dec!(120000),
            remarks: "Paid to Punjab Feeds".to_string(),
        },
        FinanceTransaction {
            id: Uuid::new_v4(),
            date: today,
            voucher_no: "OUT-002".to_string(),
            direction: TransactionDirection::Outward,
            source_or_expense_type: "Diesel".to_string(),
            amount: dec!(5000),
            remarks: "For generator".to_string(),
        },
    ];

    let inventory = vec![
        InventoryItem {
            id: Uuid::new_v4(),
            name: "Layer Feed A".to_string(),
            category: InventoryCategory::Feed,
            unit: InventoryUnit::Kg,
            stock: 15_000.0,
            low_stock_threshold: 5_000.0,
            supplier: "Punjab Feeds".to_string(),
        },
        InventoryItem {
            id: Uuid::new_v4(),
            name: "Calcium Vita".to_string(),
            category: InventoryCategory::Medicine,
            unit: InventoryUnit::Bottles,
            stock: 50.0,
            low_stock_threshold: 10.0,
            supplier: "Pharma Solutions".to_string(),
        },
        InventoryItem {
            id: Uuid::new_v4(),
            name: "Egg Trays".to_string(),
            category: InventoryCategory::Trays,
            unit: InventoryUnit::Units,
            stock: 20_000.0,
            low_stock_threshold: 5_000.0,
            supplier: "Packaging Co.".to_string(),
        },
    ];

    let at = |h: u32, m: u32, s: u32| {
        Utc.from_utc_datetime(
            &today
                .and_hms_opt(h, m, s)
                .expect("valid seed timestamp"),
        )
    };

    let security_logs = vec![
        SecurityLog {
            id: Uuid::new_v4(),
            timestamp: at(9, 15, 23),
            movement: GateMovement::Inward,
            vehicle_number: "MNC-1234".to_string(),
            driver_name: "Ali Khan".to_string(),
            material_type: "Feed".to_string(),
            quantity: "200 bags".to_string(),
            photo_or_doc_url: Some("https://picsum.photos/200".to_string()),
        },
        SecurityLog {
            id: Uuid::new_v4(),
            timestamp: at(11, 45, 5),
            movement: GateMovement::Outward,
            vehicle_number: "LET-5678".to_string(),
            driver_name: "Bilal Ahmed".to_string(),
            material_type: "Eggs".to_string(),
            quantity: "500 trays".to_string(),
            photo_or_doc_url: Some("https://picsum.photos/201".to_string()),
        },
    ];

    FarmData {
        flocks: vec![h1, h2, h3],
        feed_reports,
        mortality_reports,
        medicine_reports,
        egg_reports,
        finance_transactions,
        inventory,
        security_logs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn seed_matches_ledger_invariant() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 7, 27, 8, 0, 0).unwrap());
        let data = seed_data(&clock);
        assert_eq!(data.flocks.len(), 3);
        for flock in &data.flocks {
            assert_eq!(
                flock.current_bird_count,
                flock.initial_bird_count - flock.total_mortality
            );
        }
        assert_eq!(data.feed_reports.len(), 2);
        assert_eq!(data.finance_transactions.len(), 3);
        assert!(data.feed_reports.iter().all(|r| r.date == clock.today()));
    }
}
