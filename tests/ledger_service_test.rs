//! Service-level tests for the flock ledger: every report submission must
//! leave the stored reports and the flock counters consistent.

mod common;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use farmstead_api::errors::ServiceError;
use farmstead_api::models::{
    EggCategoryProduction, EggStock, NewEggProductionReport, NewFeedReport, NewFlock,
    NewMedicineReport, NewMortalityReport,
};
use rust_decimal::Decimal;
use uuid::Uuid;

use common::{today, TestApp};

fn new_flock(name: &str, birds: i64) -> NewFlock {
    NewFlock {
        name: name.into(),
        breed: "Lohmann Brown".into(),
        arrival_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        initial_bird_count: birds,
        cost_per_chick: Decimal::new(120, 0),
    }
}

fn feed_report(flock_id: Uuid, per_bird: f64) -> NewFeedReport {
    NewFeedReport {
        date: today(),
        flock_id,
        feed_consumed_per_bird: per_bird,
        water_consumed_normal: 800.0,
        water_consumed_medicated: 0.0,
        opening_stock_feed: 1500.0,
        feed_received: 0.0,
        remarks: String::new(),
    }
}

fn mortality_report(flock_id: Uuid, night: i64, hospital: i64) -> NewMortalityReport {
    NewMortalityReport {
        date: today(),
        flock_id,
        night_mortality: night,
        hospital_mortality: hospital,
        remarks: String::new(),
    }
}

fn egg_report(flock_id: Uuid, standard_today: EggStock) -> NewEggProductionReport {
    NewEggProductionReport {
        date: today(),
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

#[tokio::test]
async fn feed_report_uses_headcount_snapshot() {
    let app = TestApp::empty();
    let services = &app.state.services;

    let flock = services
        .flocks
        .register_flock(new_flock("H9", 4850))
        .await
        .expect("register flock");

    let report = services
        .reports
        .record_feed_report(feed_report(flock.id, 110.0))
        .await
        .expect("record feed");

    assert_eq!(report.total_feed_used, 533.5);
    assert_eq!(report.bird_count_at_report, 4850);

    let flock = services.flocks.get_flock(flock.id).await.expect("flock");
    assert_eq!(flock.total_feed_kg, 533.5);
}

#[tokio::test]
async fn mortality_updates_ledger_and_stores_total() {
    let app = TestApp::empty();
    let services = &app.state.services;

    let flock = services
        .flocks
        .register_flock(new_flock("H9", 4850))
        .await
        .expect("register flock");

    let report = services
        .reports
        .record_mortality_report(mortality_report(flock.id, 2, 1))
        .await
        .expect("record mortality");
    assert_eq!(report.total, 3);

    let flock = services.flocks.get_flock(flock.id).await.expect("flock");
    assert_eq!(flock.current_bird_count, 4847);
    assert_eq!(flock.total_mortality, 3);
    assert_eq!(
        flock.current_bird_count,
        flock.initial_bird_count - flock.total_mortality
    );
}

#[tokio::test]
async fn mortality_beyond_headcount_is_rejected_and_stores_nothing() {
    let app = TestApp::empty();
    let services = &app.state.services;

    let flock = services
        .flocks
        .register_flock(new_flock("H9", 10))
        .await
        .expect("register flock");

    let err = services
        .reports
        .record_mortality_report(mortality_report(flock.id, 8, 4))
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::ValidationError(_));

    let flock = services.flocks.get_flock(flock.id).await.expect("flock");
    assert_eq!(flock.current_bird_count, 10);
    assert_eq!(flock.total_mortality, 0);
    assert!(services
        .reports
        .list_mortality_reports(Default::default())
        .await
        .is_empty());
}

#[tokio::test]
async fn unknown_flock_is_a_not_found_error() {
    let app = TestApp::empty();
    let services = &app.state.services;
    let ghost = Uuid::new_v4();

    assert_matches!(
        services
            .reports
            .record_feed_report(feed_report(ghost, 110.0))
            .await
            .unwrap_err(),
        ServiceError::NotFound(_)
    );
    assert_matches!(
        services
            .reports
            .record_mortality_report(mortality_report(ghost, 1, 0))
            .await
            .unwrap_err(),
        ServiceError::NotFound(_)
    );
    assert_matches!(
        services
            .reports
            .record_medicine_report(NewMedicineReport {
                date: today(),
                flock_id: ghost,
                medicine_name: "Kanamycin".into(),
                dose: "1ml/L".into(),
                medicine_used: String::new(),
                total_hours: String::new(),
                remarks: String::new(),
            })
            .await
            .unwrap_err(),
        ServiceError::NotFound(_)
    );
    assert_matches!(
        services
            .reports
            .record_egg_production_report(egg_report(ghost, EggStock::new(0, 1, 0)))
            .await
            .unwrap_err(),
        ServiceError::NotFound(_)
    );

    assert!(services
        .reports
        .list_feed_reports(Default::default())
        .await
        .is_empty());
}

#[tokio::test]
async fn egg_production_accumulates_on_the_flock() {
    let app = TestApp::empty();
    let services = &app.state.services;

    let flock = services
        .flocks
        .register_flock(new_flock("H9", 4850))
        .await
        .expect("register flock");

    services
        .reports
        .record_egg_production_report(egg_report(flock.id, EggStock::new(9, 23, 4)))
        .await
        .expect("record eggs");
    services
        .reports
        .record_egg_production_report(egg_report(flock.id, EggStock::new(0, 1, 0)))
        .await
        .expect("record eggs");

    let flock = services.flocks.get_flock(flock.id).await.expect("flock");
    assert_eq!(flock.total_eggs, 3934 + 30);
}

#[tokio::test]
async fn feed_totals_survive_later_mortality() {
    // The stored feed figure must not drift when the head count changes
    // afterwards.
    let app = TestApp::empty();
    let services = &app.state.services;

    let flock = services
        .flocks
        .register_flock(new_flock("H9", 1000))
        .await
        .expect("register flock");

    let report = services
        .reports
        .record_feed_report(feed_report(flock.id, 100.0))
        .await
        .expect("record feed");
    assert_eq!(report.total_feed_used, 100.0);

    services
        .reports
        .record_mortality_report(mortality_report(flock.id, 500, 0))
        .await
        .expect("record mortality");

    let stored = services
        .reports
        .list_feed_reports(Default::default())
        .await;
    assert_eq!(stored[0].total_feed_used, 100.0);
    assert_eq!(stored[0].bird_count_at_report, 1000);
}
