use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::{
    DailyFeedReport, EggProductionReport, MedicineReport, MortalityReport, NewEggProductionReport,
    NewFeedReport, NewMedicineReport, NewMortalityReport,
};
use crate::store::{filter_by_date, DateRange, FarmStore};

/// Service recording the flock-scoped daily reports. Every submission
/// appends the report and applies its ledger effect under one store write,
/// so the report lists and the flock counters never diverge.
///
/// Submissions referencing an unknown flock are rejected with a not-found
/// error rather than silently dropped.
#[derive(Clone)]
pub struct ReportService {
    store: Arc<FarmStore>,
    event_sender: EventSender,
}

impl ReportService {
    pub fn new(store: Arc<FarmStore>, event_sender: EventSender) -> Self {
        Self {
            store,
            event_sender,
        }
    }

    /// Records a feed report. The authoritative feed mass is computed here,
    /// once, from grams-per-bird and a snapshot of the flock's current head
    /// count; both figures are stored on the report.
    #[instrument(skip(self, input), fields(flock_id = %input.flock_id))]
    pub async fn record_feed_report(
        &self,
        input: NewFeedReport,
    ) -> Result<DailyFeedReport, ServiceError> {
        input.validate()?;

        let report = self.store.write(|data| {
            let flock = data
                .flock_mut(input.flock_id)
                .ok_or_else(|| ServiceError::NotFound(format!("flock {}", input.flock_id)))?;
            let bird_count_at_report = flock.current_bird_count;
            let total_feed_used = flock.record_feed(input.feed_consumed_per_bird);

            let report = DailyFeedReport {
                id: Uuid::new_v4(),
                date: input.date,
                flock_id: input.flock_id,
                feed_consumed_per_bird: input.feed_consumed_per_bird,
                water_consumed_normal: input.water_consumed_normal,
                water_consumed_medicated: input.water_consumed_medicated,
                opening_stock_feed: input.opening_stock_feed,
                feed_received: input.feed_received,
                total_feed_used,
                bird_count_at_report,
                remarks: input.remarks,
            };
            data.feed_reports.insert(0, report.clone());
            Ok::<_, ServiceError>(report)
        })?;

        self.event_sender
            .send(Event::FeedReportRecorded {
                report_id: report.id,
                flock_id: report.flock_id,
                total_feed_used_kg: report.total_feed_used,
            })
            .await
            .map_err(ServiceError::EventError)?;

        info!(report_id = %report.id, total_feed_used = report.total_feed_used, "recorded feed report");
        Ok(report)
    }

    /// Records a mortality report. The flock's bird count drops by the
    /// combined total; a total exceeding the current count is rejected and
    /// leaves both the list and the ledger untouched.
    #[instrument(skip(self, input), fields(flock_id = %input.flock_id))]
    pub async fn record_mortality_report(
        &self,
        input: NewMortalityReport,
    ) -> Result<MortalityReport, ServiceError> {
        input.validate()?;
        let total = input.total();

        let (report, current_bird_count) = self.store.write(|data| {
            let flock = data
                .flock_mut(input.flock_id)
                .ok_or_else(|| ServiceError::NotFound(format!("flock {}", input.flock_id)))?;
            flock.record_mortality(total)?;
            let current_bird_count = flock.current_bird_count;

            let report = MortalityReport {
                id: Uuid::new_v4(),
                date: input.date,
                flock_id: input.flock_id,
                night_mortality: input.night_mortality,
                hospital_mortality: input.hospital_mortality,
                total,
                remarks: input.remarks,
            };
            data.mortality_reports.insert(0, report.clone());
            Ok::<_, ServiceError>((report, current_bird_count))
        })?;

        self.event_sender
            .send(Event::MortalityRecorded {
                report_id: report.id,
                flock_id: report.flock_id,
                total,
                current_bird_count,
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(report)
    }

    /// Records a medicine report. No ledger effect; the flock reference is
    /// still checked.
    #[instrument(skip(self, input), fields(flock_id = %input.flock_id))]
    pub async fn record_medicine_report(
        &self,
        input: NewMedicineReport,
    ) -> Result<MedicineReport, ServiceError> {
        input.validate()?;

        let report = self.store.write(|data| {
            if data.flock(input.flock_id).is_none() {
                return Err(ServiceError::NotFound(format!("flock {}", input.flock_id)));
            }

            let report = MedicineReport {
                id: Uuid::new_v4(),
                date: input.date,
                flock_id: input.flock_id,
                medicine_name: input.medicine_name,
                dose: input.dose,
                medicine_used: input.medicine_used,
                total_hours: input.total_hours,
                remarks: input.remarks,
            };
            data.medicine_reports.insert(0, report.clone());
            Ok(report)
        })?;

        self.event_sender
            .send(Event::MedicineReportRecorded {
                report_id: report.id,
                flock_id: report.flock_id,
                medicine_name: report.medicine_name.clone(),
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(report)
    }

    /// Records an egg production report and adds today's production across
    /// all size categories to the flock's cumulative egg count.
    #[instrument(skip(self, input), fields(flock_id = %input.flock_id))]
    pub async fn record_egg_production_report(
        &self,
        input: NewEggProductionReport,
    ) -> Result<EggProductionReport, ServiceError> {
        input.validate()?;
        let eggs_today = input.total_eggs_today();

        let report = self.store.write(|data| {
            let flock = data
                .flock_mut(input.flock_id)
                .ok_or_else(|| ServiceError::NotFound(format!("flock {}", input.flock_id)))?;
            flock.record_eggs(eggs_today);

            let report = EggProductionReport {
                id: Uuid::new_v4(),
                date: input.date,
                flock_id: input.flock_id,
                starter: input.starter,
                medium: input.medium,
                standard: input.standard,
                jumbo: input.jumbo,
                dirty: input.dirty,
                broken: input.broken,
                liquid: input.liquid,
            };
            data.egg_reports.insert(0, report.clone());
            Ok::<_, ServiceError>(report)
        })?;

        self.event_sender
            .send(Event::EggProductionRecorded {
                report_id: report.id,
                flock_id: report.flock_id,
                eggs_today,
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(report)
    }

    pub async fn list_feed_reports(&self, range: DateRange) -> Vec<DailyFeedReport> {
        self.store.read(|data| {
            let mut reports: Vec<DailyFeedReport> = filter_by_date(&data.feed_reports, range, |r| r.date)
                .into_iter()
                .cloned()
                .collect();
            reports.sort_by(|a, b| b.date.cmp(&a.date));
            reports
        })
    }

    pub async fn list_mortality_reports(&self, range: DateRange) -> Vec<MortalityReport> {
        self.store.read(|data| {
            let mut reports: Vec<MortalityReport> =
                filter_by_date(&data.mortality_reports, range, |r| r.date)
                    .into_iter()
                    .cloned()
                    .collect();
            reports.sort_by(|a, b| b.date.cmp(&a.date));
            reports
        })
    }

    pub async fn list_medicine_reports(&self, range: DateRange) -> Vec<MedicineReport> {
        self.store.read(|data| {
            let mut reports: Vec<MedicineReport> =
                filter_by_date(&data.medicine_reports, range, |r| r.date)
                    .into_iter()
                    .cloned()
                    .collect();
            reports.sort_by(|a, b| b.date.cmp(&a.date));
            reports
        })
    }

    pub async fn list_egg_reports(&self, range: DateRange) -> Vec<EggProductionReport> {
        self.store.read(|data| {
            let mut reports: Vec<EggProductionReport> =
                filter_by_date(&data.egg_reports, range, |r| r.date)
                    .into_iter()
                    .cloned()
                    .collect();
            reports.sort_by(|a, b| b.date.cmp(&a.date));
            reports
        })
    }
}
