use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;
use validator::Validate;

use super::egg::EggCategoryProduction;

/// Egg size/grade categories tracked per production report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EggSizeCategory {
    Starter,
    Medium,
    Standard,
    Jumbo,
    Dirty,
    Broken,
    Liquid,
}

/// Daily egg production record for one flock: opening stock, today's
/// production and today's sales per size category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EggProductionReport {
    pub id: Uuid,
    pub date: NaiveDate,
    pub flock_id: Uuid,
    pub starter: EggCategoryProduction,
    pub medium: EggCategoryProduction,
    pub standard: EggCategoryProduction,
    pub jumbo: EggCategoryProduction,
    pub dirty: EggCategoryProduction,
    pub broken: EggCategoryProduction,
    pub liquid: EggCategoryProduction,
}

impl EggProductionReport {
    pub fn categories(&self) -> [(EggSizeCategory, &EggCategoryProduction); 7] {
        [
            (EggSizeCategory::Starter, &self.starter),
            (EggSizeCategory::Medium, &self.medium),
            (EggSizeCategory::Standard, &self.standard),
            (EggSizeCategory::Jumbo, &self.jumbo),
            (EggSizeCategory::Dirty, &self.dirty),
            (EggSizeCategory::Broken, &self.broken),
            (EggSizeCategory::Liquid, &self.liquid),
        ]
    }

    /// Total eggs produced today across all size categories.
    pub fn total_eggs_today(&self) -> i64 {
        self.categories()
            .iter()
            .map(|(_, category)| category.today.total())
            .sum()
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewEggProductionReport {
    pub date: NaiveDate,
    pub flock_id: Uuid,
    #[serde(default)]
    pub starter: EggCategoryProduction,
    #[serde(default)]
    pub medium: EggCategoryProduction,
    #[serde(default)]
    pub standard: EggCategoryProduction,
    #[serde(default)]
    pub jumbo: EggCategoryProduction,
    #[serde(default)]
    pub dirty: EggCategoryProduction,
    #[serde(default)]
    pub broken: EggCategoryProduction,
    #[serde(default)]
    pub liquid: EggCategoryProduction,
}

impl NewEggProductionReport {
    pub fn total_eggs_today(&self) -> i64 {
        [
            &self.starter,
            &self.medium,
            &self.standard,
            &self.jumbo,
            &self.dirty,
            &self.broken,
            &self.liquid,
        ]
        .iter()
        .map(|category| category.today.total())
        .sum()
    }
}
