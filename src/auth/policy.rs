use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumString};

/// The five operator roles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Role {
    Admin,
    Manager,
    Worker,
    Accountant,
    #[serde(rename = "Security Guard")]
    #[strum(to_string = "Security Guard", serialize = "SecurityGuard")]
    SecurityGuard,
}

/// Navigable pages of the dashboard UI.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Page {
    Dashboard,
    #[serde(rename = "Daily Entry Form")]
    #[strum(serialize = "Daily Entry Form")]
    DailyEntryForm,
    #[serde(rename = "Flock Management")]
    #[strum(serialize = "Flock Management")]
    FlockManagement,
    #[serde(rename = "Daily Feed & Water")]
    #[strum(serialize = "Daily Feed & Water")]
    DailyFeedWater,
    #[serde(rename = "Mortality & Health")]
    #[strum(serialize = "Mortality & Health")]
    MortalityHealth,
    #[serde(rename = "Egg Production")]
    #[strum(serialize = "Egg Production")]
    EggProduction,
    #[serde(rename = "Finance Ledger")]
    #[strum(serialize = "Finance Ledger")]
    FinanceLedger,
    Inventory,
    #[serde(rename = "Security Gate Log")]
    #[strum(serialize = "Security Gate Log")]
    SecurityGateLog,
    Reports,
}

/// Mutating actions gated per role. Consolidated here so every entity is
/// checked the same way.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Action {
    RegisterFlock,
    AddInventoryItem,
    RecordFinanceTransaction,
    RecordFeedReport,
    RecordMortalityReport,
    RecordMedicineReport,
    RecordEggProductionReport,
    RecordSecurityLog,
}

lazy_static! {
    /// Ordered page lists per role; the first entry is the role's default
    /// landing page.
    static ref PAGE_PERMISSIONS: HashMap<Role, Vec<Page>> = {
        use Page::*;
        let mut permissions = HashMap::new();
        permissions.insert(
            Role::Admin,
            vec![
                Dashboard,
                DailyEntryForm,
                FlockManagement,
                DailyFeedWater,
                MortalityHealth,
                EggProduction,
                FinanceLedger,
                Inventory,
                SecurityGateLog,
                Reports,
            ],
        );
        permissions.insert(
            Role::Manager,
            vec![
                Dashboard,
                DailyEntryForm,
                FlockManagement,
                DailyFeedWater,
                MortalityHealth,
                EggProduction,
                Reports,
            ],
        );
        permissions.insert(
            Role::Worker,
            vec![DailyFeedWater, MortalityHealth, EggProduction],
        );
        permissions.insert(
            Role::Accountant,
            vec![Dashboard, DailyEntryForm, FinanceLedger, Inventory, Reports],
        );
        permissions.insert(Role::SecurityGuard, vec![SecurityGateLog]);
        permissions
    };
}

/// Ordered list of pages the role may navigate to.
pub fn allowed_pages(role: Role) -> &'static [Page] {
    PAGE_PERMISSIONS
        .get(&role)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// First permitted page; where the UI lands after login.
pub fn default_page(role: Role) -> Option<Page> {
    allowed_pages(role).first().copied()
}

/// Whether the role may invoke the mutating action. Registration-style
/// actions carry explicit role gates; daily report submissions follow from
/// access to the corresponding page.
pub fn can_perform(role: Role, action: Action) -> bool {
    use Action::*;
    match action {
        RegisterFlock | AddInventoryItem => matches!(role, Role::Admin | Role::Manager),
        RecordFinanceTransaction => matches!(role, Role::Admin | Role::Accountant),
        RecordFeedReport => allowed_pages(role).contains(&Page::DailyFeedWater),
        RecordMortalityReport | RecordMedicineReport => {
            allowed_pages(role).contains(&Page::MortalityHealth)
        }
        RecordEggProductionReport => allowed_pages(role).contains(&Page::EggProduction),
        RecordSecurityLog => allowed_pages(role).contains(&Page::SecurityGateLog),
    }
}
