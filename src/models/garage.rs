use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Vehicle maintenance state. Consumed only by the alert generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarageData {
    pub odometer_km: u32,
    pub last_oil_change_km: u32,
    pub oil_interval_km: u32,
    pub last_tire_change_km: Option<u32>,
    pub tire_interval_km: Option<u32>,
    /// Document expiry dates are carried for the caller's own reminders; no
    /// engine alert consumes them.
    pub registration_expiry: Option<NaiveDate>,
    pub license_expiry: Option<NaiveDate>,
}

impl GarageData {
    /// Kilometres driven since the last oil change.
    pub fn km_since_oil_change(&self) -> u32 {
        self.odometer_km.saturating_sub(self.last_oil_change_km)
    }

    /// Kilometres driven since the last tire change, when tracked.
    pub fn km_since_tire_change(&self) -> Option<u32> {
        self.last_tire_change_km
            .map(|last| self.odometer_km.saturating_sub(last))
    }
}
