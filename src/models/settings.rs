use serde::{Deserialize, Serialize};

use crate::models::hotspot::HotspotCategory;

/// Per-user settings passed explicitly into every engine call. The engine
/// never reads ambient storage or environment for these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    /// Daily revenue target, IDR.
    pub daily_target: i64,
    /// Categories the user has toggled off; hidden hotspots are removed
    /// before scoring, like feedback exclusions.
    #[serde(default)]
    pub hidden_categories: Vec<HotspotCategory>,
}

impl UserSettings {
    pub fn shows(&self, category: HotspotCategory) -> bool {
        !self.hidden_categories.contains(&category)
    }
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            daily_target: 200_000,
            hidden_categories: Vec::new(),
        }
    }
}
