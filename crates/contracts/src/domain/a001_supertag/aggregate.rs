use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Network asset tracked by the AirFinder side of the remote API.
///
/// Field names follow the remote JSON (camelCase). Everything except the
/// MAC address is optional because older assets predate several fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supertag {
    pub mac_address: String,

    #[serde(default)]
    pub name: String,

    /// Geotab serial number this asset is currently paired with, if any
    #[serde(default)]
    pub geotab_serial_number: Option<String>,

    #[serde(default)]
    pub area_name: Option<String>,

    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
}

impl Supertag {
    pub fn is_paired(&self) -> bool {
        self.geotab_serial_number
            .as_deref()
            .map(|s| !s.trim().is_empty())
            .unwrap_or(false)
    }
}
