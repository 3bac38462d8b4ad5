use serde::{Deserialize, Serialize};

/// CSV header names as the remote side spells them.
pub const COL_MAC_ADDRESS: &str = "macAddress";
pub const COL_GEOTAB_SERIAL: &str = "geotabSerialNumber";

/// Operation applied to every row of the uploaded file.
///
/// Fixed for the lifetime of one run; it decides the required CSV
/// columns, the HTTP call issued per row and the notification payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationMode {
    /// Associate a MAC address with a Geotab serial number
    #[default]
    Pair,

    /// Remove an existing association
    Unpair,
}

impl OperationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pair => "pair",
            Self::Unpair => "unpair",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pair => "Pair",
            Self::Unpair => "Unpair",
        }
    }

    /// Columns that must be present in the header row for this mode
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            Self::Pair => &[COL_MAC_ADDRESS, COL_GEOTAB_SERIAL],
            Self::Unpair => &[COL_MAC_ADDRESS],
        }
    }
}
