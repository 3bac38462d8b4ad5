use serde::{Deserialize, Serialize};

use super::request::OperationMode;

/// Payload of the notification side effect fired after a successful row.
///
/// The serial number is present only for pair operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub email: String,
    pub mac_address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geotab_serial_number: Option<String>,

    #[serde(rename = "type")]
    pub operation: OperationMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_remote_field_names() {
        let request = NotificationRequest {
            email: "ops@example.com".to_string(),
            mac_address: "AA:BB:CC:DD:EE:01".to_string(),
            geotab_serial_number: Some("G9X0000001".to_string()),
            operation: OperationMode::Pair,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"macAddress\""));
        assert!(json.contains("\"geotabSerialNumber\""));
        assert!(json.contains("\"type\":\"pair\""));
    }

    #[test]
    fn unpair_omits_serial_number() {
        let request = NotificationRequest {
            email: "ops@example.com".to_string(),
            mac_address: "AA:BB:CC:DD:EE:01".to_string(),
            geotab_serial_number: None,
            operation: OperationMode::Unpair,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("geotabSerialNumber"));
        assert!(json.contains("\"type\":\"unpair\""));
    }
}
