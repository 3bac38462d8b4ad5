//! Remote boundary of the bulk Geotab usecase.
//!
//! One URL builder per endpoint plus the `GeotabClient` implementation
//! backed by the network-asset API. The MAC address is URL-encoded; the
//! serial number travels as given.

use async_trait::async_trait;
use contracts::usecases::u501_bulk_geotab::NotificationRequest;
use gloo_net::http::Request;
use urlencoding::encode;

use crate::shared::api_utils::status_line;

use super::executor::GeotabClient;

/// POST target for one pair row
pub fn pair_url(base: &str, mac_address: &str, serial: &str) -> String {
    format!(
        "{}/networkAsset/airfinder/supertags/addGeoTab?macID={}&geoTabSerialNumber={}",
        base,
        encode(mac_address),
        serial
    )
}

/// DELETE target for one unpair row
pub fn unpair_url(base: &str, mac_address: &str) -> String {
    format!(
        "{}/networkAsset/airfinder/supertags/deleteGeoTab/{}",
        base,
        encode(mac_address)
    )
}

/// POST target for the per-row notification side effect
pub fn notification_url(base: &str) -> String {
    format!("{}/networkAsset/airfinder/geotab/notifications", base)
}

/// `GeotabClient` backed by the real network-asset API
#[derive(Clone)]
pub struct HttpGeotabClient {
    base_url: String,
    token: String,
}

impl HttpGeotabClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    fn check(response: &gloo_net::http::Response) -> Result<(), String> {
        if response.ok() {
            Ok(())
        } else {
            Err(status_line(response.status(), &response.status_text()))
        }
    }
}

#[async_trait(?Send)]
impl GeotabClient for HttpGeotabClient {
    async fn pair(&self, mac_address: &str, serial: &str) -> Result<(), String> {
        let response = Request::post(&pair_url(&self.base_url, mac_address, serial))
            .header("Authorization", &self.token)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        Self::check(&response)
    }

    async fn unpair(&self, mac_address: &str) -> Result<(), String> {
        let response = Request::delete(&unpair_url(&self.base_url, mac_address))
            .header("Authorization", &self.token)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        Self::check(&response)
    }

    async fn notify(&self, request: &NotificationRequest) -> Result<(), String> {
        let response = Request::post(&notification_url(&self.base_url))
            .header("Authorization", &self.token)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        Self::check(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_url_encodes_the_mac_and_keeps_the_serial_raw() {
        assert_eq!(
            pair_url("https://host", "AA:BB:CC:DD:EE:01", "GT1"),
            "https://host/networkAsset/airfinder/supertags/addGeoTab\
             ?macID=AA%3ABB%3ACC%3ADD%3AEE%3A01&geoTabSerialNumber=GT1"
        );
    }

    #[test]
    fn unpair_url_encodes_the_mac_as_a_path_segment() {
        assert_eq!(
            unpair_url("https://host", "AA:BB:CC:DD:EE:01"),
            "https://host/networkAsset/airfinder/supertags/deleteGeoTab/AA%3ABB%3ACC%3ADD%3AEE%3A01"
        );
    }
}
