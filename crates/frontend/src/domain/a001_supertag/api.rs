use contracts::domain::a001_supertag::Supertag;
use gloo_net::http::Request;

/// Fetch the supertag listing from the network-asset API
pub async fn fetch_supertags(base: &str, token: &str) -> Result<Vec<Supertag>, String> {
    let url = format!("{}/networkAsset/airfinder/supertags", base);

    let response = Request::get(&url)
        .header("Authorization", token)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<Vec<Supertag>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
