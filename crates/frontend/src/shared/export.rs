/// Sample CSV generation and browser download plumbing
use contracts::usecases::u501_bulk_geotab::OperationMode;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Sample file offered next to the upload zone: the required header row
/// plus two example rows.
pub fn sample_csv(mode: OperationMode) -> String {
    match mode {
        OperationMode::Pair => "macAddress,geotabSerialNumber\n\
             C0:EE:40:00:00:01,G9X0000001\n\
             C0:EE:40:00:00:02,G9X0000002\n"
            .to_string(),
        OperationMode::Unpair => "macAddress\n\
             C0:EE:40:00:00:01\n\
             C0:EE:40:00:00:02\n"
            .to_string(),
    }
}

pub fn sample_file_name(mode: OperationMode) -> String {
    format!("bulk_{}_sample.csv", mode.as_str())
}

/// Generate the sample file for `mode` and trigger a browser download
pub fn download_sample(mode: OperationMode) -> Result<(), String> {
    let blob = create_csv_blob(&sample_csv(mode))?;
    download_blob(&blob, &sample_file_name(mode))
}

/// Create a Blob holding CSV data
fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Trigger a browser download of the Blob
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    // Temporary hidden anchor: append, click, remove
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_sample_has_required_header_and_two_rows() {
        let csv = sample_csv(OperationMode::Pair);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("macAddress,geotabSerialNumber"));
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn unpair_sample_has_required_header_and_two_rows() {
        let csv = sample_csv(OperationMode::Unpair);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("macAddress"));
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn sample_file_names_follow_the_mode() {
        assert_eq!(sample_file_name(OperationMode::Pair), "bulk_pair_sample.csv");
        assert_eq!(
            sample_file_name(OperationMode::Unpair),
            "bulk_unpair_sample.csv"
        );
    }
}
