//! Naive CSV reading: newline-separated records, comma-separated cells.
//!
//! Deliberately no quoting or escaping support. A field containing a
//! literal comma is not representable in the files this importer accepts.

use wasm_bindgen_futures::JsFuture;

/// Read the full text of a browser `File`
pub async fn read_csv_from_file(file: web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;

    text.as_string()
        .ok_or_else(|| "File is not readable as text".to_string())
}

/// Split raw CSV text into trimmed cells. Blank lines are dropped.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.split(',')
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_header_and_rows() {
        let rows = parse_rows("macAddress,geotabSerialNumber\nAA:01,GT1\nAA:02,GT2\n");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["macAddress", "geotabSerialNumber"]);
        assert_eq!(rows[2], vec!["AA:02", "GT2"]);
    }

    #[test]
    fn drops_blank_lines_and_handles_crlf() {
        let rows = parse_rows("macAddress\r\n\r\nAA:01\r\n\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["macAddress"]);
        assert_eq!(rows[1], vec!["AA:01"]);
    }

    #[test]
    fn cells_are_trimmed() {
        let rows = parse_rows("macAddress , geotabSerialNumber\n AA:01 ,GT1");
        assert_eq!(rows[0], vec!["macAddress", "geotabSerialNumber"]);
        assert_eq!(rows[1], vec!["AA:01", "GT1"]);
    }

    #[test]
    fn no_quoting_support() {
        // Quotes are ordinary characters; the embedded comma still splits.
        let rows = parse_rows("a,b\n\"x,y\",z");
        assert_eq!(rows[1], vec!["\"x", "y\"", "z"]);
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("\n\n").is_empty());
    }
}
