use std::collections::HashMap;

/// Parsed CSV file: the first raw row is the header, every following row
/// is keyed by header name. Cells beyond the header width are dropped,
/// missing trailing cells read as empty strings.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
    pub file_name: String,
}

impl CsvTable {
    /// Build a table from raw cells. The first row is treated as the header.
    pub fn from_raw(raw: Vec<Vec<String>>, file_name: String) -> Result<Self, String> {
        let mut iter = raw.into_iter();
        let headers: Vec<String> = iter
            .next()
            .ok_or_else(|| "The selected file is empty".to_string())?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let rows = iter
            .map(|cells| {
                headers
                    .iter()
                    .cloned()
                    .zip(cells.into_iter().chain(std::iter::repeat(String::new())))
                    .collect::<HashMap<_, _>>()
            })
            .collect();

        Ok(Self {
            headers,
            rows,
            file_name,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Exact (trimmed) header presence check used for batch validation
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::csv_importer::parser::parse_rows;

    fn table(text: &str) -> CsvTable {
        CsvTable::from_raw(parse_rows(text), "test.csv".to_string()).unwrap()
    }

    #[test]
    fn rows_are_keyed_by_header() {
        let t = table("macAddress,geotabSerialNumber\nAA:01,GT1\nAA:02,GT2");
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.rows[0].get("macAddress").unwrap(), "AA:01");
        assert_eq!(t.rows[1].get("geotabSerialNumber").unwrap(), "GT2");
    }

    #[test]
    fn missing_trailing_cells_read_as_empty() {
        let t = table("macAddress,geotabSerialNumber\nAA:01");
        assert_eq!(t.rows[0].get("geotabSerialNumber").unwrap(), "");
    }

    #[test]
    fn extra_cells_beyond_header_are_dropped() {
        let t = table("macAddress\nAA:01,unexpected");
        assert_eq!(t.rows[0].len(), 1);
        assert_eq!(t.rows[0].get("macAddress").unwrap(), "AA:01");
    }

    #[test]
    fn header_check_is_exact() {
        let t = table("macAddress,geotabSerialNumber\n");
        assert!(t.has_column("macAddress"));
        assert!(t.has_column("geotabSerialNumber"));
        assert!(!t.has_column("macaddress"));
        assert!(!t.has_column("serial"));
    }

    #[test]
    fn empty_file_is_rejected() {
        let err = CsvTable::from_raw(Vec::new(), "empty.csv".to_string()).unwrap_err();
        assert!(err.contains("empty"));
    }

    #[test]
    fn header_only_file_has_zero_rows() {
        let t = table("macAddress");
        assert_eq!(t.row_count(), 0);
    }
}
