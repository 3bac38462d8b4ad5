//! Helpers shared by the API modules.

/// Format a non-2xx response into the error text recorded for a row.
pub fn status_line(status: u16, status_text: &str) -> String {
    if status_text.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {} {}", status, status_text)
    }
}

/// Truncate error text for display in the results list.
pub fn truncate_error(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_includes_status_text_when_present() {
        assert_eq!(status_line(404, "Not Found"), "HTTP 404 Not Found");
        assert_eq!(status_line(500, ""), "HTTP 500");
    }

    #[test]
    fn truncate_keeps_short_text_intact() {
        assert_eq!(truncate_error("short", 10), "short");
        assert_eq!(truncate_error("0123456789abc", 10), "0123456789…");
    }
}
