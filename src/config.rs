pub const DEFAULT_SCAN_URL: &str = "http://localhost:3002/api/scan";
pub const SCAN_URL_ENV: &str = "SCANNER_API_URL";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Scan endpoint, overridable through `SCANNER_API_URL`.
pub fn scan_url() -> String {
    scan_url_from(std::env::var(SCAN_URL_ENV).ok())
}

fn scan_url_from(value: Option<String>) -> String {
    match value {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_SCAN_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_url() {
        assert_eq!(scan_url_from(None), DEFAULT_SCAN_URL);
        assert_eq!(scan_url_from(Some("  ".to_string())), DEFAULT_SCAN_URL);
        assert_eq!(
            scan_url_from(Some(" http://10.0.0.7:3002/api/scan ".to_string())),
            "http://10.0.0.7:3002/api/scan"
        );
    }
}
