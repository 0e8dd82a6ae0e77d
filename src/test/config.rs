#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::config::{Config, DEFAULT_BASE_URL, base_url_or_default, parse_timeout};

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = Config::new("https://api.sectors.app/v1/", "key");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), &None);
    }

    #[test]
    fn debug_hides_api_key() {
        let config = Config::new(DEFAULT_BASE_URL, "super-secret");
        let printed = format!("{:?}", config);

        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn timeout_parsing() {
        assert_eq!(parse_timeout("30").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_timeout(" 5 ").unwrap(), Duration::from_secs(5));
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("ten").is_err());
    }

    #[test]
    fn with_timeout_sets_duration() {
        let config = Config::new(DEFAULT_BASE_URL, "key").with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout(), &Some(Duration::from_secs(3)));
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        assert_eq!(base_url_or_default(None), DEFAULT_BASE_URL);
        assert_eq!(base_url_or_default(Some("")), DEFAULT_BASE_URL);
        assert_eq!(base_url_or_default(Some("   ")), DEFAULT_BASE_URL);
        assert_eq!(
            base_url_or_default(Some(" http://localhost:8080/v1 ")),
            "http://localhost:8080/v1"
        );
    }
}
