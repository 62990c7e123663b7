//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid time range: {0} (expected 24h, 7d, 30d or all)")]
    InvalidTimeRange(String),

    #[error("Unsupported language: {0} (expected ar or en)")]
    InvalidLanguage(String),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_display_parse() {
        let error = Error::Parse("missing field".to_string());
        assert_eq!(format!("{}", error), "Parse error: missing field");
    }

    #[test]
    fn test_error_display_time_range() {
        let error = Error::InvalidTimeRange("1y".to_string());
        let display = format!("{}", error);
        assert!(display.contains("1y"));
        assert!(display.contains("24h"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::InvalidLanguage("fr".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidLanguage"));
        assert!(debug.contains("fr"));
    }
}
