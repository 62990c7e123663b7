//! `success` フラグ付きレスポンスのタグ付き結果型
//!
//! バックエンドは `{"success": bool, "error"?: string, ...}` を返す。
//! `success` が無い・falseの場合はペイロードを読まず Failure にする。

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// 論理的な成否を表す結果
///
/// 論理失敗はエラー（`Err`）ではなく `Failure` として呼び出し側に返す。
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    Failure { message: Option<String> },
}

impl<T: DeserializeOwned> ApiOutcome<T> {
    /// レスポンス全体をペイロードとして解釈
    pub fn from_value(value: Value) -> Result<Self> {
        if let Some(failure) = Self::failure_of(&value) {
            return Ok(failure);
        }
        Ok(ApiOutcome::Success(serde_json::from_value(value)?))
    }

    /// `field` 以下をペイロードとして解釈（例: `{"success": true, "stats": {...}}`）
    pub fn from_field(mut value: Value, field: &str) -> Result<Self> {
        if let Some(failure) = Self::failure_of(&value) {
            return Ok(failure);
        }
        let inner = value.get_mut(field).map(Value::take).unwrap_or(Value::Null);
        Ok(ApiOutcome::Success(serde_json::from_value(inner)?))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(text)?)
    }

    fn failure_of(value: &Value) -> Option<Self> {
        let success = value.get("success").and_then(Value::as_bool).unwrap_or(false);
        if success {
            return None;
        }
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string);
        Some(ApiOutcome::Failure { message })
    }
}

impl<T> ApiOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }

    /// 成功時のペイロード
    pub fn success(self) -> Option<T> {
        match self {
            ApiOutcome::Success(v) => Some(v),
            ApiOutcome::Failure { .. } => None,
        }
    }

    pub fn as_ref(&self) -> ApiOutcome<&T> {
        match self {
            ApiOutcome::Success(v) => ApiOutcome::Success(v),
            ApiOutcome::Failure { message } => ApiOutcome::Failure {
                message: message.clone(),
            },
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            ApiOutcome::Success(v) => ApiOutcome::Success(f(v)),
            ApiOutcome::Failure { message } => ApiOutcome::Failure { message },
        }
    }

    /// サーバのエラーメッセージ（Failure かつ `error` がある場合のみ）
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ApiOutcome::Success(_) => None,
            ApiOutcome::Failure { message } => message.as_deref(),
        }
    }

    /// 失敗時の表示文言（サーバメッセージ優先、無ければ `fallback`）
    pub fn failure_text<'a>(&'a self, fallback: &'a str) -> Option<&'a str> {
        match self {
            ApiOutcome::Success(_) => None,
            ApiOutcome::Failure { message } => Some(message.as_deref().unwrap_or(fallback)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ReportPage, Stats};
    use serde_json::json;

    #[test]
    fn test_success_payload() {
        let value = json!({
            "success": true,
            "detections": [{"report_id": "R-1"}],
            "total": 10,
            "time_range": "24h"
        });
        let outcome = ApiOutcome::<ReportPage>::from_value(value).unwrap();
        let page = outcome.success().unwrap();
        assert_eq!(page.detections.len(), 1);
        assert_eq!(page.total, 10);
    }

    #[test]
    fn test_failure_with_message() {
        let value = json!({"success": false, "error": "database offline"});
        let outcome = ApiOutcome::<ReportPage>::from_value(value).unwrap();
        assert!(!outcome.is_success());
        assert_eq!(outcome.error_message(), Some("database offline"));
        assert_eq!(outcome.failure_text("fallback"), Some("database offline"));
    }

    #[test]
    fn test_missing_success_is_failure() {
        // success が無い場合はペイロードを読まない
        let value = json!({"detections": [{"report_id": "R-1"}], "total": 1});
        let outcome = ApiOutcome::<ReportPage>::from_value(value).unwrap();
        assert_eq!(outcome, ApiOutcome::Failure { message: None });
        assert_eq!(outcome.failure_text("Error Occurred"), Some("Error Occurred"));
    }

    #[test]
    fn test_failure_does_not_parse_payload() {
        // 壊れたペイロードでも Failure ならエラーにならない
        let value = json!({"success": false, "detections": "garbage"});
        let outcome = ApiOutcome::<ReportPage>::from_value(value).unwrap();
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_success_with_malformed_payload_is_error() {
        let value = json!({"success": true, "detections": "garbage"});
        assert!(ApiOutcome::<ReportPage>::from_value(value).is_err());
    }

    #[test]
    fn test_from_field() {
        let value = json!({
            "success": true,
            "stats": {"totalDetections": 7, "criticalAlerts": 2, "mttd": "1s", "mttr": "5m"}
        });
        let stats = ApiOutcome::<Stats>::from_field(value, "stats").unwrap().success().unwrap();
        assert_eq!(stats.total_detections, 7);
        assert_eq!(stats.alerts_by_status.new, 0); // デフォルト値
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(ApiOutcome::<ReportPage>::from_json("<html>502</html>").is_err());
    }

    #[test]
    fn test_map() {
        let outcome: ApiOutcome<u32> = ApiOutcome::Success(2);
        assert_eq!(outcome.map(|n| n * 2), ApiOutcome::Success(4));
        assert!(outcome_failure().map(|n| n + 1).error_message().is_none());
    }

    fn outcome_failure() -> ApiOutcome<u32> {
        ApiOutcome::Failure { message: None }
    }
}
