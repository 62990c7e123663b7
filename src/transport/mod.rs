//! HTTP送受信の抽象化
//!
//! APIクライアントは `Transport` 経由でのみ通信する。
//! 本番は `ReqwestTransport`、テストはメモリ上のスタブを差し込む。

mod http;

pub use http::ReqwestTransport;

use crate::config::BaseUrl;
use crate::error::{MirqabError, Result};
use crate::media::MediaFile;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// バックエンドのエンドポイント（パスは固定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Health,
    AnalyzeMedia,
    TestSegmentation,
    ProcessVideo,
    DetectionReports,
    DetectionStats,
    AssistantQuery,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Health => "/health",
            Endpoint::AnalyzeMedia => "/api/analyze_media",
            Endpoint::TestSegmentation => "/api/test_segmentation",
            Endpoint::ProcessVideo => "/api/process_video",
            Endpoint::DetectionReports => "/api/detection-reports",
            Endpoint::DetectionStats => "/api/detection-stats",
            Endpoint::AssistantQuery => "/api/moraqib_query",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::Health | Endpoint::DetectionReports | Endpoint::DetectionStats => Method::Get,
            Endpoint::AnalyzeMedia
            | Endpoint::TestSegmentation
            | Endpoint::ProcessVideo
            | Endpoint::AssistantQuery => Method::Post,
        }
    }
}

/// multipartフォームの1フィールド
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file: MediaFile },
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        FormPart::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn file(name: impl Into<String>, file: MediaFile) -> Self {
        FormPart::File {
            name: name.into(),
            file,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// 1往復分のリクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    /// GETのクエリ文字列
    pub query: Vec<(String, String)>,
    /// POSTのmultipartフォーム
    pub form: Vec<FormPart>,
}

impl ApiRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            query: Vec::new(),
            form: Vec::new(),
        }
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn part(mut self, part: FormPart) -> Self {
        self.form.push(part);
        self
    }

    pub fn method(&self) -> Method {
        self.endpoint.method()
    }

    /// フォームのテキストフィールド値
    pub fn form_text(&self, name: &str) -> Option<&str> {
        self.form.iter().find_map(|p| match p {
            FormPart::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// クエリパラメータ値
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// 受信したレスポンス（ステータスは解釈しない）
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: value.to_string().into_bytes(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// ボディをJSONとして解析（失敗はトランスポート層のエラー）
    pub fn body_json(&self) -> Result<serde_json::Value> {
        serde_json::from_slice(&self.body).map_err(|e| {
            MirqabError::InvalidResponse(format!("HTTP {}: {}", self.status, e))
        })
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// リクエストを送信。HTTPステータスによる失敗判定はしない
    async fn send(&self, base: &BaseUrl, request: ApiRequest) -> Result<RawResponse>;
}
