//! Mirqab バックエンドAPIクライアント
//!
//! - 取得系は `ApiOutcome` を返し、`success: false` はエラーにしない
//! - 動画処理のみ、HTTPエラーをサーバのメッセージ付きエラーとして返す
//! - リトライ・バックオフはしない（1呼び出し = 1往復）

use crate::config::{BaseUrl, Config};
use crate::error::{MirqabError, Result};
use crate::media::MediaFile;
use crate::transport::{ApiRequest, Endpoint, FormPart, RawResponse, ReqwestTransport, Transport};
use mirqab_common::{
    ApiOutcome, AssistantAnswer, AnalysisResult, HealthResponse, LocationInput, Pagination,
    ReportPage, SegmentationResult, Stats, TimeRange,
};
use std::sync::Arc;

/// 動画処理失敗時のデフォルトメッセージ
pub const VIDEO_FAILURE_MESSAGE: &str = "Video processing failed";

/// 処理済み動画
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedVideo {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
pub struct ApiClient {
    base: BaseUrl,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base: BaseUrl, transport: impl Transport + 'static) -> Self {
        Self {
            base,
            transport: Arc::new(transport),
        }
    }

    /// 設定からクライアントを生成（ベースアドレスはここで確定）
    pub fn from_config(config: &Config) -> Result<Self> {
        let base = config.api_base_url()?;
        tracing::info!(api_url = %base, "APIクライアント初期化");
        Ok(Self::new(base, ReqwestTransport::new(config.timeout_seconds)?))
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base
    }

    /// 相対パスを絶対URLへ（既に絶対URLならそのまま）
    pub fn storage_url(&self, path: &str) -> String {
        self.base.join(path)
    }

    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        self.transport.send(&self.base, request).await
    }

    async fn send_json(&self, request: ApiRequest) -> Result<serde_json::Value> {
        let endpoint = request.endpoint;
        let response = self.send(request).await?;
        if !response.is_success() {
            // ステータスでは失敗扱いしない（success フラグで判別）
            tracing::debug!(status = response.status, path = endpoint.path(), "非2xxレスポンス");
        }
        response.body_json()
    }

    /// ヘルスチェック
    pub async fn health(&self) -> Result<HealthResponse> {
        let value = self.send_json(ApiRequest::new(Endpoint::Health)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// 画像・動画の解析
    pub async fn analyze_media(
        &self,
        file: MediaFile,
        location: Option<LocationInput>,
    ) -> Result<ApiOutcome<AnalysisResult>> {
        let mut request = ApiRequest::new(Endpoint::AnalyzeMedia).part(FormPart::file("file", file));
        if let Some(loc) = location {
            request = request.part(FormPart::text("location", loc.to_form_value()));
        }

        let value = self.send_json(request).await?;
        Ok(ApiOutcome::from_value(value)?)
    }

    /// セグメンテーションのみのテスト
    pub async fn test_segmentation(&self, file: MediaFile) -> Result<ApiOutcome<SegmentationResult>> {
        let request = ApiRequest::new(Endpoint::TestSegmentation).part(FormPart::file("file", file));
        let value = self.send_json(request).await?;
        Ok(ApiOutcome::from_value(value)?)
    }

    /// 動画処理（非2xxはサーバの `error` をメッセージとしたエラー）
    pub async fn process_video(&self, file: MediaFile) -> Result<ProcessedVideo> {
        let request = ApiRequest::new(Endpoint::ProcessVideo).part(FormPart::file("file", file));
        let response = self.send(request).await?;

        if !response.is_success() {
            let message = response
                .body_json()
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| VIDEO_FAILURE_MESSAGE.to_string());
            tracing::warn!(status = response.status, error = %message, "動画処理失敗");
            return Err(MirqabError::VideoProcessing(message));
        }

        Ok(ProcessedVideo {
            content_type: response.content_type,
            bytes: response.body,
        })
    }

    /// 検知レポート一覧
    ///
    /// 返却件数は `limit` 以下、`total` は返却件数以上に揃える。
    pub async fn detection_reports(
        &self,
        time_range: TimeRange,
        page: Pagination,
    ) -> Result<ApiOutcome<ReportPage>> {
        let request = ApiRequest::new(Endpoint::DetectionReports)
            .query("time_range", time_range)
            .query("limit", page.limit)
            .query("offset", page.offset);

        let value = self.send_json(request).await?;
        let outcome: ApiOutcome<ReportPage> = ApiOutcome::from_value(value)?;
        Ok(outcome.map(|p| clamp_page(p, page.limit)))
    }

    /// 検知統計
    pub async fn detection_stats(&self, time_range: TimeRange) -> Result<ApiOutcome<Stats>> {
        let request = ApiRequest::new(Endpoint::DetectionStats).query("time_range", time_range);
        let value = self.send_json(request).await?;
        Ok(ApiOutcome::from_field(value, "stats")?)
    }

    /// アシスタントへの質問
    pub async fn query_assistant(&self, query: &str) -> Result<ApiOutcome<AssistantAnswer>> {
        let request = ApiRequest::new(Endpoint::AssistantQuery).part(FormPart::text("query", query));
        let value = self.send_json(request).await?;
        Ok(ApiOutcome::from_value(value)?)
    }
}

fn clamp_page(mut page: ReportPage, limit: u32) -> ReportPage {
    let limit = limit as usize;
    if page.detections.len() > limit {
        tracing::warn!(
            returned = page.detections.len(),
            limit,
            "サーバがlimitを超える件数を返したため切り詰め"
        );
        page.detections.truncate(limit);
    }
    page.total = page.total.max(page.detections.len() as u64);
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirqab_common::DetectionReport;

    fn reports(n: usize) -> Vec<DetectionReport> {
        (0..n)
            .map(|i| DetectionReport {
                report_id: format!("R-{}", i),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_clamp_page_truncates() {
        let page = ReportPage {
            detections: reports(10),
            total: 10,
            time_range: "24h".into(),
        };
        let page = clamp_page(page, 6);
        assert_eq!(page.detections.len(), 6);
        assert_eq!(page.total, 10);
    }

    #[test]
    fn test_clamp_page_fixes_total() {
        let page = ReportPage {
            detections: reports(3),
            total: 0,
            time_range: "24h".into(),
        };
        let page = clamp_page(page, 100);
        assert_eq!(page.detections.len(), 3);
        assert_eq!(page.total, 3);
    }
}
