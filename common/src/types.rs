//! バックエンドとやり取りする型の定義
//!
//! - DetectionReport: 保存済みの検知レポート（一覧・ダッシュボード）
//! - AnalysisResult: 解析リクエスト1回分の結果（キャッシュしない）
//! - Stats / HealthResponse / AssistantAnswer: その他のレスポンス

use crate::i18n::TextKey;
use crate::lenient::{flag, null_as_default, opt_string};
use serde::{Deserialize, Serialize};

/// 位置情報（レスポンス側）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64,
}

/// 解析リクエストに添付する位置情報
///
/// multipartの `location` フィールドに `{"lat":"..","lng":".."}` のJSON文字列として載せる。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationInput {
    pub lat: f64,
    pub lng: f64,
}

impl LocationInput {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// フォームフィールド値（JSON文字列）
    pub fn to_form_value(&self) -> String {
        serde_json::json!({
            "lat": self.lat.to_string(),
            "lng": self.lng.to_string(),
        })
        .to_string()
    }
}

/// バウンディングボックス1件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// [x1, y1, x2, y2]
    pub bbox: [f64; 4],
    pub confidence: f64,
    #[serde(rename = "class")]
    pub class_name: String,
}

/// 重要度
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label_key(&self) -> TextKey {
        match self {
            Severity::Low => TextKey::Low,
            Severity::Medium => TextKey::Medium,
            Severity::High => TextKey::High,
        }
    }
}

/// 対応状況
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    #[default]
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Closed,
}

impl ReportStatus {
    pub fn label_key(&self) -> TextKey {
        match self {
            ReportStatus::New => TextKey::New,
            ReportStatus::InProgress => TextKey::InProgress,
            ReportStatus::Closed => TextKey::Closed,
        }
    }
}

/// 検知レポート
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    pub report_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub location: Location,

    #[serde(default, deserialize_with = "null_as_default")]
    pub soldier_count: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub attire_and_camouflage: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub environment: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub equipment: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub image_snapshot_url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub segmented_image_url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub source_device_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub severity: Severity,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ReportStatus,

    #[serde(default, deserialize_with = "null_as_default")]
    pub assignee: String,
}

/// 解析レポート内のAI所見
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub environment: String,
    #[serde(deserialize_with = "null_as_default")]
    pub soldier_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub attire_and_camouflage: String,
    #[serde(deserialize_with = "null_as_default")]
    pub equipment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportImages {
    #[serde(deserialize_with = "null_as_default")]
    pub original_base64: String,
    #[serde(deserialize_with = "null_as_default")]
    pub masked_base64: String,
}

/// 解析直後に生成されるレポート
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub report_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub location: Location,

    #[serde(default, deserialize_with = "null_as_default")]
    pub analysis: Option<AnalysisDetails>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Option<ReportImages>,
}

/// クラス別集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassBreakdown {
    pub camouflage_soldiers: u32,
    pub civilians: u32,
    pub total: u32,
}

/// メディア解析結果（`success` は ApiOutcome 側で判別済み）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub detection: Option<bool>,
    pub has_camouflage: Option<bool>,
    pub soldier_count: Option<u32>,
    pub civilian_count: Option<u32>,
    pub total_detections: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub detections: Vec<Detection>,
    /// base64（data URLの場合あり）
    pub overlay_image: Option<String>,
    pub original_image: Option<String>,
    pub report: Option<AnalysisReport>,
    pub class_breakdown: Option<ClassBreakdown>,
    pub message: Option<String>,
}

impl AnalysisResult {
    /// 迷彩が検出されたか
    pub fn is_detection(&self) -> bool {
        self.detection.unwrap_or(false)
    }

    pub fn soldiers(&self) -> u32 {
        self.soldier_count.unwrap_or(0)
    }
}

/// セグメンテーションのみのテスト結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationResult {
    pub overlay_image: Option<String>,
}

impl SegmentationResult {
    /// 解析結果の表示に流用する（検出なし・オーバーレイのみ）
    pub fn into_analysis_result(self) -> AnalysisResult {
        AnalysisResult {
            detection: Some(false),
            overlay_image: self.overlay_image,
            ..Default::default()
        }
    }
}

/// 状態別アラート件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertsByStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub new: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub in_progress: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub closed: u64,
}

/// ダッシュボード統計
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_detections: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub critical_alerts: u64,
    /// 平均検知時間（サーバ整形済み文字列）
    #[serde(deserialize_with = "null_as_default")]
    pub mttd: String,
    /// 平均対応時間（サーバ整形済み文字列）
    #[serde(deserialize_with = "null_as_default")]
    pub mttr: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alerts_by_status: AlertsByStatus,
}

/// レポート一覧ページ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub detections: Vec<DetectionReport>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub time_range: String,
}

/// ヘルスチェック応答
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthResponse {
    /// オンライン判定に使うのはこの値のみ
    #[serde(deserialize_with = "opt_string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "flag")]
    pub model_loaded: bool,
    #[serde(deserialize_with = "flag")]
    pub gemini_api_available: bool,
}

impl HealthResponse {
    /// `status` が厳密に `"healthy"` の場合のみオンライン
    pub fn is_online(&self) -> bool {
        self.status.as_deref() == Some("healthy")
    }
}

/// システム状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    Online,
    Offline,
}

impl SystemStatus {
    pub fn label_key(&self) -> TextKey {
        match self {
            SystemStatus::Online => TextKey::Online,
            SystemStatus::Offline => TextKey::Offline,
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, SystemStatus::Online)
    }
}

impl From<Option<&HealthResponse>> for SystemStatus {
    fn from(health: Option<&HealthResponse>) -> Self {
        match health {
            Some(h) if h.is_online() => SystemStatus::Online,
            _ => SystemStatus::Offline,
        }
    }
}

/// アシスタント回答が参照したレポート
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportRef {
    pub report_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub soldier_count: u32,
}

/// アシスタント（مراقب）の回答
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantAnswer {
    #[serde(deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(deserialize_with = "null_as_default")]
    pub answer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reports_used: Vec<ReportRef>,
    pub total_reports: Option<u64>,
}
