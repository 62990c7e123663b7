//! 多言語（アラビア語・英語）翻訳テーブル
//!
//! キーは `TextKey` の閉じた列挙で、言語ごとの対応は網羅的な `match` で定義する。
//! 翻訳漏れはコンパイルエラーになる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// 表示言語
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// アラビア語（起動時のデフォルト）
    #[default]
    Ar,
    En,
}

/// 文字の書字方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// HTMLの `dir` 属性値
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ar, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }

    pub fn direction(&self) -> TextDirection {
        if self.is_rtl() {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    /// もう一方の言語（言語切替ボタン用）
    pub fn other(&self) -> Language {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Language::Ar),
            "en" => Ok(Language::En),
            other => Err(Error::InvalidLanguage(other.to_string())),
        }
    }
}

/// 翻訳キー
///
/// 文字列表現（`appName` など）は未知キーのフォールバック表示にも使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum TextKey {
    // アプリ
    AppName,
    AppTagline,

    // ナビゲーション
    Dashboard,
    Analyze,
    Reports,
    Assistant,
    Settings,

    // ダッシュボード
    TotalDetections,
    CriticalAlerts,
    MeanTimeToDetect,
    MeanTimeToRespond,
    RecentDetections,
    ViewAll,

    // 解析
    UploadImage,
    UploadVideo,
    DragDrop,
    Or,
    Browse,
    Analyzing,
    NoDetection,
    DetectionFound,
    Soldiers,
    Confidence,

    // レポート
    ReportId,
    Timestamp,
    Location,
    Severity,
    Status,
    SoldierCount,
    Environment,
    Equipment,
    Camouflage,

    // 重要度
    High,
    Medium,
    Low,

    // 対応状況
    New,
    InProgress,
    Closed,

    // 期間
    #[strum(serialize = "last24h")]
    Last24h,
    #[strum(serialize = "last7d")]
    Last7d,
    #[strum(serialize = "last30d")]
    Last30d,
    AllTime,

    // アシスタント
    AskMoraqib,
    TypeQuestion,
    Send,
    ExampleQueries,

    // ヘルスチェック
    SystemStatus,
    Online,
    Offline,
    ModelLoaded,
    AiAvailable,

    // 操作
    Download,
    Export,
    Refresh,
    Filter,
    Search,

    // メッセージ
    ProcessingImage,
    ProcessingVideo,
    AnalysisComplete,
    ErrorOccurred,
    NoData,

    // 設定
    ApiAddress,
    DisplayLanguage,
    RequestTimeout,
    SecondsUnit,
    ConfigFile,
    Saved,
}

impl TextKey {
    /// キー名（例: `"appName"`）
    pub fn name(&self) -> &'static str {
        (*self).into()
    }
}

/// キーと言語から表示文字列を取得
///
/// テーブルに空文字が入っていた場合はキー名を返す。
pub fn translate(key: TextKey, lang: Language) -> &'static str {
    let text = match lang {
        Language::Ar => arabic(key),
        Language::En => english(key),
    };
    if text.is_empty() { key.name() } else { text }
}

/// 文字列キーから表示文字列を取得
///
/// 未知のキーはそのまま返す（例外・空文字にはしない）。
pub fn translate_str(key: &str, lang: Language) -> String {
    match TextKey::from_str(key) {
        Ok(k) => translate(k, lang).to_string(),
        Err(_) => key.to_string(),
    }
}

fn arabic(key: TextKey) -> &'static str {
    use TextKey::*;
    match key {
        AppName => "مرقاب",
        AppTagline => "نظام كشف التمويه العسكري",

        Dashboard => "لوحة التحكم",
        Analyze => "تحليل",
        Reports => "التقارير",
        Assistant => "المساعد",
        Settings => "الإعدادات",

        TotalDetections => "إجمالي الاكتشافات",
        CriticalAlerts => "التنبيهات الحرجة",
        MeanTimeToDetect => "متوسط وقت الكشف",
        MeanTimeToRespond => "متوسط وقت الاستجابة",
        RecentDetections => "الاكتشافات الأخيرة",
        ViewAll => "عرض الكل",

        UploadImage => "رفع صورة",
        UploadVideo => "رفع فيديو",
        DragDrop => "اسحب وأفلت الملفات هنا",
        Or => "أو",
        Browse => "تصفح",
        Analyzing => "جاري التحليل...",
        NoDetection => "لم يتم اكتشاف أي تمويه",
        DetectionFound => "تم الكشف عن تمويه",
        Soldiers => "جنود",
        Confidence => "الثقة",

        ReportId => "رقم التقرير",
        Timestamp => "الوقت",
        Location => "الموقع",
        Severity => "الخطورة",
        Status => "الحالة",
        SoldierCount => "عدد الجنود",
        Environment => "البيئة",
        Equipment => "المعدات",
        Camouflage => "نوع التمويه",

        High => "عالي",
        Medium => "متوسط",
        Low => "منخفض",

        New => "جديد",
        InProgress => "قيد المعالجة",
        Closed => "مغلق",

        Last24h => "آخر 24 ساعة",
        Last7d => "آخر 7 أيام",
        Last30d => "آخر 30 يوم",
        AllTime => "كل الوقت",

        AskMoraqib => "اسأل مراقب",
        TypeQuestion => "اكتب سؤالك هنا...",
        Send => "إرسال",
        ExampleQueries => "أمثلة على الأسئلة",

        SystemStatus => "حالة النظام",
        Online => "متصل",
        Offline => "غير متصل",
        ModelLoaded => "النموذج محمّل",
        AiAvailable => "الذكاء الاصطناعي متاح",

        Download => "تحميل",
        Export => "تصدير",
        Refresh => "تحديث",
        Filter => "تصفية",
        Search => "بحث",

        ProcessingImage => "جاري معالجة الصورة...",
        ProcessingVideo => "جاري معالجة الفيديو...",
        AnalysisComplete => "اكتمل التحليل",
        ErrorOccurred => "حدث خطأ",
        NoData => "لا توجد بيانات",

        ApiAddress => "عنوان الخادم",
        DisplayLanguage => "لغة العرض",
        RequestTimeout => "مهلة الطلب",
        SecondsUnit => "ثانية",
        ConfigFile => "ملف الإعدادات",
        Saved => "تم الحفظ",
    }
}

fn english(key: TextKey) -> &'static str {
    use TextKey::*;
    match key {
        AppName => "MIRQAB",
        AppTagline => "Military Camouflage Detection System",

        Dashboard => "Dashboard",
        Analyze => "Analyze",
        Reports => "Reports",
        Assistant => "Assistant",
        Settings => "Settings",

        TotalDetections => "Total Detections",
        CriticalAlerts => "Critical Alerts",
        MeanTimeToDetect => "Mean Time to Detect",
        MeanTimeToRespond => "Mean Time to Respond",
        RecentDetections => "Recent Detections",
        ViewAll => "View All",

        UploadImage => "Upload Image",
        UploadVideo => "Upload Video",
        DragDrop => "Drag & drop files here",
        Or => "or",
        Browse => "Browse",
        Analyzing => "Analyzing...",
        NoDetection => "No camouflage detected",
        DetectionFound => "Camouflage Detected",
        Soldiers => "soldiers",
        Confidence => "Confidence",

        ReportId => "Report ID",
        Timestamp => "Timestamp",
        Location => "Location",
        Severity => "Severity",
        Status => "Status",
        SoldierCount => "Soldier Count",
        Environment => "Environment",
        Equipment => "Equipment",
        Camouflage => "Camouflage Type",

        High => "High",
        Medium => "Medium",
        Low => "Low",

        New => "New",
        InProgress => "In Progress",
        Closed => "Closed",

        Last24h => "Last 24 Hours",
        Last7d => "Last 7 Days",
        Last30d => "Last 30 Days",
        AllTime => "All Time",

        AskMoraqib => "Ask Moraqib",
        TypeQuestion => "Type your question here...",
        Send => "Send",
        ExampleQueries => "Example Queries",

        SystemStatus => "System Status",
        Online => "Online",
        Offline => "Offline",
        ModelLoaded => "Model Loaded",
        AiAvailable => "AI Available",

        Download => "Download",
        Export => "Export",
        Refresh => "Refresh",
        Filter => "Filter",
        Search => "Search",

        ProcessingImage => "Processing image...",
        ProcessingVideo => "Processing video...",
        AnalysisComplete => "Analysis Complete",
        ErrorOccurred => "Error Occurred",
        NoData => "No Data",

        ApiAddress => "API Address",
        DisplayLanguage => "Display Language",
        RequestTimeout => "Request Timeout",
        SecondsUnit => "s",
        ConfigFile => "Config File",
        Saved => "Saved",
    }
}
