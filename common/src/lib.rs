//! Mirqab Common Library
//!
//! CLIとクライアントで共有される型とユーティリティ（I/Oなし）

pub mod chat;
pub mod error;
pub mod i18n;
pub mod lenient;
pub mod outcome;
pub mod storage;
pub mod summary;
pub mod time_range;
pub mod types;

pub use chat::{ChatMessage, Conversation, Role, example_queries};
pub use error::{Error, Result};
pub use i18n::{Language, TextDirection, TextKey, translate, translate_str};
pub use outcome::ApiOutcome;
pub use storage::{decode_image_payload, storage_url};
pub use summary::AnalysisSummary;
pub use time_range::{Pagination, TimeRange};
pub use types::{
    AnalysisReport, AnalysisResult, AssistantAnswer, Detection, DetectionReport, HealthResponse,
    Location, LocationInput, ReportPage, ReportRef, ReportStatus, SegmentationResult, Severity,
    Stats, SystemStatus,
};
