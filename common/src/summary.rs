//! 解析結果の通知文言
//!
//! 検出あり: 「迷彩を検出」＋「N 兵士」
//! 検出なし: 「解析完了」＋「迷彩なし」

use crate::i18n::{Language, TextKey, translate};
use crate::types::AnalysisResult;

/// 解析結果の要約（トースト表示用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub title: String,
    pub description: String,
    /// 検出ありの場合の兵士数
    pub soldier_count: Option<u32>,
}

impl AnalysisSummary {
    pub fn from_result(result: &AnalysisResult, lang: Language) -> Self {
        if result.is_detection() {
            let count = result.soldiers();
            Self {
                title: translate(TextKey::DetectionFound, lang).to_string(),
                description: format!("{} {}", count, translate(TextKey::Soldiers, lang)),
                soldier_count: Some(count),
            }
        } else {
            Self {
                title: translate(TextKey::AnalysisComplete, lang).to_string(),
                description: translate(TextKey::NoDetection, lang).to_string(),
                soldier_count: None,
            }
        }
    }
}
