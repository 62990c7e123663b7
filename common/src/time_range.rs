//! 期間フィルタとページング

use crate::error::{Error, Result};
use crate::i18n::TextKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// レポート・統計の期間フィルタ（`24h` / `7d` / `30d` / `all` のみ）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "24h")]
    Last24h,
    #[serde(rename = "7d")]
    Last7d,
    #[serde(rename = "30d")]
    Last30d,
    #[serde(rename = "all")]
    All,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Last24h,
        TimeRange::Last7d,
        TimeRange::Last30d,
        TimeRange::All,
    ];

    /// クエリ文字列の値
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Last24h => "24h",
            TimeRange::Last7d => "7d",
            TimeRange::Last30d => "30d",
            TimeRange::All => "all",
        }
    }

    /// 表示ラベルの翻訳キー
    pub fn label_key(&self) -> TextKey {
        match self {
            TimeRange::Last24h => TextKey::Last24h,
            TimeRange::Last7d => TextKey::Last7d,
            TimeRange::Last30d => TextKey::Last30d,
            TimeRange::All => TextKey::AllTime,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TimeRange::ALL
            .into_iter()
            .find(|r| r.as_str() == s.trim())
            .ok_or_else(|| Error::InvalidTimeRange(s.to_string()))
    }
}

/// レポート一覧のページング
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Pagination {
    pub const DEFAULT_LIMIT: u32 = 100;

    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// 先頭から `limit` 件
    pub fn first(limit: u32) -> Self {
        Self { limit, offset: 0 }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
