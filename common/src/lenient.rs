//! 寛容なデシリアライズ関数
//!
//! 表示専用のフィールドは `null` や想定外の型でもページ全体を失敗させない。

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null` をデフォルト値として受け付ける
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 真偽値フラグ（`true` 以外はすべて false）
pub fn flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(raw.as_bool().unwrap_or(false))
}

/// 任意の文字列（文字列以外は None）
pub fn opt_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(raw.as_str().map(str::to_string))
}
