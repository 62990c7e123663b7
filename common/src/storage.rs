//! ストレージURL・画像ペイロードのユーティリティ

use crate::error::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// スキーム（`http://`, `https://`, `data:` など）を持つか
pub fn has_scheme(path: &str) -> bool {
    let Some(colon) = path.find(':') else {
        return false;
    };
    let scheme = &path[..colon];
    let mut chars = scheme.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    };
    // "localhost:8000" のような host:port は除外
    valid && (path[colon..].starts_with("://") || scheme.eq_ignore_ascii_case("data"))
}

/// ベースアドレスの正規化（前後空白・末尾スラッシュ除去、スキームなしは `http://` を補う）
///
/// 空文字列は空のまま返す。
pub fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() || has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

/// 相対パスをベースURL付きの絶対URLに変換
///
/// 結果は常にスキーム付き（またはベースが空なら元のパス）なので、2回適用しても変わらない。
pub fn storage_url(base: &str, path: &str) -> String {
    if has_scheme(path) {
        return path.to_string();
    }
    let base = normalize_base(base);
    if base.is_empty() {
        path.to_string()
    } else if path.is_empty() {
        base.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Data URLからBase64データ部分を抽出
///
/// `data:` で始まらない場合は全体を生のBase64とみなす。
pub fn extract_base64_from_data_url(data_url: &str) -> &str {
    if data_url.starts_with("data:") {
        data_url.split_once(',').map(|(_, data)| data).unwrap_or("")
    } else {
        data_url
    }
}

/// Data URLからMIMEタイプを抽出（不明なら "image/png"）
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .strip_prefix("data:")
        .and_then(|s| s.split([';', ',']).next())
        .filter(|s| !s.is_empty())
        .unwrap_or("image/png")
}

/// オーバーレイ画像などのペイロードをバイト列にデコード
pub fn decode_image_payload(payload: &str) -> Result<Vec<u8>> {
    let data = extract_base64_from_data_url(payload.trim());
    Ok(STANDARD.decode(data)?)
}
