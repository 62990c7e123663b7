use crate::error::{MirqabError, Result};
use mirqab_common::Language;
use mirqab_common::storage::{normalize_base, storage_url};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// 開発用のデフォルトAPIアドレス
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// APIアドレスを上書きする環境変数
pub const API_URL_ENV: &str = "MIRQAB_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: Option<String>,
    pub language: Language,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    /// 読み込みに失敗したらデフォルト設定で続行（`config` コマンドで壊れた設定を直すため）
    pub fn load_lenient() -> Result<Self> {
        Ok(Self::load_lenient_from(&Self::config_path()?))
    }

    pub fn load_lenient_from(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            tracing::warn!(path = %config_path.display(), error = %e, "設定ファイルを読めないためデフォルトを使用");
            Self::default_config()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MirqabError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("mirqab").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            api_url: None,
            language: Language::Ar,
            timeout_seconds: 120,
        }
    }

    /// APIベースアドレスを解決（起動時に一度だけ呼ぶ）
    ///
    /// 優先順位: 環境変数 > 設定ファイル > デフォルト
    pub fn api_base_url(&self) -> Result<BaseUrl> {
        self.resolve_base_url(std::env::var(API_URL_ENV).ok())
    }

    pub fn resolve_base_url(&self, env_value: Option<String>) -> Result<BaseUrl> {
        let raw = env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        BaseUrl::parse(&raw)
    }

    pub fn set_api_url(&mut self, url: &str) -> Result<()> {
        let base = BaseUrl::parse(url)?;
        self.api_url = Some(base.as_str().to_string());
        self.save()
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.language = language;
        self.save()
    }
}

/// 正規化済みのAPIベースアドレス（スキーム付き・末尾スラッシュなし）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn parse(raw: &str) -> Result<Self> {
        let url = normalize_base(raw);
        if url.is_empty() {
            return Err(MirqabError::Config("APIアドレスが空です".into()));
        }
        if url.contains(char::is_whitespace) {
            return Err(MirqabError::Config(format!("APIアドレスが不正です: {}", raw)));
        }
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// パスを結合した絶対URL（スキーム付きのパスはそのまま）
    pub fn join(&self, path: &str) -> String {
        storage_url(&self.0, path)
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(DEFAULT_API_URL.to_string())
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
