//! Mirqab 迷彩検知システムのクライアント
//!
//! 多言語表示（アラビア語・英語）とバックエンドAPIクライアント

pub mod assistant;
pub mod cli;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod locale;
pub mod logging;
pub mod media;
pub mod render;
pub mod transport;

pub use client::{ApiClient, ProcessedVideo};
pub use config::{BaseUrl, Config};
pub use error::{MirqabError, Result};
pub use locale::LanguageContext;
pub use media::MediaFile;
