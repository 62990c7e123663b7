use thiserror::Error;

#[derive(Error, Debug)]
pub enum MirqabError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTP通信エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("接続エラー: {0}")]
    Connection(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    InvalidResponse(String),

    /// 動画処理の失敗（サーバのエラーメッセージをそのまま表示）
    #[error("{0}")]
    VideoProcessing(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] mirqab_common::Error),
}

pub type Result<T> = std::result::Result<T, MirqabError>;
