//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use mirqab::error::MirqabError;
use mirqab::MediaFile;
use std::path::Path;

/// 存在しないファイルを読み込んだ場合
#[tokio::test]
async fn test_media_file_not_found() {
    let result = MediaFile::from_path(Path::new("/nonexistent/path/12345.jpg")).await;
    assert!(matches!(result, Err(MirqabError::FileNotFound(_))));
}

/// MirqabErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        MirqabError::Config("テスト設定エラー".to_string()),
        MirqabError::FileNotFound("test.jpg".to_string()),
        MirqabError::Connection("connection refused".to_string()),
        MirqabError::InvalidResponse("status 502".to_string()),
        MirqabError::VideoProcessing("decode failed".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 動画処理エラーはサーバのメッセージをそのまま表示
#[test]
fn test_video_processing_message_verbatim() {
    let err = MirqabError::VideoProcessing("decode failed".to_string());
    assert_eq!(err.to_string(), "decode failed");
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = MirqabError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: MirqabError = io_err.into();

    assert!(matches!(err, MirqabError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: MirqabError = json_err.into();

    assert!(matches!(err, MirqabError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = mirqab_common::Error::InvalidTimeRange("1y".to_string());
    let err: MirqabError = common_err.into();

    assert!(matches!(err, MirqabError::Common(_)));
    assert!(err.to_string().contains("1y"));
}
