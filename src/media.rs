use crate::error::{MirqabError, Result};
use std::path::Path;

const IMAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
];

const VIDEO_EXTENSIONS: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("mov", "video/quicktime"),
    ("avi", "video/x-msvideo"),
    ("mkv", "video/x-matroska"),
    ("webm", "video/webm"),
];

/// アップロードするメディアファイル
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// ファイルを読み込み、拡張子からMIMEタイプを推定
    pub async fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(MirqabError::FileNotFound(path.display().to_string()));
        }

        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            mime_type: guess_mime_type(path).to_string(),
            file_name,
            bytes,
        })
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn is_video(&self) -> bool {
        self.mime_type.starts_with("video/")
    }
}

/// 拡張子からMIMEタイプを推定（不明なら application/octet-stream）
pub fn guess_mime_type(path: &Path) -> &'static str {
    let Some(ext) = path.extension() else {
        return "application/octet-stream";
    };
    let ext = ext.to_string_lossy().to_lowercase();

    IMAGE_EXTENSIONS
        .iter()
        .chain(VIDEO_EXTENSIONS)
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or("application/octet-stream")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(guess_mime_type(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(guess_mime_type(Path::new("dir/b.png")), "image/png");
        assert_eq!(guess_mime_type(Path::new("clip.mp4")), "video/mp4");
        assert_eq!(guess_mime_type(Path::new("noext")), "application/octet-stream");
        assert_eq!(guess_mime_type(Path::new("x.txt")), "application/octet-stream");
    }

    #[test]
    fn test_image_video_flags() {
        let image = MediaFile::new("a.png", "image/png", vec![1]);
        assert!(image.is_image());
        assert!(!image.is_video());

        let video = MediaFile::new("a.mp4", "video/mp4", vec![1]);
        assert!(video.is_video());
    }

    #[tokio::test]
    async fn test_from_path_missing() {
        let result = MediaFile::from_path(Path::new("/nonexistent/file.jpg")).await;
        assert!(matches!(result, Err(MirqabError::FileNotFound(_))));
    }
}
