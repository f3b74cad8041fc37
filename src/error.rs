//! 錯誤型別
//!
//! 一次執行中遇到的第一個錯誤就會中止整個流程，不做重試

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    /// 未提供目標資料夾
    #[error("{0}")]
    Usage(String),

    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// metadata 檔內容不是預期的 JSON 結構
    #[error("failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("rename {} -> {}: {}", .from.display(), .to.display(), .source)]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {}: {}", .path.display(), .message)]
    Config { path: PathBuf, message: String },
}

impl RenameError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenameError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_message_contains_path() {
        let err = RenameError::io("/videos", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), "/videos: gone");
    }

    #[test]
    fn test_rename_error_keeps_source() {
        let err = RenameError::Rename {
            from: PathBuf::from("/a.mp4"),
            to: PathBuf::from("/b.mp4"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("rename /a.mp4 -> /b.mp4"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
