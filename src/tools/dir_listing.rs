//! 目錄列舉
//!
//! 只讀取目錄的第一層項目，不遞迴，依檔名排序

use crate::error::{RenameError, Result};
use log::debug;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// 目錄中的單一項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub path: PathBuf,
    /// 檔名（非 UTF-8 字元以替代字元表示）
    pub name: String,
    pub is_dir: bool,
}

/// 單次讀取的目錄內容，整個流程共用同一份
#[derive(Debug, Clone)]
pub struct DirListing {
    pub directory: PathBuf,
    pub entries: Vec<ListedEntry>,
}

impl DirListing {
    pub fn read(directory: &Path) -> Result<Self> {
        let read_dir = fs::read_dir(directory).map_err(|e| RenameError::io(directory, e))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| RenameError::io(directory, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| RenameError::io(&path, e))?;

            entries.push(ListedEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                is_dir: file_type.is_dir(),
                path,
            });
        }

        entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        debug!("Listed {} entries in {}", entries.len(), directory.display());

        Ok(Self {
            directory: directory.to_path_buf(),
            entries,
        })
    }
}

/// 以最後一個 `.` 切分檔名，回傳 (主檔名, 含前導點的副檔名)
///
/// 沒有 `.` 時副檔名為空字串；`.hidden` 的主檔名為空字串
#[must_use]
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(index) => name.split_at(index),
        None => (name, ""),
    }
}

/// 與 [`split_extension`] 相同的副檔名規則，但保留原始位元組
///
/// 非 UTF-8 的副檔名不會被替換成替代字元
#[must_use]
pub fn raw_extension(name: &OsStr) -> OsString {
    match Path::new(name).extension() {
        Some(extension) => {
            let mut result = OsString::from(".");
            result.push(extension);
            result
        }
        // `.hidden` 整個名稱都是副檔名
        None if name.as_encoded_bytes().starts_with(b".") => name.to_os_string(),
        None => OsString::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_split_extension_simple() {
        assert_eq!(split_extension("video1.mp4"), ("video1", ".mp4"));
    }

    #[test]
    fn test_split_extension_multiple_dots() {
        assert_eq!(split_extension("video1.info.json"), ("video1.info", ".json"));
    }

    #[test]
    fn test_split_extension_no_extension() {
        assert_eq!(split_extension("video"), ("video", ""));
    }

    #[test]
    fn test_split_extension_hidden_file() {
        assert_eq!(split_extension(".hidden"), ("", ".hidden"));
    }

    #[test]
    fn test_raw_extension_follows_split_rule() {
        for name in ["video1.mp4", "video1.info.json", "video", ".hidden", "trailing."] {
            let (_, expected) = split_extension(name);
            assert_eq!(raw_extension(OsStr::new(name)), OsStr::new(expected), "{name}");
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_raw_extension_keeps_non_utf8_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"My Video [abc123abc123].m\xffv");
        assert_eq!(raw_extension(name).as_bytes(), b".m\xffv");
    }

    #[test]
    fn test_read_is_sorted_and_not_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let base_path = temp_dir.path();

        fs::write(base_path.join("b.mp4"), "video").unwrap();
        fs::write(base_path.join("a.json"), "{}").unwrap();
        fs::create_dir(base_path.join("nested")).unwrap();
        fs::write(base_path.join("nested/inner.mp4"), "video").unwrap();

        let listing = DirListing::read(base_path).unwrap();
        let names: Vec<&str> = listing.entries.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["a.json", "b.mp4", "nested"]);
        assert!(listing.entries[2].is_dir);
        assert!(!listing.entries[0].is_dir);
    }

    #[test]
    fn test_read_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = DirListing::read(&temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, RenameError::Io { .. }));
    }
}
