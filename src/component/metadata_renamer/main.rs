//! 依 metadata 重新命名主模組
//!
//! 協調 metadata 載入、配對和重新命名的整體流程

use super::matcher::Matcher;
use super::metadata_loader::load_metadata;
use super::renamer::{RenamedFile, Renamer};
use crate::config::Config;
use crate::error::Result;
use crate::tools::{DirListing, validate_directory_exists};
use log::info;
use std::path::{Path, PathBuf};

/// 單次執行的結果
#[derive(Debug, Default)]
pub struct RunReport {
    pub records_loaded: usize,
    pub renamed: Vec<RenamedFile>,
    pub unchanged: usize,
    pub unmatched: Vec<PathBuf>,
}

pub struct MetadataRenamer {
    config: Config,
}

impl MetadataRenamer {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// 所有配對在任何重新命名之前完成
    pub fn run(&self, directory: &Path) -> Result<RunReport> {
        validate_directory_exists(directory)?;

        let settings = &self.config.settings;
        let listing = DirListing::read(directory)?;

        let records = load_metadata(&listing, settings)?;
        let outcome = Matcher::new(settings).match_files(&listing, &records);
        info!(
            "Matched {} of {} entries",
            outcome.matches.len(),
            listing.entries.len()
        );

        let summary = Renamer::new(settings).rename_all(directory, &outcome.matches)?;

        Ok(RunReport {
            records_loaded: records.len(),
            renamed: summary.renamed,
            unchanged: summary.unchanged,
            unmatched: outcome.unmatched,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenameError;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_renamer() -> MetadataRenamer {
        MetadataRenamer::new(Config::default())
    }

    #[test]
    fn test_run_on_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = create_test_renamer()
            .run(&temp_dir.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, RenameError::Io { .. }));
    }

    #[test]
    fn test_run_without_metadata() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("video.mp4"), "video").unwrap();

        let report = create_test_renamer().run(temp_dir.path()).unwrap();

        assert_eq!(report.records_loaded, 0);
        assert!(report.renamed.is_empty());
        assert!(report.unmatched.is_empty());
        assert!(temp_dir.path().join("video.mp4").exists());
    }

    #[test]
    fn test_parse_error_stops_before_renaming() {
        let temp_dir = TempDir::new().unwrap();
        let base_path = temp_dir.path();
        fs::write(base_path.join("abc.mp4"), "video").unwrap();
        fs::write(
            base_path.join("abc.info.json"),
            r#"{"id":"abc","title":"T","upload_date":"20230101"}"#,
        )
        .unwrap();
        fs::write(base_path.join("zzz.json"), "not json").unwrap();

        let err = create_test_renamer().run(base_path).unwrap_err();

        assert!(matches!(err, RenameError::Parse { .. }));
        assert!(base_path.join("abc.mp4").exists());
    }
}
