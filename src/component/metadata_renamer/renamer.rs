//! 重新命名模組
//!
//! 依配對到的 metadata 產生 `<上傳日期> - <標題><副檔名>` 並在原資料夾內重新命名

use super::matcher::MatchResult;
use super::metadata_loader::MetadataRecord;
use crate::config::Settings;
use crate::error::{RenameError, Result};
use crate::tools::raw_extension;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedFile {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// 重新命名結果統計
#[derive(Debug, Default)]
pub struct RenameSummary {
    pub renamed: Vec<RenamedFile>,
    /// 新檔名與原檔名相同而略過的數量
    pub unchanged: usize,
}

pub struct Renamer {
    separator: String,
    slash_replacement: String,
}

impl Renamer {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            separator: settings.separator.clone(),
            slash_replacement: settings.slash_replacement.clone(),
        }
    }

    #[must_use]
    pub fn sanitize_title(&self, title: &str) -> String {
        title.replace('/', &self.slash_replacement)
    }

    /// 產生新檔名，副檔名取自原檔名的原始位元組
    #[must_use]
    pub fn target_name(&self, path: &Path, record: &MetadataRecord) -> OsString {
        let extension = path.file_name().map(raw_extension).unwrap_or_default();

        let mut name = OsString::from(format!(
            "{}{}{}",
            record.upload_date,
            self.separator,
            self.sanitize_title(&record.title)
        ));
        name.push(extension);
        name
    }

    /// 依序重新命名，遇到第一個失敗即中止，已完成的不會還原
    pub fn rename_all(&self, directory: &Path, matches: &MatchResult) -> Result<RenameSummary> {
        let mut summary = RenameSummary::default();

        let progress_bar = ProgressBar::new(matches.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        progress_bar.set_message("renaming...");

        for (path, record) in matches {
            let target = directory.join(self.target_name(path, record));

            if *path == target {
                debug!("Already named: {}", path.display());
                summary.unchanged += 1;
                progress_bar.inc(1);
                continue;
            }

            if let Err(source) = fs::rename(path, &target) {
                progress_bar.abandon_with_message("failed");
                return Err(RenameError::Rename {
                    from: path.clone(),
                    to: target,
                    source,
                });
            }

            info!("Renamed {} -> {}", path.display(), target.display());
            summary.renamed.push(RenamedFile {
                from: path.clone(),
                to: target,
            });
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();

        Ok(summary)
    }
}
