//! 配對模組
//!
//! 將資料夾中的每個非 metadata 項目與至多一筆 metadata 配對。
//! 分兩階段進行：先依載入順序收集所有符合的紀錄，再由 [`MatchPolicy`] 選出一筆

use super::metadata_loader::MetadataRecord;
use crate::config::{Settings, UnmatchedAccounting};
use crate::tools::{DirListing, split_extension};
use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 檔案路徑對應到配對結果，每個路徑至多出現一次
pub type MatchResult = BTreeMap<PathBuf, MetadataRecord>;

/// 多筆紀錄同時符合時的選擇規則
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// 以載入順序中最後一筆符合的紀錄為準
    #[default]
    LastMatchWins,
}

impl MatchPolicy {
    #[must_use]
    pub fn select<'a>(self, candidates: &[&'a MetadataRecord]) -> Option<&'a MetadataRecord> {
        match self {
            Self::LastMatchWins => candidates.last().copied(),
        }
    }
}

/// 待配對的檔案
#[derive(Debug, Clone, Copy)]
pub struct CandidateFile<'a> {
    pub path: &'a Path,
    /// 去除副檔名後的檔名
    pub stem: &'a str,
}

#[derive(Debug, Default)]
pub struct MatchOutcome {
    pub matches: MatchResult,
    /// 僅供回報使用，不會被重新命名
    pub unmatched: Vec<PathBuf>,
}

/// 主檔名包含紀錄的 id 或標題即視為符合
///
/// 空字串會被任何主檔名包含，這裡不特別處理
#[must_use]
pub fn record_matches(stem: &str, record: &MetadataRecord) -> bool {
    stem.contains(record.id.as_str()) || stem.contains(record.title.as_str())
}

pub struct Matcher {
    settings: Settings,
    policy: MatchPolicy,
}

impl Matcher {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            settings: settings.clone(),
            policy: MatchPolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 第一階段：依載入順序收集所有符合的紀錄
    #[must_use]
    pub fn collect_candidates<'a>(
        &self,
        file: CandidateFile<'_>,
        records: &'a [MetadataRecord],
    ) -> Vec<&'a MetadataRecord> {
        records
            .iter()
            .filter(|record| record_matches(file.stem, record))
            .collect()
    }

    pub fn match_files(&self, listing: &DirListing, records: &[MetadataRecord]) -> MatchOutcome {
        let mut outcome = MatchOutcome::default();

        for entry in &listing.entries {
            if self.settings.is_metadata_name(&entry.name) {
                continue;
            }

            let (stem, _) = split_extension(&entry.name);
            let file = CandidateFile {
                path: &entry.path,
                stem,
            };

            let candidates = self.collect_candidates(file, records);

            // 第二階段
            let selected = self.policy.select(&candidates);

            match selected {
                Some(record) => {
                    debug!(
                        "Matched {} -> {:?} ({} candidates)",
                        entry.name,
                        record.id,
                        candidates.len()
                    );
                    outcome
                        .matches
                        .insert(file.path.to_path_buf(), record.clone());
                }
                None => debug!("No metadata matched {}", entry.name),
            }

            match self.settings.unmatched_accounting {
                UnmatchedAccounting::PerRecord => {
                    outcome
                        .unmatched
                        .extend(std::iter::repeat_n(file.path.to_path_buf(), records.len()));
                }
                UnmatchedAccounting::UnmatchedOnly => {
                    if selected.is_none() && !records.is_empty() {
                        outcome.unmatched.push(file.path.to_path_buf());
                    }
                }
            }
        }

        outcome
    }
}
