//! 依 yt-dlp metadata 重新命名元件
//!
//! 讀取同資料夾的 `.json` 資訊檔，將影片改名為上傳日期加標題

mod main;
mod matcher;
mod metadata_loader;
mod renamer;

pub use main::{MetadataRenamer, RunReport};
pub use matcher::{
    CandidateFile, MatchOutcome, MatchPolicy, MatchResult, Matcher, record_matches,
};
pub use metadata_loader::{MetadataRecord, load_metadata};
pub use renamer::{RenameSummary, RenamedFile, Renamer};
