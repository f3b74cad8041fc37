use serde::{Deserialize, Serialize};

pub const DEFAULT_METADATA_EXTENSION: &str = ".json";
pub const DEFAULT_SEPARATOR: &str = " - ";
pub const DEFAULT_SLASH_REPLACEMENT: &str = "_";

/// 未配對清單的累計方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedAccounting {
    /// 每比對一筆 metadata 就記錄一次檔案（不論是否配對成功）
    #[default]
    PerRecord,
    /// 只記錄真正沒有配對到的檔案，每個檔案一次
    UnmatchedOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// metadata 檔的副檔名（區分大小寫）
    pub metadata_extension: String,
    /// 上傳日期與標題之間的分隔字串
    pub separator: String,
    /// 標題中 `/` 的替代字串
    pub slash_replacement: String,
    pub unmatched_accounting: UnmatchedAccounting,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            metadata_extension: DEFAULT_METADATA_EXTENSION.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            slash_replacement: DEFAULT_SLASH_REPLACEMENT.to_string(),
            unmatched_accounting: UnmatchedAccounting::default(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn is_metadata_name(&self, name: &str) -> bool {
        name.ends_with(&self.metadata_extension)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: Settings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.metadata_extension, ".json");
        assert_eq!(settings.separator, " - ");
        assert_eq!(settings.slash_replacement, "_");
        assert_eq!(settings.unmatched_accounting, UnmatchedAccounting::PerRecord);
    }

    #[test]
    fn test_is_metadata_name_is_case_sensitive() {
        let settings = Settings::default();
        assert!(settings.is_metadata_name("video1.info.json"));
        assert!(!settings.is_metadata_name("video1.JSON"));
        assert!(!settings.is_metadata_name("video1.mp4"));
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"unmatched_accounting":"unmatched_only"}"#).unwrap();
        assert_eq!(settings.unmatched_accounting, UnmatchedAccounting::UnmatchedOnly);
        assert_eq!(settings.separator, " - ");
    }
}
