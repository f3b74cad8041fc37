//! metadata 載入模組
//!
//! 讀取資料夾中 yt-dlp 產生的 `.json` 資訊檔

use crate::config::Settings;
use crate::error::{RenameError, Result};
use crate::tools::DirListing;
use log::{debug, info};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::Path;

/// 單一影片的 metadata
///
/// 缺少的欄位與 `null` 都視為空字串。鍵名不分大小寫，重複的鍵以最後一個為準，
/// 整份內容為 `null` 時得到全空的紀錄
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    pub id: String,
    pub title: String,
    pub upload_date: String,
}

impl<'de> Deserialize<'de> for MetadataRecord {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MetadataRecordVisitor)
    }
}

struct MetadataRecordVisitor;

impl<'de> Visitor<'de> for MetadataRecordVisitor {
    type Value = MetadataRecord;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a metadata object")
    }

    fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(MetadataRecord::default())
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut record = MetadataRecord::default();

        while let Some(key) = map.next_key::<String>()? {
            let field = if key.eq_ignore_ascii_case("id") {
                Some(&mut record.id)
            } else if key.eq_ignore_ascii_case("title") {
                Some(&mut record.title)
            } else if key.eq_ignore_ascii_case("upload_date") {
                Some(&mut record.upload_date)
            } else {
                None
            };

            match field {
                // `null` 不覆寫先前的值
                Some(field) => {
                    if let Some(value) = map.next_value::<Option<String>>()? {
                        *field = value;
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(record)
    }
}

impl MetadataRecord {
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|e| RenameError::io(path, e))?;
        serde_json::from_slice(&data).map_err(|e| RenameError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// 依目錄列舉順序載入所有 metadata，不去除重複
pub fn load_metadata(listing: &DirListing, settings: &Settings) -> Result<Vec<MetadataRecord>> {
    let mut records = Vec::new();

    for entry in &listing.entries {
        if entry.is_dir || !settings.is_metadata_name(&entry.name) {
            continue;
        }

        let record = MetadataRecord::from_file(&entry.path)?;
        debug!(
            "Loaded metadata {} (id={:?}, title={:?})",
            entry.name, record.id, record.title
        );
        records.push(record);
    }

    info!(
        "Loaded {} metadata records from {}",
        records.len(),
        listing.directory.display()
    );
    Ok(records)
}
