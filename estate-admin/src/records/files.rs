//! Uploaded documents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabula::{CellValue, TableRow};

/// A file in document storage.
///
/// Storage records carry their key in an `_id` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub mime: String,
    pub size_bytes: u64,
    pub uploaded: NaiveDate,
}

impl FileEntry {
    /// Size in human units, e.g. `1.4 MB`.
    pub fn human_size(&self) -> String {
        const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
        let mut size = self.size_bytes as f64;
        let mut unit = 0;
        while size >= 1024.0 && unit < UNITS.len() - 1 {
            size /= 1024.0;
            unit += 1;
        }
        if unit == 0 {
            format!("{} {}", self.size_bytes, UNITS[0])
        } else {
            format!("{:.1} {}", size, UNITS[unit])
        }
    }
}

impl TableRow for FileEntry {
    fn field(&self, key: &str) -> Option<CellValue> {
        Some(match key {
            "_id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "mime" => self.mime.as_str().into(),
            "size" => self.human_size().into(),
            "size_bytes" => CellValue::Int(i64::try_from(self.size_bytes).unwrap_or(i64::MAX)),
            "uploaded" => self.uploaded.into(),
            _ => return None,
        })
    }
}
