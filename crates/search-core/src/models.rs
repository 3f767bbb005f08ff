// search-core/src/models.rs
//! 数据模型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// 索引中的一个表格文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// 文件名（不含目录），在索引中唯一
    pub filename: String,
    #[serde(rename = "last_updated")]
    pub last_modified: DateTime<Utc>,
}

impl FileRecord {
    pub fn new(filename: impl Into<String>, modified: SystemTime) -> Self {
        Self {
            filename: filename.into(),
            last_modified: DateTime::<Utc>::from(modified),
        }
    }
}

/// 一个命中的单元格
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub filename: String,
    #[serde(rename = "sheet")]
    pub sheet_name: String,
    /// 形如 "B7"，换算失败时为 "R7C2"
    #[serde(rename = "cell")]
    pub cell_coordinate: String,
    /// 单元格原始文本（保留大小写）
    pub content: String,
}
