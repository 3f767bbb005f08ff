// search-core/src/config.rs
//! 配置模块

use serde::{Deserialize, Serialize};

/// 搜索引擎配置
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 表格文件扩展名（不含点，比较时忽略大小写）
    pub extension: String,
    pub walker: WalkerConfig,
}

/// Walker 配置
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WalkerConfig {
    pub follow_symlinks: bool,
    /// 0 表示不限制深度
    pub max_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            extension: "xlsx".to_string(),
            walker: WalkerConfig::default(),
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            max_depth: 0,
        }
    }
}

impl SearchConfig {
    /// 文件名是否以表格扩展名结尾（忽略大小写）
    pub fn is_spreadsheet(&self, file_name: &str) -> bool {
        let suffix = format!(".{}", self.extension.trim_start_matches('.'));
        file_name.to_lowercase().ends_with(&suffix.to_lowercase())
    }
}
