// search-core/src/walker.rs
//! 目录遍历 - 索引与搜索共用的惰性遍历器

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use walkdir::WalkDir;

use crate::config::{SearchConfig, WalkerConfig};
use crate::error::{Result, SearchError};

/// 遍历得到的一个文件系统条目
#[derive(Debug, Clone)]
pub struct WalkEntry {
    pub path: PathBuf,
    /// 文件名（不含目录）
    pub name: String,
    pub is_dir: bool,
    pub modified: SystemTime,
}

/// 惰性、有限、不可重启的目录遍历器
///
/// 条目按文件名字典序产出。单个条目的错误（如权限不足）作为 `Err` 产出，
/// 不会中断遍历。
pub struct DirWalker {
    inner: walkdir::IntoIter,
}

impl DirWalker {
    /// 开始遍历 `root`；根目录本身无法枚举时返回错误
    pub fn new(root: &Path, config: &WalkerConfig) -> Result<Self> {
        fs::read_dir(root).map_err(|source| SearchError::Walk {
            path: root.to_path_buf(),
            source,
        })?;

        let mut walk = WalkDir::new(root)
            .follow_links(config.follow_symlinks)
            .sort_by_file_name();
        if config.max_depth > 0 {
            walk = walk.max_depth(config.max_depth);
        }

        tracing::debug!("开始遍历目录: {:?}", root);
        Ok(Self {
            inner: walk.into_iter(),
        })
    }

    /// 只保留表格文件；出错的条目记录日志后跳过
    pub fn spreadsheets(self, config: &SearchConfig) -> impl Iterator<Item = WalkEntry> + '_ {
        self.filter_map(|result| match result {
            Ok(entry) => Some(entry),
            Err(e) => {
                let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                tracing::warn!("文件访问错误 {}: {}", path, e);
                None
            }
        })
        .filter(move |entry| !entry.is_dir && config.is_spreadsheet(&entry.name))
    }
}

impl Iterator for DirWalker {
    type Item = std::result::Result<WalkEntry, walkdir::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.inner.next()? {
            Ok(entry) => entry,
            Err(e) => return Some(Err(e)),
        };

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => return Some(Err(e)),
        };

        Some(Ok(WalkEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            is_dir: metadata.is_dir(),
            modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            path: entry.into_path(),
        }))
    }
}
