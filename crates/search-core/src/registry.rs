// search-core/src/registry.rs
//! 文件索引 - 记录已知表格文件及其最后修改时间

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::SearchConfig;
use crate::error::Result;
use crate::models::FileRecord;
use crate::walker::DirWalker;

/// 文件状态检查结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// 第一次见到的文件
    New,
    /// 修改时间晚于索引记录
    Modified,
    /// 未变化，跳过
    Unchanged,
}

/// 文件索引 - 线程安全，以文件名为键
///
/// 每次读写只对单个键加锁；一次完整重建不是事务，
/// 并发重建时同一个键以最后写入者为准。
#[derive(Clone, Default)]
pub struct FileIndex {
    inner: Arc<RwLock<HashMap<String, FileRecord>>>,
}

impl FileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入或覆盖一条记录
    pub fn upsert(&self, record: FileRecord) {
        let mut files = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        files.insert(record.filename.clone(), record);
    }

    /// 与已有记录比较，新文件或已修改时写入（对该键原子）
    pub fn refresh(&self, record: FileRecord) -> FileStatus {
        let mut files = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let status = match files.get(&record.filename) {
            None => FileStatus::New,
            Some(known) if record.last_modified > known.last_modified => FileStatus::Modified,
            Some(_) => FileStatus::Unchanged,
        };

        if status != FileStatus::Unchanged {
            files.insert(record.filename.clone(), record);
        }
        status
    }

    pub fn get(&self, filename: &str) -> Option<FileRecord> {
        let files = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        files.get(filename).cloned()
    }

    /// 当前索引的有序快照
    pub fn snapshot(&self) -> BTreeMap<String, FileRecord> {
        let files = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        files
            .iter()
            .map(|(name, record)| (name.clone(), record.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 全量重建：目录下每个表格文件都写入索引，返回完整映射
    ///
    /// 已从磁盘删除的文件不会被移除。
    pub fn rebuild(&self, root: &Path, config: &SearchConfig) -> Result<BTreeMap<String, FileRecord>> {
        let walker = DirWalker::new(root, &config.walker)?;

        for entry in walker.spreadsheets(config) {
            self.upsert(FileRecord::new(&entry.name, entry.modified));
            tracing::info!("文件已索引: {}", entry.name);
        }

        Ok(self.snapshot())
    }

    /// 检查新增或更新的文件，按遍历顺序返回
    pub fn detect_changes(&self, root: &Path, config: &SearchConfig) -> Result<Vec<FileRecord>> {
        let walker = DirWalker::new(root, &config.walker)?;
        let mut changed = Vec::new();

        for entry in walker.spreadsheets(config) {
            let record = FileRecord::new(&entry.name, entry.modified);
            match self.refresh(record.clone()) {
                FileStatus::New => {
                    tracing::info!("发现新文件: {}", entry.name);
                    changed.push(record);
                }
                FileStatus::Modified => {
                    tracing::info!("文件已更新: {}", entry.name);
                    changed.push(record);
                }
                FileStatus::Unchanged => {}
            }
        }

        Ok(changed)
    }
}
