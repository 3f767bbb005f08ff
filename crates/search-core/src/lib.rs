// search-core/src/lib.rs
//! 表格搜索引擎核心库
//!
//! 提供：
//! - 表格文件索引（文件名 -> 最后修改时间），支持全量重建与变更检测
//! - 逐单元格的忽略大小写子串搜索，返回工作表与单元格坐标

use std::collections::BTreeMap;
use std::path::Path;

pub mod config;
pub mod coordinate;
pub mod error;
pub mod models;
pub mod reader;
pub mod registry;
pub mod search;
pub mod walker;

// RPC 适配层（可选功能）
#[cfg(feature = "rpc-compat")]
pub mod rpc_compat;

// 重导出核心类型
pub use config::{SearchConfig, WalkerConfig};
pub use coordinate::{cell_name, cell_name_or_fallback, parse_cell_name};
pub use error::{CoordinateError, ReaderError, Result, SearchError};
pub use models::{FileRecord, MatchRecord};
pub use reader::{CalamineReader, SheetReader, Workbook};
pub use registry::{FileIndex, FileStatus};
pub use search::{search_directory, search_in_file};
pub use walker::{DirWalker, WalkEntry};

/// 搜索引擎统一入口
///
/// 服务启动时创建一次，以 `Arc` 共享给所有请求。索引操作与搜索操作互不依赖：
/// 搜索每次都重新遍历目录，不读取索引。
pub struct SheetSearchEngine<R: SheetReader = CalamineReader> {
    pub index: FileIndex,
    pub config: SearchConfig,
    reader: R,
}

impl SheetSearchEngine<CalamineReader> {
    /// 创建使用 calamine 读取器的引擎
    pub fn new(config: SearchConfig) -> Self {
        Self::with_reader(config, CalamineReader)
    }
}

impl<R: SheetReader> SheetSearchEngine<R> {
    pub fn with_reader(config: SearchConfig, reader: R) -> Self {
        Self {
            index: FileIndex::new(),
            config,
            reader,
        }
    }

    /// 全量重建索引，返回完整映射
    pub fn rebuild_index(&self, directory: &Path) -> Result<BTreeMap<String, FileRecord>> {
        tracing::info!("正在重建索引: {:?}", directory);
        let files = self.index.rebuild(directory, &self.config).inspect_err(|e| {
            tracing::error!("目录扫描失败: {}", e);
        })?;
        tracing::info!("索引完成，共 {} 个文件", files.len());
        Ok(files)
    }

    /// 检查新增或更新的文件
    pub fn check_for_changes(&self, directory: &Path) -> Result<Vec<FileRecord>> {
        let changed = self.index.detect_changes(directory, &self.config).inspect_err(|e| {
            tracing::error!("目录扫描失败: {}", e);
        })?;
        tracing::info!("变更检查完成，{} 个新增或更新的文件", changed.len());
        Ok(changed)
    }

    /// 搜索目录下所有表格文件的单元格
    pub fn search(&self, directory: &Path, query: &str) -> Result<Vec<MatchRecord>> {
        search_directory(&self.reader, directory, query, &self.config).inspect_err(|e| {
            if !matches!(e, SearchError::EmptyQuery) {
                tracing::error!("搜索失败: {}", e);
            }
        })
    }
}
