// search-core/src/error.rs
//! 错误类型

use std::path::PathBuf;
use thiserror::Error;

/// 引擎级错误：调用方错误或整个操作无法开始
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("无法遍历目录 {path:?}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 表格读取错误（单个文件或单个工作表）
#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("无法打开文件 {path:?}: {message}")]
    Open { path: PathBuf, message: String },

    #[error("无法读取工作表 {sheet}: {message}")]
    Sheet { sheet: String, message: String },
}

/// 单元格坐标换算错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("列号超出范围: {0}")]
    ColumnOutOfRange(usize),

    #[error("行号超出范围: {0}")]
    RowOutOfRange(usize),

    #[error("无效的单元格名称: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
