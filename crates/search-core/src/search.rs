// search-core/src/search.rs
//! 搜索模块 - 逐单元格的子串匹配

use std::path::Path;

use crate::config::SearchConfig;
use crate::coordinate::cell_name_or_fallback;
use crate::error::{ReaderError, Result, SearchError};
use crate::models::MatchRecord;
use crate::reader::{SheetReader, Workbook};
use crate::walker::DirWalker;

/// 在目录下所有表格文件中搜索
///
/// 结果按 文件遍历顺序 -> 工作表 -> 行 -> 列 排列。单个文件打不开时记录日志并跳过。
pub fn search_directory<R: SheetReader>(
    reader: &R,
    root: &Path,
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<MatchRecord>> {
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    tracing::info!("开始搜索，查询: '{}'", query);
    let walker = DirWalker::new(root, &config.walker)?;

    let mut results = Vec::new();
    for entry in walker.spreadsheets(config) {
        tracing::debug!("正在扫描文件: {:?}", entry.path);
        match search_in_file(reader, &entry.path, query) {
            Ok(hits) => results.extend(hits),
            Err(e) => tracing::warn!("搜索文件失败 {:?}: {}", entry.path, e),
        }
    }

    tracing::info!("搜索完成，共 {} 个结果", results.len());
    Ok(results)
}

/// 在单个文件中搜索（忽略大小写的子串匹配）
///
/// 打开失败返回错误；单个工作表读取失败只跳过该表。
pub fn search_in_file<R: SheetReader>(
    reader: &R,
    path: &Path,
    query: &str,
) -> std::result::Result<Vec<MatchRecord>, ReaderError> {
    let mut workbook = reader.open(path)?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let needle = query.to_lowercase();
    let mut results = Vec::new();

    for sheet in workbook.sheet_names() {
        tracing::debug!("正在扫描工作表: {} ({})", sheet, filename);
        let rows = match workbook.rows(&sheet) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("工作表读取失败 {} ({}): {}", sheet, filename, e);
                continue;
            }
        };

        for (row_index, row) in rows.iter().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                if cell.is_empty() || !cell.to_lowercase().contains(&needle) {
                    continue;
                }

                let cell_coordinate = cell_name_or_fallback(row_index, col_index);
                tracing::debug!("命中: {} {} {}", filename, sheet, cell_coordinate);
                results.push(MatchRecord {
                    filename: filename.clone(),
                    sheet_name: sheet.clone(),
                    cell_coordinate,
                    content: cell.clone(),
                });
            }
        }
    }

    Ok(results)
}
