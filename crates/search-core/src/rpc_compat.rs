// search-core/src/rpc_compat.rs
//! RPC 适配层 - 将内部类型转换为 rpc crate 的类型

use std::collections::BTreeMap;

use rpc::RequestError;
use rpc::index::FileEntry;
use rpc::search::SearchHit;

use crate::{FileRecord, MatchRecord, SearchError};

impl From<FileRecord> for FileEntry {
    fn from(record: FileRecord) -> Self {
        Self {
            filename: record.filename,
            last_updated: record.last_modified,
        }
    }
}

impl From<MatchRecord> for SearchHit {
    fn from(record: MatchRecord) -> Self {
        Self {
            filename: record.filename,
            sheet: record.sheet_name,
            cell: record.cell_coordinate,
            content: record.content,
        }
    }
}

impl From<SearchError> for RequestError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::EmptyQuery => RequestError::BadRequest(err.to_string()),
            other => RequestError::Failed(other.to_string()),
        }
    }
}

pub fn to_file_entries(files: BTreeMap<String, FileRecord>) -> BTreeMap<String, FileEntry> {
    files
        .into_iter()
        .map(|(name, record)| (name, FileEntry::from(record)))
        .collect()
}

pub fn to_search_hits(records: Vec<MatchRecord>) -> Vec<SearchHit> {
    records.into_iter().map(SearchHit::from).collect()
}
