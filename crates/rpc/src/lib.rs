pub mod index;
pub mod search;

use index::{ChangeReport, IndexReport};
use search::SearchHit;
use serde::{Deserialize, Serialize};

#[tarpc::service]
pub trait SheetSearch {
    /// Heartbeat, answers with a welcome line
    async fn ping() -> String;

    /// Re-scan the data directory and return every known spreadsheet
    async fn rebuild_index() -> Result<IndexReport, RequestError>;

    /// Report spreadsheets that are new or changed since they were last seen
    async fn check_for_changes() -> Result<ChangeReport, RequestError>;

    /// Case-insensitive substring search over every cell of every spreadsheet
    async fn search_text(text: String) -> Result<Vec<SearchHit>, RequestError>;
}

/// Failure of a request as seen by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestError {
    /// The request itself is invalid (e.g. empty query)
    BadRequest(String),
    /// The server could not carry out the request (e.g. directory missing)
    Failed(String),
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::BadRequest(msg) => write!(f, "bad request: {}", msg),
            RequestError::Failed(msg) => write!(f, "request failed: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}
