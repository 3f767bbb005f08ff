use serde::{Deserialize, Serialize};

/// A single matching cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub filename: String,
    pub sheet: String,
    /// Spreadsheet coordinate such as "B7"
    pub cell: String,
    pub content: String,
}
