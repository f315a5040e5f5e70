use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of the vjudge `contest/data` listing (a DataTables payload).
///
/// Each row is positional: `[id, title, type, begin_ms, end_ms, ...]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VjudgeListing {
    #[serde(default)]
    pub data: Vec<Vec<Value>>,
}

/// Column positions within a listing row.
pub mod columns {
    pub const ID: usize = 0;
    pub const TITLE: usize = 1;
    pub const BEGIN_MS: usize = 3;
    pub const END_MS: usize = 4;
}
