use serde::{Deserialize, Serialize};

/// One row of a `codes`/`codesAt` result.
///
/// Unlike [`CodeItem`](crate::version::CodeItem), rows from the
/// time-ranged endpoints carry validity dates both in absolute terms and
/// clipped to the requested range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeRow {
    pub code: String,
    pub parent_code: Option<String>,
    pub level: String,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub presentation_name: Option<String>,
    pub valid_from: Option<String>,
    pub valid_to: Option<String>,
    pub valid_from_in_requested_range: Option<String>,
    pub valid_to_in_requested_range: Option<String>,
    pub notes: Option<String>,
}

/// Response of `GET /classifications/{id}/codes` and `codesAt`, and of
/// the `variant`/`variantAt` endpoints (same envelope).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodesResponse {
    pub codes: Vec<CodeRow>,
}

/// One entry of a `changes` result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeChange {
    pub old_code: Option<String>,
    pub old_name: Option<String>,
    pub old_short_name: Option<String>,
    pub new_code: Option<String>,
    pub new_name: Option<String>,
    pub new_short_name: Option<String>,
    pub change_occurred: Option<String>,
}

/// Response of `GET /classifications/{id}/changes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangesResponse {
    pub code_changes: Vec<CodeChange>,
}
