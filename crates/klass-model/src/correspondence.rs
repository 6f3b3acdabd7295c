use serde::{Deserialize, Serialize};

use crate::classification::ContactPerson;
use crate::links::Links;
use crate::version::Changelog;

/// One source/target pair of a correspondence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CorrespondenceItem {
    pub source_code: Option<String>,
    pub source_name: Option<String>,
    pub source_short_name: Option<String>,
    pub target_code: Option<String>,
    pub target_name: Option<String>,
    pub target_short_name: Option<String>,
    pub valid_from: Option<String>,
    pub valid_to: Option<String>,
}

/// Response of `GET /correspondencetables/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CorrespondenceTableDetails {
    pub name: String,
    pub contact_person: ContactPerson,
    pub owning_section: String,
    pub source: String,
    pub source_id: i64,
    pub target: String,
    pub target_id: i64,
    pub change_table: bool,
    pub last_modified: String,
    #[serde(default)]
    pub published: Vec<String>,
    pub source_level: Option<String>,
    pub target_level: Option<String>,
    pub description: String,
    #[serde(default)]
    pub changelogs: Vec<Changelog>,
    #[serde(default)]
    pub correspondence_maps: Vec<CorrespondenceItem>,
    #[serde(rename = "_links")]
    pub links: Links,
}

/// Response of `GET /classifications/{id}/corresponds` and
/// `correspondsAt`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CorrespondsResponse {
    pub correspondence_items: Vec<CorrespondenceItem>,
}
