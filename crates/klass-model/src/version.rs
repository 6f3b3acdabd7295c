use serde::{Deserialize, Serialize};

use crate::classification::ContactPerson;
use crate::error::Result;
use crate::links::Links;

/// One level of a classification hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LevelDescriptor {
    pub level_number: i64,
    pub level_name: String,
}

/// One entry of a version's or variant's codelist.
///
/// `level` is string-encoded in the API. `parentCode` is a back-reference
/// into the level above, empty at the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeItem {
    pub code: String,
    pub parent_code: Option<String>,
    pub level: String,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub presentation_name: Option<String>,
    pub notes: Option<String>,
    pub valid_from: Option<String>,
    pub valid_to: Option<String>,
}

/// A version entry inside a `ClassificationDetails` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VersionSummary {
    pub name: String,
    pub valid_from: String,
    pub valid_to: Option<String>,
    pub last_modified: Option<String>,
    #[serde(default)]
    pub published: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl VersionSummary {
    pub fn version_id(&self) -> Result<&str> {
        self.links.self_id()
    }
}

/// A correspondence table or classification variant entry inside a
/// version response. Both share this shape; variants simply have no
/// source/target pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CorrespondenceTableSummary {
    pub name: String,
    pub contact_person: ContactPerson,
    pub owning_section: String,
    pub source: Option<String>,
    pub source_id: Option<i64>,
    pub target: Option<String>,
    pub target_id: Option<i64>,
    pub change_table: Option<bool>,
    pub last_modified: Option<String>,
    #[serde(default)]
    pub published: Vec<String>,
    pub source_level: Option<String>,
    pub target_level: Option<String>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl CorrespondenceTableSummary {
    pub fn table_id(&self) -> Result<&str> {
        self.links.self_id()
    }
}

/// One changelog entry on a version or variant.
///
/// The API really does spell the field "changeOccured".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Changelog {
    #[serde(rename = "changeOccured")]
    pub change_occured: Option<String>,
    pub description: Option<String>,
}

/// Response of `GET /versions/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VersionDetails {
    pub name: String,
    pub valid_from: String,
    pub valid_to: Option<String>,
    pub last_modified: String,
    #[serde(default)]
    pub published: Vec<String>,
    pub introduction: String,
    pub contact_person: ContactPerson,
    pub owning_section: String,
    pub legal_base: Option<String>,
    pub publications: Option<String>,
    pub derived_from: Option<String>,
    #[serde(default)]
    pub correspondence_tables: Vec<CorrespondenceTableSummary>,
    #[serde(default)]
    pub classification_variants: Vec<CorrespondenceTableSummary>,
    #[serde(default)]
    pub changelogs: Vec<Changelog>,
    #[serde(default)]
    pub levels: Vec<LevelDescriptor>,
    #[serde(default)]
    pub classification_items: Vec<CodeItem>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl VersionDetails {
    pub fn version_id(&self) -> Result<&str> {
        self.links.self_id()
    }
}
