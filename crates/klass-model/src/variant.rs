use serde::{Deserialize, Serialize};

use crate::classification::ContactPerson;
use crate::error::Result;
use crate::links::Links;
use crate::version::{Changelog, CodeItem, CorrespondenceTableSummary, LevelDescriptor};

/// Response of `GET /variants/{id}`.
///
/// A variant is an alternative, possibly partial, regrouping of a
/// version's codelist; the response shape matches a version minus the
/// variant list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariantDetails {
    pub name: String,
    pub contact_person: ContactPerson,
    pub owning_section: String,
    pub last_modified: String,
    #[serde(default)]
    pub published: Vec<String>,
    pub valid_from: Option<String>,
    pub valid_to: Option<String>,
    pub introduction: String,
    pub legal_base: Option<String>,
    pub publications: Option<String>,
    pub derived_from: Option<String>,
    #[serde(default)]
    pub correspondence_tables: Vec<CorrespondenceTableSummary>,
    #[serde(default)]
    pub changelogs: Vec<Changelog>,
    #[serde(default)]
    pub levels: Vec<LevelDescriptor>,
    #[serde(default)]
    pub classification_items: Vec<CodeItem>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl VariantDetails {
    pub fn variant_id(&self) -> Result<&str> {
        self.links.self_id()
    }
}
