use serde::{Deserialize, Serialize};

use crate::classification::ClassificationSummary;
use crate::error::Result;
use crate::links::Links;

/// One family in the `classificationfamilies` list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FamilySummary {
    pub name: String,
    pub number_of_classifications: i64,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl FamilySummary {
    pub fn family_id(&self) -> Result<&str> {
        self.links.self_id()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FamilyListEmbedded {
    pub classification_families: Vec<FamilySummary>,
}

/// Response of `GET /classificationfamilies`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyListResponse {
    #[serde(rename = "_embedded")]
    pub embedded: FamilyListEmbedded,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl FamilyListResponse {
    pub fn families(&self) -> &[FamilySummary] {
        &self.embedded.classification_families
    }
}

/// Response of `GET /classificationfamilies/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyDetails {
    pub name: String,
    pub classifications: Vec<ClassificationSummary>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl FamilyDetails {
    pub fn family_id(&self) -> Result<&str> {
        self.links.self_id()
    }
}
