use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::language::Language;
use crate::links::Links;
use crate::version::VersionSummary;

/// Contact person attached to classifications, versions and variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPerson {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Response of `GET /classifications/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassificationDetails {
    pub name: String,
    pub classification_type: String,
    pub last_modified: String,
    pub description: String,
    pub primary_language: Option<Language>,
    pub copyrighted: bool,
    pub include_short_name: bool,
    pub include_notes: bool,
    pub contact_person: ContactPerson,
    pub owning_section: String,
    pub statistical_units: Vec<String>,
    pub versions: Vec<VersionSummary>,
    #[serde(rename = "_links")]
    pub links: Links,
}

/// One classification in a list or family response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassificationSummary {
    pub name: String,
    pub classification_type: Option<String>,
    pub last_modified: Option<String>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl ClassificationSummary {
    pub fn classification_id(&self) -> Result<&str> {
        self.links.self_id()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationListEmbedded {
    pub classifications: Vec<ClassificationSummary>,
}

/// Response of `GET /classifications` (paginated envelope).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationListResponse {
    #[serde(rename = "_embedded")]
    pub embedded: ClassificationListEmbedded,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl ClassificationListResponse {
    pub fn classifications(&self) -> &[ClassificationSummary] {
        &self.embedded.classifications
    }
}
