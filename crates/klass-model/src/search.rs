use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::links::Links;

/// One hit of `GET /classifications/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResult {
    pub name: String,
    pub snippet: Option<String>,
    pub search_score: Option<f64>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl SearchResult {
    pub fn classification_id(&self) -> Result<&str> {
        self.links.self_id()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchEmbedded {
    pub search_results: Vec<SearchResult>,
}

/// Response of `GET /classifications/search`.
///
/// The `_embedded` envelope is absent entirely when nothing matched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(rename = "_embedded")]
    pub embedded: Option<SearchEmbedded>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl SearchResponse {
    pub fn results(&self) -> &[SearchResult] {
        self.embedded
            .as_ref()
            .map(|e| e.search_results.as_slice())
            .unwrap_or(&[])
    }
}

/// One organizational section of Statistics Norway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SsbSection {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SsbSectionsEmbedded {
    pub ssb_sections: Vec<SsbSection>,
}

/// Response of `GET /ssbsections`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SsbSectionsResponse {
    #[serde(rename = "_embedded")]
    pub embedded: SsbSectionsEmbedded,
}

impl SsbSectionsResponse {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.embedded.ssb_sections.iter().map(|s| s.name.as_str())
    }
}
