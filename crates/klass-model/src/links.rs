use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One entry in a `_links` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,
}

/// The HATEOAS `_links` object the API attaches to most responses.
///
/// The API is not navigated through these links; the only thing the
/// library needs from them is the numeric id at the end of the `self`
/// href, which is how the API communicates the ids of versions,
/// variants, correspondence tables, families and search hits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links {
    pub rels: BTreeMap<String, Link>,
}

impl Links {
    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.rels.get(rel)
    }

    /// The trailing path segment of the `self` link.
    pub fn self_id(&self) -> Result<&str> {
        self.id_of("self")
    }

    /// The trailing path segment of the link with the given rel.
    pub fn id_of(&self, rel: &str) -> Result<&str> {
        let link = self.rels.get(rel).ok_or_else(|| ModelError::MissingLink {
            rel: rel.to_string(),
        })?;
        let href = link.href.trim_end_matches('/');
        let id = href.rsplit('/').next().filter(|seg| !seg.is_empty());
        id.ok_or_else(|| ModelError::MalformedLink {
            href: link.href.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(href: &str) -> Links {
        let mut rels = BTreeMap::new();
        rels.insert(
            "self".to_string(),
            Link {
                href: href.to_string(),
                templated: None,
            },
        );
        Links { rels }
    }

    #[test]
    fn extracts_trailing_id() {
        let l = links("https://data.ssb.no/api/klass/v1/versions/1954");
        assert_eq!(l.self_id().unwrap(), "1954");
    }

    #[test]
    fn missing_rel_errors() {
        let l = links("https://data.ssb.no/api/klass/v1/versions/1954");
        assert!(l.id_of("target").is_err());
    }
}
