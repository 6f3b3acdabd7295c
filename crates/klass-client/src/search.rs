//! Free-text search over classifications and families.

use std::collections::HashSet;
use std::fmt;

use klass_model::{FamilySummary, Language, SearchResponse, SearchResult};

use crate::error::Result;
use crate::http::KlassClient;

/// Results of a classification search.
pub struct SearchClassifications {
    query: String,
    response: SearchResponse,
    no_dupes: bool,
}

impl SearchClassifications {
    /// Wraps an already-decoded search response. No I/O.
    pub fn from_response(
        query: impl Into<String>,
        response: SearchResponse,
        no_dupes: bool,
    ) -> Self {
        Self {
            query: query.into(),
            response,
            no_dupes,
        }
    }

    /// Runs a search.
    ///
    /// A purely numeric query is treated as a classification id and
    /// replaced by that classification's name before searching, since
    /// the API's text search does not match on ids. An empty query
    /// combined with a section becomes a single space, which the API
    /// accepts as "everything in this section".
    pub fn fetch(
        client: &KlassClient,
        query: &str,
        ssb_section: Option<&str>,
        include_codelists: bool,
        no_dupes: bool,
    ) -> Result<Self> {
        let trimmed = query.trim();
        let effective = if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            let details = client.classification_by_id(trimmed, None, false)?;
            details
                .name
                .chars()
                .filter(|c| c.is_alphanumeric() || c.is_whitespace())
                .collect()
        } else if trimmed.is_empty() && ssb_section.is_some() {
            " ".to_string()
        } else {
            trimmed.to_string()
        };
        let response = client.classification_search(&effective, include_codelists, ssb_section)?;
        Ok(Self::from_response(effective, response, no_dupes))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The hits, optionally de-duplicated by classification id (the
    /// API can return the same classification once per matching
    /// version).
    pub fn results(&self) -> Vec<&SearchResult> {
        let mut seen = HashSet::new();
        self.response
            .results()
            .iter()
            .filter(|result| {
                if !self.no_dupes {
                    return true;
                }
                match result.classification_id() {
                    Ok(id) => seen.insert(id.to_string()),
                    Err(_) => true,
                }
            })
            .collect()
    }

    /// One `id: name` line per hit, for terminals and logs.
    pub fn simple_search_result(&self) -> String {
        let results = self.results();
        if results.is_empty() {
            return format!("No results for '{}'", self.query);
        }
        results
            .iter()
            .map(|result| {
                let id = result.classification_id().unwrap_or("?");
                format!("{}: {}", id, result.name)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for SearchClassifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.simple_search_result())
    }
}

/// Results of a family listing, optionally restricted to a section.
pub struct SearchFamilies {
    families: Vec<FamilySummary>,
}

impl SearchFamilies {
    pub fn from_families(families: Vec<FamilySummary>) -> Self {
        Self { families }
    }

    pub fn fetch(
        client: &KlassClient,
        ssb_section: Option<&str>,
        language: Option<Language>,
    ) -> Result<Self> {
        let response = client.classification_families(ssb_section, false, language)?;
        Ok(Self::from_families(response.families().to_vec()))
    }

    pub fn families(&self) -> &[FamilySummary] {
        &self.families
    }

    /// One `id: name (n classifications)` line per family.
    pub fn simple_search_result(&self) -> String {
        if self.families.is_empty() {
            return "No families found".to_string();
        }
        self.families
            .iter()
            .map(|family| {
                let id = family.family_id().unwrap_or("?");
                format!(
                    "{}: {} ({} classifications)",
                    id, family.name, family.number_of_classifications
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for SearchFamilies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.simple_search_result())
    }
}
