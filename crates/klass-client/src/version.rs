//! A classification version: one complete codelist frozen in time.

use std::collections::BTreeMap;
use std::fmt;

use polars::prelude::DataFrame;
use tracing::warn;

use klass_model::{Language, VersionDetails};
use klass_tables::{
    JoinOptions, LevelMap, Lookup, LookupOptions, items_to_frame, join_secondary, pivot_levels,
    to_lookup,
};

use crate::correspondence::Correspondence;
use crate::error::Result;
use crate::http::KlassClient;
use crate::variant::Variant;

/// A version wrapper holding the decoded response, its level map and
/// the codelist as a DataFrame (built once at construction, with the
/// `levelName` column filled in).
#[derive(Debug)]
pub struct Version {
    details: VersionDetails,
    levels: LevelMap,
    data: DataFrame,
}

impl Version {
    /// Wraps an already-decoded version response. No I/O.
    pub fn from_details(details: VersionDetails) -> Result<Self> {
        Self::with_level(details, None)
    }

    /// Like [`Version::from_details`] but keeping only one level of the
    /// codelist. The selector may be a level number or a level name.
    pub fn with_level(details: VersionDetails, select_level: Option<&str>) -> Result<Self> {
        let levels = LevelMap::new(&details.levels);
        let data = items_to_frame(&details.classification_items, &levels, select_level)?;
        Ok(Self {
            details,
            levels,
            data,
        })
    }

    pub fn fetch(
        client: &KlassClient,
        version_id: &str,
        language: Option<Language>,
        include_future: bool,
    ) -> Result<Self> {
        let details = client.version_by_id(version_id, language, include_future)?;
        Self::from_details(details)
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn details(&self) -> &VersionDetails {
        &self.details
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn levels(&self) -> &LevelMap {
        &self.levels
    }

    /// Variant id to variant name, for discovering what can be joined.
    pub fn variants_lookup(&self) -> BTreeMap<String, String> {
        summaries_by_id(&self.details.classification_variants)
    }

    /// Correspondence table id to table name.
    pub fn correspondences_lookup(&self) -> BTreeMap<String, String> {
        summaries_by_id(&self.details.correspondence_tables)
    }

    /// The codelist reshaped to one column group per level.
    pub fn pivot_level(&self, keep: &[&str]) -> Result<DataFrame> {
        Ok(pivot_levels(&self.data, keep)?)
    }

    /// A code-to-label dictionary over the codelist.
    pub fn to_lookup(&self, value: &str, options: &LookupOptions) -> Result<Lookup> {
        Ok(to_lookup(&self.data, "code", value, options)?)
    }

    /// Fetches every variant and correspondence table of this version
    /// and joins them all onto the codelist as new columns.
    pub fn join_variants_and_correspondences(
        &self,
        client: &KlassClient,
        options: &JoinOptions,
    ) -> Result<DataFrame> {
        let mut secondaries = Vec::new();
        for summary in &self.details.classification_variants {
            let id = summary.table_id()?;
            let variant = Variant::fetch(client, id, None)?;
            secondaries.push(variant.as_secondary());
        }
        for summary in &self.details.correspondence_tables {
            let id = summary.table_id()?;
            let table = Correspondence::fetch_by_id(client, id, None)?;
            secondaries.push(table.as_secondary());
        }
        Ok(join_secondary(&self.data, &secondaries, options)?)
    }
}

fn summaries_by_id(
    summaries: &[klass_model::CorrespondenceTableSummary],
) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for summary in summaries {
        match summary.table_id() {
            Ok(id) => {
                map.insert(id.to_string(), summary.name.clone());
            }
            Err(err) => warn!(name = %summary.name, %err, "summary without a usable id"),
        }
    }
    map
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Version: {}", self.details.name)?;
        write!(f, "Valid: from {}", self.details.valid_from)?;
        if let Some(to) = &self.details.valid_to {
            write!(f, " to {to}")?;
        }
        writeln!(f)?;
        writeln!(f, "Last modified: {}", self.details.last_modified)?;
        if !self.levels.is_empty() {
            writeln!(f, "Levels: {}", self.levels.len())?;
        }
        write!(f, "Codes: {}", self.data.height())
    }
}
