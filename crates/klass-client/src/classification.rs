//! The analyst-facing classification wrapper.

use std::collections::BTreeMap;
use std::fmt;

use polars::prelude::DataFrame;
use tracing::warn;

use klass_model::{ClassificationDetails, Language, VersionSummary};
use klass_tables::JoinOptions;

use crate::codes::Codes;
use crate::correspondence::Correspondence;
use crate::endpoints::CodesQuery;
use crate::error::{ClientError, Result};
use crate::http::KlassClient;
use crate::params;
use crate::variant::{Variant, VariantSearch};
use crate::version::Version;

/// One classification, with convenience methods for reaching its
/// versions, codelists, variants and correspondences.
pub struct Classification {
    id: String,
    details: ClassificationDetails,
}

impl Classification {
    /// Wraps an already-decoded classification response. No I/O.
    pub fn from_details(id: impl Into<String>, details: ClassificationDetails) -> Self {
        Self {
            id: id.into(),
            details,
        }
    }

    pub fn fetch(
        client: &KlassClient,
        classification_id: &str,
        language: Option<Language>,
        include_future: bool,
    ) -> Result<Self> {
        let details = client.classification_by_id(classification_id, language, include_future)?;
        Ok(Self::from_details(classification_id, details))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn details(&self) -> &ClassificationDetails {
        &self.details
    }

    pub fn versions(&self) -> &[VersionSummary] {
        &self.details.versions
    }

    /// Version id to version name for every listed version.
    pub fn versions_lookup(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        for version in &self.details.versions {
            match version.version_id() {
                Ok(id) => {
                    map.insert(id.to_string(), version.name.clone());
                }
                Err(err) => warn!(name = %version.name, %err, "version without a usable id"),
            }
        }
        map
    }

    /// The id of the version with the newest valid-from date.
    pub fn newest_version_id(&self) -> Result<String> {
        let newest = self
            .details
            .versions
            .iter()
            .max_by(|a, b| a.valid_from.cmp(&b.valid_from))
            .ok_or(ClientError::NoVersions)?;
        Ok(newest.version_id()?.to_string())
    }

    /// Fetches one version, defaulting to the newest by valid-from.
    pub fn get_version(
        &self,
        client: &KlassClient,
        version_id: Option<&str>,
        language: Option<Language>,
        include_future: bool,
    ) -> Result<Version> {
        let id = match version_id {
            Some(id) => id.to_string(),
            None => self.newest_version_id()?,
        };
        Version::fetch(client, &id, language, include_future)
    }

    /// Fetches the codelist for a date range; the from-date defaults
    /// to today.
    pub fn get_codes(
        &self,
        client: &KlassClient,
        from_date: Option<&str>,
        to_date: Option<&str>,
        options: &CodesQuery,
    ) -> Result<Codes> {
        Codes::fetch(client, &self.id, from_date, to_date, options)
    }

    /// Fetches the codelist valid on one date (defaulting to today).
    pub fn get_codes_at(
        &self,
        client: &KlassClient,
        date: Option<&str>,
        options: &CodesQuery,
    ) -> Result<Codes> {
        Codes::fetch_at(client, &self.id, date, options)
    }

    /// Code changes between two dates; the from-date defaults to today.
    pub fn get_changes(
        &self,
        client: &KlassClient,
        from_date: Option<&str>,
        to_date: Option<&str>,
        language: Option<Language>,
        include_future: bool,
    ) -> Result<DataFrame> {
        let from = from_date.map(str::to_string).unwrap_or_else(params::today);
        client.changes(&self.id, &from, to_date, language, include_future)
    }

    /// Searches the `variant` endpoint by name prefix and date range.
    pub fn get_variant_by_name(
        &self,
        client: &KlassClient,
        variant_name: &str,
        from_date: &str,
        to_date: Option<&str>,
        options: &CodesQuery,
    ) -> Result<VariantSearch> {
        VariantSearch::fetch(client, &self.id, variant_name, from_date, to_date, options)
    }

    /// Resolves a variant of the newest version by name prefix and
    /// fetches it by id. Zero matches and multiple matches are both
    /// errors; the ambiguity is reported with the candidate names.
    pub fn get_latest_variant_by_name(
        &self,
        client: &KlassClient,
        variant_name: &str,
        language: Option<Language>,
    ) -> Result<Variant> {
        let version_id = self.newest_version_id()?;
        let version = client.version_by_id(&version_id, language, false)?;
        let wanted = variant_name.to_lowercase();
        let matches: Vec<_> = version
            .classification_variants
            .iter()
            .filter(|variant| variant.name.to_lowercase().starts_with(&wanted))
            .collect();
        match matches.as_slice() {
            [] => Err(ClientError::NoVariantMatch {
                name: variant_name.to_string(),
            }),
            [variant] => Variant::fetch(client, variant.table_id()?, language),
            many => Err(ClientError::AmbiguousVariantMatch {
                name: variant_name.to_string(),
                matches: many.iter().map(|v| v.name.clone()).collect(),
            }),
        }
    }

    /// The correspondence from this classification to a target one.
    pub fn get_correspondence_to(
        &self,
        client: &KlassClient,
        target_classification_id: &str,
        from_date: &str,
        to_date: Option<&str>,
        contain_quarter: Option<u32>,
        language: Option<Language>,
    ) -> Result<Correspondence> {
        Correspondence::fetch_between(
            client,
            &self.id,
            target_classification_id,
            from_date,
            to_date,
            contain_quarter,
            language,
            false,
        )
    }

    /// Fetches every variant and correspondence of the newest version
    /// and joins them all onto its codelist.
    pub fn join_variants_and_correspondences(
        &self,
        client: &KlassClient,
        options: &JoinOptions,
    ) -> Result<DataFrame> {
        let version = self.get_version(client, None, None, false)?;
        version.join_variants_and_correspondences(client, options)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Classification {}: {}", self.id, self.details.name)?;
        let description = self.details.description.trim();
        if !description.is_empty() {
            writeln!(f, "{description}")?;
        }
        writeln!(f, "Owning section: {}", self.details.owning_section)?;
        write!(f, "Versions:")?;
        for version in &self.details.versions {
            write!(f, "\n  {}", version.name)?;
        }
        Ok(())
    }
}
