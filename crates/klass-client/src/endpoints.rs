//! Typed endpoint functions, one per KLASS resource.
//!
//! Every method validates its parameters through the `params` module,
//! builds the exact query the API expects, and decodes into the
//! `klass-model` type. The codelist endpoints return DataFrames
//! directly since that is the shape everything downstream consumes.

use chrono::{DateTime, Utc};
use polars::prelude::DataFrame;

use klass_model::{
    ChangesResponse, ClassificationDetails, ClassificationListResponse, CodesResponse,
    CorrespondenceTableDetails, CorrespondsResponse, FamilyDetails, FamilyListResponse,
    Language, SearchResponse, VariantDetails, VersionDetails,
};
use klass_tables::{changes_to_frame, codes_to_frame};

use crate::error::Result;
use crate::http::KlassClient;
use crate::params;

/// Optional parameters shared by the codelist endpoints.
#[derive(Debug, Clone, Default)]
pub struct CodesQuery {
    pub select_codes: Option<String>,
    pub select_level: Option<String>,
    pub presentation_name_pattern: Option<String>,
    pub language: Option<Language>,
    pub include_future: bool,
}

impl CodesQuery {
    fn append(&self, query: &mut Vec<(&'static str, String)>) -> Result<()> {
        if let Some(codes) = &self.select_codes {
            query.push(("selectCodes", params::select_codes(codes)?));
        }
        if let Some(level) = &self.select_level {
            query.push(("selectLevel", params::whole_number("selectLevel", level)?));
        }
        if let Some(pattern) = &self.presentation_name_pattern {
            query.push((
                "presentationNamePattern",
                params::presentation_name_pattern(pattern)?,
            ));
        }
        if let Some(language) = self.language {
            query.push(("language", language.to_string()));
        }
        if self.include_future {
            query.push(("includeFuture", params::bool_value(true)));
        }
        Ok(())
    }
}

impl KlassClient {
    /// `GET /classifications`.
    pub fn classifications(
        &self,
        include_codelists: bool,
        changed_since: Option<&str>,
    ) -> Result<ClassificationListResponse> {
        let mut query = vec![("includeCodelists", params::bool_value(include_codelists))];
        if let Some(since) = changed_since {
            query.push(("changedSince", params::changed_since(since)?));
        }
        self.get_json("classifications", &query)
    }

    /// Like [`KlassClient::classifications`], taking the changed-since
    /// cutoff as a timestamp instead of a preformatted string.
    pub fn classifications_changed_since(
        &self,
        include_codelists: bool,
        since: DateTime<Utc>,
    ) -> Result<ClassificationListResponse> {
        let formatted = params::format_klass_datetime(since);
        self.classifications(include_codelists, Some(&formatted))
    }

    /// `GET /classifications/search`.
    pub fn classification_search(
        &self,
        query_text: &str,
        include_codelists: bool,
        ssb_section: Option<&str>,
    ) -> Result<SearchResponse> {
        let mut query = vec![
            ("query", params::query_text("query", query_text)?),
            ("includeCodelists", params::bool_value(include_codelists)),
        ];
        if let Some(section) = ssb_section {
            query.push(("ssbSection", self.resolve_section(section)?));
        }
        self.get_json("classifications/search", &query)
    }

    /// `GET /classifications/{id}`.
    pub fn classification_by_id(
        &self,
        classification_id: &str,
        language: Option<Language>,
        include_future: bool,
    ) -> Result<ClassificationDetails> {
        let id = params::whole_number("classification_id", classification_id)?;
        let mut query = Vec::new();
        if let Some(language) = language {
            query.push(("language", language.to_string()));
        }
        if include_future {
            query.push(("includeFuture", params::bool_value(true)));
        }
        self.get_json(&format!("classifications/{id}"), &query)
    }

    /// `GET /classifications/{id}/codes`: codes valid in a date range.
    pub fn codes(
        &self,
        classification_id: &str,
        from_date: &str,
        to_date: Option<&str>,
        options: &CodesQuery,
    ) -> Result<DataFrame> {
        let id = params::whole_number("classification_id", classification_id)?;
        let mut query = vec![("from", params::date("from", from_date)?)];
        if let Some(to) = to_date {
            query.push(("to", params::date("to", to)?));
        }
        options.append(&mut query)?;
        let response: CodesResponse = self.get_json(&format!("classifications/{id}/codes"), &query)?;
        Ok(codes_to_frame(&response.codes)?)
    }

    /// `GET /classifications/{id}/codesAt`: codes valid on one date.
    pub fn codes_at(
        &self,
        classification_id: &str,
        date: &str,
        options: &CodesQuery,
    ) -> Result<DataFrame> {
        let id = params::whole_number("classification_id", classification_id)?;
        let mut query = vec![("date", params::date("date", date)?)];
        options.append(&mut query)?;
        let response: CodesResponse =
            self.get_json(&format!("classifications/{id}/codesAt"), &query)?;
        Ok(codes_to_frame(&response.codes)?)
    }

    /// `GET /versions/{id}`.
    pub fn version_by_id(
        &self,
        version_id: &str,
        language: Option<Language>,
        include_future: bool,
    ) -> Result<VersionDetails> {
        let id = params::whole_number("version_id", version_id)?;
        let mut query = Vec::new();
        if let Some(language) = language {
            query.push(("language", language.to_string()));
        }
        if include_future {
            query.push(("includeFuture", params::bool_value(true)));
        }
        self.get_json(&format!("versions/{id}"), &query)
    }

    /// `GET /classifications/{id}/variant`: a named variant's codes in
    /// a date range.
    pub fn variant(
        &self,
        classification_id: &str,
        variant_name: &str,
        from_date: &str,
        to_date: Option<&str>,
        options: &CodesQuery,
    ) -> Result<DataFrame> {
        let id = params::whole_number("classification_id", classification_id)?;
        let mut query = vec![
            ("variantName", params::query_text("variantName", variant_name)?),
            ("from", params::date("from", from_date)?),
        ];
        if let Some(to) = to_date {
            query.push(("to", params::date("to", to)?));
        }
        options.append(&mut query)?;
        let response: CodesResponse =
            self.get_json(&format!("classifications/{id}/variant"), &query)?;
        Ok(codes_to_frame(&response.codes)?)
    }

    /// `GET /classifications/{id}/variantAt`.
    pub fn variant_at(
        &self,
        classification_id: &str,
        variant_name: &str,
        date: &str,
        options: &CodesQuery,
    ) -> Result<DataFrame> {
        let id = params::whole_number("classification_id", classification_id)?;
        let mut query = vec![
            ("variantName", params::query_text("variantName", variant_name)?),
            ("date", params::date("date", date)?),
        ];
        options.append(&mut query)?;
        let response: CodesResponse =
            self.get_json(&format!("classifications/{id}/variantAt"), &query)?;
        Ok(codes_to_frame(&response.codes)?)
    }

    /// `GET /variants/{id}`.
    pub fn variants_by_id(
        &self,
        variant_id: &str,
        language: Option<Language>,
    ) -> Result<VariantDetails> {
        let id = params::whole_number("variant_id", variant_id)?;
        let mut query = Vec::new();
        if let Some(language) = language {
            query.push(("language", language.to_string()));
        }
        self.get_json(&format!("variants/{id}"), &query)
    }

    /// `GET /classifications/{id}/corresponds`.
    pub fn corresponds(
        &self,
        source_classification_id: &str,
        target_classification_id: &str,
        from_date: &str,
        to_date: Option<&str>,
        language: Option<Language>,
        include_future: bool,
    ) -> Result<CorrespondsResponse> {
        let id = params::whole_number("classification_id", source_classification_id)?;
        let mut query = vec![
            (
                "targetClassificationId",
                params::whole_number("targetClassificationId", target_classification_id)?,
            ),
            ("from", params::date("from", from_date)?),
        ];
        if let Some(to) = to_date {
            query.push(("to", params::date("to", to)?));
        }
        if let Some(language) = language {
            query.push(("language", language.to_string()));
        }
        if include_future {
            query.push(("includeFuture", params::bool_value(true)));
        }
        self.get_json(&format!("classifications/{id}/corresponds"), &query)
    }

    /// `GET /classifications/{id}/correspondsAt`.
    pub fn corresponds_at(
        &self,
        source_classification_id: &str,
        target_classification_id: &str,
        date: &str,
        language: Option<Language>,
        include_future: bool,
    ) -> Result<CorrespondsResponse> {
        let id = params::whole_number("classification_id", source_classification_id)?;
        let mut query = vec![
            (
                "targetClassificationId",
                params::whole_number("targetClassificationId", target_classification_id)?,
            ),
            ("date", params::date("date", date)?),
        ];
        if let Some(language) = language {
            query.push(("language", language.to_string()));
        }
        if include_future {
            query.push(("includeFuture", params::bool_value(true)));
        }
        self.get_json(&format!("classifications/{id}/correspondsAt"), &query)
    }

    /// `GET /correspondencetables/{id}`.
    pub fn correspondence_table_by_id(
        &self,
        table_id: &str,
        language: Option<Language>,
    ) -> Result<CorrespondenceTableDetails> {
        let id = params::whole_number("table_id", table_id)?;
        let mut query = Vec::new();
        if let Some(language) = language {
            query.push(("language", language.to_string()));
        }
        self.get_json(&format!("correspondencetables/{id}"), &query)
    }

    /// `GET /classifications/{id}/changes`.
    pub fn changes(
        &self,
        classification_id: &str,
        from_date: &str,
        to_date: Option<&str>,
        language: Option<Language>,
        include_future: bool,
    ) -> Result<DataFrame> {
        let id = params::whole_number("classification_id", classification_id)?;
        let mut query = vec![("from", params::date("from", from_date)?)];
        if let Some(to) = to_date {
            query.push(("to", params::date("to", to)?));
        }
        if let Some(language) = language {
            query.push(("language", language.to_string()));
        }
        if include_future {
            query.push(("includeFuture", params::bool_value(true)));
        }
        let response: ChangesResponse =
            self.get_json(&format!("classifications/{id}/changes"), &query)?;
        Ok(changes_to_frame(&response.code_changes)?)
    }

    /// `GET /classificationfamilies`.
    pub fn classification_families(
        &self,
        ssb_section: Option<&str>,
        include_codelists: bool,
        language: Option<Language>,
    ) -> Result<FamilyListResponse> {
        let mut query = vec![("includeCodelists", params::bool_value(include_codelists))];
        if let Some(section) = ssb_section {
            query.push(("ssbSection", self.resolve_section(section)?));
        }
        if let Some(language) = language {
            query.push(("language", language.to_string()));
        }
        self.get_json("classificationfamilies", &query)
    }

    /// `GET /classificationfamilies/{id}`.
    pub fn classification_family_by_id(
        &self,
        family_id: &str,
        ssb_section: Option<&str>,
        include_codelists: bool,
        language: Option<Language>,
    ) -> Result<FamilyDetails> {
        let id = params::whole_number("family_id", family_id)?;
        let mut query = vec![("includeCodelists", params::bool_value(include_codelists))];
        if let Some(section) = ssb_section {
            query.push(("ssbSection", self.resolve_section(section)?));
        }
        if let Some(language) = language {
            query.push(("language", language.to_string()));
        }
        self.get_json(&format!("classificationfamilies/{id}"), &query)
    }

    /// `GET /ssbsection`, cached per client.
    pub fn ssb_sections(&self) -> Result<Vec<String>> {
        Ok(self.section_names()?.to_vec())
    }
}
