//! Time-ranged codelists.

use std::fmt;

use polars::prelude::DataFrame;

use klass_model::CodeRow;
use klass_tables::{Lookup, LookupOptions, codes_to_frame, pivot_levels, to_lookup};

use crate::endpoints::CodesQuery;
use crate::error::{ClientError, Result};
use crate::http::KlassClient;
use crate::params;

/// Where a [`Codes`] table came from, so it can be re-fetched for a
/// different date range.
#[derive(Debug, Clone)]
struct CodesOrigin {
    classification_id: String,
    options: CodesQuery,
}

/// A codelist valid in a date range (or on a single date).
pub struct Codes {
    data: DataFrame,
    presentation_pattern: bool,
    origin: Option<CodesOrigin>,
}

impl Codes {
    /// Wraps already-decoded code rows. No I/O, no re-fetching.
    pub fn from_rows(rows: &[CodeRow]) -> Result<Self> {
        Ok(Self {
            data: codes_to_frame(rows)?,
            presentation_pattern: false,
            origin: None,
        })
    }

    /// Codes valid in a range; the from-date defaults to today.
    pub fn fetch(
        client: &KlassClient,
        classification_id: &str,
        from_date: Option<&str>,
        to_date: Option<&str>,
        options: &CodesQuery,
    ) -> Result<Self> {
        let from = from_date.map(str::to_string).unwrap_or_else(params::today);
        let data = client.codes(classification_id, &from, to_date, options)?;
        Ok(Self {
            data,
            presentation_pattern: options.presentation_name_pattern.is_some(),
            origin: Some(CodesOrigin {
                classification_id: classification_id.to_string(),
                options: options.clone(),
            }),
        })
    }

    /// Codes valid on one date; the date defaults to today.
    pub fn fetch_at(
        client: &KlassClient,
        classification_id: &str,
        date: Option<&str>,
        options: &CodesQuery,
    ) -> Result<Self> {
        let date = date.map(str::to_string).unwrap_or_else(params::today);
        let data = client.codes_at(classification_id, &date, options)?;
        Ok(Self {
            data,
            presentation_pattern: options.presentation_name_pattern.is_some(),
            origin: Some(CodesOrigin {
                classification_id: classification_id.to_string(),
                options: options.clone(),
            }),
        })
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Re-requests the same codelist for a different range. The result
    /// is a fresh table; nothing is patched in place.
    pub fn change_dates(
        &self,
        client: &KlassClient,
        from_date: Option<&str>,
        to_date: Option<&str>,
    ) -> Result<Self> {
        let origin = self.origin.as_ref().ok_or_else(|| ClientError::InvalidParameter {
            name: "classification_id".to_string(),
            reason: "this table was built from local rows, not fetched".to_string(),
        })?;
        Self::fetch(
            client,
            &origin.classification_id,
            from_date,
            to_date,
            &origin.options,
        )
    }

    /// The codelist reshaped to one column group per level.
    pub fn pivot_level(&self, keep: &[&str]) -> Result<DataFrame> {
        Ok(pivot_levels(&self.data, keep)?)
    }

    /// A code-to-label dictionary. The label column defaults to the
    /// presentation name when a pattern was requested, plain name
    /// otherwise.
    pub fn to_lookup(&self, options: &LookupOptions) -> Result<Lookup> {
        let value = if self.presentation_pattern {
            "presentationName"
        } else {
            "name"
        };
        Ok(to_lookup(&self.data, "code", value, options)?)
    }
}

impl fmt::Display for Codes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}
