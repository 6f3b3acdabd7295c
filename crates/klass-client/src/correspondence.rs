//! Correspondence tables: mappings between two classifications.

use std::fmt;

use chrono::NaiveDate;
use polars::prelude::DataFrame;

use klass_model::{CorrespondenceTableDetails, Language};
use klass_tables::{Lookup, LookupOptions, SecondaryTable, correspondence_to_frame, to_lookup};

use crate::error::{ClientError, Result};
use crate::http::KlassClient;
use crate::params;

/// A correspondence between a source and a target classification, as a
/// `sourceCode`/`targetCode` frame plus the label used when joining.
pub struct Correspondence {
    label: String,
    data: DataFrame,
}

impl Correspondence {
    /// Wraps an already-decoded correspondence table. The join label is
    /// the target classification's name. No I/O.
    pub fn from_table(details: &CorrespondenceTableDetails) -> Result<Self> {
        Ok(Self {
            label: details.target.clone(),
            data: correspondence_to_frame(&details.correspondence_maps)?,
        })
    }

    pub fn fetch_by_id(
        client: &KlassClient,
        table_id: &str,
        language: Option<Language>,
    ) -> Result<Self> {
        let details = client.correspondence_table_by_id(table_id, language)?;
        Self::from_table(&details)
    }

    /// The correspondence between two classifications in a date range.
    ///
    /// `contain_quarter` replaces any to-date given with the last day
    /// of that quarter of the from-date's year, so the range ends on a
    /// quarter boundary.
    #[allow(clippy::too_many_arguments)]
    pub fn fetch_between(
        client: &KlassClient,
        source_classification_id: &str,
        target_classification_id: &str,
        from_date: &str,
        to_date: Option<&str>,
        contain_quarter: Option<u32>,
        language: Option<Language>,
        include_future: bool,
    ) -> Result<Self> {
        let quarter_to = match contain_quarter {
            Some(quarters) => {
                let start = NaiveDate::parse_from_str(from_date, "%Y-%m-%d").map_err(|_| {
                    ClientError::InvalidParameter {
                        name: "from".to_string(),
                        reason: format!("'{from_date}' is not a YYYY-MM-DD date"),
                    }
                })?;
                Some(params::quarter_end(start, quarters)?.format("%Y-%m-%d").to_string())
            }
            None => to_date.map(str::to_string),
        };
        let response = client.corresponds(
            source_classification_id,
            target_classification_id,
            from_date,
            quarter_to.as_deref(),
            language,
            include_future,
        )?;
        let target = client.classification_by_id(target_classification_id, language, false)?;
        Ok(Self {
            label: target.name,
            data: correspondence_to_frame(&response.correspondence_items)?,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    /// A source-to-target dictionary over the mapping.
    pub fn to_lookup(&self, options: &LookupOptions) -> Result<Lookup> {
        Ok(to_lookup(&self.data, "sourceCode", "targetCode", options)?)
    }

    pub fn as_secondary(&self) -> SecondaryTable {
        SecondaryTable::correspondence(self.label.clone(), self.data.clone())
    }
}

impl fmt::Display for Correspondence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Correspondence to: {}", self.label)?;
        write!(f, "Mappings: {}", self.data.height())
    }
}
