//! Classification variants: alternative groupings of a codelist.

use std::fmt;

use polars::prelude::DataFrame;

use klass_model::{Language, VariantDetails};
use klass_tables::{
    LevelMap, Lookup, LookupOptions, SecondaryTable, items_to_frame, to_lookup,
};

use crate::endpoints::CodesQuery;
use crate::error::Result;
use crate::http::KlassClient;

/// A variant fetched by its id, codelist included.
pub struct Variant {
    details: VariantDetails,
    levels: LevelMap,
    data: DataFrame,
}

impl Variant {
    /// Wraps an already-decoded variant response. No I/O.
    pub fn from_details(details: VariantDetails) -> Result<Self> {
        let levels = LevelMap::new(&details.levels);
        let data = items_to_frame(&details.classification_items, &levels, None)?;
        Ok(Self {
            details,
            levels,
            data,
        })
    }

    pub fn fetch(
        client: &KlassClient,
        variant_id: &str,
        language: Option<Language>,
    ) -> Result<Self> {
        let details = client.variants_by_id(variant_id, language)?;
        Self::from_details(details)
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn details(&self) -> &VariantDetails {
        &self.details
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn levels(&self) -> &LevelMap {
        &self.levels
    }

    pub fn to_lookup(&self, value: &str, options: &LookupOptions) -> Result<Lookup> {
        Ok(to_lookup(&self.data, "code", value, options)?)
    }

    /// This variant as a join input: leaf codes mapped to the variant's
    /// grouping codes.
    pub fn as_secondary(&self) -> SecondaryTable {
        SecondaryTable::variant(self.details.name.clone(), self.data.clone())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Variant: {}", self.details.name)?;
        write!(f, "Codes: {}", self.data.height())
    }
}

/// A variant found by classification id and name prefix, through the
/// `variant`/`variantAt` endpoints.
pub struct VariantSearch {
    classification_id: String,
    name: String,
    data: DataFrame,
}

impl VariantSearch {
    /// The variant's codes in a date range.
    pub fn fetch(
        client: &KlassClient,
        classification_id: &str,
        variant_name: &str,
        from_date: &str,
        to_date: Option<&str>,
        options: &CodesQuery,
    ) -> Result<Self> {
        let data = client.variant(classification_id, variant_name, from_date, to_date, options)?;
        Ok(Self {
            classification_id: classification_id.to_string(),
            name: variant_name.to_string(),
            data,
        })
    }

    /// The variant's codes on one date.
    pub fn fetch_at(
        client: &KlassClient,
        classification_id: &str,
        variant_name: &str,
        date: &str,
        options: &CodesQuery,
    ) -> Result<Self> {
        let data = client.variant_at(classification_id, variant_name, date, options)?;
        Ok(Self {
            classification_id: classification_id.to_string(),
            name: variant_name.to_string(),
            data,
        })
    }

    pub fn classification_id(&self) -> &str {
        &self.classification_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn to_lookup(&self, value: &str, options: &LookupOptions) -> Result<Lookup> {
        Ok(to_lookup(&self.data, "code", value, options)?)
    }

    pub fn as_secondary(&self) -> SecondaryTable {
        SecondaryTable::variant(self.name.clone(), self.data.clone())
    }
}

impl fmt::Display for VariantSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Variant '{}' of classification {}",
            self.name, self.classification_id
        )?;
        write!(f, "Codes: {}", self.data.height())
    }
}
