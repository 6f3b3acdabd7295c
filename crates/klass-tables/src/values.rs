//! AnyValue extraction helpers for string-typed KLASS frames.

use polars::prelude::{AnyValue, DataFrame};

use crate::error::{Result, TableError};

/// Converts a polars AnyValue to a String. Null becomes the empty
/// string; numeric types keep their plain display form.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Converts an AnyValue to a String, mapping null to None. Empty
/// strings are preserved; emptiness is a separate concern handled by
/// the lookup builder.
pub fn any_to_opt_string(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::String(s) => Some(s.to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        other => Some(other.to_string()),
    }
}

/// Extracts a whole column as optional strings.
///
/// A missing column is a structural error, surfaced immediately.
pub fn column_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name).map_err(|_| TableError::MissingColumn {
        name: name.to_string(),
    })?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_opt_string(
            column.get(idx).unwrap_or(AnyValue::Null),
        ));
    }
    Ok(values)
}

/// True when a value counts as missing for lookup purposes: null or an
/// empty/whitespace string.
pub fn is_missing(value: Option<&str>) -> bool {
    value.map(str::trim).is_none_or(str::is_empty)
}
