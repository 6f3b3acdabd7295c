//! Cross-table joins: variant groupings and correspondences as extra
//! columns on a base code table.

use std::collections::{HashMap, HashSet};

use polars::prelude::{DataFrame, NamedFrom, Series};

use crate::error::{Result, TableError};
use crate::lookup::{LookupOptions, to_lookup};
use crate::naming::short_name;
use crate::values::column_values;

/// One table to be joined onto a base code table: its display label
/// (used to derive the new column name), its frame, and the key/value
/// columns the mapping is read from.
#[derive(Debug, Clone)]
pub struct SecondaryTable {
    pub label: String,
    pub data: DataFrame,
    pub key_column: String,
    pub value_column: String,
}

impl SecondaryTable {
    /// A classification variant: leaf codes keyed by `code`, grouping
    /// codes in `parentCode`.
    pub fn variant(label: impl Into<String>, data: DataFrame) -> Self {
        Self {
            label: label.into(),
            data,
            key_column: "code".to_string(),
            value_column: "parentCode".to_string(),
        }
    }

    /// A correspondence table: `sourceCode` mapped to `targetCode`.
    pub fn correspondence(label: impl Into<String>, data: DataFrame) -> Self {
        Self {
            label: label.into(),
            data,
            key_column: "sourceCode".to_string(),
            value_column: "targetCode".to_string(),
        }
    }
}

/// Options for [`join_secondary`].
#[derive(Debug, Clone)]
pub struct JoinOptions {
    /// Column of the base table holding the codes to map.
    pub code_column: String,
    /// Word count fed to the short-name generator.
    pub shortname_word_count: usize,
    /// Extra columns copied over from each secondary table, named
    /// `{shortname}_{column}`. Entries a secondary does not have are
    /// skipped with a warning.
    pub include_columns: Vec<String>,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            code_column: "code".to_string(),
            shortname_word_count: 3,
            include_columns: Vec::new(),
        }
    }
}

/// Joins secondary tables onto a base code table, one mapped column
/// (plus any include columns) per secondary.
///
/// The join is purely additive: the output has the same rows as the
/// base and every pre-existing column untouched; codes without a
/// mapping get nulls. Column names are derived from each secondary's
/// label via [`short_name`]; a name that collides with a base column
/// or a previously generated one fails before any column of the
/// offending table is written, so a collision error leaves no partial
/// columns from that table behind.
pub fn join_secondary(
    df: &DataFrame,
    secondaries: &[SecondaryTable],
    options: &JoinOptions,
) -> Result<DataFrame> {
    let base_codes = column_values(df, &options.code_column)?;
    let mut used: HashSet<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut out = df.clone();

    for (idx, secondary) in secondaries.iter().enumerate() {
        if secondary.label.trim().is_empty() {
            return Err(TableError::MissingLabel {
                context: format!("#{}", idx + 1),
            });
        }
        let name = short_name(&secondary.label, options.shortname_word_count);
        if name.is_empty() {
            return Err(TableError::MissingLabel {
                context: secondary.label.clone(),
            });
        }

        // Decide every column this table would add, then check them
        // all before writing the first one.
        let mut additions = vec![name.clone()];
        for column in &options.include_columns {
            if secondary.data.column(column).is_err() {
                tracing::warn!(
                    table = %secondary.label,
                    column = %column,
                    "include column not present in secondary table, skipping"
                );
                continue;
            }
            additions.push(format!("{name}_{column}"));
        }
        for addition in &additions {
            if used.contains(addition) {
                return Err(TableError::ShortNameCollision {
                    name: addition.clone(),
                });
            }
        }

        let lookup_options = LookupOptions::default();
        let mapping = to_lookup(
            &secondary.data,
            &secondary.key_column,
            &secondary.value_column,
            &lookup_options,
        )?;
        let mapped: Vec<Option<String>> = base_codes
            .iter()
            .map(|code| {
                code.as_deref()
                    .and_then(|c| mapping.get(c))
                    .map(str::to_string)
            })
            .collect();
        out.with_column(Series::new(name.as_str().into(), mapped))?;

        if additions.len() > 1 {
            // Row index of the secondary by its key, last row wins,
            // mirroring the mapping above.
            let keys = column_values(&secondary.data, &secondary.key_column)?;
            let mut row_of: HashMap<&str, usize> = HashMap::new();
            for (row, key) in keys.iter().enumerate() {
                if let Some(key) = key.as_deref() {
                    row_of.insert(key, row);
                }
            }
            for addition in &additions[1..] {
                let column = &addition[name.len() + 1..];
                let values = column_values(&secondary.data, column)?;
                let copied: Vec<Option<String>> = base_codes
                    .iter()
                    .map(|code| {
                        code.as_deref()
                            .and_then(|c| row_of.get(c))
                            .and_then(|row| values[*row].clone())
                    })
                    .collect();
                out.with_column(Series::new(addition.as_str().into(), copied))?;
            }
        }
        used.extend(additions);
    }
    Ok(out)
}
