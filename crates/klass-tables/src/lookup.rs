//! Code-to-label dictionaries built from code tables.

use std::collections::HashMap;

use polars::prelude::DataFrame;

use crate::error::Result;
use crate::values::{column_values, is_missing};

const NAME: &str = "name";
const PRESENTATION_NAME: &str = "presentationName";
const LEVEL: &str = "level";

/// Options for [`to_lookup`].
#[derive(Debug, Clone)]
pub struct LookupOptions {
    /// Fallback label returned for keys the table does not know.
    /// `None` means absent keys map to nothing.
    pub default: Option<String>,
    /// Drop rows whose key or value is null or blank instead of
    /// keeping them as empty strings.
    pub remove_empty: bool,
    /// Restrict the dictionary to one hierarchy level before building.
    /// The selector is matched against the `level` column as-is.
    pub level: Option<String>,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            default: None,
            remove_empty: true,
            level: None,
        }
    }
}

/// A code-to-label dictionary with an optional fallback label.
#[derive(Debug, Clone, Default)]
pub struct Lookup {
    map: HashMap<String, String>,
    default: Option<String>,
}

impl Lookup {
    /// The label for a key, or the fallback when the key is unknown.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map
            .get(key)
            .or(self.default.as_ref())
            .map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Builds a key-to-value dictionary from two columns of a frame.
///
/// Requesting `presentationName` as the value column falls back row by
/// row to `name` when the presentation name is blank, and entirely
/// when the column is absent. When the same key appears more than once
/// the last row wins.
pub fn to_lookup(
    df: &DataFrame,
    key: &str,
    value: &str,
    options: &LookupOptions,
) -> Result<Lookup> {
    let keys = column_values(df, key)?;
    let values = if value == PRESENTATION_NAME && df.column(value).is_err() {
        column_values(df, NAME)?
    } else {
        column_values(df, value)?
    };
    let fallback = if value == PRESENTATION_NAME && df.column(NAME).is_ok() {
        column_values(df, NAME)?
    } else {
        vec![None; keys.len()]
    };
    let levels = match &options.level {
        Some(_) => column_values(df, LEVEL)?,
        None => Vec::new(),
    };

    let mut map = HashMap::new();
    for row in 0..keys.len() {
        if let Some(wanted) = &options.level {
            if levels[row].as_deref().map(str::trim) != Some(wanted.trim()) {
                continue;
            }
        }
        let label = if is_missing(values[row].as_deref()) {
            fallback[row].clone()
        } else {
            values[row].clone()
        };
        if options.remove_empty
            && (is_missing(keys[row].as_deref()) || is_missing(label.as_deref()))
        {
            continue;
        }
        let Some(k) = keys[row].as_deref() else {
            continue;
        };
        map.insert(k.to_string(), label.unwrap_or_default());
    }
    Ok(Lookup {
        map,
        default: options.default.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn frame(rows: &[(&str, Option<&str>, Option<&str>)]) -> DataFrame {
        let codes: Vec<Option<String>> =
            rows.iter().map(|(c, _, _)| Some(c.to_string())).collect();
        let names: Vec<Option<String>> = rows
            .iter()
            .map(|(_, n, _)| n.map(str::to_string))
            .collect();
        let pres: Vec<Option<String>> = rows
            .iter()
            .map(|(_, _, p)| p.map(str::to_string))
            .collect();
        DataFrame::new(vec![
            Series::new("code".into(), codes).into(),
            Series::new("name".into(), names).into(),
            Series::new("presentationName".into(), pres).into(),
        ])
        .unwrap()
    }

    #[test]
    fn round_trips_unique_pairs() {
        let df = frame(&[("1", Some("Mann"), None), ("2", Some("Kvinne"), None)]);
        let lookup = to_lookup(&df, "code", "name", &LookupOptions::default()).unwrap();
        assert_eq!(lookup.get("1"), Some("Mann"));
        assert_eq!(lookup.get("2"), Some("Kvinne"));
        assert_eq!(lookup.len(), 2);
    }

    #[test]
    fn presentation_name_falls_back_to_name() {
        let df = frame(&[
            ("1", Some("Mann"), Some("1 Mann")),
            ("2", Some("Kvinne"), None),
        ]);
        let lookup =
            to_lookup(&df, "code", "presentationName", &LookupOptions::default()).unwrap();
        assert_eq!(lookup.get("1"), Some("1 Mann"));
        assert_eq!(lookup.get("2"), Some("Kvinne"));
    }

    #[test]
    fn empty_values_are_removed_by_default() {
        let df = frame(&[
            ("1", Some("Mann"), None),
            ("2", Some(""), None),
            ("3", None, None),
        ]);
        let lookup = to_lookup(&df, "code", "name", &LookupOptions::default()).unwrap();
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup.get("1"), Some("Mann"));
        assert_eq!(lookup.get("2"), None);
    }

    #[test]
    fn default_label_covers_unknown_keys() {
        let df = frame(&[("1", Some("Mann"), None)]);
        let options = LookupOptions {
            default: Some("Ukjent".to_string()),
            ..LookupOptions::default()
        };
        let lookup = to_lookup(&df, "code", "name", &options).unwrap();
        assert_eq!(lookup.get("1"), Some("Mann"));
        assert_eq!(lookup.get("42"), Some("Ukjent"));
    }

    #[test]
    fn last_duplicate_wins() {
        let df = frame(&[("1", Some("Old"), None), ("1", Some("New"), None)]);
        let lookup = to_lookup(&df, "code", "name", &LookupOptions::default()).unwrap();
        assert_eq!(lookup.get("1"), Some("New"));
    }

    #[test]
    fn level_filter_restricts_rows() {
        let df = DataFrame::new(vec![
            Series::new(
                "code".into(),
                vec![Some("03".to_string()), Some("0301".to_string())],
            )
            .into(),
            Series::new(
                "name".into(),
                vec![Some("Oslo".to_string()), Some("Oslo kommune".to_string())],
            )
            .into(),
            Series::new(
                "level".into(),
                vec![Some("1".to_string()), Some("2".to_string())],
            )
            .into(),
        ])
        .unwrap();
        let options = LookupOptions {
            level: Some("2".to_string()),
            ..LookupOptions::default()
        };
        let lookup = to_lookup(&df, "code", "name", &options).unwrap();
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup.get("0301"), Some("Oslo kommune"));
    }
}
