//! Long-to-wide pivot of hierarchical codelists.

use std::collections::{BTreeSet, HashMap};

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use crate::error::{Result, TableError};
use crate::values::column_values;

const CODE: &str = "code";
const PARENT_CODE: &str = "parentCode";
const LEVEL: &str = "level";

/// Pivots a long codelist (one row per code at any level) into a wide
/// frame with one column group per hierarchy level, every column name
/// suffixed with its level (`code_1`, `name_2`, ...).
///
/// Levels are processed in ascending numeric order. Starting from the
/// top level, each deeper level is right-joined onto the accumulated
/// frame by matching the previous level's `code` against the deeper
/// level's `parentCode`: every child row survives even without a
/// matching parent (parent columns become null), while accumulated
/// rows without children are dropped. For a fully linked hierarchy the
/// output therefore has exactly one row per leaf-level code.
///
/// `keep` filters the final columns by case-insensitive prefix match
/// on the suffixed names; the conventional default is
/// `["code", "name"]`. Level values are compared and suffixed by their
/// numeric value, so `"01"` and `"1"` are the same level. Gaps in the
/// level numbering are tolerated; a level value that is not a whole
/// number is an error, as is a frame missing any of the
/// `code`/`parentCode`/`level` columns.
///
/// An empty input produces an empty frame.
pub fn pivot_levels(df: &DataFrame, keep: &[&str]) -> Result<DataFrame> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    for required in [CODE, PARENT_CODE, LEVEL] {
        if !names.iter().any(|name| name == required) {
            return Err(TableError::MissingColumn {
                name: required.to_string(),
            });
        }
    }
    if df.height() == 0 {
        return Ok(DataFrame::empty());
    }

    let columns: Vec<Vec<Option<String>>> = names
        .iter()
        .map(|name| column_values(df, name))
        .collect::<Result<_>>()?;
    let code_idx = names.iter().position(|n| n == CODE).unwrap_or_default();
    let parent_idx = names
        .iter()
        .position(|n| n == PARENT_CODE)
        .unwrap_or_default();
    let level_idx = names.iter().position(|n| n == LEVEL).unwrap_or_default();

    // Levels are grouped by their parsed number, so textual variants
    // of the same level ("1" and "01") land in one group.
    let mut row_levels: Vec<u64> = Vec::with_capacity(df.height());
    for value in &columns[level_idx] {
        let raw = value.as_deref().unwrap_or("");
        let number: u64 = raw
            .trim()
            .parse()
            .map_err(|_| TableError::MalformedLevel {
                value: raw.to_string(),
            })?;
        row_levels.push(number);
    }
    let distinct: BTreeSet<u64> = row_levels.iter().copied().collect();
    let levels: Vec<u64> = distinct.into_iter().collect();

    let mut rows_at: HashMap<u64, Vec<usize>> = HashMap::new();
    for (row, number) in row_levels.iter().enumerate() {
        rows_at.entry(*number).or_default().push(row);
    }

    // Each accumulator entry is one output row: the source row index
    // chosen for every processed level, None where no parent matched.
    let mut acc: Vec<Vec<Option<usize>>> = Vec::new();
    for (depth, level) in levels.iter().enumerate() {
        let rows = rows_at.get(level).cloned().unwrap_or_default();
        if depth == 0 {
            acc = rows.into_iter().map(|row| vec![Some(row)]).collect();
            continue;
        }
        // Index the accumulated rows by the code of their deepest
        // component; children join against that code via parentCode.
        let mut by_code: HashMap<&str, Vec<usize>> = HashMap::new();
        for (pos, path) in acc.iter().enumerate() {
            if let Some(Some(row)) = path.last() {
                if let Some(code) = columns[code_idx][*row].as_deref() {
                    by_code.entry(code).or_default().push(pos);
                }
            }
        }
        let mut next: Vec<Vec<Option<usize>>> = Vec::with_capacity(rows.len());
        for row in rows {
            let parent = columns[parent_idx][row].as_deref();
            match parent.and_then(|code| by_code.get(code)) {
                Some(positions) => {
                    for &pos in positions {
                        let mut path = acc[pos].clone();
                        path.push(Some(row));
                        next.push(path);
                    }
                }
                None => {
                    let mut path = vec![None; depth];
                    path.push(Some(row));
                    next.push(path);
                }
            }
        }
        acc = next;
    }

    let keep_lower: Vec<String> = keep.iter().map(|k| k.to_lowercase()).collect();
    let mut out: Vec<Column> = Vec::new();
    for (depth, level) in levels.iter().enumerate() {
        for (col, name) in names.iter().enumerate() {
            let suffixed = format!("{name}_{level}");
            let lowered = suffixed.to_lowercase();
            if !keep_lower.iter().any(|k| lowered.starts_with(k.as_str())) {
                continue;
            }
            let values: Vec<Option<String>> = acc
                .iter()
                .map(|path| path[depth].and_then(|row| columns[col][row].clone()))
                .collect();
            out.push(Series::new(suffixed.as_str().into(), values).into());
        }
    }
    Ok(DataFrame::new(out)?)
}
