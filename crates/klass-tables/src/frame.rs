//! DataFrame construction from typed KLASS response rows.
//!
//! Every constructor produces string-typed columns with nulls
//! preserved, one column per wire field, in the field order of the API
//! so frames look the same as the raw responses.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use klass_model::{CodeChange, CodeItem, CodeRow, CorrespondenceItem};

use crate::error::Result;
use crate::levels::LevelMap;
use crate::values::column_values;

fn string_column(name: &str, values: Vec<Option<String>>) -> Column {
    Series::new(name.into(), values).into()
}

/// Builds a frame from a `codes`/`codesAt`/`variant`/`variantAt`
/// result.
pub fn codes_to_frame(rows: &[CodeRow]) -> Result<DataFrame> {
    let take = |f: fn(&CodeRow) -> Option<String>| rows.iter().map(f).collect::<Vec<_>>();
    let columns = vec![
        string_column("code", rows.iter().map(|r| Some(r.code.clone())).collect()),
        string_column("parentCode", take(|r| r.parent_code.clone())),
        string_column("level", rows.iter().map(|r| Some(r.level.clone())).collect()),
        string_column("name", take(|r| r.name.clone())),
        string_column("shortName", take(|r| r.short_name.clone())),
        string_column("presentationName", take(|r| r.presentation_name.clone())),
        string_column("validFrom", take(|r| r.valid_from.clone())),
        string_column("validTo", take(|r| r.valid_to.clone())),
        string_column(
            "validFromInRequestedRange",
            take(|r| r.valid_from_in_requested_range.clone()),
        ),
        string_column(
            "validToInRequestedRange",
            take(|r| r.valid_to_in_requested_range.clone()),
        ),
        string_column("notes", take(|r| r.notes.clone())),
    ];
    Ok(DataFrame::new(columns)?)
}

/// Builds a frame from the `classificationItems` of a version or
/// variant, inserting a `levelName` column right after `level` via the
/// level map. `select_level` keeps only one level; the selector may be
/// a level number or a level name (resolved per the level map).
pub fn items_to_frame(
    items: &[CodeItem],
    levels: &LevelMap,
    select_level: Option<&str>,
) -> Result<DataFrame> {
    let items: Vec<&CodeItem> = match select_level {
        Some(selector) => {
            let level = levels.resolve_selector(selector)?;
            items.iter().filter(|item| item.level == level).collect()
        }
        None => items.iter().collect(),
    };
    let take = |f: fn(&CodeItem) -> Option<String>| {
        items.iter().map(|item| f(item)).collect::<Vec<_>>()
    };
    let columns = vec![
        string_column("code", items.iter().map(|i| Some(i.code.clone())).collect()),
        string_column("parentCode", take(|i| i.parent_code.clone())),
        string_column(
            "level",
            items.iter().map(|i| Some(i.level.clone())).collect(),
        ),
        string_column(
            "levelName",
            items
                .iter()
                .map(|i| levels.name_of(&i.level).map(str::to_string))
                .collect(),
        ),
        string_column("name", take(|i| i.name.clone())),
        string_column("shortName", take(|i| i.short_name.clone())),
        string_column("presentationName", take(|i| i.presentation_name.clone())),
        string_column("notes", take(|i| i.notes.clone())),
    ];
    Ok(DataFrame::new(columns)?)
}

/// Builds a frame from correspondence items (either a correspondence
/// table's maps or a `corresponds` result).
pub fn correspondence_to_frame(items: &[CorrespondenceItem]) -> Result<DataFrame> {
    let take = |f: fn(&CorrespondenceItem) -> Option<String>| {
        items.iter().map(f).collect::<Vec<_>>()
    };
    let columns = vec![
        string_column("sourceCode", take(|i| i.source_code.clone())),
        string_column("sourceName", take(|i| i.source_name.clone())),
        string_column("sourceShortName", take(|i| i.source_short_name.clone())),
        string_column("targetCode", take(|i| i.target_code.clone())),
        string_column("targetName", take(|i| i.target_name.clone())),
        string_column("targetShortName", take(|i| i.target_short_name.clone())),
        string_column("validFrom", take(|i| i.valid_from.clone())),
        string_column("validTo", take(|i| i.valid_to.clone())),
    ];
    Ok(DataFrame::new(columns)?)
}

/// Builds a frame from a `changes` result.
pub fn changes_to_frame(changes: &[CodeChange]) -> Result<DataFrame> {
    let take = |f: fn(&CodeChange) -> Option<String>| {
        changes.iter().map(f).collect::<Vec<_>>()
    };
    let columns = vec![
        string_column("oldCode", take(|c| c.old_code.clone())),
        string_column("oldName", take(|c| c.old_name.clone())),
        string_column("oldShortName", take(|c| c.old_short_name.clone())),
        string_column("newCode", take(|c| c.new_code.clone())),
        string_column("newName", take(|c| c.new_name.clone())),
        string_column("newShortName", take(|c| c.new_short_name.clone())),
        string_column("changeOccurred", take(|c| c.change_occurred.clone())),
    ];
    Ok(DataFrame::new(columns)?)
}

/// Drops columns that hold nothing but nulls or empty strings.
pub fn drop_empty_columns(df: &DataFrame) -> Result<DataFrame> {
    let mut retained: Vec<String> = Vec::new();
    for name in df.get_column_names() {
        let values = column_values(df, name.as_str())?;
        let all_empty = values
            .iter()
            .all(|v| v.as_deref().map(str::trim).is_none_or(str::is_empty));
        if !all_empty {
            retained.push(name.to_string());
        }
    }
    Ok(df.select(retained)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use klass_model::LevelDescriptor;

    fn item(code: &str, parent: &str, level: &str, name: &str) -> CodeItem {
        CodeItem {
            code: code.to_string(),
            parent_code: Some(parent.to_string()),
            level: level.to_string(),
            name: Some(name.to_string()),
            ..CodeItem::default()
        }
    }

    #[test]
    fn items_frame_gets_level_names() {
        let levels = LevelMap::new(&[
            LevelDescriptor {
                level_number: 1,
                level_name: "Fylke".to_string(),
            },
            LevelDescriptor {
                level_number: 2,
                level_name: "Kommune".to_string(),
            },
        ]);
        let items = vec![
            item("03", "", "1", "Oslo"),
            item("0301", "03", "2", "Oslo kommune"),
        ];
        let df = items_to_frame(&items, &levels, None).unwrap();
        assert_eq!(df.height(), 2);
        let names = crate::values::column_values(&df, "levelName").unwrap();
        assert_eq!(names[0].as_deref(), Some("Fylke"));
        assert_eq!(names[1].as_deref(), Some("Kommune"));
    }

    #[test]
    fn select_level_filters_by_name_or_number() {
        let levels = LevelMap::new(&[
            LevelDescriptor {
                level_number: 1,
                level_name: "Fylke".to_string(),
            },
            LevelDescriptor {
                level_number: 2,
                level_name: "Kommune".to_string(),
            },
        ]);
        let items = vec![
            item("03", "", "1", "Oslo"),
            item("0301", "03", "2", "Oslo kommune"),
        ];
        let by_number = items_to_frame(&items, &levels, Some("2")).unwrap();
        assert_eq!(by_number.height(), 1);
        let by_name = items_to_frame(&items, &levels, Some("Kommune")).unwrap();
        assert_eq!(by_name.height(), 1);
    }

    #[test]
    fn empty_columns_are_dropped() {
        let items = vec![item("1", "", "1", "Mann")];
        let df = items_to_frame(&items, &LevelMap::default(), None).unwrap();
        let cleaned = drop_empty_columns(&df).unwrap();
        let names: Vec<String> = cleaned
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert!(names.contains(&"code".to_string()));
        assert!(!names.contains(&"parentCode".to_string()));
        assert!(!names.contains(&"notes".to_string()));
    }
}
