//! Terminal and CSV rendering of DataFrames.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use polars::prelude::{AnyValue, CsvWriter, DataFrame, SerWriter};

/// Renders a frame as a bordered terminal table.
pub fn print_frame(df: &DataFrame) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>(),
    );
    let columns = df.get_columns();
    for row in 0..df.height() {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| match column.get(row).unwrap_or(AnyValue::Null) {
                AnyValue::Null => String::new(),
                AnyValue::String(s) => s.to_string(),
                AnyValue::StringOwned(s) => s.to_string(),
                other => other.to_string(),
            })
            .collect();
        table.add_row(cells);
    }
    println!("{table}");
    println!("{} rows", df.height());
}

/// Writes a frame as CSV.
pub fn write_csv(df: &DataFrame, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    let mut df = df.clone();
    CsvWriter::new(file)
        .finish(&mut df)
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}
