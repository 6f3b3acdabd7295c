//! One function per subcommand.

use anyhow::Context;
use polars::prelude::DataFrame;

use klass_client::{
    Classification, Codes, CodesQuery, Family, KlassClient, SearchClassifications, SearchFamilies,
};
use klass_model::Language;
use klass_tables::pivot_levels;

use crate::cli::{CodesArgs, FamiliesArgs, FamilyArgs, InfoArgs, SearchArgs};
use crate::output;

fn parse_language(language: Option<&str>) -> anyhow::Result<Option<Language>> {
    language
        .map(|value| value.parse::<Language>().map_err(anyhow::Error::msg))
        .transpose()
}

pub fn run_search(client: &KlassClient, args: &SearchArgs) -> anyhow::Result<()> {
    let search = SearchClassifications::fetch(
        client,
        &args.query,
        args.section.as_deref(),
        false,
        args.no_dupes,
    )?;
    println!("{search}");
    Ok(())
}

pub fn run_info(
    client: &KlassClient,
    args: &InfoArgs,
    language: Option<&str>,
) -> anyhow::Result<()> {
    let language = parse_language(language)?;
    let classification =
        Classification::fetch(client, &args.classification_id, language, false)?;
    println!("{classification}");
    Ok(())
}

pub fn run_codes(
    client: &KlassClient,
    args: &CodesArgs,
    language: Option<&str>,
) -> anyhow::Result<()> {
    let options = CodesQuery {
        select_level: args.select_level.clone(),
        language: parse_language(language)?,
        ..CodesQuery::default()
    };
    let codes = if args.from.is_some() {
        Codes::fetch(
            client,
            &args.classification_id,
            args.from.as_deref(),
            args.to.as_deref(),
            &options,
        )?
    } else {
        Codes::fetch_at(client, &args.classification_id, args.date.as_deref(), &options)?
    };
    let table: DataFrame = if args.pivot {
        let keep: Vec<&str> = if args.keep.is_empty() {
            vec!["code", "name"]
        } else {
            args.keep.iter().map(String::as_str).collect()
        };
        pivot_levels(codes.data(), &keep)?
    } else {
        codes.data().clone()
    };
    match &args.csv {
        Some(path) => {
            output::write_csv(&table, path)?;
            println!("Wrote {} rows to {}", table.height(), path.display());
        }
        None => output::print_frame(&table),
    }
    Ok(())
}

pub fn run_families(
    client: &KlassClient,
    args: &FamiliesArgs,
    language: Option<&str>,
) -> anyhow::Result<()> {
    let language = parse_language(language)?;
    let families = SearchFamilies::fetch(client, args.section.as_deref(), language)?;
    println!("{families}");
    Ok(())
}

pub fn run_family(
    client: &KlassClient,
    args: &FamilyArgs,
    language: Option<&str>,
) -> anyhow::Result<()> {
    let language = parse_language(language)?;
    let family = Family::fetch(client, &args.family_id, None, language)?;
    println!("{family}");
    Ok(())
}

pub fn run_sections(client: &KlassClient) -> anyhow::Result<()> {
    let sections = client.ssb_sections().context("cannot list SSB sections")?;
    if sections.is_empty() {
        println!("No sections found");
        return Ok(());
    }
    for section in sections {
        println!("{section}");
    }
    Ok(())
}
