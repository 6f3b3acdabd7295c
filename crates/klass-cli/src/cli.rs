//! CLI argument definitions for the `klass` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "klass",
    version,
    about = "Look up classifications from Statistics Norway's KLASS API",
    long_about = "Look up classifications, codelists and families from\n\
                  Statistics Norway's KLASS API (data.ssb.no)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Language for names and descriptions (nb, nn, en).
    #[arg(long, global = true)]
    pub language: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search classifications by free text (or by id).
    Search(SearchArgs),

    /// Show a classification's metadata and versions.
    Info(InfoArgs),

    /// Print a classification's codelist.
    Codes(CodesArgs),

    /// List classification families.
    Families(FamiliesArgs),

    /// Show one family and its member classifications.
    Family(FamilyArgs),

    /// List the SSB sections that own classifications.
    Sections,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Search text; a bare number is looked up as a classification id.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Restrict hits to one SSB section (number or full name).
    #[arg(long)]
    pub section: Option<String>,

    /// Collapse hits that point at the same classification.
    #[arg(long = "no-dupes")]
    pub no_dupes: bool,
}

#[derive(Parser)]
pub struct InfoArgs {
    #[arg(value_name = "CLASSIFICATION_ID")]
    pub classification_id: String,
}

#[derive(Parser)]
pub struct CodesArgs {
    #[arg(value_name = "CLASSIFICATION_ID")]
    pub classification_id: String,

    /// Codes valid on this date (default: today). Mutually exclusive
    /// with --from/--to.
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub date: Option<String>,

    /// Start of a validity range (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<String>,

    /// End of a validity range (YYYY-MM-DD).
    #[arg(long, requires = "from")]
    pub to: Option<String>,

    /// Keep only one hierarchy level (number or level name).
    #[arg(long = "select-level")]
    pub select_level: Option<String>,

    /// Reshape to one column group per hierarchy level.
    #[arg(long)]
    pub pivot: bool,

    /// Column prefixes to keep when pivoting (default: code,name).
    #[arg(long, value_delimiter = ',', requires = "pivot")]
    pub keep: Vec<String>,

    /// Write the table as CSV instead of printing it.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FamiliesArgs {
    /// Restrict to families owned by one SSB section.
    #[arg(long)]
    pub section: Option<String>,
}

#[derive(Parser)]
pub struct FamilyArgs {
    #[arg(value_name = "FAMILY_ID")]
    pub family_id: String,
}
