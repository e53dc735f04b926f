//! CLI argument definitions for the SKU mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use sku_map::{
    DEFAULT_COMBO_PLACEHOLDER, DEFAULT_COMBO_PREFIX, DEFAULT_MSKU_COLUMN, DEFAULT_SKU_COLUMN,
};

#[derive(Parser)]
#[command(
    name = "sku-mapper",
    version,
    about = "SKU Mapper - Annotate sales exports with master SKUs",
    long_about = "Annotate marketplace sales exports with master SKUs (MSKUs).\n\n\
                  Loads a SKU-to-MSKU mapping table, resolves every sales row with\n\
                  whitespace- and case-insensitive matching, collapses combo SKUs to\n\
                  a placeholder, and writes the annotated table as CSV or Excel."
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

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Annotate a sales file with master SKUs and write the result.
    Process(ProcessArgs),

    /// Inspect a mapping file without processing any sales data.
    Mapping(MappingArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the sales data file (.csv, .xlsx, or .xls).
    #[arg(value_name = "SALES_FILE")]
    pub sales_file: PathBuf,

    /// Path to the SKU-to-MSKU mapping file (.csv, .xlsx, or .xls).
    #[arg(long = "mapping", short = 'm', value_name = "FILE")]
    pub mapping_file: PathBuf,

    /// Output path (default: <SALES_FILE>_msku with the same extension;
    /// .xls inputs switch to .xlsx).
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Resolve and report without writing any output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Name of the SKU column in the sales file.
    #[arg(long = "sku-column", value_name = "NAME", default_value = DEFAULT_SKU_COLUMN)]
    pub sku_column: String,

    /// Name of the MSKU column written to the output.
    #[arg(long = "msku-column", value_name = "NAME", default_value = DEFAULT_MSKU_COLUMN)]
    pub msku_column: String,

    /// SKU prefix that marks combo products.
    #[arg(long = "combo-prefix", value_name = "PREFIX", default_value = DEFAULT_COMBO_PREFIX)]
    pub combo_prefix: String,

    /// Placeholder SKU written for combo products.
    #[arg(
        long = "combo-placeholder",
        value_name = "VALUE",
        default_value = DEFAULT_COMBO_PLACEHOLDER
    )]
    pub combo_placeholder: String,

    /// Write a machine-readable JSON run report to this path.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Exit with an error when any sales SKU stays unmapped.
    #[arg(long = "fail-on-unmapped")]
    pub fail_on_unmapped: bool,
}

#[derive(Parser)]
pub struct MappingArgs {
    /// Path to the mapping file (.csv, .xlsx, or .xls).
    #[arg(value_name = "MAPPING_FILE")]
    pub file: PathBuf,

    /// Number of entries to preview (0 lists every entry).
    #[arg(long = "limit", value_name = "N", default_value_t = 10)]
    pub limit: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
