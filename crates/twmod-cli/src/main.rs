//! twmod CLI - Tailwind class-name codemod
//!
//! Commands:
//! - map: Derive `tw-classes-map.json` from legacy and current color tokens
//! - rewrite: Rename classes in JSX/TSX files in place, using that map

mod config;
mod output;
mod process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use config::Config;
use output::Reporter;
use process::{rewrite_path, FileOutcome, FileSystemError};
use twmod_core::RenameMap;
use twmod_mapping::{load_color_tokens, MappingBuilder, CLASSES_MAP_FILE, COLORS_MAP_FILE};
use twmod_rules::{ClassMatcher, RuleRegistry};

/// Exit status when a filesystem error aborts a rewrite run
const FILESYSTEM_ERROR_EXIT: u8 = 12;

#[derive(Parser)]
#[command(name = "twmod")]
#[command(version)]
#[command(about = "Rename Tailwind class names across JSX/TSX sources")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Show verbose output
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Path to config file (default: auto-detect .twmod.toml)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true, conflicts_with = "config")]
    no_config: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite class names in place (destructive, no dry run)
    Rewrite(RewriteArgs),
    /// Build the class rename map from two color token files
    Map(MapArgs),
}

#[derive(Args)]
struct RewriteArgs {
    /// Folder (or single file) to rewrite
    #[arg(long, value_name = "PATH")]
    folder: PathBuf,

    /// Rename map JSON (default: config value, then ./tw-classes-map.json)
    #[arg(long, value_name = "FILE")]
    map: Option<PathBuf>,
}

#[derive(Args)]
struct MapArgs {
    /// Legacy color tokens (JSON)
    #[arg(long, value_name = "FILE")]
    legacy: PathBuf,

    /// Current color tokens (JSON)
    #[arg(long, value_name = "FILE")]
    current: PathBuf,

    /// Directory to write the map files into
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Class prefix to generate renames for (repeatable)
    #[arg(long = "prefix", value_name = "PREFIX")]
    prefixes: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red(), e);
            ExitCode::from(exit_status(&e))
        }
    }
}

/// Exit status for a failed run: filesystem errors have their own code
fn exit_status(error: &anyhow::Error) -> u8 {
    if error.downcast_ref::<FileSystemError>().is_some() {
        FILESYSTEM_ERROR_EXIT
    } else {
        1
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let (config, config_path) = load_config(&cli)?;

    match cli.command {
        Command::Rewrite(args) => run_rewrite(args, &config, config_path.as_deref(), cli.verbose),
        Command::Map(args) => run_map(args, &config),
    }
}

fn load_config(cli: &Cli) -> Result<(Config, Option<PathBuf>)> {
    if cli.no_config {
        return Ok((Config::default(), None));
    }
    if let Some(path) = &cli.config {
        return Ok((Config::load_path(path)?, Some(path.clone())));
    }
    Ok(match Config::load()? {
        Some((config, path)) => (config, Some(path)),
        None => (Config::default(), None),
    })
}

fn run_rewrite(
    args: RewriteArgs,
    config: &Config,
    config_path: Option<&Path>,
    verbose: bool,
) -> Result<ExitCode> {
    let map_path = args
        .map
        .or_else(|| config.map_path(config_path))
        .unwrap_or_else(|| PathBuf::from(CLASSES_MAP_FILE));

    let map = RenameMap::load(&map_path)?;
    let chained = map.chained_keys();
    if !chained.is_empty() {
        tracing::warn!(
            keys = ?chained,
            "Rename map is not idempotent: these classes map to another key"
        );
    }

    let registry = RuleRegistry::with_options(&config.rewrite_options());
    let matcher = ClassMatcher::new(map)
        .with_context(|| format!("Failed to build matcher from {}", map_path.display()))?;

    if verbose {
        println!("{}: {}", "Map".bold(), map_path.display());
        println!("{}: {}", "Classes".bold(), matcher.map().len());
        println!("{}: {}", "Rules".bold(), registry.all_names().join(", "));
        println!();
    }

    let results = rewrite_path(&args.folder, config, &registry, &matcher)?;

    let mut reporter = Reporter::new(verbose);
    for (path, outcome) in &results {
        match outcome {
            FileOutcome::Unchanged => reporter.report_unchanged(path),
            FileOutcome::Rewritten(edits) => reporter.report_rewrite(path, edits),
            FileOutcome::ParseError(message) => {
                reporter.report_error(path, &format!("Parse error: {}", message))
            }
            FileOutcome::Error(message) => reporter.report_error(path, message),
        }
    }
    reporter.finish();
    tracing::debug!(summary = ?reporter.summary(), "Rewrite finished");

    Ok(ExitCode::SUCCESS)
}

fn run_map(args: MapArgs, config: &Config) -> Result<ExitCode> {
    let legacy = load_color_tokens(&args.legacy)?;
    let current = load_color_tokens(&args.current)?;

    let builder = if !args.prefixes.is_empty() {
        MappingBuilder::with_prefixes(args.prefixes)
    } else if let Some(prefixes) = &config.mapping.prefixes {
        MappingBuilder::with_prefixes(prefixes.iter().cloned())
    } else {
        MappingBuilder::new()
    };

    let mapping = builder.build(&legacy, &current);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;
    mapping.write(&args.out_dir)?;

    let chained = mapping.classes.chained_keys();
    if !chained.is_empty() {
        tracing::warn!(
            keys = ?chained,
            "Generated map is not idempotent: these classes map to another key"
        );
    }

    println!(
        "{} {} color renames to {}",
        "Wrote".green(),
        mapping.colors.len(),
        args.out_dir.join(COLORS_MAP_FILE).display()
    );
    println!(
        "{} {} class renames ({}) to {}",
        "Wrote".green(),
        mapping.classes.len(),
        builder.prefixes().join(", "),
        args.out_dir.join(CLASSES_MAP_FILE).display()
    );
    if !mapping.ambiguous.is_empty() {
        println!(
            "{}: {} legacy color{} matched several current colors; the last match was kept",
            "Warning".yellow(),
            mapping.ambiguous.len(),
            if mapping.ambiguous.len() == 1 { "" } else { "s" }
        );
    }

    Ok(ExitCode::SUCCESS)
}
