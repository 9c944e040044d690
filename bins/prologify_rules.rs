//! Mined rules → Prolog clauses CLI
//!
//! Usage:
//!   prologify_rules data/mined/ rules.pl
//!   prologify_rules data/mined/ rules.pl --strip-types
//!   prologify_rules data/mined/ rules.pl --config config/prologify.toml --suffix _ori.txt

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use prologify::config::Config;
use prologify::rules::{convert_directory, Canonicalizer};

#[derive(Parser)]
#[command(name = "prologify_rules")]
#[command(about = "Convert mined logical rules into a deduplicated Prolog rule file")]
struct Cli {
    /// Directory with attempt record files
    target_dir: PathBuf,
    /// Path of the .pl file to write the clauses to
    output_file: PathBuf,
    /// Remove inline type annotations from auxiliary terms
    #[arg(long)]
    strip_types: bool,
    /// TOML config overriding connective symbols, marker and input suffix
    #[arg(long)]
    config: Option<PathBuf>,
    /// Only read files whose name ends with this suffix
    #[arg(long)]
    suffix: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_ref())?;
    let suffix = cli.suffix.unwrap_or_else(|| config.input.suffix.clone());
    let strip_types = cli.strip_types || config.output.strip_types;
    let canonicalizer = Canonicalizer::from_config(&config).with_strip_types(strip_types);

    tracing::info!(
        "Converting rules in {:?} (suffix={:?}, strip_types={})",
        cli.target_dir,
        suffix,
        strip_types
    );

    let (rules, stats) = convert_directory(&cli.target_dir, &suffix, &canonicalizer)?;
    rules.write(&cli.output_file)?;

    println!("\n=== Conversion Summary ===");
    println!("Input files: {}", stats.files);
    println!("Attempts: {}", stats.attempts);
    println!("Rules read: {}", stats.rules);
    println!("Facts skipped: {}", stats.facts_skipped);
    println!("Clauses produced: {}", stats.clauses);
    println!("Distinct clauses written: {}", rules.len());
    println!("Output: {}", cli.output_file.display());

    Ok(())
}
