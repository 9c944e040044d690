//! Prolog facts → relational-learning dataset CLI
//!
//! Usage:
//!   prologify_dataset data/bk.pl data/my_dataset/
//!
//! Reads 2-ary ground facts such as `knows(alice, bob).` and writes
//! entities.dict, relations.dict and train.txt into the output directory.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use prologify::dataset::{parse_facts, Dataset, ENTITIES_FILE, RELATIONS_FILE, TRAIN_FILE};

#[derive(Parser)]
#[command(name = "prologify_dataset")]
#[command(about = "Convert ground Prolog facts into entity/relation dictionaries and triples")]
struct Cli {
    /// Prolog file with ground 2-ary facts
    input_file: PathBuf,
    /// Directory to write the dataset files into
    output_dir: PathBuf,
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

    if !cli.input_file.exists() {
        anyhow::bail!("Input file {:?} does not exist", cli.input_file);
    }

    tracing::info!("Reading Prolog file: {:?}", cli.input_file);
    let content = std::fs::read_to_string(&cli.input_file)?;
    let parsed = parse_facts(&content);

    if parsed.facts.is_empty() {
        anyhow::bail!("No facts found in {:?}", cli.input_file);
    }
    tracing::info!(
        "Found {} facts, skipped {} unparseable lines",
        parsed.facts.len(),
        parsed.skipped.len()
    );

    let dataset = Dataset::from_facts(parsed.facts);
    dataset.write(&cli.output_dir)?;

    println!("\n=== Conversion Summary ===");
    println!("Output directory: {}", cli.output_dir.display());
    println!("  - {}: {} entities", ENTITIES_FILE, dataset.entities.len());
    println!("  - {}: {} relations", RELATIONS_FILE, dataset.relations.len());
    println!("  - {}: {} triples", TRAIN_FILE, dataset.facts.len());

    println!("\nSample entities (first 5):");
    for (id, name) in dataset.entities.iter().take(5) {
        println!("  {}\t{}", id, name);
    }

    println!("\nSample relations:");
    for (id, name) in dataset.relations.iter() {
        println!("  {}\t{}", id, name);
    }

    println!("\nSample triples (first 5):");
    for (triple, fact) in dataset.triples().zip(&dataset.facts).take(5) {
        println!(
            "  {}\t{}\t{}\t# {}({}, {})",
            triple.head_id, triple.relation, triple.tail_id, fact.relation, fact.head, fact.tail
        );
    }

    Ok(())
}
