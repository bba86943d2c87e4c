use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use orcamento_core::calculations::charges::sum_group;
use orcamento_data::{CatalogLoader, SimplesTableLoader};

/// Validate and summarize quote reference data from CSV files.
///
/// The brackets CSV holds the Simples Nacional table (index,
/// revenue_ceiling, rate, description); the catalog CSV holds a charge
/// catalog (group_key, group_label, incidence, item_key, item_label,
/// percentage, enabled).
#[derive(Parser, Debug)]
#[command(name = "orcamento-data-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a Simples Nacional brackets CSV file
    #[arg(short, long)]
    brackets: Option<PathBuf>,

    /// Path to a charge catalog CSV file (BDI or encargos)
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.brackets.is_none() && args.catalog.is_none() {
        bail!("nothing to do: pass --brackets and/or --catalog");
    }

    if let Some(path) = &args.brackets {
        println!("Loading Simples brackets from: {}", path.display());

        let file =
            File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
        let records = SimplesTableLoader::parse(file)
            .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;
        let table = SimplesTableLoader::build_table(&records)
            .context("Bracket table failed validation")?;

        println!("Validated {} brackets:", table.len());
        for bracket in &table {
            println!(
                "  {}. {:>6}%  até R$ {:>12}  {}",
                bracket.index, bracket.rate, bracket.revenue_ceiling, bracket.description
            );
        }
    }

    if let Some(path) = &args.catalog {
        println!("Loading charge catalog from: {}", path.display());

        let file =
            File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
        let records = CatalogLoader::parse(file)
            .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;
        let groups = CatalogLoader::build_groups(&records)
            .context("Charge catalog failed validation")?;

        println!("Validated {} groups:", groups.len());
        for group in &groups {
            println!(
                "  [{}] {}: {} items, enabled subtotal {}%",
                group.incidence.as_str(),
                group.label,
                group.items.len(),
                sum_group(group)
            );
        }
    }

    Ok(())
}
