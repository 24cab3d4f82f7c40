use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rent_data::{PolicyTable, PolicyTableLoader};

/// Validate a policy table CSV file and print the rule sets it defines.
///
/// The CSV file should have the following columns:
/// - policy_year: the year the rule set applies to (e.g., 2021)
/// - heat_tenant: rent coefficient when the tenant pays for heating
/// - heat_electricity: coefficient for landlord-paid electric heating
/// - heat_gas: coefficient for landlord-paid gas heating
/// - heat_oil: coefficient for landlord-paid oil heating
/// - improvement_rate: fraction applied to amortized major-work costs
#[derive(Parser, Debug)]
#[command(name = "rent-policy-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing policy year data
    #[arg(short, long)]
    file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = PolicyTableLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    println!("Parsed {} records from CSV", records.len());

    let table = PolicyTable::from_records(records).context("Policy table is invalid")?;

    for config in table.iter() {
        println!(
            "{}: tenant {}, electricity {}, gas {}, oil {}, improvement rate {}",
            config.policy_year,
            config.heat_tenant,
            config.heat_electricity,
            config.heat_gas,
            config.heat_oil,
            config.improvement_rate,
        );
    }

    Ok(())
}
