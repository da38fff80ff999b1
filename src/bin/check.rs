//! NSID Checker CLI
//!
//! Validates candidate NSIDs and explains how they decompose.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nsid::Nsid;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nsid-check")]
#[command(about = "Validate Namespaced Identifiers (NSIDs)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one or more candidate NSIDs
    Check {
        /// Candidate identifiers
        #[arg(required = true)]
        candidates: Vec<String>,
    },

    /// Parse a candidate and print its decomposition as JSON
    Inspect {
        /// Candidate identifier
        candidate: String,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct Decomposition<'a> {
    value: &'a str,
    name: &'a str,
    domain_authority: &'a str,
    segments: &'a [String],
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Check { candidates } => {
            tracing::debug!(count = candidates.len(), "checking candidates");
            let mut all_valid = true;

            for candidate in &candidates {
                match Nsid::parse(candidate) {
                    Ok(nsid) => println!("  ✅ {} - valid", nsid),
                    Err(e) => {
                        println!("  ❌ {} - {}", candidate, e);
                        all_valid = false;
                    }
                }
            }

            if !all_valid {
                std::process::exit(1);
            }
            Ok(())
        }

        Commands::Inspect { candidate, output } => {
            let nsid = Nsid::parse(&candidate)?;
            let report = Decomposition {
                value: nsid.as_str(),
                name: nsid.name(),
                domain_authority: nsid.domain_authority(),
                segments: nsid.segments(),
            };
            let report_json = serde_json::to_string_pretty(&report)?;

            if let Some(path) = output {
                std::fs::write(&path, &report_json)?;
                println!("✅ Decomposition written to {:?}", path);
            } else {
                println!("{}", report_json);
            }
            Ok(())
        }
    }
}
