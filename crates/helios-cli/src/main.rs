//! helios — canonical hash tool for Helios memory objects.
//!
//! Thin adapter over `helios-core`: file reading and output formatting
//! live here; every byte of hashing behavior lives in the core crate.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use helios_core::{content_hash, verify_vectors, MemoryObject};

/// Helios Core — canonical content hashing for memory objects.
#[derive(Parser, Debug)]
#[command(name = "helios", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the content hash of a memory object JSON file
    Hash {
        /// Path to the memory object JSON
        file: PathBuf,
    },
    /// Verify a test-vector file against its frozen hashes
    Verify {
        /// Path to the vectors JSON
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Hash { file } => run_hash(&file),
        Commands::Verify { file } => run_verify(&file),
    }
}

fn run_hash(path: &Path) -> Result<()> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let input: serde_json::Value = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let object = MemoryObject::from_input(&input)?;
    let digest = content_hash(&object)?;

    println!("{digest}");
    Ok(())
}

fn run_verify(path: &Path) -> Result<()> {
    let report = verify_vectors(path)?;

    for result in &report.results {
        let status = if result.pass { "PASS" } else { "FAIL" };
        println!("  {}: {}", result.name, status);
        if !result.pass {
            println!("    expected: {}", result.expected);
            println!("    got:      {}", result.got);
        }
    }

    if !report.passed() {
        bail!(
            "{} of {} vectors failed verification",
            report.failures(),
            report.len()
        );
    }

    println!();
    println!("All {} vectors: PASS", report.len());
    Ok(())
}
