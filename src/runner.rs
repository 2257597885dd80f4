// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{
    io::{stdout, Write},
    path::PathBuf,
};

use log::info;

use clap::Parser;

use crate::errors::SeqFinderError;
use crate::report::write_report;
use crate::search::find_matches;
use crate::seq::fasta::read_fasta_file;
use crate::seq::target::read_target_file;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// FastA file to search (may hold many records)
    #[arg(short = 'f', long = "fasta-file")]
    fasta_file: PathBuf,

    /// File containing the target sequence (one record, header optional)
    #[arg(short = 't', long = "target-sequence-file")]
    target_sequence_file: PathBuf,
}

/// Input locations for one search run. Built once from the command line, then passed down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub fasta_path: PathBuf,
    pub target_path: PathBuf,
}

impl SearchConfig {
    pub fn new(fasta_path: impl Into<PathBuf>, target_path: impl Into<PathBuf>) -> Self {
        SearchConfig {
            fasta_path: fasta_path.into(),
            target_path: target_path.into(),
        }
    }
}

impl From<Cli> for SearchConfig {
    fn from(cli: Cli) -> Self {
        SearchConfig::new(cli.fasta_file, cli.target_sequence_file)
    }
}

/// Reads both inputs, searches, and writes the report to `out`. Nothing is written unless both
/// files could be read and the target is non-empty.
pub fn run_search<W: Write>(config: &SearchConfig, out: &mut W) -> Result<(), SeqFinderError> {
    let target = read_target_file(&config.target_path)
        .map_err(|e| SeqFinderError::input(&config.target_path, e))?;
    let seq_file = read_fasta_file(&config.fasta_path)
        .map_err(|e| SeqFinderError::input(&config.fasta_path, e))?;
    info!(
        "Target '{}' ({} chars), {} record(s) in {}",
        target.name,
        target.sequence.chars().count(),
        seq_file.len(),
        config.fasta_path.display()
    );
    if target.sequence.is_empty() {
        return Err(SeqFinderError::EmptyTarget(target.name));
    }

    let matches = find_matches(&seq_file, &target.sequence);
    info!("{} match(es) found", matches.len());
    write_report(out, &target.name, &matches)?;
    Ok(())
}

pub fn run() -> Result<(), SeqFinderError> {
    env_logger::init();
    info!("Starting log");

    let config = SearchConfig::from(Cli::parse());
    let stdout = stdout();
    let mut out = stdout.lock();
    run_search(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
