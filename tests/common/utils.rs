// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    io::Write,
    process::{Command, Output},
};

use tempfile::NamedTempFile;

use seqfinder::{
    errors::SeqFinderError,
    runner::{run_search, SearchConfig},
};

#[allow(dead_code)]
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("creating temp file");
    file.write_all(contents.as_bytes()).expect("writing temp file");
    file.flush().expect("flushing temp file");
    file
}

// Runs the library pipeline on in-memory FastA and target texts, returns the report.
#[allow(dead_code)]
pub fn search_texts(fasta: &str, target: &str) -> Result<String, SeqFinderError> {
    let fasta_file = temp_file(fasta);
    let target_file = temp_file(target);
    let config = SearchConfig::new(fasta_file.path(), target_file.path());
    let mut out: Vec<u8> = Vec::new();
    run_search(&config, &mut out)?;
    Ok(String::from_utf8(out).expect("report is UTF-8"))
}

#[allow(dead_code)]
pub fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_seqfinder"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("running seqfinder")
}
