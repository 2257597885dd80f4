// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::mem;
use std::path::Path;

use log::warn;

use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, std::io::Error> {
    let file = File::open(path)?;
    parse_fasta(BufReader::new(file))
}

/// Reads FastA records from `reader`. Lines are trimmed; sequence lines are concatenated without
/// separator. Lines that precede the first header, or that follow a '>' line with an empty
/// header, are dropped. A repeated header overwrites the earlier record's sequence.
pub fn parse_fasta<R: BufRead>(reader: R) -> Result<SeqFile, std::io::Error> {
    let mut result = SeqFile::new();
    let mut current_header: Option<String> = None;
    let mut current_sequence = String::new();

    for line in reader.lines() {
        let line = line?;
        let l = line.trim();
        if let Some(hdr) = l.strip_prefix('>') {
            if let Some(header) = current_header.take() {
                commit(&mut result, header, mem::take(&mut current_sequence));
            }
            // A '>' with no name opens nothing: its lines go the way of pre-header lines.
            let hdr = hdr.trim();
            if !hdr.is_empty() {
                current_header = Some(String::from(hdr));
            }
        } else if current_header.is_some() {
            current_sequence.push_str(l);
        }
    }
    if let Some(header) = current_header {
        commit(&mut result, header, current_sequence);
    }
    Ok(result)
}

fn commit(seq_file: &mut SeqFile, header: String, sequence: String) {
    if seq_file.get(&header).is_some() {
        warn!("Duplicate header '{}': earlier record overwritten", header);
    }
    seq_file.insert(SeqRecord { header, sequence });
}
