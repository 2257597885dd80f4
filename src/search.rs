// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::fmt;

use log::debug;

use crate::seq::file::SeqFile;

/// One occurrence of the target in a record. Coordinates are 1-based and inclusive, counted in
/// characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqMatch {
    pub header: String,
    pub start: usize,
    pub end: usize,
}

impl fmt::Display for SeqMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Header of reference sequence: {}", self.header)?;
        writeln!(f, "Start Position: {}", self.start)?;
        write!(f, "End Position: {}", self.end)
    }
}

/// Returns the (start, end) coordinates of every occurrence of `target` in `sequence`,
/// overlapping ones included: the scan resumes one character after each match's start. An empty
/// target matches nowhere.
pub fn find_in_sequence(sequence: &str, target: &str) -> Vec<(usize, usize)> {
    if target.is_empty() {
        return Vec::new();
    }
    let target_len = target.chars().count();
    sequence
        .char_indices()
        .enumerate()
        .filter(|(_, (byte_pos, _))| sequence[*byte_pos..].starts_with(target))
        .map(|(char_pos, _)| (char_pos + 1, char_pos + target_len))
        .collect()
}

/// Searches every record of `seq_file`, in file order. Within a record, matches come by
/// increasing start.
pub fn find_matches(seq_file: &SeqFile, target: &str) -> Vec<SeqMatch> {
    let mut matches = Vec::new();
    for rec in seq_file {
        let hits = find_in_sequence(&rec.sequence, target);
        debug!("{}: {} match(es)", rec.header, hits.len());
        matches.extend(hits.into_iter().map(|(start, end)| SeqMatch {
            header: rec.header.clone(),
            start,
            end,
        }));
    }
    matches
}
