// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::HashMap;

use crate::seq::record::SeqRecord;

// A sequence file is an ordered mapping from header to sequence. Headers are unique: inserting a
// header that is already present replaces its sequence (last one wins) but keeps the position of
// the first occurrence.

#[derive(Debug, Default, Clone)]
pub struct SeqFile {
    records: Vec<SeqRecord>,
    hdr2idx: HashMap<String, usize>,
}

impl SeqFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record. Returns true IFF a record with the same header was already present (its
    /// sequence is then overwritten).
    pub fn insert(&mut self, record: SeqRecord) -> bool {
        match self.hdr2idx.get(&record.header) {
            Some(&idx) => {
                self.records[idx].sequence = record.sequence;
                true
            }
            None => {
                self.hdr2idx
                    .insert(record.header.clone(), self.records.len());
                self.records.push(record);
                false
            }
        }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.hdr2idx
            .get(header)
            .map(|&idx| self.records[idx].sequence.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeqRecord> {
        self.records.iter()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|rec| rec.header.as_str())
    }
}

impl<'a> IntoIterator for &'a SeqFile {
    type Item = &'a SeqRecord;
    type IntoIter = std::slice::Iter<'a, SeqRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
