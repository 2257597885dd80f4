// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::fs;
use std::path::Path;

/// Name given to a target read from a file without any '>' line.
pub const UNKNOWN_TARGET: &str = "UnknownTarget";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSequence {
    pub name: String,
    pub sequence: String,
}

pub fn read_target_file<P: AsRef<Path>>(path: P) -> Result<TargetSequence, std::io::Error> {
    let text = fs::read_to_string(path)?;
    Ok(parse_target(&text))
}

/// Extracts the target from the text of a target file.
///
/// The first line starting with '>' names the target; everything after that line, taken
/// verbatim, is the sequence, trimmed at both ends only. Line breaks *inside* a multi-line
/// sequence are therefore kept (CRLF read as LF), and any later '>' line is sequence content
/// too. Without a '>' line the whole text is the sequence and the name is [`UNKNOWN_TARGET`].
pub fn parse_target(text: &str) -> TargetSequence {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        offset += line.len();
        if let Some(name) = line.strip_prefix('>') {
            return TargetSequence {
                name: String::from(name.trim()),
                sequence: text[offset..].trim().replace("\r\n", "\n"),
            };
        }
    }
    TargetSequence {
        name: String::from(UNKNOWN_TARGET),
        sequence: text.trim().replace("\r\n", "\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_target_file() {
        let target = read_target_file("data/target1.fas").expect("Test file not found");
        assert_eq!(target.name, "EcoRI site");
        assert_eq!(target.sequence, "GAATTC");
    }

    #[test]
    fn test_read_target_file_no_header() {
        let target = read_target_file("data/target-noheader.txt").expect("Test file not found");
        assert_eq!(target.name, UNKNOWN_TARGET);
        assert_eq!(target.sequence, "GATTACA");
    }

    #[test]
    fn test_read_target_file_missing() {
        assert!(read_target_file("data/no-such-target.fas").is_err());
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let target = parse_target(">  t1  \n\n   ACGT  \n\n");
        assert_eq!(target.name, "t1");
        assert_eq!(target.sequence, "ACGT");
    }

    #[test]
    fn test_lines_before_header_ignored() {
        let target = parse_target("junk\n>t1\nACGT\n");
        assert_eq!(target.name, "t1");
        assert_eq!(target.sequence, "ACGT");
    }

    // Regression: multi-line targets keep their inner line breaks (only the ends are trimmed).
    #[test]
    fn test_multiline_target_keeps_inner_newlines() {
        let target = parse_target(">t1\nACGT\nTTGA\n");
        assert_eq!(target.sequence, "ACGT\nTTGA");
        let target = parse_target(">t1\r\nACGT\r\nTTGA\r\n");
        assert_eq!(target.sequence, "ACGT\nTTGA");
        let target = parse_target("ACGT\r\nTTGA\r\n");
        assert_eq!(target.sequence, "ACGT\nTTGA");
    }

    #[test]
    fn test_only_first_header_honored() {
        let target = parse_target(">t1\nAC\n>t2\nGT\n");
        assert_eq!(target.name, "t1");
        assert_eq!(target.sequence, "AC\n>t2\nGT");
    }

    #[test]
    fn test_header_without_sequence() {
        let target = parse_target(">lonely");
        assert_eq!(target.name, "lonely");
        assert_eq!(target.sequence, "");
    }

    #[test]
    fn test_empty_file() {
        let target = parse_target("");
        assert_eq!(target.name, UNKNOWN_TARGET);
        assert_eq!(target.sequence, "");
    }
}
