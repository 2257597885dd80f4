// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::io::{self, Write};

use itertools::Itertools;

use crate::search::SeqMatch;

/// Writes the human-readable search report. Matches are printed in the given order, each block
/// followed by a "---" line.
pub fn write_report<W: Write>(
    out: &mut W,
    target_name: &str,
    matches: &[SeqMatch],
) -> io::Result<()> {
    match matches.len() {
        0 => return writeln!(out, "Target \"{}\" sequence not found.", target_name),
        1 => writeln!(out, "Target \"{}\" sequence has only one match:", target_name)?,
        _ => writeln!(
            out,
            "Multiple matches found for the target \"{}\" sequence:",
            target_name
        )?,
    }
    writeln!(out, "{}\n---", matches.iter().format("\n---\n"))
}
