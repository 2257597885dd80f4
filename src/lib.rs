// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

pub mod errors;
pub mod report;
pub mod runner;
pub mod search;
pub mod seq;

use crate::errors::SeqFinderError;

pub fn run() -> Result<(), SeqFinderError> {
    runner::run()
}
