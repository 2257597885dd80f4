// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use seqfinder::errors::SeqFinderError;

fn main() -> Result<(), SeqFinderError> {
    seqfinder::run()
}
