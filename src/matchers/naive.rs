// Copyright (c) 2025 Pono Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Brute-force matcher: compare the pattern against every window.

use std::sync::atomic::AtomicBool;

use super::{poll, run_to_completion, Interrupted};

/// Returns every start offset of `pattern` in `text`.
pub fn search(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    run_to_completion(search_until, text, pattern)
}

/// Returns every start offset of `pattern` in `text`, or [`Interrupted`]
/// once `stop` is set.
///
/// Each candidate window is compared byte by byte and abandoned on the first
/// mismatch.
pub fn search_until(
    text: &[u8],
    pattern: &[u8],
    stop: &AtomicBool,
) -> Result<Vec<usize>, Interrupted> {
    let n = text.len();
    let m = pattern.len();
    let mut indices = Vec::new();

    if m == 0 || m > n {
        return Ok(indices);
    }

    for start in 0..=n - m {
        poll(start, stop)?;
        let mut j = 0;
        while j < m && text[start + j] == pattern[j] {
            j += 1;
        }
        if j == m {
            indices.push(start);
        }
    }

    Ok(indices)
}
