// Copyright (c) 2025 Pono Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Knuth–Morris–Pratt matcher.
//!
//! The pattern is preprocessed into a failure table in O(m); the text is then
//! scanned once, left to right, without ever moving backwards. On a mismatch
//! the already-matched prefix is reused through the failure table instead of
//! restarting the comparison.

use std::sync::atomic::AtomicBool;

use super::{poll, run_to_completion, Interrupted};

/// Builds the failure table for `pattern`.
///
/// `table[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it.
pub fn failure_table(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut table = vec![0; m];
    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            table[i] = len;
            i += 1;
        } else if len != 0 {
            len = table[len - 1];
        } else {
            table[i] = 0;
            i += 1;
        }
    }

    table
}

/// Returns every start offset of `pattern` in `text`.
pub fn search(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    run_to_completion(search_until, text, pattern)
}

/// Returns every start offset of `pattern` in `text`, or [`Interrupted`]
/// once `stop` is set.
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

    let table = failure_table(pattern);
    let mut j = 0;

    for (i, &byte) in text.iter().enumerate() {
        poll(i, stop)?;
        while j > 0 && byte != pattern[j] {
            j = table[j - 1];
        }
        if byte == pattern[j] {
            j += 1;
        }
        if j == m {
            indices.push(i + 1 - m);
            // Continue from the longest border so overlapping matches are kept.
            j = table[j - 1];
        }
    }

    Ok(indices)
}
