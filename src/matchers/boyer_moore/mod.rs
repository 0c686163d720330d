// Copyright (c) 2025 Pono Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore Pattern Matcher.
//!
//! This module implements the Boyer-Moore string search algorithm over bytes
//! with both the bad character rule and the strong good suffix rule. After a
//! full match the window advances by the pattern period and skips the prefix
//! that is already known to match (Galil rule), so reporting every occurrence
//! stays linear even for highly periodic inputs such as `"AAAA…"`.
//!
//! # Example
//!
//! ```
//! use pono_match_lib::matchers::boyer_moore::BoyerMooreMatcher;
//!
//! let matcher = BoyerMooreMatcher::try_new(b"needle").unwrap();
//! let text = b"Finding a needle in a haystack is hard, but finding another needle is easier.";
//! let matches = matcher.find_all(text).collect::<Vec<_>>();
//!
//! assert_eq!(matches, vec![10, 60]);
//! ```
//!
//! # Performance Characteristics
//!
//! - Preprocessing time: O(m + σ) where σ = 256 is the byte alphabet
//! - Space complexity: O(m + σ)
//! - Best case: O(n/m) comparisons
//! - Worst case: O(n + m) comparisons
//! - Average case: O(n)

mod error;
mod matcher;
mod tables;

#[cfg(test)]
mod tests;

use std::sync::atomic::AtomicBool;

pub use error::{BoyerMooreError, Result};
pub use matcher::{BoyerMooreMatcher, MatchIterator};
pub use tables::{BadCharTable, GoodSuffixTable};

use super::{run_to_completion, Interrupted};

/// Returns every start offset of `pattern` in `text`.
///
/// An empty pattern has no occurrences.
pub fn search(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    run_to_completion(search_until, text, pattern)
}

/// Returns every start offset of `pattern` in `text`, or [`Interrupted`]
/// once `stop` is set.
pub fn search_until(
    text: &[u8],
    pattern: &[u8],
    stop: &AtomicBool,
) -> std::result::Result<Vec<usize>, Interrupted> {
    let matcher = match BoyerMooreMatcher::try_new(pattern) {
        Ok(matcher) if pattern.len() <= text.len() => matcher,
        _ => return Ok(Vec::new()),
    };

    let mut matches = matcher.find_all_until(text, stop);
    let indices: Vec<usize> = matches.by_ref().collect();
    if matches.is_interrupted() {
        Err(Interrupted)
    } else {
        Ok(indices)
    }
}
