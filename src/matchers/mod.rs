// Copyright (c) 2025 Pono Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Exact string-search algorithms.
//!
//! Every matcher in this module is a pure function from `(text, pattern)` to
//! the ascending list of byte offsets at which `pattern` occurs in `text`.
//! Overlapping occurrences are reported. Matchers never panic:
//!
//! - an empty pattern yields no matches,
//! - a pattern longer than the text yields no matches.
//!
//! Each matcher also has a `search_until` form that polls a stop flag while
//! it scans and gives up with [`Interrupted`] once the flag is set. The plain
//! `search` functions never stop early.
//!
//! The set of algorithms is closed and described by [`Algorithm`], which is
//! the single table mapping an identifier to its search function.
//!
//! # Example
//!
//! ```
//! use pono_match_lib::matchers::Algorithm;
//!
//! let indices = Algorithm::Kmp.search(b"AAAAAA", b"AA");
//! assert_eq!(indices, vec![0, 1, 2, 3, 4]);
//!
//! let algorithm: Algorithm = "Boyer-Moore".parse().unwrap();
//! assert_eq!(algorithm, Algorithm::BoyerMoore);
//! ```

pub mod boyer_moore;
pub mod kmp;
pub mod naive;
pub mod rabin_karp;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

/// Signature shared by every interruptible matcher.
pub type SearchFn = fn(&[u8], &[u8], &AtomicBool) -> Result<Vec<usize>, Interrupted>;

/// Windows scanned between two polls of the stop flag.
const POLL_INTERVAL: usize = 1024;

/// Returned by a search that observed its stop flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("search interrupted")]
pub struct Interrupted;

/// Polls `stop` once every [`POLL_INTERVAL`] windows.
#[inline]
fn poll(window: usize, stop: &AtomicBool) -> Result<(), Interrupted> {
    if window % POLL_INTERVAL == 0 && stop.load(Ordering::Relaxed) {
        return Err(Interrupted);
    }
    Ok(())
}

/// Runs an interruptible matcher with a flag nobody sets.
fn run_to_completion(search: SearchFn, text: &[u8], pattern: &[u8]) -> Vec<usize> {
    // The flag is never set, so the search cannot be interrupted
    search(text, pattern, &AtomicBool::new(false)).unwrap_or_default()
}

/// Identifier of one of the supported exact string-search algorithms.
///
/// The declaration order is the canonical order used when comparing all
/// algorithms, and it breaks ties when two runs take equally long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Brute-force window comparison.
    Naive,
    /// Knuth–Morris–Pratt with a failure table.
    Kmp,
    /// Boyer–Moore with bad-character and good-suffix rules.
    BoyerMoore,
    /// Rabin–Karp with a rolling polynomial hash.
    RabinKarp,
}

impl Algorithm {
    /// All algorithms in canonical order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Naive,
        Algorithm::Kmp,
        Algorithm::BoyerMoore,
        Algorithm::RabinKarp,
    ];

    /// Canonical wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Kmp => "kmp",
            Algorithm::BoyerMoore => "boyer_moore",
            Algorithm::RabinKarp => "rabin_karp",
        }
    }

    /// The interruptible search function implementing this algorithm.
    pub fn search_fn(&self) -> SearchFn {
        match self {
            Algorithm::Naive => naive::search_until,
            Algorithm::Kmp => kmp::search_until,
            Algorithm::BoyerMoore => boyer_moore::search_until,
            Algorithm::RabinKarp => rabin_karp::search_until,
        }
    }

    /// Runs this algorithm over `text` to completion.
    pub fn search(&self, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        run_to_completion(self.search_fn(), text, pattern)
    }

    /// Runs this algorithm over `text`, giving up once `stop` is set.
    pub fn search_until(
        &self,
        text: &[u8],
        pattern: &[u8],
        stop: &AtomicBool,
    ) -> Result<Vec<usize>, Interrupted> {
        (self.search_fn())(text, pattern, stop)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when an identifier names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown algorithm '{0}'")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parses an identifier case-insensitively.
    ///
    /// Surrounding whitespace is ignored and `-`, `_` and spaces are
    /// interchangeable, so `"boyer_moore"`, `"Boyer-Moore"` and
    /// `"BOYER MOORE"` all resolve to [`Algorithm::BoyerMoore`].
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "naive" | "brute_force" => Ok(Algorithm::Naive),
            "kmp" | "knuth_morris_pratt" => Ok(Algorithm::Kmp),
            "boyer_moore" => Ok(Algorithm::BoyerMoore),
            "rabin_karp" => Ok(Algorithm::RabinKarp),
            _ => Err(UnknownAlgorithm(value.to_string())),
        }
    }
}
