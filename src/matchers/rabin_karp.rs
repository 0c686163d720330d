// Copyright (c) 2025 Pono Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Rabin–Karp matcher.
//!
//! A polynomial hash of the pattern is compared against a rolling hash of
//! each text window. Equal hashes are confirmed with a direct comparison, so
//! collisions can cost time but never produce a false match.

use std::sync::atomic::AtomicBool;

use super::{poll, run_to_completion, Interrupted};

/// Hash base: one digit per possible byte value.
const BASE: u64 = 256;

/// Prime modulus of the rolling hash.
const MODULUS: u64 = 1_000_000_007;

/// Polynomial hash of `bytes` modulo [`MODULUS`].
fn hash(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0, |acc, &b| (acc * BASE + u64::from(b)) % MODULUS)
}

/// Slides the window one byte: drops `outgoing`, appends `incoming`.
///
/// `high` is `BASE^(m-1) mod MODULUS`, the weight of the outgoing byte.
fn roll(current: u64, outgoing: u8, incoming: u8, high: u64) -> u64 {
    let without = (current + MODULUS - (u64::from(outgoing) * high) % MODULUS) % MODULUS;
    (without * BASE + u64::from(incoming)) % MODULUS
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

    let high = (1..m).fold(1, |acc, _| (acc * BASE) % MODULUS);
    let target = hash(pattern);
    let mut window = hash(&text[..m]);

    for start in 0..=n - m {
        poll(start, stop)?;
        if window == target && &text[start..start + m] == pattern {
            indices.push(start);
        }
        if start + m < n {
            window = roll(window, text[start], text[start + m], high);
        }
    }

    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_hash_matches_direct_hash() {
        let text = b"the quick brown fox jumps over the lazy dog";
        let m = 7;
        let high = (1..m).fold(1, |acc, _| (acc * BASE) % MODULUS);

        let mut window = hash(&text[..m]);
        for start in 1..=text.len() - m {
            window = roll(window, text[start - 1], text[start + m - 1], high);
            assert_eq!(window, hash(&text[start..start + m]), "window at {start}");
        }
    }

    #[test]
    fn test_search_confirms_hash_hits() {
        assert_eq!(search(b"GEEKS FOR GEEKS", b"GEEK"), vec![0, 10]);
        assert_eq!(search(b"\xff\xff\xff\x00\xff", b"\xff\xff"), vec![0, 1]);
    }

    #[test]
    fn test_search_edge_cases() {
        assert!(search(b"abc", b"").is_empty());
        assert!(search(b"abc", b"abcd").is_empty());
        assert_eq!(search(b"abc", b"abc"), vec![0]);
        assert_eq!(search(b"abcc", b"c"), vec![2, 3]);
    }

    #[test]
    fn test_search_until_stops_on_flag() {
        let stop = AtomicBool::new(true);
        assert_eq!(search_until(b"GEEKS FOR GEEKS", b"GEEK", &stop), Err(Interrupted));
    }
}
