// Copyright (c) 2025 Pono Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore string matching algorithm implementation.
//!
//! This module contains the matcher itself and the iterator that walks a
//! text reporting every occurrence of the pattern, including overlapping
//! ones.

use std::iter::FusedIterator;
use std::sync::atomic::AtomicBool;

use super::error::{BoyerMooreError, Result};
use super::tables::{BadCharTable, GoodSuffixTable};
use crate::matchers::poll;

/// Iterator over match positions in a text.
///
/// Windows are compared right to left. After a mismatch the window moves by
/// the larger of the bad character and good suffix shifts; after a full match
/// it moves by the pattern period, and the prefix already known to match
/// (Galil rule) is not compared again.
///
/// An iterator created with [`BoyerMooreMatcher::find_all_until`] polls its
/// stop flag as it moves between windows and ends early once it is set; see
/// [`MatchIterator::is_interrupted`].
#[derive(Debug)]
pub struct MatchIterator<'a> {
    /// The matcher instance
    matcher: &'a BoyerMooreMatcher,

    /// The text being searched
    text: &'a [u8],

    /// Start of the current window
    shift: usize,

    /// Length of the pattern prefix known to match at the current window
    known_prefix: usize,

    /// Flag that abandons the scan when set
    stop: Option<&'a AtomicBool>,

    /// Windows examined so far
    windows: usize,

    /// Whether the scan was abandoned
    interrupted: bool,
}

impl<'a> MatchIterator<'a> {
    /// Whether the scan ended because the stop flag was set rather than
    /// because the text was exhausted.
    pub fn is_interrupted(&self) -> bool {
        self.interrupted
    }
}

impl<'a> Iterator for MatchIterator<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let pattern = self.matcher.pattern.as_slice();
        let m = pattern.len();

        while self.shift + m <= self.text.len() {
            if let Some(stop) = self.stop {
                if poll(self.windows, stop).is_err() {
                    self.interrupted = true;
                    self.shift = self.text.len();
                    return None;
                }
            }
            self.windows += 1;

            let s = self.shift;
            let mut j = m;

            while j > self.known_prefix && pattern[j - 1] == self.text[s + j - 1] {
                j -= 1;
            }

            if j == self.known_prefix {
                let period = self.matcher.good_suffix.period();
                self.shift = s + period;
                self.known_prefix = m - period;
                return Some(s);
            }

            let bad_char_shift = self.matcher.bad_char.get_shift(self.text[s + j - 1], j - 1);
            let good_suffix_shift = self.matcher.good_suffix.get_shift(j);
            self.shift = s + bad_char_shift.max(good_suffix_shift);
            self.known_prefix = 0;
        }

        None
    }
}

impl<'a> FusedIterator for MatchIterator<'a> {}

/// Boyer-Moore pattern matcher over bytes.
///
/// The pattern is preprocessed once; the matcher can then be reused against
/// any number of texts.
#[derive(Debug, Clone)]
pub struct BoyerMooreMatcher {
    /// The pattern being searched for
    pattern: Vec<u8>,

    /// Bad character rule table
    bad_char: BadCharTable,

    /// Good suffix rule table
    good_suffix: GoodSuffixTable,
}

impl BoyerMooreMatcher {
    /// Preprocesses `pattern` in O(m + σ).
    ///
    /// # Errors
    ///
    /// Returns [`BoyerMooreError::EmptyPattern`] if the pattern is empty.
    pub fn try_new(pattern: &[u8]) -> Result<Self> {
        if pattern.is_empty() {
            return Err(BoyerMooreError::EmptyPattern);
        }

        Ok(Self {
            pattern: pattern.to_vec(),
            bad_char: BadCharTable::new(pattern),
            good_suffix: GoodSuffixTable::new(pattern),
        })
    }

    /// Finds the first occurrence of the pattern in `text`.
    #[cfg(test)]
    pub(crate) fn find_first(&self, text: &[u8]) -> Option<usize> {
        self.find_all(text).next()
    }

    /// Returns an iterator over every occurrence of the pattern in `text`,
    /// in ascending order.
    pub fn find_all<'a>(&'a self, text: &'a [u8]) -> MatchIterator<'a> {
        MatchIterator {
            matcher: self,
            text,
            shift: 0,
            known_prefix: 0,
            stop: None,
            windows: 0,
            interrupted: false,
        }
    }

    /// Like [`find_all`](Self::find_all), but the iterator ends early once
    /// `stop` is set.
    pub fn find_all_until<'a>(
        &'a self,
        text: &'a [u8],
        stop: &'a AtomicBool,
    ) -> MatchIterator<'a> {
        MatchIterator {
            stop: Some(stop),
            ..self.find_all(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_basic() {
        let matcher = BoyerMooreMatcher::try_new(b"pattern").unwrap();

        assert_eq!(matcher.find_first(b"This is a pattern in some text."), Some(10));
        assert_eq!(
            matcher.find_first(b"This text does not contain what we're looking for."),
            None
        );
    }

    #[test]
    fn test_find_all_non_overlapping() {
        let matcher = BoyerMooreMatcher::try_new(b"pattern").unwrap();
        let text = b"pattern at start, middle pattern, and pattern at end";
        let positions: Vec<usize> = matcher.find_all(text).collect();

        assert_eq!(positions, vec![0, 25, 38]);
    }

    #[test]
    fn test_find_all_overlapping() {
        let matcher = BoyerMooreMatcher::try_new(b"ana").unwrap();
        let positions: Vec<usize> = matcher.find_all(b"banana").collect();
        assert_eq!(positions, vec![1, 3]);

        let matcher = BoyerMooreMatcher::try_new(b"abab").unwrap();
        let positions: Vec<usize> = matcher.find_all(b"abababab").collect();
        assert_eq!(positions, vec![0, 2, 4]);
    }

    #[test]
    fn test_periodic_pattern_uses_known_prefix() {
        let matcher = BoyerMooreMatcher::try_new(b"AA").unwrap();
        let positions: Vec<usize> = matcher.find_all(b"AAAAAA").collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4]);

        // Known prefix must be dropped again after a mismatch
        let matcher = BoyerMooreMatcher::try_new(b"AAB").unwrap();
        let positions: Vec<usize> = matcher.find_all(b"AABAABAAAB").collect();
        assert_eq!(positions, vec![0, 3, 7]);
    }

    #[test]
    fn test_edge_cases() {
        let matcher = BoyerMooreMatcher::try_new(b"pattern").unwrap();
        assert_eq!(matcher.find_first(b""), None);
        assert_eq!(matcher.find_first(b"pat"), None);
        assert_eq!(matcher.find_first(b"This ends with pattern"), Some(15));
        assert_eq!(matcher.find_first(b"pattern starts here"), Some(0));
    }

    #[test]
    fn test_utf8_offsets_are_bytes() {
        let text = "I'm at the café now";
        let matcher = BoyerMooreMatcher::try_new("café".as_bytes()).unwrap();
        let position = matcher.find_first(text.as_bytes()).unwrap();

        assert_eq!(position, 11);
        assert_eq!(&text[position..position + "café".len()], "café");
    }

    #[test]
    fn test_iterator_is_fused() {
        let matcher = BoyerMooreMatcher::try_new(b"x").unwrap();
        let mut iter = matcher.find_all(b"x");
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_find_all_until_honours_stop_flag() {
        let matcher = BoyerMooreMatcher::try_new(b"AA").unwrap();

        let running = AtomicBool::new(false);
        let mut iter = matcher.find_all_until(b"AAAA", &running);
        assert_eq!(iter.by_ref().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(!iter.is_interrupted());

        let stopped = AtomicBool::new(true);
        let mut iter = matcher.find_all_until(b"AAAA", &stopped);
        assert_eq!(iter.next(), None);
        assert!(iter.is_interrupted());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_try_new_rejects_empty_pattern() {
        let result = BoyerMooreMatcher::try_new(b"");
        assert_eq!(result.unwrap_err(), BoyerMooreError::EmptyPattern);
    }
}
