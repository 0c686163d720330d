// Copyright (c) 2025 Pono Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Shift tables for the Boyer-Moore string matching algorithm.
//!
//! 1. Bad Character Table: the rightmost position of every byte value in the
//!    pattern, used to align a mismatching text byte with its last occurrence
//!    in the pattern (or to jump past it entirely).
//!
//! 2. Good Suffix Table: for every mismatch position, the smallest shift that
//!    realigns the already-matched suffix with another occurrence of itself in
//!    the pattern, or with a prefix of the pattern.
//!
//! Both tables are built once per pattern during preprocessing.

/// Number of distinct byte values.
const ALPHABET_SIZE: usize = 256;

/// Bad character table for the Boyer-Moore algorithm.
#[derive(Debug, Clone)]
pub struct BadCharTable {
    /// Rightmost index of each byte in the pattern, `-1` when absent
    last: [isize; ALPHABET_SIZE],
}

impl BadCharTable {
    /// Creates the table for `pattern` in O(m + σ).
    pub fn new(pattern: &[u8]) -> Self {
        let mut last = [-1; ALPHABET_SIZE];
        for (i, &b) in pattern.iter().enumerate() {
            last[usize::from(b)] = i as isize;
        }
        Self { last }
    }

    /// Rightmost index of `byte` in the pattern, if it occurs.
    #[cfg(test)]
    fn last_occurrence(&self, byte: u8) -> Option<usize> {
        usize::try_from(self.last[usize::from(byte)]).ok()
    }

    /// Shift proposed by the bad character rule.
    ///
    /// `pos` is the pattern index where `byte` (read from the text) failed to
    /// match. The result is at least 1.
    pub fn get_shift(&self, byte: u8, pos: usize) -> usize {
        let shift = pos as isize - self.last[usize::from(byte)];
        shift.max(1) as usize
    }
}

/// Good suffix table for the Boyer-Moore algorithm (strong variant).
#[derive(Debug, Clone)]
pub struct GoodSuffixTable {
    /// `shift[j]` applies when `pattern[j..]` matched and `pattern[j - 1]` did not
    shift: Vec<usize>,
}

impl GoodSuffixTable {
    /// Creates the table for `pattern` in O(m).
    pub fn new(pattern: &[u8]) -> Self {
        let m = pattern.len();
        let mut shift = vec![0; m + 1];
        let border = Self::compute_border(pattern, &mut shift);
        Self::fill_prefix_shifts(&mut shift, &border);

        Self { shift }
    }

    /// Computes suffix borders and the shifts for suffixes that reoccur
    /// inside the pattern preceded by a different byte.
    fn compute_border(pattern: &[u8], shift: &mut [usize]) -> Vec<usize> {
        let m = pattern.len();
        let mut border = vec![0; m + 1];

        let mut i = m;
        let mut j = m + 1;
        border[i] = j;

        while i > 0 {
            while j <= m && pattern[i - 1] != pattern[j - 1] {
                if shift[j] == 0 {
                    shift[j] = j - i;
                }
                j = border[j];
            }
            i -= 1;
            j -= 1;
            border[i] = j;
        }

        border
    }

    /// Fills the remaining entries from the borders that are also prefixes.
    fn fill_prefix_shifts(shift: &mut [usize], border: &[usize]) {
        let m = shift.len() - 1;
        let mut j = border[0];

        for i in 0..=m {
            if shift[i] == 0 {
                shift[i] = j;
            }
            if i == j {
                j = border[j];
            }
        }
    }

    /// Shift to apply when the mismatch happened at pattern index `pos - 1`,
    /// i.e. `pattern[pos..]` matched. `get_shift(0)` is the shift after a
    /// full match.
    pub fn get_shift(&self, pos: usize) -> usize {
        self.shift.get(pos).copied().unwrap_or(1).max(1)
    }

    /// Smallest period of the pattern: the shift to the next alignment at
    /// which a full match is possible after a full match.
    pub fn period(&self) -> usize {
        self.get_shift(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_char_table() {
        let table = BadCharTable::new(b"PATTERN");

        assert_eq!(table.last_occurrence(b'P'), Some(0));
        assert_eq!(table.last_occurrence(b'T'), Some(3));
        assert_eq!(table.last_occurrence(b'N'), Some(6));
        assert_eq!(table.last_occurrence(b'Z'), None);

        // 'A' last occurs at 1, mismatch at 4 -> align by 3
        assert_eq!(table.get_shift(b'A', 4), 3);
        // Absent byte -> move the pattern past it
        assert_eq!(table.get_shift(b'Z', 3), 4);
        // Last occurrence right of the mismatch -> never move backwards
        assert_eq!(table.get_shift(b'N', 2), 1);
    }

    #[test]
    fn test_good_suffix_table() {
        // Classic example: period of ABBABAB is 5 (border "AB")
        let table = GoodSuffixTable::new(b"ABBABAB");
        assert_eq!(table.period(), 5);
        // Mismatch on the last byte -> only the bad character rule helps
        assert_eq!(table.get_shift(7), 1);
        // "BAB" matched, preceded by a mismatch -> realign with the inner "BAB"
        assert_eq!(table.get_shift(4), 2);

        let table = GoodSuffixTable::new(b"AAAA");
        assert_eq!(table.period(), 1);

        let table = GoodSuffixTable::new(b"ABCD");
        assert_eq!(table.period(), 4);

        // Border "ABAB" of "ABABAB" -> period 2
        let table = GoodSuffixTable::new(b"ABABAB");
        assert_eq!(table.period(), 2);
    }

    #[test]
    fn test_shifts_are_positive() {
        for pattern in [&b"ANPANMAN"[..], b"ABABCABAB", b"A", b"ABAAB"] {
            let table = GoodSuffixTable::new(pattern);
            for pos in 0..=pattern.len() {
                assert!(table.get_shift(pos) >= 1);
                assert!(table.get_shift(pos) <= pattern.len());
            }
        }
    }

    #[test]
    fn test_empty_pattern() {
        let good_suffix = GoodSuffixTable::new(b"");
        assert_eq!(good_suffix.period(), 1);
    }
}
