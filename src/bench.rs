//! Benchmarking support for Pono Match.
//!
//! Deterministic input generators shared by the criterion benchmarks, so that
//! every run measures the matchers on exactly the same bytes.

/// A named (text, pattern) pair to benchmark against.
#[derive(Debug, Clone)]
pub struct Workload {
    /// Short label used as the benchmark parameter
    pub name: &'static str,
    /// Text to search in
    pub text: Vec<u8>,
    /// Pattern to search for
    pub pattern: Vec<u8>,
}

/// Pseudo-random text over `alphabet`, reproducible from `seed`.
pub fn random_text(len: usize, alphabet: &[u8], seed: u64) -> Vec<u8> {
    // 64-bit LCG (Knuth MMIX constants); statistical quality is irrelevant here
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            alphabet[(state >> 33) as usize % alphabet.len()]
        })
        .collect()
}

/// The standard workloads for a text of `len` bytes.
///
/// - `english`: wide alphabet, pattern taken from the middle of the text
/// - `dna`: four-letter alphabet, many partial matches
/// - `adversarial`: `a…a` text against `a…ab`, the naive worst case
pub fn workloads(len: usize) -> Vec<Workload> {
    let english = random_text(len, b"abcdefghijklmnopqrstuvwxyz     ", 7);
    let english_pattern = english[len / 2..len / 2 + 16.min(len / 2)].to_vec();

    let dna = random_text(len, b"ACGT", 11);
    let dna_pattern = random_text(12, b"ACGT", 13);

    let adversarial = vec![b'a'; len];
    let mut adversarial_pattern = vec![b'a'; 31];
    adversarial_pattern.push(b'b');

    vec![
        Workload {
            name: "english",
            text: english,
            pattern: english_pattern,
        },
        Workload {
            name: "dna",
            text: dna,
            pattern: dna_pattern,
        },
        Workload {
            name: "adversarial",
            text: adversarial,
            pattern: adversarial_pattern,
        },
    ]
}
