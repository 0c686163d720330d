//! Complexity catalog.
//!
//! Static textbook complexity labels for each algorithm, attached to results
//! for display. `n` is the text length and `m` the pattern length.

use serde::Serialize;

use crate::matchers::Algorithm;

/// Best, worst and average-case time complexity labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    /// Best-case label
    pub best: &'static str,
    /// Worst-case label
    pub worst: &'static str,
    /// Average-case label
    pub average: &'static str,
}

/// Looks up the labels for `algorithm`.
pub fn lookup(algorithm: Algorithm) -> Complexity {
    match algorithm {
        Algorithm::Naive => Complexity {
            best: "O(n)",
            worst: "O(n*m)",
            average: "O(n)",
        },
        Algorithm::Kmp => Complexity {
            best: "O(n+m)",
            worst: "O(n+m)",
            average: "O(n+m)",
        },
        // Bad character + good suffix + Galil rule
        Algorithm::BoyerMoore => Complexity {
            best: "O(n/m)",
            worst: "O(n+m)",
            average: "O(n)",
        },
        Algorithm::RabinKarp => Complexity {
            best: "O(n+m)",
            worst: "O(n*m)",
            average: "O(n+m)",
        },
    }
}
