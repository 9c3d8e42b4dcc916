//! Routines grouped by the growth class of their running time.
//!
//! Big-O keeps only the dominant term of a cost function and drops its
//! constant factor: \(f(n) = 3n^2 + 5n + 10\) is \(O(n^2)\), because for
//! large \(n\) the \(n^2\) term dominates.
//!
//! - `constant`: cost independent of input size
//! - `logarithmic`: input halves each step
//! - `linear`: one pass over the input
//! - `quadratic`: nested passes over the input

pub mod constant;
pub mod linear;
pub mod logarithmic;
pub mod quadratic;

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// A growth class in Big-O notation, ordered from slowest to fastest growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    /// \(O(1)\)
    Constant,
    /// \(O(\log n)\)
    Logarithmic,
    /// \(O(n)\)
    Linear,
    /// \(O(n \log n)\)
    Linearithmic,
    /// \(O(n^2)\)
    Quadratic,
    /// \(O(2^n)\)
    Exponential,
}

impl Complexity {
    /// Every class, in growth order.
    pub const ALL: [Complexity; 6] = [
        Self::Constant,
        Self::Logarithmic,
        Self::Linear,
        Self::Linearithmic,
        Self::Quadratic,
        Self::Exponential,
    ];

    /// Evaluates the dominant term at input size `n`.
    ///
    /// Logarithms are base 2 and `n` is clamped to at least 1, so every class
    /// is positive for every input.
    #[allow(clippy::cast_precision_loss)]
    pub fn growth(self, n: usize) -> f64 {
        let n = n.max(1) as f64;
        match self {
            Self::Constant => 1.0,
            Self::Logarithmic => n.log2().max(1.0),
            Self::Linear => n,
            Self::Linearithmic => n * n.log2().max(1.0),
            Self::Quadratic => n * n,
            Self::Exponential => n.exp2(),
        }
    }

    /// Ratio by which the cost is expected to grow from size `from` to size `to`.
    pub fn expected_ratio(self, from: usize, to: usize) -> f64 {
        self.growth(to) / self.growth(from)
    }

    /// Short identifier, as used in benchmark group names.
    pub fn key(self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Logarithmic => "logarithmic",
            Self::Linear => "linear",
            Self::Linearithmic => "linearithmic",
            Self::Quadratic => "quadratic",
            Self::Exponential => "exponential",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Constant => "O(1)",
            Self::Logarithmic => "O(log n)",
            Self::Linear => "O(n)",
            Self::Linearithmic => "O(n log n)",
            Self::Quadratic => "O(n^2)",
            Self::Exponential => "O(2^n)",
        })
    }
}

/// Error returned when parsing an unrecognized [`Complexity`] key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownComplexity(pub String);

impl fmt::Display for UnknownComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown complexity class `{}`", self.0)
    }
}

impl std::error::Error for UnknownComplexity {}

impl FromStr for Complexity {
    type Err = UnknownComplexity;

    /// Parses a [`Complexity::key`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| UnknownComplexity(s.to_owned()))
    }
}
