//! Newton (Forward-Difference) Sequence Interpolation
//!
//! Implements global polynomial interpolation over unit-spaced,
//! 1-indexed positions using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients are computed once at construction; evaluation reuses the
//! stored table and accumulates terms left-to-right.


use crate::interpolation::arithmetic::{factorial, falling_factorial};
use crate::interpolation::errors::SequenceError;


/// Interpolation engine for a 1-indexed term sequence.
///
/// # Fields
/// - `terms`        : the supplied sequence values, `terms[i]` at position `i + 1`
/// - `coefficients` : divided-difference table, `m - 1` entries for `m` terms
///
/// # Construction
/// - Use [`Sequence::new`]; the coefficient table is built there and never
///   mutated afterward.
///
/// # Invariants
/// - `coefficients[i]` depends only on `terms[0..=i+1]`.
/// - `terms[k] - coefficients[k-1]` equals the k-th forward difference of
///   the sequence.
#[derive(Debug, Clone)]
pub struct Sequence {
    pub(crate) terms        : Vec<f64>,
    pub(crate) coefficients : Vec<f64>,
}

impl Sequence {
    /// Builds the engine from the given terms.
    ///
    /// # Behavior
    /// - For each prefix length `k + 1` (k = 1..m-1), evaluates the
    ///   degree-`(k-1)` interpolant of the first `k` terms at position
    ///   `k + 1` and keeps that predicted value as `coefficients[k-1]`.
    ///   The table grows by exactly one entry per prefix, reusing all
    ///   previously stored coefficients.
    ///
    /// # Errors
    /// - [`SequenceError::NoTerms`] if `terms` is empty.
    pub fn new(terms: &[f64]) -> Result<Self, SequenceError> {
        if terms.is_empty() {
            return Err(SequenceError::NoTerms);
        }

        let m = terms.len();
        let mut coefficients = Vec::with_capacity(m - 1);

        for k in 1..m {
            // position of terms[k], one past the current prefix
            let position = (k + 1) as f64;

            let mut predicted = terms[0];
            for j in 1..k {
                predicted += (terms[j] - coefficients[j - 1])
                    * falling_factorial(position, j)
                    / factorial(j);
            }

            coefficients.push(predicted);
        }

        Ok(Self { terms: terms.to_vec(), coefficients })
    }

    /// Evaluates the interpolating polynomial at position `n`.
    ///
    /// # Behavior
    /// - Accumulates the forward-difference expansion left-to-right:
    ///
    /// ```text
    /// f(n) = t[0] + (t[1] - c[0])(n-1)/1! + (t[2] - c[1])(n-1)(n-2)/2! + ...
    /// ```
    ///
    /// - For `n` in `1..=m` this reproduces the original terms (up to
    ///   floating-point rounding); elsewhere it extrapolates with the
    ///   unique degree-`m-1` polynomial.
    pub fn evaluate(&self, n: f64) -> f64 {
        let mut result = self.terms[0];

        for i in 1..self.terms.len() {
            result = (self.terms[i] - self.coefficients[i - 1])
                * falling_factorial(n, i)
                / factorial(i)
                + result;
        }

        result
    }

    /// Evaluates many positions at once.
    #[inline]
    pub fn evaluate_many(&self, ns: &[f64]) -> Vec<f64> {
        ns.iter().map(|&n| self.evaluate(n)).collect()
    }

    // getters
    pub fn terms(&self) -> &[f64] { &self.terms }
    pub fn coefficients(&self) -> &[f64] { &self.coefficients }
}
