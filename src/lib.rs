//! nthterm
//!
//! Given the first terms of a numeric sequence (positions 1, 2, 3, ...),
//! constructs the unique minimal-degree polynomial passing through them
//! via [Newton's forward differences](https://en.wikipedia.org/wiki/Newton_polynomial),
//! evaluates it at arbitrary positions, and renders it as plain-text or
//! LaTeX formulas.

pub mod interpolation;
pub use interpolation::Sequence;
