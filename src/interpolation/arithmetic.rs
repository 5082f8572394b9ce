//! Arithmetic primitives for the forward-difference formula.
//!
//! Pure numeric helpers with no shared state. Both are used as the
//! denominator/numerator pair of each term in Newton's
//! [forward-difference](https://en.wikipedia.org/wiki/Newton_polynomial)
//! expansion.


/// Computes `k!` as an `f64`.
///
/// Returns `1.0` for `k = 0` or `k = 1`. Callers never pass a `k`
/// beyond the term count, so float precision is not a concern here.
#[inline]
pub fn factorial(k: usize) -> f64 {
    let mut acc = 1.0;
    for i in 2..=k {
        acc *= i as f64;
    }
    acc
}


/// Computes the falling-factorial product `(n-1)(n-2)...(n-length)`.
///
/// Returns `1.0` for `length = 0` (empty product). `n` may be any real
/// number; evaluation at fractional or out-of-range positions relies on
/// this.
#[inline]
pub fn falling_factorial(n: f64, length: usize) -> f64 {
    let mut acc = 1.0;
    for j in 1..=length {
        acc *= n - j as f64;
    }
    acc
}
