use nthterm::interpolation::arithmetic::{factorial, falling_factorial};

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

#[test]
fn factorial_base_cases() {
    assert_eq!(factorial(0), 1.0);
    assert_eq!(factorial(1), 1.0);
}

#[test]
fn factorial_five() {
    assert_eq!(factorial(5), 120.0);
}

#[test]
fn falling_factorial_empty_product() {
    for n in [-3.0, 0.0, 1.0, 2.5, 100.0] {
        assert_eq!(falling_factorial(n, 0), 1.0);
    }
}

#[test]
fn falling_factorial_integer() {
    // (5-1)(5-2)(5-3) = 4 * 3 * 2
    assert_eq!(falling_factorial(5.0, 3), 24.0);
}

#[test]
fn falling_factorial_fractional() {
    // (2.5-1)(2.5-2) = 1.5 * 0.5
    assert!(approx_eq(falling_factorial(2.5, 2), 0.75));
}

#[test]
fn falling_factorial_negative_position() {
    // (-1-1)(-1-2) = (-2)(-3)
    assert_eq!(falling_factorial(-1.0, 2), 6.0);
}
