//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use autosimd_core::{Element, SimdVector};

pub const EPSILON: f64 = 1e-10;

/// Generate lane counts that test edge cases around every vector width
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        0,  // Empty
        1,  // Single lane
        2,  // SSE2 / NEON f64 width
        3,  // Odd
        4,  // AVX f64 width
        5,  // AVX f64 width + 1
        7,  // Prime
        8,  // AVX-512 f64 width
        9,  // AVX-512 f64 width + 1
        15, // Multiple of no width
        16, // AVX-512 f32 width
        17, // Power of 2 + 1
        31, // Prime
        64, // Cache line of f64
        127,
    ]
}

/// Special floating-point values for edge case testing
pub fn special_values() -> Vec<f64> {
    vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        f64::MIN,
        f64::MAX,
        f64::MIN_POSITIVE,
        -f64::MIN_POSITIVE,
        f64::EPSILON,
        std::f64::consts::PI,
        std::f64::consts::E,
        1e-308, // Near underflow
        1e308,  // Near overflow
    ]
}

/// Generate test data with specific patterns
pub fn generate_test_data(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64 + 0.1).collect()
}

/// Generate complementary test data for binary operations
pub fn generate_test_data_complement(len: usize) -> Vec<f64> {
    (0..len).map(|i| (len - i) as f64 + 0.2).collect()
}

/// Vector whose lanes are `values[..WIDTH]`, cycling if `values` is short
pub fn vector_from<T: Element, V: SimdVector<T>>(values: &[T]) -> V {
    let mut v = V::default();
    for i in 0..V::WIDTH {
        v[i] = values[i % values.len()];
    }
    v
}

/// Assert two lane sequences are equal within tolerance
pub fn assert_lanes_close(actual: &[f64], expected: &[f64], context: &str) {
    assert_eq!(actual.len(), expected.len(), "length mismatch for {}", context);
    for (&a, &e) in actual.iter().zip(expected.iter()) {
        assert_relative_eq!(a, e, epsilon = EPSILON, max_relative = EPSILON);
    }
}

/// `y += a * x` over whole vectors, lanes beyond the last full vector are
/// handled one at a time
pub fn axpy<V: SimdVector<f64>>(a: f64, x: &[f64], y: &mut [f64]) {
    let full = x.len() / V::WIDTH * V::WIDTH;
    for start in (0..full).step_by(V::WIDTH) {
        let xv = V::from_slice(&x[start..]);
        let mut yv = V::from_slice(&y[start..]);
        yv.scalar_fma(a, xv);
        yv.write_to_slice(&mut y[start..]);
    }
    for i in full..x.len() {
        y[i] += a * x[i];
    }
}

/// Dot product accumulated in vectors, reduced lane by lane at the end
pub fn dot<V: SimdVector<f64>>(x: &[f64], y: &[f64]) -> f64 {
    let full = x.len() / V::WIDTH * V::WIDTH;
    let mut acc = V::default();
    for start in (0..full).step_by(V::WIDTH) {
        acc.fma(V::from_slice(&x[start..]), V::from_slice(&y[start..]));
    }
    let mut sum: f64 = acc.lanes().iter().sum();
    for i in full..x.len() {
        sum += x[i] * y[i];
    }
    sum
}
