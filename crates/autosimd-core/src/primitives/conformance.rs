//! Shared checks every specialization's unit tests run
//!
//! Each check compares the vector result lane by lane against plain scalar
//! arithmetic on the same inputs. Equality is exact: a specialization may
//! only differ from scalar code in the rounding of a genuinely fused
//! multiply-add, and that case is compared against `mul_add`.

use crate::numeric::Element;
use crate::primitives::SimdVector;
use std::ops::{Add, Div, Mul, Sub};

pub(crate) fn lit<T: Element>(x: f64) -> T {
    <T as num_traits::NumCast>::from(x).expect("test literal fits the lane type")
}

/// Lane values with no zeros, mixed signs and non-integral parts
pub(crate) fn sample<T: Element, V: SimdVector<T>>(start: f64, step: f64) -> V {
    let mut v = V::default();
    for i in 0..V::WIDTH {
        v[i] = lit(start + step * i as f64);
    }
    v
}

fn assert_lanes<T: Element, V: SimdVector<T>>(v: V, expected: impl Fn(usize) -> T, what: &str) {
    for i in 0..V::WIDTH {
        let e = expected(i);
        assert!(
            v[i] == e || (v[i].is_nan() && e.is_nan()),
            "{} {}: lane {} is {:?}, expected {:?}",
            V::BACKEND,
            what,
            i,
            v[i],
            e
        );
    }
}

fn fma_reference<T: Element, V: SimdVector<T>>(acc: T, a: T, b: T) -> T {
    if V::FUSED {
        a.mul_add(b, acc)
    } else {
        acc + a * b
    }
}

pub(crate) fn check_contract<T, V>()
where
    T: Element + Add<V, Output = V> + Sub<V, Output = V> + Mul<V, Output = V> + Div<V, Output = V>,
    V: SimdVector<T>,
{
    check_layout::<T, V>();
    check_arithmetic::<T, V>();
    check_scalar_operands::<T, V>();
    check_compound_assignment::<T, V>();
    check_broadcast::<T, V>();
    check_negate::<T, V>();
    check_fma::<T, V>();
    check_fma_rounding::<T, V>();
    check_pure_multiply::<T, V>();
    check_lane_views::<T, V>();
}

fn check_layout<T: Element, V: SimdVector<T>>() {
    assert_eq!(std::mem::size_of::<V>(), V::WIDTH * std::mem::size_of::<T>());
    assert_eq!(std::mem::align_of::<V>(), V::ALIGN);

    let block = [V::default(); 5];
    for v in &block {
        assert_eq!(v as *const V as usize % V::ALIGN, 0);
    }
    assert_lanes(V::default(), |_| T::zero(), "default");
}

fn check_arithmetic<T: Element, V: SimdVector<T>>() {
    let v: V = sample(1.5, 0.75);
    let w: V = sample(-2.25, 1.25);

    assert_lanes(v + w, |i| v[i] + w[i], "v + w");
    assert_lanes(v - w, |i| v[i] - w[i], "v - w");
    assert_lanes(v * w, |i| v[i] * w[i], "v * w");
    assert_lanes(v / w, |i| v[i] / w[i], "v / w");

    // operands are values, never touched by the operator
    assert_lanes(v, |i| lit(1.5 + 0.75 * i as f64), "lhs after ops");
}

fn check_scalar_operands<T, V>()
where
    T: Element + Add<V, Output = V> + Sub<V, Output = V> + Mul<V, Output = V> + Div<V, Output = V>,
    V: SimdVector<T>,
{
    let v: V = sample(-3.5, 1.5);
    let s: T = lit(2.5);

    assert_lanes(v + s, |i| v[i] + s, "v + s");
    assert_lanes(v - s, |i| v[i] - s, "v - s");
    assert_lanes(v * s, |i| v[i] * s, "v * s");
    assert_lanes(v / s, |i| v[i] / s, "v / s");

    assert_lanes(s + v, |i| (v + s)[i], "s + v");
    assert_lanes(s * v, |i| (v * s)[i], "s * v");
    assert_lanes(s - v, |i| s - v[i], "s - v");
    assert_lanes(s / v, |i| s / v[i], "s / v");
}

fn check_compound_assignment<T: Element, V: SimdVector<T>>() {
    let v: V = sample(0.5, 2.0);
    let w: V = sample(7.0, -1.5);
    let s: T = lit(-0.25);

    let mut x = v;
    x += w;
    assert_lanes(x, |i| v[i] + w[i], "+= w");
    x = v;
    x -= w;
    assert_lanes(x, |i| v[i] - w[i], "-= w");
    x = v;
    x *= w;
    assert_lanes(x, |i| v[i] * w[i], "*= w");
    x = v;
    x /= w;
    assert_lanes(x, |i| v[i] / w[i], "/= w");

    x = v;
    x += s;
    assert_lanes(x, |i| v[i] + s, "+= s");
    x = v;
    x -= s;
    assert_lanes(x, |i| v[i] - s, "-= s");
    x = v;
    x *= s;
    assert_lanes(x, |i| v[i] * s, "*= s");
    x = v;
    x /= s;
    assert_lanes(x, |i| v[i] / s, "/= s");
}

fn check_broadcast<T: Element, V: SimdVector<T>>() {
    let s: T = lit(-6.125);
    assert_lanes(V::splat(s), |_| s, "splat");

    let mut v: V = sample(1.0, 1.0);
    v.set(s);
    assert_lanes(v, |_| s, "set");

    let mut copy = V::splat(T::one());
    assert_lanes(copy, |_| T::one(), "splat one");
    copy = v;
    assert_lanes(copy, |_| s, "copy assignment");
}

fn check_negate<T: Element, V: SimdVector<T>>() {
    let v: V = sample(-4.5, 1.75);
    let n = -v;
    assert_lanes(n, |i| -v[i], "-v");
    assert_lanes(n + v, |_| T::zero(), "-v + v");

    let zeros = -V::default();
    for i in 0..V::WIDTH {
        assert!(zeros[i].is_sign_negative(), "{} -0.0 lost its sign", V::BACKEND);
    }
}

fn check_fma<T: Element, V: SimdVector<T>>() {
    let acc: V = sample(-1.0, 0.5);
    let a: V = sample(1.0, T::epsilon().sqrt().to_f64().unwrap_or(0.0));
    let b: V = sample(1.0, -T::epsilon().sqrt().to_f64().unwrap_or(0.0));
    let e: T = lit(3.0);

    let mut v = acc;
    v.fma(a, b);
    assert_lanes(v, |i| fma_reference::<T, V>(acc[i], a[i], b[i]), "fma(a, b)");

    let mut v = acc;
    v.fma_scalar(a, e);
    assert_lanes(v, |i| fma_reference::<T, V>(acc[i], a[i], e), "fma(a, e)");

    let mut v = acc;
    v.scalar_fma(e, b);
    assert_lanes(v, |i| fma_reference::<T, V>(acc[i], e, b[i]), "fma(e, b)");
}

/// `(1 + h)(1 - h) = 1 - h²` rounds to 1 in `T`, so `-1 + (1 + h)(1 - h)` is
/// `-h²` with one rounding and exactly 0 with two
fn check_fma_rounding<T: Element, V: SimdVector<T>>() {
    let k = if std::mem::size_of::<T>() == 8 { 27 } else { 13 };
    let h: T = lit(2f64.powi(-k));
    let one = T::one();
    let (hi, lo) = (one + h, one - h);
    assert_ne!(hi * lo - one, -(h * h), "{} inputs must round", V::BACKEND);

    let expected = if V::FUSED { -(h * h) } else { T::zero() };

    let mut v = V::splat(-one);
    v.fma(V::splat(hi), V::splat(lo));
    assert_lanes(v, |_| expected, "fused rounding fma(a, b)");

    let mut v = V::splat(-one);
    v.fma_scalar(V::splat(hi), lo);
    assert_lanes(v, |_| expected, "fused rounding fma(a, e)");

    let mut v = V::splat(-one);
    v.scalar_fma(hi, V::splat(lo));
    assert_lanes(v, |_| expected, "fused rounding fma(e, b)");
}

fn check_pure_multiply<T: Element, V: SimdVector<T>>() {
    let a: V = sample(2.0, -0.5);
    let b: V = sample(-1.25, 3.0);
    let e: T = lit(0.125);

    let mut v = V::splat(T::nan());
    v.set_mul(a, b);
    assert_lanes(v, |i| a[i] * b[i], "mul(a, b)");

    let mut v = V::splat(T::infinity());
    v.set_mul_scalar(a, e);
    assert_lanes(v, |i| a[i] * e, "mul(a, e)");

    let mut v = V::splat(T::nan());
    v.set_scalar_mul(e, b);
    assert_lanes(v, |i| e * b[i], "mul(e, b)");
}

fn check_lane_views<T: Element, V: SimdVector<T>>() {
    let mut v = V::splat(T::one());
    v.lanes_mut()[V::WIDTH - 1] = lit(9.0);
    assert_eq!(v[V::WIDTH - 1], lit::<T>(9.0));
    assert_eq!(v.lanes().len(), V::WIDTH);

    let source: Vec<T> = (0..V::WIDTH + 3).map(|i| lit(i as f64 * 2.0)).collect();
    let loaded = V::from_slice(&source);
    let mut out = vec![T::zero(); V::WIDTH];
    loaded.write_to_slice(&mut out);
    assert_eq!(&out[..], &source[..V::WIDTH]);
}

/// `v = {3, 5, ...}`, `w = {2, 4, ...}` with the pair repeated across lanes
pub(crate) fn check_end_to_end<T, V>()
where
    T: Element + Sub<V, Output = V>,
    V: SimdVector<T>,
{
    let mut v = V::default();
    let mut w = V::default();
    for i in 0..V::WIDTH {
        v[i] = lit(if i % 2 == 0 { 3.0 } else { 5.0 });
        w[i] = lit(if i % 2 == 0 { 2.0 } else { 4.0 });
    }

    assert_lanes(v * w, |i| lit(if i % 2 == 0 { 6.0 } else { 20.0 }), "v * w");

    let mut acc = v;
    acc.fma(w, w);
    assert_lanes(acc, |i| lit(if i % 2 == 0 { 7.0 } else { 21.0 }), "v.fma(w, w)");

    let five: T = lit(5.0);
    assert_lanes(five - v, |i| lit(if i % 2 == 0 { 2.0 } else { 0.0 }), "5 - v");
}
