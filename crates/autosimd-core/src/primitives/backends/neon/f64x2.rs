//! Two f64 lanes in a `float64x2_t`

use std::arch::aarch64::float64x2_t;

#[allow(unused_unsafe)]
mod native {
    use std::arch::aarch64::*;

    pub const FUSED: bool = true;

    #[inline(always)]
    pub fn splat(e: f64) -> float64x2_t {
        unsafe { vdupq_n_f64(e) }
    }

    #[inline(always)]
    pub fn add(a: float64x2_t, b: float64x2_t) -> float64x2_t {
        unsafe { vaddq_f64(a, b) }
    }

    #[inline(always)]
    pub fn sub(a: float64x2_t, b: float64x2_t) -> float64x2_t {
        unsafe { vsubq_f64(a, b) }
    }

    #[inline(always)]
    pub fn mul(a: float64x2_t, b: float64x2_t) -> float64x2_t {
        unsafe { vmulq_f64(a, b) }
    }

    #[inline(always)]
    pub fn div(a: float64x2_t, b: float64x2_t) -> float64x2_t {
        unsafe { vdivq_f64(a, b) }
    }

    #[inline(always)]
    pub fn neg(a: float64x2_t) -> float64x2_t {
        unsafe { vnegq_f64(a) }
    }

    #[inline(always)]
    pub fn fma(acc: float64x2_t, a: float64x2_t, b: float64x2_t) -> float64x2_t {
        unsafe { vfmaq_f64(acc, a, b) }
    }
}

register_vector! {
    /// Two f64 lanes, 16-byte aligned, backed by a NEON register
    vector: F64x2,
    storage: F64x2Storage,
    elem: f64,
    reg: float64x2_t,
    width: 2,
    align: 16,
    backend: "neon",
    native: native,
}
