//! Four f32 lanes in a `float32x4_t`

use std::arch::aarch64::float32x4_t;

#[allow(unused_unsafe)]
mod native {
    use std::arch::aarch64::*;

    pub const FUSED: bool = true;

    #[inline(always)]
    pub fn splat(e: f32) -> float32x4_t {
        unsafe { vdupq_n_f32(e) }
    }

    #[inline(always)]
    pub fn add(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vaddq_f32(a, b) }
    }

    #[inline(always)]
    pub fn sub(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vsubq_f32(a, b) }
    }

    #[inline(always)]
    pub fn mul(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vmulq_f32(a, b) }
    }

    #[inline(always)]
    pub fn div(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vdivq_f32(a, b) }
    }

    #[inline(always)]
    pub fn neg(a: float32x4_t) -> float32x4_t {
        unsafe { vnegq_f32(a) }
    }

    #[inline(always)]
    pub fn fma(acc: float32x4_t, a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vfmaq_f32(acc, a, b) }
    }
}

register_vector! {
    /// Four f32 lanes, 16-byte aligned, backed by a NEON register
    vector: F32x4,
    storage: F32x4Storage,
    elem: f32,
    reg: float32x4_t,
    width: 4,
    align: 16,
    backend: "neon",
    native: native,
}
