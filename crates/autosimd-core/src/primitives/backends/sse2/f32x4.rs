//! Four f32 lanes in an `__m128`

#[allow(unused_unsafe)]
mod native {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::*;
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::*;

    pub const FUSED: bool = cfg!(target_feature = "fma");

    #[inline(always)]
    pub fn splat(e: f32) -> __m128 {
        unsafe { _mm_set1_ps(e) }
    }

    #[inline(always)]
    pub fn add(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_add_ps(a, b) }
    }

    #[inline(always)]
    pub fn sub(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_sub_ps(a, b) }
    }

    #[inline(always)]
    pub fn mul(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_mul_ps(a, b) }
    }

    #[inline(always)]
    pub fn div(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_div_ps(a, b) }
    }

    /// Sign-bit flip; `0.0 - a` would turn `-0.0` into `+0.0`
    #[inline(always)]
    pub fn neg(a: __m128) -> __m128 {
        unsafe { _mm_xor_ps(a, _mm_set1_ps(-0.0)) }
    }

    #[cfg(target_feature = "fma")]
    #[inline(always)]
    pub fn fma(acc: __m128, a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_fmadd_ps(a, b, acc) }
    }

    #[cfg(not(target_feature = "fma"))]
    #[inline(always)]
    pub fn fma(acc: __m128, a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_add_ps(acc, _mm_mul_ps(a, b)) }
    }
}

#[cfg(target_arch = "x86")]
use std::arch::x86::__m128;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::__m128;

register_vector! {
    /// Four f32 lanes, 16-byte aligned, backed by an SSE2 register
    vector: F32x4,
    storage: F32x4Storage,
    elem: f32,
    reg: __m128,
    width: 4,
    align: 16,
    backend: "sse2",
    native: native,
}
