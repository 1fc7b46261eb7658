//! Two f64 lanes in an `__m128d`

#[allow(unused_unsafe)]
mod native {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::*;
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::*;

    pub const FUSED: bool = cfg!(target_feature = "fma");

    #[inline(always)]
    pub fn splat(e: f64) -> __m128d {
        unsafe { _mm_set1_pd(e) }
    }

    #[inline(always)]
    pub fn add(a: __m128d, b: __m128d) -> __m128d {
        unsafe { _mm_add_pd(a, b) }
    }

    #[inline(always)]
    pub fn sub(a: __m128d, b: __m128d) -> __m128d {
        unsafe { _mm_sub_pd(a, b) }
    }

    #[inline(always)]
    pub fn mul(a: __m128d, b: __m128d) -> __m128d {
        unsafe { _mm_mul_pd(a, b) }
    }

    #[inline(always)]
    pub fn div(a: __m128d, b: __m128d) -> __m128d {
        unsafe { _mm_div_pd(a, b) }
    }

    /// Sign-bit flip; `0.0 - a` would turn `-0.0` into `+0.0`
    #[inline(always)]
    pub fn neg(a: __m128d) -> __m128d {
        unsafe { _mm_xor_pd(a, _mm_set1_pd(-0.0)) }
    }

    #[cfg(target_feature = "fma")]
    #[inline(always)]
    pub fn fma(acc: __m128d, a: __m128d, b: __m128d) -> __m128d {
        unsafe { _mm_fmadd_pd(a, b, acc) }
    }

    #[cfg(not(target_feature = "fma"))]
    #[inline(always)]
    pub fn fma(acc: __m128d, a: __m128d, b: __m128d) -> __m128d {
        unsafe { _mm_add_pd(acc, _mm_mul_pd(a, b)) }
    }
}

#[cfg(target_arch = "x86")]
use std::arch::x86::__m128d;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::__m128d;

register_vector! {
    /// Two f64 lanes, 16-byte aligned, backed by an SSE2 register
    vector: F64x2,
    storage: F64x2Storage,
    elem: f64,
    reg: __m128d,
    width: 2,
    align: 16,
    backend: "sse2",
    native: native,
}
