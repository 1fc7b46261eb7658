//! Eight f32 lanes in an `__m256`

use std::arch::x86_64::__m256;

#[allow(unused_unsafe)]
mod native {
    use std::arch::x86_64::*;

    pub const FUSED: bool = cfg!(target_feature = "fma");

    #[inline(always)]
    pub fn splat(e: f32) -> __m256 {
        unsafe { _mm256_set1_ps(e) }
    }

    #[inline(always)]
    pub fn add(a: __m256, b: __m256) -> __m256 {
        unsafe { _mm256_add_ps(a, b) }
    }

    #[inline(always)]
    pub fn sub(a: __m256, b: __m256) -> __m256 {
        unsafe { _mm256_sub_ps(a, b) }
    }

    #[inline(always)]
    pub fn mul(a: __m256, b: __m256) -> __m256 {
        unsafe { _mm256_mul_ps(a, b) }
    }

    #[inline(always)]
    pub fn div(a: __m256, b: __m256) -> __m256 {
        unsafe { _mm256_div_ps(a, b) }
    }

    #[inline(always)]
    pub fn neg(a: __m256) -> __m256 {
        unsafe { _mm256_xor_ps(a, _mm256_set1_ps(-0.0)) }
    }

    #[cfg(target_feature = "fma")]
    #[inline(always)]
    pub fn fma(acc: __m256, a: __m256, b: __m256) -> __m256 {
        unsafe { _mm256_fmadd_ps(a, b, acc) }
    }

    #[cfg(not(target_feature = "fma"))]
    #[inline(always)]
    pub fn fma(acc: __m256, a: __m256, b: __m256) -> __m256 {
        unsafe { _mm256_add_ps(acc, _mm256_mul_ps(a, b)) }
    }
}

register_vector! {
    /// Eight f32 lanes, 32-byte aligned, backed by an AVX register
    vector: F32x8,
    storage: F32x8Storage,
    elem: f32,
    reg: __m256,
    width: 8,
    align: 32,
    backend: "avx",
    native: native,
}
