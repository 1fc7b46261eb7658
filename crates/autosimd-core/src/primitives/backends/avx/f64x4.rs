//! Four f64 lanes in an `__m256d`

use std::arch::x86_64::__m256d;

#[allow(unused_unsafe)]
mod native {
    use std::arch::x86_64::*;

    pub const FUSED: bool = cfg!(target_feature = "fma");

    #[inline(always)]
    pub fn splat(e: f64) -> __m256d {
        unsafe { _mm256_set1_pd(e) }
    }

    #[inline(always)]
    pub fn add(a: __m256d, b: __m256d) -> __m256d {
        unsafe { _mm256_add_pd(a, b) }
    }

    #[inline(always)]
    pub fn sub(a: __m256d, b: __m256d) -> __m256d {
        unsafe { _mm256_sub_pd(a, b) }
    }

    #[inline(always)]
    pub fn mul(a: __m256d, b: __m256d) -> __m256d {
        unsafe { _mm256_mul_pd(a, b) }
    }

    #[inline(always)]
    pub fn div(a: __m256d, b: __m256d) -> __m256d {
        unsafe { _mm256_div_pd(a, b) }
    }

    #[inline(always)]
    pub fn neg(a: __m256d) -> __m256d {
        unsafe { _mm256_xor_pd(a, _mm256_set1_pd(-0.0)) }
    }

    #[cfg(target_feature = "fma")]
    #[inline(always)]
    pub fn fma(acc: __m256d, a: __m256d, b: __m256d) -> __m256d {
        unsafe { _mm256_fmadd_pd(a, b, acc) }
    }

    #[cfg(not(target_feature = "fma"))]
    #[inline(always)]
    pub fn fma(acc: __m256d, a: __m256d, b: __m256d) -> __m256d {
        unsafe { _mm256_add_pd(acc, _mm256_mul_pd(a, b)) }
    }
}

register_vector! {
    /// Four f64 lanes, 32-byte aligned, backed by an AVX register
    vector: F64x4,
    storage: F64x4Storage,
    elem: f64,
    reg: __m256d,
    width: 4,
    align: 32,
    backend: "avx",
    native: native,
}
