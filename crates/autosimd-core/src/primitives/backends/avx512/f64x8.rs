//! Eight f64 lanes in an `__m512d`

use std::arch::x86_64::__m512d;

#[allow(unused_unsafe)]
mod native {
    use std::arch::x86_64::*;

    pub const FUSED: bool = true;

    #[inline(always)]
    pub fn splat(e: f64) -> __m512d {
        unsafe { _mm512_set1_pd(e) }
    }

    #[inline(always)]
    pub fn add(a: __m512d, b: __m512d) -> __m512d {
        unsafe { _mm512_add_pd(a, b) }
    }

    #[inline(always)]
    pub fn sub(a: __m512d, b: __m512d) -> __m512d {
        unsafe { _mm512_sub_pd(a, b) }
    }

    #[inline(always)]
    pub fn mul(a: __m512d, b: __m512d) -> __m512d {
        unsafe { _mm512_mul_pd(a, b) }
    }

    #[inline(always)]
    pub fn div(a: __m512d, b: __m512d) -> __m512d {
        unsafe { _mm512_div_pd(a, b) }
    }

    #[inline(always)]
    pub fn neg(a: __m512d) -> __m512d {
        unsafe {
            let sign = _mm512_set1_epi64(i64::MIN);
            _mm512_castsi512_pd(_mm512_xor_si512(_mm512_castpd_si512(a), sign))
        }
    }

    #[inline(always)]
    pub fn fma(acc: __m512d, a: __m512d, b: __m512d) -> __m512d {
        unsafe { _mm512_fmadd_pd(a, b, acc) }
    }
}

register_vector! {
    /// Eight f64 lanes, 64-byte aligned (one cache line), backed by a ZMM register
    vector: F64x8,
    storage: F64x8Storage,
    elem: f64,
    reg: __m512d,
    width: 8,
    align: 64,
    backend: "avx512",
    native: native,
}
