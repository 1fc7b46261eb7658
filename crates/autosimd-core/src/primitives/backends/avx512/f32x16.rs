//! Sixteen f32 lanes in an `__m512`

use std::arch::x86_64::__m512;

#[allow(unused_unsafe)]
mod native {
    use std::arch::x86_64::*;

    pub const FUSED: bool = true;

    #[inline(always)]
    pub fn splat(e: f32) -> __m512 {
        unsafe { _mm512_set1_ps(e) }
    }

    #[inline(always)]
    pub fn add(a: __m512, b: __m512) -> __m512 {
        unsafe { _mm512_add_ps(a, b) }
    }

    #[inline(always)]
    pub fn sub(a: __m512, b: __m512) -> __m512 {
        unsafe { _mm512_sub_ps(a, b) }
    }

    #[inline(always)]
    pub fn mul(a: __m512, b: __m512) -> __m512 {
        unsafe { _mm512_mul_ps(a, b) }
    }

    #[inline(always)]
    pub fn div(a: __m512, b: __m512) -> __m512 {
        unsafe { _mm512_div_ps(a, b) }
    }

    #[inline(always)]
    pub fn neg(a: __m512) -> __m512 {
        unsafe {
            let sign = _mm512_set1_epi32(i32::MIN);
            _mm512_castsi512_ps(_mm512_xor_si512(_mm512_castps_si512(a), sign))
        }
    }

    #[inline(always)]
    pub fn fma(acc: __m512, a: __m512, b: __m512) -> __m512 {
        unsafe { _mm512_fmadd_ps(a, b, acc) }
    }
}

register_vector! {
    /// Sixteen f32 lanes, 64-byte aligned, backed by a ZMM register
    vector: F32x16,
    storage: F32x16Storage,
    elem: f32,
    reg: __m512,
    width: 16,
    align: 64,
    backend: "avx512",
    native: native,
}
