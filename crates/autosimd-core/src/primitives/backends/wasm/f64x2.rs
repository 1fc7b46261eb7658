//! Two f64 lanes in a `v128`

use std::arch::wasm32::v128;

#[allow(unused_unsafe)]
mod native {
    use std::arch::wasm32::*;

    pub const FUSED: bool = false;

    #[inline(always)]
    pub fn splat(e: f64) -> v128 {
        unsafe { f64x2_splat(e) }
    }

    #[inline(always)]
    pub fn add(a: v128, b: v128) -> v128 {
        unsafe { f64x2_add(a, b) }
    }

    #[inline(always)]
    pub fn sub(a: v128, b: v128) -> v128 {
        unsafe { f64x2_sub(a, b) }
    }

    #[inline(always)]
    pub fn mul(a: v128, b: v128) -> v128 {
        unsafe { f64x2_mul(a, b) }
    }

    #[inline(always)]
    pub fn div(a: v128, b: v128) -> v128 {
        unsafe { f64x2_div(a, b) }
    }

    #[inline(always)]
    pub fn neg(a: v128) -> v128 {
        unsafe { f64x2_neg(a) }
    }

    #[inline(always)]
    pub fn fma(acc: v128, a: v128, b: v128) -> v128 {
        unsafe { f64x2_add(acc, f64x2_mul(a, b)) }
    }
}

register_vector! {
    /// Two f64 lanes, 16-byte aligned, backed by a wasm `v128`
    vector: F64x2,
    storage: F64x2Storage,
    elem: f64,
    reg: v128,
    width: 2,
    align: 16,
    backend: "wasm-simd128",
    native: native,
}
