//! Four f32 lanes in a `v128`

use std::arch::wasm32::v128;

#[allow(unused_unsafe)]
mod native {
    use std::arch::wasm32::*;

    pub const FUSED: bool = false;

    #[inline(always)]
    pub fn splat(e: f32) -> v128 {
        unsafe { f32x4_splat(e) }
    }

    #[inline(always)]
    pub fn add(a: v128, b: v128) -> v128 {
        unsafe { f32x4_add(a, b) }
    }

    #[inline(always)]
    pub fn sub(a: v128, b: v128) -> v128 {
        unsafe { f32x4_sub(a, b) }
    }

    #[inline(always)]
    pub fn mul(a: v128, b: v128) -> v128 {
        unsafe { f32x4_mul(a, b) }
    }

    #[inline(always)]
    pub fn div(a: v128, b: v128) -> v128 {
        unsafe { f32x4_div(a, b) }
    }

    #[inline(always)]
    pub fn neg(a: v128) -> v128 {
        unsafe { f32x4_neg(a) }
    }

    #[inline(always)]
    pub fn fma(acc: v128, a: v128, b: v128) -> v128 {
        unsafe { f32x4_add(acc, f32x4_mul(a, b)) }
    }
}

register_vector! {
    /// Four f32 lanes, 16-byte aligned, backed by a wasm `v128`
    vector: F32x4,
    storage: F32x4Storage,
    elem: f32,
    reg: v128,
    width: 4,
    align: 16,
    backend: "wasm-simd128",
    native: native,
}
