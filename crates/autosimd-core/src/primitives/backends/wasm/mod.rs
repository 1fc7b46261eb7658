//! WebAssembly SIMD specializations: 128-bit `v128` on wasm32
//!
//! Requires the `simd128` target feature. Both lane types share the untyped
//! `v128` register. wasm SIMD has native negate and divide but no fused
//! multiply-add in its deterministic instruction set, so `fma` is a multiply
//! followed by an add and `FUSED` is false.

mod f32x4;
mod f64x2;

pub use f32x4::F32x4;
pub use f64x2::F64x2;

use crate::primitives::SelectVector;

impl SelectVector<2> for f64 {
    type Vector = F64x2;
}

impl SelectVector<4> for f32 {
    type Vector = F32x4;
}
