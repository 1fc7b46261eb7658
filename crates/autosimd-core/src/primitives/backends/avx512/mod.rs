//! AVX-512 specializations: 512-bit registers on x86_64
//!
//! Opt-in through the `avx512` cargo feature on top of the `avx512f` target
//! feature. AVX-512F always has fused multiply-add, so `fma` rounds once.
//! There is no floating-point xor in AVX-512F (that needs DQ), so negation
//! flips the sign bit through the integer domain.

mod f32x16;
mod f64x8;

pub use f32x16::F32x16;
pub use f64x8::F64x8;

use crate::primitives::SelectVector;

impl SelectVector<8> for f64 {
    type Vector = F64x8;
}

impl SelectVector<16> for f32 {
    type Vector = F32x16;
}
