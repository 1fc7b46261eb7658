//! NEON specializations: 128-bit registers on aarch64
//!
//! AArch64 NEON has every operation natively, including a true fused
//! multiply-add (`vfmaq`), a divide and a negate.

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
