//! SSE2 specializations: 128-bit registers on x86 and x86_64
//!
//! SSE2 is baseline on x86_64, so these are the default 2 x f64 and 4 x f32
//! vectors there. SSE2 has no negate instruction and no fused multiply-add;
//! negation flips the sign bit with a xor, and `fma` uses FMA3 only when the
//! build enables the `fma` target feature.

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
