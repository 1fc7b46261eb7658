//! AVX specializations: 256-bit registers on x86_64
//!
//! Compiled when the build enables the `avx` target feature (for example
//! `-C target-cpu=native` on any Sandy Bridge or newer part). Like SSE2 there
//! is no negate instruction; `fma` is fused only when `fma` is enabled too,
//! which every AVX2 CPU provides.

mod f32x8;
mod f64x4;

pub use f32x8::F32x8;
pub use f64x4::F64x4;

use crate::primitives::SelectVector;

impl SelectVector<4> for f64 {
    type Vector = F64x4;
}

impl SelectVector<8> for f32 {
    type Vector = F32x8;
}
