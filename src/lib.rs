//! Fixed-width short vectors with a uniform operator set
//!
//! This crate re-exports [`autosimd_core`]: the [`SimdVector`] contract, one
//! specialization per enabled instruction set, the width-1 [`Scalar`]
//! fallback and the [`AutoSimd`] / [`NativeSimd`] aliases that pick between
//! them at compile time.
//!
//! ```rust
//! use autosimd::prelude::*;
//!
//! let v = NativeSimd::<f32>::splat(1.5);
//! let w = 4.0 - v * 2.0;
//! assert!(w.lanes().iter().all(|&x| x == 1.0));
//! ```

pub use autosimd_core::*;
