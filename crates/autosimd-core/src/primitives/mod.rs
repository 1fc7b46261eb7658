//! Short vectors with compile-time backend selection
//!
//! This module provides the vector contract and its specializations.
//!
//! # Architecture
//!
//! - Single `SimdVector<T>` trait naming the full operator set
//! - Concrete vector types per instruction set: `sse2`, `avx`, `avx512`,
//!   `neon`, `wasm`, plus the always-available `Scalar<T>` fallback
//! - `AutoSimd<T, W>` resolves to the one specialization the build enables
//! - Zero-cost: every operator is one native instruction or a fixed short
//!   sequence, no heap allocation or dynamic dispatch
//!
//! # Usage
//!
//! ```rust
//! use autosimd_core::{NativeSimd, SimdVector};
//!
//! // Kernels name the contract, never a backend
//! fn axpy<V: SimdVector<f64>>(a: f64, x: &[V], y: &mut [V]) {
//!     for (yi, &xi) in y.iter_mut().zip(x) {
//!         yi.scalar_fma(a, xi);
//!     }
//! }
//!
//! let x = vec![NativeSimd::<f64>::splat(2.0); 4];
//! let mut y = vec![NativeSimd::<f64>::splat(1.0); 4];
//! axpy(0.5, &x, &mut y);
//! assert!(y.iter().all(|v| v.lanes().iter().all(|&l| l == 2.0)));
//! ```

pub mod backends;
pub mod traits;

#[cfg(test)]
pub(crate) mod conformance;

pub use backends::{
    backend_name, native_backend_name, AutoSimd, BackendInfo, NativeSimd, Scalar, SelectNative,
    SelectVector, NATIVE_F32_LANES, NATIVE_F64_LANES,
};
pub use traits::SimdVector;
