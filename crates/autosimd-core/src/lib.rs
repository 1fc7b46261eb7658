//! Portable fixed-width SIMD vectors with compile-time specialization
//!
//! This crate provides one vector contract and a concrete implementation of
//! it for each instruction set the build enables, plus a scalar fallback that
//! works everywhere.

#![cfg_attr(all(feature = "nightly", feature = "avx512"), feature(stdarch_x86_avx512))]
//!
//! # Architecture Overview
//!
//! The library is organized into three layers:
//!
//! 1. **Contract** - [`SimdVector<T>`]: lanes, operators, fused multiply-add
//! 2. **Specializations** - `sse2`, `avx`, `avx512`, `neon`, `wasm` register
//!    types and the width-1 [`Scalar<T>`]
//! 3. **Selection** - [`AutoSimd<T, W>`] and [`NativeSimd<T>`] resolve to one
//!    specialization at compile time
//!
//! # Design Philosophy
//!
//! - **Zero-Cost Abstractions**: the backend is fixed by `cfg`, never by a
//!   runtime branch
//! - **Value Semantics**: vectors are `Copy`, operators take operands by value
//! - **No Hidden Allocations**: nothing in the vector types touches the heap
//!
//! # Example
//!
//! ```rust
//! use autosimd_core::{AutoSimd, NativeSimd, SimdVector};
//!
//! // Width 1 resolves to the scalar fallback on every target
//! let v = AutoSimd::<f64, 1>::splat(3.0);
//! assert_eq!((2.0 * v)[0], 6.0);
//!
//! // The widest vector the build enables
//! let mut acc = NativeSimd::<f64>::default();
//! acc.fma(NativeSimd::<f64>::splat(2.0), NativeSimd::<f64>::splat(4.0));
//! assert!(acc.lanes().iter().all(|&x| x == 8.0));
//! ```

pub mod error;
pub mod layout;
pub mod numeric;
pub mod primitives;
pub mod target;

// Re-export core types
pub use error::{Error, Result};

pub use numeric::Element;

pub use primitives::{
    backend_name, native_backend_name, AutoSimd, BackendInfo, NativeSimd, Scalar, SelectNative,
    SelectVector, SimdVector, NATIVE_F32_LANES, NATIVE_F64_LANES,
};

pub use layout::{as_lanes, as_lanes_mut, as_vectors, as_vectors_mut, is_aligned};
pub use target::{log_configuration, verify_cpu_support};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AutoSimd,
        Element,
        NativeSimd,
        Result,
        // Fallback is always available
        Scalar,
        SelectNative,
        SelectVector,
        SimdVector,
    };

    pub use crate::error::Error;
}
