//! Backend specializations and compile-time selection
//!
//! Every backend is a set of concrete vector types. A backend module only
//! exists when the build enables its instruction set, so for any element type
//! and width at most one [`SelectVector`] impl is ever visible. No Box, no
//! dyn, no runtime branching between backends.
//!
//! PowerPC has no specialization: `core::arch::powerpc64` offers no stable
//! VSX double-precision arithmetic, so VSX targets select [`Scalar`] for
//! every element type like any other target without a backend here.

#[macro_use]
mod macros;

pub mod scalar;

#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2",
    not(feature = "scalar-only")
))]
pub mod sse2;

#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx",
    not(feature = "scalar-only")
))]
pub mod avx;

#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    feature = "avx512",
    not(feature = "scalar-only")
))]
pub mod avx512;

#[cfg(all(
    target_arch = "aarch64",
    target_feature = "neon",
    not(feature = "scalar-only")
))]
pub mod neon;

#[cfg(all(
    target_arch = "wasm32",
    target_feature = "simd128",
    not(feature = "scalar-only")
))]
pub mod wasm;

pub use scalar::Scalar;

use super::SimdVector;
use crate::numeric::Element;

/// Type-level selection of the specialization for `W` lanes of `Self`
///
/// Implemented by the backend modules themselves, so a width with no
/// specialization on the current target simply has no impl and using it is
/// a compile error.
pub trait SelectVector<const W: usize>: Element {
    /// The vector type for this element type and width
    type Vector: SimdVector<Self>;
}

/// The vector of `W` lanes of `T` for the build target
///
/// ```rust
/// use autosimd_core::{AutoSimd, SimdVector};
///
/// let mut acc = AutoSimd::<f64, 1>::splat(1.0);
/// acc.fma(AutoSimd::<f64, 1>::splat(2.0), AutoSimd::<f64, 1>::splat(3.0));
/// assert_eq!(acc[0], 7.0);
/// ```
pub type AutoSimd<T, const W: usize> = <T as SelectVector<W>>::Vector;

/// Widest specialization enabled for `Self` on the build target
pub trait SelectNative: Element {
    /// Widest vector type for this element type
    type Vector: SimdVector<Self>;
}

/// The widest vector of `T` for the build target, `Scalar<T>` if none
pub type NativeSimd<T> = <T as SelectNative>::Vector;

/// Lane count of [`NativeSimd<f64>`]
pub const NATIVE_F64_LANES: usize = <NativeSimd<f64> as SimdVector<f64>>::WIDTH;

/// Lane count of [`NativeSimd<f32>`]
pub const NATIVE_F32_LANES: usize = <NativeSimd<f32> as SimdVector<f32>>::WIDTH;

impl SelectNative for f64 {
    type Vector = widest::F64;
}

impl SelectNative for f32 {
    type Vector = widest::F32;
}

/// Resolution of the widest enabled backend, most capable first
mod widest {
    #[cfg(all(
        target_arch = "x86_64",
        target_feature = "avx512f",
        feature = "avx512",
        not(feature = "scalar-only")
    ))]
    pub use super::avx512::{F32x16 as F32, F64x8 as F64};

    #[cfg(all(
        target_arch = "x86_64",
        target_feature = "avx",
        not(all(target_feature = "avx512f", feature = "avx512")),
        not(feature = "scalar-only")
    ))]
    pub use super::avx::{F32x8 as F32, F64x4 as F64};

    #[cfg(all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2",
        not(all(target_arch = "x86_64", target_feature = "avx")),
        not(feature = "scalar-only")
    ))]
    pub use super::sse2::{F32x4 as F32, F64x2 as F64};

    #[cfg(all(
        target_arch = "aarch64",
        target_feature = "neon",
        not(feature = "scalar-only")
    ))]
    pub use super::neon::{F32x4 as F32, F64x2 as F64};

    #[cfg(all(
        target_arch = "wasm32",
        target_feature = "simd128",
        not(feature = "scalar-only")
    ))]
    pub use super::wasm::{F32x4 as F32, F64x2 as F64};

    #[cfg(any(
        feature = "scalar-only",
        not(any(
            all(
                any(target_arch = "x86", target_arch = "x86_64"),
                target_feature = "sse2"
            ),
            all(target_arch = "aarch64", target_feature = "neon"),
            all(target_arch = "wasm32", target_feature = "simd128")
        ))
    ))]
    pub type F64 = super::Scalar<f64>;

    #[cfg(any(
        feature = "scalar-only",
        not(any(
            all(
                any(target_arch = "x86", target_arch = "x86_64"),
                target_feature = "sse2"
            ),
            all(target_arch = "aarch64", target_feature = "neon"),
            all(target_arch = "wasm32", target_feature = "simd128")
        ))
    ))]
    pub type F32 = super::Scalar<f32>;
}

/// Backend name of the `W`-lane specialization of `T`
pub fn backend_name<T: SelectVector<W>, const W: usize>() -> &'static str {
    <AutoSimd<T, W> as SimdVector<T>>::BACKEND
}

/// Backend name of the widest specialization of `T`
pub fn native_backend_name<T: SelectNative>() -> &'static str {
    <NativeSimd<T> as SimdVector<T>>::BACKEND
}

/// Compile-time facts about one selected specialization
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackendInfo {
    pub element: &'static str,
    pub backend: &'static str,
    pub width: usize,
    pub align: usize,
    pub fused: bool,
}

impl BackendInfo {
    /// Describe the vector type `V` holding `T`
    pub fn of<T: Element, V: SimdVector<T>>() -> Self {
        Self {
            element: T::NAME,
            backend: V::BACKEND,
            width: V::WIDTH,
            align: V::ALIGN,
            fused: V::FUSED,
        }
    }

    /// Describe the widest specialization of `T`
    pub fn native<T: SelectNative>() -> Self {
        Self::of::<T, NativeSimd<T>>()
    }
}
