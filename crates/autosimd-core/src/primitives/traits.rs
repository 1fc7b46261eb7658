//! The vector contract
//!
//! Every specialization, hardware or scalar, implements [`SimdVector`]. Kernel
//! code that only names this trait (or the [`AutoSimd`](super::AutoSimd) alias)
//! is portable across every backend by construction.

use crate::numeric::Element;
use bytemuck::Pod;
use std::fmt::Debug;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Fixed-width vector of `WIDTH` lanes of `T`
///
/// Arithmetic is element-wise. Operators taking a `T` broadcast it to
/// every lane first. The scalar-on-the-left forms (`s + v`, `s - v`, ...) are
/// implemented on each concrete type since they cannot be expressed as
/// supertraits here.
///
/// Nothing in this trait can fail at runtime: lane indexing outside
/// `0..WIDTH` panics, everything else is a fixed sequence of instructions.
pub trait SimdVector<T: Element>:
    Copy
    + Default
    + Debug
    + Send
    + Sync
    + Pod
    + Index<usize, Output = T>
    + IndexMut<usize>
    + Add<Output = Self>
    + Add<T, Output = Self>
    + Sub<Output = Self>
    + Sub<T, Output = Self>
    + Mul<Output = Self>
    + Mul<T, Output = Self>
    + Div<Output = Self>
    + Div<T, Output = Self>
    + AddAssign
    + AddAssign<T>
    + SubAssign
    + SubAssign<T>
    + MulAssign
    + MulAssign<T>
    + DivAssign
    + DivAssign<T>
    + Neg<Output = Self>
{
    /// Number of lanes
    const WIDTH: usize;

    /// Required alignment of the storage in bytes
    const ALIGN: usize;

    /// Whether [`fma`](SimdVector::fma) rounds once (native fused instruction)
    const FUSED: bool;

    /// Name of the backend providing this specialization
    const BACKEND: &'static str;

    /// New vector with every lane set to `value`
    fn splat(value: T) -> Self;

    /// Broadcast assignment: every lane becomes `value`
    fn set(&mut self, value: T) -> &mut Self;

    /// Lanes as a slice, aliasing the register storage
    fn lanes(&self) -> &[T];

    /// Mutable lanes, aliasing the register storage
    fn lanes_mut(&mut self) -> &mut [T];

    /// `self = self + a * b`
    fn fma(&mut self, a: Self, b: Self) -> &mut Self;

    /// `self = self + a * e`
    fn fma_scalar(&mut self, a: Self, e: T) -> &mut Self;

    /// `self = self + e * a`
    fn scalar_fma(&mut self, e: T, a: Self) -> &mut Self;

    /// `self = a * b`, discarding the previous contents
    fn set_mul(&mut self, a: Self, b: Self) -> &mut Self;

    /// `self = a * e`, discarding the previous contents
    fn set_mul_scalar(&mut self, a: Self, e: T) -> &mut Self;

    /// `self = e * a`, discarding the previous contents
    fn set_scalar_mul(&mut self, e: T, a: Self) -> &mut Self;

    /// Build a vector from the first `WIDTH` values of `lanes`
    ///
    /// # Panics
    /// If `lanes` is shorter than `WIDTH`
    fn from_slice(lanes: &[T]) -> Self {
        let mut v = Self::default();
        v.lanes_mut().copy_from_slice(&lanes[..Self::WIDTH]);
        v
    }

    /// Copy the lanes out into `out[..WIDTH]`
    ///
    /// # Panics
    /// If `out` is shorter than `WIDTH`
    fn write_to_slice(&self, out: &mut [T]) {
        out[..Self::WIDTH].copy_from_slice(self.lanes());
    }
}
