//! Scalar fallback: one lane, plain arithmetic
//!
//! This specialization works for every lane type on every target without
//! using any SIMD instructions. It is what `AutoSimd<T, 1>` always resolves
//! to, so kernels written against the contract compile everywhere.
//!
//! `fma` here is a separate multiply and add (two roundings); only hardware
//! specializations with a native fused instruction round once.

use crate::numeric::Element;
use crate::primitives::{SelectVector, SimdVector};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Single-lane vector
#[derive(Clone, Copy, Debug, Default)]
#[repr(transparent)]
pub struct Scalar<T: Element>(pub T);

// Safety: transparent wrapper over a Pod lane type.
unsafe impl<T: Element> bytemuck::Zeroable for Scalar<T> {}
unsafe impl<T: Element> bytemuck::Pod for Scalar<T> {}

impl<T: Element> Scalar<T> {
    /// Vector holding `value` in its only lane
    #[inline(always)]
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// The single lane
    #[inline(always)]
    pub fn get(self) -> T {
        self.0
    }
}

impl<T: Element> From<T> for Scalar<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: Element> From<[T; 1]> for Scalar<T> {
    #[inline(always)]
    fn from(lanes: [T; 1]) -> Self {
        Self(lanes[0])
    }
}

impl<T: Element> Index<usize> for Scalar<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        &std::slice::from_ref(&self.0)[i]
    }
}

impl<T: Element> IndexMut<usize> for Scalar<T> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut std::slice::from_mut(&mut self.0)[i]
    }
}

impl<T: Element> Neg for Scalar<T> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

macro_rules! scalar_binop {
    ($op:ident, $f:ident, $op_assign:ident, $f_assign:ident, $sym:tt) => {
        impl<T: Element> $op for Scalar<T> {
            type Output = Self;

            #[inline(always)]
            fn $f(self, rhs: Self) -> Self {
                Self(self.0 $sym rhs.0)
            }
        }

        impl<T: Element> $op<T> for Scalar<T> {
            type Output = Self;

            #[inline(always)]
            fn $f(self, rhs: T) -> Self {
                Self(self.0 $sym rhs)
            }
        }

        impl<T: Element> $op_assign for Scalar<T> {
            #[inline(always)]
            fn $f_assign(&mut self, rhs: Self) {
                self.0 = self.0 $sym rhs.0;
            }
        }

        impl<T: Element> $op_assign<T> for Scalar<T> {
            #[inline(always)]
            fn $f_assign(&mut self, rhs: T) {
                self.0 = self.0 $sym rhs;
            }
        }

        impl $op<Scalar<f32>> for f32 {
            type Output = Scalar<f32>;

            #[inline(always)]
            fn $f(self, rhs: Scalar<f32>) -> Scalar<f32> {
                Scalar(self $sym rhs.0)
            }
        }

        impl $op<Scalar<f64>> for f64 {
            type Output = Scalar<f64>;

            #[inline(always)]
            fn $f(self, rhs: Scalar<f64>) -> Scalar<f64> {
                Scalar(self $sym rhs.0)
            }
        }
    };
}

scalar_binop!(Add, add, AddAssign, add_assign, +);
scalar_binop!(Sub, sub, SubAssign, sub_assign, -);
scalar_binop!(Mul, mul, MulAssign, mul_assign, *);
scalar_binop!(Div, div, DivAssign, div_assign, /);

impl<T: Element> SimdVector<T> for Scalar<T> {
    const WIDTH: usize = 1;
    const ALIGN: usize = std::mem::align_of::<T>();
    const FUSED: bool = false;
    const BACKEND: &'static str = "scalar";

    #[inline(always)]
    fn splat(value: T) -> Self {
        Self(value)
    }

    #[inline(always)]
    fn set(&mut self, value: T) -> &mut Self {
        self.0 = value;
        self
    }

    #[inline(always)]
    fn lanes(&self) -> &[T] {
        std::slice::from_ref(&self.0)
    }

    #[inline(always)]
    fn lanes_mut(&mut self) -> &mut [T] {
        std::slice::from_mut(&mut self.0)
    }

    #[inline(always)]
    fn fma(&mut self, a: Self, b: Self) -> &mut Self {
        self.0 = self.0 + a.0 * b.0;
        self
    }

    #[inline(always)]
    fn fma_scalar(&mut self, a: Self, e: T) -> &mut Self {
        self.0 = self.0 + a.0 * e;
        self
    }

    #[inline(always)]
    fn scalar_fma(&mut self, e: T, a: Self) -> &mut Self {
        self.0 = self.0 + e * a.0;
        self
    }

    #[inline(always)]
    fn set_mul(&mut self, a: Self, b: Self) -> &mut Self {
        self.0 = a.0 * b.0;
        self
    }

    #[inline(always)]
    fn set_mul_scalar(&mut self, a: Self, e: T) -> &mut Self {
        self.0 = a.0 * e;
        self
    }

    #[inline(always)]
    fn set_scalar_mul(&mut self, e: T, a: Self) -> &mut Self {
        self.0 = e * a.0;
        self
    }
}

impl SelectVector<1> for f64 {
    type Vector = Scalar<f64>;
}

impl SelectVector<1> for f32 {
    type Vector = Scalar<f32>;
}
