//! Operator surface shared by every register-backed specialization
//!
//! A backend supplies a `native` module holding its intrinsics behind a fixed
//! set of names (`splat`, `add`, `sub`, `mul`, `div`, `neg`, `fma`, `FUSED`)
//! and invokes [`register_vector!`] once per vector type. The macro declares
//! the storage union and implements indexing, conversions, every operator
//! form and [`SimdVector`](crate::primitives::SimdVector) on top of those
//! names, so each specialization differs only in which instructions it picks.

#[allow(unused_macros)]
macro_rules! register_vector {
    (
        $(#[$meta:meta])*
        vector: $vec:ident,
        storage: $storage:ident,
        elem: $elem:ty,
        reg: $reg:ty,
        width: $width:literal,
        align: $align:literal,
        backend: $backend:literal,
        native: $native:ident $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        #[repr(C, align($align))]
        pub struct $vec {
            storage: $storage,
        }

        /// Native register and lane array over the same bytes
        #[derive(Clone, Copy)]
        #[repr(C)]
        union $storage {
            reg: $reg,
            lanes: [$elem; $width],
        }

        const _: () = assert!(
            ::std::mem::size_of::<$vec>() == $width * ::std::mem::size_of::<$elem>()
        );
        const _: () = assert!(::std::mem::align_of::<$vec>() == $align);
        const _: () = assert!(::std::mem::size_of::<$reg>() == ::std::mem::size_of::<$vec>());

        // Safety: no padding (asserted above) and every bit pattern of the
        // register or the lane array is a valid value of both.
        unsafe impl ::bytemuck::Zeroable for $vec {}
        unsafe impl ::bytemuck::Pod for $vec {}

        impl $vec {
            /// Vector holding `lanes` in order
            #[inline(always)]
            pub const fn from_array(lanes: [$elem; $width]) -> Self {
                Self {
                    storage: $storage { lanes },
                }
            }

            /// Copy of the lanes in order
            #[inline(always)]
            pub fn to_array(self) -> [$elem; $width] {
                // Safety: both union views are plain data of identical size.
                unsafe { self.storage.lanes }
            }

            #[inline(always)]
            fn reg(self) -> $reg {
                // Safety: both union views are plain data of identical size.
                unsafe { self.storage.reg }
            }

            #[inline(always)]
            fn from_reg(reg: $reg) -> Self {
                Self {
                    storage: $storage { reg },
                }
            }
        }

        impl Default for $vec {
            #[inline(always)]
            fn default() -> Self {
                Self::from_array([0.0; $width])
            }
        }

        impl ::std::fmt::Debug for $vec {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_tuple(stringify!($vec)).field(&self.to_array()).finish()
            }
        }

        impl From<[$elem; $width]> for $vec {
            #[inline(always)]
            fn from(lanes: [$elem; $width]) -> Self {
                Self::from_array(lanes)
            }
        }

        impl From<$vec> for [$elem; $width] {
            #[inline(always)]
            fn from(v: $vec) -> Self {
                v.to_array()
            }
        }

        impl ::std::ops::Index<usize> for $vec {
            type Output = $elem;

            #[inline(always)]
            fn index(&self, i: usize) -> &$elem {
                // Safety: see `to_array`.
                unsafe { &self.storage.lanes[i] }
            }
        }

        impl ::std::ops::IndexMut<usize> for $vec {
            #[inline(always)]
            fn index_mut(&mut self, i: usize) -> &mut $elem {
                // Safety: see `to_array`.
                unsafe { &mut self.storage.lanes[i] }
            }
        }

        impl ::std::ops::Neg for $vec {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self::from_reg($native::neg(self.reg()))
            }
        }

        register_vector!(@binop $vec, $elem, $native, Add, add, AddAssign, add_assign);
        register_vector!(@binop $vec, $elem, $native, Sub, sub, SubAssign, sub_assign);
        register_vector!(@binop $vec, $elem, $native, Mul, mul, MulAssign, mul_assign);
        register_vector!(@binop $vec, $elem, $native, Div, div, DivAssign, div_assign);

        impl $crate::primitives::SimdVector<$elem> for $vec {
            const WIDTH: usize = $width;
            const ALIGN: usize = $align;
            const FUSED: bool = $native::FUSED;
            const BACKEND: &'static str = $backend;

            #[inline(always)]
            fn splat(value: $elem) -> Self {
                Self::from_reg($native::splat(value))
            }

            #[inline(always)]
            fn set(&mut self, value: $elem) -> &mut Self {
                *self = Self::from_reg($native::splat(value));
                self
            }

            #[inline(always)]
            fn lanes(&self) -> &[$elem] {
                // Safety: see `to_array`.
                unsafe { &self.storage.lanes }
            }

            #[inline(always)]
            fn lanes_mut(&mut self) -> &mut [$elem] {
                // Safety: see `to_array`.
                unsafe { &mut self.storage.lanes }
            }

            #[inline(always)]
            fn fma(&mut self, a: Self, b: Self) -> &mut Self {
                *self = Self::from_reg($native::fma(self.reg(), a.reg(), b.reg()));
                self
            }

            #[inline(always)]
            fn fma_scalar(&mut self, a: Self, e: $elem) -> &mut Self {
                *self = Self::from_reg($native::fma(self.reg(), a.reg(), $native::splat(e)));
                self
            }

            #[inline(always)]
            fn scalar_fma(&mut self, e: $elem, a: Self) -> &mut Self {
                *self = Self::from_reg($native::fma(self.reg(), $native::splat(e), a.reg()));
                self
            }

            #[inline(always)]
            fn set_mul(&mut self, a: Self, b: Self) -> &mut Self {
                *self = Self::from_reg($native::mul(a.reg(), b.reg()));
                self
            }

            #[inline(always)]
            fn set_mul_scalar(&mut self, a: Self, e: $elem) -> &mut Self {
                *self = Self::from_reg($native::mul(a.reg(), $native::splat(e)));
                self
            }

            #[inline(always)]
            fn set_scalar_mul(&mut self, e: $elem, a: Self) -> &mut Self {
                *self = Self::from_reg($native::mul($native::splat(e), a.reg()));
                self
            }
        }
    };

    (@binop $vec:ident, $elem:ty, $native:ident, $op:ident, $f:ident, $op_assign:ident, $f_assign:ident) => {
        impl ::std::ops::$op for $vec {
            type Output = Self;

            #[inline(always)]
            fn $f(self, rhs: Self) -> Self {
                Self::from_reg($native::$f(self.reg(), rhs.reg()))
            }
        }

        impl ::std::ops::$op<$elem> for $vec {
            type Output = Self;

            #[inline(always)]
            fn $f(self, rhs: $elem) -> Self {
                Self::from_reg($native::$f(self.reg(), $native::splat(rhs)))
            }
        }

        impl ::std::ops::$op<$vec> for $elem {
            type Output = $vec;

            #[inline(always)]
            fn $f(self, rhs: $vec) -> $vec {
                $vec::from_reg($native::$f($native::splat(self), rhs.reg()))
            }
        }

        impl ::std::ops::$op_assign for $vec {
            #[inline(always)]
            fn $f_assign(&mut self, rhs: Self) {
                *self = Self::from_reg($native::$f(self.reg(), rhs.reg()));
            }
        }

        impl ::std::ops::$op_assign<$elem> for $vec {
            #[inline(always)]
            fn $f_assign(&mut self, rhs: $elem) {
                *self = Self::from_reg($native::$f(self.reg(), $native::splat(rhs)));
            }
        }
    };
}
