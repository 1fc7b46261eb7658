//! Lane element types
//!
//! This module provides the type foundation for the vector contract: the set of
//! scalar types a vector lane may hold, without imposing any computational
//! infrastructure.
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: defines what a lane type must support
//! - **No computational layer**: all vector computation happens in the backends
//! - **Type safety**: vectors never mix or convert lane types

use bytemuck::Pod;
use num_traits::Float;
use std::fmt::Debug;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Base trait for scalar types that can occupy a vector lane
///
/// Implemented for `f32` and `f64`. `Pod` is what allows slices of lanes to be
/// reinterpreted as slices of vectors and back.
pub trait Element:
    Pod
    + Float
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Default
    + Debug
    + Send
    + Sync
    + 'static
{
    /// Short name used in backend reports
    const NAME: &'static str;
}

impl Element for f32 {
    const NAME: &'static str = "f32";
}

impl Element for f64 {
    const NAME: &'static str = "f64";
}
