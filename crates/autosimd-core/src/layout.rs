//! Zero-copy views between lane slices and vector slices
//!
//! Low-level routines sometimes hold a block of lanes and want to walk it as
//! vectors, or the other way around. These functions reinterpret the memory
//! in place after checking the two preconditions the vector types impose: the
//! start must satisfy `ALIGN` and the length must be a whole number of
//! vectors. Nothing is copied.

use crate::error::{Error, Result};
use crate::numeric::Element;
use crate::primitives::SimdVector;
use bytemuck::PodCastError;

/// Whether `ptr` satisfies the alignment of `V`
#[inline]
pub fn is_aligned<T: Element, V: SimdVector<T>>(ptr: *const T) -> bool {
    (ptr as usize) % V::ALIGN == 0
}

fn check<T: Element, V: SimdVector<T>>(lanes: &[T]) -> Result<()> {
    if !is_aligned::<T, V>(lanes.as_ptr()) {
        return Err(Error::misaligned(lanes.as_ptr(), V::ALIGN));
    }
    if lanes.len() % V::WIDTH != 0 {
        return Err(Error::length_mismatch(lanes.len(), V::WIDTH));
    }
    Ok(())
}

fn cast_error<T: Element, V: SimdVector<T>>(err: PodCastError, ptr: *const T, len: usize) -> Error {
    match err {
        PodCastError::OutputSliceWouldHaveSlop => Error::length_mismatch(len, V::WIDTH),
        _ => Error::misaligned(ptr, V::ALIGN),
    }
}

/// View `lanes` as `lanes.len() / WIDTH` vectors
///
/// An empty slice is always accepted, whatever its address.
///
/// # Errors
/// - [`Error::Misaligned`] if the slice start is not a multiple of `V::ALIGN`
/// - [`Error::LengthMismatch`] if the length is not a multiple of `V::WIDTH`
pub fn as_vectors<T: Element, V: SimdVector<T>>(lanes: &[T]) -> Result<&[V]> {
    if lanes.is_empty() {
        return Ok(&[]);
    }
    check::<T, V>(lanes)?;
    bytemuck::try_cast_slice(lanes).map_err(|e| cast_error::<T, V>(e, lanes.as_ptr(), lanes.len()))
}

/// Mutable form of [`as_vectors`]
pub fn as_vectors_mut<T: Element, V: SimdVector<T>>(lanes: &mut [T]) -> Result<&mut [V]> {
    if lanes.is_empty() {
        return Ok(&mut []);
    }
    check::<T, V>(lanes)?;
    let (ptr, len) = (lanes.as_ptr(), lanes.len());
    bytemuck::try_cast_slice_mut(lanes).map_err(|e| cast_error::<T, V>(e, ptr, len))
}

/// View vectors as their lanes in order
#[inline]
pub fn as_lanes<T: Element, V: SimdVector<T>>(vectors: &[V]) -> &[T] {
    bytemuck::cast_slice(vectors)
}

/// Mutable form of [`as_lanes`]
#[inline]
pub fn as_lanes_mut<T: Element, V: SimdVector<T>>(vectors: &mut [V]) -> &mut [T] {
    bytemuck::cast_slice_mut(vectors)
}
