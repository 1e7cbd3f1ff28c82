// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


//! # Slice Helpers
//!
//! Small generic operations over slices that may be absent. An absent slice
//! is `None`; a present slice with no elements is `Some(&[])`. The two are
//! handled differently where it matters:
//!
//! - [`slice_max`] / [`slice_min`] fail on both.
//! - [`slice_contains`] / [`slice_index`] report "not found".
//! - [`are_slices_equal`] never considers an absent slice equal to anything,
//!   not even another absent slice.
//! - [`slice_reverse`] maps absent to absent and empty to a fresh empty `Vec`.
//!
//! ```rust
//! use berry_core::slice::{slice_index, slice_max, slice_reverse};
//!
//! let data = [2, 4, 8, 64, 12];
//! assert_eq!(slice_max(Some(&data[..])), Ok(64));
//! assert_eq!(slice_index(Some(&data[..]), &8), 2);
//! assert_eq!(slice_reverse::<i32>(None), None);
//! ```

use crate::error::SliceError;

#[inline(always)]
fn extremum<T, F>(slice: Option<&[T]>, operation: &'static str, replaces: F) -> Result<T, SliceError>
where
    T: Copy,
    F: Fn(&T, &T) -> bool,
{
    let slice = slice.ok_or(SliceError::EmptyInput {
        operation,
        absent: true,
    })?;
    let (first, rest) = slice.split_first().ok_or(SliceError::EmptyInput {
        operation,
        absent: false,
    })?;

    Ok(rest.iter().fold(*first, |best, candidate| {
        if replaces(candidate, &best) {
            *candidate
        } else {
            best
        }
    }))
}

/// Finds the largest element. Ties keep the earliest occurrence, and
/// incomparable elements (such as `NaN`) never replace the current best.
///
/// # Errors
///
/// Returns [`SliceError::EmptyInput`] if the slice is absent or empty.
///
/// # Examples
///
/// ```rust
/// # use berry_core::slice::slice_max;
/// assert_eq!(slice_max(Some(&[2, 4, 8, 16, 32, 64, 54, 42, 12][..])), Ok(64));
/// assert!(slice_max::<i32>(Some(&[][..])).is_err());
/// assert!(slice_max::<i32>(None).is_err());
/// ```
#[inline]
pub fn slice_max<T>(slice: Option<&[T]>) -> Result<T, SliceError>
where
    T: PartialOrd + Copy,
{
    extremum(slice, "maximum", |candidate, best| candidate > best)
}

/// Finds the smallest element. Ties keep the earliest occurrence.
///
/// # Errors
///
/// Returns [`SliceError::EmptyInput`] if the slice is absent or empty.
#[inline]
pub fn slice_min<T>(slice: Option<&[T]>) -> Result<T, SliceError>
where
    T: PartialOrd + Copy,
{
    extremum(slice, "minimum", |candidate, best| candidate < best)
}

/// Returns `true` if any element equals `element`.
#[inline]
pub fn slice_contains<T>(slice: Option<&[T]>, element: &T) -> bool
where
    T: PartialEq,
{
    slice.is_some_and(|s| s.contains(element))
}

/// Returns the lowest index holding `element`, or `-1` if the slice is
/// absent, empty, or does not contain it.
#[inline]
pub fn slice_index<T>(slice: Option<&[T]>, element: &T) -> isize
where
    T: PartialEq,
{
    slice
        .and_then(|s| s.iter().position(|v| v == element))
        .map_or(-1, |i| i as isize)
}

/// Replaces every element, in index order, with `modifier(element)`.
/// Does nothing if the slice is absent.
///
/// # Examples
///
/// ```rust
/// # use berry_core::slice::slice_modify;
/// let mut data = vec![2, 4, 6, 8];
/// slice_modify(Some(&mut data[..]), |x| x * 2);
/// assert_eq!(data, [4, 8, 12, 16]);
/// ```
#[inline]
pub fn slice_modify<T, F>(slice: Option<&mut [T]>, mut modifier: F)
where
    F: FnMut(&T) -> T,
{
    if let Some(slice) = slice {
        for item in slice.iter_mut() {
            *item = modifier(item);
        }
    }
}

/// Returns `true` if both slices are present, have the same length, and
/// hold equal elements at every index.
#[inline]
pub fn are_slices_equal<T>(first: Option<&[T]>, second: Option<&[T]>) -> bool
where
    T: PartialEq,
{
    match (first, second) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Returns a new `Vec` holding the elements in reverse order, leaving the
/// input untouched. An absent slice yields `None`.
#[inline]
pub fn slice_reverse<T>(slice: Option<&[T]>) -> Option<Vec<T>>
where
    T: Clone,
{
    slice.map(|s| s.iter().rev().cloned().collect())
}
