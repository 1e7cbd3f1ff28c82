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


//! # Berry Core
//!
//! Boilerplate-free helpers for code that handles loosely-typed values and
//! plain slices. The crate is three independent, stateless groups of pure
//! functions over a shared value model.
//!
//! ## Modules
//!
//! - `value`: The [`Value`](value::Value) tagged union (absent, bool, numbers
//!   of every primitive width, strings, sequences, mappings, opaque payloads)
//!   and its width-tagged [`Number`](value::Number).
//! - `predicate`: Structural classification (`is_number`, `is_slice`, `is_map`).
//! - `convert`: Coercion into `bool`, `String`, `u64`, `i64` and `f64` with
//!   caller-supplied defaults. Only malformed text is an error.
//! - `slice`: Extrema, membership, search, in-place transform, equality and
//!   reversal over slices that may be absent (`Option<&[T]>`).
//! - `error`: `ConvertError` and `SliceError`.
//!
//! ## Features
//!
//! - `json`: lift `serde_json::Value` documents into [`Value`](value::Value).
//!
//! No function in this crate panics, allocates shared state, or blocks.

pub mod convert;
pub mod error;
pub mod predicate;
pub mod slice;
pub mod value;
