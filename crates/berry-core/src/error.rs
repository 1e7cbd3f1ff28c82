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


//! # Errors
//!
//! The two failure taxonomies of the crate. Coercion fails only on text that
//! does not parse under the target literal grammar; slice helpers fail only
//! when an extremum is requested from a slice with no elements. Every other
//! "nothing to do" outcome is reported through sentinel return values.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Text input that could not be parsed as the requested numeric type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("cannot parse {input:?} as {target}: {source}")]
    InvalidInteger {
        input: String,
        target: &'static str,
        source: ParseIntError,
    },
    #[error("cannot parse {input:?} as f64: {source}")]
    InvalidFloat {
        input: String,
        source: ParseFloatError,
    },
}

impl ConvertError {
    /// The text that failed to parse.
    #[inline]
    pub fn input(&self) -> &str {
        match self {
            ConvertError::InvalidInteger { input, .. } | ConvertError::InvalidFloat { input, .. } => {
                input
            }
        }
    }
}

/// Failure of an extremum search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SliceError {
    /// The slice was absent (`absent == true`) or held zero elements.
    #[error("cannot find the {operation} of {} slice", describe_input(.absent))]
    EmptyInput {
        operation: &'static str,
        absent: bool,
    },
}

fn describe_input(absent: &bool) -> &'static str {
    if *absent {
        "an absent"
    } else {
        "an empty"
    }
}
