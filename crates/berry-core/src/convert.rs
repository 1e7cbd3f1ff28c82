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


//! # Value Coercion
//!
//! Best-effort conversion of a [`Value`] into a primitive target.
//!
//! The policy is deliberately asymmetric:
//!
//! - Absent input yields the caller's default (or `false` / `""`).
//! - Numbers of any width convert with primitive `as` semantics: floats
//!   truncate toward zero, integers wrap. No range check is performed.
//! - Text is parsed with the target type's own literal grammar, and this is
//!   the only path that can fail. `to_u64("32.2")` is an error, not `32`.
//! - Any other shape (sequence, mapping, opaque, or `bool` for numeric
//!   targets) silently yields the default. This fallback is inherited
//!   behavior; callers that need to reject such input should check the
//!   shape with [`crate::predicate`] first.
//!
//! ```rust
//! use berry_core::convert::{to_f64, to_i64, to_u64};
//! use berry_core::value::Value;
//!
//! assert_eq!(to_i64(&Value::from(32.8_f64), 0), Ok(32));
//! assert_eq!(to_u64(&Value::Absent, 7), Ok(7));
//! assert!(to_u64(&Value::from("32.2"), 0).is_err());
//! assert_eq!(to_f64(&Value::from("32.5"), 0.0), Ok(32.5));
//! ```

use crate::error::ConvertError;
use crate::value::{Number, Value};
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

/// A primitive type that values can be coerced into.
trait CoercionTarget: Sized + FromStr {
    fn from_number(number: &Number) -> Self;
    fn parse_error(input: &str, error: <Self as FromStr>::Err) -> ConvertError;
}

macro_rules! impl_integer_target_for {
    ($t:ty, $as_fn:ident) => {
        impl CoercionTarget for $t {
            #[inline]
            fn from_number(number: &Number) -> Self {
                number.$as_fn()
            }

            #[inline]
            fn parse_error(input: &str, error: ParseIntError) -> ConvertError {
                ConvertError::InvalidInteger {
                    input: input.to_owned(),
                    target: stringify!($t),
                    source: error,
                }
            }
        }
    };
}

impl_integer_target_for!(u64, as_u64);
impl_integer_target_for!(i64, as_i64);

impl CoercionTarget for f64 {
    #[inline]
    fn from_number(number: &Number) -> Self {
        number.as_f64()
    }

    #[inline]
    fn parse_error(input: &str, error: ParseFloatError) -> ConvertError {
        ConvertError::InvalidFloat {
            input: input.to_owned(),
            source: error,
        }
    }
}

fn coerce<T>(value: &Value, default: T) -> Result<T, ConvertError>
where
    T: CoercionTarget,
{
    match value {
        Value::Absent => Ok(default),
        Value::Number(n) => Ok(T::from_number(n)),
        Value::String(text) => text.parse::<T>().map_err(|e| {
            let err = T::parse_error(text, e);
            tracing::debug!(error = %err, "text coercion failed");
            err
        }),
        Value::Bool(_) | Value::Sequence(_) | Value::Mapping(_) | Value::Other(_) => {
            tracing::trace!(
                kind = %value.kind(),
                to = std::any::type_name::<T>(),
                "unsupported shape, using default"
            );
            Ok(default)
        }
    }
}

/// Coerces `value` to a boolean.
///
/// Numbers are `true` when non-zero. Text is trimmed and matched
/// case-insensitively against `1`, `true` and `t`; anything else, including
/// the empty string, is `false`. Absent input and unrecognized shapes are
/// `false`. This function never returns `Err`; the `Result` keeps it
/// uniform with the numeric coercions.
///
/// # Examples
///
/// ```rust
/// # use berry_core::convert::to_bool;
/// # use berry_core::value::Value;
/// assert_eq!(to_bool(&Value::from(" TRue ")), Ok(true));
/// assert_eq!(to_bool(&Value::from(0.0_f32)), Ok(false));
/// assert_eq!(to_bool(&Value::Absent), Ok(false));
/// ```
pub fn to_bool(value: &Value) -> Result<bool, ConvertError> {
    let converted = match value {
        Value::Absent => false,
        Value::Bool(b) => *b,
        Value::Number(n) => !n.is_zero(),
        Value::String(text) => is_truthy_text(text),
        Value::Sequence(_) | Value::Mapping(_) | Value::Other(_) => {
            tracing::trace!(kind = %value.kind(), "unsupported shape, coercing to false");
            false
        }
    };
    Ok(converted)
}

fn is_truthy_text(text: &str) -> bool {
    let text = text.trim();
    text == "1" || text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("t")
}

/// Renders `value` with its [`Display`](std::fmt::Display) form. Absent
/// input renders as the empty string.
#[inline]
pub fn to_string(value: &Value) -> String {
    match value {
        Value::Absent => String::new(),
        other => other.to_string(),
    }
}

/// Coerces `value` to `u64`, falling back to `default` for absent input or
/// unsupported shapes.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidInteger`] if `value` is text that is not
/// an unsigned base-10 integer literal.
#[inline]
pub fn to_u64(value: &Value, default: u64) -> Result<u64, ConvertError> {
    coerce(value, default)
}

/// Coerces `value` to `i64`, falling back to `default` for absent input or
/// unsupported shapes.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidInteger`] if `value` is text that is not
/// a signed base-10 integer literal.
#[inline]
pub fn to_i64(value: &Value, default: i64) -> Result<i64, ConvertError> {
    coerce(value, default)
}

/// Coerces `value` to `f64`, falling back to `default` for absent input or
/// unsupported shapes.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidFloat`] if `value` is text that is not a
/// floating-point literal.
#[inline]
pub fn to_f64(value: &Value, default: f64) -> Result<f64, ConvertError> {
    coerce(value, default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn every_width(n: u8) -> Vec<Value> {
        vec![
            Value::from(n as i8),
            Value::from(n as i16),
            Value::from(n as i32),
            Value::from(n as i64),
            Value::from(n as isize),
            Value::from(n),
            Value::from(n as u16),
            Value::from(n as u32),
            Value::from(n as u64),
            Value::from(n as usize),
            Value::from(n as f32),
            Value::from(n as f64),
        ]
    }

    fn unsupported() -> Value {
        Value::opaque(String::from("builder"))
    }

    #[test]
    fn test_to_bool_numbers() {
        for v in every_width(2) {
            assert_eq!(to_bool(&v), Ok(true), "{:?}", v);
        }
        for v in every_width(0) {
            assert_eq!(to_bool(&v), Ok(false), "{:?}", v);
        }
    }

    #[test]
    fn test_to_bool_text() {
        assert_eq!(to_bool(&Value::from("true")), Ok(true));
        assert_eq!(to_bool(&Value::from("TRUE")), Ok(true));
        assert_eq!(to_bool(&Value::from("TRue")), Ok(true));
        assert_eq!(to_bool(&Value::from("  t\n")), Ok(true));
        assert_eq!(to_bool(&Value::from("1")), Ok(true));
        assert_eq!(to_bool(&Value::from("")), Ok(false));
        assert_eq!(to_bool(&Value::from("yes")), Ok(false));
        assert_eq!(to_bool(&Value::from("0")), Ok(false));
    }

    #[test]
    fn test_to_bool_passthrough_and_fallback() {
        assert_eq!(to_bool(&Value::from(true)), Ok(true));
        assert_eq!(to_bool(&Value::from(false)), Ok(false));
        assert_eq!(to_bool(&Value::Absent), Ok(false));
        assert_eq!(to_bool(&unsupported()), Ok(false));
        assert_eq!(to_bool(&Value::from(vec![1])), Ok(false));
    }

    #[test]
    fn test_to_string() {
        assert_eq!(to_string(&Value::from(2)), "2");
        assert_eq!(to_string(&Value::Absent), "");
        assert_eq!(to_string(&Value::from("abc")), "abc");
        assert_eq!(to_string(&Value::from(vec!["a", "b"])), "[a b]");
    }

    #[test]
    fn test_to_u64() {
        for v in every_width(32) {
            assert_eq!(to_u64(&v, 0), Ok(32), "{:?}", v);
        }
        assert_eq!(to_u64(&Value::from(32.2_f32), 0), Ok(32));
        assert_eq!(to_u64(&Value::from(32.8_f32), 0), Ok(32));
        assert_eq!(to_u64(&Value::from(32.2_f64), 0), Ok(32));
        assert_eq!(to_u64(&Value::from(32.8_f64), 0), Ok(32));
        assert_eq!(to_u64(&Value::from("32"), 0), Ok(32));
        assert_eq!(to_u64(&unsupported(), 0), Ok(0));
        assert_eq!(to_u64(&Value::Absent, 9), Ok(9));
        assert_eq!(to_u64(&Value::from(true), 5), Ok(5));
    }

    #[test]
    fn test_to_u64_rejects_fractional_text() {
        for text in ["32.2", "32.8", "-1", "abc", ""] {
            let err = to_u64(&Value::from(text), 0).unwrap_err();
            assert!(matches!(err, ConvertError::InvalidInteger { target: "u64", .. }));
            assert_eq!(err.input(), text);
        }
    }

    #[test]
    fn test_to_u64_wraps_negative_numbers() {
        assert_eq!(to_u64(&Value::from(-1_i32), 0), Ok(u64::MAX));
    }

    #[test]
    fn test_to_i64() {
        for v in every_width(32) {
            assert_eq!(to_i64(&v, 0), Ok(32), "{:?}", v);
        }
        assert_eq!(to_i64(&Value::from(32.2_f32), 0), Ok(32));
        assert_eq!(to_i64(&Value::from(32.8_f64), 0), Ok(32));
        assert_eq!(to_i64(&Value::from(-32.8_f64), 0), Ok(-32));
        assert_eq!(to_i64(&Value::from("32"), 0), Ok(32));
        assert_eq!(to_i64(&Value::from("-32"), 0), Ok(-32));
        assert_eq!(to_i64(&unsupported(), 0), Ok(0));
        assert_eq!(to_i64(&Value::Absent, -3), Ok(-3));
        assert_eq!(to_i64(&Value::from(u64::MAX), 0), Ok(-1));

        assert!(matches!(
            to_i64(&Value::from("32.2"), 0),
            Err(ConvertError::InvalidInteger { target: "i64", .. })
        ));
        assert!(to_i64(&Value::from("32.8"), 0).is_err());
    }

    #[test]
    fn test_to_f64() {
        for v in every_width(32) {
            assert_eq!(to_f64(&v, 0.0), Ok(32.0), "{:?}", v);
        }
        assert_abs_diff_eq!(to_f64(&Value::from(32.2_f32), 0.0).unwrap(), 32.2, epsilon = 1e-5);
        assert_abs_diff_eq!(to_f64(&Value::from(32.8_f64), 0.0).unwrap(), 32.8, epsilon = 1e-6);
        assert_abs_diff_eq!(to_f64(&Value::from("32.2"), 0.0).unwrap(), 32.2, epsilon = 1e-6);
        assert_abs_diff_eq!(to_f64(&Value::from("32.8"), 0.0).unwrap(), 32.8, epsilon = 1e-6);
        assert_eq!(to_f64(&Value::from("32"), 0.0), Ok(32.0));
        assert_eq!(to_f64(&unsupported(), 0.0), Ok(0.0));
        assert_eq!(to_f64(&Value::Absent, 1.5), Ok(1.5));
        assert!(matches!(
            to_f64(&Value::from("3..2"), 0.0),
            Err(ConvertError::InvalidFloat { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_i64_text_round_trip(n in any::<i64>()) {
            prop_assert_eq!(to_i64(&Value::from(n.to_string()), 0), Ok(n));
        }

        #[test]
        fn prop_u64_text_round_trip(n in any::<u64>()) {
            prop_assert_eq!(to_u64(&Value::from(n.to_string()), 0), Ok(n));
        }
    }
}
