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


//! # Type Predicates
//!
//! Structural classification of a [`Value`]. The three predicates are
//! mutually exclusive; a value may satisfy none of them (booleans, strings,
//! opaque payloads, and absent input).

use crate::value::{Value, ValueKind};

/// Returns `true` if `value` holds a primitive integer or float of any width.
///
/// Numeric-looking strings are not numbers.
///
/// # Examples
///
/// ```rust
/// # use berry_core::predicate::is_number;
/// # use berry_core::value::Value;
/// assert!(is_number(&Value::from(0_u8)));
/// assert!(!is_number(&Value::from("123")));
/// assert!(!is_number(&Value::Absent));
/// ```
#[inline]
pub fn is_number(value: &Value) -> bool {
    value.kind() == ValueKind::Number
}

/// Returns `true` if `value` is an ordered sequence, whatever its elements.
#[inline]
pub fn is_slice(value: &Value) -> bool {
    value.kind() == ValueKind::Sequence
}

/// Returns `true` if `value` is a key-value mapping.
#[inline]
pub fn is_map(value: &Value) -> bool {
    value.kind() == ValueKind::Mapping
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

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

    fn one_element_map<V: Into<Value>>(v: V) -> Value {
        let mut map = HashMap::new();
        map.insert("k".to_string(), v);
        Value::from(map)
    }

    #[test]
    fn test_is_number_every_width() {
        for v in every_width(0).into_iter().chain(every_width(12)) {
            assert!(is_number(&v), "{:?} should be a number", v);
        }
    }

    #[test]
    fn test_is_number_negative() {
        assert!(!is_number(&Value::Absent));
        assert!(!is_number(&Value::from("12")));
        assert!(!is_number(&Value::from(true)));
        assert!(!is_number(&Value::from(vec![1])));
    }

    #[test]
    fn test_is_slice() {
        assert!(is_slice(&Value::from(vec![0_i32])));
        assert!(is_slice(&Value::from(vec![0_u8])));
        assert!(is_slice(&Value::from(vec![0.0_f64])));
        assert!(is_slice(&Value::from(vec![String::new()])));
        assert!(is_slice(&Value::from(Vec::<i64>::new())));

        assert!(!is_slice(&Value::Absent));
        assert!(!is_slice(&Value::from("123")));
        assert!(!is_slice(&Value::from(64.34)));
        assert!(!is_slice(&Value::opaque(String::new())));
        assert!(!is_slice(&one_element_map(1)));
    }

    #[test]
    fn test_is_map() {
        assert!(is_map(&one_element_map(1_i32)));
        assert!(is_map(&one_element_map(1_u64)));
        assert!(is_map(&one_element_map(1.0_f32)));
        assert!(is_map(&one_element_map("v")));

        assert!(!is_map(&Value::Absent));
        assert!(!is_map(&Value::from("123")));
        assert!(!is_map(&Value::from(64.34)));
        assert!(!is_map(&Value::opaque(String::new())));
        assert!(!is_map(&Value::from(vec![0_u8])));
        assert!(!is_map(&Value::from(vec!["s"])));
    }

    #[test]
    fn test_predicates_are_mutually_exclusive() {
        let mut samples = every_width(7);
        samples.extend([
            Value::Absent,
            Value::from(false),
            Value::from("x"),
            Value::from(vec![1, 2]),
            one_element_map(1),
            Value::opaque(()),
        ]);
        for v in &samples {
            let hits = [is_number(v), is_slice(v), is_map(v)]
                .iter()
                .filter(|b| **b)
                .count();
            assert!(hits <= 1, "{:?} matched {} predicates", v, hits);
        }
    }
}
