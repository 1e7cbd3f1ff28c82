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


//! # Dynamic Values
//!
//! A closed tagged union over the shapes the coercion and predicate layers
//! understand. Callers holding loosely-typed data (decoded documents,
//! configuration trees, user input) lift it into a [`Value`] once and then
//! classify or coerce it without repeating per-type dispatch inline.
//!
//! ## Shapes
//!
//! - [`Value::Absent`]: explicitly carries no value. Distinct from a zero
//!   number, an empty string, or an empty sequence.
//! - [`Value::Number`]: any primitive integer or float width, tagged by
//!   [`Number`] so the original width survives the lift.
//! - [`Value::Sequence`] / [`Value::Mapping`]: ordered collections and
//!   key-value associations of nested values.
//! - [`Value::Other`]: an [`Opaque`] payload of unspecified shape.
//!
//! ## Usage
//!
//! ```rust
//! use berry_core::value::{Number, Value, ValueKind};
//!
//! let v = Value::from(42_u16);
//! assert_eq!(v, Value::Number(Number::U16(42)));
//! assert_eq!(v.kind(), ValueKind::Number);
//!
//! let absent: Value = None::<i32>.into();
//! assert!(absent.is_absent());
//! ```

use num_traits::{AsPrimitive, Zero};
use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// A primitive number tagged with its concrete width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
}

macro_rules! dispatch_number {
    ($number:expr, $v:ident => $body:expr) => {
        match $number {
            Number::I8($v) => $body,
            Number::I16($v) => $body,
            Number::I32($v) => $body,
            Number::I64($v) => $body,
            Number::Isize($v) => $body,
            Number::U8($v) => $body,
            Number::U16($v) => $body,
            Number::U32($v) => $body,
            Number::U64($v) => $body,
            Number::Usize($v) => $body,
            Number::F32($v) => $body,
            Number::F64($v) => $body,
        }
    };
}

impl Number {
    /// Returns `true` if the number compares equal to zero of its own width.
    ///
    /// Negative zero is zero; `NaN` is not.
    #[inline]
    pub fn is_zero(&self) -> bool {
        dispatch_number!(*self, v => v.is_zero())
    }

    /// Returns `true` for the `F32` and `F64` widths.
    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Number::F32(_) | Number::F64(_))
    }

    /// Converts to `u64` with primitive `as` semantics.
    ///
    /// Integer narrowing and sign changes wrap. Floats truncate toward zero
    /// and clamp at the bounds of `u64`; `NaN` becomes `0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use berry_core::value::Number;
    /// assert_eq!(Number::F64(32.8).as_u64(), 32);
    /// assert_eq!(Number::I8(-1).as_u64(), u64::MAX);
    /// ```
    #[inline]
    pub fn as_u64(&self) -> u64 {
        dispatch_number!(*self, v => AsPrimitive::<u64>::as_(v))
    }

    /// Converts to `i64` with primitive `as` semantics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use berry_core::value::Number;
    /// assert_eq!(Number::F32(-32.8).as_i64(), -32);
    /// assert_eq!(Number::U64(u64::MAX).as_i64(), -1);
    /// ```
    #[inline]
    pub fn as_i64(&self) -> i64 {
        dispatch_number!(*self, v => AsPrimitive::<i64>::as_(v))
    }

    /// Converts to `f64` with primitive `as` semantics (nearest representable).
    #[inline]
    pub fn as_f64(&self) -> f64 {
        dispatch_number!(*self, v => AsPrimitive::<f64>::as_(v))
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        dispatch_number!(self, v => std::fmt::Display::fmt(v, f))
    }
}

/// A shared payload whose shape the library does not interpret.
///
/// Equality is identity: two `Opaque` handles are equal only when they
/// point at the same allocation.
#[derive(Clone)]
pub struct Opaque {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
    /// Wraps `value`, recording its type name for display purposes.
    #[inline]
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: Arc::new(value),
        }
    }

    /// The fully qualified type name of the wrapped value.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns a reference to the wrapped value if it is a `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.inner).downcast_ref::<T>()
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for Opaque {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Opaque").field(&self.type_name).finish()
    }
}

impl std::fmt::Display for Opaque {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.type_name)
    }
}

/// The structural classification of a [`Value`].
///
/// Booleans and strings are neither numeric nor collection-shaped and
/// therefore classify as [`ValueKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Absent,
    Number,
    Sequence,
    Mapping,
    Other,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Absent => "absent",
            ValueKind::Number => "number",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
            ValueKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// A dynamically-typed value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Absent,
    Bool(bool),
    Number(Number),
    String(String),
    /// An ordered, indexable collection. Byte strings lift to a sequence
    /// of `U8` numbers.
    Sequence(Vec<Value>),
    /// Key-value entries in insertion order. Keys are not required to be
    /// unique or hashable.
    Mapping(Vec<(Value, Value)>),
    Other(Opaque),
}

impl Value {
    /// Returns `true` if the value carries nothing.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Classifies the value by structure.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Absent => ValueKind::Absent,
            Value::Number(_) => ValueKind::Number,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Mapping(_) => ValueKind::Mapping,
            Value::Bool(_) | Value::String(_) | Value::Other(_) => ValueKind::Other,
        }
    }

    /// Wraps an arbitrary payload as [`Value::Other`].
    #[inline]
    pub fn opaque<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Value::Other(Opaque::new(value))
    }
}

impl std::fmt::Display for Value {
    /// Renders `[a b c]` for sequences and `map[k:v k:v]` for mappings.
    /// An absent value renders as nothing.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Absent => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Mapping(entries) => {
                f.write_str("map[")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}:{}", key, value)?;
                }
                f.write_str("]")
            }
            Value::Other(opaque) => write!(f, "{}", opaque),
        }
    }
}

macro_rules! impl_from_number_for {
    ($variant:ident, $t:ty) => {
        impl From<$t> for Number {
            #[inline]
            fn from(v: $t) -> Self {
                Number::$variant(v)
            }
        }

        impl From<$t> for Value {
            #[inline]
            fn from(v: $t) -> Self {
                Value::Number(Number::$variant(v))
            }
        }
    };
}

impl_from_number_for!(I8, i8);
impl_from_number_for!(I16, i16);
impl_from_number_for!(I32, i32);
impl_from_number_for!(I64, i64);
impl_from_number_for!(Isize, isize);
impl_from_number_for!(U8, u8);
impl_from_number_for!(U16, u16);
impl_from_number_for!(U32, u32);
impl_from_number_for!(U64, u64);
impl_from_number_for!(Usize, usize);
impl_from_number_for!(F32, f32);
impl_from_number_for!(F64, f64);

impl From<Number> for Value {
    #[inline]
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Opaque> for Value {
    #[inline]
    fn from(o: Opaque) -> Self {
        Value::Other(o)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    #[inline]
    fn from(o: Option<T>) -> Self {
        o.map_or(Value::Absent, Into::into)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T> From<&[T]> for Value
where
    T: Clone + Into<Value>,
{
    fn from(items: &[T]) -> Self {
        Value::Sequence(items.iter().cloned().map(Into::into).collect())
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Value
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        Value::Mapping(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V> From<BTreeMap<K, V>> for Value
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::Mapping(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    /// Lifts a JSON document. Integers prefer `U64`, then `I64`; all other
    /// numbers become `F64`. Object keys become string values.
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Value::from(u)
                } else if let Some(i) = n.as_i64() {
                    Value::from(i)
                } else {
                    n.as_f64().map_or(Value::Absent, Value::from)
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::from(items),
            serde_json::Value::Object(entries) => Value::Mapping(
                entries
                    .into_iter()
                    .map(|(k, v)| (Value::String(k), v.into()))
                    .collect(),
            ),
        }
    }
}
