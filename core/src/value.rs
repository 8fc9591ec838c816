// MIT License
//
// Copyright (c) 2019 Lukas Lueg (lukas.lueg@gmail.com)
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! The dynamic, untyped value domain that parsed and built data lives in.

use crate::container::Container;
use crate::error::Error;

/// A parsed or to-be-built value.
///
/// Constructs are heterogeneous: a `Struct` produces a `Container`, a
/// `StaticField` produces `Bytes`, a `Mapping` may produce anything its map
/// resolves to. `Value` is the tagged union all of them share.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bytes(Vec<u8>),
    Str(String),
    Container(Container),
    List(Vec<Value>),
}

impl Value {
    pub fn as_bool(&self) -> Result<bool, Error> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(Error::TypeMismatch {
                expected: "bool",
                actual: other.clone(),
            }),
        }
    }

    /// Any integral variant, widened to `i64`.
    pub fn as_int(&self) -> Result<i64, Error> {
        match self {
            Value::Int(i) => Ok(*i),
            Value::UInt(u) => Ok(*u as i64),
            Value::Bool(b) => Ok(*b as i64),
            other => Err(Error::TypeMismatch {
                expected: "int",
                actual: other.clone(),
            }),
        }
    }

    pub fn as_uint(&self) -> Result<u64, Error> {
        match self {
            Value::UInt(u) => Ok(*u),
            Value::Int(i) if *i >= 0 => Ok(*i as u64),
            other => Err(Error::TypeMismatch {
                expected: "uint",
                actual: other.clone(),
            }),
        }
    }

    pub fn as_float(&self) -> Result<f64, Error> {
        match self {
            Value::Float(f) => Ok(*f),
            other => Err(Error::TypeMismatch {
                expected: "float",
                actual: other.clone(),
            }),
        }
    }

    pub fn as_bytes(&self) -> Result<&[u8], Error> {
        match self {
            Value::Bytes(b) => Ok(b),
            other => Err(Error::TypeMismatch {
                expected: "bytes",
                actual: other.clone(),
            }),
        }
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, Error> {
        match self {
            Value::Bytes(b) => Ok(b),
            other => Err(Error::TypeMismatch {
                expected: "bytes",
                actual: other,
            }),
        }
    }

    pub fn as_str(&self) -> Result<&str, Error> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(Error::TypeMismatch {
                expected: "str",
                actual: other.clone(),
            }),
        }
    }

    pub fn as_container(&self) -> Result<&Container, Error> {
        match self {
            Value::Container(c) => Ok(c),
            other => Err(Error::TypeMismatch {
                expected: "container",
                actual: other.clone(),
            }),
        }
    }

    pub fn into_container(self) -> Result<Container, Error> {
        match self {
            Value::Container(c) => Ok(c),
            other => Err(Error::TypeMismatch {
                expected: "container",
                actual: other,
            }),
        }
    }

    pub fn as_list(&self) -> Result<&[Value], Error> {
        match self {
            Value::List(l) => Ok(l),
            other => Err(Error::TypeMismatch {
                expected: "list",
                actual: other.clone(),
            }),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The byte-length `write_exact` derives for a value that isn't a raw
    /// byte sequence: single byte -> 1; otherwise the minimal width in
    /// `{1, 2, 4}` bytes that an unsigned integer fits in (spec §4.1), or the
    /// character count for a string. This is the legacy magnitude-inference
    /// behaviour spec §9 calls fragile; `FormatField` never relies on it
    /// because it always carries an explicit width.
    pub fn legacy_width(&self) -> Result<usize, Error> {
        match self {
            Value::Bytes(b) => Ok(b.len()),
            Value::Str(s) => Ok(s.chars().count()),
            Value::Int(i) => Ok(Self::legacy_width_of(*i as i128)),
            Value::UInt(u) => Ok(Self::legacy_width_of(*u as i128)),
            Value::Bool(_) => Ok(1),
            other => Err(Error::TypeMismatch {
                expected: "bytes, str, int, uint or bool",
                actual: other.clone(),
            }),
        }
    }

    fn legacy_width_of(v: i128) -> usize {
        if v >= 0 && v <= 0xff {
            1
        } else if v >= 0 && v <= 0xffff {
            2
        } else {
            4
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::UInt(u)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Container> for Value {
    fn from(c: Container) -> Self {
        Value::Container(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_reject_wrong_variant() {
        let v = Value::Int(3);
        assert!(v.as_bytes().is_err());
        assert_eq!(v.as_int().unwrap(), 3);
    }

    #[test]
    fn bool_widens_to_int() {
        assert_eq!(Value::Bool(true).as_int().unwrap(), 1);
    }

    #[test]
    fn legacy_width_promotes_at_boundaries() {
        assert_eq!(Value::Int(0).legacy_width().unwrap(), 1);
        assert_eq!(Value::Int(0xff).legacy_width().unwrap(), 1);
        assert_eq!(Value::Int(0x100).legacy_width().unwrap(), 2);
        assert_eq!(Value::Int(0xffff).legacy_width().unwrap(), 2);
        assert_eq!(Value::Int(0x1_0000).legacy_width().unwrap(), 4);
    }
}
