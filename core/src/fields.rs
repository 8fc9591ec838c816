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

//! Primitive fields: raw fixed/dynamic-length bytes, and packer-backed
//! formatted scalars.

use std::sync::Arc;

use crate::construct::Construct;
use crate::container::Container;
use crate::error::Error;
use crate::flags::Flags;
use crate::name::Name;
use crate::packer::{self, Endianness, FormatCode};
use crate::stream::{read_exact, value_length, write_exact, Reader, Writer};
use crate::value::Value;

/// Either a fixed byte count or a function of the current context. The
/// dynamic form is how a length-prefixed field ("read `len` bytes, where
/// `len` was parsed by an earlier sibling") is expressed (spec §8 scenario
/// 6).
#[derive(Clone)]
pub enum Length {
    Fixed(usize),
    Dynamic(Arc<dyn Fn(&Container) -> Result<usize, Error> + Send + Sync>),
}

impl Length {
    /// A length read from the named context key at parse/build/sizeof time,
    /// walking the `"_"` parent chain if necessary.
    pub fn from_context_key(key: impl Into<String>) -> Self {
        let key = key.into();
        Length::Dynamic(Arc::new(move |ctx: &Container| {
            ctx.get_chained(&key)
                .ok_or_else(|| Error::Value(format!("no context value named {key:?}")))?
                .as_uint()
                .map(|n| n as usize)
        }))
    }

    pub fn resolve(&self, ctx: &Container) -> Result<usize, Error> {
        match self {
            Length::Fixed(n) => Ok(*n),
            Length::Dynamic(f) => f(ctx),
        }
    }
}

impl std::fmt::Debug for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Length::Fixed(n) => write!(f, "Length::Fixed({n})"),
            Length::Dynamic(_) => write!(f, "Length::Dynamic(..)"),
        }
    }
}

impl From<usize> for Length {
    fn from(n: usize) -> Self {
        Length::Fixed(n)
    }
}

/// Reads/writes exactly `length` raw bytes (spec §4.3).
#[derive(Debug, Clone)]
pub struct StaticField {
    name: Name,
    length: Length,
}

impl StaticField {
    pub fn new(name: &str, length: impl Into<Length>) -> Result<Self, Error> {
        Ok(StaticField {
            name: Name::new(name)?,
            length: length.into(),
        })
    }

    /// A nameless field: `Struct::parse_children` parses and discards it
    /// (spec §4.4's padding/alignment case) instead of writing a key.
    pub fn unnamed(length: impl Into<Length>) -> Self {
        StaticField {
            name: Name::unnamed(),
            length: length.into(),
        }
    }
}

impl Construct for StaticField {
    fn name(&self) -> &Name {
        &self.name
    }

    fn flags(&self) -> Flags {
        Flags::empty()
    }

    fn parse_stream(&self, stream: &mut Reader<'_>, ctx: &mut Container) -> Result<Value, Error> {
        let n = self.length.resolve(ctx)?;
        let bytes = read_exact(stream, &self.name.to_string(), n)?;
        Ok(Value::Bytes(bytes.to_vec()))
    }

    fn build_stream(&self, value: &Value, stream: &mut Writer, ctx: &mut Container) -> Result<(), Error> {
        let n = self.length.resolve(ctx)?;
        // A nameless field (padding/alignment) has no value of its own; a
        // `Struct` builds it from `Value::Null` (spec §4.4), so it's built
        // back out as `n` zero bytes rather than rejected as a type mismatch.
        if value.is_null() {
            return write_exact(stream, &self.name.to_string(), n, &vec![0u8; n]);
        }
        let bytes = value.as_bytes()?;
        write_exact(stream, &self.name.to_string(), n, bytes)
    }

    fn sizeof_ctx(&self, ctx: &Container) -> Result<usize, Error> {
        self.length.resolve(ctx)
    }
}

/// A single primitive integer/float/bool, delegating to the external
/// fixed-format packer (spec §4.3).
#[derive(Debug, Clone)]
pub struct FormatField {
    name: Name,
    endian: Endianness,
    code: FormatCode,
}

impl FormatField {
    pub fn new(name: &str, endian: char, code: FormatCode) -> Result<Self, Error> {
        Ok(FormatField {
            name: Name::new(name)?,
            endian: Endianness::from_token(endian)?,
            code,
        })
    }
}

impl Construct for FormatField {
    fn name(&self) -> &Name {
        &self.name
    }

    fn flags(&self) -> Flags {
        Flags::empty()
    }

    fn parse_stream(&self, stream: &mut Reader<'_>, _ctx: &mut Container) -> Result<Value, Error> {
        let bytes = read_exact(stream, &self.name.to_string(), self.code.width())?;
        packer::unpack(self.endian, self.code, bytes)
    }

    fn build_stream(&self, value: &Value, stream: &mut Writer, _ctx: &mut Container) -> Result<(), Error> {
        let bytes = packer::pack(self.endian, self.code, value)?;
        write_exact(stream, &self.name.to_string(), self.code.width(), &bytes)
    }

    fn sizeof_ctx(&self, _ctx: &Container) -> Result<usize, Error> {
        Ok(self.code.width())
    }
}

/// Unused in the typed `FormatField` path (which always carries an explicit
/// width) but kept for callers deriving a length from an arbitrary `Value`,
/// e.g. a `StaticField` whose length mirrors an already-parsed value rather
/// than a named context key.
pub fn legacy_length_of(value: &Value) -> Result<usize, Error> {
    value_length(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_field_reads_fixed_length() {
        let f = StaticField::new("data", 3usize).unwrap();
        let mut ctx = Container::new();
        let v = f.parse(&[1, 2, 3, 4]).unwrap();
        assert_eq!(v, Value::Bytes(vec![1, 2, 3]));
        assert_eq!(f.sizeof_ctx(&mut ctx).unwrap(), 3);
    }

    #[test]
    fn static_field_rejects_short_read() {
        let f = StaticField::new("data", 3usize).unwrap();
        assert!(f.parse(&[1, 2]).is_err());
    }

    #[test]
    fn static_field_resolves_dynamic_length_from_context() {
        let f = StaticField::new("data", Length::from_context_key("len")).unwrap();
        let mut ctx = Container::new();
        ctx.set("len", Value::UInt(2));
        let mut stream = Reader::new(&[9, 9, 9, 9]);
        let v = f.parse_stream(&mut stream, &mut ctx).unwrap();
        assert_eq!(v, Value::Bytes(vec![9, 9]));
    }

    #[test]
    fn static_field_dynamic_length_without_context_is_sizeof_error() {
        let f = StaticField::new("data", Length::from_context_key("len")).unwrap();
        assert!(f.sizeof(None).is_err());
    }

    #[test]
    fn format_field_rejects_bad_endianness() {
        assert!(FormatField::new("x", '!', FormatCode::U32).is_err());
    }

    #[test]
    fn format_field_roundtrips() {
        let f = FormatField::new("x", '<', FormatCode::I32).unwrap();
        let packed = f.build(&Value::Int(-5)).unwrap();
        assert_eq!(f.parse(&packed).unwrap(), Value::Int(-5));
        assert_eq!(f.sizeof(None).unwrap(), 4);
    }
}
