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

//! `Mapping`: translates a parsed value through a lookup table on decode,
//! and its inverse on encode (spec §4.7).

use crate::container::Container;
use crate::error::Error;
use crate::subconstruct::AdapterOps;
use crate::value::Value;

/// What to do when a value has no entry in the map.
#[derive(Debug, Clone)]
pub enum MappingDefault {
    /// Fail with `Error::Mapping`.
    None,
    /// Pass the value through unchanged (spec §4.6's `Pass` semantics).
    Pass,
    /// Substitute a fixed fallback value.
    Value(Value),
}

#[derive(Debug, Clone)]
pub struct MappingAdapter {
    decode_map: Vec<(Value, Value)>,
    encode_map: Vec<(Value, Value)>,
    decode_default: MappingDefault,
    encode_default: MappingDefault,
}

impl MappingAdapter {
    pub fn new(
        decode_map: Vec<(Value, Value)>,
        encode_map: Vec<(Value, Value)>,
        decode_default: MappingDefault,
        encode_default: MappingDefault,
    ) -> Self {
        MappingAdapter { decode_map, encode_map, decode_default, encode_default }
    }

    /// A single-byte `Bytes` value normalizes to the equivalent `UInt` before
    /// lookup, so a map keyed by small integers also matches a
    /// single-byte field's raw parse result.
    fn normalize(value: &Value) -> Value {
        match value {
            Value::Bytes(b) if b.len() == 1 => Value::UInt(b[0] as u64),
            other => other.clone(),
        }
    }

    fn lookup(map: &[(Value, Value)], key: &Value, default: &MappingDefault) -> Result<Value, Error> {
        let key = Self::normalize(key);
        if let Some((_, v)) = map.iter().find(|(k, _)| Self::normalize(k) == key) {
            return Ok(v.clone());
        }
        match default {
            MappingDefault::None => {
                log::warn!("mapping: no entry for {key:?} and no default");
                Err(Error::Mapping(format!("{key:?}")))
            }
            MappingDefault::Pass => Ok(key),
            MappingDefault::Value(v) => Ok(v.clone()),
        }
    }
}

impl AdapterOps for MappingAdapter {
    fn decode(&self, value: Value, _ctx: &Container) -> Result<Value, Error> {
        Self::lookup(&self.decode_map, &value, &self.decode_default)
    }

    fn encode(&self, value: &Value, _ctx: &Container) -> Result<Value, Error> {
        Self::lookup(&self.encode_map, value, &self.encode_default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn byte_map() -> MappingAdapter {
        MappingAdapter::new(
            vec![(Value::UInt(1), Value::Str("one".into())), (Value::UInt(2), Value::Str("two".into()))],
            vec![(Value::Str("one".into()), Value::UInt(1)), (Value::Str("two".into()), Value::UInt(2))],
            MappingDefault::None,
            MappingDefault::None,
        )
    }

    #[test]
    fn decode_normalizes_single_byte_sequences() {
        let m = byte_map();
        let ctx = Container::new();
        assert_eq!(m.decode(Value::Bytes(vec![1]), &ctx).unwrap(), Value::Str("one".into()));
    }

    #[test]
    fn missing_key_with_no_default_errors() {
        let m = byte_map();
        let ctx = Container::new();
        assert!(m.decode(Value::UInt(99), &ctx).is_err());
    }

    #[test]
    fn pass_default_returns_key_unchanged() {
        let m = MappingAdapter::new(vec![], vec![], MappingDefault::Pass, MappingDefault::Pass);
        let ctx = Container::new();
        assert_eq!(m.decode(Value::UInt(7), &ctx).unwrap(), Value::UInt(7));
    }

    #[test]
    fn roundtrips_through_encode_and_decode() {
        let m = byte_map();
        let ctx = Container::new();
        let encoded = m.encode(&Value::Str("two".into()), &ctx).unwrap();
        assert_eq!(m.decode(encoded, &ctx).unwrap(), Value::Str("two".into()));
    }
}
