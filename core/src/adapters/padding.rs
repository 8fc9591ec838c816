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

//! `Padding`: a fixed-width filler region, optionally validated strictly
//! against a fill byte on parse (spec §4.7).

use crate::container::Container;
use crate::error::Error;
use crate::subconstruct::AdapterOps;
use crate::value::Value;

#[derive(Debug, Clone)]
pub struct PaddingAdapter {
    length: usize,
    pattern: u8,
    strict: bool,
}

impl PaddingAdapter {
    pub fn new(length: usize, pattern: u8, strict: bool) -> Self {
        PaddingAdapter { length, pattern, strict }
    }
}

impl AdapterOps for PaddingAdapter {
    fn decode(&self, value: Value, _ctx: &Container) -> Result<Value, Error> {
        let bytes = value.as_bytes()?;
        if self.strict {
            for (i, &b) in bytes.iter().enumerate() {
                if b != self.pattern {
                    log::warn!("padding mismatch at offset {i}: expected {:#04x}, got {b:#04x}", self.pattern);
                    return Err(Error::Padding { offset: i, expected: self.pattern, actual: b });
                }
            }
        }
        Ok(value)
    }

    fn encode(&self, _value: &Value, _ctx: &Container) -> Result<Value, Error> {
        Ok(Value::Bytes(vec![self.pattern; self.length]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_decode_accepts_matching_fill() {
        let p = PaddingAdapter::new(3, 0, true);
        let ctx = Container::new();
        assert!(p.decode(Value::Bytes(vec![0, 0, 0]), &ctx).is_ok());
    }

    #[test]
    fn strict_decode_rejects_mismatched_fill() {
        let p = PaddingAdapter::new(3, 0, true);
        let ctx = Container::new();
        let err = p.decode(Value::Bytes(vec![0, 1, 0]), &ctx).unwrap_err();
        assert!(matches!(err, Error::Padding { offset: 1, .. }));
    }

    #[test]
    fn non_strict_decode_ignores_content() {
        let p = PaddingAdapter::new(3, 0, false);
        let ctx = Container::new();
        assert!(p.decode(Value::Bytes(vec![9, 9, 9]), &ctx).is_ok());
    }

    #[test]
    fn encode_ignores_caller_value_and_emits_the_pattern() {
        let p = PaddingAdapter::new(4, 0xff, true);
        let ctx = Container::new();
        assert_eq!(p.encode(&Value::Null, &ctx).unwrap(), Value::Bytes(vec![0xff; 4]));
    }
}
