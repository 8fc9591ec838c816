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

//! `Const`: guards a fixed magic value, and supplies it for free on build
//! when the caller didn't give one (spec §4.7).

use crate::container::Container;
use crate::error::Error;
use crate::subconstruct::AdapterOps;
use crate::value::Value;

#[derive(Debug, Clone)]
pub struct ConstAdapter {
    expected: Value,
}

impl ConstAdapter {
    pub fn new(expected: Value) -> Self {
        ConstAdapter { expected }
    }
}

impl AdapterOps for ConstAdapter {
    fn decode(&self, value: Value, _ctx: &Container) -> Result<Value, Error> {
        if value == self.expected {
            Ok(value)
        } else {
            log::warn!("const mismatch: expected {:?}, got {value:?}", self.expected);
            Err(Error::Const { expected: self.expected.clone(), actual: value })
        }
    }

    fn encode(&self, value: &Value, _ctx: &Container) -> Result<Value, Error> {
        if value.is_null() {
            Ok(self.expected.clone())
        } else if *value == self.expected {
            Ok(value.clone())
        } else {
            log::warn!("const mismatch: expected {:?}, got {value:?}", self.expected);
            Err(Error::Const { expected: self.expected.clone(), actual: value.clone() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_accepts_matching_magic() {
        let c = ConstAdapter::new(Value::Bytes(vec![0x4d, 0x5a]));
        let ctx = Container::new();
        assert!(c.decode(Value::Bytes(vec![0x4d, 0x5a]), &ctx).is_ok());
    }

    #[test]
    fn decode_rejects_mismatched_magic() {
        let c = ConstAdapter::new(Value::Bytes(vec![0x4d, 0x5a]));
        let ctx = Container::new();
        assert!(c.decode(Value::Bytes(vec![0, 0]), &ctx).is_err());
    }

    #[test]
    fn encode_supplies_the_magic_when_value_is_null() {
        let c = ConstAdapter::new(Value::UInt(7));
        let ctx = Container::new();
        assert_eq!(c.encode(&Value::Null, &ctx).unwrap(), Value::UInt(7));
    }

    #[test]
    fn encode_rejects_a_conflicting_explicit_value() {
        let c = ConstAdapter::new(Value::UInt(7));
        let ctx = Container::new();
        assert!(c.encode(&Value::UInt(8), &ctx).is_err());
    }
}
