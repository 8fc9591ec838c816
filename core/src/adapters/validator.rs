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

//! `Validator`: rejects a value (in either direction) that fails a
//! predicate, without transforming it. `OneOf` is the stock predicate
//! (spec §4.7).

use crate::container::Container;
use crate::error::Error;
use crate::subconstruct::AdapterOps;
use crate::value::Value;

/// A reusable validation predicate over a `Value` and its threaded context.
pub trait Validate: std::fmt::Debug {
    fn validate(&self, value: &Value, ctx: &Container) -> bool;
}

#[derive(Debug, Clone)]
pub struct ValidatorAdapter<V> {
    validate: V,
}

impl<V: Validate> ValidatorAdapter<V> {
    pub fn new(validate: V) -> Self {
        ValidatorAdapter { validate }
    }
}

impl<V: Validate> AdapterOps for ValidatorAdapter<V> {
    fn decode(&self, value: Value, ctx: &Container) -> Result<Value, Error> {
        if self.validate.validate(&value, ctx) {
            Ok(value)
        } else {
            log::warn!("validation rejected {value:?}");
            Err(Error::Validation(format!("{value:?}")))
        }
    }

    fn encode(&self, value: &Value, ctx: &Container) -> Result<Value, Error> {
        if self.validate.validate(value, ctx) {
            Ok(value.clone())
        } else {
            log::warn!("validation rejected {value:?}");
            Err(Error::Validation(format!("{value:?}")))
        }
    }
}

/// Accepts any value present in a fixed allow-list.
#[derive(Debug, Clone)]
pub struct OneOf {
    allowed: Vec<Value>,
}

impl OneOf {
    pub fn new(allowed: Vec<Value>) -> Self {
        OneOf { allowed }
    }
}

impl Validate for OneOf {
    fn validate(&self, value: &Value, _ctx: &Container) -> bool {
        self.allowed.iter().any(|v| v == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_of_accepts_listed_values() {
        let v = ValidatorAdapter::new(OneOf::new(vec![Value::UInt(1), Value::UInt(2)]));
        let ctx = Container::new();
        assert!(v.decode(Value::UInt(1), &ctx).is_ok());
    }

    #[test]
    fn one_of_rejects_unlisted_values() {
        let v = ValidatorAdapter::new(OneOf::new(vec![Value::UInt(1), Value::UInt(2)]));
        let ctx = Container::new();
        assert!(v.decode(Value::UInt(3), &ctx).is_err());
    }

    #[test]
    fn encode_validates_too() {
        let v = ValidatorAdapter::new(OneOf::new(vec![Value::UInt(1)]));
        let ctx = Container::new();
        assert!(v.encode(&Value::UInt(9), &ctx).is_err());
    }
}
