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

//! `BitInteger`: interprets a byte-per-bit sequence (one byte per bit, value
//! 0 or 1, MSB first) as an integer, and its inverse (spec §4.7).
//!
//! The byte-per-bit sequence itself comes from a `StaticField` sitting inside
//! a `BitStruct`'s `Buffered` (see `adapters::bitstream` and
//! `builders::bit_struct`); this adapter never touches the real packed bits.

use crate::container::Container;
use crate::error::Error;
use crate::subconstruct::AdapterOps;
use crate::value::Value;

/// Converts a bit-count integer into its `width`-long byte-per-bit
/// representation, MSB first. Two's-complement bit pattern either way, so
/// this is reused by both the signed and unsigned case; `BitIntegerAdapter`
/// is what rejects a negative value for an unsigned field.
fn int_to_bin(value: i64, width: usize) -> Vec<u8> {
    let bits = value as u64;
    (0..width).map(|i| ((bits >> (width - 1 - i)) & 1) as u8).collect()
}

/// The inverse of [`int_to_bin`]: accumulates `bits` MSB-first into an
/// integer, sign-extending from the top bit when `signed`.
fn bin_to_int(bits: &[u8], signed: bool) -> i64 {
    let width = bits.len();
    let mut acc: u64 = 0;
    for &b in bits {
        acc = (acc << 1) | (b & 1) as u64;
    }
    if signed && width > 0 && width < 64 && bits[0] == 1 {
        acc as i64 - (1i64 << width)
    } else {
        acc as i64
    }
}

/// Reorders `bits` in groups of `bytesize` bits, reversing group order while
/// leaving each group's internal bit order untouched — a byte-swap performed
/// in the byte-per-bit domain.
fn swap_bytes(bits: &[u8], bytesize: usize) -> Vec<u8> {
    if bytesize == 0 {
        return bits.to_vec();
    }
    bits.chunks(bytesize).rev().flatten().copied().collect()
}

#[derive(Debug, Clone)]
pub struct BitIntegerAdapter {
    width: usize,
    swapped: bool,
    signed: bool,
    bytesize: usize,
}

impl BitIntegerAdapter {
    pub fn new(width: usize, swapped: bool, signed: bool, bytesize: usize) -> Result<Self, Error> {
        if width == 0 {
            return Err(Error::Value("BitInteger width must be > 0".into()));
        }
        Ok(BitIntegerAdapter { width, swapped, signed, bytesize })
    }
}

impl AdapterOps for BitIntegerAdapter {
    fn decode(&self, value: Value, _ctx: &Container) -> Result<Value, Error> {
        let bits = value.into_bytes()?;
        let bits = if self.swapped { swap_bytes(&bits, self.bytesize) } else { bits };
        let n = bin_to_int(&bits, self.signed);
        Ok(if self.signed { Value::Int(n) } else { Value::UInt(n as u64) })
    }

    fn encode(&self, value: &Value, _ctx: &Container) -> Result<Value, Error> {
        let n = value.as_int()?;
        if !self.signed && n < 0 {
            return Err(Error::BitInteger(n));
        }
        let bits = int_to_bin(n, self.width);
        let bits = if self.swapped { swap_bytes(&bits, self.bytesize) } else { bits };
        Ok(Value::Bytes(bits))
    }
}

/// Decodes a single bit as a `bool` rather than an integer (spec §6's
/// `Flag`).
#[derive(Debug, Clone)]
pub struct FlagAdapter;

impl AdapterOps for FlagAdapter {
    fn decode(&self, value: Value, _ctx: &Container) -> Result<Value, Error> {
        let bits = value.into_bytes()?;
        Ok(Value::Bool(bits.first().copied().unwrap_or(0) != 0))
    }

    fn encode(&self, value: &Value, _ctx: &Container) -> Result<Value, Error> {
        Ok(Value::Bytes(vec![value.as_bool()? as u8]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_roundtrip() {
        let a = BitIntegerAdapter::new(4, false, false, 8).unwrap();
        let ctx = Container::new();
        let encoded = a.encode(&Value::UInt(11), &ctx).unwrap();
        assert_eq!(encoded, Value::Bytes(vec![1, 0, 1, 1]));
        assert_eq!(a.decode(encoded, &ctx).unwrap(), Value::UInt(11));
    }

    #[test]
    fn signed_two_complement_roundtrip() {
        let a = BitIntegerAdapter::new(3, false, true, 8).unwrap();
        let ctx = Container::new();
        let encoded = a.encode(&Value::Int(-1), &ctx).unwrap();
        assert_eq!(encoded, Value::Bytes(vec![1, 1, 1]));
        assert_eq!(a.decode(encoded, &ctx).unwrap(), Value::Int(-1));
    }

    #[test]
    fn unsigned_rejects_negative() {
        let a = BitIntegerAdapter::new(4, false, false, 8).unwrap();
        let ctx = Container::new();
        assert!(a.encode(&Value::Int(-1), &ctx).is_err());
    }

    #[test]
    fn zero_width_is_rejected_at_construction() {
        assert!(BitIntegerAdapter::new(0, false, false, 8).is_err());
    }

    #[test]
    fn swap_bytes_reverses_byte_groups_not_bit_order() {
        let bits = vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1];
        let swapped = swap_bytes(&bits, 8);
        assert_eq!(swapped, vec![0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn flag_decodes_nonzero_bit_as_true() {
        let f = FlagAdapter;
        let ctx = Container::new();
        assert_eq!(f.decode(Value::Bytes(vec![1]), &ctx).unwrap(), Value::Bool(true));
        assert_eq!(f.decode(Value::Bytes(vec![0]), &ctx).unwrap(), Value::Bool(false));
        assert_eq!(f.encode(&Value::Bool(true), &ctx).unwrap(), Value::Bytes(vec![1]));
    }
}
