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

//! The fixed-format packer for single primitive integers/floats.
//!
//! Spec treats this as an external collaborator with a narrow interface:
//! pack/unpack of one value given an endianness and a type code. It's
//! implemented here on top of `byteorder`, which is exactly the crate the
//! pack's closest cousin (`gltf-rs-gltf`) reaches for to do this.

use crate::error::Error;
use crate::value::Value;
use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian};

/// Byte order, selected by the `'<'`, `'>'` and `'='` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
    Native,
}

impl Endianness {
    pub fn from_token(token: char) -> Result<Self, Error> {
        match token {
            '<' => Ok(Endianness::Little),
            '>' => Ok(Endianness::Big),
            '=' => Ok(Endianness::Native),
            other => Err(Error::Value(format!(
                "invalid endianness token {other:?}, expected one of '<', '>', '='"
            ))),
        }
    }
}

/// The classic fixed-size integer/float format codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCode {
    I8,
    U8,
    Bool,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl FormatCode {
    pub fn width(self) -> usize {
        match self {
            FormatCode::I8 | FormatCode::U8 | FormatCode::Bool => 1,
            FormatCode::I16 | FormatCode::U16 => 2,
            FormatCode::I32 | FormatCode::U32 | FormatCode::F32 => 4,
            FormatCode::I64 | FormatCode::U64 | FormatCode::F64 => 8,
        }
    }
}

pub fn pack(endian: Endianness, code: FormatCode, value: &Value) -> Result<Vec<u8>, Error> {
    match endian {
        Endianness::Little => pack_with::<LittleEndian>(code, value),
        Endianness::Big => pack_with::<BigEndian>(code, value),
        Endianness::Native => pack_with::<NativeEndian>(code, value),
    }
}

pub fn unpack(endian: Endianness, code: FormatCode, bytes: &[u8]) -> Result<Value, Error> {
    match endian {
        Endianness::Little => unpack_with::<LittleEndian>(code, bytes),
        Endianness::Big => unpack_with::<BigEndian>(code, bytes),
        Endianness::Native => unpack_with::<NativeEndian>(code, bytes),
    }
}

fn pack_with<B: ByteOrder>(code: FormatCode, value: &Value) -> Result<Vec<u8>, Error> {
    let mut buf = vec![0u8; code.width()];
    match code {
        FormatCode::I8 => buf[0] = value.as_int()? as i8 as u8,
        FormatCode::U8 => buf[0] = value.as_uint()? as u8,
        FormatCode::Bool => buf[0] = value.as_bool()? as u8,
        FormatCode::I16 => B::write_i16(&mut buf, value.as_int()? as i16),
        FormatCode::U16 => B::write_u16(&mut buf, value.as_uint()? as u16),
        FormatCode::I32 => B::write_i32(&mut buf, value.as_int()? as i32),
        FormatCode::U32 => B::write_u32(&mut buf, value.as_uint()? as u32),
        FormatCode::I64 => B::write_i64(&mut buf, value.as_int()?),
        FormatCode::U64 => B::write_u64(&mut buf, value.as_uint()?),
        FormatCode::F32 => B::write_f32(&mut buf, value.as_float()? as f32),
        FormatCode::F64 => B::write_f64(&mut buf, value.as_float()?),
    }
    Ok(buf)
}

fn unpack_with<B: ByteOrder>(code: FormatCode, bytes: &[u8]) -> Result<Value, Error> {
    Ok(match code {
        FormatCode::I8 => Value::Int(bytes[0] as i8 as i64),
        FormatCode::U8 => Value::UInt(bytes[0] as u64),
        FormatCode::Bool => Value::Bool(bytes[0] != 0),
        FormatCode::I16 => Value::Int(B::read_i16(bytes) as i64),
        FormatCode::U16 => Value::UInt(B::read_u16(bytes) as u64),
        FormatCode::I32 => Value::Int(B::read_i32(bytes) as i64),
        FormatCode::U32 => Value::UInt(B::read_u32(bytes) as u64),
        FormatCode::I64 => Value::Int(B::read_i64(bytes)),
        FormatCode::U64 => Value::UInt(B::read_u64(bytes)),
        FormatCode::F32 => Value::Float(B::read_f32(bytes) as f64),
        FormatCode::F64 => Value::Float(B::read_f64(bytes)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_u32_little_endian() {
        let packed = pack(Endianness::Little, FormatCode::U32, &Value::UInt(0x1122_3344)).unwrap();
        assert_eq!(packed, vec![0x44, 0x33, 0x22, 0x11]);
        let unpacked = unpack(Endianness::Little, FormatCode::U32, &packed).unwrap();
        assert_eq!(unpacked, Value::UInt(0x1122_3344));
    }

    #[test]
    fn roundtrips_f32_big_endian() {
        let packed = pack(Endianness::Big, FormatCode::F32, &Value::Float(std::f32::consts::PI as f64)).unwrap();
        let unpacked = unpack(Endianness::Big, FormatCode::F32, &packed).unwrap();
        assert_eq!(unpacked.as_float().unwrap() as f32, std::f32::consts::PI);
    }

    #[test]
    fn rejects_unknown_endianness_token() {
        assert!(Endianness::from_token('!').is_err());
    }
}
