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

//! Error types shared by every construct in this crate.

use crate::value::Value;

/// Everything that can go wrong while parsing, building or sizing a construct.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A stream read/write didn't get the number of bytes it asked for.
    #[error("field {name}: expected {expected} bytes, got {actual}")]
    Field {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// `sizeof` failed because the size depends on data not present in the context.
    #[error("sizeof: {0}")]
    Sizeof(Box<Error>),

    /// Invalid construction argument (bad endianness token, zero-width bit field, ...).
    #[error("invalid value: {0}")]
    Value(String),

    /// A descriptor was constructed with the reserved name `"_"` or a name starting with `"<"`.
    #[error("reserved name: {0:?}")]
    ReservedName(String),

    /// A negative value was given to an unsigned `BitInteger`.
    #[error("negative value {0} given to an unsigned bit integer")]
    BitInteger(i64),

    /// A value had no entry in a `Mapping`'s lookup table and no default was given.
    #[error("no mapping for {0:?}")]
    Mapping(String),

    /// `Const`'s parsed or built value didn't match the expected magic.
    #[error("expected const {expected:?}, got {actual:?}")]
    Const { expected: Value, actual: Value },

    /// Strict `Padding` didn't match its fill pattern.
    #[error("padding byte at offset {offset}: expected {expected:#04x}, got {actual:#04x}")]
    Padding {
        offset: usize,
        expected: u8,
        actual: u8,
    },

    /// `OneOf`/`Validator` rejected a value.
    #[error("validation failed for {0:?}")]
    Validation(String),

    /// A `Value` accessor was used against the wrong variant.
    #[error("type mismatch: expected {expected}, got {actual:?}")]
    TypeMismatch { expected: &'static str, actual: Value },
}

pub type Result<T> = std::result::Result<T, Error>;
