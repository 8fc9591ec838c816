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

//! `byteform` is a declarative library for describing binary formats: one
//! description gives you both directions, parsing bytes into a [`Value`]
//! tree and building a [`Value`] tree back into bytes.
//!
//! It is a brainchild of [Python's `construct`
//! library](https://construct.readthedocs.io/): instead of one type per
//! format, a format is an ordinary value — a [`Struct`] of named fields,
//! wrapped in whatever [adapters](adapters) translate the on-disk
//! representation into something a caller actually wants to work with.
//!
//! ```
//! use byteform::{builders, Construct, FormatCode};
//!
//! let fields: Vec<Box<dyn Construct>> = vec![
//!     Box::new(builders::format_field("magic", '<', FormatCode::U16).unwrap()),
//!     Box::new(builders::format_field("version", '<', FormatCode::U8).unwrap()),
//! ];
//! let header = builders::structure("header", fields).unwrap();
//!
//! let parsed = header.parse(&[0xad, 0xde, 0x01]).unwrap();
//! let obj = parsed.as_container().unwrap();
//! assert_eq!(obj.get("magic"), Some(&byteform::Value::UInt(0xdead)));
//! ```

mod adapters;
mod buffered;
mod construct;
mod container;
mod error;
mod fields;
mod flags;
mod name;
mod packer;
mod stream;
mod struct_;
mod subconstruct;
mod value;

/// Factory functions over the raw descriptor types (spec §6). Prefer these
/// over constructing [`Struct`]/[`AdaptedConstruct`] directly.
pub mod builders;

pub use adapters::{
    BitIntegerAdapter, ConstAdapter, ExprAdapter, FlagAdapter, HexDumpAdapter, MappingAdapter,
    MappingDefault, OneOf, PaddingAdapter, Validate, ValidatorAdapter,
};
pub use buffered::Buffered;
pub use construct::{Construct, Pass, PASS};
pub use container::Container;
pub use error::{Error, Result};
pub use fields::{FormatField, Length, StaticField};
pub use flags::Flags;
pub use name::Name;
/// The fixed-format packer's public vocabulary (endianness tokens and type
/// codes), for callers building a [`FormatField`] directly.
pub use packer::{Endianness, FormatCode};
pub use struct_::Struct;
pub use subconstruct::{AdaptedConstruct, AdapterOps, Embed, Subconstruct};
pub use value::Value;
