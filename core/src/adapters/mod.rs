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

//! The adapter library (spec §4.7): each module pairs a small
//! `AdapterOps` impl with the `Value` transform it's named for.

pub mod bit_integer;
pub mod bitstream;
pub mod const_;
pub mod expr;
pub mod hexdump;
pub mod mapping;
pub mod padding;
pub mod validator;

pub use bit_integer::{BitIntegerAdapter, FlagAdapter};
pub use const_::ConstAdapter;
pub use expr::ExprAdapter;
pub use hexdump::HexDumpAdapter;
pub use mapping::{MappingAdapter, MappingDefault};
pub use padding::PaddingAdapter;
pub use validator::{OneOf, Validate, ValidatorAdapter};
