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

//! Ergonomic factory functions over the raw descriptor types — the surface
//! most callers are expected to use instead of constructing
//! `Struct`/`AdaptedConstruct`/... directly.

use std::sync::Arc;

use crate::adapters::{
    BitIntegerAdapter, ConstAdapter, ExprAdapter, FlagAdapter, HexDumpAdapter, MappingAdapter,
    MappingDefault, OneOf, PaddingAdapter, ValidatorAdapter,
};
use crate::buffered::Buffered;
use crate::construct::{Construct, Pass};
use crate::container::Container;
use crate::error::Error;
use crate::fields::{FormatField, Length, StaticField};
use crate::packer::FormatCode;
use crate::struct_::Struct;
use crate::subconstruct::{AdaptedConstruct, Embed};
use crate::value::Value;

/// The process-wide no-op construct (spec §4.6).
pub const PASS: Pass = crate::construct::PASS;

pub fn structure(name: &str, children: Vec<Box<dyn Construct>>) -> Result<Struct, Error> {
    Struct::new(name, children)
}

pub fn unnested_structure(name: &str, children: Vec<Box<dyn Construct>>) -> Result<Struct, Error> {
    Struct::unnested(name, children)
}

pub fn static_field(name: &str, length: impl Into<Length>) -> Result<StaticField, Error> {
    StaticField::new(name, length)
}

pub fn format_field(name: &str, endian: char, code: FormatCode) -> Result<FormatField, Error> {
    FormatField::new(name, endian, code)
}

/// Marks `inner` for embedding into whichever `Struct` it's placed in (spec
/// §4.4).
pub fn embed<C: Construct>(inner: C) -> Embed<C> {
    Embed::new(inner)
}

pub fn buffered(
    name: &str,
    child: Box<dyn Construct>,
    encoder: Arc<dyn Fn(Vec<u8>) -> Result<Vec<u8>, Error> + Send + Sync>,
    decoder: Arc<dyn Fn(Vec<u8>) -> Result<Vec<u8>, Error> + Send + Sync>,
    resizer: Arc<dyn Fn(usize) -> usize + Send + Sync>,
) -> Result<Buffered, Error> {
    Buffered::new(name, child, encoder, decoder, resizer)
}

/// A generic bit-level integer field: `width` bits, optionally `signed`,
/// optionally byte-swapped in `bytesize`-bit groups (spec §4.7). Must sit
/// inside a [`bit_struct`].
pub fn bit_integer(
    name: &str,
    width: usize,
    swapped: bool,
    signed: bool,
    bytesize: usize,
) -> Result<AdaptedConstruct<StaticField, BitIntegerAdapter>, Error> {
    let field = StaticField::new(name, width)?;
    let adapter = BitIntegerAdapter::new(width, swapped, signed, bytesize)?;
    Ok(AdaptedConstruct::new(field, adapter))
}

/// An unsigned, unswapped bit field of `width` bits.
pub fn bit_field(name: &str, width: usize) -> Result<AdaptedConstruct<StaticField, BitIntegerAdapter>, Error> {
    bit_integer(name, width, false, false, 8)
}

/// A single bit, decoded as `bool` rather than an integer.
pub fn flag(name: &str) -> Result<AdaptedConstruct<StaticField, FlagAdapter>, Error> {
    let field = StaticField::new(name, 1usize)?;
    Ok(AdaptedConstruct::new(field, FlagAdapter))
}

/// A 4-bit unsigned field.
pub fn nibble(name: &str) -> Result<AdaptedConstruct<StaticField, BitIntegerAdapter>, Error> {
    bit_field(name, 4)
}

/// A single unsigned bit, decoded as an integer (0 or 1) rather than `bool`.
pub fn bit(name: &str) -> Result<AdaptedConstruct<StaticField, BitIntegerAdapter>, Error> {
    bit_field(name, 1)
}

/// `n_bits` of nameless padding inside a [`bit_struct`]: parsed and
/// discarded, per `Struct`'s ordinary nameless-child rule.
pub fn bit_padding(n_bits: usize) -> StaticField {
    StaticField::unnamed(n_bits)
}

/// Wraps `children` (a sequence of [`bit_field`]/[`flag`]/[`nibble`]/
/// [`bit_padding`]/... descriptors) in a [`Buffered`] that materializes the
/// underlying real bytes as a byte-per-bit sequence, so each child can
/// address individual bits through an ordinary byte-oriented `StaticField`
/// (spec §4.5, §6's `BitStruct`).
///
/// `total_bits` is the combined bit-width of `children`; the caller supplies
/// it explicitly rather than this function attempting to infer it, since
/// summing each child's `sizeof` would require a context that may not exist
/// yet.
pub fn bit_struct(name: &str, total_bits: usize, children: Vec<Box<dyn Construct>>) -> Result<Buffered, Error> {
    use crate::adapters::bitstream::{bits_to_bytes, pack_bits_to_bytes, unpack_bytes_to_bits};

    let inner = Struct::unnested(name, children)?;
    let encoder: Arc<dyn Fn(Vec<u8>) -> Result<Vec<u8>, Error> + Send + Sync> =
        Arc::new(|bits| Ok(pack_bits_to_bytes(bits)));
    let decoder: Arc<dyn Fn(Vec<u8>) -> Result<Vec<u8>, Error> + Send + Sync> =
        Arc::new(|bytes| Ok(unpack_bytes_to_bits(bytes)));
    let resizer: Arc<dyn Fn(usize) -> usize + Send + Sync> = Arc::new(|_| bits_to_bytes(total_bits));
    Buffered::new(name, Box::new(inner), encoder, decoder, resizer)
}

pub fn mapping<C: Construct + 'static>(
    child: C,
    decode_map: Vec<(Value, Value)>,
    encode_map: Vec<(Value, Value)>,
    decode_default: MappingDefault,
    encode_default: MappingDefault,
) -> AdaptedConstruct<C, MappingAdapter> {
    AdaptedConstruct::new(child, MappingAdapter::new(decode_map, encode_map, decode_default, encode_default))
}

pub fn const_<C: Construct + 'static>(child: C, expected: Value) -> AdaptedConstruct<C, ConstAdapter> {
    AdaptedConstruct::new(child, ConstAdapter::new(expected))
}

pub fn padding(length: usize, pattern: u8, strict: bool) -> Result<AdaptedConstruct<StaticField, PaddingAdapter>, Error> {
    let field = StaticField::unnamed(length);
    Ok(AdaptedConstruct::new(field, PaddingAdapter::new(length, pattern, strict)))
}

pub fn named_padding(
    name: &str,
    length: usize,
    pattern: u8,
    strict: bool,
) -> Result<AdaptedConstruct<StaticField, PaddingAdapter>, Error> {
    let field = StaticField::new(name, length)?;
    Ok(AdaptedConstruct::new(field, PaddingAdapter::new(length, pattern, strict)))
}

pub fn hex_dump<C: Construct + 'static>(child: C, linesize: usize) -> Result<AdaptedConstruct<C, HexDumpAdapter>, Error> {
    Ok(AdaptedConstruct::new(child, HexDumpAdapter::new(linesize)?))
}

pub fn expr_adapter<C: Construct + 'static>(
    child: C,
    decode_fn: Arc<dyn Fn(&Value, &Container) -> Result<Value, Error> + Send + Sync>,
    encode_fn: Arc<dyn Fn(&Value, &Container) -> Result<Value, Error> + Send + Sync>,
) -> AdaptedConstruct<C, ExprAdapter> {
    AdaptedConstruct::new(child, ExprAdapter::new(decode_fn, encode_fn))
}

pub fn one_of<C: Construct + 'static>(child: C, allowed: Vec<Value>) -> AdaptedConstruct<C, ValidatorAdapter<OneOf>> {
    AdaptedConstruct::new(child, ValidatorAdapter::new(OneOf::new(allowed)))
}
