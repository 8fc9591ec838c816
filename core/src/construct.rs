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

//! The construct contract every descriptor satisfies, plus `Pass`.

use crate::container::Container;
use crate::error::Error;
use crate::flags::Flags;
use crate::name::Name;
use crate::stream::{latin1_encode, Reader, Writer};
use crate::value::Value;

/// Call-mode for an embedded `Struct`'s `parse_frame`.
///
/// This replaces the source's reserved `"<obj>"` context key (spec §9
/// REDESIGN FLAGS): rather than smuggling a mutable alias to the output
/// container through a string-keyed map, the caller passes it explicitly.
/// See `DESIGN.md` for why the literal reserved-key mechanism doesn't
/// translate to safe Rust.
pub(crate) enum ParseFrame<'a> {
    Normal,
    Embedded { obj: &'a mut Container },
}

/// Call-mode for an embedded `Struct`'s `build_frame`; the counterpart of
/// [`ParseFrame`], replacing the `"<unnested>"` key.
pub(crate) enum BuildFrame {
    Normal,
    Embedded,
}

/// The polymorphic interface every descriptor satisfies.
pub trait Construct: std::fmt::Debug {
    /// The descriptor's name, or `Name::Unnamed`.
    fn name(&self) -> &Name;

    /// The descriptor's flag set (spec §3: only `EMBED` is behaviourally
    /// significant in this core).
    fn flags(&self) -> Flags;

    /// Parses one value from `stream`, reading/writing named results into
    /// `ctx` as needed.
    fn parse_stream(&self, stream: &mut Reader<'_>, ctx: &mut Container) -> Result<Value, Error>;

    /// Builds `value` into `stream`.
    fn build_stream(&self, value: &Value, stream: &mut Writer, ctx: &mut Container) -> Result<(), Error>;

    /// Computes this descriptor's size given a context. Fails with a plain
    /// `Error` (callers should use [`Construct::sizeof`] to get the wrapped
    /// `Error::Sizeof` spec §7 requires).
    fn sizeof_ctx(&self, ctx: &Container) -> Result<usize, Error>;

    /// Parses `bytes` with a fresh context. The public entry point.
    fn parse(&self, bytes: &[u8]) -> Result<Value, Error> {
        let mut stream = Reader::new(bytes);
        let mut ctx = Container::new();
        self.parse_stream(&mut stream, &mut ctx)
    }

    /// Parses `text`, decoded as raw bytes via a Latin-1-equivalent mapping
    /// (spec §6).
    fn parse_text(&self, text: &str) -> Result<Value, Error> {
        self.parse(&latin1_encode(text))
    }

    /// Builds `value` into a fresh output buffer. The public entry point.
    fn build(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let mut stream = Writer::new();
        let mut ctx = Container::new();
        self.build_stream(value, &mut stream, &mut ctx)?;
        Ok(stream.into_vec())
    }

    /// Computes this descriptor's size, wrapping any failure as
    /// `Error::Sizeof` (spec §4.1, §7).
    fn sizeof(&self, ctx: Option<&Container>) -> Result<usize, Error> {
        let fresh = Container::new();
        let ctx = ctx.unwrap_or(&fresh);
        self.sizeof_ctx(ctx).map_err(|e| Error::Sizeof(Box::new(e)))
    }

    /// Internal embed extension point for parsing; see [`ParseFrame`].
    /// The default forwards transparently (used by `Subconstruct`/`Adapter`
    /// and any leaf construct that happens to be embedded); only `Struct`
    /// gives it real meaning.
    fn parse_frame(
        &self,
        stream: &mut Reader<'_>,
        ctx: &mut Container,
        frame: ParseFrame<'_>,
    ) -> Result<Value, Error> {
        match frame {
            ParseFrame::Normal => self.parse_stream(stream, ctx),
            ParseFrame::Embedded { obj } => match self.parse_stream(stream, ctx)? {
                Value::Container(c) => {
                    obj.merge(c);
                    Ok(Value::Null)
                }
                other => Err(Error::Value(format!(
                    "embedded construct {:?} must produce a container, got {other:?}",
                    self.name()
                ))),
            },
        }
    }

    /// Internal embed extension point for building; see [`BuildFrame`].
    fn build_frame(
        &self,
        value: &Value,
        stream: &mut Writer,
        ctx: &mut Container,
        frame: BuildFrame,
    ) -> Result<(), Error> {
        let _ = frame;
        self.build_stream(value, stream, ctx)
    }
}

/// A no-op singleton construct: parse returns `Null`, build writes nothing,
/// size is 0. Used as a default branch and as a "pass the value through
/// unchanged" sentinel in adapter defaults (spec §4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pass;

/// The process-wide `Pass` instance (spec §9: "a plain immutable value
/// suffices").
pub const PASS: Pass = Pass;

impl Construct for Pass {
    fn name(&self) -> &Name {
        &crate::name::UNNAMED
    }

    fn flags(&self) -> Flags {
        Flags::empty()
    }

    fn parse_stream(&self, _stream: &mut Reader<'_>, _ctx: &mut Container) -> Result<Value, Error> {
        Ok(Value::Null)
    }

    fn build_stream(&self, _value: &Value, _stream: &mut Writer, _ctx: &mut Container) -> Result<(), Error> {
        Ok(())
    }

    fn sizeof_ctx(&self, _ctx: &Container) -> Result<usize, Error> {
        Ok(0)
    }
}

/// Lets a type-erased `Box<dyn Construct>` be used anywhere a concrete
/// `Construct` is expected (e.g. as the inner type of `AdaptedConstruct`),
/// the same way `Box<dyn std::error::Error>` implements `Error`.
impl<T: Construct + ?Sized> Construct for Box<T> {
    fn name(&self) -> &Name {
        (**self).name()
    }

    fn flags(&self) -> Flags {
        (**self).flags()
    }

    fn parse_stream(&self, stream: &mut Reader<'_>, ctx: &mut Container) -> Result<Value, Error> {
        (**self).parse_stream(stream, ctx)
    }

    fn build_stream(&self, value: &Value, stream: &mut Writer, ctx: &mut Container) -> Result<(), Error> {
        (**self).build_stream(value, stream, ctx)
    }

    fn sizeof_ctx(&self, ctx: &Container) -> Result<usize, Error> {
        (**self).sizeof_ctx(ctx)
    }

    fn parse_frame(
        &self,
        stream: &mut Reader<'_>,
        ctx: &mut Container,
        frame: ParseFrame<'_>,
    ) -> Result<Value, Error> {
        (**self).parse_frame(stream, ctx, frame)
    }

    fn build_frame(
        &self,
        value: &Value,
        stream: &mut Writer,
        ctx: &mut Container,
        frame: BuildFrame,
    ) -> Result<(), Error> {
        (**self).build_frame(value, stream, ctx, frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_is_a_true_no_op() {
        let mut ctx = Container::new();
        assert_eq!(PASS.parse(&[1, 2, 3]).unwrap(), Value::Null);
        assert_eq!(PASS.build(&Value::Int(5)).unwrap(), Vec::<u8>::new());
        assert_eq!(PASS.sizeof_ctx(&mut ctx).unwrap(), 0);
    }
}
