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

//! `Subconstruct` (forwards everything) and `Adapter` (forwards, but
//! transforms the value) — spec §4.2.

use crate::construct::{BuildFrame, Construct, ParseFrame};
use crate::container::Container;
use crate::error::Error;
use crate::flags::Flags;
use crate::name::Name;
use crate::stream::{Reader, Writer};
use crate::value::Value;

/// Wraps `inner`, inheriting its name and flags and forwarding all three
/// operations unchanged. On its own this is just a named pass-through; its
/// purpose is as the base every adapter builds on.
#[derive(Debug, Clone)]
pub struct Subconstruct<C> {
    inner: C,
}

impl<C: Construct> Subconstruct<C> {
    pub fn new(inner: C) -> Self {
        Subconstruct { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Construct> Construct for Subconstruct<C> {
    fn name(&self) -> &Name {
        self.inner.name()
    }

    fn flags(&self) -> Flags {
        self.inner.flags()
    }

    fn parse_stream(&self, stream: &mut Reader<'_>, ctx: &mut Container) -> Result<Value, Error> {
        self.inner.parse_stream(stream, ctx)
    }

    fn build_stream(&self, value: &Value, stream: &mut Writer, ctx: &mut Container) -> Result<(), Error> {
        self.inner.build_stream(value, stream, ctx)
    }

    fn sizeof_ctx(&self, ctx: &Container) -> Result<usize, Error> {
        self.inner.sizeof_ctx(ctx)
    }

    fn parse_frame(&self, stream: &mut Reader<'_>, ctx: &mut Container, frame: ParseFrame<'_>) -> Result<Value, Error> {
        self.inner.parse_frame(stream, ctx, frame)
    }

    fn build_frame(&self, value: &Value, stream: &mut Writer, ctx: &mut Container, frame: BuildFrame) -> Result<(), Error> {
        self.inner.build_frame(value, stream, ctx, frame)
    }
}

/// Wraps `inner`, ORing `EMBED` into its flag set. This is how a `Struct`'s
/// field is marked for embedding (spec §4.4 step 3: "If child has EMBED
/// flag..."). `EMBED` is never something a `Struct` declares about itself —
/// it's applied by whoever places it as a field of another struct.
#[derive(Debug, Clone)]
pub struct Embed<C> {
    inner: C,
}

impl<C: Construct> Embed<C> {
    pub fn new(inner: C) -> Self {
        Embed { inner }
    }
}

impl<C: Construct> Construct for Embed<C> {
    fn name(&self) -> &Name {
        self.inner.name()
    }

    fn flags(&self) -> Flags {
        self.inner.flags() | Flags::EMBED
    }

    fn parse_stream(&self, stream: &mut Reader<'_>, ctx: &mut Container) -> Result<Value, Error> {
        self.inner.parse_stream(stream, ctx)
    }

    fn build_stream(&self, value: &Value, stream: &mut Writer, ctx: &mut Container) -> Result<(), Error> {
        self.inner.build_stream(value, stream, ctx)
    }

    fn sizeof_ctx(&self, ctx: &Container) -> Result<usize, Error> {
        self.inner.sizeof_ctx(ctx)
    }

    fn parse_frame(&self, stream: &mut Reader<'_>, ctx: &mut Container, frame: ParseFrame<'_>) -> Result<Value, Error> {
        self.inner.parse_frame(stream, ctx, frame)
    }

    fn build_frame(&self, value: &Value, stream: &mut Writer, ctx: &mut Container, frame: BuildFrame) -> Result<(), Error> {
        self.inner.build_frame(value, stream, ctx, frame)
    }
}

/// The value-transformation half of an adapter (spec §4.2): `decode` runs
/// after the child parses, `encode` runs before the child builds. Adapters
/// never touch the stream.
pub trait AdapterOps: std::fmt::Debug {
    fn decode(&self, value: Value, ctx: &Container) -> Result<Value, Error>;
    fn encode(&self, value: &Value, ctx: &Container) -> Result<Value, Error>;
}

/// A `Subconstruct` plus an `AdapterOps`: decodes on parse, encodes on
/// build, size is unchanged from the child (spec §4.2).
#[derive(Debug, Clone)]
pub struct AdaptedConstruct<C, A> {
    inner: C,
    adapter: A,
}

impl<C: Construct, A: AdapterOps> AdaptedConstruct<C, A> {
    pub fn new(inner: C, adapter: A) -> Self {
        AdaptedConstruct { inner, adapter }
    }
}

impl<C: Construct, A: AdapterOps> Construct for AdaptedConstruct<C, A> {
    fn name(&self) -> &Name {
        self.inner.name()
    }

    fn flags(&self) -> Flags {
        self.inner.flags()
    }

    fn parse_stream(&self, stream: &mut Reader<'_>, ctx: &mut Container) -> Result<Value, Error> {
        let raw = self.inner.parse_stream(stream, ctx)?;
        self.adapter.decode(raw, ctx)
    }

    fn build_stream(&self, value: &Value, stream: &mut Writer, ctx: &mut Container) -> Result<(), Error> {
        let encoded = self.adapter.encode(value, ctx)?;
        self.inner.build_stream(&encoded, stream, ctx)
    }

    fn sizeof_ctx(&self, ctx: &Container) -> Result<usize, Error> {
        self.inner.sizeof_ctx(ctx)
    }

    /// Embedding bypasses the value transform entirely: the embedded child
    /// is expected to be a `Struct` (or adapter thereof) whose fields merge
    /// directly into the parent's container (spec §4.4, §4.8).
    fn parse_frame(&self, stream: &mut Reader<'_>, ctx: &mut Container, frame: ParseFrame<'_>) -> Result<Value, Error> {
        match frame {
            ParseFrame::Normal => self.parse_stream(stream, ctx),
            ParseFrame::Embedded { obj } => self.inner.parse_frame(stream, ctx, ParseFrame::Embedded { obj }),
        }
    }

    fn build_frame(&self, value: &Value, stream: &mut Writer, ctx: &mut Container, frame: BuildFrame) -> Result<(), Error> {
        match frame {
            BuildFrame::Normal => self.build_stream(value, stream, ctx),
            BuildFrame::Embedded => self.inner.build_frame(value, stream, ctx, BuildFrame::Embedded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::StaticField;

    #[derive(Debug)]
    struct Noop;
    impl AdapterOps for Noop {
        fn decode(&self, value: Value, _ctx: &Container) -> Result<Value, Error> {
            Ok(value)
        }
        fn encode(&self, value: &Value, _ctx: &Container) -> Result<Value, Error> {
            Ok(value.clone())
        }
    }

    #[test]
    fn subconstruct_forwards_everything() {
        let inner = StaticField::new("x", 2usize).unwrap();
        let sc = Subconstruct::new(inner);
        assert_eq!(sc.name().as_str(), Some("x"));
        assert_eq!(sc.parse(&[1, 2]).unwrap(), Value::Bytes(vec![1, 2]));
    }

    #[test]
    fn adapter_size_unchanged_from_child() {
        let inner = StaticField::new("x", 4usize).unwrap();
        let adapted = AdaptedConstruct::new(inner, Noop);
        assert_eq!(adapted.sizeof(None).unwrap(), 4);
    }
}
