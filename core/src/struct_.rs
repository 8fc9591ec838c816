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

//! `Struct`: an ordered sequence of named subconstructs, with the
//! nested-context and embed rules from spec §4.4 and §4.8.

use crate::construct::{BuildFrame, Construct, ParseFrame};
use crate::container::Container;
use crate::error::Error;
use crate::flags::Flags;
use crate::name::Name;
use crate::stream::{Reader, Writer};
use crate::value::Value;

#[derive(Debug)]
pub struct Struct {
    name: Name,
    children: Vec<Box<dyn Construct>>,
    nested: bool,
}

impl Struct {
    /// Builds a struct with `nested = true` (spec §4.4's default).
    ///
    /// A `Struct`'s own flag set starts empty: `EMBED` is not something a
    /// struct declares about itself, it's applied by whoever wraps it as a
    /// child of another struct (see `Embed` in `subconstruct.rs`, used via
    /// `builders::embed`).
    pub fn new(name: &str, children: Vec<Box<dyn Construct>>) -> Result<Self, Error> {
        Ok(Struct {
            name: Name::new(name)?,
            children,
            nested: true,
        })
    }

    pub fn unnested(name: &str, children: Vec<Box<dyn Construct>>) -> Result<Self, Error> {
        Ok(Struct {
            name: Name::new(name)?,
            children,
            nested: false,
        })
    }

    pub fn is_nested(&self) -> bool {
        self.nested
    }

    fn parse_children(
        &self,
        stream: &mut Reader<'_>,
        ctx: &mut Container,
        obj: &mut Container,
    ) -> Result<(), Error> {
        for child in &self.children {
            if child.flags().contains(Flags::EMBED) {
                log::trace!("struct {}: embedding child {}", self.name, child.name());
                child.parse_frame(stream, ctx, ParseFrame::Embedded { obj })?;
            } else if let Some(name) = child.name().as_str() {
                let value = child.parse_stream(stream, ctx)?;
                obj.set(name, value.clone());
                ctx.set(name, value);
            } else {
                child.parse_stream(stream, ctx)?;
            }
        }
        Ok(())
    }

    fn build_children(
        &self,
        obj: &Container,
        stream: &mut Writer,
        ctx: &mut Container,
    ) -> Result<(), Error> {
        for child in &self.children {
            if child.flags().contains(Flags::EMBED) {
                log::trace!("struct {}: embedding child {}", self.name, child.name());
                child.build_frame(&Value::Container(obj.clone()), stream, ctx, BuildFrame::Embedded)?;
            } else if let Some(name) = child.name().as_str() {
                // Spec tolerates a caller-given value that isn't shaped like
                // this struct expects; a missing field falls back to `Null`
                // rather than panicking (see DESIGN.md).
                let subvalue = obj.get(name).cloned().unwrap_or(Value::Null);
                ctx.set(name, subvalue.clone());
                child.build_stream(&subvalue, stream, ctx)?;
            } else {
                child.build_stream(&Value::Null, stream, ctx)?;
            }
        }
        Ok(())
    }
}

impl Construct for Struct {
    fn name(&self) -> &Name {
        &self.name
    }

    fn flags(&self) -> Flags {
        Flags::empty()
    }

    fn parse_stream(&self, stream: &mut Reader<'_>, ctx: &mut Container) -> Result<Value, Error> {
        log::debug!("struct {}: entering (nested={})", self.name, self.nested);
        let mut obj = Container::new();
        if self.nested {
            let mut nested_ctx = ctx.clone().nested();
            self.parse_children(stream, &mut nested_ctx, &mut obj)?;
        } else {
            self.parse_children(stream, ctx, &mut obj)?;
        }
        Ok(Value::Container(obj))
    }

    fn build_stream(&self, value: &Value, stream: &mut Writer, ctx: &mut Container) -> Result<(), Error> {
        let obj = value.as_container()?;
        if self.nested {
            let mut nested_ctx = ctx.clone().nested();
            self.build_children(obj, stream, &mut nested_ctx)
        } else {
            self.build_children(obj, stream, ctx)
        }
    }

    fn sizeof_ctx(&self, ctx: &Container) -> Result<usize, Error> {
        let nested_ctx;
        let ctx_ref = if self.nested {
            nested_ctx = ctx.clone().nested();
            &nested_ctx
        } else {
            ctx
        };
        self.children.iter().map(|c| c.sizeof_ctx(ctx_ref)).sum()
    }

    /// The other half of the embed state machine (spec §4.8): when this
    /// struct is itself embedded into a parent, it writes directly into the
    /// parent-supplied `obj`/reuses the parent's `ctx` instead of allocating
    /// its own nested frame.
    fn parse_frame(&self, stream: &mut Reader<'_>, ctx: &mut Container, frame: ParseFrame<'_>) -> Result<Value, Error> {
        match frame {
            ParseFrame::Normal => self.parse_stream(stream, ctx),
            ParseFrame::Embedded { obj } => {
                log::trace!("struct {}: embedded, flattening into parent", self.name);
                self.parse_children(stream, ctx, obj)?;
                Ok(Value::Null)
            }
        }
    }

    fn build_frame(&self, value: &Value, stream: &mut Writer, ctx: &mut Container, frame: BuildFrame) -> Result<(), Error> {
        match frame {
            BuildFrame::Normal => self.build_stream(value, stream, ctx),
            BuildFrame::Embedded => {
                let obj = value.as_container()?;
                self.build_children(obj, stream, ctx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Container;
    use crate::fields::{FormatField, Length, StaticField};
    use crate::packer::FormatCode;

    fn ubint8(name: &str) -> Box<dyn Construct> {
        Box::new(FormatField::new(name, '>', FormatCode::U8).unwrap())
    }

    #[test]
    fn duplicate_names_overwrite_but_both_consume_bytes() {
        let s = Struct::new("s", vec![ubint8("a"), ubint8("a")]).unwrap();
        let v = s.parse(&[1, 2]).unwrap();
        let obj = v.as_container().unwrap();
        assert_eq!(obj.get("a"), Some(&Value::UInt(2)));
        assert_eq!(s.sizeof(None).unwrap(), 2);
    }

    #[test]
    fn later_field_observes_earlier_via_context() {
        let children: Vec<Box<dyn Construct>> = vec![
            ubint8("len"),
            Box::new(StaticField::new("data", Length::from_context_key("len")).unwrap()),
        ];
        let s = Struct::new("p", children).unwrap();
        let v = s.parse(&[2, 0xaa, 0xbb, 0xff]).unwrap();
        let obj = v.as_container().unwrap();
        assert_eq!(obj.get("len"), Some(&Value::UInt(2)));
        assert_eq!(obj.get("data"), Some(&Value::Bytes(vec![0xaa, 0xbb])));
    }

    #[test]
    fn embed_flattens_fields_into_parent() {
        let inner = Struct::new("inner", vec![ubint8("d"), ubint8("e")]).unwrap();
        let embedded = crate::subconstruct::Embed::new(inner);
        let outer = Struct::new("outer", vec![ubint8("c"), Box::new(embedded)]).unwrap();
        let v = outer.parse(&[7, 15, 1]).unwrap();
        let obj = v.as_container().unwrap();
        assert_eq!(obj.get("c"), Some(&Value::UInt(7)));
        assert_eq!(obj.get("d"), Some(&Value::UInt(15)));
        assert_eq!(obj.get("e"), Some(&Value::UInt(1)));
        // `inner` is not itself a named key in the flattened output.
        assert_eq!(obj.get("inner"), None);

        let built = outer.build(&v).unwrap();
        assert_eq!(built, vec![7, 15, 1]);
    }

    #[test]
    fn nested_context_reaches_up_to_root() {
        let mut ctx = Container::new();
        ctx.set("root_val", Value::Int(42));
        let nested = ctx.clone().nested();
        let grandchild = nested.clone().nested();
        assert_eq!(grandchild.get_chained("root_val"), Some(&Value::Int(42)));
    }
}
