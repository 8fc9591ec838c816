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

//! `Buffered`: materializes an intermediate byte buffer so the wrapped
//! construct sees an encoded/decoded view of the real stream (spec §4.5).
//! `BitStruct` is built on top of this, using it to turn real packed bytes
//! into a byte-per-bit view and back.

use std::sync::Arc;

use crate::construct::Construct;
use crate::container::Container;
use crate::error::Error;
use crate::flags::Flags;
use crate::name::Name;
use crate::stream::{read_exact, write_exact, Reader, Writer};
use crate::value::Value;

type Transform = Arc<dyn Fn(Vec<u8>) -> Result<Vec<u8>, Error> + Send + Sync>;
type Resizer = Arc<dyn Fn(usize) -> usize + Send + Sync>;

pub struct Buffered {
    name: Name,
    child: Box<dyn Construct>,
    encoder: Transform,
    decoder: Transform,
    resizer: Resizer,
}

impl Buffered {
    pub fn new(
        name: &str,
        child: Box<dyn Construct>,
        encoder: Transform,
        decoder: Transform,
        resizer: Resizer,
    ) -> Result<Self, Error> {
        Ok(Buffered {
            name: Name::new(name)?,
            child,
            encoder,
            decoder,
            resizer,
        })
    }
}

impl std::fmt::Debug for Buffered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffered")
            .field("name", &self.name)
            .field("child", &self.child)
            .finish_non_exhaustive()
    }
}

impl Construct for Buffered {
    fn name(&self) -> &Name {
        &self.name
    }

    fn flags(&self) -> Flags {
        Flags::empty()
    }

    fn parse_stream(&self, stream: &mut Reader<'_>, ctx: &mut Container) -> Result<Value, Error> {
        let child_size = self.child.sizeof_ctx(ctx)?;
        let n = (self.resizer)(child_size);
        let raw = read_exact(stream, &self.name.to_string(), n)?.to_vec();
        let decoded = (self.decoder)(raw)?;
        let mut inner = Reader::new(&decoded);
        self.child.parse_stream(&mut inner, ctx)
    }

    fn build_stream(&self, value: &Value, stream: &mut Writer, ctx: &mut Container) -> Result<(), Error> {
        let mut scratch = Writer::new();
        self.child.build_stream(value, &mut scratch, ctx)?;
        let encoded = (self.encoder)(scratch.into_vec())?;

        let child_size = self.child.sizeof_ctx(ctx)?;
        let expected = (self.resizer)(child_size);
        // Spec §9: the encoder must be length-preserving under the resizer;
        // a stateful or variable-length encoder will fail this check.
        if encoded.len() != expected {
            return Err(Error::Field {
                name: self.name.to_string(),
                expected,
                actual: encoded.len(),
            });
        }
        write_exact(stream, &self.name.to_string(), expected, &encoded)
    }

    fn sizeof_ctx(&self, ctx: &Container) -> Result<usize, Error> {
        Ok((self.resizer)(self.child.sizeof_ctx(ctx)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::StaticField;

    #[test]
    fn identity_transform_is_transparent() {
        let child = Box::new(StaticField::new("x", 4usize).unwrap());
        let identity: Transform = Arc::new(Ok);
        let resizer: Resizer = Arc::new(|n| n);
        let b = Buffered::new("buf", child, identity.clone(), identity, resizer).unwrap();
        let v = b.parse(&[1, 2, 3, 4]).unwrap();
        assert_eq!(v, Value::Bytes(vec![1, 2, 3, 4]));
        assert_eq!(b.build(&v).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn mismatched_encoder_length_is_rejected() {
        let child = Box::new(StaticField::new("x", 4usize).unwrap());
        let decoder: Transform = Arc::new(Ok);
        let bad_encoder: Transform = Arc::new(|mut v: Vec<u8>| {
            v.push(0);
            Ok(v)
        });
        let resizer: Resizer = Arc::new(|n| n);
        let b = Buffered::new("buf", child, bad_encoder, decoder, resizer).unwrap();
        assert!(b.build(&Value::Bytes(vec![1, 2, 3, 4])).is_err());
    }
}
