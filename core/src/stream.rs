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

//! Stream abstractions: a read cursor over an immutable byte slice for
//! parsing, and an append-only output buffer for building.

use crate::error::Error;
use crate::value::Value;

/// A read cursor over an immutable, borrowed byte slice.
#[derive(Debug)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Reader { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Reads exactly `n` bytes, failing with `Error::Field` if fewer remain.
    ///
    /// The source this crate is modeled on additionally demanded that the
    /// cursor have *exactly* `n` bytes remaining, which would forbid any
    /// field that isn't the stream's last. That behaviour is relaxed here to
    /// "at least `n` remaining" (see `DESIGN.md`).
    pub fn read(&mut self, n: usize) -> Result<&'a [u8], Error> {
        if self.remaining() < n {
            return Err(Error::Field {
                name: "<stream>".into(),
                expected: n,
                actual: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }
}

/// An append-only output buffer.
#[derive(Debug, Default)]
pub struct Writer {
    data: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Writer { data: Vec::new() }
    }

    pub fn write(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Reads exactly `n` bytes from `stream`, tagging any failure with `name`.
pub fn read_exact<'a>(stream: &mut Reader<'a>, name: &str, n: usize) -> Result<&'a [u8], Error> {
    stream.read(n).map_err(|_| Error::Field {
        name: name.to_owned(),
        expected: n,
        actual: stream.remaining(),
    })
}

/// Appends `data` to `stream`, requiring `data` be exactly `n` bytes long.
pub fn write_exact(stream: &mut Writer, name: &str, n: usize, data: &[u8]) -> Result<(), Error> {
    if data.len() != n {
        return Err(Error::Field {
            name: name.to_owned(),
            expected: n,
            actual: data.len(),
        });
    }
    stream.write(data);
    Ok(())
}

/// The byte-length `write_exact` should demand for a `Value` that isn't
/// already a raw byte sequence of known length (spec §4.1's "length of a
/// value is derived by kind").
pub fn value_length(value: &Value) -> Result<usize, Error> {
    value.legacy_width()
}

/// Decodes `text` as a raw byte sequence using a single-byte-preserving
/// mapping equivalent to ISO-8859-1 (spec §6): every `char` in `0..=0xFF`
/// maps to the byte of the same value.
pub fn latin1_encode(text: &str) -> Vec<u8> {
    text.chars().map(|c| c as u32 as u8).collect()
}

/// The inverse of [`latin1_encode`].
pub fn latin1_decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_allows_trailing_bytes() {
        let data = [1, 2, 3, 4, 5];
        let mut r = Reader::new(&data);
        assert_eq!(r.read(2).unwrap(), &[1, 2]);
        assert_eq!(r.remaining(), 3);
    }

    #[test]
    fn read_fails_when_short() {
        let data = [1, 2];
        let mut r = Reader::new(&data);
        assert!(r.read(3).is_err());
    }

    #[test]
    fn write_exact_rejects_length_mismatch() {
        let mut w = Writer::new();
        assert!(write_exact(&mut w, "f", 4, &[1, 2]).is_err());
        write_exact(&mut w, "f", 2, &[1, 2]).unwrap();
        assert_eq!(w.into_vec(), vec![1, 2]);
    }

    #[test]
    fn latin1_roundtrips_all_byte_values() {
        let bytes: Vec<u8> = (0..=255).collect();
        let text = latin1_decode(&bytes);
        assert_eq!(latin1_encode(&text), bytes);
    }
}
