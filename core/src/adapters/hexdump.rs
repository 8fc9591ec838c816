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

//! `HexDump`: renders raw bytes as a human-readable hex string on parse and
//! parses one back on build (spec §4.7). Built on `hex`, the crate
//! `fuel-vm`'s tree reaches for the same job.

use crate::container::Container;
use crate::error::Error;
use crate::subconstruct::AdapterOps;
use crate::value::Value;

#[derive(Debug, Clone)]
pub struct HexDumpAdapter {
    linesize: usize,
}

impl HexDumpAdapter {
    pub fn new(linesize: usize) -> Result<Self, Error> {
        if linesize == 0 {
            return Err(Error::Value("HexDump linesize must be > 0".into()));
        }
        Ok(HexDumpAdapter { linesize })
    }
}

impl AdapterOps for HexDumpAdapter {
    fn decode(&self, value: Value, _ctx: &Container) -> Result<Value, Error> {
        let bytes = value.as_bytes()?;
        let lines: Vec<String> = bytes.chunks(self.linesize).map(hex::encode).collect();
        Ok(Value::Str(lines.join("\n")))
    }

    fn encode(&self, value: &Value, _ctx: &Container) -> Result<Value, Error> {
        let s = value.as_str()?;
        let stripped: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = hex::decode(&stripped).map_err(|e| Error::Value(format!("invalid hex: {e}")))?;
        Ok(Value::Bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_splits_into_lines_of_linesize() {
        let h = HexDumpAdapter::new(2).unwrap();
        let ctx = Container::new();
        let v = h.decode(Value::Bytes(vec![0xde, 0xad, 0xbe, 0xef]), &ctx).unwrap();
        assert_eq!(v, Value::Str("dead\nbeef".into()));
    }

    #[test]
    fn roundtrips_through_encode_and_decode() {
        let h = HexDumpAdapter::new(16).unwrap();
        let ctx = Container::new();
        let bytes = vec![1, 2, 3, 4, 5];
        let decoded = h.decode(Value::Bytes(bytes.clone()), &ctx).unwrap();
        let encoded = h.encode(&decoded, &ctx).unwrap();
        assert_eq!(encoded, Value::Bytes(bytes));
    }

    #[test]
    fn zero_linesize_is_rejected_at_construction() {
        assert!(HexDumpAdapter::new(0).is_err());
    }
}
