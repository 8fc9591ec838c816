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

//! The real-bytes <-> byte-per-bit conversion a `BitStruct` uses its
//! `Buffered` wrapper for. Not itself spec'd as a named adapter; it's the
//! glue that lets `BitField`/`Flag`/`Nibble`/... address individual bits
//! through ordinary byte-oriented `StaticField`s (spec §4.5, §6).

/// Expands each real byte of `bytes`, MSB first, into 8 output bytes valued
/// 0 or 1.
pub fn unpack_bytes_to_bits(bytes: Vec<u8>) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() * 8);
    for byte in bytes {
        for i in (0..8).rev() {
            out.push((byte >> i) & 1);
        }
    }
    out
}

/// The inverse of [`unpack_bytes_to_bits`]: packs a byte-per-bit sequence
/// back into real bytes, MSB first, zero-padding the final byte if `bits`
/// isn't a multiple of 8 long.
pub fn pack_bits_to_bytes(bits: Vec<u8>) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | (b & 1)) << (8 - chunk.len()))
        .collect()
}

/// Bit count -> real byte count, rounding up.
pub fn bits_to_bytes(n_bits: usize) -> usize {
    n_bits.div_ceil(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_whole_bytes() {
        let bytes = vec![0xE1, 0x1F];
        let bits = unpack_bytes_to_bits(bytes.clone());
        assert_eq!(bits.len(), 16);
        assert_eq!(pack_bits_to_bytes(bits), bytes);
    }

    #[test]
    fn first_byte_msb_first() {
        let bits = unpack_bytes_to_bits(vec![0b1000_0001]);
        assert_eq!(bits, vec![1, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn bits_to_bytes_rounds_up() {
        assert_eq!(bits_to_bytes(1), 1);
        assert_eq!(bits_to_bytes(8), 1);
        assert_eq!(bits_to_bytes(9), 2);
    }
}
