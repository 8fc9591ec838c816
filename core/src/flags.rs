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

//! The flag bitset carried by every descriptor. Only `EMBED` changes
//! behaviour in this core; the rest are carried through unchanged so
//! extensions built on top of this crate have somewhere to put their own
//! bits.

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flags: u8 {
        const COPY_CONTEXT = 0b0001;
        const DYNAMIC       = 0b0010;
        const EMBED         = 0b0100;
        const NESTING       = 0b1000;
    }
}

impl Flags {
    /// Unions a set of children's flags into one, per `inherit_flags`.
    pub fn inherit(children: &[Flags]) -> Flags {
        children.iter().fold(Flags::empty(), |acc, f| acc | *f)
    }

    pub fn is_flag(self, flag: Flags) -> bool {
        self.contains(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inherit_unions_children() {
        let f = Flags::inherit(&[Flags::EMBED, Flags::DYNAMIC]);
        assert!(f.is_flag(Flags::EMBED));
        assert!(f.is_flag(Flags::DYNAMIC));
        assert!(!f.is_flag(Flags::NESTING));
    }
}
