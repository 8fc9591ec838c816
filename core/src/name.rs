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

//! A descriptor's name: either a user-given identifier or "unnamed".
//!
//! `"_"` and anything starting with `"<"` are reserved for internal context
//! keys (`container::PARENT_KEY` and the embed call-mode machinery) and are
//! rejected at construction.

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Name {
    Named(String),
    Unnamed,
}

impl Name {
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.is_empty() || name == "_" || name.starts_with('<') {
            return Err(Error::ReservedName(name.to_owned()));
        }
        Ok(Name::Named(name.to_owned()))
    }

    pub const fn unnamed() -> Self {
        Name::Unnamed
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Name::Named(s) => Some(s),
            Name::Unnamed => None,
        }
    }

    pub fn is_named(&self) -> bool {
        self.as_str().is_some()
    }
}

/// A shared `Unnamed` instance, handy for descriptors (like `Pass`) that
/// never carry a name and so have nowhere to own one.
pub const UNNAMED: Name = Name::Unnamed;

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Name::Named(s) => write!(f, "{s}"),
            Name::Unnamed => write!(f, "unnamed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_reserved_names() {
        assert!(Name::new("_").is_err());
        assert!(Name::new("<obj>").is_err());
        assert!(Name::new("<anything").is_err());
        assert!(Name::new("").is_err());
    }

    #[test]
    fn accepts_ordinary_names() {
        assert!(Name::new("foo").is_ok());
    }
}
