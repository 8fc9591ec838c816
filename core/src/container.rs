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

//! `Container`: an ordered, string-keyed mapping used both as parsed output
//! and as the parse/build context threaded through a construct tree.

use crate::value::Value;

/// The reserved key under which a nested frame's parent context is stored.
pub const PARENT_KEY: &str = "_";

/// An ordered mapping from field names to values.
///
/// Insertion order is preserved so that building a container produced by a
/// parse round-trips byte-for-byte through a `Struct`'s declaration order.
/// Equality, per spec, compares the *set* of key-value pairs and ignores
/// order.
#[derive(Debug, Clone, Default)]
pub struct Container {
    entries: Vec<(String, Value)>,
}

impl Container {
    pub fn new() -> Self {
        Container { entries: Vec::new() }
    }

    /// Builds a container from `(name, value)` pairs, in order. Mirrors the
    /// source's `Container(P(k1, v1), P(k2, v2), ...)` helper constructor.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut c = Container::new();
        for (k, v) in pairs {
            c.set(k, v);
        }
        c
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Sets `key` to `value`, returning the previous value if any. Updating
    /// an existing key keeps its original position; a new key is appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(std::mem::replace(&mut slot.1, value))
        } else {
            self.entries.push((key, value));
            None
        }
    }

    pub fn delete(&mut self, key: &str) -> Option<Value> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns a fresh context nesting `self` under the reserved `"_"` key,
    /// per spec §4.4's "replace the incoming context by a fresh container
    /// whose only entry is `_` -> the previous context".
    pub fn nested(self) -> Container {
        let mut ctx = Container::new();
        ctx.set(PARENT_KEY, self);
        ctx
    }

    /// Walks up the `"_"` parent chain, looking for `key` in `self` and then
    /// each ancestor context in turn.
    pub fn get_chained(&self, key: &str) -> Option<&Value> {
        if let Some(v) = self.get(key) {
            return Some(v);
        }
        match self.get(PARENT_KEY) {
            Some(Value::Container(parent)) => parent.get_chained(key),
            _ => None,
        }
    }

    /// Appends every entry of `other` into `self`, overwriting on conflict.
    /// Used when a `Struct` embeds another `Struct`'s fields (spec §4.4).
    pub fn merge(&mut self, other: Container) {
        for (k, v) in other.entries {
            self.set(k, v);
        }
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl IntoIterator for Container {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, Value)> for Container {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Container::from_pairs(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_order() {
        let a = Container::from_pairs([("a".into(), Value::Int(1)), ("b".into(), Value::Int(2))]);
        let b = Container::from_pairs([("b".into(), Value::Int(2)), ("a".into(), Value::Int(1))]);
        assert_eq!(a, b);
    }

    #[test]
    fn set_preserves_position_on_update() {
        let mut c = Container::new();
        c.set("a", Value::Int(1));
        c.set("b", Value::Int(2));
        c.set("a", Value::Int(99));
        let keys: Vec<_> = c.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(c.get("a"), Some(&Value::Int(99)));
    }

    #[test]
    fn chained_lookup_walks_parents() {
        let mut root = Container::new();
        root.set("len", Value::Int(4));
        let child = root.nested();
        assert_eq!(child.get_chained("len"), Some(&Value::Int(4)));
        assert_eq!(child.get("len"), None);
    }

    #[test]
    fn merge_overwrites_conflicting_keys() {
        let mut a = Container::from_pairs([("x".into(), Value::Int(1))]);
        let b = Container::from_pairs([("x".into(), Value::Int(2)), ("y".into(), Value::Int(3))]);
        a.merge(b);
        assert_eq!(a.get("x"), Some(&Value::Int(2)));
        assert_eq!(a.get("y"), Some(&Value::Int(3)));
    }
}
