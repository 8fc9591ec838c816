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

//! `ExprAdapter`: a user-supplied pair of closures standing in for any
//! transform not already covered by a named adapter (spec §4.7).

use std::sync::Arc;

use crate::container::Container;
use crate::error::Error;
use crate::subconstruct::AdapterOps;
use crate::value::Value;

type ExprFn = Arc<dyn Fn(&Value, &Container) -> Result<Value, Error> + Send + Sync>;

#[derive(Clone)]
pub struct ExprAdapter {
    decode_fn: ExprFn,
    encode_fn: ExprFn,
}

impl ExprAdapter {
    pub fn new(decode_fn: ExprFn, encode_fn: ExprFn) -> Self {
        ExprAdapter { decode_fn, encode_fn }
    }
}

impl std::fmt::Debug for ExprAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExprAdapter").finish_non_exhaustive()
    }
}

impl AdapterOps for ExprAdapter {
    fn decode(&self, value: Value, ctx: &Container) -> Result<Value, Error> {
        (self.decode_fn)(&value, ctx)
    }

    fn encode(&self, value: &Value, ctx: &Container) -> Result<Value, Error> {
        (self.encode_fn)(value, ctx)
    }
}
