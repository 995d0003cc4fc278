// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use arrow_array::ArrayRef;
use geos::Geometry;
use geovec_expr::error::{Result, RowResult};
use geovec_expr::executor::WktExecutor;

use crate::codec::parse_wkt;

/// Helper for writing geos kernel implementations.
///
/// Layers WKT decoding on top of [`WktExecutor`]: kernels receive parsed
/// geometries and never touch text. A row whose WKT fails to parse follows
/// the executor's row-error policy (null output, batch continues), and for
/// paired columns the left element is decoded first.
pub struct GeosExecutor<'a> {
    inner: WktExecutor<'a>,
}

impl<'a> GeosExecutor<'a> {
    pub fn try_new_unary(geoms: &'a ArrayRef) -> Result<Self> {
        Ok(Self {
            inner: WktExecutor::try_new_unary(geoms)?,
        })
    }

    pub fn try_new_binary(lhs: &'a ArrayRef, rhs: &'a ArrayRef) -> Result<Self> {
        Ok(Self {
            inner: WktExecutor::try_new_binary(lhs, rhs)?,
        })
    }

    pub fn num_iterations(&self) -> usize {
        self.inner.num_iterations()
    }

    pub fn execute_boolean<F>(&self, mut invoke: F) -> Result<ArrayRef>
    where
        F: FnMut(&Geometry) -> RowResult<bool>,
    {
        self.inner.execute_boolean(|wkt| invoke(&parse_wkt(wkt)?))
    }

    pub fn execute_utf8<F>(&self, mut invoke: F) -> Result<ArrayRef>
    where
        F: FnMut(&Geometry) -> RowResult<String>,
    {
        self.inner.execute_utf8(|wkt| invoke(&parse_wkt(wkt)?))
    }

    pub fn execute_boolean_pairs<F>(&self, mut invoke: F) -> Result<ArrayRef>
    where
        F: FnMut(&Geometry, &Geometry) -> RowResult<bool>,
    {
        self.inner
            .execute_boolean_pairs(|a, b| invoke(&parse_wkt(a)?, &parse_wkt(b)?))
    }

    pub fn execute_utf8_pairs<F>(&self, mut invoke: F) -> Result<ArrayRef>
    where
        F: FnMut(&Geometry, &Geometry) -> RowResult<String>,
    {
        self.inner
            .execute_utf8_pairs(|a, b| invoke(&parse_wkt(a)?, &parse_wkt(b)?))
    }
}
