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

use std::sync::Arc;

use arrow_array::builder::{BooleanBuilder, StringBuilder};
use arrow_array::{Array, ArrayRef, Float64Array, StringArray};
use geovec_geometry::wkt_factory::WKT_MIN_PROBABLE_BYTES;

use crate::error::{Error, Result, RowError, RowResult};
use crate::internal_err;

/// Helper for writing batch kernel implementations over WKT columns.
///
/// The executor owns the row loop and its invariants: the output column has
/// exactly as many rows as the input, in input order; a null input row (on
/// either side for paired columns) yields a null output without invoking the
/// row closure; a closure failure ([`RowError`]) is logged and collapsed to a
/// null output without aborting the batch. Length and type mismatches are
/// rejected at construction, before any row is touched.
#[derive(Debug)]
pub struct WktExecutor<'a> {
    lhs: &'a StringArray,
    rhs: Option<&'a StringArray>,
}

impl<'a> WktExecutor<'a> {
    pub fn try_new_unary(geoms: &'a ArrayRef) -> Result<Self> {
        Ok(Self {
            lhs: as_wkt_array(geoms)?,
            rhs: None,
        })
    }

    pub fn try_new_binary(lhs: &'a ArrayRef, rhs: &'a ArrayRef) -> Result<Self> {
        let lhs = as_wkt_array(lhs)?;
        let rhs = as_wkt_array(rhs)?;
        if lhs.len() != rhs.len() {
            return Err(Error::ShapeMismatch {
                left: lhs.len(),
                right: rhs.len(),
            });
        }
        Ok(Self {
            lhs,
            rhs: Some(rhs),
        })
    }

    pub fn num_iterations(&self) -> usize {
        self.lhs.len()
    }

    /// Runs a unary predicate, producing a Boolean column.
    pub fn execute_boolean<F>(&self, mut invoke: F) -> Result<ArrayRef>
    where
        F: FnMut(&str) -> RowResult<bool>,
    {
        let mut builder = BooleanBuilder::with_capacity(self.num_iterations());
        for i in 0..self.num_iterations() {
            match value_at(self.lhs, i) {
                Some(wkt) => builder.append_option(recover(i, invoke(wkt))),
                None => builder.append_null(),
            }
        }
        Ok(Arc::new(builder.finish()))
    }

    /// Runs a binary predicate over row-paired columns, producing a Boolean
    /// column.
    pub fn execute_boolean_pairs<F>(&self, mut invoke: F) -> Result<ArrayRef>
    where
        F: FnMut(&str, &str) -> RowResult<bool>,
    {
        let rhs = self.require_rhs()?;
        let mut builder = BooleanBuilder::with_capacity(self.num_iterations());
        for i in 0..self.num_iterations() {
            match (value_at(self.lhs, i), value_at(rhs, i)) {
                (Some(a), Some(b)) => builder.append_option(recover(i, invoke(a, b))),
                _ => builder.append_null(),
            }
        }
        Ok(Arc::new(builder.finish()))
    }

    /// Runs a unary transform, producing a Utf8 column.
    pub fn execute_utf8<F>(&self, mut invoke: F) -> Result<ArrayRef>
    where
        F: FnMut(&str) -> RowResult<String>,
    {
        let mut builder = self.utf8_builder();
        for i in 0..self.num_iterations() {
            match value_at(self.lhs, i) {
                Some(wkt) => builder.append_option(recover(i, invoke(wkt))),
                None => builder.append_null(),
            }
        }
        Ok(Arc::new(builder.finish()))
    }

    /// Runs a binary transform over row-paired columns, producing a Utf8
    /// column.
    pub fn execute_utf8_pairs<F>(&self, mut invoke: F) -> Result<ArrayRef>
    where
        F: FnMut(&str, &str) -> RowResult<String>,
    {
        let rhs = self.require_rhs()?;
        let mut builder = self.utf8_builder();
        for i in 0..self.num_iterations() {
            match (value_at(self.lhs, i), value_at(rhs, i)) {
                (Some(a), Some(b)) => builder.append_option(recover(i, invoke(a, b))),
                _ => builder.append_null(),
            }
        }
        Ok(Arc::new(builder.finish()))
    }

    fn utf8_builder(&self) -> StringBuilder {
        StringBuilder::with_capacity(
            self.num_iterations(),
            WKT_MIN_PROBABLE_BYTES * self.num_iterations(),
        )
    }

    fn require_rhs(&self) -> Result<&'a StringArray> {
        match self.rhs {
            Some(rhs) => Ok(rhs),
            None => internal_err!("paired execution requested on a unary executor"),
        }
    }
}

fn value_at(array: &StringArray, i: usize) -> Option<&str> {
    if array.is_null(i) {
        None
    } else {
        Some(array.value(i))
    }
}

fn recover<T>(row: usize, result: RowResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            let kind = match error {
                RowError::Decode(_) => "decode",
                RowError::Kernel(_) => "kernel",
            };
            log::debug!("row {row} collapsed to null ({kind}): {error}");
            None
        }
    }
}

/// Downcasts a column to WKT text, rejecting other storage types.
pub fn as_wkt_array(array: &ArrayRef) -> Result<&StringArray> {
    array
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| Error::ColumnType {
            expected: "Utf8",
            actual: array.data_type().clone(),
        })
}

/// Downcasts a column to Float64 coordinates.
pub fn as_float64_array(array: &ArrayRef) -> Result<&Float64Array> {
    array
        .as_any()
        .downcast_ref::<Float64Array>()
        .ok_or_else(|| Error::ColumnType {
            expected: "Float64",
            actual: array.data_type().clone(),
        })
}
