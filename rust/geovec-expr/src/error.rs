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

use arrow_schema::DataType;

/// Call-level failure: raised before any row is processed and never leaves a
/// partial result column behind.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("geometry columns have mismatched lengths ({left} vs {right})")]
    ShapeMismatch { left: usize, right: usize },

    #[error("invalid {name} parameter: {message}")]
    Parameter { name: &'static str, message: String },

    #[error("{op} expects {expected} input column(s), got {actual}")]
    ColumnCount {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("expected a {expected} column, got {actual}")]
    ColumnType {
        expected: &'static str,
        actual: DataType,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Row-level failure: recovered by the executor, which emits a null output
/// for the offending row and keeps processing the batch.
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error("WKT parse error: {0}")]
    Decode(String),

    #[error("geometry kernel error: {0}")]
    Kernel(String),
}

pub type RowResult<T> = std::result::Result<T, RowError>;

/// Returns an [`Error::Internal`] from the enclosing function.
#[macro_export]
macro_rules! internal_err {
    ($($arg:tt)*) => {
        return Err($crate::error::Error::Internal(format!($($arg)*)))
    };
}
