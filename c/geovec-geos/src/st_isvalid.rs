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
use geos::{Geom, Geometry};
use geovec_expr::error::{Result, RowError, RowResult};

use crate::executor::GeosExecutor;

/// ST_IsValid() implementation using the geos crate.
///
/// Simple-feature validity: rings closed and non-self-intersecting. A row
/// that fails to decode is an error row (null), never `false`.
pub fn st_is_valid(geoms: &ArrayRef) -> Result<ArrayRef> {
    let executor = GeosExecutor::try_new_unary(geoms)?;
    executor.execute_boolean(invoke_scalar)
}

fn invoke_scalar(geom: &Geometry) -> RowResult<bool> {
    geom.is_valid()
        .map_err(|e| RowError::Kernel(format!("failed to test validity: {e}")))
}
