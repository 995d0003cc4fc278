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

use crate::codec::write_wkt;
use crate::executor::GeosExecutor;

/// ST_MakeValid() implementation using the geos crate.
///
/// Repairs an invalid geometry, typically by splitting self-intersecting
/// structure into a collection of simple parts. Part ordering inside a
/// repaired collection is the kernel's canonical decomposition and is left
/// untouched.
pub fn st_make_valid(geoms: &ArrayRef) -> Result<ArrayRef> {
    let executor = GeosExecutor::try_new_unary(geoms)?;
    executor.execute_utf8(invoke_scalar)
}

fn invoke_scalar(geom: &Geometry) -> RowResult<String> {
    let repaired = geom
        .make_valid()
        .map_err(|e| RowError::Kernel(format!("failed to repair geometry: {e}")))?;
    write_wkt(&repaired)
}
