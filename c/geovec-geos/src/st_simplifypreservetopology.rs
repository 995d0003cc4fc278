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
use geovec_expr::error::{Error, Result, RowError, RowResult};

use crate::codec::write_wkt;
use crate::executor::GeosExecutor;

/// ST_SimplifyPreserveTopology() implementation using the geos crate.
///
/// Reduces vertex count within `tolerance` without introducing
/// self-intersections or collapsing rings. A non-finite or negative
/// tolerance fails the whole call before any row is processed.
pub fn st_simplify_preserve_topology(geoms: &ArrayRef, tolerance: f64) -> Result<ArrayRef> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(Error::Parameter {
            name: "tolerance",
            message: format!("expected a finite non-negative tolerance, got {tolerance}"),
        });
    }

    let executor = GeosExecutor::try_new_unary(geoms)?;
    executor.execute_utf8(|geom| invoke_scalar(geom, tolerance))
}

fn invoke_scalar(geom: &Geometry, tolerance: f64) -> RowResult<String> {
    let simplified = geom
        .topology_preserve_simplify(tolerance)
        .map_err(|e| RowError::Kernel(format!("failed to simplify geometry: {e}")))?;
    write_wkt(&simplified)
}
