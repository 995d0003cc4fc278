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

use arrow_array::builder::StringBuilder;
use arrow_array::{Array, ArrayRef};
use geovec_expr::error::{Error, Result};
use geovec_expr::executor::as_float64_array;
use geovec_geometry::wkt_factory::{write_wkt_point, WKT_MIN_PROBABLE_BYTES};

/// ST_Point() batch implementation.
///
/// Builds a `POINT (<x> <y>)` WKT column from two equal-length Float64
/// coordinate columns. A null on either side yields a null row. Non-finite
/// coordinates have no WKT representation and also yield a null row.
pub fn st_point(x: &ArrayRef, y: &ArrayRef) -> Result<ArrayRef> {
    let x = as_float64_array(x)?;
    let y = as_float64_array(y)?;
    if x.len() != y.len() {
        return Err(Error::ShapeMismatch {
            left: x.len(),
            right: y.len(),
        });
    }

    let mut builder = StringBuilder::with_capacity(x.len(), WKT_MIN_PROBABLE_BYTES * x.len());
    for i in 0..x.len() {
        if x.is_null(i) || y.is_null(i) {
            builder.append_null();
            continue;
        }

        let (xi, yi) = (x.value(i), y.value(i));
        if !xi.is_finite() || !yi.is_finite() {
            log::debug!("row {i} collapsed to null: non-finite coordinate ({xi}, {yi})");
            builder.append_null();
            continue;
        }

        let mut wkt = String::with_capacity(WKT_MIN_PROBABLE_BYTES);
        write_wkt_point(&mut wkt, xi, yi)
            .map_err(|e| Error::Internal(format!("failed to format point: {e}")))?;
        builder.append_value(wkt);
    }

    Ok(Arc::new(builder.finish()))
}
