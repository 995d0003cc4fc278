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
use geovec_expr::catalog::{GeometryOp, OpParams};
use geovec_expr::error::{Error, Result};
use geovec_expr::internal_err;
use geovec_functions::{st_point, st_precision_reduce};
use geovec_geos::{
    st_crosses, st_equals, st_geometry_type, st_intersection, st_is_simple, st_is_valid,
    st_make_valid, st_overlaps, st_simplify_preserve_topology, st_touches,
};

/// Executes one catalog operation over its input columns.
///
/// Column count and parameter kind are checked against the operation's
/// descriptor before dispatching, so call-level failures leave no partial
/// result behind. The match is exhaustive over [`GeometryOp`]; adding a
/// catalog entry without wiring a kernel does not compile.
pub fn execute(op: GeometryOp, columns: &[ArrayRef], params: &OpParams) -> Result<ArrayRef> {
    let descriptor = op.descriptor();
    if columns.len() != descriptor.arity.num_columns() {
        return Err(Error::ColumnCount {
            op: descriptor.name,
            expected: descriptor.arity.num_columns(),
            actual: columns.len(),
        });
    }
    descriptor.validate_params(params)?;

    match op {
        GeometryOp::Point => st_point(&columns[0], &columns[1]),
        GeometryOp::IsValid => st_is_valid(&columns[0]),
        GeometryOp::Intersection => st_intersection(&columns[0], &columns[1]),
        GeometryOp::PrecisionReduce => {
            let OpParams::Digits(digits) = params else {
                internal_err!("validated digits parameter missing for {}", descriptor.name)
            };
            let digits = u32::try_from(*digits).map_err(|_| Error::Parameter {
                name: "digits",
                message: format!("expected a non-negative digit count, got {digits}"),
            })?;
            st_precision_reduce(&columns[0], digits)
        }
        GeometryOp::Equals => st_equals(&columns[0], &columns[1]),
        GeometryOp::Touches => st_touches(&columns[0], &columns[1]),
        GeometryOp::Overlaps => st_overlaps(&columns[0], &columns[1]),
        GeometryOp::Crosses => st_crosses(&columns[0], &columns[1]),
        GeometryOp::IsSimple => st_is_simple(&columns[0]),
        GeometryOp::MakeValid => st_make_valid(&columns[0]),
        GeometryOp::GeometryType => st_geometry_type(&columns[0]),
        GeometryOp::SimplifyPreserveTopology => {
            let OpParams::Tolerance(tolerance) = params else {
                internal_err!(
                    "validated tolerance parameter missing for {}",
                    descriptor.name
                )
            };
            st_simplify_preserve_topology(&columns[0], *tolerance)
        }
    }
}
