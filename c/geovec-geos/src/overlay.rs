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

/// ST_Intersection() implementation using the geos crate.
///
/// The result's geometric type is whatever the point-set intersection turns
/// out to be. An empty intersection is a valid, non-null row (an
/// empty-geometry WKT token); only decode/kernel failures produce nulls.
pub fn st_intersection(lhs: &ArrayRef, rhs: &ArrayRef) -> Result<ArrayRef> {
    let executor = GeosExecutor::try_new_binary(lhs, rhs)?;
    executor.execute_utf8_pairs(invoke_scalar)
}

fn invoke_scalar(a: &Geometry, b: &Geometry) -> RowResult<String> {
    let intersection = a
        .intersection(b)
        .map_err(|e| RowError::Kernel(format!("failed to compute intersection: {e}")))?;
    write_wkt(&intersection)
}

#[cfg(test)]
mod tests {
    use arrow_array::{Array, StringArray};
    use geos::Geom;
    use geovec_testing::compare::assert_geometry_array_equal;
    use geovec_testing::create::wkt_array;

    use super::*;

    const SQUARE_A: &str = "POLYGON ((1 1, 1 2, 2 2, 2 1, 1 1))";
    const SQUARE_B: &str = "POLYGON ((2 1, 3 1, 3 2, 2 2, 2 1))";

    #[test]
    fn adjacent_squares_intersect_in_their_shared_edge() {
        let lhs = wkt_array(&[Some(SQUARE_A)]);
        let rhs = wkt_array(&[Some(SQUARE_B)]);

        let result = st_intersection(&lhs, &rhs).unwrap();
        assert_geometry_array_equal(&result, &[Some("LINESTRING (2 2, 2 1)")]);
    }

    #[test]
    fn commutative_up_to_point_set_equality() {
        let lhs = wkt_array(&[Some(SQUARE_A)]);
        let rhs = wkt_array(&[Some(SQUARE_B)]);

        let forward = st_intersection(&lhs, &rhs).unwrap();
        let backward = st_intersection(&rhs, &lhs).unwrap();

        let forward = forward.as_any().downcast_ref::<StringArray>().unwrap();
        assert_geometry_array_equal(&backward, &[Some(forward.value(0))]);
    }

    #[test]
    fn empty_intersection_is_not_null() {
        let lhs = wkt_array(&[Some("POLYGON ((0 0, 1 0, 1 1, 0 1, 0 0))")]);
        let rhs = wkt_array(&[Some("POLYGON ((5 5, 6 5, 6 6, 5 6, 5 5))")]);

        let result = st_intersection(&lhs, &rhs).unwrap();
        let result = result.as_any().downcast_ref::<StringArray>().unwrap();

        assert!(!result.is_null(0));
        let empty = geos::Geometry::new_from_wkt(result.value(0)).unwrap();
        assert!(empty.is_empty().unwrap());
    }

    #[test]
    fn error_rows_are_null_and_isolated() {
        let lhs = wkt_array(&[Some(SQUARE_A), Some("nonsense"), Some(SQUARE_A)]);
        let rhs = wkt_array(&[Some(SQUARE_B), Some(SQUARE_B), Some(SQUARE_A)]);

        let result = st_intersection(&lhs, &rhs).unwrap();
        assert_geometry_array_equal(
            &result,
            &[Some("LINESTRING (2 2, 2 1)"), None, Some(SQUARE_A)],
        );
    }
}
