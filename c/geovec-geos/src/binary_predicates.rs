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

//! Binary topological predicates over row-paired geometry columns.

use arrow_array::ArrayRef;
use geos::{Geom, Geometry};
use geovec_expr::error::{Result, RowError, RowResult};
use geovec_geometry::spatial_relation::SpatialRelationType;

use crate::executor::GeosExecutor;

/// ST_Equals() implementation using the geos crate: the two geometries
/// occupy exactly the same point set.
pub fn st_equals(lhs: &ArrayRef, rhs: &ArrayRef) -> Result<ArrayRef> {
    relation(lhs, rhs, SpatialRelationType::Equals)
}

/// ST_Touches() implementation using the geos crate: boundaries meet but
/// interiors do not intersect.
pub fn st_touches(lhs: &ArrayRef, rhs: &ArrayRef) -> Result<ArrayRef> {
    relation(lhs, rhs, SpatialRelationType::Touches)
}

/// ST_Overlaps() implementation using the geos crate: the intersection has
/// the dimension of both inputs and neither contains the other.
pub fn st_overlaps(lhs: &ArrayRef, rhs: &ArrayRef) -> Result<ArrayRef> {
    relation(lhs, rhs, SpatialRelationType::Overlaps)
}

/// ST_Crosses() implementation using the geos crate: the intersection has
/// lower dimension than the higher-dimensional input and equals neither.
pub fn st_crosses(lhs: &ArrayRef, rhs: &ArrayRef) -> Result<ArrayRef> {
    relation(lhs, rhs, SpatialRelationType::Crosses)
}

fn relation(lhs: &ArrayRef, rhs: &ArrayRef, relation: SpatialRelationType) -> Result<ArrayRef> {
    let executor = GeosExecutor::try_new_binary(lhs, rhs)?;
    executor.execute_boolean_pairs(|a, b| invoke_scalar(a, b, relation))
}

fn invoke_scalar(a: &Geometry, b: &Geometry, relation: SpatialRelationType) -> RowResult<bool> {
    let result = match relation {
        SpatialRelationType::Equals => a.equals(b),
        SpatialRelationType::Touches => a.touches(b),
        SpatialRelationType::Overlaps => a.overlaps(b),
        SpatialRelationType::Crosses => a.crosses(b),
    };
    result.map_err(|e| RowError::Kernel(format!("failed to evaluate {relation}: {e}")))
}

#[cfg(test)]
mod tests {
    use geovec_expr::error::Error;
    use geovec_testing::compare::assert_boolean_array_equal;
    use geovec_testing::create::wkt_array;
    use rstest::rstest;

    use super::*;

    const SQUARE_A: &str = "POLYGON ((1 1, 1 2, 2 2, 2 1, 1 1))";
    const SQUARE_B: &str = "POLYGON ((2 1, 3 1, 3 2, 2 2, 2 1))";

    #[test]
    fn equals_against_self_and_neighbor() {
        let lhs = wkt_array(&[Some(SQUARE_A), Some(SQUARE_B)]);
        let rhs = wkt_array(&[Some(SQUARE_A), Some(SQUARE_A)]);

        let result = st_equals(&lhs, &rhs).unwrap();
        assert_boolean_array_equal(&result, &[Some(true), Some(false)]);
    }

    #[test]
    fn equals_ignores_vertex_order() {
        let lhs = wkt_array(&[Some(SQUARE_A)]);
        let rhs = wkt_array(&[Some("POLYGON ((2 2, 2 1, 1 1, 1 2, 2 2))")]);

        let result = st_equals(&lhs, &rhs).unwrap();
        assert_boolean_array_equal(&result, &[Some(true)]);
    }

    #[test]
    fn touches_at_a_shared_edge() {
        let lhs = wkt_array(&[Some(SQUARE_A), Some(SQUARE_B)]);
        let rhs = wkt_array(&[Some(SQUARE_A), Some(SQUARE_A)]);

        let result = st_touches(&lhs, &rhs).unwrap();
        assert_boolean_array_equal(&result, &[Some(false), Some(true)]);
    }

    #[rstest]
    #[case(st_overlaps as fn(&ArrayRef, &ArrayRef) -> Result<ArrayRef>)]
    #[case(st_crosses as fn(&ArrayRef, &ArrayRef) -> Result<ArrayRef>)]
    fn edge_adjacent_squares_neither_overlap_nor_cross(
        #[case] predicate: fn(&ArrayRef, &ArrayRef) -> Result<ArrayRef>,
    ) {
        let lhs = wkt_array(&[Some(SQUARE_A), Some(SQUARE_B)]);
        let rhs = wkt_array(&[Some(SQUARE_A), Some(SQUARE_A)]);

        let result = predicate(&lhs, &rhs).unwrap();
        assert_boolean_array_equal(&result, &[Some(false), Some(false)]);
    }

    #[test]
    fn overlapping_squares_overlap() {
        let lhs = wkt_array(&[Some("POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0))")]);
        let rhs = wkt_array(&[Some("POLYGON ((1 1, 3 1, 3 3, 1 3, 1 1))")]);

        let result = st_overlaps(&lhs, &rhs).unwrap();
        assert_boolean_array_equal(&result, &[Some(true)]);
    }

    #[test]
    fn line_crossing_a_polygon_crosses() {
        let lhs = wkt_array(&[Some("LINESTRING (0 1.5, 4 1.5)")]);
        let rhs = wkt_array(&[Some(SQUARE_A)]);

        let result = st_crosses(&lhs, &rhs).unwrap();
        assert_boolean_array_equal(&result, &[Some(true)]);
    }

    #[test]
    fn decode_failure_on_one_side_nulls_only_that_row() {
        let lhs = wkt_array(&[Some(SQUARE_A), Some("POLYGON (bad"), Some(SQUARE_B)]);
        let rhs = wkt_array(&[Some(SQUARE_A), Some(SQUARE_A), None]);

        let result = st_equals(&lhs, &rhs).unwrap();
        assert_boolean_array_equal(&result, &[Some(true), None, None]);
    }

    #[test]
    fn unequal_lengths_abort_before_any_row() {
        let lhs = wkt_array(&[Some(SQUARE_A), Some(SQUARE_B)]);
        let rhs = wkt_array(&[Some(SQUARE_A)]);

        let error = st_touches(&lhs, &rhs).unwrap_err();
        assert!(matches!(error, Error::ShapeMismatch { left: 2, right: 1 }));
    }
}
