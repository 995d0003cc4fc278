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
use geos::{Geom, Geometry, GeometryTypes};
use geovec_expr::error::{Result, RowError, RowResult};

use crate::executor::GeosExecutor;

/// ST_GeometryType() implementation using the geos crate.
///
/// Returns the structural type tag of each geometry as an uppercase token,
/// independent of coordinate values.
pub fn st_geometry_type(geoms: &ArrayRef) -> Result<ArrayRef> {
    let executor = GeosExecutor::try_new_unary(geoms)?;
    executor.execute_utf8(invoke_scalar)
}

fn invoke_scalar(geom: &Geometry) -> RowResult<String> {
    let geom_type = geom
        .geometry_type()
        .map_err(|e| RowError::Kernel(format!("failed to get geometry type: {e}")))?;

    let tag = match geom_type {
        GeometryTypes::Point => "POINT",
        GeometryTypes::LineString => "LINESTRING",
        GeometryTypes::LinearRing => "LINEARRING",
        GeometryTypes::Polygon => "POLYGON",
        GeometryTypes::MultiPoint => "MULTIPOINT",
        GeometryTypes::MultiLineString => "MULTILINESTRING",
        GeometryTypes::MultiPolygon => "MULTIPOLYGON",
        GeometryTypes::GeometryCollection => "GEOMETRYCOLLECTION",
        other => {
            return Err(RowError::Kernel(format!(
                "unsupported geometry type: {other:?}"
            )))
        }
    };
    Ok(tag.to_string())
}

#[cfg(test)]
mod tests {
    use geovec_testing::compare::assert_string_array_equal;
    use geovec_testing::create::wkt_array;

    use super::*;

    #[test]
    fn uppercase_tags() {
        let geoms = wkt_array(&[
            Some("POLYGON ((2 1, 3 1, 3 2, 2 2, 2 8, 2 1))"),
            Some("POINT (2 3)"),
            Some("LINESTRING (0 0, 1 1)"),
            Some("MULTIPOLYGON (((0 0, 1 0, 0 1, 0 0)))"),
            Some("GEOMETRYCOLLECTION (POINT (1 2))"),
        ]);

        let result = st_geometry_type(&geoms).unwrap();
        assert_string_array_equal(
            &result,
            &[
                Some("POLYGON"),
                Some("POINT"),
                Some("LINESTRING"),
                Some("MULTIPOLYGON"),
                Some("GEOMETRYCOLLECTION"),
            ],
        );
    }

    #[test]
    fn tag_is_independent_of_coordinates() {
        let geoms = wkt_array(&[Some("POINT (0 0)"), Some("POINT (-1000.5 1e6)")]);

        let result = st_geometry_type(&geoms).unwrap();
        assert_string_array_equal(&result, &[Some("POINT"), Some("POINT")]);
    }

    #[test]
    fn decode_failure_yields_null_row() {
        let geoms = wkt_array(&[Some("POINT (1 1)"), Some("POINT ()"), None]);

        let result = st_geometry_type(&geoms).unwrap();
        assert_string_array_equal(&result, &[Some("POINT"), None, None]);
    }
}
