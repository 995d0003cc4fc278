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
use geo_types::Geometry;
use geovec_expr::error::{Error, Result, RowError, RowResult};
use geovec_expr::executor::WktExecutor;
use geovec_geometry::precision::MAX_PRECISION_DIGITS;
use geovec_geometry::wkt_factory::write_geometry;
use wkt::TryFromWkt;

/// ST_PrecisionReduce() batch implementation.
///
/// Re-renders every coordinate of every geometry at `digits` significant
/// digits (ties to even), trimming trailing zeros: `digits = 6` maps
/// `1.5555555` to `1.55556`. The structural type of each geometry is
/// preserved. `digits` outside `1..=38` fails the whole call before any row
/// is processed.
pub fn st_precision_reduce(geoms: &ArrayRef, digits: u32) -> Result<ArrayRef> {
    if !(1..=MAX_PRECISION_DIGITS).contains(&digits) {
        return Err(Error::Parameter {
            name: "digits",
            message: format!("expected a digit count in 1..={MAX_PRECISION_DIGITS}, got {digits}"),
        });
    }

    let executor = WktExecutor::try_new_unary(geoms)?;
    executor.execute_utf8(|wkt_text| invoke_scalar(wkt_text, digits))
}

fn invoke_scalar(wkt_text: &str, digits: u32) -> RowResult<String> {
    let geometry: Geometry<f64> =
        Geometry::try_from_wkt_str(wkt_text).map_err(|e| RowError::Decode(e.to_string()))?;

    let mut out = String::with_capacity(wkt_text.len());
    write_geometry(&mut out, &geometry, Some(digits))
        .map_err(|e| RowError::Kernel(format!("failed to render WKT: {e}")))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use geovec_testing::compare::assert_string_array_equal;
    use geovec_testing::create::wkt_array;
    use rstest::rstest;

    use super::*;

    #[test]
    fn reduces_to_significant_digits() {
        let geoms = wkt_array(&[Some("POINT (1.5555555 1.55555555)")]);

        let result = st_precision_reduce(&geoms, 6).unwrap();
        assert_string_array_equal(&result, &[Some("POINT (1.55556 1.55556)")]);
    }

    #[test]
    fn structure_is_preserved() {
        let geoms = wkt_array(&[
            Some("LINESTRING (0.123456789 0, 1.987654321 1)"),
            Some("POLYGON ((0 0, 1.00000049 0, 0 1.00000049, 0 0))"),
        ]);

        let result = st_precision_reduce(&geoms, 4).unwrap();
        assert_string_array_equal(
            &result,
            &[
                Some("LINESTRING (0.1235 0, 1.988 1)"),
                Some("POLYGON ((0 0, 1 0, 0 1, 0 0))"),
            ],
        );
    }

    #[test]
    fn malformed_rows_become_null_without_aborting() {
        let geoms = wkt_array(&[
            Some("POINT (1.25 1.75)"),
            Some("POINT (oops)"),
            None,
            Some("POINT (2.5 2.5)"),
        ]);

        let result = st_precision_reduce(&geoms, 3).unwrap();
        assert_string_array_equal(
            &result,
            &[Some("POINT (1.25 1.75)"), None, None, Some("POINT (2.5 2.5)")],
        );
    }

    #[rstest]
    #[case(0)]
    #[case(39)]
    fn out_of_range_digits_fail_the_call(#[case] digits: u32) {
        let geoms = wkt_array(&[Some("POINT (1 1)")]);

        let error = st_precision_reduce(&geoms, digits).unwrap_err();
        assert!(matches!(error, Error::Parameter { name: "digits", .. }));
    }
}
