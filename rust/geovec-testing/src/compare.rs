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

use arrow_array::{Array, ArrayRef, BooleanArray, StringArray};
use geos::{Geom, Geometry};

/// Asserts that a Utf8 result column matches `expected` byte for byte,
/// including null positions.
pub fn assert_string_array_equal(actual: &ArrayRef, expected: &[Option<&str>]) {
    let actual = as_string(actual);
    assert_eq!(actual.len(), expected.len(), "column length");
    for (i, expected) in expected.iter().enumerate() {
        match expected {
            None => assert!(actual.is_null(i), "expected null at row {i}"),
            Some(expected) => {
                assert!(!actual.is_null(i), "unexpected null at row {i}");
                assert_eq!(actual.value(i), *expected, "row {i}");
            }
        }
    }
}

/// Asserts that a Boolean result column matches `expected`, including null
/// positions.
pub fn assert_boolean_array_equal(actual: &ArrayRef, expected: &[Option<bool>]) {
    let actual = actual
        .as_any()
        .downcast_ref::<BooleanArray>()
        .expect("Boolean result column");
    assert_eq!(actual.len(), expected.len(), "column length");
    for (i, expected) in expected.iter().enumerate() {
        match expected {
            None => assert!(actual.is_null(i), "expected null at row {i}"),
            Some(expected) => {
                assert!(!actual.is_null(i), "unexpected null at row {i}");
                assert_eq!(actual.value(i), *expected, "row {i}");
            }
        }
    }
}

/// Asserts that a WKT result column is point-set equal to `expected`, row by
/// row, including null positions.
///
/// Comparison goes through the geometry kernel's `equals`, so formatting
/// differences (coordinate order inside a ring, whitespace, trailing zeros)
/// do not fail the assertion.
pub fn assert_geometry_array_equal(actual: &ArrayRef, expected: &[Option<&str>]) {
    let actual = as_string(actual);
    assert_eq!(actual.len(), expected.len(), "column length");
    for (i, expected) in expected.iter().enumerate() {
        match expected {
            None => assert!(actual.is_null(i), "expected null at row {i}"),
            Some(expected) => {
                assert!(!actual.is_null(i), "unexpected null at row {i}");
                let actual_geom = parse(actual.value(i));
                let expected_geom = parse(expected);
                assert!(
                    actual_geom.equals(&expected_geom).unwrap(),
                    "row {i}: {} is not point-set equal to {expected}",
                    actual.value(i)
                );
            }
        }
    }
}

fn as_string(array: &ArrayRef) -> &StringArray {
    array
        .as_any()
        .downcast_ref::<StringArray>()
        .expect("Utf8 result column")
}

fn parse(wkt: &str) -> Geometry {
    Geometry::new_from_wkt(wkt).unwrap_or_else(|e| panic!("invalid WKT {wkt:?}: {e}"))
}
