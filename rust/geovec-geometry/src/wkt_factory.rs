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

//! Writes [`geo_types`] geometries as WKT.
//!
//! Coordinates are rendered with `f64`'s shortest round-trip representation
//! (no trailing zeros, no exponent notation), optionally after rounding to a
//! number of significant digits. This is the output path for operations that
//! produce geometry text without going through the geometry kernel.

use std::fmt::{self, Write};

use geo_types::{Coord, Geometry, LineString, Polygon};

use crate::precision::reduce_precision;

/// Size hint for WKT output buffers; the smallest useful geometry text.
pub const WKT_MIN_PROBABLE_BYTES: usize = "POINT (0 0)".len();

/// Writes a two-dimensional point as `POINT (<x> <y>)`.
pub fn write_wkt_point(out: &mut impl Write, x: f64, y: f64) -> fmt::Result {
    out.write_str("POINT (")?;
    write_number(out, x, None)?;
    out.write_char(' ')?;
    write_number(out, y, None)?;
    out.write_char(')')
}

/// Writes any [`Geometry`], rounding coordinates to `digits` significant
/// digits when given.
pub fn write_geometry(
    out: &mut impl Write,
    geometry: &Geometry<f64>,
    digits: Option<u32>,
) -> fmt::Result {
    match geometry {
        Geometry::Point(point) => {
            out.write_str("POINT (")?;
            write_coord(out, &point.0, digits)?;
            out.write_char(')')
        }
        Geometry::Line(line) => {
            out.write_str("LINESTRING ")?;
            write_coord_seq(out, &[line.start, line.end], digits)
        }
        Geometry::LineString(line_string) => {
            out.write_str("LINESTRING ")?;
            if line_string.0.is_empty() {
                out.write_str("EMPTY")
            } else {
                write_coord_seq(out, &line_string.0, digits)
            }
        }
        Geometry::Polygon(polygon) => {
            out.write_str("POLYGON ")?;
            if polygon.exterior().0.is_empty() {
                out.write_str("EMPTY")
            } else {
                write_rings(out, polygon, digits)
            }
        }
        Geometry::MultiPoint(multi_point) => {
            out.write_str("MULTIPOINT ")?;
            if multi_point.0.is_empty() {
                return out.write_str("EMPTY");
            }
            out.write_char('(')?;
            for (i, point) in multi_point.0.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                out.write_char('(')?;
                write_coord(out, &point.0, digits)?;
                out.write_char(')')?;
            }
            out.write_char(')')
        }
        Geometry::MultiLineString(multi_line_string) => {
            out.write_str("MULTILINESTRING ")?;
            if multi_line_string.0.is_empty() {
                return out.write_str("EMPTY");
            }
            out.write_char('(')?;
            for (i, line_string) in multi_line_string.0.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_coord_seq(out, &line_string.0, digits)?;
            }
            out.write_char(')')
        }
        Geometry::MultiPolygon(multi_polygon) => {
            out.write_str("MULTIPOLYGON ")?;
            if multi_polygon.0.is_empty() {
                return out.write_str("EMPTY");
            }
            out.write_char('(')?;
            for (i, polygon) in multi_polygon.0.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_rings(out, polygon, digits)?;
            }
            out.write_char(')')
        }
        Geometry::GeometryCollection(collection) => {
            out.write_str("GEOMETRYCOLLECTION ")?;
            if collection.0.is_empty() {
                return out.write_str("EMPTY");
            }
            out.write_char('(')?;
            for (i, child) in collection.0.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_geometry(out, child, digits)?;
            }
            out.write_char(')')
        }
        Geometry::Rect(rect) => write_geometry(out, &Geometry::Polygon(rect.to_polygon()), digits),
        Geometry::Triangle(triangle) => {
            write_geometry(out, &Geometry::Polygon(triangle.to_polygon()), digits)
        }
    }
}

fn write_rings(out: &mut impl Write, polygon: &Polygon<f64>, digits: Option<u32>) -> fmt::Result {
    out.write_char('(')?;
    write_ring(out, polygon.exterior(), digits)?;
    for interior in polygon.interiors() {
        out.write_str(", ")?;
        write_ring(out, interior, digits)?;
    }
    out.write_char(')')
}

fn write_ring(out: &mut impl Write, ring: &LineString<f64>, digits: Option<u32>) -> fmt::Result {
    if ring.0.is_empty() {
        out.write_str("EMPTY")
    } else {
        write_coord_seq(out, &ring.0, digits)
    }
}

fn write_coord_seq(out: &mut impl Write, coords: &[Coord<f64>], digits: Option<u32>) -> fmt::Result {
    out.write_char('(')?;
    for (i, coord) in coords.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_coord(out, coord, digits)?;
    }
    out.write_char(')')
}

fn write_coord(out: &mut impl Write, coord: &Coord<f64>, digits: Option<u32>) -> fmt::Result {
    write_number(out, coord.x, digits)?;
    out.write_char(' ')?;
    write_number(out, coord.y, digits)
}

fn write_number(out: &mut impl Write, value: f64, digits: Option<u32>) -> fmt::Result {
    let value = match digits {
        Some(digits) => reduce_precision(value, digits),
        None => value,
    };
    write!(out, "{value}")
}
