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

//! WKT codec over libgeos: the only place geometry text is exchanged with
//! the kernel.

use geos::{Geometry, WKTWriter};
use geovec_expr::error::{RowError, RowResult};

/// Parses one WKT element into a kernel geometry.
pub fn parse_wkt(wkt: &str) -> RowResult<Geometry> {
    Geometry::new_from_wkt(wkt).map_err(|e| RowError::Decode(format!("{e}")))
}

/// Serializes a kernel geometry back to WKT.
///
/// Output is trimmed: coordinates are written with their shortest
/// representation, never with padded trailing zeros.
pub fn write_wkt(geometry: &Geometry) -> RowResult<String> {
    let mut writer = WKTWriter::new()
        .map_err(|e| RowError::Kernel(format!("failed to create WKT writer: {e}")))?;
    writer.set_trim(true);
    writer
        .write(geometry)
        .map_err(|e| RowError::Kernel(format!("failed to serialize geometry: {e}")))
}
