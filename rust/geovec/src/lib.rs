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

//! Vectorized geometry operations over Arrow columns.
//!
//! A closed catalog of `st_*` operations is applied element-wise over WKT
//! string columns (or, for point construction, Float64 coordinate columns),
//! producing a new column of the operation's declared output type. Rows are
//! independent: a null input yields a null output, and a row whose WKT fails
//! to decode or whose kernel call fails yields a null output without
//! aborting the batch. Length and parameter problems fail the whole call
//! before any row is processed.
//!
//! Operations can be invoked directly (`st_is_valid(&geoms)`) or through the
//! catalog ([`execute`]) when the operation is selected at runtime.

pub mod dispatch;

pub use dispatch::execute;
pub use geovec_expr::catalog::{Arity, GeometryOp, OpDescriptor, OpParams, OutputKind, ParamSpec};
pub use geovec_expr::error::{Error, Result, RowError};
pub use geovec_functions::{st_point, st_precision_reduce};
pub use geovec_geos::{
    st_crosses, st_equals, st_geometry_type, st_intersection, st_is_simple, st_is_valid,
    st_make_valid, st_overlaps, st_simplify_preserve_topology, st_touches,
};
