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

//! Batch geometry kernels implemented with the geos crate.
//!
//! Each module lifts one operation family over WKT columns through
//! [`executor::GeosExecutor`]; the dispatcher never sees libgeos types.

pub mod binary_predicates;
pub mod codec;
pub mod executor;
pub mod overlay;
pub mod st_geometrytype;
pub mod st_isvalid;
pub mod st_issimple;
pub mod st_makevalid;
pub mod st_simplifypreservetopology;

pub use binary_predicates::{st_crosses, st_equals, st_overlaps, st_touches};
pub use overlay::st_intersection;
pub use st_geometrytype::st_geometry_type;
pub use st_isvalid::st_is_valid;
pub use st_issimple::st_is_simple;
pub use st_makevalid::st_make_valid;
pub use st_simplifypreservetopology::st_simplify_preserve_topology;
