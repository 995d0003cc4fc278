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

/// Binary topological predicate supported by the operation catalog.
///
/// All four relations are symmetric, so there is no inverse mapping to
/// track when arguments are swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpatialRelationType {
    Equals,
    Touches,
    Overlaps,
    Crosses,
}

impl SpatialRelationType {
    /// Converts an operation name to a relation tag.
    ///
    /// Returns `None` if the name is not one of the catalog's binary
    /// predicates.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "st_equals" => Some(SpatialRelationType::Equals),
            "st_touches" => Some(SpatialRelationType::Touches),
            "st_overlaps" => Some(SpatialRelationType::Overlaps),
            "st_crosses" => Some(SpatialRelationType::Crosses),
            _ => None,
        }
    }
}

impl std::fmt::Display for SpatialRelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpatialRelationType::Equals => write!(f, "equals"),
            SpatialRelationType::Touches => write!(f, "touches"),
            SpatialRelationType::Overlaps => write!(f, "overlaps"),
            SpatialRelationType::Crosses => write!(f, "crosses"),
        }
    }
}
