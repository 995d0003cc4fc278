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

use arrow_schema::DataType;

use crate::error::{Error, Result};

/// The closed set of batch geometry operations.
///
/// Each variant fixes its arity, scalar parameter list, and output element
/// type at definition time, so dispatch over the catalog is an exhaustive
/// match rather than a dynamic registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryOp {
    Point,
    IsValid,
    Intersection,
    PrecisionReduce,
    Equals,
    Touches,
    Overlaps,
    Crosses,
    IsSimple,
    MakeValid,
    GeometryType,
    SimplifyPreserveTopology,
}

/// Number and kind of input columns an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Two Float64 coordinate columns (point construction).
    CoordinatePair,
    /// One WKT geometry column.
    Unary,
    /// Two WKT geometry columns paired row by row.
    Binary,
}

impl Arity {
    pub fn num_columns(&self) -> usize {
        match self {
            Arity::Unary => 1,
            Arity::CoordinatePair | Arity::Binary => 2,
        }
    }
}

/// Scalar parameter an operation requires beyond its input columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSpec {
    None,
    /// Significant digit count for precision reduction.
    Digits,
    /// Simplification tolerance.
    Tolerance,
}

/// Element type of the result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Boolean,
    Wkt,
    TypeTag,
}

impl OutputKind {
    pub fn data_type(&self) -> DataType {
        match self {
            OutputKind::Boolean => DataType::Boolean,
            OutputKind::Wkt | OutputKind::TypeTag => DataType::Utf8,
        }
    }
}

/// Static metadata for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpDescriptor {
    pub name: &'static str,
    pub arity: Arity,
    pub param: ParamSpec,
    pub output: OutputKind,
}

/// Scalar parameter values supplied with a dispatch call.
///
/// Value-range validation (positive digit counts, finite non-negative
/// tolerances) happens in the kernels before any row is processed; the
/// descriptor only checks that the parameter kind matches the operation's
/// signature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpParams {
    None,
    Digits(i64),
    Tolerance(f64),
}

impl OpDescriptor {
    pub fn validate_params(&self, params: &OpParams) -> Result<()> {
        match (self.param, params) {
            (ParamSpec::None, OpParams::None)
            | (ParamSpec::Digits, OpParams::Digits(_))
            | (ParamSpec::Tolerance, OpParams::Tolerance(_)) => Ok(()),
            (expected, actual) => Err(Error::Parameter {
                name: self.name,
                message: format!("expected {expected:?} parameter, got {actual:?}"),
            }),
        }
    }
}

impl GeometryOp {
    pub const ALL: [GeometryOp; 12] = [
        GeometryOp::Point,
        GeometryOp::IsValid,
        GeometryOp::Intersection,
        GeometryOp::PrecisionReduce,
        GeometryOp::Equals,
        GeometryOp::Touches,
        GeometryOp::Overlaps,
        GeometryOp::Crosses,
        GeometryOp::IsSimple,
        GeometryOp::MakeValid,
        GeometryOp::GeometryType,
        GeometryOp::SimplifyPreserveTopology,
    ];

    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    pub fn descriptor(&self) -> OpDescriptor {
        match self {
            GeometryOp::Point => OpDescriptor {
                name: "st_point",
                arity: Arity::CoordinatePair,
                param: ParamSpec::None,
                output: OutputKind::Wkt,
            },
            GeometryOp::IsValid => OpDescriptor {
                name: "st_isvalid",
                arity: Arity::Unary,
                param: ParamSpec::None,
                output: OutputKind::Boolean,
            },
            GeometryOp::Intersection => OpDescriptor {
                name: "st_intersection",
                arity: Arity::Binary,
                param: ParamSpec::None,
                output: OutputKind::Wkt,
            },
            GeometryOp::PrecisionReduce => OpDescriptor {
                name: "st_precisionreduce",
                arity: Arity::Unary,
                param: ParamSpec::Digits,
                output: OutputKind::Wkt,
            },
            GeometryOp::Equals => OpDescriptor {
                name: "st_equals",
                arity: Arity::Binary,
                param: ParamSpec::None,
                output: OutputKind::Boolean,
            },
            GeometryOp::Touches => OpDescriptor {
                name: "st_touches",
                arity: Arity::Binary,
                param: ParamSpec::None,
                output: OutputKind::Boolean,
            },
            GeometryOp::Overlaps => OpDescriptor {
                name: "st_overlaps",
                arity: Arity::Binary,
                param: ParamSpec::None,
                output: OutputKind::Boolean,
            },
            GeometryOp::Crosses => OpDescriptor {
                name: "st_crosses",
                arity: Arity::Binary,
                param: ParamSpec::None,
                output: OutputKind::Boolean,
            },
            GeometryOp::IsSimple => OpDescriptor {
                name: "st_issimple",
                arity: Arity::Unary,
                param: ParamSpec::None,
                output: OutputKind::Boolean,
            },
            GeometryOp::MakeValid => OpDescriptor {
                name: "st_makevalid",
                arity: Arity::Unary,
                param: ParamSpec::None,
                output: OutputKind::Wkt,
            },
            GeometryOp::GeometryType => OpDescriptor {
                name: "st_geometrytype",
                arity: Arity::Unary,
                param: ParamSpec::None,
                output: OutputKind::TypeTag,
            },
            GeometryOp::SimplifyPreserveTopology => OpDescriptor {
                name: "st_simplifypreservetopology",
                arity: Arity::Unary,
                param: ParamSpec::Tolerance,
                output: OutputKind::Wkt,
            },
        }
    }
}
