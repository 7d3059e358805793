// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Service model and metadata parser.
//!
//! [`parse`] walks a validated [`Edmx`](crate::edmx::Edmx) document and
//! produces a [`Service`]:
//! - schema aliases are resolved in every type reference;
//! - entity and complex type inheritance is flattened, oldest ancestor
//!   first, with derived declarations replacing inherited ones;
//! - containment navigation becomes `paths` of the entity type;
//! - capability annotation terms are collected per type and per set;
//! - SAP vendor attributes become explicit capability records.

/// Lookup tables over document schemas.
pub mod index;
/// Service model types.
pub mod model;
/// EDMX to model conversion.
pub mod parser;

use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

pub use model::Action;
pub use model::ComplexType;
pub use model::ContainmentPath;
pub use model::EntityProperty;
pub use model::EntitySet;
pub use model::EntityType;
pub use model::EnumType;
pub use model::Function;
pub use model::FunctionImport;
pub use model::Parameter;
pub use model::PropertyType;
pub use model::RefConstraint;
pub use model::Relation;
pub use model::ReturnType;
pub use model::SapEntitySetCapabilities;
pub use model::SapPropertyCapabilities;
pub use model::Service;
pub use model::Singleton;
pub use parser::parse;

/// Service model construction errors.
#[derive(Debug)]
pub enum ParseError {
    /// None of the schemas declares an `EntityContainer`.
    NoEntityContainer,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::NoEntityContainer => "metadata has no EntityContainer".fmt(f),
        }
    }
}

impl StdError for ParseError {}
