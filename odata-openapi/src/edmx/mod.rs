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

//! EDMX document tree.
//!
//! The structures in this module mirror CSDL elements closely and are
//! produced by `quick-xml` deserialization. Namespace prefixes
//! (`edmx:`, `m:`, `sap:`) are dropped by the deserializer, so
//! attributes are matched by their local names. Elements that are not
//! needed to describe the REST surface (for example v2/v3
//! `Association` or `Documentation`) are skipped.

/// 3.1 Element edmx:Edmx
pub mod edmx_root;

/// 3.2 Element edmx:DataServices
pub mod data_services;

/// 5 Schema
pub mod schema;

/// 6 Structural Property / 7 Navigation Property
pub mod property;

/// 8 Entity Type
pub mod entity_type;

/// 9 Complex Type
pub mod complex_type;

/// 10 Enumeration Type
pub mod enum_type;

/// 12 Action / 12 Function
pub mod action;

/// 13 Entity Container
pub mod entity_container;

/// 14.2 Element edm:Annotations / 14.3 Element edm:Annotation
pub mod annotation;

use quick_xml::DeError;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

use tagged_types::TaggedType;

/// Type reference as written in the document: `Edm.String`,
/// `Alias.Type`, `Collection(Namespace.Type)`.
pub type TypeName = TaggedType<String, TypeNameTag>;
#[derive(tagged_types::Tag)]
#[implement(Clone, Hash, PartialEq, Eq)]
#[transparent(Debug, Display, Deserialize)]
#[capability(inner_access)]
pub enum TypeNameTag {}

/// Annotation term as written in the document.
pub type TermName = TaggedType<String, TermNameTag>;
#[derive(tagged_types::Tag)]
#[implement(Clone, Hash, PartialEq, Eq)]
#[transparent(Debug, Display, Deserialize)]
#[capability(inner_access)]
pub enum TermNameTag {}

pub type SchemaNamespace = String;
pub type SimpleIdentifier = String;
pub type PropertyName = String;

/// Reexport of Edmx type to root.
pub type Edmx = edmx_root::Edmx;
/// Reexport of validated Schema.
pub type Schema = schema::Schema;
/// Reexport of validated `EntityType`.
pub type EntityType = entity_type::EntityType;
/// Reexport of validated `ComplexType`.
pub type ComplexType = complex_type::ComplexType;
/// Reexport of validated `EnumType`.
pub type EnumType = enum_type::EnumType;
/// Reexport of validated `EntityContainer`.
pub type EntityContainer = entity_container::EntityContainer;
/// Reexport of validated `Action`.
pub type Action = action::Action;
/// Reexport of validated `Function`.
pub type Function = action::Function;
/// Reexport of `Annotation`.
pub type Annotation = annotation::Annotation;
/// Reexport of `Annotations`.
pub type Annotations = annotation::Annotations;

/// EDMX validation errors.
#[derive(Debug)]
pub enum ValidateError {
    /// XML deserialization error.
    XmlDeserialize(DeError),
    /// Invalid number of `DataServices`.
    WrongDataServicesNumber,
    /// In the `EntityType` too many keys.
    TooManyKeys,
    /// Action or function declares more than one `ReturnType`.
    TooManyReturnTypes,
    /// Schema validation error.
    Schema(SchemaNamespace, Box<ValidateError>),
    /// `EntityType` validation error.
    EntityType(SimpleIdentifier, Box<ValidateError>),
    /// `Action` validation error.
    Action(SimpleIdentifier, Box<ValidateError>),
    /// `Function` validation error.
    Function(SimpleIdentifier, Box<ValidateError>),
}

impl Display for ValidateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::XmlDeserialize(err) => write!(f, "XML deserialization error: {err}"),
            Self::WrongDataServicesNumber => {
                "edmx:Edmx must contain exactly one edmx:DataServices element".fmt(f)
            }
            Self::TooManyKeys => "more than one Key element".fmt(f),
            Self::TooManyReturnTypes => "more than one ReturnType element".fmt(f),
            Self::Schema(ns, err) => write!(f, "schema {ns}: {err}"),
            Self::EntityType(name, err) => write!(f, "entity type {name}: {err}"),
            Self::Action(name, err) => write!(f, "action {name}: {err}"),
            Self::Function(name, err) => write!(f, "function {name}: {err}"),
        }
    }
}

impl StdError for ValidateError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::XmlDeserialize(err) => Some(err),
            _ => None,
        }
    }
}
