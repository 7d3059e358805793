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

//! Swagger 2.0 generation from the service model.
//!
//! [`convert`] seeds the model with configured items, builds the
//! `definitions` map, walks the model with a [`PathBuilder`] and wraps
//! everything into a [`Swagger`] document. Every operation id goes
//! through a per-call [`OperationIdRegistry`].

/// `definitions` generation.
pub mod definitions;
/// Identifier casing helpers.
pub mod naming;
/// Path generation.
pub mod paths;
/// Operation id uniqueness ledger.
pub mod registry;
/// Swagger document types.
pub mod swagger;
/// EDM type to schema mapping.
pub mod type_map;

use crate::config::Options;
use crate::service::Service;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

pub use paths::PathBuilder;
pub use registry::OperationIdRegistry;
pub use swagger::Swagger;
pub use type_map::TypeMapper;

pub const DEFAULT_TITLE: &str = "OData Service";
pub const DEFAULT_VERSION: &str = "0.0.1";
pub const DEFAULT_BASE_PATH: &str = "/";

/// Conversion errors.
#[derive(Debug)]
pub enum ConvertError {
    /// Operation id generated twice.
    DuplicateOperation(String),
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::DuplicateOperation(id) => write!(f, "`{id}` is a duplicate operationId."),
        }
    }
}

impl StdError for ConvertError {}

/// Convert the service model to a Swagger document.
///
/// # Errors
///
/// - `ConvertError::DuplicateOperation` if two operations end up with
///   the same id.
pub fn convert(service: &Service, options: &Options) -> Result<Swagger, ConvertError> {
    let service = seed(service, options);
    let types = TypeMapper::new(&service);
    let definitions = definitions::build(&service, &types);
    let mut registry = OperationIdRegistry::new();
    let paths = PathBuilder::new(
        &service,
        &types,
        &mut registry,
        &definitions.entity_set_keys,
    )
    .build(options.include.as_deref())?;

    Ok(Swagger {
        swagger: swagger::SWAGGER_VERSION.into(),
        info: swagger::Info {
            title: options.title.as_deref().unwrap_or(DEFAULT_TITLE).into(),
            version: options.version.as_deref().unwrap_or(DEFAULT_VERSION).into(),
            odata_version: service.version.clone(),
        },
        host: options.host.clone(),
        base_path: options
            .base_path
            .as_deref()
            .unwrap_or(DEFAULT_BASE_PATH)
            .into(),
        produces: vec!["application/json".into()],
        paths,
        definitions: definitions.schemas,
        security_definitions: options.security_definitions.clone(),
        security: options.security.clone(),
    })
}

/// Service with configured model items added. Items already present
/// under the same qualified name are kept.
fn seed(service: &Service, options: &Options) -> Service {
    let mut service = service.clone();
    for ct in &options.complex_types {
        let qname = ct.qualified_name();
        if !service.complex_types.iter().any(|c| c.qualified_name() == qname) {
            service.complex_types.push(ct.clone());
        }
    }
    for et in &options.entity_types {
        let qname = et.qualified_name();
        if !service.entity_types.iter().any(|e| e.qualified_name() == qname) {
            service.entity_types.push(et.clone());
        }
    }
    for et in &options.enum_types {
        let qname = et.qualified_name();
        if !service.enum_types.iter().any(|e| e.qualified_name() == qname) {
            service.enum_types.push(et.clone());
        }
    }
    for s in &options.singletons {
        if !service.singletons.iter().any(|v| v.name == s.name) {
            service.singletons.push(s.clone());
        }
    }
    for a in &options.actions {
        if !service
            .actions
            .iter()
            .any(|v| v.name == a.name && v.namespace == a.namespace)
        {
            service.actions.push(a.clone());
        }
    }
    for f in &options.functions {
        if !service
            .functions
            .iter()
            .any(|v| v.name == f.name && v.namespace == f.namespace)
        {
            service.functions.push(f.clone());
        }
    }
    if let Some(ns) = &options.default_namespace {
        service.default_namespace.clone_from(ns);
    }
    service
}
