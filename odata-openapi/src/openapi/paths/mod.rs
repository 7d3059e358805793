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

//! Path generation.
//!
//! [`PathBuilder`] owns the growing `paths` map and walks entity sets,
//! their containment navigation, bound and unbound operations, version
//! 2 function imports and singletons. A path that already exists is
//! never touched again, so the first writer wins.

/// Entity set and containment paths.
pub mod entity;
/// Actions, functions and function imports.
pub mod operations;
/// Singleton paths.
pub mod singleton;

use crate::openapi::registry::OperationIdRegistry;
use crate::openapi::swagger::Operation;
use crate::openapi::swagger::Parameter;
use crate::openapi::swagger::PathItem;
use crate::openapi::swagger::Response;
use crate::openapi::swagger::Schema;
use crate::openapi::type_map::primitive;
use crate::openapi::type_map::TypeMapper;
use crate::openapi::ConvertError;
use crate::service::Service;
use indexmap::IndexMap;
use std::collections::HashMap;

pub const DEFAULT_RESPONSE: &str = "default";

/// Response used for every non-success status.
#[must_use]
pub fn default_response() -> Response {
    Response::new("Unexpected error", Some(Schema::reference("Error")))
}

/// Responses map with the default error response appended.
#[must_use]
pub fn responses<const N: usize>(items: [(&str, Response); N]) -> IndexMap<String, Response> {
    items
        .into_iter()
        .map(|(code, r)| (code.to_string(), r))
        .chain([(DEFAULT_RESPONSE.to_string(), default_response())])
        .collect()
}

#[must_use]
pub fn empty_response() -> Response {
    Response::new("Empty response.", None)
}

/// Path parameter typed after an EDM type. Non-primitive types are
/// passed as strings.
#[must_use]
pub fn typed_path_parameter(name: &str, edm_type: &str) -> Parameter {
    let (ptype, format) = primitive(edm_type).unwrap_or(("string", None));
    Parameter::path(name, ptype, format)
}

/// Query parameter typed after an EDM type.
#[must_use]
pub fn typed_query_parameter(name: &str, edm_type: &str, required: bool) -> Parameter {
    let (ptype, format) = primitive(edm_type).unwrap_or(("string", None));
    Parameter {
        required,
        format: format.map(Into::into),
        ..Parameter::query(name, ptype, None)
    }
}

/// Builder of the `paths` object.
pub struct PathBuilder<'a> {
    pub(crate) service: &'a Service,
    pub(crate) types: &'a TypeMapper,
    pub(crate) registry: &'a mut OperationIdRegistry,
    /// Entity set name to definition key.
    pub(crate) definition_keys: &'a HashMap<String, String>,
    pub(crate) paths: IndexMap<String, PathItem>,
}

impl<'a> PathBuilder<'a> {
    pub fn new(
        service: &'a Service,
        types: &'a TypeMapper,
        registry: &'a mut OperationIdRegistry,
        definition_keys: &'a HashMap<String, String>,
    ) -> Self {
        Self {
            service,
            types,
            registry,
            definition_keys,
            paths: IndexMap::new(),
        }
    }

    /// Generate all paths.
    ///
    /// `include` limits the entity sets (and their function imports)
    /// that get paths.
    ///
    /// # Errors
    ///
    /// - `ConvertError::DuplicateOperation` if an operation id is
    ///   generated twice.
    pub fn build(
        mut self,
        include: Option<&[String]>,
    ) -> Result<IndexMap<String, PathItem>, ConvertError> {
        let service = self.service;
        for set in &service.entity_sets {
            if include.is_some_and(|names| !names.contains(&set.name)) {
                log::debug!("entity set {} is not included", set.name);
                continue;
            }
            self.entity_set(set)?;
        }
        for singleton in &service.singletons {
            self.singleton(singleton)?;
        }
        self.unbound_operations()?;
        for import in &service.function_imports {
            self.function_import(import)?;
        }
        log::info!(
            "generated {} paths with {} operations",
            self.paths.len(),
            self.registry.len()
        );
        Ok(self.paths)
    }

    /// True if `path` has not been generated yet.
    pub(crate) fn is_free(&self, path: &str) -> bool {
        if self.paths.contains_key(path) {
            log::debug!("path {path} already exists");
            false
        } else {
            true
        }
    }

    pub(crate) fn insert(&mut self, path: String, item: PathItem) {
        if item.operations().next().is_some() {
            self.paths.entry(path).or_insert(item);
        }
    }
}

/// Operation with the default response list.
#[must_use]
pub fn operation(
    operation_id: String,
    parameters: Vec<Parameter>,
    responses: IndexMap<String, Response>,
) -> Operation {
    Operation {
        operation_id,
        summary: None,
        description: None,
        parameters,
        responses,
    }
}
