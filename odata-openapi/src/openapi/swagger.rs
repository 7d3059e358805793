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

//! Swagger 2.0 document structures.

use crate::service::Relation;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

pub const SWAGGER_VERSION: &str = "2.0";

/// Root of the generated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swagger {
    pub swagger: String,
    pub info: Info,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub base_path: String,
    pub produces: Vec<String>,
    pub paths: IndexMap<String, PathItem>,
    pub definitions: IndexMap<String, Schema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_definitions: Option<IndexMap<String, SecurityDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<IndexMap<String, Vec<String>>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,
    #[serde(rename = "x-odata-version")]
    pub odata_version: String,
}

/// Operations of one path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
}

impl PathItem {
    /// Operations present in this item with their methods.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        [
            (HttpMethod::Get, &self.get),
            (HttpMethod::Put, &self.put),
            (HttpMethod::Post, &self.post),
            (HttpMethod::Delete, &self.delete),
            (HttpMethod::Patch, &self.patch),
        ]
        .into_iter()
        .filter_map(|(m, op)| op.as_ref().map(|op| (m, op)))
    }

    pub fn set(&mut self, method: HttpMethod, operation: Operation) {
        let slot = match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Delete => &mut self.delete,
            HttpMethod::Patch => &mut self.patch,
        };
        *slot = Some(operation);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Method of a version 2 function import. `MERGE` is the version 2
    /// spelling of `PATCH`; anything unknown falls back to `GET`.
    #[must_use]
    pub fn from_odata(method: &str) -> Self {
        match method.to_ascii_uppercase().as_str() {
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            "PATCH" | "MERGE" => Self::Patch,
            _ => Self::Get,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    pub responses: IndexMap<String, Response>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Body,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ptype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl Parameter {
    /// Required path parameter of a primitive type.
    #[must_use]
    pub fn path(name: impl Into<String>, ptype: &str, format: Option<&str>) -> Self {
        Self {
            name: name.into(),
            location: ParameterLocation::Path,
            description: None,
            required: true,
            ptype: Some(ptype.into()),
            format: format.map(Into::into),
            schema: None,
        }
    }

    /// Optional query parameter of a primitive type.
    #[must_use]
    pub fn query(name: impl Into<String>, ptype: &str, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            location: ParameterLocation::Query,
            description: description.map(Into::into),
            required: false,
            ptype: Some(ptype.into()),
            format: None,
            schema: None,
        }
    }

    /// Required body parameter.
    #[must_use]
    pub fn body(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            location: ParameterLocation::Body,
            description: None,
            required: true,
            ptype: None,
            format: None,
            schema: Some(schema),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl Response {
    #[must_use]
    pub fn new(description: impl Into<String>, schema: Option<Schema>) -> Self {
        Self {
            description: description.into(),
            schema,
        }
    }
}

/// Schema object. Only the subset needed for OData models.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub stype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(rename = "x-ref", default, skip_serializing_if = "Option::is_none")]
    pub x_ref: Option<Relation>,
}

impl Schema {
    /// `{"$ref": "#/definitions/{name}"}`
    #[must_use]
    pub fn reference(name: &str) -> Self {
        Self {
            reference: Some(format!("#/definitions/{name}")),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn typed(stype: &str, format: Option<&str>) -> Self {
        Self {
            stype: Some(stype.into()),
            format: format.map(Into::into),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn array(items: Self) -> Self {
        Self {
            stype: Some("array".into()),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn object(properties: IndexMap<String, Self>) -> Self {
        Self {
            stype: Some("object".into()),
            properties: Some(properties),
            ..Self::default()
        }
    }

    /// `{"type": "object", "properties": {"value": {"type": "array", ...}}}`
    #[must_use]
    pub fn value_array(items: Self) -> Self {
        Self::object(IndexMap::from([("value".to_string(), Self::array(items))]))
    }
}

/// Entry of `securityDefinitions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityDefinition {
    #[serde(rename = "type")]
    pub stype: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Header or query parameter name of an `apiKey` scheme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "in", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<IndexMap<String, String>>,
}
