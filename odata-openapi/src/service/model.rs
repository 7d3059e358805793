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

//! Entity-relationship model of an OData service.
//!
//! The model is built once from the EDMX tree and is read-only
//! afterwards. All type references are namespace-qualified with schema
//! aliases already resolved.

use serde::Deserialize;
use serde::Serialize;

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(v: &bool) -> bool {
    !*v
}

const fn default_true() -> bool {
    true
}

fn default_http_method() -> String {
    "GET".into()
}

/// Whole service description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default)]
    pub entity_sets: Vec<EntitySet>,
    #[serde(default)]
    pub entity_types: Vec<EntityType>,
    #[serde(default)]
    pub complex_types: Vec<ComplexType>,
    #[serde(default)]
    pub enum_types: Vec<EnumType>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub functions: Vec<Function>,
    /// Version 2 function imports that are not tied to an entity set.
    #[serde(default)]
    pub function_imports: Vec<FunctionImport>,
    #[serde(default)]
    pub singletons: Vec<Singleton>,
    pub version: String,
    pub default_namespace: String,
}

/// Type of an entity property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    /// Type as declared: primitive, complex, enum or
    /// `Collection(...)` of those.
    Declared(String),
    /// Collection-valued navigation to the given entity type.
    NavigationCollection(String),
    /// Single-valued navigation to the given entity type.
    NavigationSingle { target: String, relation: Relation },
}

/// Relationship data of a single-valued navigation property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<String>,
    #[serde(default)]
    pub constraints: Vec<RefConstraint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefConstraint {
    pub property: String,
    pub ref_property: String,
}

/// SAP capabilities of a property (`sap:creatable`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SapPropertyCapabilities {
    #[serde(default = "default_true")]
    pub creatable: bool,
    #[serde(default = "default_true")]
    pub updatable: bool,
    #[serde(default = "default_true")]
    pub filterable: bool,
    #[serde(default = "default_true")]
    pub sortable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Default for SapPropertyCapabilities {
    fn default() -> Self {
        Self {
            creatable: true,
            updatable: true,
            filterable: true,
            sortable: true,
            label: None,
        }
    }
}

/// SAP capabilities of an entity set (`sap:creatable`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SapEntitySetCapabilities {
    #[serde(default = "default_true")]
    pub creatable: bool,
    #[serde(default = "default_true")]
    pub updatable: bool,
    #[serde(default = "default_true")]
    pub deletable: bool,
    #[serde(default = "default_true")]
    pub pageable: bool,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Default for SapEntitySetCapabilities {
    fn default() -> Self {
        Self {
            creatable: true,
            updatable: true,
            deletable: true,
            pageable: true,
            searchable: false,
            label: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub ptype: PropertyType,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    /// Members when the declared type is a known enumeration.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_members: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sap: Option<SapPropertyCapabilities>,
}

impl EntityProperty {
    /// Property with a declared type and no extra data.
    #[must_use]
    pub fn declared(name: impl Into<String>, ptype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ptype: PropertyType::Declared(ptype.into()),
            required: false,
            enum_members: None,
            sap: None,
        }
    }

    /// Declared type name, if this is not a navigation property.
    #[must_use]
    pub fn declared_type(&self) -> Option<&str> {
        match &self.ptype {
            PropertyType::Declared(t) => Some(t),
            _ => None,
        }
    }
}

/// Containment navigation property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainmentPath {
    pub name: String,
    /// `Namespace.Type` or `Collection(Namespace.Type)`.
    #[serde(rename = "type")]
    pub ptype: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityType {
    pub name: String,
    pub namespace: String,
    #[serde(rename = "abstract", default, skip_serializing_if = "is_false")]
    pub is_abstract: bool,
    /// Qualified names of ancestors, nearest first.
    #[serde(default)]
    pub base_types: Vec<String>,
    #[serde(default)]
    pub properties: Vec<EntityProperty>,
    #[serde(default)]
    pub key: Vec<EntityProperty>,
    #[serde(default)]
    pub paths: Vec<ContainmentPath>,
    #[serde(default)]
    pub annotations: Vec<String>,
}

impl EntityType {
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexType {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub properties: Vec<EntityProperty>,
}

impl ComplexType {
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumType {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub members: Vec<String>,
}

impl EnumType {
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySet {
    pub name: String,
    /// Namespace of the entity type.
    pub namespace: String,
    pub entity_type: EntityType,
    /// Capability terms of the type and terms targeting the set.
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub function_imports: Vec<FunctionImport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sap: Option<SapEntitySetCapabilities>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ptype: String,
    #[serde(default = "default_true")]
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnType {
    #[serde(rename = "type")]
    pub rtype: String,
    #[serde(default = "default_true")]
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub is_bound: bool,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<ReturnType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_set_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub is_bound: bool,
    #[serde(default)]
    pub is_composable: bool,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<ReturnType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_set_path: Option<String>,
}

/// Version 2 function import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionImport {
    pub name: String,
    #[serde(default = "default_http_method")]
    pub http_method: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_set: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    /// `sap:label`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// `sap:action-for`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_for: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Singleton {
    pub name: String,
    /// Qualified entity type name.
    #[serde(rename = "type")]
    pub stype: String,
    /// Navigation properties resolved from the bindings.
    #[serde(default)]
    pub properties: Vec<EntityProperty>,
}
