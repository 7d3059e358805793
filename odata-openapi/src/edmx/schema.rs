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

use crate::edmx::action::DeAction;
use crate::edmx::action::DeFunction;
use crate::edmx::complex_type::DeComplexType;
use crate::edmx::entity_container::DeEntityContainer;
use crate::edmx::entity_type::DeEntityType;
use crate::edmx::enum_type::DeEnumType;
use crate::edmx::Action;
use crate::edmx::Annotations;
use crate::edmx::ComplexType;
use crate::edmx::EntityContainer;
use crate::edmx::EntityType;
use crate::edmx::EnumType;
use crate::edmx::Function;
use crate::edmx::SchemaNamespace;
use crate::edmx::ValidateError;
use serde::Deserialize;

/// 5.1 Element edm:Schema
#[derive(Debug, Deserialize)]
pub struct DeSchema {
    /// 5.1.1 Attribute `Namespace`
    #[serde(rename = "@Namespace")]
    pub namespace: SchemaNamespace,
    /// 5.1.2 Attribute `Alias`
    #[serde(rename = "@Alias")]
    pub alias: Option<String>,
    /// Items of edm:Schema
    #[serde(rename = "$value", default)]
    pub items: Vec<DeSchemaItem>,
}

/// Items of edm:Schema
#[derive(Debug, Deserialize)]
pub enum DeSchemaItem {
    EntityType(DeEntityType),
    ComplexType(DeComplexType),
    EnumType(DeEnumType),
    EntityContainer(DeEntityContainer),
    Action(DeAction),
    Function(DeFunction),
    Annotations(Annotations),
    /// `Association`, `TypeDefinition`, `Term`, ... are not needed to
    /// describe the REST surface.
    #[serde(other)]
    Other,
}

/// Validated edm:Schema
#[derive(Debug, Default)]
pub struct Schema {
    pub namespace: SchemaNamespace,
    pub alias: Option<String>,
    pub entity_types: Vec<EntityType>,
    pub complex_types: Vec<ComplexType>,
    pub enum_types: Vec<EnumType>,
    pub entity_containers: Vec<EntityContainer>,
    pub actions: Vec<Action>,
    pub functions: Vec<Function>,
    pub annotations: Vec<Annotations>,
}

impl DeSchema {
    /// # Errors
    ///
    /// - `ValidateError::Schema` if error occured. Internal `ValidateError` contains details.
    pub fn validate(self) -> Result<Schema, ValidateError> {
        let namespace = self.namespace;
        let schema = Schema {
            namespace: namespace.clone(),
            alias: self.alias,
            ..Schema::default()
        };
        self.items
            .into_iter()
            .try_fold(schema, |mut s, v| {
                match v {
                    DeSchemaItem::EntityType(v) => s.entity_types.push(v.validate()?),
                    DeSchemaItem::ComplexType(v) => s.complex_types.push(v.validate()),
                    DeSchemaItem::EnumType(v) => s.enum_types.push(v.validate()),
                    DeSchemaItem::EntityContainer(v) => s.entity_containers.push(v.validate()),
                    DeSchemaItem::Action(v) => s.actions.push(v.validate()?),
                    DeSchemaItem::Function(v) => s.functions.push(v.validate()?),
                    DeSchemaItem::Annotations(v) => s.annotations.push(v),
                    DeSchemaItem::Other => (),
                }
                Ok(s)
            })
            .map_err(|e| ValidateError::Schema(namespace, Box::new(e)))
    }
}
