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

use crate::edmx::property::NavigationProperty;
use crate::edmx::property::Property;
use crate::edmx::Annotation;
use crate::edmx::PropertyName;
use crate::edmx::SimpleIdentifier;
use crate::edmx::TypeName;
use crate::edmx::ValidateError;
use serde::Deserialize;

/// 8.1 Element edm:EntityType
#[derive(Debug, Deserialize)]
pub struct DeEntityType {
    /// 8.1.1 Attribute Name
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 8.1.2 Attribute `BaseType`
    #[serde(rename = "@BaseType")]
    pub base_type: Option<TypeName>,
    /// 8.1.3 Attribute `Abstract`
    #[serde(rename = "@Abstract")]
    pub r#abstract: Option<bool>,
    /// Items of edm:EntityType
    #[serde(rename = "$value", default)]
    pub items: Vec<DeEntityTypeItem>,
}

/// 8.2 Element edm:Key
#[derive(Debug, Deserialize)]
pub struct Key {
    /// Items of edm:Key
    #[serde(rename = "PropertyRef", default)]
    pub property_ref: Vec<PropertyRef>,
}

/// 8.3 Element edm:PropertyRef
#[derive(Debug, Deserialize)]
pub struct PropertyRef {
    /// 8.3.1 Attribute Name
    #[serde(rename = "@Name")]
    pub name: PropertyName,
}

/// Items of edm:EntityType
#[derive(Debug, Deserialize)]
pub enum DeEntityTypeItem {
    Key(Key),
    Property(Property),
    NavigationProperty(NavigationProperty),
    Annotation(Annotation),
    #[serde(other)]
    Other,
}

/// Validated edm:EntityType
#[derive(Debug)]
pub struct EntityType {
    pub name: SimpleIdentifier,
    pub base_type: Option<TypeName>,
    pub r#abstract: bool,
    /// Names of key properties in declaration order.
    pub key: Option<Vec<PropertyName>>,
    pub properties: Vec<Property>,
    pub navigation_properties: Vec<NavigationProperty>,
    pub annotations: Vec<Annotation>,
}

impl DeEntityType {
    /// # Errors
    ///
    /// - `ValidateError::EntityType` if error occured. Internal `ValidateError` contains details.
    pub fn validate(self) -> Result<EntityType, ValidateError> {
        let (keys, properties, navigation_properties, annotations) = self.items.into_iter().fold(
            (Vec::new(), Vec::new(), Vec::new(), Vec::new()),
            |(mut keys, mut ps, mut nps, mut anns), v| {
                match v {
                    DeEntityTypeItem::Key(k) => keys.push(k),
                    DeEntityTypeItem::Property(p) => ps.push(p),
                    DeEntityTypeItem::NavigationProperty(p) => nps.push(p),
                    DeEntityTypeItem::Annotation(a) => anns.push(a),
                    DeEntityTypeItem::Other => (),
                }
                (keys, ps, nps, anns)
            },
        );
        if keys.len() > 1 {
            return Err(ValidateError::EntityType(
                self.name,
                Box::new(ValidateError::TooManyKeys),
            ));
        }
        let key = keys
            .into_iter()
            .next()
            .map(|k| k.property_ref.into_iter().map(|r| r.name).collect());
        Ok(EntityType {
            name: self.name,
            base_type: self.base_type,
            r#abstract: self.r#abstract.unwrap_or(false),
            key,
            properties,
            navigation_properties,
            annotations,
        })
    }
}
