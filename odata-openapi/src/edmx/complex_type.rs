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
use crate::edmx::SimpleIdentifier;
use crate::edmx::TypeName;
use serde::Deserialize;

/// 9.1 Element edm:ComplexType
#[derive(Debug, Deserialize)]
pub struct DeComplexType {
    /// 9.1.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 9.1.2 Attribute `BaseType`
    #[serde(rename = "@BaseType")]
    pub base_type: Option<TypeName>,
    /// Items of edm:ComplexType
    #[serde(rename = "$value", default)]
    pub items: Vec<DeComplexTypeItem>,
}

/// Items of edm:ComplexType
#[derive(Debug, Deserialize)]
pub enum DeComplexTypeItem {
    Property(Property),
    NavigationProperty(NavigationProperty),
    #[serde(other)]
    Other,
}

/// Validated edm:ComplexType
#[derive(Debug)]
pub struct ComplexType {
    pub name: SimpleIdentifier,
    pub base_type: Option<TypeName>,
    pub properties: Vec<Property>,
    pub navigation_properties: Vec<NavigationProperty>,
}

impl DeComplexType {
    #[must_use]
    pub fn validate(self) -> ComplexType {
        let (properties, navigation_properties) = self.items.into_iter().fold(
            (Vec::new(), Vec::new()),
            |(mut ps, mut nps), v| {
                match v {
                    DeComplexTypeItem::Property(p) => ps.push(p),
                    DeComplexTypeItem::NavigationProperty(p) => nps.push(p),
                    DeComplexTypeItem::Other => (),
                }
                (ps, nps)
            },
        );
        ComplexType {
            name: self.name,
            base_type: self.base_type,
            properties,
            navigation_properties,
        }
    }
}
