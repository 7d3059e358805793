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

use crate::edmx::Annotation;
use crate::edmx::PropertyName;
use crate::edmx::TypeName;
use serde::Deserialize;

/// 6.1 Element edm:Property
#[derive(Debug, Deserialize)]
pub struct Property {
    /// 6.1.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: PropertyName,
    /// 6.1.2 Attribute `Type`
    #[serde(rename = "@Type")]
    pub ptype: TypeName,
    /// 6.2.1 Attribute `Nullable`
    #[serde(rename = "@Nullable")]
    pub nullable: Option<bool>,
    /// `sap:creatable`
    #[serde(rename = "@creatable")]
    pub sap_creatable: Option<bool>,
    /// `sap:updatable`
    #[serde(rename = "@updatable")]
    pub sap_updatable: Option<bool>,
    /// `sap:filterable`
    #[serde(rename = "@filterable")]
    pub sap_filterable: Option<bool>,
    /// `sap:sortable`
    #[serde(rename = "@sortable")]
    pub sap_sortable: Option<bool>,
    /// `sap:label`
    #[serde(rename = "@label")]
    pub sap_label: Option<String>,
    /// Inline annotations.
    #[serde(rename = "Annotation", default)]
    pub annotations: Vec<Annotation>,
}

impl Property {
    /// True if any SAP vendor attribute is present.
    #[must_use]
    pub const fn has_sap_attributes(&self) -> bool {
        self.sap_creatable.is_some()
            || self.sap_updatable.is_some()
            || self.sap_filterable.is_some()
            || self.sap_sortable.is_some()
            || self.sap_label.is_some()
    }
}

/// 7.1 Element edm:NavigationProperty
///
/// Version 2 and 3 documents declare navigation through
/// `Relationship`/`ToRole` and carry no `Type`.
#[derive(Debug, Deserialize)]
pub struct NavigationProperty {
    /// 7.1.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: PropertyName,
    /// 7.1.2 Attribute `Type`
    #[serde(rename = "@Type")]
    pub ptype: Option<TypeName>,
    /// 7.1.3 Attribute `Nullable`
    #[serde(rename = "@Nullable")]
    pub nullable: Option<bool>,
    /// 7.1.4 Attribute `Partner`
    #[serde(rename = "@Partner")]
    pub partner: Option<PropertyName>,
    /// 7.1.5 Attribute `ContainsTarget`
    #[serde(rename = "@ContainsTarget")]
    pub contains_target: Option<bool>,
    /// 7.2 Element edm:ReferentialConstraint
    #[serde(rename = "ReferentialConstraint", default)]
    pub referential_constraints: Vec<ReferentialConstraint>,
}

/// 7.2 Element edm:ReferentialConstraint
#[derive(Debug, Deserialize)]
pub struct ReferentialConstraint {
    /// 7.2.1 Attribute `Property`
    #[serde(rename = "@Property")]
    pub property: PropertyName,
    /// 7.2.2 Attribute `ReferencedProperty`
    #[serde(rename = "@ReferencedProperty")]
    pub referenced_property: PropertyName,
}
