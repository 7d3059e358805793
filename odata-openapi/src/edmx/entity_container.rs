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
use crate::edmx::SimpleIdentifier;
use crate::edmx::TypeName;
use serde::Deserialize;

/// 13.1 Element edm:EntityContainer
#[derive(Debug, Deserialize)]
pub struct DeEntityContainer {
    /// 13.1.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// Items of edm:EntityContainer
    #[serde(rename = "$value", default)]
    pub items: Vec<DeEntityContainerItem>,
}

/// Items of edm:EntityContainer
#[derive(Debug, Deserialize)]
pub enum DeEntityContainerItem {
    EntitySet(DeEntitySet),
    Singleton(DeSingleton),
    FunctionImport(FunctionImport),
    ActionImport(ActionImport),
    Annotation(Annotation),
    /// `AssociationSet` of version 2 and 3 documents.
    #[serde(other)]
    Other,
}

/// 13.2 Element edm:EntitySet
#[derive(Debug, Deserialize)]
pub struct DeEntitySet {
    /// 13.2.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 13.2.2 Attribute `EntityType`
    #[serde(rename = "@EntityType")]
    pub entity_type: TypeName,
    #[serde(rename = "@creatable")]
    pub sap_creatable: Option<bool>,
    #[serde(rename = "@updatable")]
    pub sap_updatable: Option<bool>,
    #[serde(rename = "@deletable", alias = "@deleteable")]
    pub sap_deletable: Option<bool>,
    #[serde(rename = "@pageable")]
    pub sap_pageable: Option<bool>,
    #[serde(rename = "@searchable")]
    pub sap_searchable: Option<bool>,
    #[serde(rename = "@label")]
    pub sap_label: Option<String>,
    #[serde(rename = "$value", default)]
    pub items: Vec<DeBindingItem>,
}

/// 13.3 Element edm:Singleton
#[derive(Debug, Deserialize)]
pub struct DeSingleton {
    /// 13.3.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 13.3.2 Attribute `Type`
    #[serde(rename = "@Type")]
    pub stype: TypeName,
    #[serde(rename = "$value", default)]
    pub items: Vec<DeBindingItem>,
}

/// Items of edm:EntitySet and edm:Singleton
#[derive(Debug, Deserialize)]
pub enum DeBindingItem {
    NavigationPropertyBinding(NavigationPropertyBinding),
    Annotation(Annotation),
    #[serde(other)]
    Other,
}

/// 13.4 Element edm:NavigationPropertyBinding
#[derive(Debug, Deserialize)]
pub struct NavigationPropertyBinding {
    /// 13.4.1 Attribute `Path`
    #[serde(rename = "@Path")]
    pub path: String,
    /// 13.4.2 Attribute `Target`
    #[serde(rename = "@Target")]
    pub target: String,
}

/// 13.5 Element edm:ActionImport
#[derive(Debug, Deserialize)]
pub struct ActionImport {
    /// 13.5.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 13.5.2 Attribute `Action`
    #[serde(rename = "@Action")]
    pub action: TypeName,
}

/// 13.6 Element edm:FunctionImport
///
/// Version 4 imports reference a `Function`. Version 2 imports carry
/// the whole signature themselves.
#[derive(Debug, Deserialize)]
pub struct FunctionImport {
    /// 13.6.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 13.6.2 Attribute `Function`
    #[serde(rename = "@Function")]
    pub function: Option<TypeName>,
    /// 13.6.3 Attribute `EntitySet`
    #[serde(rename = "@EntitySet")]
    pub entity_set: Option<String>,
    /// `ReturnType` (version 2)
    #[serde(rename = "@ReturnType")]
    pub return_type: Option<TypeName>,
    /// `m:HttpMethod` (version 2)
    #[serde(rename = "@HttpMethod")]
    pub http_method: Option<String>,
    #[serde(rename = "@label")]
    pub sap_label: Option<String>,
    #[serde(rename = "@action-for")]
    pub sap_action_for: Option<String>,
    /// Parameters (version 2)
    #[serde(rename = "$value", default)]
    pub items: Vec<DeFunctionImportItem>,
}

#[derive(Debug, Deserialize)]
pub enum DeFunctionImportItem {
    Parameter(FunctionImportParameter),
    #[serde(other)]
    Other,
}

/// Parameter of a version 2 function import.
#[derive(Debug, Deserialize)]
pub struct FunctionImportParameter {
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    #[serde(rename = "@Type")]
    pub ptype: TypeName,
    #[serde(rename = "@Nullable")]
    pub nullable: Option<bool>,
}

/// Validated edm:EntitySet
#[derive(Debug)]
pub struct EntitySet {
    pub name: SimpleIdentifier,
    pub entity_type: TypeName,
    pub sap_creatable: Option<bool>,
    pub sap_updatable: Option<bool>,
    pub sap_deletable: Option<bool>,
    pub sap_pageable: Option<bool>,
    pub sap_searchable: Option<bool>,
    pub sap_label: Option<String>,
    pub navigation_bindings: Vec<NavigationPropertyBinding>,
    pub annotations: Vec<Annotation>,
}

impl EntitySet {
    /// True if any SAP vendor attribute is present.
    #[must_use]
    pub const fn has_sap_attributes(&self) -> bool {
        self.sap_creatable.is_some()
            || self.sap_updatable.is_some()
            || self.sap_deletable.is_some()
            || self.sap_pageable.is_some()
            || self.sap_searchable.is_some()
            || self.sap_label.is_some()
    }
}

/// Validated edm:Singleton
#[derive(Debug)]
pub struct Singleton {
    pub name: SimpleIdentifier,
    pub stype: TypeName,
    pub navigation_bindings: Vec<NavigationPropertyBinding>,
}

/// Validated edm:EntityContainer
#[derive(Debug, Default)]
pub struct EntityContainer {
    pub name: SimpleIdentifier,
    pub entity_sets: Vec<EntitySet>,
    pub singletons: Vec<Singleton>,
    pub function_imports: Vec<FunctionImport>,
    pub action_imports: Vec<ActionImport>,
    pub annotations: Vec<Annotation>,
}

fn split_binding_items(
    items: Vec<DeBindingItem>,
) -> (Vec<NavigationPropertyBinding>, Vec<Annotation>) {
    items
        .into_iter()
        .fold((Vec::new(), Vec::new()), |(mut bs, mut anns), v| {
            match v {
                DeBindingItem::NavigationPropertyBinding(b) => bs.push(b),
                DeBindingItem::Annotation(a) => anns.push(a),
                DeBindingItem::Other => (),
            }
            (bs, anns)
        })
}

impl DeEntitySet {
    #[must_use]
    pub fn validate(self) -> EntitySet {
        let (navigation_bindings, annotations) = split_binding_items(self.items);
        EntitySet {
            name: self.name,
            entity_type: self.entity_type,
            sap_creatable: self.sap_creatable,
            sap_updatable: self.sap_updatable,
            sap_deletable: self.sap_deletable,
            sap_pageable: self.sap_pageable,
            sap_searchable: self.sap_searchable,
            sap_label: self.sap_label,
            navigation_bindings,
            annotations,
        }
    }
}

impl DeSingleton {
    #[must_use]
    pub fn validate(self) -> Singleton {
        let (navigation_bindings, _) = split_binding_items(self.items);
        Singleton {
            name: self.name,
            stype: self.stype,
            navigation_bindings,
        }
    }
}

impl FunctionImport {
    /// Parameters of a version 2 import.
    pub fn parameters(&self) -> impl Iterator<Item = &FunctionImportParameter> {
        self.items.iter().filter_map(|v| match v {
            DeFunctionImportItem::Parameter(p) => Some(p),
            DeFunctionImportItem::Other => None,
        })
    }
}

impl DeEntityContainer {
    #[must_use]
    pub fn validate(self) -> EntityContainer {
        let container = EntityContainer {
            name: self.name,
            ..EntityContainer::default()
        };
        self.items.into_iter().fold(container, |mut c, v| {
            match v {
                DeEntityContainerItem::EntitySet(v) => c.entity_sets.push(v.validate()),
                DeEntityContainerItem::Singleton(v) => c.singletons.push(v.validate()),
                DeEntityContainerItem::FunctionImport(v) => c.function_imports.push(v),
                DeEntityContainerItem::ActionImport(v) => c.action_imports.push(v),
                DeEntityContainerItem::Annotation(v) => c.annotations.push(v),
                DeEntityContainerItem::Other => (),
            }
            c
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::de::from_str;

    #[test]
    fn v4_container() {
        let c: DeEntityContainer = from_str(
            r#"<EntityContainer Name="Container">
                 <EntitySet Name="Orders" EntityType="NW.Order">
                   <NavigationPropertyBinding Path="Customer" Target="Customers"/>
                   <Annotation Term="Org.OData.Capabilities.V1.TopSupported" Bool="false"/>
                 </EntitySet>
                 <Singleton Name="Me" Type="NW.Person">
                   <NavigationPropertyBinding Path="Friends" Target="NW.Container/People"/>
                 </Singleton>
                 <FunctionImport Name="GetNearest" Function="NW.GetNearest" EntitySet="Airports"/>
                 <ActionImport Name="Reset" Action="NW.Reset"/>
               </EntityContainer>"#,
        )
        .unwrap();
        let c = c.validate();
        assert_eq!(c.name, "Container");
        assert_eq!(c.entity_sets[0].navigation_bindings[0].target, "Customers");
        assert_eq!(c.entity_sets[0].annotations.len(), 1);
        assert!(!c.entity_sets[0].has_sap_attributes());
        assert_eq!(c.singletons[0].navigation_bindings[0].path, "Friends");
        assert!(c.function_imports[0].function.is_some());
        assert_eq!(c.action_imports[0].name, "Reset");
    }

    #[test]
    fn v2_container_with_sap_attributes() {
        let c: DeEntityContainer = from_str(
            r#"<EntityContainer Name="GWSAMPLE_Entities" m:IsDefaultEntityContainer="true">
                 <EntitySet Name="ContactSet" EntityType="GWSAMPLE.Contact"
                            sap:creatable="false" sap:deletable="false" sap:pageable="false"
                            sap:searchable="true" sap:label="Contacts"/>
                 <AssociationSet Name="Assoc_Contact" Association="GWSAMPLE.Assoc">
                   <End EntitySet="ContactSet" Role="FromRole"/>
                 </AssociationSet>
                 <FunctionImport Name="SalesOrder_Confirm" ReturnType="GWSAMPLE.SalesOrder"
                                 EntitySet="SalesOrderSet" m:HttpMethod="POST"
                                 sap:label="Confirm" sap:action-for="GWSAMPLE.SalesOrder">
                   <Parameter Name="SalesOrderID" Type="Edm.String" Mode="In" MaxLength="10"/>
                 </FunctionImport>
               </EntityContainer>"#,
        )
        .unwrap();
        let c = c.validate();
        let set = &c.entity_sets[0];
        assert!(set.has_sap_attributes());
        assert_eq!(set.sap_creatable, Some(false));
        assert_eq!(set.sap_deletable, Some(false));
        assert_eq!(set.sap_searchable, Some(true));
        assert_eq!(set.sap_label.as_deref(), Some("Contacts"));
        let fi = &c.function_imports[0];
        assert!(fi.function.is_none());
        assert_eq!(fi.http_method.as_deref(), Some("POST"));
        assert_eq!(fi.sap_action_for.as_deref(), Some("GWSAMPLE.SalesOrder"));
        assert_eq!(fi.parameters().count(), 1);
    }
}
