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

use crate::edmx;
use crate::edmx::Edmx;
use crate::service::index::collection_inner;
use crate::service::index::SchemaIndex;
use crate::service::model::Action;
use crate::service::model::ComplexType;
use crate::service::model::ContainmentPath;
use crate::service::model::EntityProperty;
use crate::service::model::EntitySet;
use crate::service::model::EntityType;
use crate::service::model::EnumType;
use crate::service::model::Function;
use crate::service::model::FunctionImport;
use crate::service::model::Parameter;
use crate::service::model::PropertyType;
use crate::service::model::RefConstraint;
use crate::service::model::Relation;
use crate::service::model::ReturnType;
use crate::service::model::SapEntitySetCapabilities;
use crate::service::model::SapPropertyCapabilities;
use crate::service::model::Service;
use crate::service::model::Singleton;
use crate::service::ParseError;
use indexmap::IndexMap;

/// Build the service model from a validated EDMX document.
///
/// # Errors
///
/// - `ParseError::NoEntityContainer` if no schema declares an entity
///   container.
pub fn parse(edmx: &Edmx) -> Result<Service, ParseError> {
    let schemas = &edmx.data_services.schemas;
    let default_namespace = schemas
        .iter()
        .find(|s| !s.entity_containers.is_empty())
        .map(|s| s.namespace.clone())
        .ok_or(ParseError::NoEntityContainer)?;

    let index = SchemaIndex::new(edmx);
    let parser = Parser { index: &index };

    let entity_types = index
        .entity_types
        .iter()
        .map(|(ns, et)| {
            let qname = format!("{ns}.{}", et.name);
            let built = parser.entity_type(&qname);
            (qname, built)
        })
        .collect::<IndexMap<_, _>>();

    let mut entity_sets = Vec::new();
    let mut function_imports = Vec::new();
    let mut singletons = Vec::new();
    for schema in schemas {
        for container in &schema.entity_containers {
            let (sets, imports) =
                parser.entity_sets(&schema.namespace, container, &entity_types);
            entity_sets.extend(sets);
            function_imports.extend(imports);
        }
    }
    for schema in schemas {
        for container in &schema.entity_containers {
            singletons.extend(
                container
                    .singletons
                    .iter()
                    .map(|s| parser.singleton(s, &entity_sets, &entity_types)),
            );
        }
    }

    let service = Service {
        entity_sets,
        entity_types: entity_types.into_values().collect(),
        complex_types: index
            .complex_types
            .iter()
            .map(|(ns, ct)| parser.complex_type(&format!("{ns}.{}", ct.name)))
            .collect(),
        enum_types: index
            .enum_types
            .iter()
            .map(|(ns, et)| EnumType {
                name: et.name.clone(),
                namespace: (*ns).to_string(),
                members: et.members.clone(),
            })
            .collect(),
        actions: schemas
            .iter()
            .flat_map(|s| s.actions.iter().map(|a| parser.action(&s.namespace, a)))
            .collect(),
        functions: schemas
            .iter()
            .flat_map(|s| s.functions.iter().map(|f| parser.function(&s.namespace, f)))
            .collect(),
        function_imports,
        singletons,
        version: edmx.version.clone(),
        default_namespace,
    };
    log::info!(
        "parsed service: {} entity sets, {} entity types, {} complex types, {} actions, {} functions",
        service.entity_sets.len(),
        service.entity_types.len(),
        service.complex_types.len(),
        service.actions.len(),
        service.functions.len(),
    );
    Ok(service)
}

struct Parser<'a, 'b> {
    index: &'b SchemaIndex<'a>,
}

impl Parser<'_, '_> {
    fn entity_type(&self, qname: &str) -> EntityType {
        let chain = self.index.entity_type_chain(qname);
        let mut properties = IndexMap::new();
        let mut paths = Vec::new();
        // Oldest ancestor first so that derived types override.
        for (_, _, et) in chain.iter().rev() {
            for p in &et.properties {
                properties.insert(p.name.clone(), self.structural_property(p));
            }
            for np in &et.navigation_properties {
                let Some(ptype) = &np.ptype else {
                    continue;
                };
                let ptype = self.index.normalize(ptype.inner());
                if np.contains_target == Some(true) {
                    paths.push(ContainmentPath {
                        name: np.name.clone(),
                        ptype,
                    });
                } else {
                    properties.insert(np.name.clone(), navigation_property(np, ptype));
                }
            }
        }

        let key = chain
            .iter()
            .find_map(|(_, _, et)| et.key.as_ref())
            .map(|names| {
                names
                    .iter()
                    .filter_map(|name| {
                        let p = properties.get(name).cloned();
                        if p.is_none() {
                            log::warn!("key property {name} of {qname} is not declared");
                        }
                        p
                    })
                    .collect()
            })
            .unwrap_or_default();

        let annotations = chain
            .iter()
            .flat_map(|(name, _, et)| {
                et.annotations
                    .iter()
                    .map(|a| a.term.inner().clone())
                    .chain(self.index.terms_for(name))
            })
            .collect();

        let (name, namespace, is_abstract, base_types) = match chain.split_first() {
            Some(((_, ns, et), rest)) => (
                et.name.clone(),
                (*ns).to_string(),
                et.r#abstract,
                rest.iter().map(|(n, _, _)| n.clone()).collect(),
            ),
            None => split_qualified(qname),
        };
        log::debug!("entity type {qname}: {} properties", properties.len());
        EntityType {
            name,
            namespace,
            is_abstract,
            base_types,
            properties: properties.into_values().collect(),
            key,
            paths,
            annotations,
        }
    }

    fn complex_type(&self, qname: &str) -> ComplexType {
        let chain = self.index.complex_type_chain(qname);
        let mut properties = IndexMap::new();
        for (_, _, ct) in chain.iter().rev() {
            for p in &ct.properties {
                properties.insert(p.name.clone(), self.structural_property(p));
            }
            for np in &ct.navigation_properties {
                if let Some(ptype) = &np.ptype {
                    let ptype = self.index.normalize(ptype.inner());
                    properties.insert(np.name.clone(), navigation_property(np, ptype));
                }
            }
        }
        let (name, namespace) = chain.first().map_or_else(
            || {
                let (name, namespace, _, _) = split_qualified(qname);
                (name, namespace)
            },
            |(_, ns, ct)| (ct.name.clone(), (*ns).to_string()),
        );
        ComplexType {
            name,
            namespace,
            properties: properties.into_values().collect(),
        }
    }

    fn structural_property(&self, p: &edmx::property::Property) -> EntityProperty {
        let ptype = self.index.normalize(p.ptype.inner());
        let member_type = collection_inner(&ptype).unwrap_or(&ptype);
        let enum_members = self.index.enum_type(member_type).map(|e| e.members.clone());
        let sap = p.has_sap_attributes().then(|| SapPropertyCapabilities {
            creatable: p.sap_creatable.unwrap_or(true),
            updatable: p.sap_updatable.unwrap_or(true),
            filterable: p.sap_filterable.unwrap_or(true),
            sortable: p.sap_sortable.unwrap_or(true),
            label: p.sap_label.clone(),
        });
        EntityProperty {
            name: p.name.clone(),
            ptype: PropertyType::Declared(ptype),
            required: p.nullable == Some(false),
            enum_members,
            sap,
        }
    }

    fn entity_sets(
        &self,
        namespace: &str,
        container: &edmx::EntityContainer,
        entity_types: &IndexMap<String, EntityType>,
    ) -> (Vec<EntitySet>, Vec<FunctionImport>) {
        let imports = container
            .function_imports
            .iter()
            .filter(|fi| fi.function.is_none())
            .map(|fi| self.function_import(fi))
            .collect::<Vec<_>>();
        let sets = container
            .entity_sets
            .iter()
            .filter_map(|set| {
                let type_name = self.index.normalize(set.entity_type.inner());
                let Some(entity_type) = entity_types.get(&type_name) else {
                    log::warn!(
                        "entity set {} references unknown entity type {type_name}",
                        set.name
                    );
                    return None;
                };
                let short_target = format!("{}/{}", container.name, set.name);
                let full_target = format!("{namespace}.{short_target}");
                let annotations = entity_type
                    .annotations
                    .iter()
                    .cloned()
                    .chain(self.index.terms_for(&short_target))
                    .chain(self.index.terms_for(&full_target))
                    .chain(set.annotations.iter().map(|a| a.term.inner().clone()))
                    .collect();
                let sap = set.has_sap_attributes().then(|| SapEntitySetCapabilities {
                    creatable: set.sap_creatable.unwrap_or(true),
                    updatable: set.sap_updatable.unwrap_or(true),
                    deletable: set.sap_deletable.unwrap_or(true),
                    pageable: set.sap_pageable.unwrap_or(true),
                    searchable: set.sap_searchable.unwrap_or(false),
                    label: set.sap_label.clone(),
                });
                Some(EntitySet {
                    name: set.name.clone(),
                    namespace: entity_type.namespace.clone(),
                    entity_type: entity_type.clone(),
                    annotations,
                    function_imports: imports
                        .iter()
                        .filter(|fi| fi.entity_set.as_deref() == Some(set.name.as_str()))
                        .cloned()
                        .collect(),
                    sap,
                })
            })
            .collect::<Vec<_>>();
        let unattached = imports
            .into_iter()
            .filter(|fi| {
                fi.entity_set
                    .as_ref()
                    .map_or(true, |name| !sets.iter().any(|s| &s.name == name))
            })
            .collect();
        (sets, unattached)
    }

    fn function_import(&self, fi: &edmx::entity_container::FunctionImport) -> FunctionImport {
        FunctionImport {
            name: fi.name.clone(),
            http_method: fi
                .http_method
                .clone()
                .unwrap_or_else(|| "GET".to_string()),
            parameters: fi
                .parameters()
                .map(|p| Parameter {
                    name: p.name.clone(),
                    ptype: self.index.normalize(p.ptype.inner()),
                    nullable: p.nullable.unwrap_or(true),
                })
                .collect(),
            entity_set: fi.entity_set.clone(),
            return_type: fi
                .return_type
                .as_ref()
                .map(|t| self.index.normalize(t.inner())),
            label: fi.sap_label.clone(),
            action_for: fi.sap_action_for.clone(),
        }
    }

    fn singleton(
        &self,
        singleton: &edmx::entity_container::Singleton,
        entity_sets: &[EntitySet],
        entity_types: &IndexMap<String, EntityType>,
    ) -> Singleton {
        let stype = self.index.normalize(singleton.stype.inner());
        let declared = entity_types.get(&stype);
        let properties = singleton
            .navigation_bindings
            .iter()
            .filter_map(|binding| {
                let set_name = binding
                    .target
                    .rsplit_once('/')
                    .map_or(binding.target.as_str(), |(_, set)| set);
                let Some(set) = entity_sets.iter().find(|s| s.name == set_name) else {
                    log::warn!(
                        "singleton {} binds {} to unknown entity set {}",
                        singleton.name,
                        binding.path,
                        binding.target
                    );
                    return None;
                };
                let target = set.entity_type.qualified_name();
                let nav = declared
                    .and_then(|et| et.properties.iter().find(|p| p.name == binding.path));
                let ptype = match nav.map(|p| &p.ptype) {
                    Some(PropertyType::NavigationSingle { relation, .. }) => {
                        PropertyType::NavigationSingle {
                            target,
                            relation: relation.clone(),
                        }
                    }
                    _ => PropertyType::NavigationCollection(target),
                };
                Some(EntityProperty {
                    name: binding.path.clone(),
                    ptype,
                    required: false,
                    enum_members: None,
                    sap: None,
                })
            })
            .collect();
        Singleton {
            name: singleton.name.clone(),
            stype,
            properties,
        }
    }

    fn parameters(&self, parameters: &[edmx::action::Parameter]) -> Vec<Parameter> {
        parameters
            .iter()
            .map(|p| Parameter {
                name: p.name.clone(),
                ptype: self.index.normalize(p.ptype.inner()),
                nullable: p.nullable.unwrap_or(true),
            })
            .collect()
    }

    fn return_type(&self, rt: Option<&edmx::action::ReturnType>) -> Option<ReturnType> {
        rt.map(|rt| ReturnType {
            rtype: self.index.normalize(rt.rtype.inner()),
            nullable: rt.nullable.unwrap_or(true),
        })
    }

    fn action(&self, namespace: &str, a: &edmx::Action) -> Action {
        Action {
            name: a.name.clone(),
            namespace: namespace.to_string(),
            is_bound: a.is_bound,
            parameters: self.parameters(&a.parameters),
            return_type: self.return_type(a.return_type.as_ref()),
            entity_set_path: a.entity_set_path.clone(),
        }
    }

    fn function(&self, namespace: &str, f: &edmx::Function) -> Function {
        Function {
            name: f.name.clone(),
            namespace: namespace.to_string(),
            is_bound: f.is_bound,
            is_composable: f.is_composable,
            parameters: self.parameters(&f.parameters),
            return_type: self.return_type(f.return_type.as_ref()),
            entity_set_path: f.entity_set_path.clone(),
        }
    }
}

fn navigation_property(np: &edmx::property::NavigationProperty, ptype: String) -> EntityProperty {
    let ptype = match collection_inner(&ptype) {
        Some(inner) => PropertyType::NavigationCollection(inner.to_string()),
        None => PropertyType::NavigationSingle {
            target: ptype,
            relation: Relation {
                name: np.name.clone(),
                partner: np.partner.clone(),
                constraints: np
                    .referential_constraints
                    .iter()
                    .map(|c| RefConstraint {
                        property: c.property.clone(),
                        ref_property: c.referenced_property.clone(),
                    })
                    .collect(),
            },
        },
    };
    EntityProperty {
        name: np.name.clone(),
        required: np.nullable == Some(false) && matches!(ptype, PropertyType::NavigationSingle { .. }),
        ptype,
        enum_members: None,
        sap: None,
    }
}

fn split_qualified(qname: &str) -> (String, String, bool, Vec<String>) {
    let (namespace, name) = qname.rsplit_once('.').unwrap_or(("", qname));
    (name.to_string(), namespace.to_string(), false, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NORTHWIND: &str = r#"<edmx:Edmx Version="4.0">
      <edmx:DataServices>
        <Schema Namespace="Northwind.Model" Alias="NW">
          <EnumType Name="Status"><Member Name="Open"/><Member Name="Closed"/></EnumType>
          <EntityType Name="Entity" Abstract="true">
            <Key><PropertyRef Name="Id"/></Key>
            <Property Name="Id" Type="Edm.Int32" Nullable="false"/>
            <Property Name="Title" Type="Edm.String"/>
          </EntityType>
          <EntityType Name="Order" BaseType="NW.Entity">
            <Property Name="Title" Type="Edm.Int64"/>
            <Property Name="Status" Type="NW.Status"/>
            <NavigationProperty Name="Customer" Type="NW.Customer" Partner="Orders" Nullable="false">
              <ReferentialConstraint Property="CustomerId" ReferencedProperty="Id"/>
            </NavigationProperty>
            <NavigationProperty Name="Lines" Type="Collection(NW.OrderLine)" ContainsTarget="true"/>
            <NavigationProperty Name="Legacy" Relationship="NW.Assoc" ToRole="x" FromRole="y"/>
          </EntityType>
          <EntityType Name="OrderLine">
            <Key><PropertyRef Name="LineNo"/></Key>
            <Property Name="LineNo" Type="Edm.Int16" Nullable="false"/>
          </EntityType>
          <EntityType Name="Customer">
            <Key><PropertyRef Name="Id"/></Key>
            <Property Name="Id" Type="Edm.String" Nullable="false"/>
            <Property Name="Addresses" Type="Collection(NW.Address)"/>
            <NavigationProperty Name="Orders" Type="Collection(NW.Order)" Partner="Customer"/>
          </EntityType>
          <ComplexType Name="Address"><Property Name="City" Type="Edm.String"/></ComplexType>
          <ComplexType Name="GeoAddress" BaseType="NW.Address">
            <Property Name="Lat" Type="Edm.Double"/>
          </ComplexType>
          <Function Name="GetTopOrders" IsBound="true">
            <Parameter Name="bindingParameter" Type="Collection(NW.Order)"/>
            <Parameter Name="count" Type="Edm.Int32"/>
            <ReturnType Type="Collection(NW.Order)"/>
          </Function>
          <Action Name="Reset"/>
          <Annotations Target="NW.Entity">
            <Annotation Term="Org.OData.Capabilities.V1.SkipSupported" Bool="false"/>
          </Annotations>
          <Annotations Target="Northwind.Service.Container/Orders">
            <Annotation Term="Org.OData.Capabilities.V1.TopSupported" Bool="false"/>
          </Annotations>
        </Schema>
        <Schema Namespace="Northwind.Service">
          <EntityContainer Name="Container">
            <EntitySet Name="Orders" EntityType="NW.Order">
              <Annotation Term="Org.OData.Capabilities.V1.CountRestrictions"/>
            </EntitySet>
            <EntitySet Name="Customers" EntityType="Northwind.Model.Customer"/>
            <EntitySet Name="Ghosts" EntityType="NW.Ghost"/>
            <Singleton Name="Me" Type="NW.Customer">
              <NavigationPropertyBinding Path="Orders" Target="Orders"/>
              <NavigationPropertyBinding Path="Missing" Target="Nowhere"/>
            </Singleton>
          </EntityContainer>
        </Schema>
      </edmx:DataServices>
    </edmx:Edmx>"#;

    fn northwind() -> Service {
        parse(&Edmx::parse(NORTHWIND).unwrap()).unwrap()
    }

    fn names(props: &[EntityProperty]) -> Vec<&str> {
        props.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn service_header() {
        let service = northwind();
        assert_eq!(service.version, "4.0");
        assert_eq!(service.default_namespace, "Northwind.Service");
        assert_eq!(service.entity_types.len(), 4);
        assert_eq!(service.enum_types[0].members, vec!["Open", "Closed"]);
    }

    #[test]
    fn inheritance_flattening() {
        let service = northwind();
        let order = &service.entity_sets[0].entity_type;
        assert_eq!(order.name, "Order");
        assert_eq!(order.namespace, "Northwind.Model");
        assert_eq!(order.base_types, vec!["Northwind.Model.Entity"]);
        assert_eq!(names(&order.properties), vec!["Id", "Title", "Status", "Customer"]);
        // Derived declaration replaces the inherited one in place.
        assert_eq!(order.properties[1].declared_type(), Some("Edm.Int64"));
        assert_eq!(names(&order.key), vec!["Id"]);
        assert!(order.key[0].required);
    }

    #[test]
    fn enum_and_navigation_properties() {
        let service = northwind();
        let order = &service.entity_sets[0].entity_type;
        assert_eq!(
            order.properties[2].enum_members,
            Some(vec!["Open".to_string(), "Closed".to_string()])
        );
        assert_eq!(order.properties[2].declared_type(), Some("Northwind.Model.Status"));
        assert_eq!(
            order.properties[3].ptype,
            PropertyType::NavigationSingle {
                target: "Northwind.Model.Customer".into(),
                relation: Relation {
                    name: "Customer".into(),
                    partner: Some("Orders".into()),
                    constraints: vec![RefConstraint {
                        property: "CustomerId".into(),
                        ref_property: "Id".into(),
                    }],
                },
            }
        );
        assert!(order.properties[3].required);
        assert_eq!(
            order.paths,
            vec![ContainmentPath {
                name: "Lines".into(),
                ptype: "Collection(Northwind.Model.OrderLine)".into(),
            }]
        );
        let customer = &service.entity_sets[1].entity_type;
        assert_eq!(
            customer.properties[2].ptype,
            PropertyType::NavigationCollection("Northwind.Model.Order".into())
        );
        assert_eq!(
            customer.properties[1].declared_type(),
            Some("Collection(Northwind.Model.Address)")
        );
    }

    #[test]
    fn complex_type_inheritance() {
        let service = northwind();
        let geo = &service.complex_types[1];
        assert_eq!(geo.qualified_name(), "Northwind.Model.GeoAddress");
        assert_eq!(names(&geo.properties), vec!["City", "Lat"]);
    }

    #[test]
    fn annotations_and_unknown_sets() {
        let service = northwind();
        assert_eq!(service.entity_sets.len(), 2);
        let orders = &service.entity_sets[0];
        assert_eq!(orders.namespace, "Northwind.Model");
        assert_eq!(
            orders.entity_type.annotations,
            vec!["Org.OData.Capabilities.V1.SkipSupported"]
        );
        assert_eq!(
            orders.annotations,
            vec![
                "Org.OData.Capabilities.V1.SkipSupported",
                "Org.OData.Capabilities.V1.TopSupported",
                "Org.OData.Capabilities.V1.CountRestrictions",
            ]
        );
        assert!(service.entity_sets[1].annotations.is_empty());
    }

    #[test]
    fn operations() {
        let service = northwind();
        let f = &service.functions[0];
        assert!(f.is_bound);
        assert_eq!(f.namespace, "Northwind.Model");
        assert_eq!(f.parameters[0].ptype, "Collection(Northwind.Model.Order)");
        assert_eq!(
            f.return_type.as_ref().map(|r| r.rtype.as_str()),
            Some("Collection(Northwind.Model.Order)")
        );
        assert_eq!(service.actions[0].name, "Reset");
        assert!(!service.actions[0].is_bound);
    }

    #[test]
    fn singleton_bindings() {
        let service = northwind();
        let me = &service.singletons[0];
        assert_eq!(me.stype, "Northwind.Model.Customer");
        assert_eq!(names(&me.properties), vec!["Orders"]);
        assert_eq!(
            me.properties[0].ptype,
            PropertyType::NavigationCollection("Northwind.Model.Order".into())
        );
    }

    #[test]
    fn no_entity_container() {
        let edmx = Edmx::parse(
            r#"<Edmx Version="4.0"><DataServices><Schema Namespace="NS"/></DataServices></Edmx>"#,
        )
        .unwrap();
        assert!(matches!(parse(&edmx), Err(ParseError::NoEntityContainer)));
    }

    #[test]
    fn v2_function_imports_and_sap_attributes() {
        let edmx = Edmx::parse(
            r#"<edmx:Edmx Version="1.0"><edmx:DataServices m:DataServiceVersion="2.0">
                 <Schema Namespace="GWSAMPLE">
                   <EntityType Name="SalesOrder" sap:content-version="1">
                     <Key><PropertyRef Name="SalesOrderID"/></Key>
                     <Property Name="SalesOrderID" Type="Edm.String" Nullable="false"
                               sap:creatable="false" sap:updatable="false" sap:label="Order ID"/>
                     <NavigationProperty Name="ToItems" Relationship="GWSAMPLE.Assoc"
                                         FromRole="FromRole" ToRole="ToRole"/>
                   </EntityType>
                   <EntityContainer Name="GWSAMPLE_Entities" m:IsDefaultEntityContainer="true">
                     <EntitySet Name="SalesOrderSet" EntityType="GWSAMPLE.SalesOrder"
                                sap:deletable="false" sap:pageable="false"/>
                     <FunctionImport Name="SalesOrder_Confirm" ReturnType="GWSAMPLE.SalesOrder"
                                     EntitySet="SalesOrderSet" m:HttpMethod="POST"
                                     sap:action-for="GWSAMPLE.SalesOrder">
                       <Parameter Name="SalesOrderID" Type="Edm.String" Mode="In"/>
                     </FunctionImport>
                     <FunctionImport Name="Ping" ReturnType="Edm.Boolean"/>
                   </EntityContainer>
                 </Schema>
               </edmx:DataServices></edmx:Edmx>"#,
        )
        .unwrap();
        let service = parse(&edmx).unwrap();
        assert_eq!(service.version, "1.0");
        let set = &service.entity_sets[0];
        let sap = set.sap.as_ref().unwrap();
        assert!(sap.creatable);
        assert!(!sap.deletable);
        assert!(!sap.pageable);
        assert_eq!(set.function_imports.len(), 1);
        assert_eq!(set.function_imports[0].http_method, "POST");
        assert_eq!(
            set.function_imports[0].action_for.as_deref(),
            Some("GWSAMPLE.SalesOrder")
        );
        assert_eq!(names(&set.entity_type.properties), vec!["SalesOrderID"]);
        let prop_sap = set.entity_type.properties[0].sap.as_ref().unwrap();
        assert!(!prop_sap.creatable);
        assert!(prop_sap.filterable);
        assert_eq!(prop_sap.label.as_deref(), Some("Order ID"));
        assert_eq!(service.function_imports.len(), 1);
        assert_eq!(service.function_imports[0].name, "Ping");
        assert_eq!(service.function_imports[0].http_method, "GET");
    }
}
