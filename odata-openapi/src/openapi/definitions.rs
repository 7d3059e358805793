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

use crate::openapi::swagger::Schema;
use crate::openapi::type_map::TypeMapper;
use crate::service::EntityProperty;
use crate::service::PropertyType;
use crate::service::Service;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Generated `definitions` and the definition key of every entity set.
#[derive(Debug)]
pub struct Definitions {
    pub schemas: IndexMap<String, Schema>,
    /// Entity set name to definition key.
    pub entity_set_keys: HashMap<String, String>,
}

/// Fixed schema of the error response body.
#[must_use]
pub fn error_schema() -> Schema {
    let string = || Schema::typed("string", None);
    Schema::object(IndexMap::from([(
        "error".to_string(),
        Schema::object(IndexMap::from([
            ("code".to_string(), string()),
            ("message".to_string(), string()),
        ])),
    )]))
}

/// Build definitions for all types of the service.
///
/// Entity types reachable from entity sets come first. When a key
/// `{namespace}.{Type}` is already held by a different type (same
/// local name in another declaration) the set's type is keyed by
/// `{namespace}.{EntitySet}` instead.
#[must_use]
pub fn build(service: &Service, types: &TypeMapper) -> Definitions {
    let mut schemas = IndexMap::new();
    let mut owners = HashMap::new();
    let mut entity_set_keys = HashMap::new();
    schemas.insert("Error".to_string(), error_schema());

    for set in &service.entity_sets {
        let et = &set.entity_type;
        let qname = et.qualified_name();
        let mut key = format!("{}.{}", set.namespace, et.name);
        if owners.get(&key).is_some_and(|owner| owner != &qname) {
            key = format!("{}.{}", set.namespace, set.name);
            log::debug!("definition of {qname} for {} keyed as {key}", set.name);
        }
        if !schemas.contains_key(&key) {
            owners.insert(key.clone(), qname);
            schemas.insert(key.clone(), object_schema(&et.properties, types));
        }
        entity_set_keys.insert(set.name.clone(), key);
    }
    for et in &service.entity_types {
        let qname = et.qualified_name();
        if !owners.values().any(|owner| owner == &qname) {
            schemas
                .entry(qname.clone())
                .or_insert_with(|| object_schema(&et.properties, types));
            owners.entry(qname.clone()).or_insert(qname);
        }
    }
    for ct in &service.complex_types {
        schemas
            .entry(ct.qualified_name())
            .or_insert_with(|| object_schema(&ct.properties, types));
    }
    for singleton in &service.singletons {
        schemas
            .entry(format!("{}.{}", service.default_namespace, singleton.name))
            .or_insert_with(|| object_schema(&singleton.properties, types));
    }
    Definitions {
        schemas,
        entity_set_keys,
    }
}

fn object_schema(properties: &[EntityProperty], types: &TypeMapper) -> Schema {
    let required = properties
        .iter()
        .filter(|p| p.required)
        .map(|p| p.name.clone())
        .collect::<Vec<_>>();
    Schema {
        required: (!required.is_empty()).then_some(required),
        ..Schema::object(
            properties
                .iter()
                .map(|p| (p.name.clone(), property_schema(p, types)))
                .collect(),
        )
    }
}

/// Schema of a single property.
#[must_use]
pub fn property_schema(p: &EntityProperty, types: &TypeMapper) -> Schema {
    let mut schema = match &p.ptype {
        PropertyType::Declared(t) => match &p.enum_members {
            Some(members) => {
                let enum_schema = Schema {
                    enum_values: Some(members.clone()),
                    ..Schema::typed("string", None)
                };
                if t.starts_with("Collection(") {
                    Schema::array(enum_schema)
                } else {
                    enum_schema
                }
            }
            None => types.schema(t),
        },
        PropertyType::NavigationCollection(target) => Schema::array(Schema::reference(target)),
        PropertyType::NavigationSingle { target, relation } => Schema {
            x_ref: Some(relation.clone()),
            ..Schema::reference(target)
        },
    };
    if let Some(sap) = &p.sap {
        schema.description.clone_from(&sap.label);
        if !sap.creatable && !sap.updatable {
            schema.read_only = Some(true);
        }
    }
    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::EntitySet;
    use crate::service::EntityType;
    use crate::service::SapPropertyCapabilities;
    use serde_json::json;

    fn entity_type(namespace: &str, name: &str, key: &str) -> EntityType {
        let mut id = EntityProperty::declared(key, "Edm.Int32");
        id.required = true;
        EntityType {
            name: name.into(),
            namespace: namespace.into(),
            is_abstract: false,
            base_types: Vec::new(),
            properties: vec![id.clone(), EntityProperty::declared("Name", "Edm.String")],
            key: vec![id],
            paths: Vec::new(),
            annotations: Vec::new(),
        }
    }

    fn entity_set(name: &str, entity_type: EntityType) -> EntitySet {
        EntitySet {
            name: name.into(),
            namespace: entity_type.namespace.clone(),
            entity_type,
            annotations: Vec::new(),
            function_imports: Vec::new(),
            sap: None,
        }
    }

    #[test]
    fn error_schema_is_first() {
        let service = Service::default();
        let defs = build(&service, &TypeMapper::new(&service));
        assert_eq!(defs.schemas.keys().collect::<Vec<_>>(), vec!["Error"]);
        assert_eq!(
            serde_json::to_value(&defs.schemas["Error"]).unwrap(),
            json!({
                "type": "object",
                "properties": {
                    "error": {
                        "type": "object",
                        "properties": {"code": {"type": "string"}, "message": {"type": "string"}}
                    }
                }
            })
        );
    }

    #[test]
    fn entity_type_schema() {
        let product = entity_type("NW", "Product", "Id");
        let service = Service {
            entity_sets: vec![entity_set("Products", product.clone())],
            entity_types: vec![product],
            ..Service::default()
        };
        let defs = build(&service, &TypeMapper::new(&service));
        assert_eq!(defs.schemas.len(), 2);
        assert_eq!(defs.entity_set_keys["Products"], "NW.Product");
        assert_eq!(
            serde_json::to_value(&defs.schemas["NW.Product"]).unwrap(),
            json!({
                "type": "object",
                "properties": {
                    "Id": {"type": "integer", "format": "int32"},
                    "Name": {"type": "string"}
                },
                "required": ["Id"]
            })
        );
    }

    #[test]
    fn colliding_type_names_are_keyed_by_set() {
        let first = entity_type("NW", "Product", "Id");
        // Another `Product` exposed under the same set namespace.
        let mut second_set = entity_set("Items", entity_type("Other", "Product", "Code"));
        second_set.namespace = "NW".into();
        let service = Service {
            entity_sets: vec![entity_set("Products", first), second_set],
            ..Service::default()
        };
        let defs = build(&service, &TypeMapper::new(&service));
        assert_eq!(defs.entity_set_keys["Products"], "NW.Product");
        assert_eq!(defs.entity_set_keys["Items"], "NW.Items");
        assert!(defs.schemas["NW.Items"].properties.as_ref().unwrap().contains_key("Code"));
    }

    #[test]
    fn sap_label_and_read_only() {
        let mut p = EntityProperty::declared("CreatedAt", "Edm.DateTime");
        p.sap = Some(SapPropertyCapabilities {
            creatable: false,
            updatable: false,
            label: Some("Created".into()),
            ..SapPropertyCapabilities::default()
        });
        let service = Service::default();
        assert_eq!(
            serde_json::to_value(property_schema(&p, &TypeMapper::new(&service))).unwrap(),
            json!({
                "type": "string",
                "format": "date-time",
                "description": "Created",
                "readOnly": true
            })
        );
    }
}
