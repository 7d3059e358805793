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

use crate::openapi::naming::lower_first;
use crate::openapi::naming::path_identifier;
use crate::openapi::naming::path_segments;
use crate::openapi::naming::upper_first;
use crate::openapi::paths::empty_response;
use crate::openapi::paths::operation;
use crate::openapi::paths::responses;
use crate::openapi::paths::typed_path_parameter;
use crate::openapi::paths::PathBuilder;
use crate::openapi::swagger::HttpMethod;
use crate::openapi::swagger::Parameter;
use crate::openapi::swagger::PathItem;
use crate::openapi::swagger::Response;
use crate::openapi::swagger::Schema;
use crate::openapi::type_map::is_unquoted_key_type;
use crate::openapi::ConvertError;
use crate::service::index::collection_inner;
use crate::service::EntitySet;
use crate::service::EntityType;
use crate::service::SapEntitySetCapabilities;

/// Capability terms and the query options they suppress.
const QUERY_RESTRICTIONS: [(&str, &str); 5] = [
    ("$filter", "FilterRestrictions"),
    ("$top", "TopSupported"),
    ("$skip", "SkipSupported"),
    ("$orderby", "SortRestrictions"),
    ("$expand", "ExpandRestrictions"),
];
const COUNT_RESTRICTION: &str = "CountRestrictions";

/// Addressable collection of entities: an entity set or a
/// collection-valued containment navigation property.
pub struct Collection<'s> {
    pub name: &'s str,
    pub entity_type: &'s EntityType,
    /// Definition key used in `$ref`s.
    pub definition: String,
    pub annotations: &'s [String],
    pub sap: Option<&'s SapEntitySetCapabilities>,
}

impl Collection<'_> {
    fn allows(&self, check: impl Fn(&SapEntitySetCapabilities) -> bool) -> bool {
        self.sap.map_or(true, check)
    }

    fn restricted(&self, term: &str) -> bool {
        self.annotations.iter().any(|a| a.contains(term))
    }
}

/// Position of a collection in the path hierarchy.
#[derive(Default, Clone)]
pub struct Parent {
    /// Path of the parent entity, empty for entity sets.
    pub path: String,
    /// Names of parent entity types, outermost first.
    pub type_names: Vec<String>,
    /// Key parameters of all parents.
    pub key_parameters: Vec<Parameter>,
}

impl Parent {
    fn is_nested(&self) -> bool {
        !self.type_names.is_empty()
    }

    fn prefix(&self) -> String {
        self.type_names.concat()
    }

    fn collection_path(&self, name: &str) -> String {
        format!("{}/{name}", self.path)
    }

    /// Stem of operation ids used when the type based id is taken: the
    /// collection name at the top level, the whole path when nested.
    fn fallback_stem(&self, name: &str) -> String {
        if self.is_nested() {
            path_identifier(&self.collection_path(name))
        } else {
            upper_first(name)
        }
    }
}

impl PathBuilder<'_> {
    pub(crate) fn entity_set(&mut self, set: &EntitySet) -> Result<(), ConvertError> {
        let definition = self
            .definition_keys
            .get(&set.name)
            .cloned()
            .unwrap_or_else(|| set.entity_type.qualified_name());
        let collection = Collection {
            name: &set.name,
            entity_type: &set.entity_type,
            definition,
            annotations: &set.annotations,
            sap: set.sap.as_ref(),
        };
        self.collection(&collection, &Parent::default())?;
        for import in &set.function_imports {
            self.function_import(import)?;
        }
        Ok(())
    }

    /// Paths of one collection and, recursively, of its contained
    /// collections.
    pub(crate) fn collection(
        &mut self,
        collection: &Collection<'_>,
        parent: &Parent,
    ) -> Result<(), ConvertError> {
        let et = collection.entity_type;
        log::debug!("collection {}{} of {}", parent.path, collection.name, et.name);
        let collection_path = parent.collection_path(collection.name);
        if self.is_free(&collection_path) {
            let item = self.collection_item(collection, parent)?;
            self.insert(collection_path.clone(), item);
        }
        self.stream_properties(collection, parent, &collection_path)?;
        self.bound_operations(et, &collection_path, &parent.key_parameters, true)?;

        if et.key.is_empty() {
            return Ok(());
        }
        let own_keys = et
            .key
            .iter()
            .map(|k| {
                let name = if parent.is_nested() {
                    format!("{}{}", lower_first(&et.name), upper_first(&k.name))
                } else {
                    k.name.clone()
                };
                let ktype = k.declared_type().unwrap_or("Edm.String");
                (name, ktype)
            })
            .collect::<Vec<_>>();
        let key_expr = own_keys
            .iter()
            .map(|(name, ktype)| {
                if is_unquoted_key_type(ktype) {
                    format!("{{{name}}}")
                } else {
                    format!("'{{{name}}}'")
                }
            })
            .collect::<Vec<_>>()
            .join(",");
        let by_key_path = format!("{collection_path}({key_expr})");
        let mut key_parameters = parent.key_parameters.clone();
        for (name, ktype) in &own_keys {
            if !key_parameters.iter().any(|p| &p.name == name) {
                key_parameters.push(typed_path_parameter(name, ktype));
            }
        }

        if self.is_free(&by_key_path) {
            let item = self.by_key_item(collection, parent, &key_parameters)?;
            self.insert(by_key_path.clone(), item);
        }
        self.bound_operations(et, &by_key_path, &key_parameters, false)?;
        self.containment(collection, parent, &by_key_path, &key_parameters)
    }

    fn collection_item(
        &mut self,
        collection: &Collection<'_>,
        parent: &Parent,
    ) -> Result<PathItem, ConvertError> {
        let et = collection.entity_type;
        let prefix = parent.prefix();
        let mut item = PathItem::default();

        let mut parameters = parent.key_parameters.clone();
        parameters.extend(self.query_parameters(collection));
        let preferred = format!("get{prefix}{}", upper_first(collection.name));
        let id = if parent.is_nested() {
            self.registry
                .register_or(preferred, format!("get{}", parent.fallback_stem(collection.name)))?
        } else {
            self.registry.register(preferred)?
        };
        item.get = Some(operation(
            id,
            parameters,
            responses([(
                "200",
                Response::new(
                    format!("List of {}", et.name),
                    Some(Schema::value_array(Schema::reference(&collection.definition))),
                ),
            )]),
        ));

        if collection.allows(|sap| sap.creatable) {
            let id = self.registry.register_or(
                format!("create{prefix}{}", et.name),
                format!("create{}", parent.fallback_stem(collection.name)),
            )?;
            let mut parameters = parent.key_parameters.clone();
            parameters.push(Parameter::body(
                et.name.clone(),
                Schema::reference(&collection.definition),
            ));
            item.post = Some(operation(
                id,
                parameters,
                responses([(
                    "201",
                    Response::new(
                        "Created entity",
                        Some(Schema::reference(&collection.definition)),
                    ),
                )]),
            ));
        }
        Ok(item)
    }

    /// System query options of a collection `GET`.
    fn query_parameters(&self, collection: &Collection<'_>) -> Vec<Parameter> {
        let pageable = collection.allows(|sap| sap.pageable);
        let mut parameters = QUERY_RESTRICTIONS
            .iter()
            .filter(|(name, term)| {
                !collection.restricted(term) && (pageable || !matches!(*name, "$top" | "$skip"))
            })
            .map(|(name, _)| match *name {
                "$filter" => Parameter::query(*name, "string", Some("Filter items by property values")),
                "$top" => Parameter::query(*name, "string", Some("Show only the first n items")),
                "$skip" => Parameter::query(*name, "integer", Some("Skip the first n items")),
                "$orderby" => Parameter::query(*name, "string", Some("Order items by property values")),
                _ => Parameter::query(*name, "string", Some("Expand related entities")),
            })
            .collect::<Vec<_>>();
        if !collection.restricted(COUNT_RESTRICTION) {
            if self.service.version.starts_with('4') {
                parameters.push(Parameter::query("$count", "boolean", Some("Include count of items")));
            } else {
                parameters.push(Parameter::query(
                    "$inlinecount",
                    "string",
                    Some("Include count of items"),
                ));
            }
        }
        if collection.sap.is_some_and(|sap| sap.searchable) {
            parameters.push(Parameter::query("search", "string", Some("Search items by search phrases")));
        }
        parameters
    }

    fn by_key_item(
        &mut self,
        collection: &Collection<'_>,
        parent: &Parent,
        key_parameters: &[Parameter],
    ) -> Result<PathItem, ConvertError> {
        let et = collection.entity_type;
        let prefix = parent.prefix();
        let stem = parent.fallback_stem(collection.name);
        let mut item = PathItem::default();

        let id = self.registry.register_or(
            format!("get{prefix}{}ById", et.name),
            format!("get{stem}ById"),
        )?;
        item.get = Some(operation(
            id,
            key_parameters.to_vec(),
            responses([(
                "200",
                Response::new("Success", Some(Schema::reference(&collection.definition))),
            )]),
        ));

        if collection.allows(|sap| sap.deletable) {
            let id = self.registry.register_or(
                format!("delete{prefix}{}", et.name),
                format!("delete{stem}"),
            )?;
            item.delete = Some(operation(
                id,
                key_parameters.to_vec(),
                responses([("204", empty_response())]),
            ));
        }

        if collection.allows(|sap| sap.updatable) {
            let with_body = || {
                let mut parameters = key_parameters.to_vec();
                parameters.push(Parameter::body(
                    et.name.clone(),
                    Schema::reference(&collection.definition),
                ));
                parameters
            };
            let id = self.registry.register_or(
                format!("update{prefix}{}", et.name),
                format!("update{stem}"),
            )?;
            item.patch = Some(operation(
                id,
                with_body(),
                responses([
                    (
                        "200",
                        Response::new("Success", Some(Schema::reference(&collection.definition))),
                    ),
                    ("204", empty_response()),
                ]),
            ));
            if parent.is_nested() {
                let id = self.registry.register_or(
                    format!("replace{prefix}{}", et.name),
                    format!("replace{stem}"),
                )?;
                item.put = Some(operation(
                    id,
                    with_body(),
                    responses([("204", empty_response())]),
                ));
            }
        }
        Ok(item)
    }

    /// `Edm.Stream` properties are uploaded by file name.
    fn stream_properties(
        &mut self,
        collection: &Collection<'_>,
        parent: &Parent,
        collection_path: &str,
    ) -> Result<(), ConvertError> {
        let et = collection.entity_type;
        let prefix = parent.prefix();
        for p in &et.properties {
            if p.declared_type() != Some("Edm.Stream") {
                continue;
            }
            let path = format!("{collection_path}('{{fileName}}')/{}", p.name);
            if !self.is_free(&path) {
                continue;
            }
            let prop = upper_first(&p.name);
            let id = self.registry.register_or(
                format!("upload{prefix}{}{prop}", et.name),
                format!("upload{}{prop}", parent.fallback_stem(collection.name)),
            )?;
            let mut parameters = parent.key_parameters.clone();
            parameters.push(Parameter::path("fileName", "string", None));
            parameters.push(Parameter::body(
                "file",
                Schema::typed("string", Some("binary")),
            ));
            let mut item = PathItem::default();
            item.set(
                HttpMethod::Put,
                operation(id, parameters, responses([("204", empty_response())])),
            );
            self.insert(path, item);
        }
        Ok(())
    }

    /// Contained navigation of the entity at `by_key_path`.
    fn containment(
        &mut self,
        collection: &Collection<'_>,
        parent: &Parent,
        by_key_path: &str,
        key_parameters: &[Parameter],
    ) -> Result<(), ConvertError> {
        let et = collection.entity_type;
        let service = self.service;
        let mut type_names = parent.type_names.clone();
        type_names.push(et.name.clone());
        for contained in &et.paths {
            if path_segments(by_key_path).any(|s| s == contained.name) {
                log::debug!("{} already in {by_key_path}", contained.name);
                continue;
            }
            let inner = collection_inner(&contained.ptype);
            let target = inner.unwrap_or(&contained.ptype);
            let Some(nested) = service
                .entity_types
                .iter()
                .find(|t| t.qualified_name() == target)
            else {
                log::warn!("contained {} has unknown type {target}", contained.name);
                continue;
            };
            if inner.is_some() {
                let nested_collection = Collection {
                    name: &contained.name,
                    entity_type: nested,
                    definition: nested.qualified_name(),
                    annotations: &nested.annotations,
                    sap: None,
                };
                let nested_parent = Parent {
                    path: by_key_path.to_string(),
                    type_names: type_names.clone(),
                    key_parameters: key_parameters.to_vec(),
                };
                self.collection(&nested_collection, &nested_parent)?;
            } else {
                let path = format!("{by_key_path}/{}", contained.name);
                if !self.is_free(&path) {
                    continue;
                }
                let chain = format!("{}{}", type_names.concat(), upper_first(&contained.name));
                let stem = path_identifier(&path);
                let get_id = self
                    .registry
                    .register_or(format!("get{chain}"), format!("get{stem}"))?;
                let put_id = self
                    .registry
                    .register_or(format!("update{chain}"), format!("update{stem}"))?;
                let reference = Schema::reference(&nested.qualified_name());
                let mut put_parameters = key_parameters.to_vec();
                put_parameters.push(Parameter::body(nested.name.clone(), reference.clone()));
                let mut item = PathItem::default();
                item.get = Some(operation(
                    get_id,
                    key_parameters.to_vec(),
                    responses([("200", Response::new("Success", Some(reference)))]),
                ));
                item.put = Some(operation(
                    put_id,
                    put_parameters,
                    responses([("204", empty_response())]),
                ));
                self.insert(path, item);
            }
        }
        Ok(())
    }
}
