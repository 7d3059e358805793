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

use crate::openapi::naming::by_params;
use crate::openapi::naming::lower_first;
use crate::openapi::naming::path_identifier;
use crate::openapi::naming::upper_first;
use crate::openapi::paths::empty_response;
use crate::openapi::paths::operation;
use crate::openapi::paths::responses;
use crate::openapi::paths::typed_path_parameter;
use crate::openapi::paths::typed_query_parameter;
use crate::openapi::paths::PathBuilder;
use crate::openapi::swagger::HttpMethod;
use crate::openapi::swagger::Parameter;
use crate::openapi::swagger::PathItem;
use crate::openapi::swagger::Response;
use crate::openapi::swagger::Schema;
use crate::openapi::ConvertError;
use crate::service;
use crate::service::index::collection_inner;
use crate::service::EntityType;
use crate::service::FunctionImport;
use indexmap::IndexMap;

/// Action or function seen through the properties paths depend on.
#[derive(Clone, Copy)]
struct Callable<'s> {
    name: &'s str,
    namespace: &'s str,
    is_function: bool,
    is_bound: bool,
    parameters: &'s [service::Parameter],
    return_type: Option<&'s str>,
}

impl<'s> From<&'s service::Action> for Callable<'s> {
    fn from(a: &'s service::Action) -> Self {
        Self {
            name: &a.name,
            namespace: &a.namespace,
            is_function: false,
            is_bound: a.is_bound,
            parameters: &a.parameters,
            return_type: a.return_type.as_ref().map(|r| r.rtype.as_str()),
        }
    }
}

impl<'s> From<&'s service::Function> for Callable<'s> {
    fn from(f: &'s service::Function) -> Self {
        Self {
            name: &f.name,
            namespace: &f.namespace,
            is_function: true,
            is_bound: f.is_bound,
            parameters: &f.parameters,
            return_type: f.return_type.as_ref().map(|r| r.rtype.as_str()),
        }
    }
}

impl<'s> Callable<'s> {
    /// Index of the binding parameter: `bindingParameter` or
    /// `bindParameter` in any case, else the first one.
    fn binding_index(&self) -> Option<usize> {
        if self.parameters.is_empty() {
            return None;
        }
        Some(
            self.parameters
                .iter()
                .position(|p| {
                    p.name.eq_ignore_ascii_case("bindingParameter")
                        || p.name.eq_ignore_ascii_case("bindParameter")
                })
                .unwrap_or(0),
        )
    }

    /// Parameters passed by the caller.
    fn call_parameters(&self) -> Vec<&'s service::Parameter> {
        let binding = if self.is_bound { self.binding_index() } else { None };
        self.parameters
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != binding)
            .map(|(_, p)| p)
            .collect()
    }

    /// `(a='{a}',b={b})` for functions, empty for actions.
    fn call_suffix(&self) -> String {
        if !self.is_function {
            return String::new();
        }
        let args = self
            .call_parameters()
            .iter()
            .map(|p| {
                if p.ptype == "Edm.String" {
                    format!("{0}='{{{0}}}'", p.name)
                } else {
                    format!("{0}={{{0}}}", p.name)
                }
            })
            .collect::<Vec<_>>()
            .join(",");
        format!("({args})")
    }

    fn method(&self) -> HttpMethod {
        if self.is_function {
            HttpMethod::Get
        } else {
            HttpMethod::Post
        }
    }

    /// Caller parameters: path parameters of a function, a body object
    /// of an action.
    fn swagger_parameters(&self, builder: &PathBuilder<'_>) -> Vec<Parameter> {
        let call = self.call_parameters();
        if self.is_function {
            call.iter()
                .map(|p| typed_path_parameter(&p.name, &p.ptype))
                .collect()
        } else if call.is_empty() {
            Vec::new()
        } else {
            let properties = call
                .iter()
                .map(|p| (p.name.clone(), builder.types.schema(&p.ptype)))
                .collect::<IndexMap<_, _>>();
            vec![Parameter::body("body", Schema::object(properties))]
        }
    }

    fn by_params(&self) -> String {
        by_params(self.call_parameters().iter().map(|p| p.name.as_str()))
    }
}

impl PathBuilder<'_> {
    /// Responses of an operation returning `return_type`.
    pub(crate) fn return_responses(&self, return_type: Option<&str>) -> IndexMap<String, Response> {
        match return_type {
            None => responses([("204", empty_response())]),
            Some(rtype) => {
                let schema = collection_inner(rtype).map_or_else(
                    || self.types.schema(rtype),
                    |inner| Schema::value_array(self.types.schema(inner)),
                );
                responses([("200", Response::new("Success", Some(schema)))])
            }
        }
    }

    /// Bound actions and functions of `et` (or one of its ancestors).
    ///
    /// `context_path` is the collection path for collection-bound
    /// operations and the by-key path otherwise.
    pub(crate) fn bound_operations(
        &mut self,
        et: &EntityType,
        context_path: &str,
        key_parameters: &[Parameter],
        collection_bound: bool,
    ) -> Result<(), ConvertError> {
        let service = self.service;
        let qname = et.qualified_name();
        let callables = service
            .actions
            .iter()
            .map(Callable::from)
            .chain(service.functions.iter().map(Callable::from))
            .filter(|c| c.is_bound);
        for callable in callables {
            let Some(binding) = callable.binding_index() else {
                continue;
            };
            let btype = callable.parameters[binding].ptype.as_str();
            let (is_collection, target) =
                collection_inner(btype).map_or((false, btype), |inner| (true, inner));
            if is_collection != collection_bound
                || (target != qname && !et.base_types.iter().any(|b| b == target))
            {
                continue;
            }
            let path = format!(
                "{context_path}/{}.{}{}",
                callable.namespace,
                callable.name,
                callable.call_suffix()
            );
            if !self.is_free(&path) {
                continue;
            }
            let id = self.registry.register(format!(
                "{}{}{}{}",
                lower_first(&path_identifier(context_path)),
                et.name,
                upper_first(callable.name),
                callable.by_params()
            ))?;
            let mut parameters = key_parameters.to_vec();
            parameters.extend(callable.swagger_parameters(self));
            let mut item = PathItem::default();
            item.set(
                callable.method(),
                operation(id, parameters, self.return_responses(callable.return_type)),
            );
            self.insert(path, item);
        }
        Ok(())
    }

    /// Unbound actions and functions at the service root.
    pub(crate) fn unbound_operations(&mut self) -> Result<(), ConvertError> {
        let service = self.service;
        let callables = service
            .actions
            .iter()
            .map(Callable::from)
            .chain(service.functions.iter().map(Callable::from))
            .filter(|c| !c.is_bound);
        for callable in callables {
            let path = format!("/{}{}", callable.name, callable.call_suffix());
            if !self.is_free(&path) {
                continue;
            }
            let id = self.unbound_id(callable.name, &callable.by_params())?;
            let mut item = PathItem::default();
            item.set(
                callable.method(),
                operation(
                    id,
                    callable.swagger_parameters(self),
                    self.return_responses(callable.return_type),
                ),
            );
            self.insert(path, item);
        }
        Ok(())
    }

    /// Version 2 function import at the service root.
    pub(crate) fn function_import(&mut self, import: &FunctionImport) -> Result<(), ConvertError> {
        let path = format!("/{}", import.name);
        if !self.is_free(&path) {
            return Ok(());
        }
        let id = self.unbound_id(
            &import.name,
            &by_params(import.parameters.iter().map(|p| p.name.as_str())),
        )?;
        let parameters = import
            .parameters
            .iter()
            .map(|p| typed_query_parameter(&p.name, &p.ptype, !p.nullable))
            .collect();
        let mut op = operation(
            id,
            parameters,
            self.return_responses(import.return_type.as_deref()),
        );
        op.summary.clone_from(&import.label);
        op.description = import
            .action_for
            .as_ref()
            .map(|target| format!("Action for {target}"));
        let mut item = PathItem::default();
        item.set(HttpMethod::from_odata(&import.http_method), op);
        self.insert(path, item);
        Ok(())
    }

    /// `lowerCamel(name)`, with the parameter suffix only when the bare
    /// name is taken.
    fn unbound_id(&mut self, name: &str, by_params: &str) -> Result<String, ConvertError> {
        let bare = lower_first(name);
        let qualified = format!("{bare}{by_params}");
        self.registry.register_or(bare, qualified)
    }
}
