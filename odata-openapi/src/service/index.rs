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
use std::collections::HashMap;
use std::collections::HashSet;

/// Lookup tables over all schemas of a document.
///
/// Every name used as a key is namespace-qualified; aliases are
/// resolved by [`SchemaIndex::normalize`].
pub struct SchemaIndex<'a> {
    aliases: HashMap<&'a str, &'a str>,
    pub entity_types: Vec<(&'a str, &'a edmx::EntityType)>,
    entity_type_by_name: HashMap<String, usize>,
    pub complex_types: Vec<(&'a str, &'a edmx::ComplexType)>,
    complex_type_by_name: HashMap<String, usize>,
    pub enum_types: Vec<(&'a str, &'a edmx::EnumType)>,
    enum_type_by_name: HashMap<String, usize>,
    /// `Annotations` elements with their normalized targets.
    pub annotations: Vec<(String, &'a edmx::Annotations)>,
}

impl<'a> SchemaIndex<'a> {
    #[must_use]
    pub fn new(edmx: &'a Edmx) -> Self {
        let schemas = &edmx.data_services.schemas;
        let aliases = schemas
            .iter()
            .filter_map(|s| s.alias.as_deref().map(|a| (a, s.namespace.as_str())))
            .collect();
        let mut index = Self {
            aliases,
            entity_types: Vec::new(),
            entity_type_by_name: HashMap::new(),
            complex_types: Vec::new(),
            complex_type_by_name: HashMap::new(),
            enum_types: Vec::new(),
            enum_type_by_name: HashMap::new(),
            annotations: Vec::new(),
        };
        for s in schemas {
            let ns = s.namespace.as_str();
            for et in &s.entity_types {
                index
                    .entity_type_by_name
                    .insert(format!("{ns}.{}", et.name), index.entity_types.len());
                index.entity_types.push((ns, et));
            }
            for ct in &s.complex_types {
                index
                    .complex_type_by_name
                    .insert(format!("{ns}.{}", ct.name), index.complex_types.len());
                index.complex_types.push((ns, ct));
            }
            for et in &s.enum_types {
                index
                    .enum_type_by_name
                    .insert(format!("{ns}.{}", et.name), index.enum_types.len());
                index.enum_types.push((ns, et));
            }
        }
        for s in schemas {
            for anns in &s.annotations {
                let target = index.normalize(&anns.target);
                index.annotations.push((target, anns));
            }
        }
        index
    }

    /// Replace a schema alias with its namespace. Handles
    /// `Collection(...)` and path targets (`Alias.Container/Set`).
    #[must_use]
    pub fn normalize(&self, name: &str) -> String {
        if let Some(inner) = collection_inner(name) {
            return format!("Collection({})", self.normalize(inner));
        }
        let (head, tail) = name
            .split_once('/')
            .map_or((name, None), |(h, t)| (h, Some(t)));
        let head = match head.rsplit_once('.') {
            Some((prefix, local)) => self
                .aliases
                .get(prefix)
                .map_or_else(|| head.to_string(), |ns| format!("{ns}.{local}")),
            None => head.to_string(),
        };
        match tail {
            Some(t) => format!("{head}/{t}"),
            None => head,
        }
    }

    #[must_use]
    pub fn entity_type(&self, qname: &str) -> Option<(&'a str, &'a edmx::EntityType)> {
        self.entity_type_by_name
            .get(qname)
            .map(|i| self.entity_types[*i])
    }

    #[must_use]
    pub fn complex_type(&self, qname: &str) -> Option<(&'a str, &'a edmx::ComplexType)> {
        self.complex_type_by_name
            .get(qname)
            .map(|i| self.complex_types[*i])
    }

    #[must_use]
    pub fn enum_type(&self, qname: &str) -> Option<&'a edmx::EnumType> {
        self.enum_type_by_name
            .get(qname)
            .map(|i| self.enum_types[*i].1)
    }

    /// Entity type followed by its ancestors. Stops on cycles and on
    /// unknown base types.
    #[must_use]
    pub fn entity_type_chain(&self, qname: &str) -> Vec<(String, &'a str, &'a edmx::EntityType)> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(qname.to_string());
        while let Some(name) = next.take() {
            if !visited.insert(name.clone()) {
                log::warn!("inheritance cycle at entity type {name}");
                break;
            }
            let Some((ns, et)) = self.entity_type(&name) else {
                log::warn!("unknown entity type {name}");
                break;
            };
            next = et
                .base_type
                .as_ref()
                .map(|b| self.normalize(b.inner()));
            chain.push((name, ns, et));
        }
        chain
    }

    /// Complex type followed by its ancestors.
    #[must_use]
    pub fn complex_type_chain(
        &self,
        qname: &str,
    ) -> Vec<(String, &'a str, &'a edmx::ComplexType)> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(qname.to_string());
        while let Some(name) = next.take() {
            if !visited.insert(name.clone()) {
                log::warn!("inheritance cycle at complex type {name}");
                break;
            }
            let Some((ns, ct)) = self.complex_type(&name) else {
                log::warn!("unknown complex type {name}");
                break;
            };
            next = ct
                .base_type
                .as_ref()
                .map(|b| self.normalize(b.inner()));
            chain.push((name, ns, ct));
        }
        chain
    }

    /// Terms of `Annotations` elements targeting exactly `target`.
    pub fn terms_for<'s>(&'s self, target: &'s str) -> impl Iterator<Item = String> + 's {
        self.annotations
            .iter()
            .filter(move |(t, _)| t == target)
            .flat_map(|(_, anns)| anns.annotations.iter().map(|a| a.term.inner().clone()))
    }
}

/// Inner type of `Collection(...)`.
#[must_use]
pub fn collection_inner(name: &str) -> Option<&str> {
    name.strip_prefix("Collection(")
        .and_then(|v| v.strip_suffix(')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<Edmx Version="4.0"><DataServices>
        <Schema Namespace="Northwind.Model" Alias="NW">
          <EntityType Name="Base"><Property Name="Id" Type="Edm.Int32"/></EntityType>
          <EntityType Name="Product" BaseType="NW.Base"/>
          <EntityType Name="Loop" BaseType="NW.Loop"/>
          <Annotations Target="NW.Product">
            <Annotation Term="Org.OData.Capabilities.V1.TopSupported" Bool="false"/>
          </Annotations>
        </Schema>
      </DataServices></Edmx>"#;

    #[test]
    fn alias_normalization() {
        let edmx = Edmx::parse(DOC).unwrap();
        let index = SchemaIndex::new(&edmx);
        assert_eq!(index.normalize("NW.Product"), "Northwind.Model.Product");
        assert_eq!(
            index.normalize("Collection(NW.Product)"),
            "Collection(Northwind.Model.Product)"
        );
        assert_eq!(index.normalize("NW.Container/Products"), "Northwind.Model.Container/Products");
        assert_eq!(index.normalize("Edm.String"), "Edm.String");
        assert_eq!(index.normalize("Products"), "Products");
    }

    #[test]
    fn chains() {
        let edmx = Edmx::parse(DOC).unwrap();
        let index = SchemaIndex::new(&edmx);
        let chain = index.entity_type_chain("Northwind.Model.Product");
        let names = chain.iter().map(|(n, _, _)| n.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Northwind.Model.Product", "Northwind.Model.Base"]);
        assert_eq!(index.entity_type_chain("Northwind.Model.Loop").len(), 1);
    }

    #[test]
    fn annotation_targets_are_normalized() {
        let edmx = Edmx::parse(DOC).unwrap();
        let index = SchemaIndex::new(&edmx);
        let terms = index
            .terms_for("Northwind.Model.Product")
            .collect::<Vec<_>>();
        assert_eq!(terms, vec!["Org.OData.Capabilities.V1.TopSupported"]);
    }
}
