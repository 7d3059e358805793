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
use crate::service::index::collection_inner;
use crate::service::Service;
use std::collections::HashMap;

/// Swagger `type` and `format` of an EDM primitive type.
///
/// Returns `None` for unknown `Edm.*` types and for non-primitive
/// names.
#[must_use]
pub fn primitive(edm_type: &str) -> Option<(&'static str, Option<&'static str>)> {
    let mapped = match edm_type {
        "Edm.Int16" | "Edm.Int32" => ("integer", Some("int32")),
        "Edm.Int64" => ("integer", Some("int64")),
        "Edm.Boolean" => ("boolean", None),
        "Edm.String" => ("string", None),
        "Edm.Byte" => ("string", Some("byte")),
        "Edm.Binary" => ("string", Some("base64")),
        "Edm.DateTime" | "Edm.DateTimeOffset" => ("string", Some("date-time")),
        "Edm.Date" => ("string", Some("date")),
        "Edm.Decimal" | "Edm.Double" => ("number", Some("double")),
        "Edm.Single" => ("number", Some("single")),
        "Edm.Guid" => ("string", Some("uuid")),
        "Edm.Duration" => ("string", Some("duration")),
        _ => return None,
    };
    Some(mapped)
}

/// Key values of these types are written without quotes in URLs.
#[must_use]
pub fn is_unquoted_key_type(edm_type: &str) -> bool {
    matches!(
        edm_type,
        "Edm.Int16" | "Edm.Int32" | "Edm.Int64" | "Edm.Double" | "Edm.Single" | "Edm.Decimal"
    )
}

/// Maps declared type names to schemas. Knows the enumerations of the
/// service so that they can be inlined.
pub struct TypeMapper {
    enums: HashMap<String, Vec<String>>,
}

impl TypeMapper {
    #[must_use]
    pub fn new(service: &Service) -> Self {
        Self {
            enums: service
                .enum_types
                .iter()
                .map(|e| (e.qualified_name(), e.members.clone()))
                .collect(),
        }
    }

    #[must_use]
    pub fn schema(&self, type_name: &str) -> Schema {
        if let Some(inner) = collection_inner(type_name) {
            return Schema::array(self.schema(inner));
        }
        if let Some((stype, format)) = primitive(type_name) {
            return Schema::typed(stype, format);
        }
        if type_name.starts_with("Edm.") {
            return Schema::default();
        }
        if let Some(members) = self.enums.get(type_name) {
            return Schema {
                enum_values: Some(members.clone()),
                ..Schema::typed("string", None)
            };
        }
        Schema::reference(type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::EnumType;
    use serde_json::json;
    use serde_json::Value;

    fn mapper() -> TypeMapper {
        TypeMapper::new(&Service {
            enum_types: vec![EnumType {
                name: "Color".into(),
                namespace: "NW".into(),
                members: vec!["Red".into(), "Green".into()],
            }],
            ..Service::default()
        })
    }

    fn json_of(type_name: &str) -> Value {
        serde_json::to_value(mapper().schema(type_name)).unwrap()
    }

    #[test]
    fn primitives() {
        assert_eq!(json_of("Edm.Int32"), json!({"type": "integer", "format": "int32"}));
        assert_eq!(json_of("Edm.Int64"), json!({"type": "integer", "format": "int64"}));
        assert_eq!(json_of("Edm.Boolean"), json!({"type": "boolean"}));
        assert_eq!(json_of("Edm.String"), json!({"type": "string"}));
        assert_eq!(json_of("Edm.Binary"), json!({"type": "string", "format": "base64"}));
        assert_eq!(
            json_of("Edm.DateTimeOffset"),
            json!({"type": "string", "format": "date-time"})
        );
        assert_eq!(json_of("Edm.Single"), json!({"type": "number", "format": "single"}));
        assert_eq!(json_of("Edm.Guid"), json!({"type": "string", "format": "uuid"}));
    }

    #[test]
    fn unknown_edm_type_is_opaque() {
        assert_eq!(json_of("Edm.GeographyPoint"), json!({}));
    }

    #[test]
    fn references_enums_and_collections() {
        assert_eq!(json_of("NW.Address"), json!({"$ref": "#/definitions/NW.Address"}));
        assert_eq!(
            json_of("NW.Color"),
            json!({"type": "string", "enum": ["Red", "Green"]})
        );
        assert_eq!(
            json_of("Collection(Edm.String)"),
            json!({"type": "array", "items": {"type": "string"}})
        );
    }

    #[test]
    fn key_quoting() {
        assert!(is_unquoted_key_type("Edm.Int32"));
        assert!(is_unquoted_key_type("Edm.Decimal"));
        assert!(!is_unquoted_key_type("Edm.String"));
        assert!(!is_unquoted_key_type("Edm.Guid"));
    }
}
