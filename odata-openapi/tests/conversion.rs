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

use odata_openapi::commands::process_command;
use odata_openapi::commands::Commands;
use odata_openapi::config::Options;
use odata_openapi::convert_document;
use odata_openapi::parse_document;
use odata_openapi::Error;
use serde_json::json;
use serde_json::Value;
use std::path::Path;
use std::path::PathBuf;

const DEMO_V4: &str = include_str!("data/demo-v4.xml");
const GWSAMPLE_V2: &str = include_str!("data/gwsample-v2.xml");

fn data(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
        .display()
        .to_string()
}

fn to_json(xml: &str, options: &Options) -> Value {
    let swagger = convert_document("fixture", xml, options).expect("must convert");
    serde_json::to_value(swagger).expect("serializable")
}

fn path_names(doc: &Value) -> Vec<&str> {
    doc["paths"]
        .as_object()
        .map(|paths| paths.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

fn operation_ids(doc: &Value) -> Vec<&str> {
    doc["paths"]
        .as_object()
        .into_iter()
        .flat_map(|paths| paths.values())
        .filter_map(Value::as_object)
        .flat_map(|item| item.values())
        .filter_map(|op| op["operationId"].as_str())
        .collect()
}

fn output_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("odata-openapi-{}-{name}", std::process::id()))
}

#[test]
fn demo_v4_paths() {
    let doc = to_json(DEMO_V4, &Options::default());
    assert_eq!(doc["swagger"], "2.0");
    assert_eq!(doc["info"]["x-odata-version"], "4.0");
    assert_eq!(
        path_names(&doc),
        vec![
            "/Products",
            "/Products({ID})",
            "/Categories",
            "/Categories({ID})",
            "/Me",
            "/ResetData",
            "/GetBestSellers(top={top})",
        ]
    );
    assert_eq!(
        operation_ids(&doc),
        vec![
            "getProducts",
            "createProduct",
            "getProductById",
            "deleteProduct",
            "updateProduct",
            "getCategories",
            "createCategory",
            "getCategoryById",
            "deleteCategory",
            "updateCategory",
            "getMe",
            "resetData",
            "getBestSellers",
        ]
    );
}

#[test]
fn demo_v4_operations() {
    let doc = to_json(DEMO_V4, &Options::default());
    let best = &doc["paths"]["/GetBestSellers(top={top})"]["get"];
    assert_eq!(
        best["parameters"],
        json!([{"name": "top", "in": "path", "required": true, "type": "integer", "format": "int32"}])
    );
    assert_eq!(
        best["responses"]["200"]["schema"]["properties"]["value"]["items"],
        json!({"$ref": "#/definitions/Demo.Product"})
    );
    let reset = &doc["paths"]["/ResetData"]["post"];
    assert!(reset["responses"]["204"].is_object());
    assert!(reset["responses"]["default"].is_object());
    assert_eq!(
        doc["paths"]["/Me"]["get"]["responses"]["200"]["schema"],
        json!({"$ref": "#/definitions/Demo.Person"})
    );
}

#[test]
fn demo_v4_definitions() {
    let doc = to_json(DEMO_V4, &Options::default());
    let definitions = doc["definitions"].as_object().expect("definitions");
    for name in ["Demo.Product", "Demo.Category", "Demo.Person", "Error"] {
        assert!(definitions.contains_key(name), "{name} is missing");
    }
    assert_eq!(
        doc["definitions"]["Demo.Category"]["properties"]["Products"],
        json!({"type": "array", "items": {"$ref": "#/definitions/Demo.Product"}})
    );
}

#[test]
fn include_limits_entity_sets() {
    let options = Options {
        include: Some(vec!["Categories".into()]),
        ..Options::default()
    };
    let doc = to_json(DEMO_V4, &options);
    let paths = path_names(&doc);
    assert!(paths.contains(&"/Categories"));
    assert!(!paths.iter().any(|p| p.starts_with("/Products")));
    assert!(doc["definitions"]["Demo.Product"].is_object());
}

#[test]
fn gwsample_v2_sap_service() {
    let doc = to_json(GWSAMPLE_V2, &Options::default());
    assert_eq!(doc["info"]["x-odata-version"], "1.0");
    assert_eq!(
        path_names(&doc),
        vec![
            "/SalesOrderSet",
            "/SalesOrderSet('{SalesOrderID}')",
            "/SalesOrder_Confirm",
            "/Ping",
        ]
    );
    let by_key = doc["paths"]["/SalesOrderSet('{SalesOrderID}')"]
        .as_object()
        .expect("path item");
    assert!(by_key.contains_key("get"));
    assert!(by_key.contains_key("patch"));
    assert!(!by_key.contains_key("delete"));

    let names = doc["paths"]["/SalesOrderSet"]["get"]["parameters"]
        .as_array()
        .expect("parameters")
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["$filter", "$orderby", "$expand", "$inlinecount"]);

    let confirm = &doc["paths"]["/SalesOrder_Confirm"]["post"];
    assert_eq!(confirm["operationId"], "salesOrder_Confirm");
    assert_eq!(confirm["description"], "Action for GWSAMPLE.SalesOrder");
    assert_eq!(confirm["parameters"][0]["name"], "SalesOrderID");
    assert_eq!(confirm["parameters"][0]["in"], "query");
    assert_eq!(doc["paths"]["/Ping"]["get"]["operationId"], "ping");

    let id = &doc["definitions"]["GWSAMPLE.SalesOrder"]["properties"]["SalesOrderID"];
    assert_eq!(id["description"], "Order ID");
    assert_eq!(id["readOnly"], true);
}

#[test]
fn invalid_document_names_source() {
    let err = convert_document("broken.xml", "<edmx:Edmx Version=\"4.0\">", &Options::default())
        .err()
        .expect("must fail");
    assert!(matches!(err, Error::Edmx(ref source, _) if source == "broken.xml"));
    assert!(err.to_string().contains("broken.xml"));
}

#[test]
fn document_without_container() {
    let xml = r#"<edmx:Edmx Version="4.0"><edmx:DataServices>
        <Schema Namespace="Empty"/>
      </edmx:DataServices></edmx:Edmx>"#;
    let err = parse_document("empty.xml", xml).err().expect("must fail");
    assert_eq!(err.to_string(), "metadata error: metadata has no EntityContainer");
}

#[test]
fn convert_command_applies_options_file() {
    let output = output_file("convert.json");
    let lines = process_command(&Commands::Convert {
        input: data("demo-v4.xml"),
        config: Some(PathBuf::from(data("options.toml"))),
        output: Some(output.clone()),
        host: None,
        base_path: None,
        include: Vec::new(),
        title: Some("Overridden".into()),
        compact: false,
    })
    .expect("must convert");
    assert_eq!(lines.len(), 1);
    let written = std::fs::read_to_string(&output).expect("output written");
    let _ = std::fs::remove_file(&output);
    let doc: Value = serde_json::from_str(&written).expect("valid json");
    assert_eq!(doc["host"], "services.example.com");
    assert_eq!(doc["basePath"], "/odata/demo");
    assert_eq!(doc["info"]["title"], "Overridden");
    assert_eq!(doc["info"]["version"], "1.2.0");
    assert_eq!(doc["securityDefinitions"], json!({"basic": {"type": "basic"}}));
    assert_eq!(doc["security"], json!([{"basic": []}]));
}

#[test]
fn convert_command_prints_compact_json() {
    let lines = process_command(&Commands::Convert {
        input: data("gwsample-v2.xml"),
        config: None,
        output: None,
        host: Some("sap.example.com".into()),
        base_path: Some("/sap/opu/odata/iwbep/GWSAMPLE_BASIC".into()),
        include: Vec::new(),
        title: None,
        compact: true,
    })
    .expect("must convert");
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].contains('\n'));
    let doc: Value = serde_json::from_str(&lines[0]).expect("valid json");
    assert_eq!(doc["host"], "sap.example.com");
    assert_eq!(doc["basePath"], "/sap/opu/odata/iwbep/GWSAMPLE_BASIC");
}

#[test]
fn parse_command_dumps_service_model() {
    let lines = process_command(&Commands::Parse {
        input: data("demo-v4.xml"),
        output: None,
        compact: false,
    })
    .expect("must parse");
    let model: Value = serde_json::from_str(&lines[0]).expect("valid json");
    assert_eq!(model["version"], "4.0");
    assert_eq!(model["defaultNamespace"], "Demo");
    assert_eq!(model["entitySets"][0]["name"], "Products");
    assert_eq!(model["entitySets"][0]["entityType"]["key"][0]["name"], "ID");
    assert_eq!(model["singletons"][0]["name"], "Me");
}

#[test]
fn missing_options_file() {
    let err = process_command(&Commands::Convert {
        input: data("demo-v4.xml"),
        config: Some(PathBuf::from(data("missing.toml"))),
        output: None,
        host: None,
        base_path: None,
        include: Vec::new(),
        title: None,
        compact: true,
    })
    .err()
    .expect("must fail");
    assert!(matches!(err, Error::Config(..)));
}
