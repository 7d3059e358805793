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

use crate::edmx::data_services::DataServices;
use crate::edmx::data_services::DeDataServices;
use crate::edmx::ValidateError;
use serde::Deserialize;

/// Version assumed when `edmx:Edmx` has no `Version` attribute.
pub const DEFAULT_VERSION: &str = "4.0";

/// 3.1 Element edmx:Edmx
#[derive(Debug, Deserialize)]
struct DeEdmx {
    /// 3.1.1 Attribute Version
    #[serde(rename = "@Version")]
    pub version: Option<String>,
    /// Child elements of Edmx.
    #[serde(rename = "$value", default)]
    pub items: Vec<DeEdmxItem>,
}

/// Child item of edmx:Edmx
#[derive(Debug, Deserialize)]
enum DeEdmxItem {
    /// edmx:Edmx element MUST contain a single direct child
    /// edmx:DataServices element.
    DataServices(DeDataServices),
    /// References to other documents are not followed.
    #[serde(other)]
    Other,
}

/// Validated Edmx document.
#[derive(Debug)]
pub struct Edmx {
    /// Declared EDMX version (`1.0` to `4.0`).
    pub version: String,
    /// Validated `DataServices`
    pub data_services: DataServices,
}

impl Edmx {
    /// # Errors
    /// Validation error or XML parsing error.
    pub fn parse(data: &str) -> Result<Self, ValidateError> {
        use quick_xml::de as quick_xml_de;
        quick_xml_de::from_str::<DeEdmx>(data)
            .map_err(ValidateError::XmlDeserialize)?
            .validate()
    }
}

impl DeEdmx {
    /// Validate deserialized data strucutre.
    pub fn validate(self) -> Result<Edmx, ValidateError> {
        let dss = self
            .items
            .into_iter()
            .filter_map(|v| match v {
                DeEdmxItem::DataServices(v) => Some(v),
                DeEdmxItem::Other => None,
            })
            .collect::<Vec<_>>();

        // This element MUST contain a single direct child edmx:DataServices element.
        if dss.len() > 1 {
            return Err(ValidateError::WrongDataServicesNumber);
        }

        let ds = dss
            .into_iter()
            .next()
            .ok_or(ValidateError::WrongDataServicesNumber)?;

        Ok(Edmx {
            version: self
                .version
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            data_services: ds.validate()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_defaults_to_four() {
        let edmx = Edmx::parse(
            r#"<Edmx><DataServices><Schema Namespace="NS"/></DataServices></Edmx>"#,
        )
        .unwrap();
        assert_eq!(edmx.version, "4.0");
        assert_eq!(edmx.data_services.schemas.len(), 1);
    }

    #[test]
    fn prefixed_v2_envelope() {
        let edmx = Edmx::parse(
            r#"<edmx:Edmx Version="1.0" xmlns:edmx="http://schemas.microsoft.com/ado/2007/06/edmx">
                 <edmx:Reference Uri="https://example.com/vocabularies"/>
                 <edmx:DataServices m:DataServiceVersion="2.0">
                   <Schema Namespace="GWSAMPLE" xmlns="http://schemas.microsoft.com/ado/2008/09/edm"/>
                 </edmx:DataServices>
               </edmx:Edmx>"#,
        )
        .unwrap();
        assert_eq!(edmx.version, "1.0");
        assert_eq!(edmx.data_services.schemas[0].namespace, "GWSAMPLE");
    }

    #[test]
    fn missing_data_services() {
        let err = Edmx::parse(r#"<Edmx Version="4.0"></Edmx>"#).unwrap_err();
        assert!(matches!(err, ValidateError::WrongDataServicesNumber));
    }

    #[test]
    fn two_data_services() {
        let err = Edmx::parse(
            r#"<Edmx Version="4.0"><DataServices/><DataServices/></Edmx>"#,
        )
        .unwrap_err();
        assert!(matches!(err, ValidateError::WrongDataServicesNumber));
    }

    #[test]
    fn malformed_xml() {
        let err = Edmx::parse(r#"<Edmx Version="4.0"><DataServices>"#).unwrap_err();
        assert!(matches!(err, ValidateError::XmlDeserialize(_)));
    }
}
