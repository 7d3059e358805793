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

use crate::edmx::TermName;
use serde::Deserialize;

/// 14.2 Element edm:Annotations
#[derive(Debug, Deserialize)]
pub struct Annotations {
    /// 14.2.1 Attribute `Target`
    #[serde(rename = "@Target")]
    pub target: String,
    /// 14.2.2 Attribute `Qualifier`
    #[serde(rename = "@Qualifier")]
    pub qualifier: Option<String>,
    /// Annotations applied to the target.
    #[serde(rename = "Annotation", default)]
    pub annotations: Vec<Annotation>,
}

/// 14.3 Element edm:Annotation
///
/// Only the term and constant expressions given as attributes are kept;
/// record and collection expressions are skipped.
#[derive(Debug, Deserialize)]
pub struct Annotation {
    /// 14.3.1 Attribute `Term`
    #[serde(rename = "@Term")]
    pub term: TermName,
    /// 14.3.2 Attribute `Qualifier`
    #[serde(rename = "@Qualifier")]
    pub qualifier: Option<String>,
    #[serde(rename = "@String")]
    pub string: Option<String>,
    #[serde(rename = "@Bool")]
    pub bool: Option<bool>,
    #[serde(rename = "@Int")]
    pub int: Option<i64>,
    #[serde(rename = "@EnumMember")]
    pub enum_member: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::de::from_str;

    #[test]
    fn annotations_with_record_expression() {
        let anns: Annotations = from_str(
            r#"<Annotations Target="NW.Container/Products">
                 <Annotation Term="Org.OData.Capabilities.V1.TopSupported" Bool="false"/>
                 <Annotation Term="Org.OData.Capabilities.V1.FilterRestrictions">
                   <Record>
                     <PropertyValue Property="Filterable" Bool="false"/>
                   </Record>
                 </Annotation>
               </Annotations>"#,
        )
        .unwrap();
        assert_eq!(anns.target, "NW.Container/Products");
        assert_eq!(anns.annotations.len(), 2);
        assert_eq!(anns.annotations[0].bool, Some(false));
        assert_eq!(
            anns.annotations[1].term.inner(),
            "Org.OData.Capabilities.V1.FilterRestrictions"
        );
    }
}
