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

use crate::edmx::SimpleIdentifier;
use crate::edmx::TypeName;
use crate::edmx::ValidateError;
use serde::Deserialize;

/// 12.1 Element edm:Action
#[derive(Debug, Deserialize)]
pub struct DeAction {
    /// 12.1.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 12.1.2 Attribute `IsBound`
    #[serde(rename = "@IsBound")]
    pub is_bound: Option<bool>,
    /// 12.1.3 Attribute `EntitySetPath`
    #[serde(rename = "@EntitySetPath")]
    pub entity_set_path: Option<String>,
    /// Items of edm:Action
    #[serde(rename = "$value", default)]
    pub items: Vec<DeOperationItem>,
}

/// 12.2 Element edm:Function
#[derive(Debug, Deserialize)]
pub struct DeFunction {
    /// 12.2.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 12.2.2 Attribute `IsBound`
    #[serde(rename = "@IsBound")]
    pub is_bound: Option<bool>,
    /// 12.2.3 Attribute `IsComposable`
    #[serde(rename = "@IsComposable")]
    pub is_composable: Option<bool>,
    /// 12.2.4 Attribute `EntitySetPath`
    #[serde(rename = "@EntitySetPath")]
    pub entity_set_path: Option<String>,
    /// Items of edm:Function
    #[serde(rename = "$value", default)]
    pub items: Vec<DeOperationItem>,
}

/// Items of edm:Action and edm:Function
#[derive(Debug, Deserialize)]
pub enum DeOperationItem {
    Parameter(Parameter),
    ReturnType(ReturnType),
    #[serde(other)]
    Other,
}

/// 12.4 Element edm:Parameter
#[derive(Debug, Deserialize)]
pub struct Parameter {
    /// 12.4.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 12.4.2 Attribute `Type`
    #[serde(rename = "@Type")]
    pub ptype: TypeName,
    /// 12.4.3 Attribute `Nullable`
    #[serde(rename = "@Nullable")]
    pub nullable: Option<bool>,
}

/// 12.3 Element edm:ReturnType
#[derive(Debug, Deserialize)]
pub struct ReturnType {
    /// 12.3.1 Attribute `Type`
    #[serde(rename = "@Type")]
    pub rtype: TypeName,
    /// 12.3.2 Attribute `Nullable`
    #[serde(rename = "@Nullable")]
    pub nullable: Option<bool>,
}

/// Validated edm:Action
#[derive(Debug)]
pub struct Action {
    pub name: SimpleIdentifier,
    pub is_bound: bool,
    pub entity_set_path: Option<String>,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<ReturnType>,
}

/// Validated edm:Function
#[derive(Debug)]
pub struct Function {
    pub name: SimpleIdentifier,
    pub is_bound: bool,
    pub is_composable: bool,
    pub entity_set_path: Option<String>,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<ReturnType>,
}

fn split_items(
    items: Vec<DeOperationItem>,
) -> Result<(Vec<Parameter>, Option<ReturnType>), ValidateError> {
    let (parameters, mut return_types) =
        items
            .into_iter()
            .fold((Vec::new(), Vec::new()), |(mut ps, mut rts), v| {
                match v {
                    DeOperationItem::Parameter(p) => ps.push(p),
                    DeOperationItem::ReturnType(r) => rts.push(r),
                    DeOperationItem::Other => (),
                }
                (ps, rts)
            });
    if return_types.len() > 1 {
        return Err(ValidateError::TooManyReturnTypes);
    }
    Ok((parameters, return_types.pop()))
}

impl DeAction {
    /// # Errors
    ///
    /// - `ValidateError::Action` if more than one `ReturnType` is declared.
    pub fn validate(self) -> Result<Action, ValidateError> {
        let (parameters, return_type) = split_items(self.items)
            .map_err(|e| ValidateError::Action(self.name.clone(), Box::new(e)))?;
        Ok(Action {
            name: self.name,
            is_bound: self.is_bound.unwrap_or(false),
            entity_set_path: self.entity_set_path,
            parameters,
            return_type,
        })
    }
}

impl DeFunction {
    /// # Errors
    ///
    /// - `ValidateError::Function` if more than one `ReturnType` is declared.
    pub fn validate(self) -> Result<Function, ValidateError> {
        let (parameters, return_type) = split_items(self.items)
            .map_err(|e| ValidateError::Function(self.name.clone(), Box::new(e)))?;
        Ok(Function {
            name: self.name,
            is_bound: self.is_bound.unwrap_or(false),
            is_composable: self.is_composable.unwrap_or(false),
            entity_set_path: self.entity_set_path,
            parameters,
            return_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::de::from_str;

    #[test]
    fn bound_function() {
        let f: DeFunction = from_str(
            r#"<Function Name="GetTopOrders" IsBound="true" IsComposable="true">
                 <Parameter Name="bindingParameter" Type="Collection(NW.Order)"/>
                 <Parameter Name="count" Type="Edm.Int32" Nullable="false"/>
                 <ReturnType Type="Collection(NW.Order)"/>
               </Function>"#,
        )
        .unwrap();
        let f = f.validate().unwrap();
        assert!(f.is_bound);
        assert!(f.is_composable);
        assert_eq!(f.parameters.len(), 2);
        assert_eq!(f.parameters[1].nullable, Some(false));
        assert_eq!(
            f.return_type.map(|r| r.rtype.into_inner()).as_deref(),
            Some("Collection(NW.Order)")
        );
    }

    #[test]
    fn unbound_action_without_return_type() {
        let a: DeAction = from_str(r#"<Action Name="ResetDataSource"/>"#).unwrap();
        let a = a.validate().unwrap();
        assert!(!a.is_bound);
        assert!(a.parameters.is_empty());
        assert!(a.return_type.is_none());
    }

    #[test]
    fn two_return_types() {
        let a: DeAction = from_str(
            r#"<Action Name="Bad"><ReturnType Type="Edm.String"/><ReturnType Type="Edm.Int32"/></Action>"#,
        )
        .unwrap();
        assert!(matches!(
            a.validate(),
            Err(ValidateError::Action(name, _)) if name == "Bad"
        ));
    }
}
