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
use serde::Deserialize;

/// 10.1 Element edm:EnumType
#[derive(Debug, Deserialize)]
pub struct DeEnumType {
    /// 10.1.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// Items of edm:EnumType
    #[serde(rename = "$value", default)]
    pub items: Vec<DeEnumTypeItem>,
}

/// Items of edm:EnumType
#[derive(Debug, Deserialize)]
pub enum DeEnumTypeItem {
    /// 10.2 Element edm:Member
    Member(EnumMember),
    #[serde(other)]
    Other,
}

/// 10.2 Element edm:Member
#[derive(Debug, Deserialize)]
pub struct EnumMember {
    /// 10.2.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
}

/// Validated edm:EnumType
#[derive(Debug)]
pub struct EnumType {
    pub name: SimpleIdentifier,
    pub members: Vec<SimpleIdentifier>,
}

impl DeEnumType {
    #[must_use]
    pub fn validate(self) -> EnumType {
        EnumType {
            name: self.name,
            members: self
                .items
                .into_iter()
                .filter_map(|v| match v {
                    DeEnumTypeItem::Member(m) => Some(m.name),
                    DeEnumTypeItem::Other => None,
                })
                .collect(),
        }
    }
}
