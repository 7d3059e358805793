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

use crate::openapi::naming::upper_first;
use crate::openapi::paths::operation;
use crate::openapi::paths::responses;
use crate::openapi::paths::PathBuilder;
use crate::openapi::swagger::HttpMethod;
use crate::openapi::swagger::PathItem;
use crate::openapi::swagger::Response;
use crate::openapi::swagger::Schema;
use crate::openapi::ConvertError;
use crate::service::PropertyType;
use crate::service::Singleton;

impl PathBuilder<'_> {
    /// `/{Singleton}` and one path per single-valued navigation binding.
    pub(crate) fn singleton(&mut self, singleton: &Singleton) -> Result<(), ConvertError> {
        let path = format!("/{}", singleton.name);
        let name = upper_first(&singleton.name);
        if self.is_free(&path) {
            let id = self.registry.register(format!("get{name}"))?;
            let mut item = PathItem::default();
            item.set(
                HttpMethod::Get,
                operation(
                    id,
                    Vec::new(),
                    responses([(
                        "200",
                        Response::new("Success", Some(Schema::reference(&singleton.stype))),
                    )]),
                ),
            );
            self.insert(path.clone(), item);
        }
        for p in &singleton.properties {
            let PropertyType::NavigationSingle { target, .. } = &p.ptype else {
                continue;
            };
            let nav_path = format!("{path}/{}", p.name);
            if !self.is_free(&nav_path) {
                continue;
            }
            let id = self
                .registry
                .register(format!("get{name}{}", upper_first(&p.name)))?;
            let mut item = PathItem::default();
            item.set(
                HttpMethod::Get,
                operation(
                    id,
                    Vec::new(),
                    responses([(
                        "200",
                        Response::new("Success", Some(Schema::reference(target))),
                    )]),
                ),
            );
            self.insert(nav_path, item);
        }
        Ok(())
    }
}
