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

use crate::openapi::ConvertError;
use std::collections::HashSet;

/// Operation ids assigned during one conversion.
///
/// Created empty for each conversion and passed explicitly to every
/// place that generates operations.
#[derive(Debug, Default)]
pub struct OperationIdRegistry {
    ids: HashSet<String>,
}

impl OperationIdRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// - `ConvertError::DuplicateOperation` if `id` is already taken.
    pub fn register(&mut self, id: String) -> Result<String, ConvertError> {
        if self.ids.contains(&id) {
            return Err(ConvertError::DuplicateOperation(id));
        }
        self.ids.insert(id.clone());
        Ok(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Register `preferred`, or `fallback` if `preferred` is taken.
    ///
    /// # Errors
    ///
    /// - `ConvertError::DuplicateOperation` if both are taken.
    pub fn register_or(&mut self, preferred: String, fallback: String) -> Result<String, ConvertError> {
        if self.contains(&preferred) {
            self.register(fallback)
        } else {
            self.register(preferred)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_is_rejected() {
        let mut registry = OperationIdRegistry::new();
        assert_eq!(registry.register("getProducts".into()).unwrap(), "getProducts");
        let err = registry.register("getProducts".into()).unwrap_err();
        assert_eq!(err.to_string(), "`getProducts` is a duplicate operationId.");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn fallback() {
        let mut registry = OperationIdRegistry::new();
        registry.register("createProduct".into()).unwrap();
        assert_eq!(
            registry
                .register_or("createProduct".into(), "createItems".into())
                .unwrap(),
            "createItems"
        );
        assert!(registry
            .register_or("createProduct".into(), "createItems".into())
            .is_err());
    }
}
