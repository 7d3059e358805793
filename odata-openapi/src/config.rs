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

//! Conversion options.
//!
//! Options are read from a TOML file and may be overridden from the
//! command line. Keys use the same spelling as the generated document
//! (`basePath`, `securityDefinitions`, ...). Model items listed in the
//! file (`entityTypes`, `complexTypes`, ...) are added to the parsed
//! service before conversion.

use crate::openapi::swagger::SecurityDefinition;
use crate::service::Action;
use crate::service::ComplexType;
use crate::service::EntityType;
use crate::service::EnumType;
use crate::service::Function;
use crate::service::Singleton;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::fs::File;
use std::io::Error as IoError;
use std::io::Read as _;
use std::path::Path;
use toml::de::Error as TomlError;

/// Suffix of the metadata document URL.
pub const METADATA_SUFFIX: &str = "/$metadata";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    pub host: Option<String>,
    pub base_path: Option<String>,
    /// Entity sets to generate paths for. All when absent.
    pub include: Option<Vec<String>>,
    pub complex_types: Vec<ComplexType>,
    pub entity_types: Vec<EntityType>,
    pub singletons: Vec<Singleton>,
    pub actions: Vec<Action>,
    pub functions: Vec<Function>,
    pub enum_types: Vec<EnumType>,
    pub default_namespace: Option<String>,
    pub title: Option<String>,
    pub version: Option<String>,
    pub security_definitions: Option<IndexMap<String, SecurityDefinition>>,
    pub security: Option<Vec<IndexMap<String, Vec<String>>>>,
}

impl Options {
    /// Read options from toml file.
    ///
    /// # Errors
    ///
    /// - `Error::Io` if failed to read file
    /// - `Error::Toml` if failed to parse content as TOML / invalid options.
    pub fn read(fname: &Path) -> Result<Self, Error> {
        let mut file = File::open(fname).map_err(Error::Io)?;
        let mut content = String::new();
        file.read_to_string(&mut content).map_err(Error::Io)?;
        content.parse()
    }

    /// Fill `host` and `basePath` from the location of a metadata
    /// document unless they are set already.
    #[must_use]
    pub fn with_location_defaults(mut self, host: &str, metadata_path: &str) -> Self {
        if self.host.is_none() {
            self.host = Some(host.to_string());
        }
        if self.base_path.is_none() {
            let base = metadata_path
                .strip_suffix(METADATA_SUFFIX)
                .unwrap_or(metadata_path);
            self.base_path = Some(if base.is_empty() {
                "/".to_string()
            } else {
                base.to_string()
            });
        }
        self
    }
}

impl std::str::FromStr for Options {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        toml::from_str(s).map_err(Error::Toml)
    }
}

#[derive(Debug)]
pub enum Error {
    Io(IoError),
    Toml(TomlError),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Io(err) => write!(f, "input/output error: {err}"),
            Self::Toml(err) => write!(f, "options file format error: {err}"),
        }
    }
}

impl StdError for Error {}
