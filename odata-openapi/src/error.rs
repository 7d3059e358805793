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

use crate::config::Error as ConfigError;
use crate::edmx::ValidateError;
use crate::openapi::ConvertError;
use crate::service::ParseError;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::io::Error as IoError;
use std::path::PathBuf;

#[cfg(feature = "fetch")]
use odata_openapi_http::reqwest::FetchError;

/// Converter errors.
#[derive(Debug)]
pub enum Error {
    Io(String, IoError),
    Edmx(String, ValidateError),
    Parse(ParseError),
    Convert(ConvertError),
    Config(PathBuf, ConfigError),
    Json(serde_json::Error),
    WriteOutput(PathBuf, IoError),
    #[cfg(feature = "fetch")]
    Fetch(String, FetchError),
    #[cfg(feature = "fetch")]
    InvalidUrl(String, url::ParseError),
    #[cfg(feature = "fetch")]
    Runtime(IoError),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Io(fname, error) => write!(f, "input/output error: file: {fname}: {error}"),
            Self::Edmx(fname, error) => {
                write!(f, "EDMX format validation error: file: {fname}: {error}")
            }
            Self::Parse(error) => write!(f, "metadata error: {error}"),
            Self::Convert(error) => write!(f, "conversion error: {error}"),
            Self::Config(fname, error) => {
                write!(f, "options error: file: {}: {error}", fname.display())
            }
            Self::Json(error) => write!(f, "JSON serialization error: {error}"),
            Self::WriteOutput(fname, error) => {
                write!(f, "failed write output file: {}: {error}", fname.display())
            }
            #[cfg(feature = "fetch")]
            Self::Fetch(url, error) => write!(f, "failed to fetch {url}: {error}"),
            #[cfg(feature = "fetch")]
            Self::InvalidUrl(url, error) => write!(f, "invalid URL {url}: {error}"),
            #[cfg(feature = "fetch")]
            Self::Runtime(error) => write!(f, "failed to start async runtime: {error}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(_, e) | Self::WriteOutput(_, e) => Some(e),
            Self::Edmx(_, e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Convert(e) => Some(e),
            Self::Config(_, e) => Some(e),
            Self::Json(e) => Some(e),
            #[cfg(feature = "fetch")]
            Self::Fetch(_, e) => Some(e),
            #[cfg(feature = "fetch")]
            Self::InvalidUrl(_, e) => Some(e),
            #[cfg(feature = "fetch")]
            Self::Runtime(e) => Some(e),
        }
    }
}
