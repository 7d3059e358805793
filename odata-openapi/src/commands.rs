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

//! Command-line entry points.
//!
//! - `Convert`: read a metadata document from a file or an `http(s)`
//!   URL, apply options and write the Swagger 2.0 JSON.
//! - `Parse`: read a metadata document and dump the resolved service
//!   model as JSON.
//!
//! Output goes to the `output` file when given and is returned as a
//! display line otherwise.

use crate::config::Options;
use crate::openapi;
use crate::parse_document;
use crate::Error;
use clap::Subcommand;
use log::info;
use serde::Serialize;
use std::fs::write;
use std::fs::File;
use std::io::Read as _;
use std::path::PathBuf;

#[cfg(feature = "fetch")]
use odata_openapi_http::reqwest::Client;
#[cfg(feature = "fetch")]
use odata_openapi_http::MetadataFetcher as _;

/// Converter high-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert metadata document to Swagger 2.0 JSON.
    Convert {
        /// Metadata document: file name or `http(s)` URL of `$metadata`.
        input: String,
        /// TOML options file.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output file. Standard output if not specified.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// `host` of the document. Taken from the URL when the input
        /// is fetched.
        #[arg(long)]
        host: Option<String>,
        /// `basePath` of the document. Taken from the URL (without the
        /// `/$metadata` suffix) when the input is fetched.
        #[arg(long)]
        base_path: Option<String>,
        /// Entity sets to generate paths for. All if not specified.
        #[arg(short, long)]
        include: Vec<String>,
        /// Document title.
        #[arg(long)]
        title: Option<String>,
        /// Write JSON without indentation.
        #[arg(long)]
        compact: bool,
    },
    /// Dump the service model of a metadata document as JSON.
    Parse {
        /// Metadata document: file name or `http(s)` URL of `$metadata`.
        input: String,
        /// Output file. Standard output if not specified.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write JSON without indentation.
        #[arg(long)]
        compact: bool,
    },
}

/// Metadata document text and where it came from.
struct Document {
    xml: String,
    /// `host` and path of the document when it was fetched.
    location: Option<(String, String)>,
}

/// Process a converter command.
///
/// # Errors
///
/// Returns an error if command processing fails.
pub fn process_command(command: &Commands) -> Result<Vec<String>, Error> {
    match command {
        Commands::Convert {
            input,
            config,
            output,
            host,
            base_path,
            include,
            title,
            compact,
        } => {
            let mut options = match config {
                Some(fname) => {
                    Options::read(fname).map_err(|e| Error::Config(fname.clone(), e))?
                }
                None => Options::default(),
            };
            if host.is_some() {
                options.host.clone_from(host);
            }
            if base_path.is_some() {
                options.base_path.clone_from(base_path);
            }
            if title.is_some() {
                options.title.clone_from(title);
            }
            if !include.is_empty() {
                options.include = Some(include.clone());
            }
            let document = read_input(input)?;
            if let Some((host, path)) = &document.location {
                options = options.with_location_defaults(host, path);
            }
            let service = parse_document(input, &document.xml)?;
            let swagger = openapi::convert(&service, &options).map_err(Error::Convert)?;
            info!(
                "{input}: {} paths, {} definitions",
                swagger.paths.len(),
                swagger.definitions.len()
            );
            emit(&swagger, output.as_ref(), *compact)
        }
        Commands::Parse {
            input,
            output,
            compact,
        } => {
            let document = read_input(input)?;
            let service = parse_document(input, &document.xml)?;
            emit(&service, output.as_ref(), *compact)
        }
    }
}

fn emit<T: Serialize>(
    value: &T,
    output: Option<&PathBuf>,
    compact: bool,
) -> Result<Vec<String>, Error> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .map_err(Error::Json)?;
    match output {
        Some(fname) => {
            write(fname, json).map_err(|e| Error::WriteOutput(fname.clone(), e))?;
            Ok(vec![format!("{} file has been written", fname.display())])
        }
        None => Ok(vec![json]),
    }
}

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

fn read_input(input: &str) -> Result<Document, Error> {
    if is_url(input) {
        return fetch(input);
    }
    let mut file = File::open(input).map_err(|err| Error::Io(input.into(), err))?;
    let mut xml = String::new();
    file.read_to_string(&mut xml)
        .map_err(|err| Error::Io(input.into(), err))?;
    Ok(Document {
        xml,
        location: None,
    })
}

#[cfg(feature = "fetch")]
fn fetch(input: &str) -> Result<Document, Error> {
    let url = url::Url::parse(input).map_err(|e| Error::InvalidUrl(input.into(), e))?;
    let host = url.host_str().map(|host| match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    });
    let path = url.path().to_string();
    let client = Client::new().map_err(|e| Error::Fetch(input.into(), e))?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Error::Runtime)?;
    let xml = runtime
        .block_on(client.fetch(url, &http::HeaderMap::new()))
        .map_err(|e| Error::Fetch(input.into(), e))?;
    Ok(Document {
        xml,
        location: host.map(|host| (host, path)),
    })
}

#[cfg(not(feature = "fetch"))]
fn fetch(input: &str) -> Result<Document, Error> {
    Err(Error::Io(
        input.into(),
        std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "built without URL support",
        ),
    ))
}
