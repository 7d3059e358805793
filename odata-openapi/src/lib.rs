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

//! OData CSDL (EDMX) to OpenAPI 2.0 converter.
//!
//! The pipeline is:
//! - [`edmx`] reads the XML document into a validated tree;
//! - [`service`] resolves it into a flat [`Service`] model;
//! - [`openapi`] turns the model into a [`Swagger`] document.
//!
//! ```rust
//! use odata_openapi::config::Options;
//!
//! let xml = r#"<edmx:Edmx Version="4.0" xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx">
//!   <edmx:DataServices>
//!     <Schema Namespace="Demo" xmlns="http://docs.oasis-open.org/odata/ns/edm">
//!       <EntityType Name="Product">
//!         <Key><PropertyRef Name="ID"/></Key>
//!         <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
//!       </EntityType>
//!       <EntityContainer Name="Container">
//!         <EntitySet Name="Products" EntityType="Demo.Product"/>
//!       </EntityContainer>
//!     </Schema>
//!   </edmx:DataServices>
//! </edmx:Edmx>"#;
//!
//! let swagger = odata_openapi::convert_document("demo.xml", xml, &Options::default())?;
//! assert!(swagger.paths.contains_key("/Products"));
//! # Ok::<(), odata_openapi::Error>(())
//! ```

/// Command line interface.
pub mod commands;
/// Conversion options.
pub mod config;
/// EDMX document tree.
pub mod edmx;
/// Errors of the converter.
pub mod error;
/// Swagger document generation.
pub mod openapi;
/// Service model.
pub mod service;

use crate::config::Options;
use crate::edmx::Edmx;
use crate::openapi::Swagger;
use crate::service::Service;

#[doc(inline)]
pub use error::Error;

/// Parse an EDMX document into the service model.
///
/// `source` names the document in error messages.
///
/// # Errors
///
/// - `Error::Edmx` if the XML is not a valid EDMX document
/// - `Error::Parse` if the document has no entity container
pub fn parse_document(source: &str, xml: &str) -> Result<Service, Error> {
    let edmx = Edmx::parse(xml).map_err(|e| Error::Edmx(source.into(), e))?;
    service::parse(&edmx).map_err(Error::Parse)
}

/// Parse an EDMX document and convert it to a Swagger document.
///
/// # Errors
///
/// Everything [`parse_document`] returns plus `Error::Convert` when
/// operation ids collide.
pub fn convert_document(source: &str, xml: &str, options: &Options) -> Result<Swagger, Error> {
    let service = parse_document(source, xml)?;
    openapi::convert(&service, options).map_err(Error::Convert)
}
