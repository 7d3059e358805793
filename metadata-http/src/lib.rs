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

//! Retrieval of OData `$metadata` documents.
//!
//! The [`MetadataFetcher`] trait is the seam between the converter and
//! the transport. The `reqwest` feature provides [`reqwest::Client`].

#[cfg(feature = "reqwest")]
pub mod reqwest;

use http::HeaderMap;
use std::error::Error as StdError;
use std::future::Future;
use url::Url;

/// Source of metadata documents.
pub trait MetadataFetcher: Send + Sync {
    type Error: Send + StdError;

    /// Retrieve the document at `url` and return its body.
    ///
    /// Redirects are followed by the implementation.
    fn fetch(
        &self,
        url: Url,
        custom_headers: &HeaderMap,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
