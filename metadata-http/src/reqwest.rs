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

use crate::MetadataFetcher;
use http::header;
use http::HeaderMap;
use http::StatusCode;
use log::debug;
use std::time::Duration;
use url::Url;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "odata2openapi";

#[derive(Debug)]
pub enum FetchError {
    Reqwest(reqwest::Error),
    /// Server answered with a status that is neither success nor redirect.
    UnexpectedResponse {
        status: StatusCode,
        description: String,
    },
    MissingLocation(StatusCode),
    TooManyRedirects(usize),
    InvalidLocation(String, url::ParseError),
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::Reqwest(value)
    }
}

#[allow(clippy::absolute_paths)]
impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reqwest(e) => write!(f, "HTTP client error: {e}"),
            Self::UnexpectedResponse {
                status,
                description,
            } => write!(f, "unexpected response {}: {description}", status.as_u16()),
            Self::MissingLocation(status) => {
                write!(f, "redirect {} without Location header", status.as_u16())
            }
            Self::TooManyRedirects(max) => write!(f, "more than {max} redirects"),
            Self::InvalidLocation(location, e) => {
                write!(f, "invalid redirect location {location}: {e}")
            }
        }
    }
}

#[allow(clippy::absolute_paths)]
impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Reqwest(e) => Some(e),
            Self::InvalidLocation(_, e) => Some(e),
            _ => None,
        }
    }
}

/// Configuration parameters for the metadata client.
///
/// ```rust
/// use odata_openapi_http::reqwest::ClientParams;
/// use std::time::Duration;
///
/// let params = ClientParams::new()
///     .timeout(Duration::from_secs(30))
///     .max_redirects(3);
/// ```
#[derive(Debug, Clone)]
pub struct ClientParams {
    /// HTTP request timeout
    pub timeout: Option<Duration>,
    /// TCP connection timeout
    pub connect_timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: Option<String>,
    /// Whether to accept invalid TLS certificates
    pub accept_invalid_certs: bool,
    /// Maximum number of redirects followed for one document
    pub max_redirects: usize,
}

impl Default for ClientParams {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(60)),
            connect_timeout: Some(Duration::from_secs(10)),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            accept_invalid_certs: false,
            max_redirects: 10,
        }
    }
}

impl ClientParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    #[must_use]
    pub const fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    #[must_use]
    pub const fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }
}

/// Metadata fetcher on top of reqwest.
///
/// Automatic redirects are disabled in the underlying client. Every 3xx
/// answer is followed by issuing a new GET against its `Location`, so the
/// custom headers are sent to each hop.
///
/// ```rust,no_run
/// use odata_openapi_http::reqwest::Client;
/// use odata_openapi_http::MetadataFetcher;
/// use http::HeaderMap;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new()?;
/// let url = Url::parse("https://services.odata.org/V4/Northwind/Northwind.svc/$metadata")?;
/// let xml = client.fetch(url, &HeaderMap::new()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
    max_redirects: usize,
}

#[allow(clippy::missing_errors_doc)]
impl Client {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_params(ClientParams::default())
    }

    pub fn with_params(params: ClientParams) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .redirect(reqwest::redirect::Policy::none());

        if let Some(timeout) = params.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(connect_timeout) = params.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        if let Some(user_agent) = params.user_agent {
            builder = builder.user_agent(user_agent);
        }

        if params.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
            max_redirects: params.max_redirects,
        })
    }

    /// Wrap an existing client. Its redirect policy should be `none`.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, max_redirects: usize) -> Self {
        Self {
            client,
            max_redirects,
        }
    }
}

fn redirect_target(current: &Url, response: &reqwest::Response) -> Result<Url, FetchError> {
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(FetchError::MissingLocation(status))?;
    current
        .join(location)
        .map_err(|e| FetchError::InvalidLocation(location.to_string(), e))
}

impl MetadataFetcher for Client {
    type Error = FetchError;

    async fn fetch(&self, url: Url, custom_headers: &HeaderMap) -> Result<String, Self::Error> {
        let mut current = url;
        let mut redirects = 0;
        loop {
            debug!("GET {current}");
            let response = self
                .client
                .get(current.clone())
                .headers(custom_headers.clone())
                .send()
                .await?;
            let status = response.status();
            if status.is_success() {
                return Ok(response.text().await?);
            }
            if !status.is_redirection() {
                return Err(FetchError::UnexpectedResponse {
                    status,
                    description: status
                        .canonical_reason()
                        .unwrap_or("unknown status")
                        .to_string(),
                });
            }
            if redirects >= self.max_redirects {
                return Err(FetchError::TooManyRedirects(self.max_redirects));
            }
            current = redirect_target(&current, &response)?;
            redirects += 1;
            debug!("redirected ({}) to {current}", status.as_u16());
        }
    }
}
