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

#[cfg(feature = "reqwest")]
mod tests {
    use http::HeaderMap;
    use http::HeaderValue;
    use http::StatusCode;
    use odata_openapi_http::reqwest::Client;
    use odata_openapi_http::reqwest::ClientParams;
    use odata_openapi_http::reqwest::FetchError;
    use odata_openapi_http::MetadataFetcher;
    use url::Url;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    const METADATA: &str = r#"<edmx:Edmx Version="4.0" xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx"/>"#;

    fn url(server: &MockServer, p: &str) -> Url {
        Url::parse(&format!("{}{p}", server.uri())).expect("valid url")
    }

    #[tokio::test]
    async fn fetch_returns_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/svc/$metadata"))
            .and(header("user-agent", "odata2openapi"))
            .respond_with(ResponseTemplate::new(200).set_body_string(METADATA))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new().expect("client");
        let body = client
            .fetch(url(&server, "/svc/$metadata"), &HeaderMap::new())
            .await
            .expect("must fetch");
        assert_eq!(body, METADATA);
    }

    #[tokio::test]
    async fn fetch_follows_redirects_with_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old/$metadata"))
            .respond_with(
                ResponseTemplate::new(301).insert_header("location", "/new/$metadata"),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new/$metadata"))
            .and(header("x-tenant", "demo"))
            .respond_with(ResponseTemplate::new(200).set_body_string(METADATA))
            .expect(1)
            .mount(&server)
            .await;

        let mut headers = HeaderMap::new();
        headers.insert("x-tenant", HeaderValue::from_static("demo"));
        let client = Client::new().expect("client");
        let body = client
            .fetch(url(&server, "/old/$metadata"), &headers)
            .await
            .expect("must follow redirect");
        assert_eq!(body, METADATA);
    }

    #[tokio::test]
    async fn fetch_reports_status_description() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing/$metadata"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = Client::new().expect("client");
        let err = client
            .fetch(url(&server, "/missing/$metadata"), &HeaderMap::new())
            .await
            .expect_err("must fail");
        match &err {
            FetchError::UnexpectedResponse {
                status,
                description,
            } => {
                assert_eq!(*status, StatusCode::NOT_FOUND);
                assert_eq!(description, "Not Found");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.to_string(), "unexpected response 404: Not Found");
    }

    #[tokio::test]
    async fn fetch_stops_after_max_redirects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/loop"))
            .respond_with(ResponseTemplate::new(302).insert_header("location", "/loop"))
            .mount(&server)
            .await;

        let client = Client::with_params(ClientParams::new().max_redirects(2)).expect("client");
        let err = client
            .fetch(url(&server, "/loop"), &HeaderMap::new())
            .await
            .expect_err("must give up");
        assert!(matches!(err, FetchError::TooManyRedirects(2)));
    }

    #[tokio::test]
    async fn fetch_rejects_redirect_without_location() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/nowhere"))
            .respond_with(ResponseTemplate::new(307))
            .mount(&server)
            .await;

        let client = Client::new().expect("client");
        let err = client
            .fetch(url(&server, "/nowhere"), &HeaderMap::new())
            .await
            .expect_err("must fail");
        assert!(matches!(
            err,
            FetchError::MissingLocation(StatusCode::TEMPORARY_REDIRECT)
        ));
    }
}
