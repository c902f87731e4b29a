// SPDX-License-Identifier: MPL-2.0
//! Client for the external image host, the upload side-channel.
//!
//! A picked file is posted here as multipart form data and must resolve to a
//! publicly retrievable URL before the metadata record may be created. The
//! response shape follows the imgBB convention of nesting the hosted URL under
//! a `data` object.

use crate::error::{Error, Result};
use serde::Deserialize;

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct HostResponse {
    data: HostData,
}

#[derive(Debug, Deserialize)]
struct HostData {
    url: String,
}

/// Client for the configured hosting endpoint.
#[derive(Debug, Clone)]
pub struct HostClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HostClient {
    /// Builds a client for `endpoint`, optionally authenticating with
    /// `api_key` via the `key` query parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(endpoint: &str, api_key: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            api_key,
        })
    }

    /// Uploads the file contents and resolves to the public URL of the hosted
    /// copy. Callers must have validated the file beforehand; nothing invalid
    /// should ever reach third-party storage.
    pub async fn upload(&self, file_name: &str, mime: &str, bytes: Vec<u8>) -> Result<String> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|_| Error::Validation("validation-unsupported-format".to_string()))?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let mut request = self.http.post(&self.endpoint).multipart(form);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Error::Server(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        parse_hosted_url(&body)
    }
}

/// Extracts the hosted URL from the host's JSON response body.
fn parse_hosted_url(body: &str) -> Result<String> {
    let parsed: HostResponse =
        serde_json::from_str(body).map_err(|e| Error::Network(e.to_string()))?;
    if parsed.data.url.is_empty() {
        return Err(Error::Network("host returned an empty URL".to_string()));
    }
    Ok(parsed.data.url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_extracts_nested_url() {
        let body = r#"{"data": {"url": "https://i.example/abc.png", "id": "abc"}, "success": true}"#;
        let url = parse_hosted_url(body).expect("well-formed response");
        assert_eq!(url, "https://i.example/abc.png");
    }

    #[test]
    fn parse_rejects_empty_url() {
        let body = r#"{"data": {"url": ""}}"#;
        assert!(matches!(parse_hosted_url(body), Err(Error::Network(_))));
    }

    #[test]
    fn parse_rejects_malformed_body() {
        assert!(matches!(
            parse_hosted_url("<html>error</html>"),
            Err(Error::Network(_))
        ));
    }

    #[test]
    fn client_builds_with_default_endpoint() {
        let client = HostClient::new(crate::config::DEFAULT_UPLOAD_URL, None);
        assert!(client.is_ok());
    }
}
