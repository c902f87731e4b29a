// SPDX-License-Identifier: MPL-2.0
//! Client for the image metadata API.

use crate::error::{Error, Result};

use super::models::{NewImage, Page};

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Images larger than this are rejected while streaming rather than buffered
/// into memory.
const MAX_IMAGE_BYTES: u64 = 25 * 1024 * 1024;

/// Thin wrapper over the metadata API. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: normalize_base_url(base_url),
        })
    }

    /// Fetches one page of the image feed.
    ///
    /// `after` is the opaque continuation cursor from the previous page; the
    /// initial call passes `None`. Failures are propagated, never retried.
    pub async fn fetch_images(&self, after: Option<&str>) -> Result<Page> {
        let url = format!("{}/api/images", self.base_url);
        let mut request = self.http.get(&url);
        if let Some(cursor) = after {
            request = request.query(&[("after", cursor)]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Error::Server(response.status().as_u16()));
        }

        let page = response
            .json::<Page>()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        Ok(page)
    }

    /// Creates a new image record. Only success or failure is observed; the
    /// response body is not interpreted.
    pub async fn create_image(&self, image: &NewImage) -> Result<()> {
        let url = format!("{}/api/images", self.base_url);
        let response = self.http.post(&url).json(image).send().await?;
        if !response.status().is_success() {
            return Err(Error::Server(response.status().as_u16()));
        }
        Ok(())
    }

    /// Downloads raw image bytes from an absolute URL, streaming chunks and
    /// enforcing [`MAX_IMAGE_BYTES`] so a misbehaving host cannot exhaust
    /// memory.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        use futures_util::StreamExt;

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Server(response.status().as_u16()));
        }

        if let Some(length) = response.content_length() {
            if length > MAX_IMAGE_BYTES {
                return Err(Error::Network(format!(
                    "image of {length} bytes exceeds the {MAX_IMAGE_BYTES} byte limit"
                )));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Network(e.to_string()))?;
            if bytes.len() as u64 + chunk.len() as u64 > MAX_IMAGE_BYTES {
                return Err(Error::Network(format!(
                    "image exceeds the {MAX_IMAGE_BYTES} byte limit"
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        Ok(bytes)
    }
}

/// Strips trailing slashes so path joining stays predictable regardless of how
/// the base URL was written in `settings.toml`.
fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
