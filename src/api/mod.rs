// SPDX-License-Identifier: MPL-2.0
//! HTTP clients for the remote image services.
//!
//! Two collaborators live here:
//!
//! - [`client::ApiClient`] - the image metadata API (paginated feed reads,
//!   record creation, raw image bytes for display)
//! - [`host::HostClient`] - the external image host used as the upload
//!   side-channel before a record may be created
//!
//! Both are thin `reqwest` wrappers. Transport failures map to
//! [`Error::Network`](crate::error::Error::Network), non-success HTTP statuses
//! to [`Error::Server`](crate::error::Error::Server); neither client retries.

pub mod client;
pub mod host;
pub mod models;

pub use client::ApiClient;
pub use host::HostClient;
pub use models::{ImageRecord, NewImage, Page};
