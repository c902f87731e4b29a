// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a desktop image gallery client built with the Iced GUI framework.
//!
//! It browses a cursor-paginated feed of images served by a remote metadata API,
//! shows individual images in a lightbox overlay, and submits new images through
//! a validated upload form. Localization uses Fluent, preferences live in a
//! `settings.toml`, and all networking goes through a thin `reqwest` wrapper.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod feed;
pub mod i18n;
pub mod ui;
pub mod upload;
