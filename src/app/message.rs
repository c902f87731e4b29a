// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::models::Page;
use crate::error::Error;
use crate::ui::gallery;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::upload_form;
use crate::upload::form::PickedFile;
use std::time::Instant;

/// A file picked through the native dialog and read from disk: validation
/// metadata, the raw bytes destined for the image host, and the pixel
/// dimensions when the file decoded locally.
#[derive(Debug, Clone)]
pub struct PickedUpload {
    pub file: PickedFile,
    pub bytes: Vec<u8>,
    pub dimensions: Option<(u32, u32)>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery::Message),
    Lightbox(lightbox::Message),
    UploadForm(upload_form::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// A feed page fetch settled. `generation` identifies the feed
    /// incarnation that launched it; stale completions are dropped.
    PageFetched {
        generation: u64,
        result: Result<Page, Error>,
    },
    /// A thumbnail download settled.
    ThumbnailFetched {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
    /// Result of the native file dialog; `None` when it was dismissed.
    FilePicked(Option<PickedUpload>),
    /// The image host upload settled with the public URL or an error.
    HostUploadFinished(Result<String, Error>),
    /// The record creation request settled.
    SubmitFinished(Result<(), Error>),
    /// Escape was pressed: close the active overlay or leave settings.
    EscapePressed,
    /// The modal backdrop was clicked.
    BackdropPressed,
    Tick(Instant), // Periodic tick for spinner rotation and toast auto-dismiss
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
}
