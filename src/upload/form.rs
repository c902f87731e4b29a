// SPDX-License-Identifier: MPL-2.0
//! Upload form state and the local submission guard.
//!
//! The form owns the text fields, the picked file, the status of the
//! side-channel upload and the per-field errors. It is deliberately free of
//! UI and networking concerns so the whole submission precondition - "all
//! validators pass AND an upload has completed" - is testable as plain code.

use crate::api::models::NewImage;
use crate::error::{Error, Result};

use super::validate::{self, Rejection};

/// Status of the side-channel upload to the external image host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    /// No file accepted yet.
    #[default]
    NotStarted,
    /// The file passed validation and is being shipped to the host.
    Uploading,
    /// The host resolved a public URL.
    Completed(String),
    /// The host upload failed; the user may pick a file again.
    Failed,
}

/// A candidate file picked through the native dialog, described by metadata
/// only; the bytes travel separately through the upload task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub mime: String,
    pub size_bytes: u64,
}

/// State of the "add image" form.
#[derive(Debug, Default)]
pub struct Form {
    title: String,
    description: String,
    file: Option<PickedFile>,
    upload: UploadStatus,
    submitting: bool,
    title_error: Option<Rejection>,
    description_error: Option<Rejection>,
    file_error: Option<Rejection>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn file(&self) -> Option<&PickedFile> {
        self.file.as_ref()
    }

    pub fn upload_status(&self) -> &UploadStatus {
        &self.upload
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn title_error(&self) -> Option<Rejection> {
        self.title_error
    }

    pub fn description_error(&self) -> Option<Rejection> {
        self.description_error
    }

    pub fn file_error(&self) -> Option<Rejection> {
        self.file_error
    }

    /// Updates the title. Once the field has been flagged, it re-validates on
    /// every keystroke so the error clears as soon as the input is fixed.
    pub fn set_title(&mut self, value: String) {
        self.title = value;
        if self.title_error.is_some() {
            self.title_error = validate::validate_title(&self.title).err();
        }
    }

    pub fn set_description(&mut self, value: String) {
        self.description = value;
        if self.description_error.is_some() {
            self.description_error = validate::validate_description(&self.description).err();
        }
    }

    /// Validates a picked file and, when it passes, marks the side-channel
    /// upload as started. Returns `true` when the caller should launch the
    /// host upload.
    ///
    /// Validation happens here, before any bytes leave the machine, so an
    /// oversized or unsupported file is never shipped to third-party storage.
    pub fn accept_file(&mut self, file: PickedFile) -> bool {
        match validate::validate_file(file.size_bytes, &file.mime) {
            Ok(()) => {
                self.file_error = None;
                self.file = Some(file);
                self.upload = UploadStatus::Uploading;
                true
            }
            Err(rejection) => {
                self.file_error = Some(rejection);
                self.file = None;
                self.upload = UploadStatus::NotStarted;
                false
            }
        }
    }

    /// Records the public URL resolved by the image host. Ignored unless an
    /// upload is actually in flight, so a late completion cannot resurrect a
    /// cleared file slot.
    pub fn upload_completed(&mut self, url: String) {
        if self.upload == UploadStatus::Uploading {
            self.upload = UploadStatus::Completed(url);
        }
    }

    pub fn upload_failed(&mut self) {
        if self.upload == UploadStatus::Uploading {
            self.upload = UploadStatus::Failed;
            self.file = None;
        }
    }

    /// Runs every field validator, recording the first failure per field.
    /// Returns `true` when all fields pass.
    pub fn validate_fields(&mut self) -> bool {
        self.title_error = validate::validate_title(&self.title).err();
        self.description_error = validate::validate_description(&self.description).err();
        if self.file.is_none() && self.file_error.is_none() {
            self.file_error = Some(Rejection::Required);
        }
        self.title_error.is_none() && self.description_error.is_none() && self.file_error.is_none()
    }

    /// The submit control is unavailable mid-upload and mid-submission.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.upload != UploadStatus::Uploading
    }

    /// The local submission guard. Checks every precondition without touching
    /// the network:
    ///
    /// - all field validators pass, and
    /// - the side-channel upload completed with a non-empty URL, otherwise
    ///   [`Error::MissingUpload`] is returned.
    ///
    /// On success the form is marked as submitting and the ready-to-send
    /// request body is returned.
    pub fn prepare_submission(&mut self) -> Result<NewImage> {
        if !self.validate_fields() {
            let key = self
                .first_error()
                .map(|rejection| rejection.i18n_key().to_string())
                .unwrap_or_default();
            return Err(Error::Validation(key));
        }

        let url = match &self.upload {
            UploadStatus::Completed(url) if !url.is_empty() => url.clone(),
            _ => return Err(Error::MissingUpload),
        };

        self.submitting = true;
        Ok(NewImage {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            url,
        })
    }

    /// Clears every field and error, back to a pristine form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn first_error(&self) -> Option<Rejection> {
        self.file_error.or(self.title_error).or(self.description_error)
    }
}
