// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers and the task
//! builders that wrap HTTP calls into Iced tasks. Clients are constructed
//! inside the futures so a failure to build one surfaces through the same
//! message path as a failed request.

use super::{App, Message, Overlay, Screen, UploadState};
use crate::api::{ApiClient, HostClient, NewImage};
use crate::config::{self, Config};
use crate::error::Error;
use crate::feed::{FetchRequest, Outcome};
use crate::ui::gallery::{self, Thumbnail};
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::settings;
use crate::ui::upload_form;
use crate::upload;
use iced::widget::image::Handle;
use iced::Task;

/// Builds the task for one feed page fetch described by `request`.
pub(super) fn fetch_page_task(config: &Config, request: FetchRequest) -> Task<Message> {
    let base_url = config.api_base_url().to_string();
    let generation = request.generation;
    let cursor = request.cursor;

    Task::perform(
        async move {
            let client = ApiClient::new(&base_url)?;
            client.fetch_images(cursor.as_deref()).await
        },
        move |result| Message::PageFetched { generation, result },
    )
}

/// Builds one thumbnail download task.
fn fetch_thumbnail_task(config: &Config, url: String) -> Task<Message> {
    let base_url = config.api_base_url().to_string();
    let request_url = url.clone();

    Task::perform(
        async move {
            let client = ApiClient::new(&base_url)?;
            client.fetch_bytes(&request_url).await
        },
        move |result| Message::ThumbnailFetched {
            url: url.clone(),
            result,
        },
    )
}

/// Launches downloads for every record whose thumbnail is neither cached nor
/// already in flight.
fn fetch_missing_thumbnails(app: &mut App) -> Task<Message> {
    let urls = app.gallery.missing_urls(app.feed.flatten().into_iter());
    let mut tasks = Vec::with_capacity(urls.len());
    for url in urls {
        app.gallery.mark_pending(url.clone());
        tasks.push(fetch_thumbnail_task(&app.config, url));
    }
    Task::batch(tasks)
}

/// Opens the native file dialog, reads the picked file from disk, and probes
/// its pixel dimensions. Decoding runs on a blocking task so a large file
/// does not stall the UI loop.
fn pick_file_task() -> Task<Message> {
    Task::perform(
        async {
            let picked = rfd::AsyncFileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "gif"])
                .pick_file()
                .await?;

            let path = picked.path().to_path_buf();
            let name = picked.file_name();
            let bytes = picked.read().await;
            let mime = upload::mime_from_path(&path)
                .unwrap_or("application/octet-stream")
                .to_string();

            let probe_bytes = bytes.clone();
            let dimensions = tokio::task::spawn_blocking(move || {
                image_rs::load_from_memory(&probe_bytes)
                    .map(|decoded| (decoded.width(), decoded.height()))
                    .ok()
            })
            .await
            .ok()
            .flatten();

            Some(super::PickedUpload {
                file: crate::upload::form::PickedFile {
                    name,
                    mime,
                    size_bytes: bytes.len() as u64,
                },
                bytes,
                dimensions,
            })
        },
        Message::FilePicked,
    )
}

/// Ships validated file bytes to the image host.
fn host_upload_task(config: &Config, name: String, mime: String, bytes: Vec<u8>) -> Task<Message> {
    let endpoint = config.upload_url().to_string();
    let api_key = config.upload_key.clone();

    Task::perform(
        async move {
            let host = HostClient::new(&endpoint, api_key)?;
            host.upload(&name, &mime, bytes).await
        },
        Message::HostUploadFinished,
    )
}

/// Sends the record creation request.
fn submit_task(config: &Config, new_image: NewImage) -> Task<Message> {
    let base_url = config.api_base_url().to_string();

    Task::perform(
        async move {
            let client = ApiClient::new(&base_url)?;
            client.create_image(&new_image).await
        },
        Message::SubmitFinished,
    )
}

pub(super) fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::OpenUploadForm => {
            app.overlay = Some(Overlay::Upload(Box::new(UploadState::default())));
            Task::none()
        }
        navbar::Event::OpenSettings => {
            app.screen = Screen::Settings;
            Task::none()
        }
        navbar::Event::Back => {
            app.screen = Screen::Gallery;
            Task::none()
        }
    }
}

pub(super) fn handle_gallery_message(app: &mut App, message: gallery::Message) -> Task<Message> {
    match gallery::update(message) {
        gallery::Event::OpenLightbox(record_id) => {
            let Some(record) = app.feed.find(&record_id) else {
                return Task::none();
            };
            let url = record.url.clone();
            app.overlay = Some(Overlay::Lightbox { record_id });

            // The lightbox reuses the gallery's thumbnail store; keep the
            // entry warm and fetch it if it is not there yet.
            if app.gallery.thumbnail(&url).is_some() {
                app.gallery.touch(&url);
                Task::none()
            } else {
                app.gallery.mark_pending(url.clone());
                fetch_thumbnail_task(&app.config, url)
            }
        }
        gallery::Event::LoadMore => match app.feed.start_load_more() {
            Some(request) => fetch_page_task(&app.config, request),
            None => Task::none(),
        },
        gallery::Event::Retry => match app.feed.start_initial_load() {
            Some(request) => fetch_page_task(&app.config, request),
            None => Task::none(),
        },
    }
}

pub(super) fn handle_lightbox_message(app: &mut App, message: lightbox::Message) -> Task<Message> {
    match message {
        lightbox::Message::ClosePressed => {
            app.overlay = None;
            Task::none()
        }
    }
}

pub(super) fn handle_upload_form_message(
    app: &mut App,
    message: upload_form::Message,
) -> Task<Message> {
    let Some(Overlay::Upload(state)) = &mut app.overlay else {
        return Task::none();
    };

    match message {
        upload_form::Message::TitleChanged(value) => {
            state.form.set_title(value);
            Task::none()
        }
        upload_form::Message::DescriptionChanged(value) => {
            state.form.set_description(value);
            Task::none()
        }
        upload_form::Message::PickFilePressed => pick_file_task(),
        upload_form::Message::SubmitPressed => match state.form.prepare_submission() {
            Ok(new_image) => submit_task(&app.config, new_image),
            Err(Error::MissingUpload) => {
                // Same cleanup path as the original flow: the surface closes
                // and the attempt is reported, without any network call.
                app.notifications
                    .push(Notification::warning("notification-missing-upload"));
                app.overlay = None;
                Task::none()
            }
            Err(_) => {
                // Field errors are now recorded on the form; it stays open.
                Task::none()
            }
        },
        upload_form::Message::CancelPressed => {
            app.overlay = None;
            Task::none()
        }
    }
}

pub(super) fn handle_settings_message(app: &mut App, message: settings::Message) -> Task<Message> {
    match settings::update(message) {
        settings::Event::LanguageChanged(locale) => {
            app.i18n.set_locale(locale.clone());
            app.config.language = Some(locale.to_string());
            if let Err(error) = config::save(&app.config) {
                app.notifications
                    .push(Notification::warning(error.i18n_key()));
            }
            Task::none()
        }
    }
}

pub(super) fn handle_page_fetched(
    app: &mut App,
    generation: u64,
    result: Result<crate::api::Page, Error>,
) -> Task<Message> {
    match app.feed.resolve(generation, result) {
        Outcome::Appended => fetch_missing_thumbnails(app),
        // The gallery renders the full-screen error state with its retry
        // control; no toast on top of that.
        Outcome::InitialFailed(_) => Task::none(),
        Outcome::LoadMoreFailed(_) => {
            app.notifications
                .push(Notification::error("notification-load-more-failed"));
            Task::none()
        }
        Outcome::Stale => Task::none(),
    }
}

pub(super) fn handle_thumbnail_fetched(
    app: &mut App,
    url: String,
    result: Result<Vec<u8>, Error>,
) -> Task<Message> {
    let thumbnail = match result {
        Ok(bytes) => Thumbnail::Ready(Handle::from_bytes(bytes)),
        Err(_) => Thumbnail::Failed,
    };
    app.gallery.store(url, thumbnail);
    Task::none()
}

pub(super) fn handle_file_picked(
    app: &mut App,
    picked: Option<super::PickedUpload>,
) -> Task<Message> {
    // Guard against the dialog resolving after the form was torn down.
    let Some(Overlay::Upload(state)) = &mut app.overlay else {
        return Task::none();
    };
    let Some(picked) = picked else {
        return Task::none();
    };

    let name = picked.file.name.clone();
    let mime = picked.file.mime.clone();

    // Validation happens inside `accept_file`, before any upload starts: an
    // invalid candidate never reaches the image host.
    if !state.form.accept_file(picked.file) {
        return Task::none();
    }

    state.preview_dimensions = picked.dimensions;
    state.preview = Some(Handle::from_bytes(picked.bytes.clone()));

    host_upload_task(&app.config, name, mime, picked.bytes)
}

pub(super) fn handle_host_upload(app: &mut App, result: Result<String, Error>) -> Task<Message> {
    // A late resolution with no upload form on screen is dropped.
    let Some(Overlay::Upload(state)) = &mut app.overlay else {
        return Task::none();
    };

    match result {
        Ok(url) => {
            state.form.upload_completed(url);
        }
        Err(_) => {
            state.form.upload_failed();
            state.preview = None;
            state.preview_dimensions = None;
            app.notifications
                .push(Notification::error("notification-upload-failed"));
        }
    }
    Task::none()
}

pub(super) fn handle_submit_finished(app: &mut App, result: Result<(), Error>) -> Task<Message> {
    // The surface closes regardless of outcome; there is no retry and no
    // partial-state recovery.
    if matches!(app.overlay, Some(Overlay::Upload(_))) {
        app.overlay = None;
    }

    match result {
        Ok(()) => {
            app.notifications
                .push(Notification::success("notification-image-created"));
            // "Images changed": the next feed read must observe the new
            // record, so re-fetch rather than mutate locally.
            let request = app.feed.refresh();
            fetch_page_task(&app.config, request)
        }
        Err(_) => {
            app.notifications
                .push(Notification::error("notification-create-failed"));
            Task::none()
        }
    }
}

pub(super) fn handle_escape(app: &mut App) -> Task<Message> {
    if app.overlay.is_some() {
        app.overlay = None;
    } else if app.screen == Screen::Settings {
        app.screen = Screen::Gallery;
    }
    Task::none()
}

pub(super) fn handle_backdrop(app: &mut App) -> Task<Message> {
    app.overlay = None;
    Task::none()
}
