// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, overlays,
//! and settings.
//!
//! The `App` struct wires together the domains (feed, upload pipeline,
//! localization, notifications) and translates messages into side effects
//! like HTTP fetches or config persistence. This file intentionally keeps
//! policy decisions (window sizing, which failures toast, when the feed
//! refreshes) close to the main update loop so it is easy to audit
//! user-facing behavior.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, PickedUpload};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::feed::Feed;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::notifications;
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1120;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 540;

/// How far the spinner advances per tick, in radians.
const SPINNER_STEP: f32 = 0.35;

/// State behind the upload form overlay: the form itself plus the locally
/// decoded preview of the picked file.
#[derive(Debug, Default)]
pub struct UploadState {
    pub form: crate::upload::form::Form,
    pub preview: Option<Handle>,
    pub preview_dimensions: Option<(u32, u32)>,
}

/// Modal overlay above the active screen. Dropping the value is what "reset
/// and close the surface" means for the upload form.
#[derive(Debug)]
pub enum Overlay {
    Lightbox { record_id: String },
    Upload(Box<UploadState>),
}

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    pub(crate) screen: Screen,
    pub(crate) config: Config,
    pub(crate) feed: Feed,
    pub(crate) gallery: gallery::State,
    pub(crate) overlay: Option<Overlay>,
    pub(crate) notifications: notifications::Manager,
    /// Rotation angle of every visible spinner, advanced on tick.
    pub(crate) spinner_rotation: f32,
    /// Theme resolved once at startup; system detection is not re-queried.
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("feed_status", &self.feed.status())
            .field("has_overlay", &self.overlay.is_some())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::Gallery,
            feed: Feed::new(),
            gallery: gallery::State::new(config.thumbnail_cache_entries()),
            overlay: None,
            notifications: notifications::Manager::new(),
            spinner_rotation: 0.0,
            theme: config.theme_mode.resolve(),
            config,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the initial feed fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            gallery: gallery::State::new(config.thumbnail_cache_entries()),
            theme: config.theme_mode.resolve(),
            config,
            ..Self::default()
        };

        let task = match app.feed.start_initial_load() {
            Some(request) => update::fetch_page_task(&app.config, request),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.needs_tick());
        Subscription::batch([event_sub, tick_sub])
    }

    /// Whether anything on screen is animated or timed right now.
    fn needs_tick(&self) -> bool {
        self.notifications.has_notifications()
            || matches!(
                self.feed.status(),
                crate::feed::Status::Loading | crate::feed::Status::LoadingMore
            )
            || self.overlay.is_some()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(self, navbar_message),
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(self, gallery_message)
            }
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(self, lightbox_message)
            }
            Message::UploadForm(form_message) => {
                update::handle_upload_form_message(self, form_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(self, settings_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::PageFetched { generation, result } => {
                update::handle_page_fetched(self, generation, result)
            }
            Message::ThumbnailFetched { url, result } => {
                update::handle_thumbnail_fetched(self, url, result)
            }
            Message::FilePicked(picked) => update::handle_file_picked(self, picked),
            Message::HostUploadFinished(result) => update::handle_host_upload(self, result),
            Message::SubmitFinished(result) => update::handle_submit_finished(self, result),
            Message::EscapePressed => update::handle_escape(self),
            Message::BackdropPressed => update::handle_backdrop(self),
            Message::Tick(_instant) => {
                self.spinner_rotation =
                    (self.spinner_rotation + SPINNER_STEP) % std::f32::consts::TAU;
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{ImageRecord, Page};
    use crate::error::Error;
    use crate::feed::Status;
    use crate::ui::gallery::Thumbnail;

    fn record(id: &str) -> ImageRecord {
        ImageRecord {
            id: id.to_string(),
            title: format!("title-{id}"),
            description: String::new(),
            url: format!("https://img.example/{id}.png"),
            ts: 0,
        }
    }

    fn page(ids: &[&str], after: Option<&str>) -> Page {
        Page {
            data: ids.iter().map(|id| record(id)).collect(),
            after: after.map(String::from),
        }
    }

    fn loaded_app(ids: &[&str], after: Option<&str>) -> App {
        let mut app = App::default();
        let request = app.feed.start_initial_load().expect("idle feed");
        let _ = app.update(Message::PageFetched {
            generation: request.generation,
            result: Ok(page(ids, after)),
        });
        app
    }

    #[test]
    fn title_uses_the_localized_app_name() {
        let app = App::default();
        assert!(!app.title().is_empty());
        assert!(!app.title().starts_with("MISSING:"));
    }

    #[test]
    fn page_fetched_marks_feed_loaded() {
        let app = loaded_app(&["a", "b"], Some("t2"));
        assert_eq!(app.feed.status(), Status::Loaded);
        assert_eq!(app.feed.record_count(), 2);
        assert!(app.feed.can_load_more());
    }

    #[test]
    fn stale_page_result_is_ignored() {
        let mut app = App::default();
        let request = app.feed.start_initial_load().expect("idle feed");
        let stale_generation = request.generation;
        let _ = app.feed.refresh();

        let _ = app.update(Message::PageFetched {
            generation: stale_generation,
            result: Ok(page(&["old"], None)),
        });
        assert!(app.feed.is_empty());
    }

    #[test]
    fn load_more_failure_pushes_a_toast_and_keeps_pages() {
        let mut app = loaded_app(&["a"], Some("t2"));
        let request = app.feed.start_load_more().expect("cursor present");

        let _ = app.update(Message::PageFetched {
            generation: request.generation,
            result: Err(Error::Network("reset".to_string())),
        });

        assert_eq!(app.feed.status(), Status::Loaded);
        assert_eq!(app.feed.record_count(), 1);
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn card_press_opens_the_lightbox() {
        let mut app = loaded_app(&["a"], None);
        let _ = app.update(Message::Gallery(crate::ui::gallery::Message::CardPressed(
            "a".to_string(),
        )));
        assert!(matches!(
            app.overlay,
            Some(Overlay::Lightbox { ref record_id }) if record_id == "a"
        ));
    }

    #[test]
    fn escape_closes_the_overlay_before_leaving_settings() {
        let mut app = loaded_app(&["a"], None);
        app.screen = Screen::Settings;
        app.overlay = Some(Overlay::Upload(Box::default()));

        let _ = app.update(Message::EscapePressed);
        assert!(app.overlay.is_none());
        assert_eq!(app.screen, Screen::Settings);

        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.screen, Screen::Gallery);
    }

    #[test]
    fn successful_submission_refreshes_the_feed_and_closes_the_form() {
        let mut app = loaded_app(&["a"], None);
        let generation_before = app.feed.generation();
        app.overlay = Some(Overlay::Upload(Box::default()));

        let _ = app.update(Message::SubmitFinished(Ok(())));

        assert!(app.overlay.is_none(), "the surface is closed");
        assert_eq!(app.feed.generation(), generation_before + 1);
        assert_eq!(app.feed.status(), Status::Loading);
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn failed_submission_closes_the_form_without_refreshing() {
        let mut app = loaded_app(&["a"], None);
        let generation_before = app.feed.generation();
        app.overlay = Some(Overlay::Upload(Box::default()));

        let _ = app.update(Message::SubmitFinished(Err(Error::Server(500))));

        assert!(app.overlay.is_none());
        assert_eq!(app.feed.generation(), generation_before);
        assert_eq!(app.feed.status(), Status::Loaded);
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn thumbnail_failure_is_remembered_as_failed() {
        let mut app = loaded_app(&["a"], None);
        app.gallery.mark_pending("https://img.example/a.png".to_string());

        let _ = app.update(Message::ThumbnailFetched {
            url: "https://img.example/a.png".to_string(),
            result: Err(Error::Server(404)),
        });

        assert!(matches!(
            app.gallery.thumbnail("https://img.example/a.png"),
            Some(Thumbnail::Failed)
        ));
    }

    #[test]
    fn host_upload_failure_resets_the_file_slot() {
        let mut app = App::default();
        let mut upload = UploadState::default();
        assert!(upload.form.accept_file(crate::upload::form::PickedFile {
            name: "photo.png".to_string(),
            mime: "image/png".to_string(),
            size_bytes: 1_000,
        }));
        app.overlay = Some(Overlay::Upload(Box::new(upload)));

        let _ = app.update(Message::HostUploadFinished(Err(Error::Server(500))));

        match &app.overlay {
            Some(Overlay::Upload(state)) => {
                assert_eq!(
                    *state.form.upload_status(),
                    crate::upload::form::UploadStatus::Failed
                );
                assert!(state.preview.is_none());
            }
            _ => panic!("the form stays open after a host failure"),
        }
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn tick_advances_the_spinner_and_wraps() {
        let mut app = App::default();
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(app.spinner_rotation > 0.0);
        app.spinner_rotation = std::f32::consts::TAU - 0.01;
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(app.spinner_rotation < std::f32::consts::TAU);
    }
}
