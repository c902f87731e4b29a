// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: the paginated grid of uploaded images.
//!
//! The grid renders the flattened feed in fetch order. Thumbnails are
//! downloaded on demand and kept in a bounded LRU store owned by this
//! component; a missing thumbnail shows a spinner, a failed one shows a
//! muted placeholder. The "load more" control is only offered while the
//! protocol has a continuation cursor to follow.

use crate::api::models::ImageRecord;
use crate::feed::{Feed, Status};
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::widgets::spinner::Spinner;
use iced::widget::image::Handle;
use iced::widget::{button, scrollable, Column, Container, Image, Row, Text};
use iced::{alignment, ContentFit, Element, Length};
use lru::LruCache;
use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;

/// A downloaded thumbnail, or the memory of a failed download.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Ready(Handle),
    Failed,
}

/// Messages emitted by the gallery grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// A card was clicked; the payload is the record id.
    CardPressed(String),
    LoadMorePressed,
    RetryPressed,
}

/// Events the parent translates into feed operations and overlays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenLightbox(String),
    LoadMore,
    Retry,
}

/// Maps a gallery message to its parent-facing event.
pub fn update(message: Message) -> Event {
    match message {
        Message::CardPressed(id) => Event::OpenLightbox(id),
        Message::LoadMorePressed => Event::LoadMore,
        Message::RetryPressed => Event::Retry,
    }
}

/// Component-owned thumbnail store.
///
/// Keyed by image URL, so entries survive a feed refresh: a re-fetched record
/// pointing at the same hosted file reuses the decoded bytes.
pub struct State {
    thumbnails: LruCache<String, Thumbnail>,
    pending: HashSet<String>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("cached", &self.thumbnails.len())
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl State {
    /// Creates a store bounded to `cache_entries` decoded thumbnails.
    pub fn new(cache_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(cache_entries.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            thumbnails: LruCache::new(capacity),
            pending: HashSet::new(),
        }
    }

    /// Looks up a thumbnail without disturbing the eviction order.
    pub fn thumbnail(&self, url: &str) -> Option<&Thumbnail> {
        self.thumbnails.peek(url)
    }

    /// URLs from `records` that are neither cached nor already being fetched.
    pub fn missing_urls<'a>(&self, records: impl Iterator<Item = &'a ImageRecord>) -> Vec<String> {
        records
            .map(|record| record.url.as_str())
            .filter(|url| !self.pending.contains(*url) && self.thumbnails.peek(*url).is_none())
            .map(String::from)
            .collect()
    }

    /// Marks a URL as in flight so it is not requested twice.
    pub fn mark_pending(&mut self, url: String) {
        self.pending.insert(url);
    }

    /// Stores a finished download (successful or not) and clears the
    /// in-flight marker.
    pub fn store(&mut self, url: String, thumbnail: Thumbnail) {
        self.pending.remove(&url);
        self.thumbnails.put(url, thumbnail);
    }

    /// Bumps the recency of a thumbnail that is actively being viewed.
    pub fn touch(&mut self, url: &str) {
        self.thumbnails.get(url);
    }
}

/// Context required to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub feed: &'a Feed,
    pub state: &'a State,
    pub grid_columns: u16,
    pub spinner_rotation: f32,
}

/// Renders the gallery for the current feed status.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.feed.status() {
        Status::Idle | Status::Loading => view_loading(&ctx),
        Status::Error => view_error(&ctx),
        Status::Loaded | Status::LoadingMore => view_grid(&ctx),
    }
}

fn view_loading<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let spinner = Spinner::new(
        palette::PRIMARY_500,
        ctx.spinner_rotation,
        sizing::SPINNER_LG,
    )
    .into_element();

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(Text::new(ctx.i18n.tr("gallery-loading")).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn view_error<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    ErrorDisplay::new(ErrorSeverity::Error)
        .title(ctx.i18n.tr("gallery-error-title"))
        .message(ctx.i18n.tr("gallery-error-message"))
        .action(ctx.i18n.tr("gallery-error-retry"), Message::RetryPressed)
        .view()
}

fn view_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let records = ctx.feed.flatten();

    if records.is_empty() {
        return view_empty(ctx);
    }

    let columns = usize::from(ctx.grid_columns.max(1));
    let mut grid = Column::new().spacing(spacing::LG);
    for chunk in records.chunks(columns) {
        let mut row = Row::new().spacing(spacing::LG);
        for record in chunk {
            row = row.push(view_card(ctx, record));
        }
        grid = grid.push(row);
    }

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XL)
        .push(grid);

    if let Some(control) = view_load_more(ctx) {
        content = content.push(control);
    }

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

fn view_empty<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("gallery-empty-title")).size(typography::TITLE))
        .push(Text::new(ctx.i18n.tr("gallery-empty-message")).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn view_card<'a>(ctx: &ViewContext<'a>, record: &ImageRecord) -> Element<'a, Message> {
    let image_area: Element<'a, Message> = match ctx.state.thumbnail(&record.url) {
        Some(Thumbnail::Ready(handle)) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Thumbnail::Failed) => Container::new(
            Text::new(ctx.i18n.tr("lightbox-image-failed")).size(typography::CAPTION),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(container_styles::image_placeholder)
        .into(),
        None => Container::new(
            Spinner::new(
                palette::GRAY_400,
                ctx.spinner_rotation,
                sizing::SPINNER_SM,
            )
            .into_element(),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(container_styles::image_placeholder)
        .into(),
    };

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .padding(spacing::SM)
        .push(Text::new(record.title.clone()).size(typography::SUBTITLE))
        .push(Text::new(record.description.clone()).size(typography::BODY));

    if let Some(posted_on) = record.posted_on() {
        details = details.push(Text::new(posted_on).size(typography::CAPTION));
    }

    let card = Column::new().push(image_area).push(details);

    button(card)
        .on_press(Message::CardPressed(record.id.clone()))
        .padding(0.0)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(button_styles::card)
        .into()
}

/// The "load more" affordance. `None` when the last page was terminal, a live
/// button while more pages exist, and a disabled "loading" label while a
/// follow-up fetch is in flight.
fn view_load_more<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if ctx.feed.is_loading_more() {
        let label = Text::new(ctx.i18n.tr("gallery-loading-more")).size(typography::BODY);
        return Some(
            button(label)
                .padding([spacing::XS, spacing::XL])
                .style(button_styles::primary)
                .into(),
        );
    }

    if ctx.feed.can_load_more() {
        let label = Text::new(ctx.i18n.tr("gallery-load-more")).size(typography::BODY);
        return Some(
            button(label)
                .on_press(Message::LoadMorePressed)
                .padding([spacing::XS, spacing::XL])
                .style(button_styles::primary)
                .into(),
        );
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, url: &str) -> ImageRecord {
        ImageRecord {
            id: id.to_string(),
            title: format!("title-{id}"),
            description: String::new(),
            url: url.to_string(),
            ts: 0,
        }
    }

    #[test]
    fn messages_map_to_matching_events() {
        assert_eq!(
            update(Message::CardPressed("a".into())),
            Event::OpenLightbox("a".into())
        );
        assert_eq!(update(Message::LoadMorePressed), Event::LoadMore);
        assert_eq!(update(Message::RetryPressed), Event::Retry);
    }

    #[test]
    fn missing_urls_skips_cached_and_pending() {
        let mut state = State::new(8);
        let records = [
            record("a", "https://img.example/a.png"),
            record("b", "https://img.example/b.png"),
            record("c", "https://img.example/c.png"),
        ];

        state.store(
            "https://img.example/a.png".to_string(),
            Thumbnail::Failed,
        );
        state.mark_pending("https://img.example/b.png".to_string());

        let missing = state.missing_urls(records.iter());
        assert_eq!(missing, vec!["https://img.example/c.png".to_string()]);
    }

    #[test]
    fn store_clears_the_pending_marker() {
        let mut state = State::new(8);
        state.mark_pending("https://img.example/a.png".to_string());
        state.store("https://img.example/a.png".to_string(), Thumbnail::Failed);

        let missing = state.missing_urls([record("a", "https://img.example/a.png")].iter());
        assert!(missing.is_empty(), "stored thumbnails are not re-fetched");
    }

    #[test]
    fn store_is_bounded_by_capacity() {
        let mut state = State::new(2);
        state.store("u1".to_string(), Thumbnail::Failed);
        state.store("u2".to_string(), Thumbnail::Failed);
        state.store("u3".to_string(), Thumbnail::Failed);

        let cached = ["u1", "u2", "u3"]
            .iter()
            .filter(|url| state.thumbnail(url).is_some())
            .count();
        assert_eq!(cached, 2, "the oldest entry must have been evicted");
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut state = State::new(0);
        state.store("u1".to_string(), Thumbnail::Failed);
        assert!(state.thumbnail("u1").is_some());
    }
}
