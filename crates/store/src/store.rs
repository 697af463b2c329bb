//! The store facade: one table per entity kind plus cross-table rules.
//!
//! Constructed once at process start and shared behind a lock by the HTTP
//! layer. Tests build a fresh [`Store`] each.

use mahotsav_core::error::CoreError;
use mahotsav_core::filter::MatchCase;
use mahotsav_core::types::DbId;
use serde::Serialize;

use crate::models::carousel_slide::{CarouselSlide, CreateCarouselSlide};
use crate::models::content_item::{ContentItem, ContentItemField, CreateContentItem};
use crate::models::media_item::{CreateMediaItem, MediaItem, MediaItemField};
use crate::models::region_note::{CreateRegionNote, RegionNote, RegionNoteField};
use crate::models::scheduled_event::{CreateScheduledEvent, ScheduledEvent, ScheduledEventField};
use crate::models::subscriber::{NewSubscriber, Subscriber, SubscriberField};
use crate::table::EntityTable;

/// Row counts per collection, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCounts {
    pub content_items: usize,
    pub events: usize,
    pub media_items: usize,
    pub region_notes: usize,
    pub carousel_slides: usize,
    pub subscribers: usize,
}

/// All entity tables of the site.
#[derive(Debug, Clone, Default)]
pub struct Store {
    content_items: EntityTable<ContentItem>,
    events: EntityTable<ScheduledEvent>,
    media_items: EntityTable<MediaItem>,
    region_notes: EntityTable<RegionNote>,
    carousel_slides: EntityTable<CarouselSlide>,
    subscribers: EntityTable<Subscriber>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> CollectionCounts {
        CollectionCounts {
            content_items: self.content_items.len(),
            events: self.events.len(),
            media_items: self.media_items.len(),
            region_notes: self.region_notes.len(),
            carousel_slides: self.carousel_slides.len(),
            subscribers: self.subscribers.len(),
        }
    }

    // -----------------------------------------------------------------------
    // Cultural content items
    // -----------------------------------------------------------------------

    pub fn get_content_items(&self) -> Vec<ContentItem> {
        self.content_items.get_all()
    }

/// Borrow content items in insertion order, for read-only scans.
    pub fn iter_content_items(&self) -> impl Iterator<Item = &ContentItem> {
        self.content_items.iter()
    }

    /// Exact, case-sensitive category match.
    pub fn get_content_items_by_category(&self, category: &str) -> Vec<ContentItem> {
        self.content_items
            .get_by_field(ContentItemField::Category, category, MatchCase::Sensitive)
    }

    pub fn get_content_item(&self, id: DbId) -> Option<ContentItem> {
        self.content_items.get_by_id(id).cloned()
    }

    pub fn create_content_item(&mut self, input: CreateContentItem) -> ContentItem {
        self.content_items.insert(input)
    }

    // -----------------------------------------------------------------------
    // Scheduled events
    // -----------------------------------------------------------------------

    pub fn get_events(&self) -> Vec<ScheduledEvent> {
        self.events.get_all()
    }

    pub fn iter_events(&self) -> impl Iterator<Item = &ScheduledEvent> {
        self.events.iter()
    }

    /// Month match ignores case on both sides, unlike the category filters.
    pub fn get_events_by_month(&self, month: &str) -> Vec<ScheduledEvent> {
        self.events
            .get_by_field(ScheduledEventField::Month, month, MatchCase::Insensitive)
    }

    pub fn get_event(&self, id: DbId) -> Option<ScheduledEvent> {
        self.events.get_by_id(id).cloned()
    }

    pub fn create_event(&mut self, input: CreateScheduledEvent) -> ScheduledEvent {
        self.events.insert(input)
    }

    // -----------------------------------------------------------------------
    // Gallery media items
    // -----------------------------------------------------------------------

    pub fn get_media_items(&self) -> Vec<MediaItem> {
        self.media_items.get_all()
    }

    pub fn iter_media_items(&self) -> impl Iterator<Item = &MediaItem> {
        self.media_items.iter()
    }

    /// Exact, case-sensitive category match.
    pub fn get_media_items_by_category(&self, category: &str) -> Vec<MediaItem> {
        self.media_items
            .get_by_field(MediaItemField::Category, category, MatchCase::Sensitive)
    }

    pub fn get_media_item(&self, id: DbId) -> Option<MediaItem> {
        self.media_items.get_by_id(id).cloned()
    }

    pub fn create_media_item(&mut self, input: CreateMediaItem) -> MediaItem {
        self.media_items.insert(input)
    }

    // -----------------------------------------------------------------------
    // Heritage region notes
    // -----------------------------------------------------------------------

    pub fn get_region_notes(&self) -> Vec<RegionNote> {
        self.region_notes.get_all()
    }

    /// Exact, case-sensitive category match.
    pub fn get_region_notes_by_category(&self, category: &str) -> Vec<RegionNote> {
        self.region_notes
            .get_by_field(RegionNoteField::Category, category, MatchCase::Sensitive)
    }

    pub fn get_region_note(&self, id: DbId) -> Option<RegionNote> {
        self.region_notes.get_by_id(id).cloned()
    }

    pub fn create_region_note(&mut self, input: CreateRegionNote) -> RegionNote {
        self.region_notes.insert(input)
    }

    // -----------------------------------------------------------------------
    // Carousel slides
    // -----------------------------------------------------------------------

    /// Slides ascending by `order`. Equal orders keep insertion order.
    pub fn get_carousel_items(&self) -> Vec<CarouselSlide> {
        let mut slides = self.carousel_slides.get_all();
        slides.sort_by_key(|slide| slide.order);
        slides
    }

    pub fn get_carousel_item(&self, id: DbId) -> Option<CarouselSlide> {
        self.carousel_slides.get_by_id(id).cloned()
    }

    pub fn create_carousel_slide(&mut self, input: CreateCarouselSlide) -> CarouselSlide {
        self.carousel_slides.insert(input)
    }

    // -----------------------------------------------------------------------
    // Newsletter subscribers
    // -----------------------------------------------------------------------

    pub fn get_subscribers(&self) -> Vec<Subscriber> {
        self.subscribers.get_all()
    }

    /// Exact, case-sensitive email lookup.
    pub fn get_subscriber_by_email(&self, email: &str) -> Option<Subscriber> {
        self.subscribers
            .find_by_field(SubscriberField::Email, email, MatchCase::Sensitive)
            .cloned()
    }

    /// Add a subscriber, rejecting an email that is already present.
    ///
    /// The clock is read once, after the duplicate check, and only when the
    /// insert goes ahead.
    pub fn create_subscriber(&mut self, email: &str) -> Result<Subscriber, CoreError> {
        if self.get_subscriber_by_email(email).is_some() {
            return Err(CoreError::DuplicateEmail(email.to_string()));
        }

        Ok(self.subscribers.insert(NewSubscriber {
            email: email.to_string(),
            created_at: chrono::Utc::now(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn content(title: &str, category: &str, region: &str) -> CreateContentItem {
        CreateContentItem {
            title: title.to_string(),
            description: format!("About {title}"),
            image_url: "https://example.com/c.jpg".to_string(),
            category: category.to_string(),
            region: region.to_string(),
            featured: false,
        }
    }

    fn event(title: &str, month: &str) -> CreateScheduledEvent {
        CreateScheduledEvent {
            title: title.to_string(),
            description: "Programme entry".to_string(),
            date: Utc.with_ymd_and_hms(2025, 4, 12, 10, 0, 0).unwrap(),
            month: month.to_string(),
            day: 12,
            time: "10:00 AM - 12:00 PM".to_string(),
            location: "NCC Ground".to_string(),
            category: "art".to_string(),
            image_url: None,
        }
    }

    fn slide(title: &str, order: i32) -> CreateCarouselSlide {
        CreateCarouselSlide {
            title: title.to_string(),
            description: String::new(),
            image_url: "https://example.com/s.jpg".to_string(),
            order,
        }
    }

    #[test]
    fn tables_assign_ids_independently() {
        let mut store = Store::new();
        let item = store.create_content_item(content("Warli", "art", "Maharashtra"));
        let ev = store.create_event(event("Exhibition", "April"));
        let first = store.create_carousel_slide(slide("One", 1));
        let second = store.create_carousel_slide(slide("Two", 2));

        assert_eq!(item.id, 1);
        assert_eq!(ev.id, 1);
        assert_eq!((first.id, second.id), (1, 2));
    }

    #[test]
    fn iter_accessors_match_cloned_lists() {
        let mut store = Store::new();
        store.create_content_item(content("Warli", "art", "Maharashtra"));
        store.create_content_item(content("Garba", "dance", "Gujarat"));
        store.create_event(event("Exhibition", "April"));

        let borrowed: Vec<&ContentItem> = store.iter_content_items().collect();
        let cloned = store.get_content_items();
        assert_eq!(borrowed, cloned.iter().collect::<Vec<_>>());
        assert_eq!(store.iter_events().count(), 1);
        assert_eq!(store.iter_media_items().count(), 0);
    }

    #[test]
    fn category_filter_is_case_sensitive() {
        let mut store = Store::new();
        store.create_content_item(content("Warli", "art", "Maharashtra"));
        store.create_content_item(content("Garba", "dance", "Gujarat"));
        store.create_content_item(content("Miniature", "art", "Rajasthan"));

        let art = store.get_content_items_by_category("art");
        let titles: Vec<&str> = art.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Warli", "Miniature"]);

        assert!(store.get_content_items_by_category("Art").is_empty());
        assert!(store.get_content_items_by_category("ART").is_empty());
    }

    #[test]
    fn month_filter_is_case_insensitive() {
        let mut store = Store::new();
        store.create_event(event("Exhibition", "April"));
        store.create_event(event("Diwali", "November"));

        for month in ["April", "april", "APRIL"] {
            let found = store.get_events_by_month(month);
            assert_eq!(found.len(), 1, "month {month}");
            assert_eq!(found[0].title, "Exhibition");
        }
        assert!(store.get_events_by_month("May").is_empty());
    }

    #[test]
    fn absent_id_differs_from_empty_filter() {
        let mut store = Store::new();
        store.create_media_item(CreateMediaItem {
            title: "Holi".to_string(),
            location: "Maharashtra".to_string(),
            image_url: "https://example.com/m.jpg".to_string(),
            category: "festivals".to_string(),
        });

        assert!(store.get_media_item(2).is_none());
        assert!(store.get_media_items_by_category("heritage").is_empty());
        assert!(store.get_media_item(1).is_some());
    }

    #[test]
    fn carousel_sorted_by_order_with_stable_ties() {
        let mut store = Store::new();
        store.create_carousel_slide(slide("c", 3));
        store.create_carousel_slide(slide("a1", 1));
        store.create_carousel_slide(slide("b1", 2));
        store.create_carousel_slide(slide("a2", 1));
        store.create_carousel_slide(slide("b2", 2));

        let titles: Vec<String> = store
            .get_carousel_items()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["a1", "a2", "b1", "b2", "c"]);
    }

    #[test]
    fn duplicate_email_is_rejected_without_insert() {
        let mut store = Store::new();
        let first = store.create_subscriber("a@x.com").unwrap();
        assert_eq!(first.id, 1);

        let second = store.create_subscriber("a@x.com");
        assert_matches!(second, Err(CoreError::DuplicateEmail(email)) if email == "a@x.com");
        assert_eq!(store.get_subscribers().len(), 1);

        let third = store.create_subscriber("b@x.com").unwrap();
        assert_eq!(third.id, 2);
    }

    #[test]
    fn email_uniqueness_is_case_sensitive() {
        let mut store = Store::new();
        store.create_subscriber("a@x.com").unwrap();
        assert!(store.create_subscriber("A@x.com").is_ok());
        assert!(store.get_subscriber_by_email("A@X.COM").is_none());
    }

    #[test]
    fn subscriber_created_at_is_stamped_on_insert() {
        let mut store = Store::new();
        let before = Utc::now();
        let subscriber = store.create_subscriber("a@x.com").unwrap();
        let after = Utc::now();

        assert!(subscriber.created_at >= before && subscriber.created_at <= after);
        assert_eq!(store.get_subscriber_by_email("a@x.com"), Some(subscriber));
    }

    #[test]
    fn counts_track_inserts() {
        let mut store = Store::new();
        store.create_content_item(content("Warli", "art", "Maharashtra"));
        store.create_subscriber("a@x.com").unwrap();
        store.create_region_note(CreateRegionNote {
            title: "Gujarat".to_string(),
            description: "Textiles".to_string(),
            image_url: None,
            category: "states".to_string(),
        });

        let counts = store.counts();
        assert_eq!(counts.content_items, 1);
        assert_eq!(counts.subscribers, 1);
        assert_eq!(counts.region_notes, 1);
        assert_eq!(counts.events, 0);
    }
}
