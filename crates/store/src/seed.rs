//! Festival dataset loaded into a fresh [`Store`] at process start.
//!
//! Everything goes through the store's public create accessors, so seeded
//! rows get their identities the same way as any other insert.

use chrono::Datelike;
use mahotsav_core::error::CoreError;
use mahotsav_core::types::Timestamp;

use crate::models::carousel_slide::CreateCarouselSlide;
use crate::models::content_item::CreateContentItem;
use crate::models::media_item::CreateMediaItem;
use crate::models::region_note::CreateRegionNote;
use crate::models::scheduled_event::CreateScheduledEvent;
use crate::store::Store;

/// Venue shared by every programme entry.
const FESTIVAL_VENUE: &str = "NCC Ground, Bharat Mahotsav";

const GALLERY_IMAGE_PARAMS: &str = "auto=format&fit=crop&w=600&q=80";

/// Carousel slides: (title, description, image url, order).
const CAROUSEL_SLIDES: &[(&str, &str, &str, i32)] = &[
    (
        "Celebrating West India's Cultural Heritage",
        "Experience the vibrant traditions, art, and heritage of West India at Bharat Mahotsav",
        "https://images.unsplash.com/photo-1477587458883-47145ed94245?auto=format&fit=crop&w=1600&q=80",
        1,
    ),
    (
        "Vivid Colors of Rajasthan",
        "Explore the royal heritage and colorful traditions of Rajasthan",
        "https://images.unsplash.com/photo-1608021880929-848249540eaf?auto=format&fit=crop&w=1600&q=80",
        2,
    ),
    (
        "Vibrant Gujarat",
        "Discover the rich cultural tapestry and artistic traditions of Gujarat",
        "https://images.unsplash.com/photo-1585074395785-40818899d711?auto=format&fit=crop&w=1600&q=80",
        3,
    ),
];

/// Cultural items: (title, description, image url, category, region, featured).
const CONTENT_ITEMS: &[(&str, &str, &str, &str, &str, bool)] = &[
    (
        "Warli Art Tradition",
        "Ancient tribal art form from Maharashtra, featuring distinctive geometric patterns that tell stories of everyday life.",
        "https://images.unsplash.com/photo-1582555172866-f73bb12a2ab3?auto=format&fit=crop&w=800&q=80",
        "art",
        "Maharashtra",
        true,
    ),
    (
        "Gujarati Folk Music",
        "Traditional musical expressions of Gujarat, including Garba and Dandiya Raas, with distinctive instruments and rhythms.",
        "https://images.unsplash.com/photo-1599991271419-efa70c1a98f8?auto=format&fit=crop&w=800&q=80",
        "music",
        "Gujarat",
        true,
    ),
    (
        "Lavani Dance",
        "Powerful Maharashtrian dance form combining traditional song, rhythmic movements, and theatrical gestures.",
        "https://images.unsplash.com/photo-1583600883972-1976c2f6dca5?auto=format&fit=crop&w=800&q=80",
        "dance",
        "Maharashtra",
        true,
    ),
    (
        "Ghoomar Dance",
        "Traditional folk dance of Rajasthan performed by women during special occasions.",
        "https://images.unsplash.com/photo-1601122997668-56b19c59f185?auto=format&fit=crop&w=800&q=80",
        "dance",
        "Rajasthan",
        false,
    ),
    (
        "Bandhani Textile Art",
        "Traditional tie-dye textile pattern from Gujarat and Rajasthan with intricate designs.",
        "https://images.unsplash.com/photo-1623184515089-86dd19cf15a6?auto=format&fit=crop&w=800&q=80",
        "art",
        "Gujarat",
        false,
    ),
    (
        "Diwali Festival",
        "The festival of lights celebrated with lamps, rangoli, and fireworks across West India.",
        "https://images.unsplash.com/photo-1564546364925-8bdb53be7be8?auto=format&fit=crop&w=800&q=80",
        "festivals",
        "All States",
        false,
    ),
    (
        "Dhavali Folk Music",
        "Traditional musical form from Maharashtra with devotional and cultural themes.",
        "https://images.unsplash.com/photo-1508700929628-666bc8bd84ea?auto=format&fit=crop&w=800&q=80",
        "music",
        "Maharashtra",
        false,
    ),
    (
        "Navratri Celebrations",
        "Nine-night festival worshipping Goddess Durga with vibrant dancing and music.",
        "https://images.unsplash.com/photo-1600697230088-4992c83b2804?auto=format&fit=crop&w=800&q=80",
        "festivals",
        "Gujarat",
        false,
    ),
    (
        "Miniature Painting",
        "Detailed paintings originating from Rajasthan depicting royal scenes and legends.",
        "https://images.unsplash.com/photo-1585302769412-95fc2b97b6ea?auto=format&fit=crop&w=800&q=80",
        "art",
        "Rajasthan",
        false,
    ),
];

/// Programme entries on 12 April: (title, description, start, time, category, image url).
const EVENTS: &[(&str, &str, &str, &str, &str, &str)] = &[
    (
        "West Indian Art Exhibition",
        "Explore traditional and contemporary art forms from Maharashtra, Gujarat, Rajasthan, Madhya Pradesh, and Uttar Pradesh.",
        "2025-04-12T10:00:00Z",
        "10:00 AM - 12:00 PM",
        "art",
        "https://images.unsplash.com/photo-1589181990928-c41e05e94e3d?auto=format&fit=crop&w=800&q=80",
    ),
    (
        "Classical Dance Performances",
        "Witness spectacular performances of Kathak, Lavani, and other classical dance forms from West India.",
        "2025-04-12T12:30:00Z",
        "12:30 PM - 2:30 PM",
        "dance",
        "https://images.unsplash.com/photo-1601122555063-8bacb7d7fe62?auto=format&fit=crop&w=800&q=80",
    ),
    (
        "Folk Music Celebration",
        "Experience the vibrant folk music traditions of West India with renowned performers from five states.",
        "2025-04-12T15:00:00Z",
        "3:00 PM - 5:00 PM",
        "music",
        "https://images.unsplash.com/photo-1623467190349-42a72bf9be78?auto=format&fit=crop&w=800&q=80",
    ),
    (
        "Traditional Games & Activities",
        "Participate in traditional games and interactive cultural activities from West Indian states.",
        "2025-04-12T17:00:00Z",
        "5:00 PM - 6:30 PM",
        "games",
        "https://images.unsplash.com/photo-1511017049469-e4c95cb14391?auto=format&fit=crop&w=800&q=80",
    ),
    (
        "Cultural Photo Booth",
        "Capture memories in traditional West Indian attire at our specially designed cultural photo booth.",
        "2025-04-12T17:00:00Z",
        "10:00 AM - 7:00 PM (All Day)",
        "photobooth",
        "https://images.unsplash.com/photo-1600697228786-f6bcdaba3887?auto=format&fit=crop&w=800&q=80",
    ),
    (
        "Chief Guest Address & Closing Ceremony",
        "Join us for the special address by our Chief Guest and the grand closing ceremony celebrations.",
        "2025-04-12T19:00:00Z",
        "7:00 PM - 9:00 PM",
        "guest",
        "https://images.unsplash.com/photo-1608021880929-848249540eaf?auto=format&fit=crop&w=800&q=80",
    ),
];

/// Gallery photos: (title, location, unsplash photo id, category).
const MEDIA_ITEMS: &[(&str, &str, &str, &str)] = &[
    ("Navratri Celebration", "Gujarat", "photo-1600697230088-4992c83b2804", "festivals"),
    ("Kathak Performance", "Rajasthan", "photo-1601122555063-8bacb7d7fe62", "performances"),
    ("Traditional Pottery", "Gujarat", "photo-1621494945782-07f82c6e801a", "artifacts"),
    ("Mehrangarh Fort", "Jodhpur, Rajasthan", "photo-1530518854187-e91d262d1f18", "heritage"),
    ("Diwali Celebration", "Maharashtra", "photo-1564546364925-8bdb53be7be8", "festivals"),
    ("Ghoomar Dance", "Rajasthan", "photo-1601122997668-56b19c59f185", "performances"),
    ("Bandhani Textiles", "Gujarat", "photo-1623184515089-86dd19cf15a6", "artifacts"),
    ("Ranakpur Jain Temple", "Rajasthan", "photo-1524492412937-b28074a5d7da", "heritage"),
    ("Holi Festival", "Maharashtra", "photo-1552675751-c07817178622", "festivals"),
    ("Bharatanatyam Dance", "Gujarat", "photo-1583506332248-56c1df9b6505", "performances"),
    ("Traditional Jewelry", "Rajasthan", "photo-1609144324015-1e9642a2d552", "artifacts"),
    ("Gateway of India", "Mumbai, Maharashtra", "photo-1566554273541-37a9ca77b91f", "heritage"),
];

/// Heritage notes: (title, description, category, image url).
const REGION_NOTES: &[(&str, &str, &str, &str)] = &[
    (
        "Gujarat",
        "Known for vibrant textiles, folk dances like Garba, and distinctive architecture",
        "states",
        "https://images.unsplash.com/photo-1585074395785-40818899d711?auto=format&fit=crop&w=800&q=80",
    ),
    (
        "Maharashtra",
        "Home to Warli art, Lavani dance, and diverse cultural traditions",
        "states",
        "https://images.unsplash.com/photo-1566554273541-37a9ca77b91f?auto=format&fit=crop&w=800&q=80",
    ),
    (
        "Rajasthan",
        "Famous for its royal heritage, folk music, and colorful festivals",
        "states",
        "https://images.unsplash.com/photo-1477587458883-47145ed94245?auto=format&fit=crop&w=800&q=80",
    ),
    (
        "Madhya Pradesh",
        "Rich in tribal heritage, classical art forms, and historic temples and monuments",
        "states",
        "https://images.unsplash.com/photo-1627894486637-b2319cd8b923?auto=format&fit=crop&w=800&q=80",
    ),
    (
        "Uttar Pradesh",
        "Cultural heartland with significant historical sites, classical dance forms, and handicraft traditions",
        "states",
        "https://images.unsplash.com/photo-1560690825-5f53025c2caf?auto=format&fit=crop&w=800&q=80",
    ),
    (
        "Culinary Traditions",
        "From Gujarat's sweet-savory balance to Rajasthan's desert-inspired dishes, West Indian cuisine reflects the region's diverse geography and cultural influences.",
        "cuisine",
        "https://images.unsplash.com/photo-1602511216792-d785e78567d3?auto=format&fit=crop&w=600&q=80",
    ),
    (
        "Traditional Attire",
        "The colorful ghagras of Rajasthan, the distinctive Navvari sarees of Maharashtra, and Gujarat's mirror-work embroidery showcase regional identity through clothing.",
        "attire",
        "https://images.unsplash.com/photo-1600697228786-f6bcdaba3887?auto=format&fit=crop&w=600&q=80",
    ),
    (
        "Festivals & Celebrations",
        "Experience the vibrancy of Navratri in Gujarat, Maharashtra's Ganesh Chaturthi, and the colorful celebrations of Holi and Diwali throughout the region.",
        "festivals",
        "https://images.unsplash.com/photo-1590002893550-8b251315b1c1?auto=format&fit=crop&w=600&q=80",
    ),
];

/// Populate `store` with the festival dataset.
///
/// Fails only if an event start time in the dataset is not valid RFC 3339.
pub fn seed_store(store: &mut Store) -> Result<(), CoreError> {
    for &(title, description, image_url, order) in CAROUSEL_SLIDES {
        store.create_carousel_slide(CreateCarouselSlide {
            title: title.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
            order,
        });
    }
    tracing::debug!(count = CAROUSEL_SLIDES.len(), "Seeded carousel slides");

    for &(title, description, image_url, category, region, featured) in CONTENT_ITEMS {
        store.create_content_item(CreateContentItem {
            title: title.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
            category: category.to_string(),
            region: region.to_string(),
            featured,
        });
    }
    tracing::debug!(count = CONTENT_ITEMS.len(), "Seeded cultural items");

    for &(title, description, start, time, category, image_url) in EVENTS {
        let date: Timestamp = start.parse().map_err(|e| {
            CoreError::Internal(format!("Invalid seed date '{start}' for '{title}': {e}"))
        })?;
        store.create_event(CreateScheduledEvent {
            title: title.to_string(),
            description: description.to_string(),
            date,
            month: date.format("%B").to_string(),
            day: date.day() as i32,
            time: time.to_string(),
            location: FESTIVAL_VENUE.to_string(),
            category: category.to_string(),
            image_url: Some(image_url.to_string()),
        });
    }
    tracing::debug!(count = EVENTS.len(), "Seeded events");

    for &(title, location, photo_id, category) in MEDIA_ITEMS {
        store.create_media_item(CreateMediaItem {
            title: title.to_string(),
            location: location.to_string(),
            image_url: format!("https://images.unsplash.com/{photo_id}?{GALLERY_IMAGE_PARAMS}"),
            category: category.to_string(),
        });
    }
    tracing::debug!(count = MEDIA_ITEMS.len(), "Seeded gallery items");

    for &(title, description, category, image_url) in REGION_NOTES {
        store.create_region_note(CreateRegionNote {
            title: title.to_string(),
            description: description.to_string(),
            image_url: Some(image_url.to_string()),
            category: category.to_string(),
        });
    }
    tracing::debug!(count = REGION_NOTES.len(), "Seeded heritage notes");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Store {
        let mut store = Store::new();
        seed_store(&mut store).unwrap();
        store
    }

    #[test]
    fn seeds_every_collection_except_subscribers() {
        let counts = seeded().counts();
        assert_eq!(counts.carousel_slides, 3);
        assert_eq!(counts.content_items, 9);
        assert_eq!(counts.events, 6);
        assert_eq!(counts.media_items, 12);
        assert_eq!(counts.region_notes, 8);
        assert_eq!(counts.subscribers, 0);
    }

    #[test]
    fn seeded_ids_start_at_one() {
        let store = seeded();
        let ids: Vec<_> = store.get_media_items().iter().map(|m| m.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn event_month_and_day_come_from_start_time() {
        let store = seeded();
        for event in store.get_events() {
            assert_eq!(event.month, "April");
            assert_eq!(event.day, 12);
            assert_eq!(event.location, FESTIVAL_VENUE);
        }
        assert_eq!(store.get_events_by_month("april").len(), 6);
    }

    #[test]
    fn featured_items() {
        let featured: Vec<String> = seeded()
            .get_content_items()
            .into_iter()
            .filter(|c| c.featured)
            .map(|c| c.title)
            .collect();
        assert_eq!(
            featured,
            vec!["Warli Art Tradition", "Gujarati Folk Music", "Lavani Dance"]
        );
    }

    #[test]
    fn gallery_urls_are_complete() {
        let store = seeded();
        let fort = store.get_media_item(4).unwrap();
        assert_eq!(fort.title, "Mehrangarh Fort");
        assert_eq!(
            fort.image_url,
            "https://images.unsplash.com/photo-1530518854187-e91d262d1f18?auto=format&fit=crop&w=600&q=80"
        );
    }
}
