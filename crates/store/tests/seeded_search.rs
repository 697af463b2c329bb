//! Search and filter behaviour over the festival dataset.

use mahotsav_core::search::{search, SearchHit, SearchKind, MAX_SEARCH_RESULTS};
use mahotsav_store::seed::seed_store;
use mahotsav_store::Store;

fn seeded() -> Store {
    let mut store = Store::new();
    seed_store(&mut store).unwrap();
    store
}

fn run(store: &Store, query: &str) -> Vec<SearchHit> {
    search(
        query,
        store.iter_content_items(),
        store.iter_events(),
        store.iter_media_items(),
    )
}

#[test]
fn region_query_finds_content_item_by_region() {
    let store = seeded();
    let hits = run(&store, "rajasthan");

    let ghoomar = hits
        .iter()
        .find(|h| h.kind == SearchKind::Cultural && h.title == "Ghoomar Dance")
        .expect("Ghoomar Dance should match on region");
    assert_eq!(ghoomar.category, "dance");
    assert_eq!(ghoomar.destination_url, "/#cultural-showcase?category=dance");
    assert!(hits.len() <= MAX_SEARCH_RESULTS);
}

#[test]
fn broad_query_is_capped_in_kind_order() {
    let store = seeded();
    let hits = run(&store, "a");

    assert_eq!(hits.len(), MAX_SEARCH_RESULTS);
    assert!(hits[..9].iter().all(|h| h.kind == SearchKind::Cultural));
    assert_eq!(hits[9].kind, SearchKind::Event);
    assert_eq!(hits[9].id, 1);
}

#[test]
fn event_hits_link_to_lowercased_month() {
    let store = seeded();
    let hits = run(&store, "photo booth");

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].kind, SearchKind::Event);
    assert_eq!(hits[0].destination_url, "/#events?month=april");
}

#[test]
fn gallery_hits_match_on_location() {
    let store = seeded();
    let hits = run(&store, "JODHPUR");

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].kind, SearchKind::Gallery);
    assert_eq!(hits[0].title, "Mehrangarh Fort");
    assert_eq!(hits[0].destination_url, "/#gallery?category=heritage");
}

#[test]
fn blank_query_matches_nothing() {
    let store = seeded();
    assert!(run(&store, "").is_empty());
    assert!(run(&store, "   ").is_empty());
}

#[test]
fn unloaded_collections_count_as_empty() {
    let store = seeded();
    let hits = search(
        "rajasthan",
        &store.get_content_items(),
        &[] as &[mahotsav_store::models::scheduled_event::ScheduledEvent],
        &[] as &[mahotsav_store::models::media_item::MediaItem],
    );
    assert!(hits.iter().all(|h| h.kind == SearchKind::Cultural));
    assert_eq!(hits.len(), 3);
}

#[test]
fn borrowed_and_cloned_collections_give_same_hits() {
    let store = seeded();
    for query in ["holi", "rajasthan", "a", "april"] {
        let cloned = search(
            query,
            &store.get_content_items(),
            &store.get_events(),
            &store.get_media_items(),
        );
        assert_eq!(run(&store, query), cloned, "query {query}");
    }
}

#[test]
fn month_and_category_case_policies_differ() {
    let store = seeded();
    assert_eq!(store.get_events_by_month("april").len(), 6);
    assert_eq!(store.get_events_by_month("APRIL").len(), 6);
    assert!(store.get_content_items_by_category("Art").is_empty());
    assert_eq!(store.get_content_items_by_category("art").len(), 3);
}
