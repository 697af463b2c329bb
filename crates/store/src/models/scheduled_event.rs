//! Festival programme entries.

use mahotsav_core::search::{SearchHit, SearchKind, Searchable};
use mahotsav_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::table::{Filterable, Record};

/// A stored programme entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub date: Timestamp,
    /// Month name as displayed, e.g. `April`.
    pub month: String,
    /// Day of month, 1-31.
    pub day: i32,
    /// Free-text time range, e.g. `10:00 AM - 12:00 PM`.
    pub time: String,
    pub location: String,
    /// One of `art`, `dance`, `music`, `games`, `photobooth`, `guest`.
    pub category: String,
    pub image_url: Option<String>,
}

/// DTO for creating a programme entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduledEvent {
    pub title: String,
    pub description: String,
    pub date: Timestamp,
    pub month: String,
    pub day: i32,
    pub time: String,
    pub location: String,
    pub category: String,
    pub image_url: Option<String>,
}

impl Record for ScheduledEvent {
    type Draft = CreateScheduledEvent;

    fn from_draft(id: DbId, draft: CreateScheduledEvent) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            date: draft.date,
            month: draft.month,
            day: draft.day,
            time: draft.time,
            location: draft.location,
            category: draft.category,
            image_url: draft.image_url,
        }
    }
}

/// Month filtering is the only field lookup on events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledEventField {
    Month,
}

impl Filterable for ScheduledEvent {
    type Field = ScheduledEventField;

    fn field(&self, field: ScheduledEventField) -> &str {
        match field {
            ScheduledEventField::Month => &self.month,
        }
    }
}

impl Searchable for ScheduledEvent {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.location.as_str(),
            self.category.as_str(),
        ]
    }

    fn to_hit(&self) -> SearchHit {
        SearchHit {
            id: self.id,
            title: self.title.clone(),
            kind: SearchKind::Event,
            category: self.category.clone(),
            destination_url: format!("/#events?month={}", self.month.to_lowercase()),
        }
    }
}
