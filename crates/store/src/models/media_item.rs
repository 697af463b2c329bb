//! Gallery photographs.

use mahotsav_core::search::{SearchHit, SearchKind, Searchable};
use mahotsav_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::table::{Filterable, Record};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: DbId,
    pub title: String,
    pub location: String,
    pub image_url: String,
    /// One of `festivals`, `performances`, `artifacts`, `heritage`.
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaItem {
    pub title: String,
    pub location: String,
    pub image_url: String,
    pub category: String,
}

impl Record for MediaItem {
    type Draft = CreateMediaItem;

    fn from_draft(id: DbId, draft: CreateMediaItem) -> Self {
        Self {
            id,
            title: draft.title,
            location: draft.location,
            image_url: draft.image_url,
            category: draft.category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaItemField {
    Category,
}

impl Filterable for MediaItem {
    type Field = MediaItemField;

    fn field(&self, field: MediaItemField) -> &str {
        match field {
            MediaItemField::Category => &self.category,
        }
    }
}

impl Searchable for MediaItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.location.as_str(),
            self.category.as_str(),
        ]
    }

    fn to_hit(&self) -> SearchHit {
        SearchHit {
            id: self.id,
            title: self.title.clone(),
            kind: SearchKind::Gallery,
            category: self.category.clone(),
            destination_url: format!("/#gallery?category={}", self.category),
        }
    }
}
