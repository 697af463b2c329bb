//! Cultural showcase items (art, music, dance, festivals).

use mahotsav_core::search::{SearchHit, SearchKind, Searchable};
use mahotsav_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::table::{Filterable, Record};

/// A stored cultural item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// One of `art`, `music`, `dance`, `festivals`.
    pub category: String,
    /// State or region of origin, e.g. `Rajasthan`.
    pub region: String,
    pub featured: bool,
}

/// DTO for creating a cultural item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentItem {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub region: String,
    #[serde(default)]
    pub featured: bool,
}

impl Record for ContentItem {
    type Draft = CreateContentItem;

    fn from_draft(id: DbId, draft: CreateContentItem) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            category: draft.category,
            region: draft.region,
            featured: draft.featured,
        }
    }
}

/// Filterable text fields of a cultural item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentItemField {
    Category,
}

impl Filterable for ContentItem {
    type Field = ContentItemField;

    fn field(&self, field: ContentItemField) -> &str {
        match field {
            ContentItemField::Category => &self.category,
        }
    }
}

impl Searchable for ContentItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.category.as_str(),
            self.region.as_str(),
        ]
    }

    fn to_hit(&self) -> SearchHit {
        SearchHit {
            id: self.id,
            title: self.title.clone(),
            kind: SearchKind::Cultural,
            category: self.category.clone(),
            destination_url: format!("/#cultural-showcase?category={}", self.category),
        }
    }
}
