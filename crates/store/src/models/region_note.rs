//! Heritage notes about states, cuisine, attire and festivals.

use mahotsav_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::table::{Filterable, Record};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionNote {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    /// One of `states`, `cuisine`, `attire`, `festivals`.
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegionNote {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub category: String,
}

impl Record for RegionNote {
    type Draft = CreateRegionNote;

    fn from_draft(id: DbId, draft: CreateRegionNote) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            category: draft.category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionNoteField {
    Category,
}

impl Filterable for RegionNote {
    type Field = RegionNoteField;

    fn field(&self, field: RegionNoteField) -> &str {
        match field {
            RegionNoteField::Category => &self.category,
        }
    }
}
