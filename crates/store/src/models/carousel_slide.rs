//! Hero carousel slides.

use mahotsav_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::table::Record;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSlide {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Display position. Not required to be unique.
    pub order: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarouselSlide {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub order: i32,
}

impl Record for CarouselSlide {
    type Draft = CreateCarouselSlide;

    fn from_draft(id: DbId, draft: CreateCarouselSlide) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            order: draft.order,
        }
    }
}
