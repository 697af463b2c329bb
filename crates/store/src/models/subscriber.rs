//! Newsletter subscribers.

use mahotsav_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::table::{Filterable, Record};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: DbId,
    /// Unique across the table, compared exactly.
    pub email: String,
    pub created_at: Timestamp,
}

/// Request body for `POST /api/subscribe`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubscriber {
    #[validate(email)]
    pub email: String,
}

/// Insert payload built by the store once the email is known to be new.
#[derive(Debug, Clone)]
pub struct NewSubscriber {
    pub email: String,
    pub created_at: Timestamp,
}

impl Record for Subscriber {
    type Draft = NewSubscriber;

    fn from_draft(id: DbId, draft: NewSubscriber) -> Self {
        Self {
            id,
            email: draft.email,
            created_at: draft.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriberField {
    Email,
}

impl Filterable for Subscriber {
    type Field = SubscriberField;

    fn field(&self, field: SubscriberField) -> &str {
        match field {
            SubscriberField::Email => &self.email,
        }
    }
}
