//! Entity structs and create DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct as stored in its table
//! - A `Deserialize` create DTO (the entity minus its identity)
//! - A field enum naming the text fields that can be filtered on

pub mod carousel_slide;
pub mod content_item;
pub mod media_item;
pub mod region_note;
pub mod scheduled_event;
pub mod subscriber;
