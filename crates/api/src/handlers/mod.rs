pub mod carousel;
pub mod cultural_items;
pub mod events;
pub mod gallery;
pub mod heritage;
pub mod newsletter;
pub mod search;
