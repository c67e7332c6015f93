pub mod events;
pub mod page_model;
