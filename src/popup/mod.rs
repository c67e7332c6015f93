pub mod notifier;
pub mod popup_model;
pub mod render;
