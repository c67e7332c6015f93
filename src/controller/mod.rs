pub mod controller;
pub mod payload;
