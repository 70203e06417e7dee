// src/application/ports/mod.rs
pub mod pageviews;
pub mod time;

