// src/domain/mod.rs
pub mod calendar;
pub mod errors;
pub mod pageviews;
