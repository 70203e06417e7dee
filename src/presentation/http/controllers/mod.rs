// src/presentation/http/controllers/mod.rs
pub mod article_views;
pub mod top_articles;
