pub mod app_state;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod lexicon;
pub mod persist;
pub mod pipeline;
pub mod repositories;
pub mod routes;
pub mod summarise;
pub mod summarizer;
pub mod translator;
