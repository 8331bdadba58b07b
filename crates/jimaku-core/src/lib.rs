pub mod config;
pub mod download;
pub mod error;
pub mod language;
pub mod models;
pub mod notify;
pub mod rating;
pub mod search;
