//! Guestbook - a small HTTP backend for a personal-site guestbook
//!
//! Stores visitor entries in a hosted record store and serves them
//! through a JSON API:
//! - List, create, update, and delete entries on one table
//! - Permissive CORS so any page can embed the guestbook
//! - An in-memory backend for tests and local development

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
