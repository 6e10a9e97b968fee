//! Word Hoard
//!
//! A small HTTP service holding an ordered, in-memory list of words. Clients can list every
//! word, fetch one by index, and append new words. See the [HTTP API][crate::api] for the
//! endpoints.
//!
//! The list is seeded at startup from a [`Seed`][crate::seed::Seed] (by default 100 random
//! words) and is not persisted across restarts.
//!
#![warn(clippy::pedantic)]

pub mod api;
pub mod config;
pub mod error;
pub mod seed;
pub mod word_store;

pub use api::new as new_http;
pub use config::{Config, SharedConfig};
pub use seed::Seed;
pub use word_store::{DynWordStore, InMemoryWordStore, IndexPolicy, WordStore};
