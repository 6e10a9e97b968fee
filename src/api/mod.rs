//! HTTP API serving the word list.
//!
//! Error responses are plain text bodies holding the status reason, e.g. `Not Found`.
//!
//! # API Endpoints
//!
//! ## `/` (GET)
//!
//!   Returns HTTP 200 (OK) and the text body `Hello World!` when the service is operational.
//!
//! ## `/api/word` (GET)
//!
//!   Returns HTTP 200 (OK) and a JSON array holding every word in the list, in order:
//!
//!   ```json
//!   ["anchor", "meadow", "quill"]
//!   ```
//!
//! ## `/api/word/{index}` (GET)
//!
//!   Returns HTTP 200 (OK) and the word at `index` as a JSON string, e.g. `"quill"`.
//!
//!   How `index` is resolved depends on [`Config::index_policy`][crate::config::Config::index_policy]:
//!
//!   * `strict` (default): an `index` at or beyond the end of the list returns HTTP 404
//!     (Not Found).
//!   * `wraparound`: `index` is taken modulo the current length of the list.
//!
//!   An `index` that isn't a non-negative integer returns HTTP 404 (Not Found).
//!
//! ## `/api/word` (POST)
//!
//!   Only routed when [`Config::allow_append`][crate::config::Config::allow_append] is set.
//!
//!   Appends the raw request body, decoded as UTF-8, to the end of the list. Returns HTTP 201
//!   (Created) and the new word's index as a decimal text body:
//!
//!   ```bash
//!   ❯ curl --data-binary banana http://localhost:5000/api/word
//!   100
//!   ```
//!
//!   An empty body, or one that isn't valid UTF-8, returns HTTP 400 (Bad Request) and leaves
//!   the list unchanged.

mod api_error;
mod model;
mod routes;
pub mod server;

pub use server::{new, router};
