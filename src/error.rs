//! Error types.

/// Error enumerates the possible Word Hoard error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when clients `GET` the [`/api/word/{index}` API endpoint][crate::api]
    /// with an index that can't be resolved against the current word list under the configured
    /// [`IndexPolicy`][crate::word_store::IndexPolicy].
    #[error("no word at index {0}")]
    WordNotFound(String),

    /// Returned when clients `POST` the [`/api/word` API endpoint][crate::api]
    /// without a request body.
    #[error("request body is empty")]
    EmptyBody,

    /// Returned when clients `POST` the [`/api/word` API endpoint][crate::api]
    /// with a request body that isn't valid UTF-8.
    #[error("request body is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Returned when the configured [`Seed`][crate::seed::Seed] would produce an empty word
    /// list, or a fixed seed contains an empty word.
    #[error("seed must produce at least one non-empty word")]
    EmptySeed,

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when [trying to load a `Config`][crate::config::Config::try_from_file] fails
    /// due to invalid JSON content.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),
}
