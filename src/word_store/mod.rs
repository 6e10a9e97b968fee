//! In-memory word list storage.
//!
//! Supports a generic interface for listing, indexing and appending to an ordered sequence of
//! words. Lookups are always resolved against the length of the list at the time of the call,
//! never a length captured earlier.
//!
//! One implementation is provided, [`memory::InMemoryWordStore`]. It is not durable across
//! restarts.

use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod memory;

#[allow(clippy::module_name_repetitions)]
pub use memory::InMemoryWordStore;

/// `DynWordStore` is a type alias for a [`WordStore`] that can be used by multiple read/write
/// consumers that coordinate through an [`Arc`] and a [`RwLock`] wrapping the [`WordStore`].
#[allow(clippy::module_name_repetitions)]
pub type DynWordStore = Arc<RwLock<dyn WordStore + Send + Sync>>;

/// Wrap a [`WordStore`] so it can be shared between request handlers.
#[allow(clippy::module_name_repetitions)]
pub fn shared(store: impl WordStore + Send + Sync + 'static) -> DynWordStore {
    Arc::new(RwLock::new(store))
}

/// An async trait describing an ordered, growable list of words.
#[async_trait::async_trait]
pub trait WordStore {
    /// All words currently stored, in order.
    async fn list(&self) -> Vec<String>;

    /// Number of words currently stored.
    async fn len(&self) -> usize;

    /// Whether the store holds no words.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// The word at exactly `index` (if any).
    async fn get(&self, index: usize) -> Option<String>;

    /// Append a word, returning the index it was stored at.
    async fn append(&mut self, word: String) -> usize;
}

/// How a requested index is mapped onto the current word list.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IndexPolicy {
    /// Indices at or beyond the end of the list don't resolve.
    #[default]
    Strict,
    /// Indices are taken modulo the list length.
    Wraparound,
}

impl IndexPolicy {
    /// Resolve `index` against a list of `len` words, or `None` if there's no word to serve.
    #[must_use]
    pub fn resolve(self, index: usize, len: usize) -> Option<usize> {
        match self {
            IndexPolicy::Strict => (index < len).then_some(index),
            IndexPolicy::Wraparound => index.checked_rem(len),
        }
    }

    /// Resolve a decimal `index` of any magnitude against a list of `len` words, or `None` if
    /// `index` isn't made only of ASCII digits or there's no word to serve.
    ///
    /// Under [`IndexPolicy::Wraparound`] the index is reduced modulo `len` digit by digit, so it
    /// never has to fit in a `usize`.
    #[must_use]
    pub fn resolve_decimal(self, index: &str, len: usize) -> Option<usize> {
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match self {
            IndexPolicy::Strict => self.resolve(index.parse().ok()?, len),
            IndexPolicy::Wraparound => {
                if len == 0 {
                    return None;
                }
                let len = u128::try_from(len).ok()?;
                let rem = index.bytes().try_fold(0_u128, |acc, b| {
                    acc.checked_mul(10)?
                        .checked_add(u128::from(b - b'0'))
                        .map(|acc| acc % len)
                })?;
                usize::try_from(rem).ok()
            }
        }
    }
}
