//! Loader types and traits
//!
//! Defines the page result returned by loaders and the loader abstraction the
//! pager drives.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// One page of items returned by a [`Loader`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items of this page, in order
    pub items: Vec<T>,
    /// Key of the page after this one. Empty when there are no further pages.
    pub next_page_key: String,
}

impl<T> Page<T> {
    /// Create a page followed by the page at `next_page_key`
    pub fn new(items: Vec<T>, next_page_key: impl Into<String>) -> Self {
        Self {
            items,
            next_page_key: next_page_key.into(),
        }
    }

    /// Create the final page
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_page_key: String::new(),
        }
    }

    /// Check if this page is the final one
    pub fn is_last(&self) -> bool {
        self.next_page_key.is_empty()
    }
}

/// Loads a single page of items by page key.
///
/// The key is opaque to the pager: an offset, a database cursor, a continuation
/// token, etc. An empty key means "start" (or "unspecified") on input, and "no
/// further pages" in the returned [`Page`].
///
/// Cancellation is the loader's business. The pager passes `ctx` through and
/// never checks it itself.
#[async_trait]
pub trait Loader<T>: Send + Sync {
    /// Load up to `page_size` items starting at `page_key`
    async fn load(
        &self,
        ctx: &CancellationToken,
        page_key: &str,
        page_size: usize,
    ) -> anyhow::Result<Page<T>>;
}
