//! Pager module
//!
//! Drives a [`Loader`] page by page until it runs out of pages.
//!
//! # Overview
//!
//! The pager module provides:
//! - `Pager` - Cursor state plus `next_page` / `all_pages` retrieval
//! - `PagerOption` / `PagerBuilder` - Validated construction
//! - `PartialLoad` - Items fetched before `all_pages` hit an error
//! - `PageStream` / `ItemStream` - Stream adapters over a pager

mod options;
mod stream;

pub use options::{PagerBuilder, PagerOption};
pub use stream::{ItemStream, PageStream};

use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::loader::{Loader, Page};
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Upper bound for the buffer `all_pages` reserves up front
const MAX_CAPACITY_HINT: usize = 1024;

/// Cursor-based pager over a [`Loader`].
///
/// The pager starts at an empty key (or the configured one) and, after every
/// successful load, moves to the key the loader returned. An empty key is
/// both the default starting point and the end marker; the two are told apart
/// by whether a page has been loaded yet.
pub struct Pager<T> {
    /// Items requested per load
    page_size: usize,
    /// Key passed to the next load
    next_page_key: String,
    /// Page source
    loader: Arc<dyn Loader<T>>,
    /// Set once the first load succeeds
    first_page_loaded: bool,
}

impl<T> Pager<T> {
    /// Create a pager from options, applied in order.
    ///
    /// The first invalid option aborts construction. A loader is required.
    ///
    /// ```rust,ignore
    /// let pager = Pager::new([
    ///     PagerOption::page_size(50),
    ///     PagerOption::loader(my_loader),
    /// ])?;
    /// ```
    pub fn new(options: impl IntoIterator<Item = PagerOption<T>>) -> Result<Self> {
        options::build(options)
    }

    /// Start building a pager
    pub fn builder() -> PagerBuilder<T> {
        PagerBuilder::new()
    }

    /// Create a pager from a parsed config and a loader
    pub fn from_config(config: PagerConfig, loader: Arc<dyn Loader<T>>) -> Result<Self> {
        let mut options = config.into_options();
        options.push(PagerOption::shared_loader(loader));
        Self::new(options)
    }

    /// Items requested per load
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Key the next load will be called with
    pub fn next_page_key(&self) -> &str {
        &self.next_page_key
    }

    /// Whether at least one load has succeeded
    pub fn is_first_page_loaded(&self) -> bool {
        self.first_page_loaded
    }

    /// Whether pagination is complete.
    ///
    /// True only after a successful load returned an empty next key. A fresh
    /// pager with an empty key is not complete: nothing has been loaded yet.
    pub fn is_all_loaded(&self) -> bool {
        self.next_page_key.is_empty() && self.first_page_loaded
    }

    /// Load the next page.
    ///
    /// Returns `Ok(None)` without calling the loader once all pages are loaded.
    /// A successful load may return an empty page; that alone does not end
    /// pagination.
    ///
    /// On failure the pager is left untouched, so calling this again retries
    /// the same key.
    pub async fn next_page(&mut self, ctx: &CancellationToken) -> Result<Option<Vec<T>>> {
        if self.is_all_loaded() {
            debug!("All pages loaded, skipping load");
            return Ok(None);
        }

        debug!(
            "Loading page '{}' (page size {})",
            self.next_page_key, self.page_size
        );

        let page = match self
            .loader
            .load(ctx, &self.next_page_key, self.page_size)
            .await
        {
            Ok(page) => page,
            Err(e) => {
                warn!("Failed to load page '{}': {:#}", self.next_page_key, e);
                return Err(Error::load_failed(self.next_page_key.as_str(), e));
            }
        };

        let Page {
            items,
            next_page_key,
        } = page;

        debug!(
            "Page '{}': {} items, next page '{}'",
            self.next_page_key,
            items.len(),
            next_page_key
        );

        self.next_page_key = next_page_key;
        self.mark_first_page_loaded();
        Ok(Some(items))
    }

    /// Load all remaining pages and concatenate their items in order.
    ///
    /// Stops at the first failed load and returns what was collected so far
    /// inside [`PartialLoad`]. Nothing is retried.
    pub async fn all_pages(
        &mut self,
        ctx: &CancellationToken,
    ) -> std::result::Result<Vec<T>, PartialLoad<T>> {
        let mut items = Vec::with_capacity(self.page_size.min(MAX_CAPACITY_HINT));
        let mut page_count = 0usize;

        while !self.is_all_loaded() {
            match self.next_page(ctx).await {
                Ok(Some(page)) => {
                    page_count += 1;
                    items.extend(page);
                }
                Ok(None) => break,
                Err(error) => return Err(PartialLoad { items, error }),
            }
        }

        debug!("Loaded {} items from {} pages", items.len(), page_count);
        Ok(items)
    }

    fn mark_first_page_loaded(&mut self) {
        if !self.first_page_loaded {
            self.first_page_loaded = true;
        }
    }
}

impl<T> fmt::Debug for Pager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("page_size", &self.page_size)
            .field("next_page_key", &self.next_page_key)
            .field("first_page_loaded", &self.first_page_loaded)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Partial Results
// ============================================================================

/// Failure of [`Pager::all_pages`] together with the items loaded before it
pub struct PartialLoad<T> {
    /// Items from the pages loaded before the failure, in order
    pub items: Vec<T>,
    /// The load failure
    pub error: Error,
}

impl<T> PartialLoad<T> {
    /// Split into the loaded items and the error
    pub fn into_parts(self) -> (Vec<T>, Error) {
        (self.items, self.error)
    }
}

impl<T> fmt::Debug for PartialLoad<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialLoad")
            .field("items", &self.items.len())
            .field("error", &self.error)
            .finish()
    }
}

impl<T> fmt::Display for PartialLoad<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T> std::error::Error for PartialLoad<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<PartialLoad<T>> for Error {
    fn from(partial: PartialLoad<T>) -> Self {
        partial.error
    }
}
