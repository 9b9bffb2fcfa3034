//! # cursor-pager
//!
//! A generic cursor-based pagination helper. You supply a [`Loader`] that
//! fetches one page of items by an opaque page key; the [`Pager`] drives it
//! until the loader stops returning a next key.
//!
//! ## Features
//!
//! - **Opaque keys**: offsets, database cursors, continuation tokens
//! - **Single page or everything**: `next_page` and `all_pages`
//! - **Partial results**: `all_pages` hands back what it loaded before a failure
//! - **Retry-safe state**: a failed load leaves the cursor where it was
//! - **Streams**: consume pages or items as a `futures::Stream`
//! - **Config files**: page size and starting key from YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cursor_pager::{loader_fn, Page, Pager, PagerOption, Result};
//! use tokio_util::sync::CancellationToken;
//!
//! async fn run() -> Result<()> {
//!     let loader = loader_fn(|_ctx, key: String, size| async move {
//!         let (items, next) = fetch_users_after(&key, size).await?;
//!         Ok(Page::new(items, next))
//!     });
//!
//!     let mut pager = Pager::new([PagerOption::page_size(50), PagerOption::loader(loader)])?;
//!     let users = pager.all_pages(&CancellationToken::new()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Termination
//!
//! ```text
//!   key = "" (or configured)      first_page_loaded = false
//!          │
//!          ▼
//!   Loader::load(key, page_size) ──error──▶ LoadFailed, state unchanged
//!          │ ok
//!          ▼
//!   key = returned key            first_page_loaded = true
//!          │
//!          ▼
//!   key empty? ──yes──▶ all loaded, further calls return None
//!          │ no
//!          └──────▶ next call
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Page loader abstraction
pub mod loader;

/// Pager and construction options
pub mod pager;

/// Serializable pager configuration
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PagerConfig;
pub use error::{Error, Result};
pub use loader::{loader_fn, FnLoader, Loader, Page};
pub use pager::{
    ItemStream, PageStream, Pager, PagerBuilder, PagerOption, PartialLoad, DEFAULT_PAGE_SIZE,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
