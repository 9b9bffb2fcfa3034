//! Loader module
//!
//! The single extension point of the crate: caller-supplied logic that fetches
//! one page of items by page key.
//!
//! # Overview
//!
//! The loader module provides:
//! - `Loader` - Async trait implemented by page sources
//! - `Page` - Items plus the key of the following page
//! - `FnLoader` - Adapter turning an async closure into a `Loader`

mod types;

pub use types::{Loader, Page};

use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// A [`Loader`] backed by an async closure.
///
/// The closure receives owned copies of the context and key, so the returned
/// future may outlive the call.
pub struct FnLoader<F> {
    f: F,
}

impl<F> FnLoader<F> {
    /// Wrap a closure
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> fmt::Debug for FnLoader<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnLoader").finish_non_exhaustive()
    }
}

#[async_trait]
impl<T, F, Fut> Loader<T> for FnLoader<F>
where
    F: Fn(CancellationToken, String, usize) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Page<T>>> + Send,
{
    async fn load(
        &self,
        ctx: &CancellationToken,
        page_key: &str,
        page_size: usize,
    ) -> anyhow::Result<Page<T>> {
        (self.f)(ctx.clone(), page_key.to_string(), page_size).await
    }
}

/// Create a [`Loader`] from an async closure
///
/// ```rust,ignore
/// let loader = loader_fn(|_ctx, key: String, size| async move {
///     let offset: usize = if key.is_empty() { 0 } else { key.parse()? };
///     let items: Vec<u32> = (offset..offset + size).map(|i| i as u32).take_while(|i| *i < 250).collect();
///     let next = if items.len() == size { (offset + size).to_string() } else { String::new() };
///     Ok(Page::new(items, next))
/// });
/// ```
pub fn loader_fn<T, F, Fut>(f: F) -> FnLoader<F>
where
    F: Fn(CancellationToken, String, usize) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Page<T>>> + Send,
{
    FnLoader::new(f)
}
