//! Stream adapters over a pager
//!
//! Both streams load lazily, one page at a time, and end after the last page
//! or right after yielding the first error.

use super::Pager;
use crate::error::{Error, Result};
use futures::stream::{self, Stream, TryStreamExt};
use std::pin::Pin;
use tokio_util::sync::CancellationToken;

/// Type alias for the page stream returned by `into_pages()`
pub type PageStream<T> = Pin<Box<dyn Stream<Item = Result<Vec<T>>> + Send>>;

/// Type alias for the item stream returned by `into_items()`
pub type ItemStream<T> = Pin<Box<dyn Stream<Item = Result<T>> + Send>>;

impl<T: Send + 'static> Pager<T> {
    /// Turn the pager into a stream of pages
    pub fn into_pages(self, ctx: CancellationToken) -> PageStream<T> {
        Box::pin(stream::try_unfold(
            (self, ctx),
            |(mut pager, ctx)| async move {
                let page = pager.next_page(&ctx).await?;
                Ok::<_, Error>(page.map(|items| (items, (pager, ctx))))
            },
        ))
    }

    /// Turn the pager into a stream of individual items
    pub fn into_items(self, ctx: CancellationToken) -> ItemStream<T> {
        Box::pin(
            self.into_pages(ctx)
                .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, Error>)))
                .try_flatten(),
        )
    }
}
