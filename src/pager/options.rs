//! Pager construction options
//!
//! Options are applied in order to a draft. The first failing option aborts
//! construction, and only a draft that ends up with a loader becomes a pager.

use super::{Pager, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use crate::loader::Loader;
use std::fmt;
use std::sync::Arc;

/// A single construction option for [`Pager`]
pub enum PagerOption<T> {
    /// Number of items requested per page, must be positive.
    ///
    /// Sizes beyond `usize::MAX` (on 32-bit targets) saturate to `usize::MAX`.
    PageSize(i64),
    /// Key of the first page to load, must not be empty
    NextPageKey(String),
    /// Loader used to fetch pages, must be present
    Loader(Option<Arc<dyn Loader<T>>>),
}

impl<T> PagerOption<T> {
    /// Create a page size option
    pub fn page_size(page_size: i64) -> Self {
        Self::PageSize(page_size)
    }

    /// Create a starting page key option
    pub fn next_page_key(key: impl Into<String>) -> Self {
        Self::NextPageKey(key.into())
    }

    /// Create a loader option from an owned loader
    pub fn loader(loader: impl Loader<T> + 'static) -> Self {
        Self::Loader(Some(Arc::new(loader)))
    }

    /// Create a loader option from a loader shared with the caller
    pub fn shared_loader(loader: Arc<dyn Loader<T>>) -> Self {
        Self::Loader(Some(loader))
    }

    fn apply(self, draft: &mut Draft<T>) -> Result<()> {
        match self {
            Self::PageSize(page_size) => {
                if page_size <= 0 {
                    return Err(Error::invalid_config("page size must be positive"));
                }
                draft.page_size = usize::try_from(page_size).unwrap_or(usize::MAX);
            }
            Self::NextPageKey(key) => {
                if key.is_empty() {
                    return Err(Error::invalid_config("next page key must not be empty"));
                }
                draft.next_page_key = key;
            }
            Self::Loader(loader) => {
                let Some(loader) = loader else {
                    return Err(Error::invalid_config("next page loader is required"));
                };
                draft.loader = Some(loader);
            }
        }
        Ok(())
    }
}

impl<T> fmt::Debug for PagerOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageSize(size) => f.debug_tuple("PageSize").field(size).finish(),
            Self::NextPageKey(key) => f.debug_tuple("NextPageKey").field(key).finish(),
            Self::Loader(loader) => f
                .debug_tuple("Loader")
                .field(&loader.as_ref().map(|_| ".."))
                .finish(),
        }
    }
}

struct Draft<T> {
    page_size: usize,
    next_page_key: String,
    loader: Option<Arc<dyn Loader<T>>>,
}

/// Build a pager from options, applied in order
pub(super) fn build<T>(options: impl IntoIterator<Item = PagerOption<T>>) -> Result<Pager<T>> {
    let mut draft = Draft {
        page_size: DEFAULT_PAGE_SIZE,
        next_page_key: String::new(),
        loader: None,
    };

    for option in options {
        option.apply(&mut draft)?;
    }

    let Some(loader) = draft.loader else {
        return Err(Error::invalid_config("next page loader is required"));
    };

    Ok(Pager {
        page_size: draft.page_size,
        next_page_key: draft.next_page_key,
        loader,
        first_page_loaded: false,
    })
}

/// Builder collecting [`PagerOption`]s in call order
///
/// Validation is deferred to [`PagerBuilder::build`], which reports the first
/// invalid option in the order the methods were called.
pub struct PagerBuilder<T> {
    options: Vec<PagerOption<T>>,
}

impl<T> PagerBuilder<T> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Set the page size
    #[must_use]
    pub fn page_size(mut self, page_size: i64) -> Self {
        self.options.push(PagerOption::page_size(page_size));
        self
    }

    /// Set the key of the first page to load
    #[must_use]
    pub fn next_page_key(mut self, key: impl Into<String>) -> Self {
        self.options.push(PagerOption::next_page_key(key));
        self
    }

    /// Set the loader
    #[must_use]
    pub fn loader(mut self, loader: impl Loader<T> + 'static) -> Self {
        self.options.push(PagerOption::loader(loader));
        self
    }

    /// Set a loader shared with the caller
    #[must_use]
    pub fn shared_loader(mut self, loader: Arc<dyn Loader<T>>) -> Self {
        self.options.push(PagerOption::shared_loader(loader));
        self
    }

    /// Append a raw option
    #[must_use]
    pub fn option(mut self, option: PagerOption<T>) -> Self {
        self.options.push(option);
        self
    }

    /// Validate the collected options and build the pager
    pub fn build(self) -> Result<Pager<T>> {
        build(self.options)
    }
}

impl<T> Default for PagerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PagerBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagerBuilder")
            .field("options", &self.options)
            .finish()
    }
}
