//! Read-only view of a paginated result set.
//!
//! `MetaTags::set_pagination_links` only ever asks a paginator for the four
//! values below. The page-1 canonical URL is whatever `url(1)` returns, so an
//! implementation must leave the page parameter off the first page.

use crate::error::{MetaError, MetaResult};
use crate::utils::remove_query_param;

pub const DEFAULT_PAGE_NAME: &str = "page";

pub trait Paginator {
    fn next_page_url(&self) -> Option<String>;
    fn previous_page_url(&self) -> Option<String>;
    /// 1-based.
    fn current_page(&self) -> usize;
    fn url(&self, page: usize) -> String;
}

/// Paginator over a plain base URL, numbering pages with a query parameter.
#[derive(Debug, Clone)]
pub struct UrlPaginator {
    base_url: String,
    page_name: String,
    current_page: usize,
    last_page: Option<usize>,
}

impl UrlPaginator {
    pub fn new(base_url: &str, current_page: usize) -> Self {
        Self {
            base_url: base_url.to_string(),
            page_name: DEFAULT_PAGE_NAME.to_string(),
            current_page: current_page.max(1),
            last_page: None,
        }
    }

    pub fn with_page_name(mut self, page_name: &str) -> Self {
        self.page_name = page_name.to_string();
        self
    }

    pub fn with_last_page(mut self, last_page: usize) -> MetaResult<Self> {
        if last_page < self.current_page {
            return Err(MetaError::Paginator(format!(
                "last page {} is before current page {}",
                last_page, self.current_page
            )));
        }
        self.last_page = Some(last_page);
        Ok(self)
    }

    pub fn last_page(&self) -> Option<usize> {
        self.last_page
    }

    pub fn has_more_pages(&self) -> bool {
        self.last_page.is_none_or(|last| self.current_page < last)
    }
}

impl Paginator for UrlPaginator {
    fn next_page_url(&self) -> Option<String> {
        if self.has_more_pages() {
            self.current_page.checked_add(1).map(|n| self.url(n))
        } else {
            None
        }
    }

    fn previous_page_url(&self) -> Option<String> {
        if self.current_page > 1 {
            Some(self.url(self.current_page - 1))
        } else {
            None
        }
    }

    fn current_page(&self) -> usize {
        self.current_page
    }

    /// Any `page_name` parameter already on the base URL is dropped first.
    fn url(&self, page: usize) -> String {
        let base_url = remove_query_param(&self.base_url, &self.page_name);
        if page <= 1 {
            return base_url;
        }

        let (base, fragment) = match base_url.split_once('#') {
            Some((b, f)) => (b, Some(f)),
            None => (base_url.as_str(), None),
        };
        let sep = if base.contains('?') { '&' } else { '?' };

        let mut url = format!("{}{}{}={}", base, sep, self.page_name, page);
        if let Some(fragment) = fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }
}
