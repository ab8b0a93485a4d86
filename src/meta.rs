use std::fmt;

use tracing::debug;

use crate::config::Config;
use crate::models::{Rel, Tag};
use crate::paginator::Paginator;
use crate::utils::{clean, clean_text, limit_chars};

/// Collects head metadata for one page and renders it as HTML tags.
///
/// Every setter sanitizes its input once (markup stripped, outer whitespace
/// trimmed) and returns the same builder so calls can be chained. Getters
/// hand back a [`Tag`] or `None` when the value is unset.
#[derive(Debug, Clone, Default)]
pub struct MetaTags {
    config: Config,
    title: Option<String>,
    description: Option<String>,
    keywords: Vec<String>,
    robots: Option<String>,
    canonical: Option<String>,
    prev_href: Option<String>,
    next_href: Option<String>,
}

impl MetaTags {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // -- Links ---------------------------------------------------------------

    pub fn set_canonical<'a>(&mut self, url: impl Into<Option<&'a str>>) -> &mut Self {
        self.canonical = url.into().map(clean);
        self
    }

    pub fn get_canonical(&self) -> Option<Tag> {
        self.canonical
            .as_deref()
            .map(|href| Tag::link(Rel::Canonical, href))
    }

    pub fn set_prev_href<'a>(&mut self, url: impl Into<Option<&'a str>>) -> &mut Self {
        self.prev_href = url.into().map(clean);
        self
    }

    pub fn get_prev_href(&self) -> Option<Tag> {
        self.prev_href.as_deref().map(|href| Tag::link(Rel::Prev, href))
    }

    pub fn set_next_href<'a>(&mut self, url: impl Into<Option<&'a str>>) -> &mut Self {
        self.next_href = url.into().map(clean);
        self
    }

    pub fn get_next_href(&self) -> Option<Tag> {
        self.next_href.as_deref().map(|href| Tag::link(Rel::Next, href))
    }

    /// Fill next/prev/canonical from a paginator.
    ///
    /// Missing next or previous pages leave the matching field untouched.
    /// Canonical is always `url(current_page)`; on the first page this is
    /// `url(1)`, which the paginator must return without a page parameter.
    pub fn set_pagination_links<P: Paginator + ?Sized>(&mut self, paginator: &P) -> &mut Self {
        if let Some(next) = paginator.next_page_url() {
            self.set_next_href(next.as_str());
        }

        if let Some(prev) = paginator.previous_page_url() {
            self.set_prev_href(prev.as_str());
        }

        let current = paginator.current_page();
        debug_assert!(current >= 1, "paginator reported page {current}");

        let canonical = paginator.url(current);
        debug!(page = current, canonical = %canonical, "pagination links set");
        self.set_canonical(canonical.as_str())
    }

    // -- Title / meta --------------------------------------------------------

    pub fn set_title<'a>(&mut self, title: impl Into<Option<&'a str>>) -> &mut Self {
        let max = self.config.title.max_length;
        self.title = title.into().map(|t| limit_chars(&clean_text(t), max));
        self
    }

    /// The title joined with the configured default, e.g. `Post | My Site`.
    pub fn get_title(&self) -> Option<Tag> {
        let default = self.config.title.default.as_deref();
        let text = match (self.title.as_deref(), default) {
            (Some(title), Some(default)) => {
                format!("{}{}{}", title, self.config.title.separator, default)
            }
            (Some(title), None) => title.to_string(),
            (None, Some(default)) => default.to_string(),
            (None, None) => return None,
        };
        Some(Tag::Title(text))
    }

    pub fn set_description<'a>(&mut self, description: impl Into<Option<&'a str>>) -> &mut Self {
        let max = self.config.description.max_length;
        self.description = description
            .into()
            .map(|d| limit_chars(&clean_text(d), max));
        self
    }

    pub fn get_description(&self) -> Option<Tag> {
        self.description
            .as_deref()
            .map(|content| Tag::meta("description", content))
    }

    pub fn set_keywords<'a, I>(&mut self, keywords: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.keywords.clear();
        for keyword in keywords {
            self.add_keyword(keyword);
        }
        self
    }

    pub fn add_keyword(&mut self, keyword: &str) -> &mut Self {
        let keyword = clean_text(keyword);
        if !keyword.is_empty() {
            self.keywords.push(keyword);
        }
        self
    }

    pub fn get_keywords(&self) -> Option<Tag> {
        if self.keywords.is_empty() {
            return None;
        }
        Some(Tag::meta("keywords", &self.keywords.join(", ")))
    }

    pub fn set_robots<'a>(&mut self, robots: impl Into<Option<&'a str>>) -> &mut Self {
        self.robots = robots.into().map(clean);
        self
    }

    /// Falls back to the configured robots value when none was set.
    pub fn get_robots(&self) -> Option<Tag> {
        self.robots
            .as_deref()
            .or(self.config.robots.as_deref())
            .map(|content| Tag::meta("robots", content))
    }

    /// Clear every value; the config is kept.
    pub fn reset(&mut self) -> &mut Self {
        let config = std::mem::take(&mut self.config);
        *self = Self::new(config);
        self
    }

    /// All present tags in head order.
    pub fn tags(&self) -> Vec<Tag> {
        [
            self.get_title(),
            self.get_description(),
            self.get_keywords(),
            self.get_robots(),
            self.get_canonical(),
            self.get_prev_href(),
            self.get_next_href(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn to_html(&self) -> String {
        self.tags()
            .iter()
            .map(Tag::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for MetaTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
