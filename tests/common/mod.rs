#![allow(dead_code)]

use metatags::Paginator;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Paginator with canned answers that records how often it was asked.
#[derive(Default)]
pub struct StubPaginator {
    pub next: Option<String>,
    pub previous: Option<String>,
    pub current: usize,
    pub urls: HashMap<usize, String>,
    pub next_calls: Cell<usize>,
    pub previous_calls: Cell<usize>,
    pub current_calls: Cell<usize>,
    pub url_calls: RefCell<Vec<usize>>,
}

impl StubPaginator {
    pub fn new(current: usize) -> Self {
        Self {
            current,
            ..Self::default()
        }
    }

    pub fn next(mut self, url: &str) -> Self {
        self.next = Some(url.to_string());
        self
    }

    pub fn previous(mut self, url: &str) -> Self {
        self.previous = Some(url.to_string());
        self
    }

    pub fn url_for(mut self, page: usize, url: &str) -> Self {
        self.urls.insert(page, url.to_string());
        self
    }
}

impl Paginator for StubPaginator {
    fn next_page_url(&self) -> Option<String> {
        self.next_calls.set(self.next_calls.get() + 1);
        self.next.clone()
    }

    fn previous_page_url(&self) -> Option<String> {
        self.previous_calls.set(self.previous_calls.get() + 1);
        self.previous.clone()
    }

    fn current_page(&self) -> usize {
        self.current_calls.set(self.current_calls.get() + 1);
        self.current
    }

    fn url(&self, page: usize) -> String {
        self.url_calls.borrow_mut().push(page);
        self.urls
            .get(&page)
            .cloned()
            .unwrap_or_else(|| panic!("unexpected url({page})"))
    }
}
