use dirs::home_dir;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::html::strip_tags;
use crate::{MetaError, MetaResult};

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Sanitize a value before it is stored: strip markup, trim outer whitespace.
pub fn clean(s: &str) -> String {
    strip_tags(s).trim().to_string()
}

/// `clean`, then fold every whitespace run (newlines included) into one space.
pub fn clean_text(s: &str) -> String {
    WHITESPACE.replace_all(&clean(s), " ").into_owned()
}

/// Cut `s` to at most `max` characters, never splitting a char.
pub fn limit_chars(s: &str, max: Option<usize>) -> String {
    match max {
        Some(max) => match s.char_indices().nth(max) {
            Some((idx, _)) => s[..idx].trim_end().to_string(),
            None => s.to_string(),
        },
        None => s.to_string(),
    }
}

/// Drop every `name=...` pair from the query string of `url`.
pub fn remove_query_param(url: &str, name: &str) -> String {
    let (url, fragment) = match url.split_once('#') {
        Some((u, f)) => (u, Some(f)),
        None => (url, None),
    };
    let (path, query) = url.split_once('?').unwrap_or((url, ""));

    let prefix = format!("{}=", name);
    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty() && *pair != name && !pair.starts_with(&prefix))
        .collect();

    let mut out = path.to_string();
    if !kept.is_empty() {
        out.push('?');
        out.push_str(&kept.join("&"));
    }
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

pub fn expand_tilde(path: PathBuf) -> MetaResult<PathBuf> {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = home_dir() {
            return Ok(home.join(stripped));
        } else {
            return Err(MetaError::Config(
                "Could not determine home directory".to_string(),
            ));
        }
    }

    Ok(path)
}
