use std::fmt;

use crate::html::{element, void_element};

/// Link relation of a `<link>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rel {
    Canonical,
    Prev,
    Next,
}

impl Rel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rel::Canonical => "canonical",
            Rel::Prev => "prev",
            Rel::Next => "next",
        }
    }
}

/// A single renderable head tag. Values are stored already sanitized and
/// are written out verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Title(String),
    Meta { name: String, content: String },
    Link { rel: Rel, href: String },
}

impl Tag {
    pub fn link(rel: Rel, href: &str) -> Self {
        Tag::Link {
            rel,
            href: href.to_string(),
        }
    }

    pub fn meta(name: &str, content: &str) -> Self {
        Tag::Meta {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            Tag::Title(text) => element("title", text),
            Tag::Meta { name, content } => {
                void_element("meta", &[("name", name.as_str()), ("content", content.as_str())])
            }
            Tag::Link { rel, href } => {
                void_element("link", &[("rel", rel.as_str()), ("href", href.as_str())])
            }
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
