/// Strip all HTML tags, returning only text content.
///
/// A `<` only opens a tag when followed by a letter, `/`, `!` or `?`;
/// anything else (`a < b`, `<3`) is kept as text. Entities are kept as-is.
pub fn strip_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut chars = html.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '<' if !in_tag && chars.peek().is_some_and(|&c| opens_tag(c)) => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => result.push(ch),
            _ => {}
        }
    }
    result
}

fn opens_tag(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?')
}

/// Render a void element such as `<link rel="next" href="...">`.
/// Attribute values are embedded verbatim.
pub(crate) fn void_element(tag: &str, attrs: &[(&str, &str)]) -> String {
    let mut out = format!("<{}", tag);
    for (name, value) in attrs {
        out.push_str(&format!(" {}=\"{}\"", name, value));
    }
    out.push('>');
    out
}

/// Render a paired element with text content, e.g. `<title>...</title>`.
pub(crate) fn element(tag: &str, content: &str) -> String {
    format!("<{tag}>{content}</{tag}>")
}
