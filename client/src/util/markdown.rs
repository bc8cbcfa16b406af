//! Markdown to HTML for chat turns.
//!
//! Model output is untrusted. Raw HTML (block and inline) is dropped before
//! rendering and link/image destinations with script-capable schemes are
//! replaced with `#`, so the result is safe to inject with `inner_html`.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Rendered anchors open in a new tab without handing over `window.opener`.
const ANCHOR_OPEN: &str = "<a target=\"_blank\" rel=\"noopener noreferrer\" href=\"";

/// Render `markdown` to an HTML fragment.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Link { link_type, dest_url: safe_dest(dest_url), title, id }))
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Image { link_type, dest_url: safe_dest(dest_url), title, id }))
        }
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);

    // Text and code are entity-escaped, so this literal only occurs where the
    // renderer opened an anchor.
    out.replace("<a href=\"", ANCHOR_OPEN)
}

fn safe_dest(dest: CowStr<'_>) -> CowStr<'_> {
    if is_unsafe_url(&dest) { CowStr::Borrowed("#") } else { dest }
}

/// Browsers ignore whitespace and control characters inside a scheme, so
/// `java\tscript:` must be caught too.
fn is_unsafe_url(url: &str) -> bool {
    let scheme: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    UNSAFE_SCHEMES.iter().any(|s| scheme.starts_with(s))
}
