//! Hand-rolled markdown-to-HTML renderer.
//!
//! An ordered list of global text-rewrite stages over the whole input, not a
//! CommonMark parser. Covers the subset the article corpus actually uses:
//! fenced/inline code, three heading levels, bold, italic, links, simple
//! blockquotes, flat lists and paragraphs.

mod stages;

use regex::Regex;
use std::sync::OnceLock;

/// Renders markdown to an HTML fragment.
///
/// Deterministic and total: unrecognized syntax passes through as paragraph
/// text rather than erroring. Stage order is load-bearing — fenced code is
/// pulled out first so later stages cannot rewrite code bodies, and bold
/// runs before italic so `**` pairs are consumed before single `*`.
pub fn render(markdown: &str) -> String {
    let (masked, fences) = stages::extract_fenced_code(markdown);
    let html = stages::inline_code(&masked);
    let html = stages::headings(&html);
    let html = stages::bold(&html);
    let html = stages::italic(&html);
    let html = stages::links(&html);
    let html = stages::blockquotes(&html);
    let html = stages::unordered_lists(&html);
    let html = stages::ordered_list_items(&html);
    let html = wrap_paragraphs(&html);
    stages::restore_fenced_code(&html, &fences)
}

/// Splits on blank-line runs and wraps anything that is not already a block
/// element in `<p>`, converting interior newlines to `<br>`. Whitespace-only
/// pieces collapse to nothing.
fn wrap_paragraphs(input: &str) -> String {
    static SPLIT: OnceLock<Regex> = OnceLock::new();
    static BLOCK_START: OnceLock<Regex> = OnceLock::new();
    let split =
        SPLIT.get_or_init(|| Regex::new(r"\n\n+").expect("invalid paragraph split regex"));
    let block_start = BLOCK_START.get_or_init(|| {
        Regex::new(r"^<(h[1-6]|ul|ol|li|pre|blockquote|p)").expect("invalid block start regex")
    });

    let parts: Vec<String> = split
        .split(input)
        .map(|block| {
            if block_start.is_match(block) || block.starts_with(stages::FENCE_MARK) {
                block.to_string()
            } else if block.trim().is_empty() {
                String::new()
            } else {
                format!("<p>{}</p>", block.replace('\n', "<br>"))
            }
        })
        .collect();

    parts.join("\n\n")
}
