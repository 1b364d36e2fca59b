use regex::Regex;
use std::sync::OnceLock;

/// Sentinel wrapped around fenced-code placeholder indices while the other
/// rewrite stages run. Private-use codepoint so no stage can match into it.
pub(crate) const FENCE_MARK: char = '\u{e000}';

/// Replaces each fenced code block with a placeholder and returns the
/// rendered `<pre><code>` HTML for reinsertion after all other stages.
///
/// Runs first so markdown-looking text inside a fence is never transformed.
/// The body is trimmed, HTML-escaped and tagged with the fence's language
/// (default "text").
pub(crate) fn extract_fenced_code(input: &str) -> (String, Vec<String>) {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    let re = FENCE
        .get_or_init(|| Regex::new(r"(?s)```(\w*)\n(.*?)```").expect("invalid fence regex"));

    let mut rendered = Vec::new();
    let masked = re
        .replace_all(input, |caps: &regex::Captures| {
            let lang = match &caps[1] {
                "" => "text",
                lang => lang,
            };
            let code = html_escape::encode_safe(caps[2].trim());
            rendered.push(format!(
                "<pre><code class=\"language-{lang}\">{code}</code></pre>"
            ));
            format!("{FENCE_MARK}{}{FENCE_MARK}", rendered.len() - 1)
        })
        .into_owned();

    (masked, rendered)
}

/// Swaps fence placeholders back for their rendered HTML.
pub(crate) fn restore_fenced_code(input: &str, rendered: &[String]) -> String {
    static MARK: OnceLock<Regex> = OnceLock::new();
    let re = MARK.get_or_init(|| {
        Regex::new(r"\x{e000}(\d+)\x{e000}").expect("invalid fence placeholder regex")
    });

    re.replace_all(input, |caps: &regex::Captures| {
        caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|i| rendered.get(i))
            .cloned()
            .unwrap_or_default()
    })
    .into_owned()
}

/// `` `x` `` becomes `<code>x</code>`. Contents are passed through
/// unescaped; known limitation.
pub(crate) fn inline_code(input: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"`([^`]+)`").expect("invalid inline code regex"));
    re.replace_all(input, "<code>$1</code>").into_owned()
}

/// Per-line `#`/`##`/`###` headings. Deepest prefix first so `# ` does not
/// claim the longer markers.
pub(crate) fn headings(input: &str) -> String {
    static H3: OnceLock<Regex> = OnceLock::new();
    static H2: OnceLock<Regex> = OnceLock::new();
    static H1: OnceLock<Regex> = OnceLock::new();
    let h3 = H3.get_or_init(|| Regex::new(r"(?m)^### (.+)$").expect("invalid h3 regex"));
    let h2 = H2.get_or_init(|| Regex::new(r"(?m)^## (.+)$").expect("invalid h2 regex"));
    let h1 = H1.get_or_init(|| Regex::new(r"(?m)^# (.+)$").expect("invalid h1 regex"));

    let html = h3.replace_all(input, "<h3>$1</h3>");
    let html = h2.replace_all(&html, "<h2>$1</h2>");
    h1.replace_all(&html, "<h1>$1</h1>").into_owned()
}

/// `**text**` becomes `<strong>`. No nesting; must run before [`italic`] so
/// double-star pairs are consumed first.
pub(crate) fn bold(input: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("invalid bold regex"));
    re.replace_all(input, "<strong>$1</strong>").into_owned()
}

/// `*text*` becomes `<em>`.
pub(crate) fn italic(input: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\*([^*]+)\*").expect("invalid italic regex"));
    re.replace_all(input, "<em>$1</em>").into_owned()
}

/// `[label](url)` becomes an anchor that opens in a new tab without leaking
/// referrer or opener.
pub(crate) fn links(input: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("invalid link regex"));
    re.replace_all(
        input,
        "<a href=\"$2\" target=\"_blank\" rel=\"noopener noreferrer\">$1</a>",
    )
    .into_owned()
}

/// Per-line `> text` quotes, with adjacent quote elements merged into one.
pub(crate) fn blockquotes(input: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?m)^> (.+)$").expect("invalid blockquote regex"));
    let html = re.replace_all(input, "<blockquote>$1</blockquote>");
    html.replace("</blockquote>\n<blockquote>", "\n")
}

/// Per-line `- text` items, with each contiguous run of items wrapped once
/// in a single `<ul>`.
pub(crate) fn unordered_lists(input: &str) -> String {
    static ITEM: OnceLock<Regex> = OnceLock::new();
    static RUN: OnceLock<Regex> = OnceLock::new();
    let item = ITEM.get_or_init(|| Regex::new(r"(?m)^- (.+)$").expect("invalid list item regex"));
    let run = RUN.get_or_init(|| {
        Regex::new(r"(?:<li>[^\n]*</li>\n?)+").expect("invalid list run regex")
    });

    let html = item.replace_all(input, "<li>$1</li>");
    run.replace_all(&html, "<ul>$0</ul>").into_owned()
}

/// Per-line `N. text` items. No `<ol>` wrapper around runs; must run after
/// [`unordered_lists`] so its items do not get pulled into a `<ul>`.
pub(crate) fn ordered_list_items(input: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re =
        RE.get_or_init(|| Regex::new(r"(?m)^\d+\. (.+)$").expect("invalid ordered item regex"));
    re.replace_all(input, "<li>$1</li>").into_owned()
}
