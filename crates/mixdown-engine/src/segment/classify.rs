use regex::Regex;
use std::sync::OnceLock;

/// Classification of a single source line containing only local facts.
///
/// This is phase 1 of segmentation: each line is classified independently
/// without reference to surrounding context. The stateful
/// [`SegmentBuilder`](super::builder::SegmentBuilder) decides what the facts
/// mean.
#[derive(Debug, Clone, PartialEq)]
pub struct LineClass<'a> {
    /// The line exactly as it appeared in the source.
    pub raw: &'a str,
    /// Whether the line is whitespace only.
    pub is_blank: bool,
    /// Chat marker found on this line, if any.
    pub marker: Option<ChatMarker<'a>>,
}

/// The two chat notations an article line can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMarker<'a> {
    /// `【label】content` — a complete single-line chat statement.
    Inline { speaker: &'a str, content: &'a str },
    /// `[speaker:label]` — opens a block-form chat; content follows on
    /// subsequent lines.
    Open { speaker: &'a str },
}

fn inline_chat_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^【([^\]]+)】(.+)$").expect("invalid inline chat regex"))
}

fn chat_open_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\[speaker:([^\]]+)\]$").expect("invalid chat open regex"))
}

/// Classifies a line into a [`LineClass`].
///
/// Speaker labels and inline content are trimmed here; block-form content
/// lines are kept verbatim by the builder.
pub fn classify(line: &str) -> LineClass<'_> {
    let marker = if let Some(caps) = inline_chat_pattern().captures(line) {
        Some(ChatMarker::Inline {
            speaker: caps.get(1).map_or("", |m| m.as_str()).trim(),
            content: caps.get(2).map_or("", |m| m.as_str()).trim(),
        })
    } else {
        chat_open_pattern().captures(line).map(|caps| ChatMarker::Open {
            speaker: caps.get(1).map_or("", |m| m.as_str()).trim(),
        })
    };

    LineClass {
        raw: line,
        is_blank: line.trim().is_empty(),
        marker,
    }
}

/// True iff either chat notation occurs anywhere in the text.
///
/// Collaborators use this to decide between chat-aware rendering and a plain
/// markdown pass.
pub fn has_chat_content(text: &str) -> bool {
    static INLINE_ANYWHERE: OnceLock<Regex> = OnceLock::new();
    static OPEN_ANYWHERE: OnceLock<Regex> = OnceLock::new();
    let inline = INLINE_ANYWHERE
        .get_or_init(|| Regex::new(r"【[^\]]+】").expect("invalid inline chat probe regex"));
    let open = OPEN_ANYWHERE
        .get_or_init(|| Regex::new(r"\[speaker:[^\]]+\]").expect("invalid chat open probe regex"));

    inline.is_match(text) || open.is_match(text)
}
