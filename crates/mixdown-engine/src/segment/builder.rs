use crate::markdown;

use super::{
    classify::{ChatMarker, LineClass},
    types::Block,
};

/// Accumulated lines of an open block-form chat.
#[derive(Debug)]
struct OpenChat {
    speaker: String,
    lines: Vec<String>,
}

/// Phase 2 of segmentation: folds classified lines into blocks.
///
/// Two independent pending buffers — plain-text lines waiting to become a
/// markdown block, and an open block-form chat — with explicit flushes at
/// the trigger points: a new marker, a blank line while a chat is open, and
/// end of input.
pub struct SegmentBuilder {
    pending_markdown: Vec<String>,
    open_chat: Option<OpenChat>,
    out: Vec<Block>,
}

impl SegmentBuilder {
    pub fn new() -> Self {
        Self {
            pending_markdown: Vec::new(),
            open_chat: None,
            out: Vec::new(),
        }
    }

    pub fn push(&mut self, lc: &LineClass<'_>) {
        match lc.marker {
            Some(ChatMarker::Inline { speaker, content }) => {
                self.flush_markdown();
                self.flush_chat();
                self.out
                    .push(Block::chat(markdown::render(content), speaker.to_string()));
            }
            Some(ChatMarker::Open { speaker }) => {
                self.flush_markdown();
                self.flush_chat();
                self.open_chat = Some(OpenChat {
                    speaker: speaker.to_string(),
                    lines: Vec::new(),
                });
            }
            None if self.open_chat.is_some() => {
                if lc.is_blank {
                    self.flush_chat();
                } else if let Some(chat) = self.open_chat.as_mut() {
                    chat.lines.push(lc.raw.to_string());
                }
            }
            None => self.pending_markdown.push(lc.raw.to_string()),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush, markdown first. An unterminated chat is emitted rather
        // than dropped.
        self.flush_markdown();
        self.flush_chat();
        self.out
    }

    fn flush_markdown(&mut self) {
        if self.pending_markdown.is_empty() {
            return;
        }
        let text = self.pending_markdown.join("\n");
        self.pending_markdown.clear();
        let text = text.trim();
        if !text.is_empty() {
            self.out.push(Block::markdown(markdown::render(text)));
        }
    }

    fn flush_chat(&mut self) {
        let Some(chat) = self.open_chat.take() else {
            return;
        };
        let text = chat.lines.join("\n");
        let text = text.trim();
        if !text.is_empty() {
            self.out
                .push(Block::chat(markdown::render(text), chat.speaker));
        }
    }
}

impl Default for SegmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
