/// One parsed segment of article content, already rendered to HTML.
///
/// Produced only by the segmenter and immutable afterwards. `speaker_id` is
/// `Some` exactly when `kind` is [`BlockKind::Chat`] and carries the raw
/// trimmed label text, which may be unknown to the speaker registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub html: String,
    pub speaker_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Markdown,
    Chat,
}

impl Block {
    pub(crate) fn markdown(html: String) -> Self {
        Self {
            kind: BlockKind::Markdown,
            html,
            speaker_id: None,
        }
    }

    pub(crate) fn chat(html: String, speaker_id: String) -> Self {
        Self {
            kind: BlockKind::Chat,
            html,
            speaker_id: Some(speaker_id),
        }
    }

    pub fn is_chat(&self) -> bool {
        self.kind == BlockKind::Chat
    }
}
