//! Grouping of consecutive chat blocks and speaker alternation.
//!
//! ContentGroups give presentation code the nesting it needs: markdown
//! blocks stand alone while maximal runs of adjacent chat blocks collapse
//! into one group. Grouping changes nesting only, never sequence, and is
//! recomputed on every call.

use crate::segment::{Block, BlockKind};
use crate::speakers::{Speaker, SpeakerRegistry};

/// One renderable unit of a grouped article.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentGroup {
    /// Single markdown block.
    SingleBlock(Block),
    /// Maximal run of consecutive chat blocks, in source order.
    ChatGroup { messages: Vec<ChatMessage> },
}

/// A chat statement prepared for presentation: rendered HTML, resolved
/// speaker, and the side-switching flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub html: String,
    pub speaker: Speaker,
    pub alternate: bool,
}

/// Transient scan state for the alternation flag, scoped to one grouping
/// pass. The counter is threaded across the whole block sequence, not reset
/// per group, so a later chat group picks up where an earlier one left off.
struct AlternationState {
    last_speaker_id: Option<String>,
    toggle_count: u32,
}

impl AlternationState {
    fn new() -> Self {
        Self {
            last_speaker_id: None,
            toggle_count: 0,
        }
    }

    /// Records one statement by the normalized speaker id and returns its
    /// alternate flag. The flag flips whenever the speaker changes; repeated
    /// statements by one speaker share a flag.
    fn observe(&mut self, normalized_id: &str) -> bool {
        if self.last_speaker_id.as_deref() != Some(normalized_id) {
            self.toggle_count += 1;
            self.last_speaker_id = Some(normalized_id.to_string());
        }
        self.toggle_count % 2 == 0
    }
}

/// Groups segmented blocks for presentation.
///
/// Single forward pass: chat blocks accumulate into the current run, a
/// markdown block closes the run before emitting itself, and a trailing run
/// flushes at the end. Speaker labels are resolved through `registry`;
/// unknown labels degrade to a synthesized speaker.
pub fn group_blocks(blocks: Vec<Block>, registry: &SpeakerRegistry) -> Vec<ContentGroup> {
    let mut out = Vec::new();
    let mut run: Vec<ChatMessage> = Vec::new();
    let mut alternation = AlternationState::new();

    for block in blocks {
        match block.kind {
            BlockKind::Chat => {
                let raw_label = block.speaker_id.as_deref().unwrap_or_default();
                let alternate = alternation.observe(&raw_label.to_lowercase());
                run.push(ChatMessage {
                    speaker: registry.resolve(raw_label),
                    html: block.html,
                    alternate,
                });
            }
            BlockKind::Markdown => {
                flush_run(&mut out, &mut run);
                out.push(ContentGroup::SingleBlock(block));
            }
        }
    }
    flush_run(&mut out, &mut run);

    out
}

fn flush_run(out: &mut Vec<ContentGroup>, run: &mut Vec<ChatMessage>) {
    if !run.is_empty() {
        out.push(ContentGroup::ChatGroup {
            messages: std::mem::take(run),
        });
    }
}
