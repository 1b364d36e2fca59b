//! Segmentation of raw article text into markdown and chat blocks.
//!
//! A single forward line scan in two phases: [`classify`] extracts local
//! facts per line, [`SegmentBuilder`] folds them into rendered [`Block`]s.

mod builder;
mod classify;
mod types;

pub use builder::SegmentBuilder;
pub use classify::{ChatMarker, LineClass, classify, has_chat_content};
pub use types::{Block, BlockKind};

/// Segments raw article text into an ordered sequence of blocks.
///
/// Block order follows source order. Markdown spans that are blank after
/// trimming produce no block, so fully blank stretches between chats vanish.
pub fn segment(raw: &str) -> Vec<Block> {
    let mut builder = SegmentBuilder::new();
    for line in raw.split('\n') {
        builder.push(&classify(line));
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(blocks: &[Block]) -> Vec<BlockKind> {
        blocks.iter().map(|b| b.kind).collect()
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert_eq!(segment(""), vec![]);
        assert_eq!(segment("\n \n"), vec![]);
    }

    #[test]
    fn plain_text_is_one_markdown_block() {
        let blocks = segment("# Title\n\nSome prose.");
        assert_eq!(kinds(&blocks), vec![BlockKind::Markdown]);
        assert_eq!(blocks[0].html, "<h1>Title</h1>\n\n<p>Some prose.</p>");
        assert_eq!(blocks[0].speaker_id, None);
    }

    #[test]
    fn inline_chats_interleaved_with_markdown() {
        let blocks = segment("【A】Hi there\nSome markdown.\n【B】Hello back");
        assert_eq!(
            kinds(&blocks),
            vec![BlockKind::Chat, BlockKind::Markdown, BlockKind::Chat]
        );
        assert_eq!(blocks[0].speaker_id.as_deref(), Some("A"));
        assert_eq!(blocks[0].html, "<p>Hi there</p>");
        assert_eq!(blocks[1].html, "<p>Some markdown.</p>");
        assert_eq!(blocks[2].speaker_id.as_deref(), Some("B"));
    }

    #[test]
    fn block_form_chat_closed_by_blank_line() {
        let blocks = segment("[speaker:interviewer]\nWhat do you think?\n\nNext markdown paragraph.");
        assert_eq!(kinds(&blocks), vec![BlockKind::Chat, BlockKind::Markdown]);
        assert_eq!(blocks[0].speaker_id.as_deref(), Some("interviewer"));
        assert_eq!(blocks[0].html, "<p>What do you think?</p>");
        assert_eq!(blocks[1].html, "<p>Next markdown paragraph.</p>");
    }

    #[test]
    fn block_form_chat_joins_multiple_lines() {
        let blocks = segment("[speaker:a]\nfirst line\nsecond line");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].html, "<p>first line<br>second line</p>");
    }

    #[test]
    fn unterminated_chat_flushes_at_eof() {
        let blocks = segment("intro\n[speaker:a]\nstill talking");
        assert_eq!(kinds(&blocks), vec![BlockKind::Markdown, BlockKind::Chat]);
        assert_eq!(blocks[1].html, "<p>still talking</p>");
    }

    #[test]
    fn empty_block_form_chat_is_dropped() {
        let blocks = segment("[speaker:a]\n\nafter");
        assert_eq!(kinds(&blocks), vec![BlockKind::Markdown]);
        assert_eq!(blocks[0].html, "<p>after</p>");
    }

    #[test]
    fn new_marker_closes_open_chat() {
        let blocks = segment("[speaker:a]\nfirst\n[speaker:b]\nsecond");
        assert_eq!(kinds(&blocks), vec![BlockKind::Chat, BlockKind::Chat]);
        assert_eq!(blocks[0].speaker_id.as_deref(), Some("a"));
        assert_eq!(blocks[1].speaker_id.as_deref(), Some("b"));
    }

    #[test]
    fn inline_marker_closes_open_chat() {
        let blocks = segment("[speaker:a]\nlong answer\n【b】quick reply");
        assert_eq!(kinds(&blocks), vec![BlockKind::Chat, BlockKind::Chat]);
        assert_eq!(blocks[0].speaker_id.as_deref(), Some("a"));
        assert_eq!(blocks[1].speaker_id.as_deref(), Some("b"));
        assert_eq!(blocks[1].html, "<p>quick reply</p>");
    }

    #[test]
    fn chat_content_renders_markdown() {
        let blocks = segment("【A】this is **important**");
        assert_eq!(blocks[0].html, "<p>this is <strong>important</strong></p>");
    }

    #[test]
    fn blank_lines_between_chats_produce_no_block() {
        let blocks = segment("【A】one\n\n\n【B】two");
        assert_eq!(kinds(&blocks), vec![BlockKind::Chat, BlockKind::Chat]);
    }
}
