//! End-to-end pipeline tests: raw article text through segmentation and
//! grouping, the way presentation code consumes the engine.

use mixdown_engine::{
    Block, BlockKind, ContentGroup, Speaker, SpeakerRegistry, group_blocks, has_chat_content,
    render, segment,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

const INTERVIEW: &str = "\
# The Interview

An introduction paragraph.

【Interviewer】Welcome! How did the project start?
[speaker:guest]
It started as a weekend experiment.
It grew from there.

A closing remark between chats.

【Interviewer】And where is it going?
【Guest】We will see.";

#[test]
fn interview_article_full_pipeline() {
    assert!(has_chat_content(INTERVIEW));

    let blocks = segment(INTERVIEW);
    let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Markdown,
            BlockKind::Chat,
            BlockKind::Chat,
            BlockKind::Markdown,
            BlockKind::Chat,
            BlockKind::Chat,
        ]
    );

    let registry = SpeakerRegistry::new([
        Speaker {
            id: "interviewer".to_string(),
            name: "Sam".to_string(),
            role: Some("host".to_string()),
            avatar: None,
        },
        Speaker {
            id: "guest".to_string(),
            name: "Alex".to_string(),
            role: None,
            avatar: Some("guest.png".to_string()),
        },
    ]);
    let groups = group_blocks(blocks, &registry);

    // markdown, chat group of 2, markdown, chat group of 2
    assert_eq!(groups.len(), 4);
    let chat_flags: Vec<(String, bool)> = groups
        .iter()
        .filter_map(|g| match g {
            ContentGroup::ChatGroup { messages } => Some(messages),
            ContentGroup::SingleBlock(_) => None,
        })
        .flatten()
        .map(|m| (m.speaker.name.clone(), m.alternate))
        .collect();

    // Interviewer -> guest -> Interviewer -> Guest: four speaker changes,
    // counter 1..=4, flag false/true/false/true. The markdown block between
    // the groups does not reset the counter.
    assert_eq!(
        chat_flags,
        vec![
            ("Sam".to_string(), false),
            ("Alex".to_string(), true),
            ("Sam".to_string(), false),
            ("Alex".to_string(), true),
        ]
    );
}

#[test]
fn no_chat_markers_is_a_single_markdown_block() {
    let text = "# Title\n\nTwo paragraphs.\n\n- and\n- a list";
    assert!(!has_chat_content(text));

    let blocks = segment(text);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockKind::Markdown);
    // Standalone render of the same text matches the block's html.
    assert_eq!(blocks[0].html, render(text));
}

#[rstest]
#[case("")]
#[case("   \n\n  ")]
fn blank_input_is_empty_at_every_stage(#[case] text: &str) {
    let blocks = segment(text);
    assert_eq!(blocks, Vec::<Block>::new());
    let groups = group_blocks(blocks, &SpeakerRegistry::default());
    assert!(groups.is_empty());
}

#[test]
fn fenced_code_survives_the_whole_pipeline() {
    let text = "before\n\n```\n**not bold** <tag>\n```\n\nafter";
    let blocks = segment(text);
    assert_eq!(blocks.len(), 1);
    assert!(
        blocks[0]
            .html
            .contains("<pre><code class=\"language-text\">**not bold** &lt;tag&gt;</code></pre>")
    );
    assert!(!blocks[0].html.contains("<strong>"));
}

#[test]
fn chat_order_is_preserved() {
    let text = "【a】1\n【b】2\n【c】3";
    let groups = group_blocks(segment(text), &SpeakerRegistry::default());
    match &groups[0] {
        ContentGroup::ChatGroup { messages } => {
            let htmls: Vec<&str> = messages.iter().map(|m| m.html.as_str()).collect();
            assert_eq!(htmls, vec!["<p>1</p>", "<p>2</p>", "<p>3</p>"]);
        }
        ContentGroup::SingleBlock(_) => panic!("expected ChatGroup"),
    }
}
