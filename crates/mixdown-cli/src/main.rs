use anyhow::{Context, Result};
use mixdown_config::Config;
use mixdown_engine::{ContentGroup, SpeakerRegistry, group_blocks, has_chat_content, render, segment};
use std::env;
use std::path::PathBuf;
use std::process;

fn main() -> Result<()> {
    // Validate CLI arguments before doing any work
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <article-file> [speakers-file]", args[0]);
        process::exit(1);
    }

    let article_path = PathBuf::from(&args[1]);
    if !article_path.is_file() {
        eprintln!("Error: '{}' is not a file", args[1]);
        process::exit(1);
    }

    let text = std::fs::read_to_string(&article_path)
        .with_context(|| format!("failed to read article file {}", article_path.display()))?;

    let registry = match speakers_path(&args)? {
        Some(path) => mixdown_config::load_speakers(&path)?,
        None => SpeakerRegistry::default(),
    };

    let html = if has_chat_content(&text) {
        let groups = group_blocks(segment(&text), &registry);
        emit_html(&groups)
    } else {
        render(&text)
    };

    println!("{html}");
    Ok(())
}

/// Speakers file from the command line, falling back to the config file's
/// default when one is set.
fn speakers_path(args: &[String]) -> Result<Option<PathBuf>> {
    if let Some(arg) = args.get(2) {
        return Ok(Some(PathBuf::from(arg)));
    }
    let config = Config::load().context("failed to load config")?;
    Ok(config.and_then(|c| c.speakers_path))
}

/// Emits grouped blocks as an HTML fragment: markdown blocks as-is, chat
/// groups as nested divs with speaker headers. Alternate messages get an
/// extra class so stylesheets can flip their side.
fn emit_html(groups: &[ContentGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        match group {
            ContentGroup::SingleBlock(block) => {
                out.push_str(&block.html);
                out.push('\n');
            }
            ContentGroup::ChatGroup { messages } => {
                out.push_str("<div class=\"chat-group\">\n");
                for message in messages {
                    let class = if message.alternate {
                        "chat-message alternate"
                    } else {
                        "chat-message"
                    };
                    out.push_str(&format!("<div class=\"{class}\">\n"));
                    out.push_str(&format!(
                        "<span class=\"chat-speaker\">{}</span>",
                        message.speaker.name
                    ));
                    if let Some(role) = &message.speaker.role {
                        out.push_str(&format!("<span class=\"chat-role\">{role}</span>"));
                    }
                    out.push('\n');
                    out.push_str(&message.html);
                    out.push_str("\n</div>\n");
                }
                out.push_str("</div>\n");
            }
        }
    }
    out
}
