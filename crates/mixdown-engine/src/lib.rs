pub mod group;
pub mod markdown;
pub mod segment;
pub mod speakers;

// Re-export key types for easier usage
pub use group::{ChatMessage, ContentGroup, group_blocks};
pub use markdown::render;
pub use segment::{Block, BlockKind, has_chat_content, segment};
pub use speakers::{Speaker, SpeakerRegistry};
