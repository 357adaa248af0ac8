pub mod document;
pub mod io;
pub mod layout;
pub mod parsing;


// Re-export key types for easier usage
pub use document::{LayoutContent, LayoutSegment, Segment, lesson_blocks, scan_lesson};
pub use io::*;
pub use layout::{ImageBlock, Layout, LayoutMode, LayoutSize, Position};
pub use parsing::{
    BlockAttributes, BlockContent, BlockKind, ParsedBlock, RawBlock, parse_block, parse_blocks,
};
