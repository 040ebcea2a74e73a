//! # Mailblocks Model
//!
//! The document tree shared by every Mailblocks package.
//!
//! A newsletter is an ordered list of [`Block`]s. Every block carries an
//! opaque `id`, a `type` discriminant and variant fields; [`Block::Layout`]
//! is the one recursive variant, owning columns of child blocks.
//!
//! ```rust
//! use mailblocks_model::{create_component, BlockKind};
//!
//! let heading = create_component(BlockKind::Heading);
//! assert_eq!(heading.kind(), BlockKind::Heading);
//! ```

mod block;
pub mod defaults;
mod error;
mod id;
mod registry;
pub mod visitor;
mod wire;

pub use block::{
    Align, Block, BlockKind, ButtonBlock, Dimension, DividerBlock, DividerStyle, HeadingBlock,
    HeadingLevel, HtmlBlock, IconStyle, ImageBlock, LayoutBlock, LayoutDirection, ParagraphBlock,
    SocialLink, SocialLinksBlock, SocialPlatform, SpacerBlock, StyleMap, TextAlign, TextBlock,
};
pub use error::{ModelError, ModelResult};
pub use id::new_id;
pub use registry::{create_component, create_component_named, placeholder};
pub use wire::{blocks_to_json, parse_blocks};
