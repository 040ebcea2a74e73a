//! # Component Registry
//!
//! The one construction entry point that guarantees every field of a new
//! block is populated: style defaults, a fresh id and placeholder content.

use crate::block::*;
use crate::defaults;
use crate::error::ModelResult;
use crate::id::new_id;

/// Placeholder copy for blocks that start with content
pub mod placeholder {
    pub const TEXT: &str = "<p>Enter your text here...</p>";
    pub const PARAGRAPH: &str = "<p>Start writing your paragraph here...</p>";
    pub const HEADING: &str = "Heading";
    pub const BUTTON_TEXT: &str = "Click Here";
    pub const BUTTON_HREF: &str = "#";
    pub const HTML: &str = "<div style=\"padding: 20px; text-align: center;\">\n  <h2>Custom HTML</h2>\n  <p>Edit this to add your own HTML content</p>\n</div>";
}

/// Build a default-valued block of the given kind
pub fn create_component(kind: BlockKind) -> Block {
    let id = new_id();

    match kind {
        BlockKind::Text => Block::Text(TextBlock {
            id,
            content: placeholder::TEXT.to_string(),
            ..Default::default()
        }),
        BlockKind::Heading => Block::Heading(HeadingBlock {
            id,
            text: placeholder::HEADING.to_string(),
            ..Default::default()
        }),
        BlockKind::Image => Block::Image(ImageBlock {
            id,
            alt: defaults::IMAGE.alt.to_string(),
            ..Default::default()
        }),
        BlockKind::Button => Block::Button(ButtonBlock {
            id,
            text: placeholder::BUTTON_TEXT.to_string(),
            href: placeholder::BUTTON_HREF.to_string(),
            ..Default::default()
        }),
        BlockKind::Divider => Block::Divider(DividerBlock {
            id,
            ..Default::default()
        }),
        BlockKind::Spacer => Block::Spacer(SpacerBlock {
            id,
            ..Default::default()
        }),
        BlockKind::Layout => Block::Layout(LayoutBlock {
            id,
            ..Default::default()
        }),
        BlockKind::SocialLinks => Block::SocialLinks(SocialLinksBlock {
            id,
            ..Default::default()
        }),
        BlockKind::Paragraph => Block::Paragraph(ParagraphBlock {
            id,
            content: placeholder::PARAGRAPH.to_string(),
            ..Default::default()
        }),
        BlockKind::Html => Block::Html(HtmlBlock {
            id,
            content: placeholder::HTML.to_string(),
            ..Default::default()
        }),
    }
}

/// Build a block from its wire name (`"text"`, `"socialLinks"`, ...)
pub fn create_component_named(name: &str) -> ModelResult<Block> {
    let kind: BlockKind = name.parse()?;
    Ok(create_component(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelError;

    #[test]
    fn test_every_kind_gets_a_fresh_id() {
        let blocks: Vec<Block> = BlockKind::ALL.iter().map(|k| create_component(*k)).collect();

        for (block, kind) in blocks.iter().zip(BlockKind::ALL) {
            assert_eq!(block.kind(), kind);
            assert!(!block.id().is_empty());
        }

        let mut ids: Vec<&str> = blocks.iter().map(|b| b.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), BlockKind::ALL.len());
    }

    #[test]
    fn test_layout_starts_with_two_empty_half_columns() {
        let Block::Layout(layout) = create_component(BlockKind::Layout) else {
            panic!("Expected layout");
        };
        assert_eq!(layout.columns.len(), 2);
        assert!(layout.is_empty());
        assert_eq!(layout.column_widths, vec!["50%", "50%"]);
        assert_eq!(layout.direction, LayoutDirection::Horizontal);
        assert!(layout.stack_on_mobile);
    }

    #[test]
    fn test_text_gets_placeholder_copy() {
        let Block::Text(text) = create_component(BlockKind::Text) else {
            panic!("Expected text");
        };
        assert_eq!(text.content, placeholder::TEXT);
        assert_eq!(text.font_size, 14);
        assert_eq!(text.line_height, 1.5);
    }

    #[test]
    fn test_heading_defaults_to_level_two() {
        let Block::Heading(heading) = create_component(BlockKind::Heading) else {
            panic!("Expected heading");
        };
        assert_eq!(heading.level, HeadingLevel::H2);
        assert_eq!(heading.font_size, 24);
        assert_eq!(heading.font_weight, 600);
    }

    #[test]
    fn test_image_starts_unset() {
        let Block::Image(image) = create_component(BlockKind::Image) else {
            panic!("Expected image");
        };
        assert!(image.src.is_empty());
        assert_eq!(image.alt, "Image");
        assert_eq!(image.link_url, None);
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert!(create_component_named("socialLinks").is_ok());
        assert!(matches!(
            create_component_named("video"),
            Err(ModelError::UnknownType(_))
        ));
    }
}
