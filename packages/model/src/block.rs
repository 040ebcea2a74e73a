//! # Blocks
//!
//! The tagged union of content blocks a newsletter is built from.
//!
//! Blocks serialize with an internal `"type"` tag and camelCase fields, so a
//! document is a plain JSON array:
//!
//! ```json
//! [{ "id": "…", "type": "heading", "text": "Hi", "level": 1, "fontSize": 32 }]
//! ```
//!
//! Presentation fields missing from the JSON, or set to `null`, take their
//! values from [`crate::defaults`]; content fields default to empty.

use crate::defaults;
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Free-form style overrides (React-style camelCase property names)
pub type StyleMap = BTreeMap<String, serde_json::Value>;

/// Discriminant of the ten block variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Text,
    Heading,
    Image,
    Button,
    Divider,
    Spacer,
    Layout,
    SocialLinks,
    Paragraph,
    Html,
}

impl BlockKind {
    pub const ALL: [BlockKind; 10] = [
        BlockKind::Text,
        BlockKind::Heading,
        BlockKind::Image,
        BlockKind::Button,
        BlockKind::Divider,
        BlockKind::Spacer,
        BlockKind::Layout,
        BlockKind::SocialLinks,
        BlockKind::Paragraph,
        BlockKind::Html,
    ];

    /// Wire name, as used in the `"type"` field
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Heading => "heading",
            BlockKind::Image => "image",
            BlockKind::Button => "button",
            BlockKind::Divider => "divider",
            BlockKind::Spacer => "spacer",
            BlockKind::Layout => "layout",
            BlockKind::SocialLinks => "socialLinks",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Html => "html",
        }
    }

    /// Human-readable label shown in the block palette
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Text => "Text Block",
            BlockKind::Heading => "Heading",
            BlockKind::Image => "Image",
            BlockKind::Button => "Button",
            BlockKind::Divider => "Divider",
            BlockKind::Spacer => "Spacer",
            BlockKind::Layout => "Layout",
            BlockKind::SocialLinks => "Social Links",
            BlockKind::Paragraph => "Paragraph",
            BlockKind::Html => "HTML",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ModelError::UnknownType(s.to_string()))
    }
}

/// Horizontal alignment for boxes (images, buttons, headings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// Text alignment for flowing copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

/// Heading level, serialized as the bare number 1, 2 or 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn number(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            other => Err(format!("heading level must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.number()
    }
}

/// A CSS length given either as a bare pixel number or a CSS string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Px(f64),
    Css(String),
}

impl Dimension {
    /// Value for a CSS declaration (`300px`, `100%`, `auto`)
    pub fn css(&self) -> String {
        match self {
            Dimension::Px(px) => format!("{}px", px),
            Dimension::Css(value) => value.clone(),
        }
    }

    /// Value for an HTML attribute (`300`, `100%`)
    pub fn attr(&self) -> String {
        match self {
            Dimension::Px(px) => px.to_string(),
            Dimension::Css(value) => value.clone(),
        }
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Dimension::Css(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerStyle {
    Solid,
    Dashed,
    Dotted,
}

impl DividerStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DividerStyle::Solid => "solid",
            DividerStyle::Dashed => "dashed",
            DividerStyle::Dotted => "dotted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    Circular,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Youtube,
    Github,
}

impl SocialPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Github => "github",
        }
    }

    /// Hosted icon rendered for this platform
    pub fn icon_url(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "https://cdn-icons-png.freepik.com/512/2374/2374418.png",
            SocialPlatform::Twitter => "https://cdn-icons-png.freepik.com/512/3015/3015802.png",
            SocialPlatform::Instagram => "https://cdn-icons-png.freepik.com/512/4782/4782335.png",
            SocialPlatform::Linkedin => "https://cdn-icons-png.freepik.com/512/1400/1400848.png",
            SocialPlatform::Youtube => "https://cdn-icons-png.freepik.com/512/2504/2504965.png",
            SocialPlatform::Github => "https://cdn-icons-png.freepik.com/512/2504/2504911.png",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(rename = "type")]
    pub platform: SocialPlatform,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextBlock {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
    pub content: String,
    pub font_size: u32,
    pub font_family: String,
    pub color: String,
    pub alignment: TextAlign,
    pub line_height: f64,
}

impl Default for TextBlock {
    fn default() -> Self {
        let d = &defaults::TEXT;
        Self {
            id: String::new(),
            styles: None,
            content: String::new(),
            font_size: d.font_size,
            font_family: d.font_family.to_string(),
            color: d.color.to_string(),
            alignment: d.alignment,
            line_height: d.line_height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParagraphBlock {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
    pub content: String,
    pub font_size: u32,
    pub font_family: String,
    pub color: String,
    pub alignment: TextAlign,
    pub line_height: f64,
    pub background_color: String,
}

impl Default for ParagraphBlock {
    fn default() -> Self {
        let d = &defaults::PARAGRAPH;
        Self {
            id: String::new(),
            styles: None,
            content: String::new(),
            font_size: d.font_size,
            font_family: d.font_family.to_string(),
            color: d.color.to_string(),
            alignment: d.alignment,
            line_height: d.line_height,
            background_color: d.background_color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadingBlock {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
    pub text: String,
    pub level: HeadingLevel,
    pub font_size: u32,
    pub font_family: String,
    pub color: String,
    pub alignment: Align,
    pub font_weight: u32,
}

impl HeadingBlock {
    /// Switch level, adopting that level's default size and weight
    pub fn with_level(mut self, level: HeadingLevel) -> Self {
        let style = defaults::HEADING.level(level);
        self.level = level;
        self.font_size = style.font_size;
        self.font_weight = style.font_weight;
        self
    }
}

impl Default for HeadingBlock {
    fn default() -> Self {
        let d = &defaults::HEADING;
        Self {
            id: String::new(),
            styles: None,
            text: String::new(),
            level: HeadingLevel::H2,
            font_size: d.h2.font_size,
            font_family: d.font_family.to_string(),
            color: d.color.to_string(),
            alignment: d.alignment,
            font_weight: d.h2.font_weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageBlock {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
    pub src: String,
    pub alt: String,
    pub width: Dimension,
    pub height: Dimension,
    pub alignment: Align,
    pub border_radius: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
}

impl Default for ImageBlock {
    fn default() -> Self {
        let d = &defaults::IMAGE;
        Self {
            id: String::new(),
            styles: None,
            src: String::new(),
            alt: String::new(),
            width: d.width.into(),
            height: d.height.into(),
            alignment: d.alignment,
            border_radius: d.border_radius,
            link_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonBlock {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
    pub text: String,
    pub href: String,
    pub background_color: String,
    pub text_color: String,
    pub border_radius: u32,
    pub padding: String,
    pub font_size: u32,
    pub alignment: Align,
    pub width: String,
}

impl Default for ButtonBlock {
    fn default() -> Self {
        let d = &defaults::BUTTON;
        Self {
            id: String::new(),
            styles: None,
            text: String::new(),
            href: String::new(),
            background_color: d.background_color.to_string(),
            text_color: d.text_color.to_string(),
            border_radius: d.border_radius,
            padding: d.padding.to_string(),
            font_size: d.font_size,
            alignment: d.alignment,
            width: d.width.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DividerBlock {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
    pub style: DividerStyle,
    pub color: String,
    pub thickness: u32,
    pub width: String,
    pub margin_top: u32,
    pub margin_bottom: u32,
}

impl Default for DividerBlock {
    fn default() -> Self {
        let d = &defaults::DIVIDER;
        Self {
            id: String::new(),
            styles: None,
            style: d.style,
            color: d.color.to_string(),
            thickness: d.thickness,
            width: d.width.to_string(),
            margin_top: d.margin_top,
            margin_bottom: d.margin_bottom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpacerBlock {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
    pub height: u32,
}

impl Default for SpacerBlock {
    fn default() -> Self {
        Self {
            id: String::new(),
            styles: None,
            height: defaults::SPACER.height,
        }
    }
}

/// Multi-column container; the only recursive block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutBlock {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
    pub columns: Vec<Vec<Block>>,
    pub column_widths: Vec<String>,
    pub gap: u32,
    pub background_color: String,
    pub padding: String,
    pub direction: LayoutDirection,
    pub stack_on_mobile: bool,
}

impl LayoutBlock {
    /// Width of column `index`: the configured width, else an equal share
    pub fn column_width(&self, index: usize) -> String {
        match self.column_widths.get(index) {
            Some(width) if !width.is_empty() => width.clone(),
            _ => format!("{:.2}%", 100.0 / self.columns.len().max(1) as f64),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|column| column.is_empty())
    }
}

impl Default for LayoutBlock {
    fn default() -> Self {
        let d = &defaults::LAYOUT;
        Self {
            id: String::new(),
            styles: None,
            columns: vec![Vec::new(); d.column_widths.len()],
            column_widths: d.column_widths.iter().map(|w| w.to_string()).collect(),
            gap: d.gap,
            background_color: d.background_color.to_string(),
            padding: d.padding.to_string(),
            direction: d.direction,
            stack_on_mobile: d.stack_on_mobile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLinksBlock {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
    pub platforms: Vec<SocialLink>,
    pub icon_size: u32,
    pub spacing: u32,
    pub alignment: Align,
    pub icon_style: IconStyle,
}

impl Default for SocialLinksBlock {
    fn default() -> Self {
        let d = &defaults::SOCIAL_LINKS;
        Self {
            id: String::new(),
            styles: None,
            platforms: Vec::new(),
            icon_size: d.icon_size,
            spacing: d.spacing,
            alignment: d.alignment,
            icon_style: d.icon_style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HtmlBlock {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
    pub content: String,
    pub min_height: u32,
}

impl Default for HtmlBlock {
    fn default() -> Self {
        Self {
            id: String::new(),
            styles: None,
            content: String::new(),
            min_height: defaults::HTML.min_height,
        }
    }
}

/// One content unit of a newsletter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", try_from = "serde_json::Value")]
pub enum Block {
    Text(TextBlock),
    Heading(HeadingBlock),
    Image(ImageBlock),
    Button(ButtonBlock),
    Divider(DividerBlock),
    Spacer(SpacerBlock),
    Layout(LayoutBlock),
    SocialLinks(SocialLinksBlock),
    Paragraph(ParagraphBlock),
    Html(HtmlBlock),
}

/// Wire shape of [`Block`], decoded once nulls are cleared
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum TaggedBlock {
    Text(TextBlock),
    Heading(HeadingBlock),
    Image(ImageBlock),
    Button(ButtonBlock),
    Divider(DividerBlock),
    Spacer(SpacerBlock),
    Layout(LayoutBlock),
    SocialLinks(SocialLinksBlock),
    Paragraph(ParagraphBlock),
    Html(HtmlBlock),
}

impl From<TaggedBlock> for Block {
    fn from(tagged: TaggedBlock) -> Self {
        match tagged {
            TaggedBlock::Text(inner) => Block::Text(inner),
            TaggedBlock::Heading(inner) => Block::Heading(inner),
            TaggedBlock::Image(inner) => Block::Image(inner),
            TaggedBlock::Button(inner) => Block::Button(inner),
            TaggedBlock::Divider(inner) => Block::Divider(inner),
            TaggedBlock::Spacer(inner) => Block::Spacer(inner),
            TaggedBlock::Layout(inner) => Block::Layout(inner),
            TaggedBlock::SocialLinks(inner) => Block::SocialLinks(inner),
            TaggedBlock::Paragraph(inner) => Block::Paragraph(inner),
            TaggedBlock::Html(inner) => Block::Html(inner),
        }
    }
}

/// Fields sent as `null` (a cleared number input) are treated as absent
impl TryFrom<serde_json::Value> for Block {
    type Error = serde_json::Error;

    fn try_from(mut value: serde_json::Value) -> Result<Self, Self::Error> {
        if let Some(fields) = value.as_object_mut() {
            fields.retain(|_, field| !field.is_null());
            if let Some(links) = fields.get_mut("platforms").and_then(|p| p.as_array_mut()) {
                for link in links.iter_mut().filter_map(|l| l.as_object_mut()) {
                    link.retain(|_, field| !field.is_null());
                }
            }
        }
        serde_json::from_value::<TaggedBlock>(value).map(Block::from)
    }
}

macro_rules! each_variant {
    ($block:expr, $inner:ident => $body:expr) => {
        match $block {
            Block::Text($inner) => $body,
            Block::Heading($inner) => $body,
            Block::Image($inner) => $body,
            Block::Button($inner) => $body,
            Block::Divider($inner) => $body,
            Block::Spacer($inner) => $body,
            Block::Layout($inner) => $body,
            Block::SocialLinks($inner) => $body,
            Block::Paragraph($inner) => $body,
            Block::Html($inner) => $body,
        }
    };
}

impl Block {
    pub fn id(&self) -> &str {
        each_variant!(self, inner => &inner.id)
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        each_variant!(self, inner => inner.id = id.into())
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Text(_) => BlockKind::Text,
            Block::Heading(_) => BlockKind::Heading,
            Block::Image(_) => BlockKind::Image,
            Block::Button(_) => BlockKind::Button,
            Block::Divider(_) => BlockKind::Divider,
            Block::Spacer(_) => BlockKind::Spacer,
            Block::Layout(_) => BlockKind::Layout,
            Block::SocialLinks(_) => BlockKind::SocialLinks,
            Block::Paragraph(_) => BlockKind::Paragraph,
            Block::Html(_) => BlockKind::Html,
        }
    }

    pub fn styles(&self) -> Option<&StyleMap> {
        each_variant!(self, inner => inner.styles.as_ref())
    }

    pub fn as_layout(&self) -> Option<&LayoutBlock> {
        match self {
            Block::Layout(layout) => Some(layout),
            _ => None,
        }
    }

    pub fn as_layout_mut(&mut self) -> Option<&mut LayoutBlock> {
        match self {
            Block::Layout(layout) => Some(layout),
            _ => None,
        }
    }

    /// Direct children (layout columns flattened in column order)
    pub fn children(&self) -> impl Iterator<Item = &Block> {
        self.as_layout()
            .into_iter()
            .flat_map(|layout| layout.columns.iter().flatten())
    }

    /// Whether this block or any block nested inside it has `id`
    pub fn contains_id(&self, id: &str) -> bool {
        self.id() == id || self.children().any(|child| child.contains_id(id))
    }

    /// Deep copy with a fresh id on this block and every nested block
    pub fn with_fresh_ids(&self) -> Block {
        let mut copy = self.clone();
        crate::visitor::reassign_ids(&mut copy);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_fields_take_defaults() {
        let block: Block = serde_json::from_str(
            r#"{ "id": "h", "type": "heading", "text": "Hi", "level": 1, "fontSize": null, "styles": null }"#,
        )
        .unwrap();

        let Block::Heading(heading) = block else {
            panic!("expected a heading");
        };
        assert_eq!(heading.font_size, HeadingBlock::default().font_size);
        assert_eq!(heading.text, "Hi");
        assert!(heading.styles.is_none());
    }

    #[test]
    fn test_null_fields_in_nested_blocks_and_links() {
        let json = r#"{
            "id": "l",
            "type": "layout",
            "gap": null,
            "columns": [[{ "id": "sp", "type": "spacer", "height": null }], [{
                "id": "s",
                "type": "socialLinks",
                "iconSize": null,
                "platforms": [{ "type": "github", "url": null }]
            }]]
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();

        let layout = block.as_layout().unwrap();
        assert_eq!(layout.gap, LayoutBlock::default().gap);
        assert_eq!(
            layout.columns[0][0],
            Block::Spacer(SpacerBlock {
                id: "sp".to_string(),
                ..Default::default()
            })
        );
        let Block::SocialLinks(social) = &layout.columns[1][0] else {
            panic!("expected social links");
        };
        assert_eq!(social.icon_size, SocialLinksBlock::default().icon_size);
        assert_eq!(social.platforms[0].url, "");
    }

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.as_str().parse::<BlockKind>().unwrap(), kind);
        }
        assert!(matches!(
            "carousel".parse::<BlockKind>(),
            Err(ModelError::UnknownType(name)) if name == "carousel"
        ));
    }

    #[test]
    fn test_missing_presentation_fields_use_defaults() {
        let block: Block = serde_json::from_str(
            r#"{ "id": "b1", "type": "button", "text": "Go", "href": "https://example.com" }"#,
        )
        .unwrap();

        match block {
            Block::Button(button) => {
                assert_eq!(button.background_color, "#007bff");
                assert_eq!(button.padding, "12px 24px");
                assert_eq!(button.alignment, Align::Center);
            }
            other => panic!("Expected button, got {:?}", other),
        }
    }

    #[test]
    fn test_heading_level_serializes_as_number() {
        let heading = Block::Heading(HeadingBlock {
            id: "h".to_string(),
            text: "Hi".to_string(),
            ..Default::default()
        }
        .with_level(HeadingLevel::H1));

        let json = serde_json::to_value(&heading).unwrap();
        assert_eq!(json["type"], "heading");
        assert_eq!(json["level"], 1);
        assert_eq!(json["fontSize"], 32);
        assert_eq!(json["fontWeight"], 700);

        let bad = serde_json::from_str::<Block>(r#"{ "id": "h", "type": "heading", "level": 4 }"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_social_links_tag_is_camel_case() {
        let json = r#"{
            "id": "s1",
            "type": "socialLinks",
            "platforms": [{ "type": "github", "url": "https://github.com/mailblocks" }]
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.kind(), BlockKind::SocialLinks);
    }

    #[test]
    fn test_image_dimension_accepts_number_or_string() {
        let block: Block = serde_json::from_str(
            r#"{ "id": "i1", "type": "image", "src": "a.png", "alt": "A", "width": 300, "height": "auto" }"#,
        )
        .unwrap();
        let Block::Image(image) = block else {
            panic!("Expected image");
        };
        assert_eq!(image.width, Dimension::Px(300.0));
        assert_eq!(image.width.css(), "300px");
        assert_eq!(image.width.attr(), "300");
        assert_eq!(image.height.css(), "auto");
    }

    #[test]
    fn test_contains_id_searches_columns() {
        let child = Block::Spacer(SpacerBlock {
            id: "child".to_string(),
            ..Default::default()
        });
        let layout = Block::Layout(LayoutBlock {
            id: "layout".to_string(),
            columns: vec![vec![], vec![child]],
            ..Default::default()
        });

        assert!(layout.contains_id("layout"));
        assert!(layout.contains_id("child"));
        assert!(!layout.contains_id("other"));
    }

    #[test]
    fn test_column_width_falls_back_to_equal_share() {
        let layout = LayoutBlock {
            columns: vec![vec![], vec![], vec![]],
            column_widths: vec!["50%".to_string()],
            ..Default::default()
        };
        assert_eq!(layout.column_width(0), "50%");
        assert_eq!(layout.column_width(1), "33.33%");
    }
}
