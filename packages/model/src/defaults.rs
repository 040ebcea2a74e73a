//! Default visual properties per block type.

use crate::block::{Align, DividerStyle, HeadingLevel, IconStyle, LayoutDirection, TextAlign};

pub struct TextDefaults {
    pub font_size: u32,
    pub font_family: &'static str,
    pub color: &'static str,
    pub alignment: TextAlign,
    pub line_height: f64,
}

pub struct ParagraphDefaults {
    pub font_size: u32,
    pub font_family: &'static str,
    pub color: &'static str,
    pub alignment: TextAlign,
    pub line_height: f64,
    pub background_color: &'static str,
}

pub struct LevelDefaults {
    pub font_size: u32,
    pub font_weight: u32,
}

pub struct HeadingDefaults {
    pub h1: LevelDefaults,
    pub h2: LevelDefaults,
    pub h3: LevelDefaults,
    pub font_family: &'static str,
    pub color: &'static str,
    pub alignment: Align,
}

impl HeadingDefaults {
    pub fn level(&self, level: HeadingLevel) -> &LevelDefaults {
        match level {
            HeadingLevel::H1 => &self.h1,
            HeadingLevel::H2 => &self.h2,
            HeadingLevel::H3 => &self.h3,
        }
    }
}

pub struct ImageDefaults {
    pub width: &'static str,
    pub height: &'static str,
    pub alignment: Align,
    pub border_radius: u32,
    pub alt: &'static str,
}

pub struct ButtonDefaults {
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub border_radius: u32,
    pub padding: &'static str,
    pub font_size: u32,
    pub alignment: Align,
    pub width: &'static str,
}

pub struct DividerDefaults {
    pub style: DividerStyle,
    pub color: &'static str,
    pub thickness: u32,
    pub width: &'static str,
    pub margin_top: u32,
    pub margin_bottom: u32,
}

pub struct SpacerDefaults {
    pub height: u32,
}

pub struct LayoutDefaults {
    pub column_widths: &'static [&'static str],
    pub gap: u32,
    pub background_color: &'static str,
    pub padding: &'static str,
    pub direction: LayoutDirection,
    pub stack_on_mobile: bool,
}

pub struct SocialLinksDefaults {
    pub icon_size: u32,
    pub spacing: u32,
    pub alignment: Align,
    pub icon_style: IconStyle,
}

pub struct HtmlDefaults {
    pub min_height: u32,
}

pub const TEXT: TextDefaults = TextDefaults {
    font_size: 14,
    font_family: "Arial, sans-serif",
    color: "#333333",
    alignment: TextAlign::Left,
    line_height: 1.5,
};

pub const HEADING: HeadingDefaults = HeadingDefaults {
    h1: LevelDefaults { font_size: 32, font_weight: 700 },
    h2: LevelDefaults { font_size: 24, font_weight: 600 },
    h3: LevelDefaults { font_size: 18, font_weight: 600 },
    font_family: "Arial, sans-serif",
    color: "#333333",
    alignment: Align::Left,
};

pub const IMAGE: ImageDefaults = ImageDefaults {
    width: "100%",
    height: "auto",
    alignment: Align::Center,
    border_radius: 0,
    alt: "Image",
};

pub const BUTTON: ButtonDefaults = ButtonDefaults {
    background_color: "#007bff",
    text_color: "#ffffff",
    border_radius: 4,
    padding: "12px 24px",
    font_size: 16,
    alignment: Align::Center,
    width: "auto",
};

pub const DIVIDER: DividerDefaults = DividerDefaults {
    style: DividerStyle::Solid,
    color: "#e0e0e0",
    thickness: 1,
    width: "100%",
    margin_top: 16,
    margin_bottom: 16,
};

pub const SPACER: SpacerDefaults = SpacerDefaults { height: 20 };

pub const LAYOUT: LayoutDefaults = LayoutDefaults {
    column_widths: &["50%", "50%"],
    gap: 16,
    background_color: "transparent",
    padding: "0",
    direction: LayoutDirection::Horizontal,
    stack_on_mobile: true,
};

pub const SOCIAL_LINKS: SocialLinksDefaults = SocialLinksDefaults {
    icon_size: 32,
    spacing: 12,
    alignment: Align::Center,
    icon_style: IconStyle::Circular,
};

pub const PARAGRAPH: ParagraphDefaults = ParagraphDefaults {
    font_size: 16,
    font_family: "Arial, sans-serif",
    color: "#333333",
    alignment: TextAlign::Left,
    line_height: 1.6,
    background_color: "transparent",
};

pub const HTML: HtmlDefaults = HtmlDefaults { min_height: 100 };

/// Font stacks offered by the property panel
pub const FONT_FAMILIES: [&str; 7] = [
    "Arial, sans-serif",
    "Helvetica, sans-serif",
    "Georgia, serif",
    "Times New Roman, serif",
    "Courier New, monospace",
    "Verdana, sans-serif",
    "Trebuchet MS, sans-serif",
];

/// Named swatches offered by the colour pickers
pub const COLORS: [(&str, &str); 10] = [
    ("primary", "#007bff"),
    ("secondary", "#6c757d"),
    ("success", "#28a745"),
    ("danger", "#dc3545"),
    ("warning", "#ffc107"),
    ("info", "#17a2b8"),
    ("light", "#f8f9fa"),
    ("dark", "#343a40"),
    ("white", "#ffffff"),
    ("black", "#000000"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fonts_are_offered() {
        for family in [TEXT.font_family, HEADING.font_family, PARAGRAPH.font_family] {
            assert!(FONT_FAMILIES.contains(&family), "{} not offered", family);
        }
    }

    #[test]
    fn test_palette_is_hex() {
        for (name, hex) in COLORS {
            assert!(hex.len() == 7 && hex.starts_with('#'), "{} is {}", name, hex);
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
        assert!(COLORS.iter().any(|(_, hex)| *hex == BUTTON.background_color));
    }
}
