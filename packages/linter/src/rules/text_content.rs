use crate::diagnostic::Finding;
use crate::rules::LintRule;
use mailblocks_model::Block;
use regex::Regex;
use std::sync::OnceLock;

/// Text and paragraph blocks should say something
pub struct TextContentRule;

impl LintRule for TextContentRule {
    fn name(&self) -> &'static str {
        "text-content"
    }

    fn description(&self) -> &'static str {
        "Flag text and paragraph blocks with no content"
    }

    fn check_block(&self, block: &Block) -> Vec<Finding> {
        let (content, message) = match block {
            Block::Text(text) => (&text.content, "Text component is empty"),
            Block::Paragraph(paragraph) => (&paragraph.content, "Paragraph component is empty"),
            _ => return Vec::new(),
        };

        if is_empty_content(content) {
            vec![Finding::warning(self.name(), block, message)]
        } else {
            Vec::new()
        }
    }
}

/// Blank, or what an emptied rich-text editor leaves behind (`<p></p>`, `<p><br></p>`)
fn is_empty_content(content: &str) -> bool {
    static EMPTY: OnceLock<Regex> = OnceLock::new();
    let re = EMPTY.get_or_init(|| {
        Regex::new(r"^\s*(<p>\s*(<br\s*/?>)?\s*</p>)?\s*$").expect("valid empty-content pattern")
    });
    re.is_match(content)
}
