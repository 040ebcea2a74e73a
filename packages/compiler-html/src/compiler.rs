use mailblocks_model::*;
use serde_json::Value;
use tracing::info;

/// Options for HTML export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

impl ExportOptions {
    /// Single-line output with no indentation
    pub fn compact() -> Self {
        Self {
            pretty: false,
            indent: String::new(),
        }
    }
}

/// Class applied to layout columns that collapse on narrow screens
const STACK_CLASS: &str = "mb-stack";

const TABLE_ATTRS: &str = r#"role="presentation" cellspacing="0" cellpadding="0" border="0""#;

struct Context<'a> {
    options: &'a ExportOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a ExportOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    /// Open `<tag ...>` on its own line and indent
    fn open(&mut self, tag: &str) {
        self.add_line(tag);
        self.indent();
    }

    /// Dedent and close with `</tag>`
    fn close(&mut self, tag: &str) {
        self.dedent();
        self.add_line(tag);
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Inline CSS declarations, rendered in insertion order
#[derive(Default)]
struct Declarations(Vec<(String, String)>);

impl Declarations {
    fn new() -> Self {
        Self::default()
    }

    fn add(mut self, property: &str, value: impl ToString) -> Self {
        self.0.push((property.to_string(), value.to_string()));
        self
    }

    /// Append a block's free-form `styles` overrides
    fn with_overrides(mut self, styles: Option<&StyleMap>) -> Self {
        for (key, value) in styles.into_iter().flatten() {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            self.0.push((kebab_case(key), value));
        }
        self
    }

    fn attr(&self) -> String {
        let css = self
            .0
            .iter()
            .map(|(property, value)| format!("{}: {};", property, value))
            .collect::<Vec<_>>()
            .join(" ");
        format!("style=\"{}\"", escape_html(&css))
    }
}

/// Export a newsletter as a standalone email HTML document (pretty printed)
pub fn export_document(name: &str, components: &[Block]) -> String {
    export_document_with(name, components, &ExportOptions::default())
}

/// Export a newsletter as a standalone email HTML document
pub fn export_document_with(name: &str, components: &[Block], options: &ExportOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.open("<html lang=\"en\">");

    compile_head(name, &mut ctx);

    ctx.open("<body style=\"margin: 0; padding: 0; background-color: #f4f4f4;\">");
    ctx.open(&format!(
        "<table {} width=\"100%\" style=\"background-color: #f4f4f4;\">",
        TABLE_ATTRS
    ));
    ctx.open("<tr>");
    ctx.open("<td align=\"center\" style=\"padding: 20px 0;\">");
    ctx.open(&format!(
        "<table {} width=\"600\" style=\"background-color: #ffffff; max-width: 600px;\">",
        TABLE_ATTRS
    ));
    ctx.open("<tr>");
    ctx.open("<td style=\"padding: 0;\">");

    for block in components {
        compile_block(block, &mut ctx);
    }

    ctx.close("</td>");
    ctx.close("</tr>");
    ctx.close("</table>");
    ctx.close("</td>");
    ctx.close("</tr>");
    ctx.close("</table>");
    ctx.close("</body>");
    ctx.close("</html>");

    let html = ctx.get_output();
    info!(
        name = name,
        components = components.len(),
        bytes = html.len(),
        "Exported newsletter"
    );
    html
}

/// Render a single block as a table fragment
pub fn export_block(block: &Block, options: &ExportOptions) -> String {
    let mut ctx = Context::new(options);
    compile_block(block, &mut ctx);
    ctx.get_output()
}

fn compile_head(name: &str, ctx: &mut Context) {
    ctx.open("<head>");

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line("<meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(name)));

    ctx.open("<style>");
    ctx.add_line("body { margin: 0; padding: 0; font-family: Arial, sans-serif; -webkit-text-size-adjust: 100%; -ms-text-size-adjust: 100%; }");
    ctx.add_line("table { border-collapse: collapse; mso-table-lspace: 0pt; mso-table-rspace: 0pt; }");
    ctx.add_line("img { border: 0; height: auto; line-height: 100%; outline: none; text-decoration: none; -ms-interpolation-mode: bicubic; }");
    ctx.add_line(&format!(
        "@media only screen and (max-width: 620px) {{ .{} {{ display: block !important; width: 100% !important; }} }}",
        STACK_CLASS
    ));
    ctx.close("</style>");

    ctx.close("</head>");
}

/// Outer single-cell table every block renders into
fn open_block_table(ctx: &mut Context, cell: &Declarations) {
    ctx.open(&format!("<table {} width=\"100%\">", TABLE_ATTRS));
    ctx.open("<tr>");
    ctx.open(&format!("<td {}>", cell.attr()));
}

fn close_block_table(ctx: &mut Context) {
    ctx.close("</td>");
    ctx.close("</tr>");
    ctx.close("</table>");
}

fn compile_block(block: &Block, ctx: &mut Context) {
    match block {
        Block::Text(text) => compile_text(
            &text.content,
            Declarations::new()
                .add("padding", "8px")
                .add("font-family", &text.font_family)
                .add("font-size", px(text.font_size))
                .add("color", &text.color)
                .add("line-height", text.line_height)
                .add("text-align", text.alignment.as_str())
                .with_overrides(text.styles.as_ref()),
            ctx,
        ),
        Block::Paragraph(paragraph) => compile_text(
            &paragraph.content,
            Declarations::new()
                .add("padding", "8px")
                .add("font-family", &paragraph.font_family)
                .add("font-size", px(paragraph.font_size))
                .add("color", &paragraph.color)
                .add("line-height", paragraph.line_height)
                .add("text-align", paragraph.alignment.as_str())
                .add("background-color", or_transparent(&paragraph.background_color))
                .with_overrides(paragraph.styles.as_ref()),
            ctx,
        ),
        Block::Heading(heading) => compile_heading(heading, ctx),
        Block::Image(image) => compile_image(image, ctx),
        Block::Button(button) => compile_button(button, ctx),
        Block::Divider(divider) => compile_divider(divider, ctx),
        Block::Spacer(spacer) => compile_spacer(spacer, ctx),
        Block::Layout(layout) => compile_layout(layout, ctx),
        Block::SocialLinks(social) => compile_social_links(social, ctx),
        Block::Html(html) => {
            open_block_table(
                ctx,
                &Declarations::new()
                    .add("padding", 0)
                    .with_overrides(html.styles.as_ref()),
            );
            add_raw(&html.content, ctx);
            close_block_table(ctx);
        }
    }
}

/// Stored rich-text HTML goes out as-is
fn compile_text(content: &str, cell: Declarations, ctx: &mut Context) {
    open_block_table(ctx, &cell);
    add_raw(content, ctx);
    close_block_table(ctx);
}

fn add_raw(content: &str, ctx: &mut Context) {
    if !content.is_empty() {
        ctx.add_line(content);
    }
}

fn compile_heading(heading: &HeadingBlock, ctx: &mut Context) {
    let tag = format!("h{}", heading.level.number());
    let style = Declarations::new()
        .add("margin", 0)
        .add("font-family", &heading.font_family)
        .add("font-size", px(heading.font_size))
        .add("color", &heading.color)
        .add("text-align", heading.alignment.as_str())
        .add("font-weight", heading.font_weight);

    open_block_table(
        ctx,
        &Declarations::new()
            .add("padding", "8px")
            .with_overrides(heading.styles.as_ref()),
    );
    ctx.add_line(&format!(
        "<{tag} {}>{}</{tag}>",
        style.attr(),
        escape_html(&heading.text),
        tag = tag
    ));
    close_block_table(ctx);
}

fn compile_image(image: &ImageBlock, ctx: &mut Context) {
    open_block_table(
        ctx,
        &Declarations::new()
            .add("padding", "8px")
            .add("text-align", image.alignment.as_str())
            .with_overrides(image.styles.as_ref()),
    );

    // unset images leave the cell empty
    if !image.src.is_empty() {
        let style = Declarations::new()
            .add("display", "block")
            .add("width", image.width.css())
            .add("height", image.height.css())
            .add("border-radius", px(image.border_radius))
            .add("max-width", "100%");
        let img = format!(
            "<img src=\"{}\" alt=\"{}\" width=\"{}\" {} />",
            escape_html(&image.src),
            escape_html(&image.alt),
            escape_html(&image.width.attr()),
            style.attr()
        );

        match image.link_url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => {
                ctx.open(&format!("<a href=\"{}\">", escape_html(url)));
                ctx.add_line(&img);
                ctx.close("</a>");
            }
            None => ctx.add_line(&img),
        }
    }

    close_block_table(ctx);
}

fn compile_button(button: &ButtonBlock, ctx: &mut Context) {
    let margin = match button.alignment {
        Align::Center => "0 auto",
        Align::Right => "0 0 0 auto",
        Align::Left => "0",
    };
    let mut table_style = Declarations::new().add("margin", margin);
    if !button.width.is_empty() && button.width != "auto" {
        table_style = table_style.add("width", &button.width);
    }

    let anchor_style = Declarations::new()
        .add("display", "inline-block")
        .add("padding", &button.padding)
        .add("font-family", "Arial, sans-serif")
        .add("font-size", px(button.font_size))
        .add("color", &button.text_color)
        .add("text-decoration", "none")
        .add("border-radius", px(button.border_radius))
        .add("font-weight", 600);

    open_block_table(
        ctx,
        &Declarations::new()
            .add("padding", "16px 8px")
            .add("text-align", button.alignment.as_str())
            .with_overrides(button.styles.as_ref()),
    );
    ctx.open(&format!("<table {} {}>", TABLE_ATTRS, table_style.attr()));
    ctx.open("<tr>");
    ctx.open(&format!(
        "<td {}>",
        Declarations::new()
            .add("border-radius", px(button.border_radius))
            .add("background-color", &button.background_color)
            .attr()
    ));
    ctx.add_line(&format!(
        "<a href=\"{}\" {}>{}</a>",
        escape_html(&button.href),
        anchor_style.attr(),
        escape_html(&button.text)
    ));
    ctx.close("</td>");
    ctx.close("</tr>");
    ctx.close("</table>");
    close_block_table(ctx);
}

fn compile_divider(divider: &DividerBlock, ctx: &mut Context) {
    open_block_table(
        ctx,
        &Declarations::new()
            .add(
                "padding",
                format!("{}px 8px {}px 8px", divider.margin_top, divider.margin_bottom),
            )
            .with_overrides(divider.styles.as_ref()),
    );
    ctx.open(&format!(
        "<table {} width=\"{}\" style=\"margin: 0 auto;\">",
        TABLE_ATTRS,
        escape_html(&divider.width)
    ));
    ctx.open("<tr>");
    ctx.add_line(&format!(
        "<td {}></td>",
        Declarations::new()
            .add(
                "border-top",
                format!("{}px {} {}", divider.thickness, divider.style.as_str(), divider.color),
            )
            .attr()
    ));
    ctx.close("</tr>");
    ctx.close("</table>");
    close_block_table(ctx);
}

fn compile_spacer(spacer: &SpacerBlock, ctx: &mut Context) {
    let cell = Declarations::new()
        .add("height", px(spacer.height))
        .add("line-height", px(spacer.height))
        .add("font-size", 0)
        .with_overrides(spacer.styles.as_ref());

    ctx.open(&format!("<table {} width=\"100%\">", TABLE_ATTRS));
    ctx.open("<tr>");
    ctx.add_line(&format!("<td {}>&nbsp;</td>", cell.attr()));
    ctx.close("</tr>");
    ctx.close("</table>");
}

fn compile_layout(layout: &LayoutBlock, ctx: &mut Context) {
    let half_gap = layout.gap as f64 / 2.0;

    ctx.open(&format!(
        "<table {} width=\"100%\" {}>",
        TABLE_ATTRS,
        Declarations::new()
            .add("background-color", or_transparent(&layout.background_color))
            .attr()
    ));
    ctx.open("<tr>");
    ctx.open(&format!(
        "<td {}>",
        Declarations::new()
            .add("padding", if layout.padding.is_empty() { "0" } else { layout.padding.as_str() })
            .with_overrides(layout.styles.as_ref())
            .attr()
    ));
    ctx.open(&format!("<table {} width=\"100%\">", TABLE_ATTRS));

    match layout.direction {
        LayoutDirection::Horizontal => {
            ctx.open("<tr>");
            for (index, column) in layout.columns.iter().enumerate() {
                let class = if layout.stack_on_mobile {
                    format!(" class=\"{}\"", STACK_CLASS)
                } else {
                    String::new()
                };
                ctx.open(&format!(
                    "<td valign=\"top\"{} {}>",
                    class,
                    Declarations::new()
                        .add("width", layout.column_width(index))
                        .add("padding", format!("{}px", half_gap))
                        .attr()
                ));
                compile_column(column, "<!-- Empty column -->", ctx);
                ctx.close("</td>");
            }
            ctx.close("</tr>");
        }
        LayoutDirection::Vertical => {
            for column in &layout.columns {
                ctx.open("<tr>");
                ctx.open(&format!(
                    "<td {}>",
                    Declarations::new()
                        .add("padding", format!("{}px 0", half_gap))
                        .attr()
                ));
                compile_column(column, "<!-- Empty row -->", ctx);
                ctx.close("</td>");
                ctx.close("</tr>");
            }
        }
    }

    ctx.close("</table>");
    ctx.close("</td>");
    ctx.close("</tr>");
    ctx.close("</table>");
}

fn compile_column(column: &[Block], placeholder: &str, ctx: &mut Context) {
    if column.is_empty() {
        ctx.add_line(placeholder);
        return;
    }
    for block in column {
        compile_block(block, ctx);
    }
}

fn compile_social_links(social: &SocialLinksBlock, ctx: &mut Context) {
    if social.platforms.is_empty() {
        return;
    }

    let radius = match social.icon_style {
        IconStyle::Circular => "50%",
        IconStyle::Square => "8px",
    };

    open_block_table(
        ctx,
        &Declarations::new()
            .add("padding", "16px 8px")
            .add("text-align", social.alignment.as_str())
            .with_overrides(social.styles.as_ref()),
    );
    for link in &social.platforms {
        ctx.open(&format!(
            "<a href=\"{}\" {}>",
            escape_html(&link.url),
            Declarations::new()
                .add("display", "inline-block")
                .add("margin", format!("0 {}px", social.spacing as f64 / 2.0))
                .attr()
        ));
        ctx.add_line(&format!(
            "<img src=\"{}\" alt=\"{}\" width=\"{size}\" height=\"{size}\" {} />",
            link.platform.icon_url(),
            link.platform.as_str(),
            Declarations::new()
                .add("display", "block")
                .add("border-radius", radius)
                .add("width", px(social.icon_size))
                .add("height", px(social.icon_size))
                .attr(),
            size = social.icon_size
        ));
        ctx.close("</a>");
    }
    close_block_table(ctx);
}

fn px(value: u32) -> String {
    format!("{}px", value)
}

fn or_transparent(color: &str) -> &str {
    if color.is_empty() {
        "transparent"
    } else {
        color
    }
}

/// `backgroundColor` → `background-color`
fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
