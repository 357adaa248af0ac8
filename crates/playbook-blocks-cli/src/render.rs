//! Turns scanned segments and parsed blocks into styled terminal lines.

use playbook_blocks_config::{Accent, Palette, Theme};
use playbook_blocks_engine::document::{LayoutContent, LayoutSegment, Segment};
use playbook_blocks_engine::layout::{ImageBlock, ImageLoadState, ImagePresentation, Layout};
use playbook_blocks_engine::parsing::kinds::{
    Callout, EmailPreview, HeaderField, LineRole, PagerAlert, ParsedList, TerminalSession,
};
use playbook_blocks_engine::{BlockContent, ParsedBlock, parse_block};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use std::path::Path;

const CHECK_MARK: &str = "✓";
const CROSS_MARK: &str = "✗";
/// Lines continuation text up under the command after a `$ ` prompt.
const CONTINUATION_INDENT: &str = "  ";

pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Red => Color::Red,
        Accent::Amber => Color::Rgb(245, 158, 11),
        Accent::Yellow => Color::Yellow,
        Accent::Emerald => Color::Rgb(16, 185, 129),
        Accent::Green => Color::Green,
        Accent::Blue => Color::Blue,
        Accent::Violet => Color::Rgb(139, 92, 246),
        Accent::Slate => Color::Rgb(148, 163, 184),
        Accent::Gray => Color::Gray,
        Accent::White => Color::White,
    }
}

fn accent(palette: &Palette) -> Style {
    Style::default().fg(accent_color(palette.accent))
}

fn text(palette: &Palette) -> Style {
    Style::default().fg(accent_color(palette.text))
}

fn heading(palette: &Palette, title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        accent(palette).add_modifier(Modifier::BOLD),
    ))
}

pub fn render_segment(segment: &Segment, theme: &Theme, base_dir: &Path) -> Vec<Line<'static>> {
    match segment {
        Segment::Markdown { text } => text.lines().map(|l| Line::raw(l.to_string())).collect(),
        Segment::Block(block) => render_block(&parse_block(block), theme),
        Segment::Layout(layout) => {
            let parts = LayoutParts::new(layout, theme, base_dir);
            let mut lines = vec![parts.header.clone()];
            let (first, second) = parts.in_reading_order();
            let gap = !first.is_empty() && !second.is_empty();
            lines.extend(first);
            if gap {
                lines.push(Line::default());
            }
            lines.extend(second);
            lines
        }
    }
}

/// A layout segment rendered as separate columns.
pub struct LayoutParts {
    pub layout: Layout,
    pub header: Line<'static>,
    pub content: Vec<Line<'static>>,
    pub text: Vec<Line<'static>>,
}

impl LayoutParts {
    pub fn new(segment: &LayoutSegment, theme: &Theme, base_dir: &Path) -> Self {
        let layout = segment.layout;
        let header = Line::styled(
            format!(
                "[{} {} {}]",
                layout.mode,
                if layout.content_first() { "left" } else { "right" },
                layout.size.name()
            ),
            Style::default().add_modifier(Modifier::DIM),
        );

        let content = match &segment.content {
            LayoutContent::Diagram { source } => fenced("mermaid", source),
            LayoutContent::Block(block) => render_block(&parse_block(block), theme),
            LayoutContent::Code { language, code } => fenced(language, code),
            LayoutContent::Image(image) => render_image(image, image_state(&image.src, base_dir)),
        };
        let text = segment
            .text
            .lines()
            .map(|l| Line::raw(l.to_string()))
            .collect();

        Self {
            layout,
            header,
            content,
            text,
        }
    }

    /// Content and text, with the content first when it sits on the left.
    pub fn in_reading_order(self) -> (Vec<Line<'static>>, Vec<Line<'static>>) {
        if self.layout.content_first() {
            (self.content, self.text)
        } else {
            (self.text, self.content)
        }
    }
}

/// Remote images are assumed to load; local ones must exist under `base_dir`.
fn image_state(src: &str, base_dir: &Path) -> ImageLoadState {
    if src.starts_with("http://") || src.starts_with("https://") {
        return ImageLoadState::Loaded;
    }
    let local = base_dir.join(src.trim_start_matches('/'));
    if local.is_file() {
        ImageLoadState::Loaded
    } else {
        ImageLoadState::Failed
    }
}

fn render_image(image: &ImageBlock, state: ImageLoadState) -> Vec<Line<'static>> {
    let dim = Style::default().add_modifier(Modifier::DIM);
    match image.presentation(state) {
        ImagePresentation::Skeleton => vec![Line::styled("🖼  loading…", dim)],
        ImagePresentation::Picture { src, alt, caption } => {
            let mut out = vec![Line::from(vec![
                Span::raw("🖼  "),
                Span::styled(
                    if alt.is_empty() { src } else { alt }.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" ({src})"), dim),
            ])];
            if let Some(caption) = caption {
                out.push(Line::styled(
                    caption.to_string(),
                    Style::default().add_modifier(Modifier::ITALIC),
                ));
            }
            out
        }
        ImagePresentation::Failed { src } => vec![Line::styled(
            format!("🖼  image unavailable: {src}"),
            Style::default().fg(Color::Red),
        )],
    }
}

fn fenced(language: &str, code: &str) -> Vec<Line<'static>> {
    let dim = Style::default().add_modifier(Modifier::DIM);
    let mut lines = vec![Line::styled(format!("```{language}"), dim)];
    lines.extend(code.lines().map(|l| Line::raw(l.to_string())));
    lines.push(Line::styled("```", dim));
    lines
}

pub fn render_block(block: &ParsedBlock, theme: &Theme) -> Vec<Line<'static>> {
    match &block.content {
        BlockContent::Terminal(session) => render_terminal(session, &theme.terminal()),
        BlockContent::Email(preview) => render_email(preview, &theme.email(preview.variant)),
        BlockContent::Checklist(list) => render_list(list, CHECK_MARK, &theme.checklist()),
        BlockContent::MistakeList(list) => render_list(list, CROSS_MARK, &theme.mistakes()),
        BlockContent::PagerAlert(alert) => render_pager(alert, &theme.pager(alert.variant)),
        BlockContent::Callout(callout) => render_callout(callout, &theme.callout(callout.variant)),
    }
}

/// Prompt glyphs take the accent colour and command text is bold. Comments
/// are dimmed, output is plain, and spacing lines render empty.
fn render_terminal(session: &TerminalSession, palette: &Palette) -> Vec<Line<'static>> {
    let command = text(palette).add_modifier(Modifier::BOLD);
    let mut lines = vec![heading(palette, &format!("▍{}", session.title))];

    for line in &session.lines {
        if line.is_spacing() {
            lines.push(Line::default());
            continue;
        }
        let rendered = match line.role {
            LineRole::Prompt => {
                let glyph = line.prompt_glyph().unwrap_or('$');
                Line::from(vec![
                    Span::styled(format!("{glyph} "), accent(palette)),
                    Span::styled(line.command_text().unwrap_or("").to_string(), command),
                ])
            }
            LineRole::Continuation => Line::from(vec![
                Span::raw(CONTINUATION_INDENT),
                Span::styled(line.text.trim_start().to_string(), command),
            ]),
            LineRole::Comment => Line::styled(
                line.text.clone(),
                Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC),
            ),
            LineRole::Blank | LineRole::Plain => Line::styled(line.text.clone(), text(palette)),
        };
        lines.push(rendered);
    }
    lines
}

fn render_email(preview: &EmailPreview, palette: &Palette) -> Vec<Line<'static>> {
    let email = &preview.email;
    let bar = Style::default()
        .bg(accent_color(palette.accent))
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut header = vec![Span::styled(
        format!(" ✉ {} ", palette.label.as_deref().unwrap_or("EMAIL")),
        bar,
    )];
    if let Some(date) = email.header(HeaderField::Date) {
        header.push(Span::styled(
            format!("  {date}"),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }
    let mut lines = vec![Line::from(header)];

    for (field, value) in email.present_headers() {
        if field == HeaderField::Date {
            continue;
        }
        let value_style = if field == HeaderField::Subject {
            text(palette).add_modifier(Modifier::BOLD)
        } else {
            text(palette)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", field.name()),
                Style::default().add_modifier(Modifier::DIM),
            ),
            Span::styled(value.to_string(), value_style),
        ]));
    }
    if !email.body.is_empty() {
        lines.push(Line::default());
        lines.extend(
            email
                .body
                .lines()
                .map(|l| Line::styled(l.to_string(), text(palette))),
        );
    }
    lines
}

fn render_list(list: &ParsedList, mark: &str, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![heading(palette, &list.title)];
    lines.extend(list.items.iter().map(|item| {
        Line::from(vec![
            Span::styled(format!("{mark} "), accent(palette)),
            Span::styled(item.clone(), text(palette)),
        ])
    }));
    lines
}

fn render_pager(alert: &PagerAlert, palette: &Palette) -> Vec<Line<'static>> {
    let mut indicator = accent(palette);
    if palette.pulse {
        indicator = indicator.add_modifier(Modifier::SLOW_BLINK);
    }

    let mut header = vec![
        Span::styled("● ", indicator),
        Span::styled(
            alert.source.clone(),
            accent(palette).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(label) = &palette.label {
        header.push(Span::styled(format!(" [{label}]"), accent(palette)));
    }
    if let Some(time) = &alert.time {
        header.push(Span::styled(
            format!("  {time}"),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    let mut lines = vec![
        Line::from(header),
        Line::styled(
            alert.content.title.clone(),
            text(palette).add_modifier(Modifier::BOLD),
        ),
    ];
    lines.extend(
        alert
            .content
            .body
            .lines()
            .map(|l| Line::styled(l.to_string(), text(palette))),
    );
    lines
}

fn render_callout(callout: &Callout, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![heading(palette, &format!("▌ {}", callout.title))];
    lines.extend(callout.paragraphs.iter().map(|p| {
        if p.trim().is_empty() {
            Line::default()
        } else {
            Line::from(vec![
                Span::styled("▌ ", accent(palette)),
                Span::styled(p.clone(), text(palette)),
            ])
        }
    }));
    lines
}
