//! Page model and cursor-driven page writer.
//!
//! The composer never draws into a PDF directly. It produces a [`Layout`]:
//! an ordered list of draw commands per page, in points, with the origin at
//! the top-left corner of the page and `y` growing downwards. A
//! [`RenderBackend`](super::traits::RenderBackend) turns that into bytes.

use serde::Serialize;

use super::text::{text_width, wrap_text, Font};

/// A4 portrait, in points.
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;
pub const MARGIN_X: f32 = 50.0;
pub const TOP_MARGIN: f32 = 60.0;
/// Space kept free at the bottom of each page for the footer.
pub const BOTTOM_MARGIN: f32 = 70.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN_X;
/// Lowest vertical position content may reach.
pub const CONTENT_BOTTOM: f32 = PAGE_HEIGHT - BOTTOM_MARGIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const WHITE: Color = Color(255, 255, 255);
    pub const GREY: Color = Color(110, 110, 110);
    pub const LIGHT: Color = Color(241, 245, 249);
    pub const BRAND: Color = Color(30, 64, 175);
}

/// Which pass produced a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Content,
    Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DrawCommand {
    /// Single line of text; `y` is the baseline.
    Text {
        x: f32,
        y: f32,
        text: String,
        font: Font,
        size: f32,
        color: Color,
        layer: Layer,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Color,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Color>,
        stroke: Option<Color>,
    },
}

impl DrawCommand {
    pub fn layer(&self) -> Layer {
        match self {
            Self::Text { layer, .. } => *layer,
            Self::Line { .. } | Self::Rect { .. } => Layer::Content,
        }
    }

    /// Lowest vertical position touched by this command.
    pub fn bottom(&self) -> f32 {
        match self {
            Self::Text { y, .. } => *y,
            Self::Line { y1, y2, .. } => y1.max(*y2),
            Self::Rect { y, height, .. } => y + height,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub commands: Vec<DrawCommand>,
}

impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(DrawCommand::text)
    }

    /// Footer lines stamped on this page, top to bottom.
    pub fn footer_lines(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter(|command| command.layer() == Layer::Footer)
            .filter_map(DrawCommand::text)
            .collect()
    }
}

/// A section heading and the 1-based page it starts on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineEntry {
    pub title: String,
    pub page: usize,
}

/// Fully laid-out document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub pages: Vec<Page>,
    pub outline: Vec<OutlineEntry>,
}

impl Layout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn section_titles(&self) -> Vec<&str> {
        self.outline.iter().map(|entry| entry.title.as_str()).collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.pages
            .iter()
            .flat_map(Page::texts)
            .any(|text| text.contains(needle))
    }
}

/// Vertical cursor and current page of a layout in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    pub cursor_y: f32,
    pub current_page: usize,
}

/// Accumulates pages, breaking to a new one whenever the next block would
/// cross [`CONTENT_BOTTOM`].
#[derive(Debug)]
pub struct PageWriter {
    pages: Vec<Page>,
    outline: Vec<OutlineEntry>,
    state: RenderState,
}

impl Default for PageWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PageWriter {
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            outline: Vec::new(),
            state: RenderState {
                cursor_y: TOP_MARGIN,
                current_page: 0,
            },
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn cursor(&self) -> f32 {
        self.state.cursor_y
    }

    pub fn set_cursor(&mut self, y: f32) {
        self.state.cursor_y = y;
    }

    pub fn advance(&mut self, dy: f32) {
        self.state.cursor_y += dy;
    }

    pub fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.state = RenderState {
            cursor_y: TOP_MARGIN,
            current_page: self.pages.len() - 1,
        };
    }

    /// Start a new page unless `needed` points still fit below the cursor.
    /// Returns whether a break happened.
    pub fn ensure_space(&mut self, needed: f32) -> bool {
        if self.state.cursor_y + needed > CONTENT_BOTTOM {
            self.new_page();
            return true;
        }
        false
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.pages[self.state.current_page].commands.push(command);
    }

    pub fn text_at(
        &mut self,
        x: f32,
        y: f32,
        text: impl Into<String>,
        font: Font,
        size: f32,
        color: Color,
    ) {
        self.push(DrawCommand::Text {
            x,
            y,
            text: text.into(),
            font,
            size,
            color,
            layer: Layer::Content,
        });
    }

    /// Text whose right edge sits on the right margin.
    pub fn text_right(&mut self, y: f32, text: &str, font: Font, size: f32, color: Color) {
        let x = PAGE_WIDTH - MARGIN_X - text_width(text, font, size);
        self.text_at(x, y, text, font, size, color);
    }

    pub fn rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Color>,
        stroke: Option<Color>,
    ) {
        self.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        });
    }

    pub fn rule(&mut self, y: f32, color: Color) {
        self.push(DrawCommand::Line {
            x1: MARGIN_X,
            y1: y,
            x2: PAGE_WIDTH - MARGIN_X,
            y2: y,
            width: 0.5,
            color,
        });
    }

    /// One line of text at the left margin plus `indent`, after a break check.
    pub fn line(&mut self, text: &str, font: Font, size: f32, line_height: f32, indent: f32) {
        self.ensure_space(line_height);
        let baseline = self.state.cursor_y + size;
        self.text_at(MARGIN_X + indent, baseline, text, font, size, Color::BLACK);
        self.state.cursor_y += line_height;
    }

    /// Word-wrapped text, each wrapped line checked for space on its own.
    pub fn paragraph(&mut self, text: &str, font: Font, size: f32, line_height: f32, indent: f32) {
        for line in wrap_text(text, font, size, CONTENT_WIDTH - indent) {
            self.line(&line, font, size, line_height, indent);
        }
    }

    /// Record a heading in the outline at the current page.
    pub fn mark_section(&mut self, title: &str) {
        self.outline.push(OutlineEntry {
            title: title.to_string(),
            page: self.state.current_page + 1,
        });
    }

    pub fn finish(self) -> Layout {
        Layout {
            pages: self.pages,
            outline: self.outline,
        }
    }
}
