//! Page model shared by the page composers and the PDF encoder.
//!
//! Coordinates are in points with the origin at the top-left corner and `y` growing
//! downward. Text `y` is the top of the line box; the encoder converts to PDF space.

use serde::{Deserialize, Serialize};

use crate::render::font_metrics::{get_metrics, line_height, Face};
use crate::render::palette::Rgb;

/// US Letter.
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN: f32 = 50.0;
/// Width of cards, rules and boxes.
pub const CONTENT_WIDTH: f32 = 500.0;
/// Lowest `y` content may reach before a continuation page is opened.
pub const CONTENT_BOTTOM: f32 = PAGE_HEIGHT - MARGIN;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Rgb,
    },
    /// Filled rectangle with a 1pt border.
    Card {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Rgb,
        border: Rgb,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        width: f32,
        color: Rgb,
    },
    Text {
        x: f32,
        y: f32,
        size: f32,
        face: Face,
        color: Rgb,
        text: String,
    },
}

/// Logical section a physical page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Profile,
    Products,
    Schedule,
    Instructions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub section: Section,
    /// True when the page only exists because its section overflowed.
    pub continuation: bool,
    pub ops: Vec<DrawOp>,
}

#[cfg(test)]
impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLayout {
    pub width: f32,
    pub height: f32,
    pub pages: Vec<Page>,
}

#[cfg(test)]
impl ReportLayout {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(|p| p.texts())
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }

    pub fn section_pages(&self, section: Section) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(move |p| p.section == section)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Builder
// ────────────────────────────────────────────────────────────────────────────

/// Accumulates pages and tracks the vertical cursor of the current page.
pub struct LayoutBuilder {
    pages: Vec<Page>,
    background: Option<Rgb>,
    pub y: f32,
}

impl LayoutBuilder {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            background: None,
            y: MARGIN,
        }
    }

    /// Opens a page for `section`, optionally painting a full-page background.
    pub fn start_page(&mut self, section: Section, background: Option<Rgb>) {
        self.open(section, background, false);
    }

    fn open(&mut self, section: Section, background: Option<Rgb>, continuation: bool) {
        let mut ops = Vec::new();
        if let Some(fill) = background {
            ops.push(DrawOp::FillRect {
                x: 0.0,
                y: 0.0,
                width: PAGE_WIDTH,
                height: PAGE_HEIGHT,
                fill,
            });
        }
        self.pages.push(Page {
            section,
            continuation,
            ops,
        });
        self.background = background;
        self.y = MARGIN;
    }

    /// Opens a continuation page when a block of `height` would cross the bottom margin.
    /// Returns true if a new page was opened.
    pub fn ensure_space(&mut self, height: f32) -> bool {
        if self.y + height <= CONTENT_BOTTOM {
            return false;
        }
        self.break_page();
        true
    }

    /// Opens a continuation page of the current section with the same background.
    pub fn break_page(&mut self) {
        let section = self
            .pages
            .last()
            .map(|p| p.section)
            .unwrap_or(Section::Profile);
        self.open(section, self.background, true);
    }

    /// Position in the current page's op list. Ops inserted at a mark draw beneath
    /// everything pushed after it.
    pub fn mark(&self) -> usize {
        self.pages.last().map(|p| p.ops.len()).unwrap_or(0)
    }

    pub fn insert(&mut self, mark: usize, op: DrawOp) {
        if self.pages.is_empty() {
            self.open(Section::Profile, None, false);
        }
        if let Some(page) = self.pages.last_mut() {
            let at = mark.min(page.ops.len());
            page.ops.insert(at, op);
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        if self.pages.is_empty() {
            self.open(Section::Profile, None, false);
        }
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    pub fn text(&mut self, x: f32, y: f32, size: f32, face: Face, color: Rgb, text: impl Into<String>) {
        self.push(DrawOp::Text {
            x,
            y,
            size,
            face,
            color,
            text: text.into(),
        });
    }

    /// Draws `text` horizontally centred within the content width.
    pub fn centered_text(&mut self, y: f32, size: f32, face: Face, color: Rgb, text: &str) {
        let width = get_metrics(&face).width_pt(text, size);
        let x = MARGIN + ((CONTENT_WIDTH - width) / 2.0).max(0.0);
        self.text(x, y, size, face, color, text);
    }

    /// Draws pre-wrapped lines starting at `y`. Returns the height consumed.
    pub fn lines(&mut self, x: f32, y: f32, size: f32, face: Face, color: Rgb, lines: &[String]) -> f32 {
        let step = line_height(size);
        for (i, line) in lines.iter().enumerate() {
            self.text(x, y + step * i as f32, size, face, color, line.clone());
        }
        step * lines.len() as f32
    }

    pub fn card(&mut self, y: f32, height: f32, fill: Rgb, border: Rgb) {
        self.push(DrawOp::Card {
            x: MARGIN,
            y,
            width: CONTENT_WIDTH,
            height,
            fill,
            border,
        });
    }

    pub fn rule(&mut self, y: f32, width: f32, color: Rgb) {
        self.push(DrawOp::Rule {
            x1: MARGIN,
            x2: MARGIN + CONTENT_WIDTH,
            y,
            width,
            color,
        });
    }

    pub fn finish(self) -> ReportLayout {
        ReportLayout {
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            pages: self.pages,
        }
    }
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper-cases the first character: "darkSpots" → "DarkSpots".
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
