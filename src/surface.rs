//! Drawing surfaces the graphs render onto.
//!
//! A graph only needs three primitives (filled rectangle, line, text), so the
//! host renderer is hidden behind [`DrawSurface`]. [`PainterSurface`] draws
//! through an egui [`Painter`]; [`RecordingSurface`] keeps the calls in memory,
//! which is what the tests and headless runs use.

use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Stroke};

use crate::data::graph::{PixelPos, Region};

pub trait DrawSurface {
    fn draw_filled_rect(&mut self, color: Color32, rect: Region);
    fn draw_line(&mut self, color: Color32, a: PixelPos, b: PixelPos);
    fn draw_text(&mut self, text: &str, rect: Region, color: Color32, font: &FontId);

    /// Width used by following `draw_line` calls. Surfaces without strokes ignore it.
    fn set_line_width(&mut self, _width: f32) {}
}

/// egui-backed surface. Pixel coordinates are offset by `origin` (in points).
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    line_width: f32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self {
            painter,
            origin: Pos2::ZERO,
            line_width: 1.0,
        }
    }

    pub fn with_origin(mut self, origin: Pos2) -> Self {
        self.origin = origin;
        self
    }

    fn pos(&self, p: PixelPos) -> Pos2 {
        Pos2::new(self.origin.x + p.x as f32, self.origin.y + p.y as f32)
    }

    fn rect(&self, r: Region) -> egui::Rect {
        egui::Rect::from_min_max(
            self.pos(PixelPos::new(r.left, r.top)),
            self.pos(PixelPos::new(r.right, r.bottom)),
        )
    }
}

impl DrawSurface for PainterSurface<'_> {
    fn draw_filled_rect(&mut self, color: Color32, rect: Region) {
        self.painter
            .rect_filled(self.rect(rect), egui::CornerRadius::ZERO, color);
    }

    fn draw_line(&mut self, color: Color32, a: PixelPos, b: PixelPos) {
        self.painter.line_segment(
            [self.pos(a), self.pos(b)],
            Stroke::new(self.line_width, color),
        );
    }

    fn draw_text(&mut self, text: &str, rect: Region, color: Color32, font: &FontId) {
        // Caption sits centered along the top edge.
        let r = self.rect(rect);
        self.painter
            .text(r.center_top(), Align2::CENTER_TOP, text, font.clone(), color);
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FilledRect {
        color: Color32,
        rect: Region,
    },
    Line {
        color: Color32,
        a: PixelPos,
        b: PixelPos,
    },
    Text {
        text: String,
        rect: Region,
        color: Color32,
    },
}

/// Records every draw call in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    /// Last width passed to `set_line_width`.
    pub line_width: Option<f32>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line segments in draw order.
    pub fn lines(&self) -> Vec<(Color32, PixelPos, PixelPos)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Line { color, a, b } => Some((*color, *a, *b)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_filled_rect(&mut self, color: Color32, rect: Region) {
        self.calls.push(DrawCall::FilledRect { color, rect });
    }

    fn draw_line(&mut self, color: Color32, a: PixelPos, b: PixelPos) {
        self.calls.push(DrawCall::Line { color, a, b });
    }

    fn draw_text(&mut self, text: &str, rect: Region, color: Color32, _font: &FontId) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            rect,
            color,
        });
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = Some(width);
    }
}
