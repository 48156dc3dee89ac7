//! GraphLook: colors and stroke used when drawing a graph.

use eframe::egui::Color32;

/// The visual presentation of a graph (background, caption and channel colors).
#[derive(Debug, Clone, PartialEq)]
pub struct GraphLook {
    pub background: Color32,
    pub font_color: Color32,
    /// Stroke width of the channel lines, in points.
    pub width: f32,
    /// Per-channel override; channels without an entry use [`GraphLook::alloc_color`].
    pub channel_colors: Vec<Color32>,
}

impl Default for GraphLook {
    fn default() -> Self {
        Self {
            background: Color32::from_rgba_unmultiplied(50, 50, 50, 150),
            font_color: Color32::WHITE,
            width: 1.5,
            channel_colors: Vec::new(),
        }
    }
}

impl GraphLook {
    /// Color used for the given channel index.
    pub fn channel_color(&self, index: usize) -> Color32 {
        self.channel_colors
            .get(index)
            .copied()
            .unwrap_or_else(|| Self::alloc_color(index))
    }

    /// Red, green, blue for the first three channels, then cycles.
    pub fn alloc_color(index: usize) -> Color32 {
        const PALETTE: [Color32; 3] = [
            Color32::from_rgb(255, 0, 0),
            Color32::from_rgb(0, 255, 0),
            Color32::from_rgb(0, 0, 255),
        ];
        PALETTE[index % PALETTE.len()]
    }
}
