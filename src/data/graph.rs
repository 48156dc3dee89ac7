//! Multi-channel time-series graph drawn into a fixed pixel region.
//!
//! Each channel keeps its recent history in a [`CircularSampleBuffer`]. On
//! render the time axis is stretched so the oldest retained sample sits on the
//! left edge and the newest on the right edge; the value axis is fixed, with
//! `0` on the bottom edge and `max_val` on the top edge.

use eframe::egui::{Color32, FontId};

use crate::data::look::GraphLook;
use crate::data::ring_buffer::{CircularSampleBuffer, Sample};
use crate::error::{GraphError, Result};
use crate::surface::DrawSurface;

/// Integer pixel coordinate on a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle; `top < bottom` for a non-degenerate region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Region {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn from_pos_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    /// Widened so extreme coordinates cannot overflow.
    pub const fn width(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    pub const fn height(&self) -> i64 {
        self.bottom as i64 - self.top as i64
    }
}

/// One line segment produced by [`TimeSeriesGraph::segments`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub channel: usize,
    pub color: Color32,
    /// Projection of the older sample.
    pub start: PixelPos,
    /// Projection of the newer sample.
    pub end: PixelPos,
}

pub struct TimeSeriesGraph {
    caption: String,
    region: Region,
    max_val: f64,
    channels: Vec<CircularSampleBuffer<Sample>>,
    font: FontId,
    pub look: GraphLook,
}

impl TimeSeriesGraph {
    pub fn new<S: Into<String>>(
        caption: S,
        region: Region,
        max_val: f64,
        num_channels: usize,
        buffer_capacity: usize,
        font: FontId,
    ) -> Result<Self> {
        if region.width() <= 0 || region.height() <= 0 {
            return Err(GraphError::invalid(format!(
                "graph region must have positive extent, got {}x{}",
                region.width(),
                region.height()
            )));
        }
        if !(max_val.is_finite() && max_val > 0.0) {
            return Err(GraphError::invalid(format!(
                "max_val must be positive and finite, got {max_val}"
            )));
        }
        if num_channels == 0 {
            return Err(GraphError::invalid("graph needs at least one channel"));
        }
        let channels = (0..num_channels)
            .map(|_| CircularSampleBuffer::new(buffer_capacity))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            caption: caption.into(),
            region,
            max_val,
            channels,
            font,
            look: GraphLook::default(),
        })
    }

    pub fn with_look(mut self, look: GraphLook) -> Self {
        self.look = look;
        self
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn max_val(&self) -> f64 {
        self.max_val
    }

    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    pub fn channel(&self, index: usize) -> Result<&CircularSampleBuffer<Sample>> {
        self.channels.get(index).ok_or(GraphError::OutOfRange {
            index,
            len: self.channels.len(),
        })
    }

    /// Push `(time, value)` into the given channel. Time ordering is not checked.
    pub fn add_sample(&mut self, channel: usize, time: f64, value: f64) -> Result<()> {
        let len = self.channels.len();
        let buf = self
            .channels
            .get_mut(channel)
            .ok_or(GraphError::OutOfRange {
                index: channel,
                len,
            })?;
        buf.push(Sample::new(time, value));
        Ok(())
    }

    /// Map a sample into the region, given the oldest time `t0` and the time span.
    pub fn project(&self, sample: Sample, t0: f64, t_span: f64) -> PixelPos {
        let r = &self.region;
        let dx = ((sample.time - t0) / t_span * r.width() as f64).round();
        let dy = (sample.value / self.max_val * r.height() as f64).round();
        // Float to int casts saturate, so far-off points pin to the i32 range.
        PixelPos::new(
            (f64::from(r.left) + dx) as i32,
            (f64::from(r.bottom) - dy) as i32,
        )
    }

    /// Segments `render` would draw, in draw order: channel by channel, and
    /// within a channel from the newest pair back to the oldest.
    ///
    /// A channel stops at the first segment whose older end projects left of
    /// the region; older segments of that channel are dropped, not clipped.
    pub fn segments(&self) -> Vec<Segment> {
        let mut out = Vec::new();
        for (channel, buf) in self.channels.iter().enumerate() {
            if buf.size() < 2 {
                continue;
            }
            let samples: Vec<Sample> = buf.iter().collect();
            let t0 = samples[0].time;
            let t_span = samples[samples.len() - 1].time - t0;
            if !(t_span.is_finite() && t_span > 0.0) {
                log::debug!(
                    "{}: channel {channel} skipped, time span {t_span}",
                    self.caption
                );
                continue;
            }
            let color = self.look.channel_color(channel);
            for pair in samples.windows(2).rev() {
                let start = self.project(pair[0], t0, t_span);
                let end = self.project(pair[1], t0, t_span);
                if start.x < self.region.left {
                    break;
                }
                out.push(Segment {
                    channel,
                    color,
                    start,
                    end,
                });
            }
        }
        out
    }

    /// Draw background, caption and every channel. Does not mutate the graph.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.draw_filled_rect(self.look.background, self.region);
        surface.draw_text(&self.caption, self.region, self.look.font_color, &self.font);
        surface.set_line_width(self.look.width);
        for seg in self.segments() {
            surface.draw_line(seg.color, seg.start, seg.end);
        }
    }
}
