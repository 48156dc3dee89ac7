//! Configuration types for the graphs and the motor graphs window.

use eframe::egui::FontId;

use crate::data::graph::{Region, TimeSeriesGraph};
use crate::data::look::GraphLook;
use crate::demo::motor_regions;
use crate::error::{GraphError, Result};

/// Channel fed with the measured motor speed.
pub const CHANNEL_MOTOR_SPEED: usize = 0;
/// Channel fed with the controller's wanted motor speed.
pub const CHANNEL_WANTED_SPEED: usize = 1;

/// Construction parameters of a single [`TimeSeriesGraph`].
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
    pub caption: String,
    pub region: Region,
    /// Value drawn on the top edge; `0` sits on the bottom edge.
    pub max_val: f64,
    pub num_channels: usize,
    /// Samples retained per channel.
    pub buffer_capacity: usize,
    pub font_size: f32,
    pub look: GraphLook,
}

impl GraphConfig {
    pub fn build(&self) -> Result<TimeSeriesGraph> {
        Ok(TimeSeriesGraph::new(
            self.caption.clone(),
            self.region,
            self.max_val,
            self.num_channels,
            self.buffer_capacity,
            FontId::proportional(self.font_size),
        )?
        .with_look(self.look.clone()))
    }
}

/// Top-level configuration of the motor graphs window.
#[derive(Clone, Debug, PartialEq)]
pub struct MotorGraphsConfig {
    /// Native window title.
    pub title: String,
    pub window_width: i32,
    pub window_height: i32,
    /// Graph width/height as a fraction of the window size.
    pub graph_fraction: f32,
    /// Minimum wall-clock time between two pushed samples.
    pub sample_interval_ms: u64,
    pub max_val: f64,
    pub buffer_capacity: usize,
    /// Number of motor graphs, one per window corner (1..=4).
    pub motor_count: usize,
    /// Repaint rate cap.
    pub fps_max: f32,
    pub start_paused: bool,
    pub font_size: f32,
    pub look: GraphLook,
}

impl Default for MotorGraphsConfig {
    fn default() -> Self {
        Self {
            title: "Quadrotor Motor Graphs".to_string(),
            window_width: 1366,
            window_height: 740,
            graph_fraction: 0.22,
            sample_interval_ms: 150,
            max_val: 1.0,
            buffer_capacity: 30,
            motor_count: 4,
            fps_max: 200.0,
            start_paused: false,
            font_size: 14.0,
            look: GraphLook::default(),
        }
    }
}

impl MotorGraphsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(GraphError::invalid("window size must be positive"));
        }
        if !(self.graph_fraction > 0.0 && self.graph_fraction <= 0.5) {
            return Err(GraphError::invalid(format!(
                "graph_fraction must be in (0, 0.5], got {}",
                self.graph_fraction
            )));
        }
        if !(self.fps_max.is_finite() && self.fps_max >= 1.0) {
            return Err(GraphError::invalid(format!(
                "fps_max must be at least 1, got {}",
                self.fps_max
            )));
        }
        if !(self.look.width.is_finite() && self.look.width > 0.0) {
            return Err(GraphError::invalid(format!(
                "line width must be positive, got {}",
                self.look.width
            )));
        }
        if self.motor_count == 0 || self.motor_count > 4 {
            return Err(GraphError::invalid(format!(
                "motor_count must be between 1 and 4, got {}",
                self.motor_count
            )));
        }
        Ok(())
    }

    /// One graph per motor, captioned "Motor 0", "Motor 1", ...
    pub fn graph_configs(&self) -> Result<Vec<GraphConfig>> {
        self.validate()?;
        let regions = motor_regions(
            self.window_width,
            self.window_height,
            self.graph_fraction,
            self.motor_count,
        )?;
        Ok(regions
            .into_iter()
            .enumerate()
            .map(|(i, region)| GraphConfig {
                caption: format!("Motor {i}"),
                region,
                max_val: self.max_val,
                num_channels: 2,
                buffer_capacity: self.buffer_capacity,
                font_size: self.font_size,
                look: self.look.clone(),
            })
            .collect())
    }

    pub fn build_graphs(&self) -> Result<Vec<TimeSeriesGraph>> {
        self.graph_configs()?.iter().map(GraphConfig::build).collect()
    }
}
