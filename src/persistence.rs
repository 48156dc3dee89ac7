//! Config persistence: save and load [`MotorGraphsConfig`] to/from JSON files.
//!
//! Mirror types are used for values that cannot derive serde traits directly
//! (egui's `Color32`).

use std::path::Path;

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

use crate::config::MotorGraphsConfig;
use crate::data::look::GraphLook;
use crate::error::Result;

fn rgba(c: Color32) -> [u8; 4] {
    let [r, g, b, a] = c.to_srgba_unmultiplied();
    [r, g, b, a]
}

fn color(c: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
}

fn default_line_width() -> f32 {
    GraphLook::default().width
}

/// Serializable version of GraphLook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphLookSerde {
    pub background_rgba: [u8; 4],
    pub font_rgba: [u8; 4],
    #[serde(default = "default_line_width")]
    pub width: f32,
    #[serde(default)]
    pub channel_rgba: Vec<[u8; 4]>,
}

impl From<&GraphLook> for GraphLookSerde {
    fn from(l: &GraphLook) -> Self {
        Self {
            background_rgba: rgba(l.background),
            font_rgba: rgba(l.font_color),
            width: l.width,
            channel_rgba: l.channel_colors.iter().copied().map(rgba).collect(),
        }
    }
}

impl GraphLookSerde {
    pub fn into_look(self) -> GraphLook {
        GraphLook {
            background: color(self.background_rgba),
            font_color: color(self.font_rgba),
            width: self.width,
            channel_colors: self.channel_rgba.into_iter().map(color).collect(),
        }
    }
}

/// Serializable version of MotorGraphsConfig. Missing fields take defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorGraphsConfigSerde {
    pub title: String,
    pub window_size: [i32; 2],
    pub graph_fraction: f32,
    pub sample_interval_ms: u64,
    pub max_val: f64,
    pub buffer_capacity: usize,
    pub motor_count: usize,
    pub fps_max: f32,
    pub start_paused: bool,
    pub font_size: f32,
    pub look: GraphLookSerde,
}

impl Default for MotorGraphsConfigSerde {
    fn default() -> Self {
        (&MotorGraphsConfig::default()).into()
    }
}

impl From<&MotorGraphsConfig> for MotorGraphsConfigSerde {
    fn from(c: &MotorGraphsConfig) -> Self {
        Self {
            title: c.title.clone(),
            window_size: [c.window_width, c.window_height],
            graph_fraction: c.graph_fraction,
            sample_interval_ms: c.sample_interval_ms,
            max_val: c.max_val,
            buffer_capacity: c.buffer_capacity,
            motor_count: c.motor_count,
            fps_max: c.fps_max,
            start_paused: c.start_paused,
            font_size: c.font_size,
            look: GraphLookSerde::from(&c.look),
        }
    }
}

impl MotorGraphsConfigSerde {
    pub fn into_config(self) -> MotorGraphsConfig {
        MotorGraphsConfig {
            title: self.title,
            window_width: self.window_size[0],
            window_height: self.window_size[1],
            graph_fraction: self.graph_fraction,
            sample_interval_ms: self.sample_interval_ms,
            max_val: self.max_val,
            buffer_capacity: self.buffer_capacity,
            motor_count: self.motor_count,
            fps_max: self.fps_max,
            start_paused: self.start_paused,
            font_size: self.font_size,
            look: self.look.into_look(),
        }
    }
}

// ---------- Public API ----------

/// Serialize the config as pretty JSON.
pub fn config_to_json(cfg: &MotorGraphsConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&MotorGraphsConfigSerde::from(cfg))?)
}

/// Deserialize and validate a config from JSON.
pub fn config_from_json(json: &str) -> Result<MotorGraphsConfig> {
    let serde: MotorGraphsConfigSerde = serde_json::from_str(json)?;
    let cfg = serde.into_config();
    cfg.validate()?;
    Ok(cfg)
}

/// Save the config to a JSON file at the given path.
pub fn save_config_to_path(cfg: &MotorGraphsConfig, path: &Path) -> Result<()> {
    let txt = config_to_json(cfg)?;
    std::fs::write(path, txt)?;
    Ok(())
}

/// Load the config from a JSON file at the given path.
pub fn load_config_from_path(path: &Path) -> Result<MotorGraphsConfig> {
    let txt = std::fs::read_to_string(path)?;
    config_from_json(&txt)
}
