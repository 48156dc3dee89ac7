//! quadgraph crate root: re-exports and module wiring.
//!
//! Realtime line graphs of streamed `(time, value)` samples, used to show the
//! motor speeds of a simulated quadrotor:
//! - `data`: ring buffers, graph projection and colors
//! - `surface`: drawing surfaces (egui painter, in-memory recorder)
//! - `config` / `persistence`: window configuration and its JSON form
//! - `demo`: stand-in motor data source and graph layout
//! - `app`: eframe window that ties it together

pub mod app;
pub mod config;
pub mod data;
pub mod demo;
pub mod error;
pub mod persistence;
pub mod surface;

pub use app::{run_motor_graphs, MotorGraphsApp};
pub use config::{GraphConfig, MotorGraphsConfig};
pub use data::graph::{PixelPos, Region, Segment, TimeSeriesGraph};
pub use data::look::GraphLook;
pub use data::ring_buffer::{CircularSampleBuffer, Sample};
pub use error::GraphError;
pub use surface::{DrawCall, DrawSurface, PainterSurface, RecordingSurface};
