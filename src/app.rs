//! Motor graphs window: feeds the demo motors into one graph per motor and
//! draws them over a black background every frame.
//!
//! Space toggles pause. While paused world time stands still and no samples
//! are pushed; the graphs keep showing their retained history.

use std::time::{Duration, Instant};

use eframe::egui;

use crate::config::{MotorGraphsConfig, CHANNEL_MOTOR_SPEED, CHANNEL_WANTED_SPEED};
use crate::data::graph::TimeSeriesGraph;
use crate::demo::{MotorDemo, SampleThrottle};
use crate::error::{GraphError, Result};
use crate::surface::{DrawSurface, PainterSurface};

pub struct MotorGraphsApp {
    pub graphs: Vec<TimeSeriesGraph>,
    pub demo: MotorDemo,
    pub paused: bool,
    throttle: SampleThrottle,
    // Advances only while running.
    world_time: Duration,
    started: Instant,
    last_frame: Instant,
    repaint_interval: Duration,
}

impl MotorGraphsApp {
    pub fn new(cfg: &MotorGraphsConfig) -> Result<Self> {
        let graphs = cfg.build_graphs()?;
        let repaint_interval = Duration::try_from_secs_f32(1.0 / cfg.fps_max)
            .map_err(|e| GraphError::invalid(format!("fps_max {}: {e}", cfg.fps_max)))?;
        let now = Instant::now();
        Ok(Self {
            demo: MotorDemo::new(graphs.len()),
            graphs,
            paused: cfg.start_paused,
            throttle: SampleThrottle::new(cfg.sample_interval_ms),
            world_time: Duration::ZERO,
            started: now,
            last_frame: now,
            repaint_interval,
        })
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "paused" } else { "resumed" });
    }

    pub fn world_time(&self) -> Duration {
        self.world_time
    }

    /// Advance by `elapsed` and push one sample per motor and channel if the
    /// throttle lets `now_ms` (clock time) through.
    pub fn tick(&mut self, elapsed: Duration, now_ms: u64) -> Result<()> {
        if self.paused {
            return Ok(());
        }
        self.world_time += elapsed;
        self.demo.update(elapsed.as_secs_f64());
        if !self.throttle.ready(now_ms) {
            return Ok(());
        }
        let t = self.world_time.as_secs_f64();
        for (i, graph) in self.graphs.iter_mut().enumerate() {
            graph.add_sample(CHANNEL_MOTOR_SPEED, t, self.demo.motor_speed(i)?)?;
            graph.add_sample(CHANNEL_WANTED_SPEED, t, self.demo.wanted_motor_speed(i)?)?;
        }
        Ok(())
    }

    pub fn render_all<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for graph in &self.graphs {
            graph.render(surface);
        }
    }
}

impl eframe::App for MotorGraphsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.toggle_pause();
        }

        let now = Instant::now();
        let elapsed = now - self.last_frame;
        self.last_frame = now;
        let now_ms = self.started.elapsed().as_millis() as u64;
        if let Err(e) = self.tick(elapsed, now_ms) {
            log::error!("failed to push motor samples: {e}");
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                let painter = ui.painter();
                let mut surface = PainterSurface::new(painter).with_origin(origin);
                self.render_all(&mut surface);

                let status = format!(
                    "World time: {:.2} s{}",
                    self.world_time.as_secs_f64(),
                    if self.paused { "  [paused]" } else { "" }
                );
                painter.text(
                    ui.max_rect().center_top() + egui::vec2(0.0, 4.0),
                    egui::Align2::CENTER_TOP,
                    status,
                    egui::FontId::proportional(14.0),
                    egui::Color32::WHITE,
                );
            });

        ctx.request_repaint_after(self.repaint_interval);
    }
}

/// Launch the motor graphs in a native window. Blocks until the window closes.
pub fn run_motor_graphs(cfg: MotorGraphsConfig) -> Result<()> {
    let app = MotorGraphsApp::new(&cfg)?;
    log::info!(
        "starting {} motor graphs, sampling every {} ms",
        app.graphs.len(),
        cfg.sample_interval_ms
    );

    let mut opts = eframe::NativeOptions::default();
    opts.viewport = egui::ViewportBuilder::default()
        .with_title(cfg.title.clone())
        .with_inner_size(egui::vec2(
            cfg.window_width as f32,
            cfg.window_height as f32,
        ));

    eframe::run_native(&cfg.title, opts, Box::new(|_cc| Ok(Box::new(app))))?;
    Ok(())
}
