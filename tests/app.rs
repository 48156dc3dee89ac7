use std::time::Duration;

use quadgraph::config::{CHANNEL_MOTOR_SPEED, CHANNEL_WANTED_SPEED};
use quadgraph::{MotorGraphsApp, MotorGraphsConfig, RecordingSurface};

fn app() -> MotorGraphsApp {
    MotorGraphsApp::new(&MotorGraphsConfig::default()).unwrap()
}

const FRAME: Duration = Duration::from_millis(50);

#[test]
fn samples_are_throttled_to_the_interval() {
    let mut app = app();
    // 20 frames of 50 ms; the 150 ms throttle lets every fourth frame through.
    for frame in 1..=20u64 {
        app.tick(FRAME, frame * 50).unwrap();
    }
    for graph in &app.graphs {
        assert_eq!(graph.channel(CHANNEL_MOTOR_SPEED).unwrap().size(), 5);
        assert_eq!(graph.channel(CHANNEL_WANTED_SPEED).unwrap().size(), 5);
    }
    assert_eq!(app.world_time(), Duration::from_secs(1));
}

#[test]
fn paused_app_neither_advances_nor_samples() {
    let mut app = app();
    app.toggle_pause();
    for frame in 1..=20u64 {
        app.tick(FRAME, frame * 50).unwrap();
    }
    assert_eq!(app.world_time(), Duration::ZERO);
    assert!(app.graphs.iter().all(|g| g.channel(0).unwrap().is_empty()));

    app.toggle_pause();
    app.tick(FRAME, 2_000).unwrap();
    assert_eq!(app.graphs[0].channel(0).unwrap().size(), 1);
}

#[test]
fn history_is_capped_by_buffer_capacity() {
    let mut app = app();
    for frame in 1..=200u64 {
        app.tick(Duration::from_millis(200), frame * 200).unwrap();
    }
    let buf = app.graphs[3].channel(CHANNEL_WANTED_SPEED).unwrap();
    assert_eq!(buf.size(), 30);
    assert!(buf.get(0).unwrap().time < buf.get(29).unwrap().time);
}

#[test]
fn render_all_draws_every_graph() {
    let mut app = app();
    for frame in 1..=10u64 {
        app.tick(Duration::from_millis(200), frame * 200).unwrap();
    }
    let mut surface = RecordingSurface::new();
    app.render_all(&mut surface);
    // background + caption per graph, plus 9 segments per channel.
    assert_eq!(surface.calls.len() - surface.lines().len(), 8);
    assert_eq!(surface.lines().len(), 4 * 2 * 9);
}
