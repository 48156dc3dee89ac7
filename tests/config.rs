use egui::Color32;
use quadgraph::demo::motor_regions;
use quadgraph::persistence::{
    config_from_json, config_to_json, load_config_from_path, save_config_to_path,
};
use quadgraph::{GraphError, MotorGraphsApp, MotorGraphsConfig, Region};

#[test]
fn default_config_builds_four_motor_graphs() {
    let cfg = MotorGraphsConfig::default();
    let graphs = cfg.build_graphs().unwrap();
    assert_eq!(graphs.len(), 4);
    for (i, g) in graphs.iter().enumerate() {
        assert_eq!(g.caption(), format!("Motor {i}"));
        assert_eq!(g.num_channels(), 2);
        assert_eq!(g.max_val(), 1.0);
        assert_eq!(g.channel(0).unwrap().capacity(), 30);
    }
}

#[test]
fn motor_regions_fill_the_window_corners() {
    let regions = motor_regions(1366, 740, 0.22, 4).unwrap();
    // 0.22 * 1366 = 300.52, 0.22 * 740 = 162.8
    assert_eq!(regions[0], Region::from_pos_size(0, 0, 300, 162));
    assert_eq!(regions[1], Region::from_pos_size(1066, 0, 300, 162));
    assert_eq!(regions[2], Region::from_pos_size(0, 577, 300, 162));
    assert_eq!(regions[3], Region::from_pos_size(1066, 577, 300, 162));
    assert!(motor_regions(1366, 740, 0.22, 5).is_err());
}

#[test]
fn validate_rejects_bad_values() {
    let mut cfg = MotorGraphsConfig::default();
    cfg.motor_count = 0;
    assert!(matches!(cfg.validate(), Err(GraphError::InvalidArgument(_))));

    let mut cfg = MotorGraphsConfig::default();
    cfg.graph_fraction = 0.75;
    assert!(cfg.validate().is_err());

    let mut cfg = MotorGraphsConfig::default();
    cfg.buffer_capacity = 0;
    assert!(matches!(cfg.build_graphs(), Err(GraphError::InvalidArgument(_))));
}

#[test]
fn json_round_trip_keeps_settings() {
    let mut cfg = MotorGraphsConfig::default();
    cfg.title = "Bench".to_string();
    cfg.sample_interval_ms = 40;
    cfg.buffer_capacity = 120;
    cfg.motor_count = 2;
    cfg.look.channel_colors = vec![Color32::from_rgb(255, 255, 0)];
    cfg.look.width = 2.5;

    let json = config_to_json(&cfg).unwrap();
    let restored = config_from_json(&json).unwrap();
    assert_eq!(restored.title, "Bench");
    assert_eq!(restored.sample_interval_ms, 40);
    assert_eq!(restored.buffer_capacity, 120);
    assert_eq!(restored.motor_count, 2);
    assert_eq!(restored.look.channel_colors, vec![Color32::from_rgb(255, 255, 0)]);
    assert_eq!(restored.look.font_color, Color32::WHITE);
    assert_eq!(restored.look.width, 2.5);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let cfg = config_from_json(r#"{ "buffer_capacity": 64 }"#).unwrap();
    assert_eq!(cfg.buffer_capacity, 64);
    assert_eq!(cfg.window_width, 1366);
    assert_eq!(cfg.motor_count, 4);
    assert_eq!(cfg.look.width, 1.5);
}

#[test]
fn invalid_json_config_is_rejected() {
    assert!(matches!(
        config_from_json("{ not json"),
        Err(GraphError::Json(_))
    ));
    assert!(matches!(
        config_from_json(r#"{ "motor_count": 9 }"#),
        Err(GraphError::InvalidArgument(_))
    ));
}

#[test]
fn save_and_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graphs.json");
    let mut cfg = MotorGraphsConfig::default();
    cfg.start_paused = true;
    save_config_to_path(&cfg, &path).unwrap();

    let loaded = load_config_from_path(&path).unwrap();
    assert!(loaded.start_paused);
    assert!(matches!(
        load_config_from_path(&dir.path().join("missing.json")),
        Err(GraphError::Io(_))
    ));
}

#[test]
fn tiny_fps_cap_is_rejected_before_the_app_starts() {
    assert!(matches!(
        config_from_json(r#"{ "fps_max": 1e-30 }"#),
        Err(GraphError::InvalidArgument(_))
    ));

    let mut cfg = MotorGraphsConfig::default();
    cfg.fps_max = 1e-30;
    assert!(matches!(
        MotorGraphsApp::new(&cfg),
        Err(GraphError::InvalidArgument(_))
    ));

    cfg.fps_max = 1.0;
    assert!(MotorGraphsApp::new(&cfg).is_ok());
}

#[test]
fn non_positive_line_width_is_rejected() {
    let mut cfg = MotorGraphsConfig::default();
    cfg.look.width = 0.0;
    assert!(matches!(cfg.validate(), Err(GraphError::InvalidArgument(_))));
    assert!(config_from_json(r#"{ "look": { "background_rgba": [0, 0, 0, 255], "font_rgba": [255, 255, 255, 255], "width": -1.0 } }"#).is_err());
}
