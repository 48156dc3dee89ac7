use std::path::Path;

use quadgraph::persistence::load_config_from_path;
use quadgraph::{run_motor_graphs, MotorGraphsConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional first argument: path to a JSON config.
    let cfg = match std::env::args().nth(1) {
        Some(path) => match load_config_from_path(Path::new(&path)) {
            Ok(cfg) => {
                log::info!("loaded config from {path}");
                cfg
            }
            Err(e) => {
                log::warn!("could not load config {path}: {e}; using defaults");
                MotorGraphsConfig::default()
            }
        },
        None => MotorGraphsConfig::default(),
    };

    if let Err(e) = run_motor_graphs(cfg) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
