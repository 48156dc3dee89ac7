//! Stand-in data source and layout helpers for the motor graphs window.
//!
//! The real quadrotor model is not part of this crate; [`MotorDemo`] produces
//! plausible motor speeds so the graphs have something to show.

use std::f64::consts::PI;

use crate::data::graph::Region;
use crate::error::{GraphError, Result};

/// Speed every motor starts at.
pub const INITIAL_MOTOR_SPEED: f64 = 0.01;

#[derive(Debug, Clone, Copy)]
struct MotorState {
    actual: f64,
    wanted: f64,
}

/// Motors whose wanted speed oscillates slowly while the measured speed lags
/// behind it with a first order response. Both stay within `[0, 1]`.
#[derive(Debug, Clone)]
pub struct MotorDemo {
    motors: Vec<MotorState>,
    time: f64,
    time_constant: f64,
}

impl MotorDemo {
    pub fn new(num_motors: usize) -> Self {
        Self {
            motors: vec![
                MotorState {
                    actual: INITIAL_MOTOR_SPEED,
                    wanted: INITIAL_MOTOR_SPEED,
                };
                num_motors
            ],
            time: 0.0,
            time_constant: 0.4,
        }
    }

    pub fn num_motors(&self) -> usize {
        self.motors.len()
    }

    /// Seconds of simulated time.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn update(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        self.time += dt;
        let alpha = 1.0 - (-dt / self.time_constant).exp();
        let t = self.time;
        for (i, m) in self.motors.iter_mut().enumerate() {
            let phase = i as f64 * PI / 2.0;
            m.wanted = (0.5 + 0.35 * (2.0 * PI * 0.2 * t + phase).sin()).clamp(0.0, 1.0);
            m.actual += (m.wanted - m.actual) * alpha;
        }
    }

    pub fn motor_speed(&self, motor: usize) -> Result<f64> {
        self.state(motor).map(|m| m.actual)
    }

    pub fn wanted_motor_speed(&self, motor: usize) -> Result<f64> {
        self.state(motor).map(|m| m.wanted)
    }

    fn state(&self, motor: usize) -> Result<&MotorState> {
        self.motors.get(motor).ok_or(GraphError::OutOfRange {
            index: motor,
            len: self.motors.len(),
        })
    }
}

/// Lets samples through at most once per `interval_ms` of clock time.
#[derive(Debug, Clone)]
pub struct SampleThrottle {
    interval_ms: u64,
    last_ms: u64,
}

impl SampleThrottle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: 0,
        }
    }

    /// `true` when more than `interval_ms` passed since the last accepted tick.
    pub fn ready(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_ms) > self.interval_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}

/// Graph regions for up to four motors, one per window corner in reading order.
pub fn motor_regions(
    window_width: i32,
    window_height: i32,
    fraction: f32,
    count: usize,
) -> Result<Vec<Region>> {
    if count > 4 {
        return Err(GraphError::invalid(format!(
            "at most four motor graphs fit the window corners, got {count}"
        )));
    }
    let w = (fraction * window_width as f32) as i32;
    let h = (fraction * window_height as f32) as i32;
    Ok((0..count as i32)
        .map(|i| {
            let (col, row) = (i % 2, i / 2);
            Region::from_pos_size(col * (window_width - w), row * (window_height - h - 1), w, h)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_waits_strictly_longer_than_interval() {
        let mut t = SampleThrottle::new(150);
        assert!(!t.ready(100));
        assert!(!t.ready(150));
        assert!(t.ready(151));
        assert!(!t.ready(300));
        assert!(t.ready(302));
    }

    #[test]
    fn demo_speeds_stay_normalized() {
        let mut demo = MotorDemo::new(4);
        for _ in 0..2_000 {
            demo.update(0.005);
            for i in 0..4 {
                let v = demo.motor_speed(i).unwrap();
                let w = demo.wanted_motor_speed(i).unwrap();
                assert!((0.0..=1.0).contains(&v), "speed {v}");
                assert!((0.0..=1.0).contains(&w), "wanted {w}");
            }
        }
        assert!(demo.motor_speed(4).is_err());
    }
}
