//! Wind-gust signal shapes.
//!
//! A gust is a deterministic wind-speed deviation u(t) added on top of the
//! steady wind the model was linearized at. Shapes cover the standard design
//! cases: a unit-amplitude step, a smooth 1−cos gust over a finite window,
//! and a rotational-sampling sine at the rotor frequency.

use std::f64::consts::TAU;

/// Deterministic wind-speed deviation signal.
#[derive(Clone, Copy, Debug)]
pub enum Gust {
    /// Sudden sustained wind-speed change at t = 0
    Step { amplitude: f64 },
    /// Smooth 1−cos gust: `0.5·A·(1 − cos(2π(t − start)/duration))` inside
    /// the window, zero outside
    Smooth {
        amplitude: f64,
        duration: f64,
        start_time: f64,
    },
    /// Rotational sampling of a non-uniform wind field: a sine at the rotor
    /// rotation frequency
    Rotational { amplitude: f64, rotor_speed: f64 },
}

impl Gust {
    /// Wind-speed deviation at time `t` (seconds).
    pub fn wind_deviation(&self, t: f64) -> f64 {
        match *self {
            Gust::Step { amplitude } => {
                if t >= 0.0 { amplitude } else { 0.0 }
            }
            Gust::Smooth {
                amplitude,
                duration,
                start_time,
            } => {
                if t < start_time || t > start_time + duration {
                    0.0
                } else {
                    0.5 * amplitude * (1.0 - (TAU * (t - start_time) / duration).cos())
                }
            }
            Gust::Rotational {
                amplitude,
                rotor_speed,
            } => amplitude * (rotor_speed * t).sin(),
        }
    }
}
