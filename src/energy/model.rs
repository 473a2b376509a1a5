use serde::{Deserialize, Serialize};

/// Altitude the operating-point solver holds the drone at, in meters.
///
/// Altitude only enters the energy model linearly, so its optimum sits at
/// a boundary rather than a stationary point; the solver pins it here
/// instead of treating it as a decision variable.
pub const CRUISE_ALTITUDE: f64 = 100.0;

/// Per-meter energy model `E = a·v² + b·h + c`.
///
/// `a` scales the quadratic velocity term, `b` the linear altitude term,
/// and `c` is the baseline draw independent of both.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct EnergyModel {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Velocity/altitude pair the solver settles on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperatingPoint {
    pub velocity: f64,
    pub altitude: f64,
}

impl EnergyModel {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        EnergyModel { a, b, c }
    }

    /// Energy drawn per meter at the given velocity and altitude.
    pub fn consumption(&self, velocity: f64, altitude: f64) -> f64 {
        self.a * velocity * velocity + self.b * altitude + self.c
    }

    /// Closed-form operating point from zeroing dE/dv, with altitude held
    /// at [`CRUISE_ALTITUDE`].
    ///
    /// When `a` is zero the derivative vanishes everywhere and velocity
    /// falls back to zero. A negative `b/a` ratio has no real root; the
    /// square root yields NaN and is passed through unchanged.
    pub fn optimal_operating_point(&self) -> OperatingPoint {
        let velocity = if self.a != 0.0 {
            (self.b / (2.0 * self.a)).sqrt()
        } else {
            0.0
        };
        OperatingPoint {
            velocity,
            altitude: CRUISE_ALTITUDE,
        }
    }

    /// Total energy over a path: per-meter draw at `point` times `distance`.
    pub fn total_energy(&self, point: OperatingPoint, distance: f64) -> f64 {
        self.consumption(point.velocity, point.altitude) * distance
    }
}
