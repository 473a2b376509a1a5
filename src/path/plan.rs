use serde::{Deserialize, Serialize};

use crate::Waypoint;

/// Ordered sequence of waypoints the drone visits front to back.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlightPlan {
    pub waypoints: Vec<Waypoint>,
}

impl FlightPlan {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        FlightPlan { waypoints }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Straight-line length of each leg between consecutive waypoints.
    pub fn leg_lengths(&self) -> Vec<f64> {
        self.waypoints
            .windows(2)
            .map(|leg| leg[0].distance(&leg[1]))
            .collect()
    }

    /// Total straight-line path length. Plans with fewer than two
    /// waypoints have no legs and sum to zero.
    pub fn total_distance(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|leg| leg[0].distance(&leg[1]))
            .sum()
    }
}
