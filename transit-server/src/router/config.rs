//! Routing configuration.

use serde::{Deserialize, Serialize};

use super::RouterError;

/// Parameters for the wait-plus-ride time model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Minutes spent waiting at a stop before every boarding.
    pub bus_wait_time: u32,

    /// Bus speed in km/h.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create validated settings; both values must be positive.
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Result<Self, RouterError> {
        let settings = Self {
            bus_wait_time,
            bus_velocity,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check the invariants deserialized settings skip.
    pub fn validate(&self) -> Result<(), RouterError> {
        if self.bus_wait_time == 0 {
            return Err(RouterError::InvalidSettings("bus_wait_time must be positive"));
        }
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(RouterError::InvalidSettings("bus_velocity must be positive"));
        }
        Ok(())
    }

    /// Wait time in minutes as a weight.
    pub fn wait_minutes(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Minutes needed to ride `meters` of road.
    pub fn ride_minutes(&self, meters: f64) -> f64 {
        // km/h to m/min
        meters / (self.bus_velocity * 1000.0 / 60.0)
    }

    /// Weight of an edge: one wait plus the ride over `meters`.
    pub fn edge_weight(&self, meters: f64) -> f64 {
        self.wait_minutes() + self.ride_minutes(meters)
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6,
            bus_velocity: 40.0,
        }
    }
}
