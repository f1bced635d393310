//! Force element - an external point load applied at a joint

use serde::{Deserialize, Serialize};

/// An externally applied load, given as magnitude and direction.
///
/// Direction is an angle in degrees, 0° along +x, counter-clockwise
/// positive. At most one force may exist per joint; the scene enforces
/// this when forces are added.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Force {
    /// Signed magnitude
    pub magnitude: f64,
    /// Direction in degrees
    pub direction: f64,
}

impl Force {
    /// Create a new force
    pub fn new(magnitude: f64, direction: f64) -> Self {
        Self {
            magnitude,
            direction,
        }
    }

    /// Get the x/y components of the force
    pub fn components(&self) -> [f64; 2] {
        let radians = self.direction.to_radians();
        [
            self.magnitude * radians.cos(),
            self.magnitude * radians.sin(),
        ]
    }
}
