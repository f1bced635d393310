//! Joint element - a structural node in the plane

use serde::{Deserialize, Serialize};

/// Support condition at a joint.
///
/// Pin and Roller joints are reaction supports; a statically determinate
/// truss conventionally carries exactly one of each. The model does not
/// enforce that convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JointKind {
    /// Opposes translation in both directions
    Pin,
    /// Opposes translation normal to the rolling surface only
    Roller,
    /// Carries no externally imposed reaction
    Floating,
}

impl JointKind {
    /// Integer code used in the solver wire format.
    /// 0 = Pin, 1 = Roller, 2 = Floating.
    pub fn type_code(self) -> u8 {
        match self {
            JointKind::Pin => 0,
            JointKind::Roller => 1,
            JointKind::Floating => 2,
        }
    }
}

/// A planar truss joint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Support condition
    pub kind: JointKind,
}

impl Joint {
    /// Create a new joint at the given position
    pub fn new(x: f64, y: f64, kind: JointKind) -> Self {
        Self { x, y, kind }
    }

    /// Get the position as an array
    pub fn position(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Shift the joint by a displacement
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_creation() {
        let joint = Joint::new(1.5, -2.0, JointKind::Pin);
        assert_eq!(joint.position(), [1.5, -2.0]);
        assert_eq!(joint.kind, JointKind::Pin);
    }

    #[test]
    fn test_translate() {
        let mut joint = Joint::new(0.0, 1.0, JointKind::Floating);
        joint.translate(2.0, -0.5);
        assert_eq!(joint.position(), [2.0, 0.5]);
    }

    #[test]
    fn test_type_codes() {
        assert_eq!(JointKind::Pin.type_code(), 0);
        assert_eq!(JointKind::Roller.type_code(), 1);
        assert_eq!(JointKind::Floating.type_code(), 2);
    }
}
