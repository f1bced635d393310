//! Action taxonomy and reversal algebra
//!
//! Every edit to the scene is an immutable, fully-parameterized [`Action`].
//! Actions are built through validating constructors (a missing or unusable
//! field fails with [`SceneError::MalformedAction`]) and each reversible
//! variant carries enough data to produce its exact inverse without
//! consulting scene state. That self-containment is what makes undo work.
//!
//! [`Action::reverse`] is the single exhaustive reversal table. The only
//! variant without an inverse is [`Action::SetJointId`]; it returns `None`
//! and the executor refuses to admit it into the history stack.

use serde::{Deserialize, Serialize};

use crate::elements::JointKind;
use crate::error::{SceneError, SceneResult};

/// Broad grouping of action variants, by the store they edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionCategory {
    /// Joint store edits
    Joint,
    /// Member store edits
    Member,
    /// Force store edits
    Force,
    /// Selection edits
    Select,
}

/// One atomic, fully-parameterized scene edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Add a joint at a position
    AddJoint {
        /// Position of the new joint
        point: [f64; 2],
        /// Identifier of the new joint
        id: String,
        /// Support condition
        kind: JointKind,
    },
    /// Remove a joint. Only the id is needed to execute, but position and
    /// kind are required so the action can be reversed.
    RemoveJoint {
        /// Position the joint is expected to occupy
        point: [f64; 2],
        /// Identifier of the joint
        id: String,
        /// Support condition the joint is expected to have
        kind: JointKind,
    },
    /// Shift a joint by a displacement
    MoveJoint {
        /// Displacement to apply
        displacement: [f64; 2],
        /// Identifier of the joint
        id: String,
    },
    /// Change a joint's support condition
    SetJointKind {
        /// Identifier of the joint
        id: String,
        /// Current support condition
        old: JointKind,
        /// Replacement support condition
        new: JointKind,
    },
    /// Rename a joint. Carried for taxonomy completeness; it has no
    /// declared inverse and cannot enter the history stack.
    SetJointId {
        /// Current identifier
        old_id: String,
        /// Replacement identifier
        new_id: String,
    },
    /// Connect two joints with a member
    AddMember {
        /// First endpoint
        a: String,
        /// Second endpoint
        b: String,
        /// Linear area of the new member
        linear_area: f64,
    },
    /// Remove the member between two joints
    RemoveMember {
        /// First endpoint
        a: String,
        /// Second endpoint
        b: String,
        /// Linear area the member is expected to have
        linear_area: f64,
    },
    /// Change a member's linear area
    SetLinearArea {
        /// First endpoint
        a: String,
        /// Second endpoint
        b: String,
        /// Current linear area
        old: f64,
        /// Replacement linear area
        new: f64,
    },
    /// Apply an external force to a joint
    AddForce {
        /// Joint the force acts on
        id: String,
        /// Signed magnitude
        magnitude: f64,
        /// Direction in degrees
        direction: f64,
    },
    /// Remove the force at a joint
    RemoveForce {
        /// Joint the force acts on
        id: String,
        /// Magnitude the force is expected to have
        magnitude: f64,
        /// Direction the force is expected to have
        direction: f64,
    },
    /// Change the magnitude of the force at a joint
    SetForceMagnitude {
        /// Joint the force acts on
        id: String,
        /// Current magnitude
        old: f64,
        /// Replacement magnitude
        new: f64,
    },
    /// Change the direction of the force at a joint
    SetForceDirection {
        /// Joint the force acts on
        id: String,
        /// Current direction in degrees
        old: f64,
        /// Replacement direction in degrees
        new: f64,
    },
    /// Add joints to the selection
    Select {
        /// Joint ids to select
        ids: Vec<String>,
    },
    /// Remove joints from the selection
    Deselect {
        /// Joint ids to deselect
        ids: Vec<String>,
    },
}

fn check_finite(action: &'static str, field: &str, value: f64) -> SceneResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SceneError::MalformedAction {
            action,
            reason: format!("{field} is not a finite number"),
        })
    }
}

fn check_id(action: &'static str, field: &str, id: &str) -> SceneResult<()> {
    if id.is_empty() {
        Err(SceneError::MalformedAction {
            action,
            reason: format!("{field} is empty"),
        })
    } else {
        Ok(())
    }
}

fn check_point(action: &'static str, field: &str, point: [f64; 2]) -> SceneResult<()> {
    check_finite(action, field, point[0])?;
    check_finite(action, field, point[1])
}

impl Action {
    /// Build an [`Action::AddJoint`]
    pub fn add_joint(point: [f64; 2], id: &str, kind: JointKind) -> SceneResult<Self> {
        check_point("AddJoint", "point", point)?;
        check_id("AddJoint", "id", id)?;
        Ok(Action::AddJoint {
            point,
            id: id.to_string(),
            kind,
        })
    }

    /// Build an [`Action::RemoveJoint`]
    pub fn remove_joint(point: [f64; 2], id: &str, kind: JointKind) -> SceneResult<Self> {
        check_point("RemoveJoint", "point", point)?;
        check_id("RemoveJoint", "id", id)?;
        Ok(Action::RemoveJoint {
            point,
            id: id.to_string(),
            kind,
        })
    }

    /// Build an [`Action::MoveJoint`]
    pub fn move_joint(displacement: [f64; 2], id: &str) -> SceneResult<Self> {
        check_point("MoveJoint", "displacement", displacement)?;
        check_id("MoveJoint", "id", id)?;
        Ok(Action::MoveJoint {
            displacement,
            id: id.to_string(),
        })
    }

    /// Build an [`Action::SetJointKind`]
    pub fn set_joint_kind(id: &str, old: JointKind, new: JointKind) -> SceneResult<Self> {
        check_id("SetJointKind", "id", id)?;
        Ok(Action::SetJointKind {
            id: id.to_string(),
            old,
            new,
        })
    }

    /// Build an [`Action::SetJointId`]
    pub fn set_joint_id(old_id: &str, new_id: &str) -> SceneResult<Self> {
        check_id("SetJointId", "old_id", old_id)?;
        check_id("SetJointId", "new_id", new_id)?;
        Ok(Action::SetJointId {
            old_id: old_id.to_string(),
            new_id: new_id.to_string(),
        })
    }

    /// Build an [`Action::AddMember`]
    pub fn add_member(a: &str, b: &str, linear_area: f64) -> SceneResult<Self> {
        check_id("AddMember", "a", a)?;
        check_id("AddMember", "b", b)?;
        check_finite("AddMember", "linear_area", linear_area)?;
        Ok(Action::AddMember {
            a: a.to_string(),
            b: b.to_string(),
            linear_area,
        })
    }

    /// Build an [`Action::RemoveMember`]
    pub fn remove_member(a: &str, b: &str, linear_area: f64) -> SceneResult<Self> {
        check_id("RemoveMember", "a", a)?;
        check_id("RemoveMember", "b", b)?;
        check_finite("RemoveMember", "linear_area", linear_area)?;
        Ok(Action::RemoveMember {
            a: a.to_string(),
            b: b.to_string(),
            linear_area,
        })
    }

    /// Build an [`Action::SetLinearArea`]
    pub fn set_linear_area(a: &str, b: &str, old: f64, new: f64) -> SceneResult<Self> {
        check_id("SetLinearArea", "a", a)?;
        check_id("SetLinearArea", "b", b)?;
        check_finite("SetLinearArea", "old", old)?;
        check_finite("SetLinearArea", "new", new)?;
        Ok(Action::SetLinearArea {
            a: a.to_string(),
            b: b.to_string(),
            old,
            new,
        })
    }

    /// Build an [`Action::AddForce`]
    pub fn add_force(id: &str, magnitude: f64, direction: f64) -> SceneResult<Self> {
        check_id("AddForce", "id", id)?;
        check_finite("AddForce", "magnitude", magnitude)?;
        check_finite("AddForce", "direction", direction)?;
        Ok(Action::AddForce {
            id: id.to_string(),
            magnitude,
            direction,
        })
    }

    /// Build an [`Action::RemoveForce`]
    pub fn remove_force(id: &str, magnitude: f64, direction: f64) -> SceneResult<Self> {
        check_id("RemoveForce", "id", id)?;
        check_finite("RemoveForce", "magnitude", magnitude)?;
        check_finite("RemoveForce", "direction", direction)?;
        Ok(Action::RemoveForce {
            id: id.to_string(),
            magnitude,
            direction,
        })
    }

    /// Build an [`Action::SetForceMagnitude`]
    pub fn set_force_magnitude(id: &str, old: f64, new: f64) -> SceneResult<Self> {
        check_id("SetForceMagnitude", "id", id)?;
        check_finite("SetForceMagnitude", "old", old)?;
        check_finite("SetForceMagnitude", "new", new)?;
        Ok(Action::SetForceMagnitude {
            id: id.to_string(),
            old,
            new,
        })
    }

    /// Build an [`Action::SetForceDirection`]
    pub fn set_force_direction(id: &str, old: f64, new: f64) -> SceneResult<Self> {
        check_id("SetForceDirection", "id", id)?;
        check_finite("SetForceDirection", "old", old)?;
        check_finite("SetForceDirection", "new", new)?;
        Ok(Action::SetForceDirection {
            id: id.to_string(),
            old,
            new,
        })
    }

    /// Build an [`Action::Select`]
    pub fn select(ids: Vec<String>) -> SceneResult<Self> {
        for id in &ids {
            check_id("Select", "ids", id)?;
        }
        Ok(Action::Select { ids })
    }

    /// Build an [`Action::Deselect`]
    pub fn deselect(ids: Vec<String>) -> SceneResult<Self> {
        for id in &ids {
            check_id("Deselect", "ids", id)?;
        }
        Ok(Action::Deselect { ids })
    }

    /// Name of the variant, for error messages and logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddJoint { .. } => "AddJoint",
            Action::RemoveJoint { .. } => "RemoveJoint",
            Action::MoveJoint { .. } => "MoveJoint",
            Action::SetJointKind { .. } => "SetJointKind",
            Action::SetJointId { .. } => "SetJointId",
            Action::AddMember { .. } => "AddMember",
            Action::RemoveMember { .. } => "RemoveMember",
            Action::SetLinearArea { .. } => "SetLinearArea",
            Action::AddForce { .. } => "AddForce",
            Action::RemoveForce { .. } => "RemoveForce",
            Action::SetForceMagnitude { .. } => "SetForceMagnitude",
            Action::SetForceDirection { .. } => "SetForceDirection",
            Action::Select { .. } => "Select",
            Action::Deselect { .. } => "Deselect",
        }
    }

    /// The store this action edits
    pub fn category(&self) -> ActionCategory {
        match self {
            Action::AddJoint { .. }
            | Action::RemoveJoint { .. }
            | Action::MoveJoint { .. }
            | Action::SetJointKind { .. }
            | Action::SetJointId { .. } => ActionCategory::Joint,
            Action::AddMember { .. }
            | Action::RemoveMember { .. }
            | Action::SetLinearArea { .. } => ActionCategory::Member,
            Action::AddForce { .. }
            | Action::RemoveForce { .. }
            | Action::SetForceMagnitude { .. }
            | Action::SetForceDirection { .. } => ActionCategory::Force,
            Action::Select { .. } | Action::Deselect { .. } => ActionCategory::Select,
        }
    }

    /// The exact inverse of this action, or `None` for the one variant
    /// ([`Action::SetJointId`]) that has no declared inverse.
    ///
    /// For every reversible variant, `reverse` is an involution:
    /// `a.reverse().and_then(|r| r.reverse()) == Some(a)`.
    pub fn reverse(&self) -> Option<Action> {
        let reversed = match self.clone() {
            Action::AddJoint { point, id, kind } => Action::RemoveJoint { point, id, kind },
            Action::RemoveJoint { point, id, kind } => Action::AddJoint { point, id, kind },
            Action::MoveJoint { displacement, id } => Action::MoveJoint {
                displacement: [-displacement[0], -displacement[1]],
                id,
            },
            Action::SetJointKind { id, old, new } => Action::SetJointKind {
                id,
                old: new,
                new: old,
            },
            Action::SetJointId { .. } => return None,
            Action::AddMember { a, b, linear_area } => Action::RemoveMember { a, b, linear_area },
            Action::RemoveMember { a, b, linear_area } => Action::AddMember { a, b, linear_area },
            Action::SetLinearArea { a, b, old, new } => Action::SetLinearArea {
                a,
                b,
                old: new,
                new: old,
            },
            Action::AddForce {
                id,
                magnitude,
                direction,
            } => Action::RemoveForce {
                id,
                magnitude,
                direction,
            },
            Action::RemoveForce {
                id,
                magnitude,
                direction,
            } => Action::AddForce {
                id,
                magnitude,
                direction,
            },
            Action::SetForceMagnitude { id, old, new } => Action::SetForceMagnitude {
                id,
                old: new,
                new: old,
            },
            Action::SetForceDirection { id, old, new } => Action::SetForceDirection {
                id,
                old: new,
                new: old,
            },
            Action::Select { ids } => Action::Deselect { ids },
            Action::Deselect { ids } => Action::Select { ids },
        };
        Some(reversed)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
