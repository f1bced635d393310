//! Scene - the editable truss model and its command history
//!
//! The [`Scene`] owns every mutable store: the member graph, the joint,
//! member and force maps, and the selection set. Nothing else mutates them;
//! all edits arrive as [`Action`] values through [`Scene::apply`], which
//! validates the action's preconditions in full before touching any store.
//! A rejected action therefore leaves the scene unchanged - apply is
//! transactional.
//!
//! Every applied action is pushed onto the undo stack and clears the redo
//! stack. [`Scene::undo`] applies the action's computed inverse and moves
//! it to the redo stack; [`Scene::redo`] re-applies it. Both are silent
//! no-ops when their stack is empty.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info};

use crate::action::Action;
use crate::elements::{Force, Joint, JointKind, Member, MemberKey};
use crate::error::{SceneError, SceneResult};
use crate::generators::{self, TrussKind, TrussSpec};
use crate::graph::MemberGraph;

/// A point-in-time copy of every scene store, excluding the history stacks.
///
/// Snapshots are what cross the boundary to read-only consumers (the query
/// serializer, tests asserting full-state equality) - never a live
/// reference into the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    /// Member graph
    pub graph: MemberGraph,
    /// Joint store
    pub joints: BTreeMap<String, Joint>,
    /// Member property store
    pub members: BTreeMap<MemberKey, Member>,
    /// Force store
    pub forces: BTreeMap<String, Force>,
    /// Selected joint ids
    pub selection: BTreeSet<String>,
    /// Display grid separation hint
    pub separation: [f64; 2],
}

/// The editable truss scene
#[derive(Debug)]
pub struct Scene {
    graph: MemberGraph,
    joints: BTreeMap<String, Joint>,
    members: BTreeMap<MemberKey, Member>,
    forces: BTreeMap<String, Force>,
    selection: BTreeSet<String>,
    separation: [f64; 2],
    undo_stack: Vec<Action>,
    redo_stack: Vec<Action>,
}

fn fail(action: &Action, reason: impl Into<String>) -> SceneError {
    SceneError::ActionFailed {
        action: Box::new(action.clone()),
        reason: reason.into(),
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene with the default grid separation
    pub fn new() -> Self {
        Self {
            graph: MemberGraph::new(),
            joints: BTreeMap::new(),
            members: BTreeMap::new(),
            forces: BTreeMap::new(),
            selection: BTreeSet::new(),
            separation: [1.0, 1.0],
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    // ========================
    // Read access
    // ========================

    /// Get a joint by id
    pub fn joint(&self, id: &str) -> Option<&Joint> {
        self.joints.get(id)
    }

    /// Iterate over joints in id order
    pub fn joints(&self) -> impl Iterator<Item = (&str, &Joint)> {
        self.joints.iter().map(|(id, joint)| (id.as_str(), joint))
    }

    /// Number of joints
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// Get a member's properties by its endpoints, in either order
    pub fn member(&self, a: &str, b: &str) -> Option<&Member> {
        self.members.get(&MemberKey::new(a, b))
    }

    /// Whether a member connects the two joints
    pub fn has_member(&self, a: &str, b: &str) -> bool {
        self.graph.has_adjacent(a, b)
    }

    /// Iterate over members in canonical key order
    pub fn members(&self) -> impl Iterator<Item = (&MemberKey, &Member)> {
        self.members.iter()
    }

    /// Number of members
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Get the force at a joint
    pub fn force(&self, id: &str) -> Option<&Force> {
        self.forces.get(id)
    }

    /// Iterate over forces in joint-id order
    pub fn forces(&self) -> impl Iterator<Item = (&str, &Force)> {
        self.forces.iter().map(|(id, force)| (id.as_str(), force))
    }

    /// Number of joints carrying a force
    pub fn force_count(&self) -> usize {
        self.forces.len()
    }

    /// Currently selected joint ids
    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    /// The underlying member graph
    pub fn graph(&self) -> &MemberGraph {
        &self.graph
    }

    /// Display grid separation hint
    pub fn separation(&self) -> [f64; 2] {
        self.separation
    }

    /// Number of actions available to undo
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of actions available to redo
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Copy every store into a detached snapshot
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            graph: self.graph.clone(),
            joints: self.joints.clone(),
            members: self.members.clone(),
            forces: self.forces.clone(),
            selection: self.selection.clone(),
            separation: self.separation,
        }
    }

    // ========================
    // Editing
    // ========================

    /// Set the display grid separation hint. Not an undoable edit.
    pub fn set_separation(&mut self, separation: [f64; 2]) {
        self.separation = separation;
    }

    /// Apply one action, recording it for undo.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::ActionFailed`] when a precondition does not
    /// hold; the scene is left unchanged and the history stacks untouched.
    pub fn apply(&mut self, action: Action) -> SceneResult<()> {
        if action.reverse().is_none() {
            return Err(fail(
                &action,
                "has no declared inverse and cannot enter the history",
            ));
        }
        self.perform(&action)?;
        debug!("applied {action}");
        self.undo_stack.push(action);
        self.redo_stack.clear();
        Ok(())
    }

    /// Apply a batch of actions in order, stopping at the first failure.
    /// Returns the number applied; actions applied before a failure remain
    /// applied (and undoable).
    pub fn apply_all(&mut self, actions: Vec<Action>) -> SceneResult<usize> {
        let mut applied = 0;
        for action in actions {
            self.apply(action)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Undo the most recent action. Returns `false` (a no-op) when the
    /// undo stack is empty.
    pub fn undo(&mut self) -> SceneResult<bool> {
        let Some(action) = self.undo_stack.pop() else {
            return Ok(false);
        };
        // Irreversible actions are rejected at apply time, so the stack
        // only ever holds actions with an inverse.
        let Some(inverse) = action.reverse() else {
            self.undo_stack.push(action);
            return Ok(false);
        };
        match self.perform(&inverse) {
            Ok(()) => {
                debug!("undid {action}");
                self.redo_stack.push(action);
                Ok(true)
            }
            Err(err) => {
                self.undo_stack.push(action);
                Err(err)
            }
        }
    }

    /// Re-apply the most recently undone action. Returns `false` (a no-op)
    /// when the redo stack is empty.
    pub fn redo(&mut self) -> SceneResult<bool> {
        let Some(action) = self.redo_stack.pop() else {
            return Ok(false);
        };
        match self.perform(&action) {
            Ok(()) => {
                debug!("redid {action}");
                self.undo_stack.push(action);
                Ok(true)
            }
            Err(err) => {
                self.redo_stack.push(action);
                Err(err)
            }
        }
    }

    /// Populate the scene from a parametric truss generator.
    ///
    /// The whole truss arrives as ordinary actions, so a generated truss
    /// is undoable action by action. Returns the number of actions applied.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidSpan`] or [`SceneError::InvalidInput`]
    /// before any mutation when the parameters are unusable.
    pub fn generate(&mut self, spec: &TrussSpec, kind: TrussKind) -> SceneResult<usize> {
        let actions = generators::generate(spec, kind)?;
        self.set_separation([spec.member_length / 2.0, spec.height]);
        let applied = self.apply_all(actions)?;
        info!("generated {kind:?} truss: {applied} actions");
        Ok(applied)
    }

    /// Execute one action against the stores. Every precondition is checked
    /// before the first mutation, so a failure leaves the scene untouched.
    fn perform(&mut self, action: &Action) -> SceneResult<()> {
        match action {
            Action::AddJoint { point, id, kind } => {
                if self.joints.contains_key(id) {
                    return Err(fail(action, format!("joint '{id}' already exists")));
                }
                self.joints
                    .insert(id.clone(), Joint::new(point[0], point[1], *kind));
                self.graph.add_joint(id);
            }
            Action::RemoveJoint { point, id, kind } => {
                let joint = self
                    .joints
                    .get(id)
                    .ok_or_else(|| fail(action, format!("joint '{id}' not found")))?;
                if joint.position() != *point {
                    return Err(fail(
                        action,
                        format!("recorded position does not match joint '{id}'"),
                    ));
                }
                if joint.kind != *kind {
                    return Err(fail(
                        action,
                        format!("recorded kind does not match joint '{id}'"),
                    ));
                }
                if self.graph.degree(id) > 0 {
                    return Err(fail(
                        action,
                        format!("joint '{id}' still has members attached"),
                    ));
                }
                if self.forces.contains_key(id) {
                    return Err(fail(action, format!("joint '{id}' still carries a force")));
                }
                if self.selection.contains(id) {
                    return Err(fail(action, format!("joint '{id}' is still selected")));
                }
                self.joints.remove(id);
                self.graph.remove_joint(id);
            }
            Action::MoveJoint { displacement, id } => {
                let joint = self
                    .joints
                    .get_mut(id)
                    .ok_or_else(|| fail(action, format!("joint '{id}' not found")))?;
                joint.translate(displacement[0], displacement[1]);
            }
            Action::SetJointKind { id, old, new } => {
                let joint = self
                    .joints
                    .get_mut(id)
                    .ok_or_else(|| fail(action, format!("joint '{id}' not found")))?;
                if joint.kind != *old {
                    return Err(fail(
                        action,
                        format!("recorded kind does not match joint '{id}'"),
                    ));
                }
                joint.kind = *new;
            }
            Action::SetJointId { .. } => {
                return Err(fail(
                    action,
                    "has no declared inverse and cannot enter the history",
                ));
            }
            Action::AddMember { a, b, linear_area } => {
                if a == b {
                    return Err(fail(action, "member endpoints must differ"));
                }
                for id in [a, b] {
                    if !self.joints.contains_key(id) {
                        return Err(fail(action, format!("joint '{id}' not found")));
                    }
                }
                let key = MemberKey::new(a, b);
                if self.members.contains_key(&key) {
                    return Err(fail(
                        action,
                        format!("member '{a}'-'{b}' already exists"),
                    ));
                }
                self.members.insert(key, Member::new(*linear_area));
                self.graph.add_member(a, b);
            }
            Action::RemoveMember { a, b, linear_area } => {
                let key = MemberKey::new(a, b);
                let member = self
                    .members
                    .get(&key)
                    .ok_or_else(|| fail(action, format!("no member between '{a}' and '{b}'")))?;
                if member.linear_area != *linear_area {
                    return Err(fail(
                        action,
                        format!("recorded linear area does not match member '{a}'-'{b}'"),
                    ));
                }
                self.members.remove(&key);
                self.graph.remove_member(a, b);
            }
            Action::SetLinearArea { a, b, old, new } => {
                let key = MemberKey::new(a, b);
                let member = self
                    .members
                    .get_mut(&key)
                    .ok_or_else(|| fail(action, format!("no member between '{a}' and '{b}'")))?;
                if member.linear_area != *old {
                    return Err(fail(
                        action,
                        format!("recorded linear area does not match member '{a}'-'{b}'"),
                    ));
                }
                member.linear_area = *new;
            }
            Action::AddForce {
                id,
                magnitude,
                direction,
            } => {
                if !self.joints.contains_key(id) {
                    return Err(fail(action, format!("joint '{id}' not found")));
                }
                if self.forces.contains_key(id) {
                    return Err(fail(action, format!("joint '{id}' already carries a force")));
                }
                self.forces
                    .insert(id.clone(), Force::new(*magnitude, *direction));
            }
            Action::RemoveForce {
                id,
                magnitude,
                direction,
            } => {
                let force = self
                    .forces
                    .get(id)
                    .ok_or_else(|| fail(action, format!("no force at joint '{id}'")))?;
                if force.magnitude != *magnitude || force.direction != *direction {
                    return Err(fail(
                        action,
                        format!("recorded force does not match joint '{id}'"),
                    ));
                }
                self.forces.remove(id);
            }
            Action::SetForceMagnitude { id, old, new } => {
                let force = self
                    .forces
                    .get_mut(id)
                    .ok_or_else(|| fail(action, format!("no force at joint '{id}'")))?;
                if force.magnitude != *old {
                    return Err(fail(
                        action,
                        format!("recorded magnitude does not match joint '{id}'"),
                    ));
                }
                force.magnitude = *new;
            }
            Action::SetForceDirection { id, old, new } => {
                let force = self
                    .forces
                    .get_mut(id)
                    .ok_or_else(|| fail(action, format!("no force at joint '{id}'")))?;
                if force.direction != *old {
                    return Err(fail(
                        action,
                        format!("recorded direction does not match joint '{id}'"),
                    ));
                }
                force.direction = *new;
            }
            Action::Select { ids } => {
                for id in ids {
                    if !self.joints.contains_key(id) {
                        return Err(fail(action, format!("joint '{id}' not found")));
                    }
                    if self.selection.contains(id) {
                        return Err(fail(action, format!("joint '{id}' is already selected")));
                    }
                }
                for id in ids {
                    self.selection.insert(id.clone());
                }
            }
            Action::Deselect { ids } => {
                for id in ids {
                    if !self.selection.contains(id) {
                        return Err(fail(action, format!("joint '{id}' is not selected")));
                    }
                }
                for id in ids {
                    self.selection.remove(id);
                }
            }
        }
        Ok(())
    }
}
