//! Howe truss generator
//!
//! The same lattice as the Pratt generator with the interior diagonals in
//! the opposite sense: they rise from a lower panel point up toward
//! midspan on both halves of the span.

use crate::action::Action;
use crate::error::SceneResult;

use super::{bottom, member_actions, mirrored_diagonals, panel_forces, panel_frame, panel_joints, top, TrussSpec};

/// Build the action batch for a Howe truss
pub(crate) fn actions(spec: &TrussSpec) -> SceneResult<Vec<Action>> {
    let sections = spec.sections()?;
    if sections < 2 {
        return Err(crate::error::SceneError::InvalidInput(
            "a Howe truss needs at least two panels".to_string(),
        ));
    }

    let mut actions = panel_joints(spec, sections)?;
    let mut edges = panel_frame(sections);
    edges.extend(mirrored_diagonals(sections, |panel| {
        (bottom(panel, sections), top(panel + 1))
    }));
    actions.extend(member_actions(&edges)?);
    actions.extend(panel_forces(spec, sections)?);
    Ok(actions)
}
