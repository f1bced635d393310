//! Pratt truss generator
//!
//! Shares the paired top/bottom lattice with the Howe generator; Pratt's
//! interior diagonals run from an upper panel point down toward midspan on
//! both halves of the span.

use crate::action::Action;
use crate::error::SceneResult;

use super::{bottom, member_actions, mirrored_diagonals, panel_forces, panel_frame, panel_joints, top, TrussSpec};

/// Build the action batch for a Pratt truss
pub(crate) fn actions(spec: &TrussSpec) -> SceneResult<Vec<Action>> {
    let sections = spec.sections()?;
    if sections < 2 {
        return Err(crate::error::SceneError::InvalidInput(
            "a Pratt truss needs at least two panels".to_string(),
        ));
    }

    let mut actions = panel_joints(spec, sections)?;
    let mut edges = panel_frame(sections);
    edges.extend(mirrored_diagonals(sections, |panel| {
        (top(panel), bottom(panel + 1, sections))
    }));
    actions.extend(member_actions(&edges)?);
    actions.extend(panel_forces(spec, sections)?);
    Ok(actions)
}
