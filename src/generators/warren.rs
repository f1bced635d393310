//! Warren truss generator
//!
//! With n panels there are 2n + 1 joints alternating between the bottom
//! chord (even index, y = 0) and the top chord (odd index, y = height),
//! x advancing half a panel per index from the centered start. Each joint
//! connects to its successor and its successor-but-one, which produces the
//! zigzag diagonal pattern with no verticals.

use crate::action::Action;
use crate::elements::JointKind;
use crate::error::SceneResult;
use crate::ids::joint_id;

use super::TrussSpec;

/// Build the action batch for a Warren truss
pub(crate) fn actions(spec: &TrussSpec) -> SceneResult<Vec<Action>> {
    let sections = spec.sections()?;
    let num_nodes = 2 * sections + 1;
    let mut actions = Vec::new();

    for i in 0..num_nodes {
        let x = spec.x_start() + i as f64 * spec.member_length / 2.0;
        let y = if i % 2 == 1 { spec.height } else { 0.0 };
        let kind = if i == 0 {
            JointKind::Pin
        } else if i == num_nodes - 1 {
            JointKind::Roller
        } else {
            JointKind::Floating
        };
        actions.push(Action::add_joint([x, y], &joint_id(i), kind)?);
    }

    for i in 0..num_nodes - 1 {
        actions.push(Action::add_member(&joint_id(i), &joint_id(i + 1), 0.0)?);
        if i + 2 < num_nodes {
            actions.push(Action::add_member(&joint_id(i), &joint_id(i + 2), 0.0)?);
        }
    }

    let load = spec.panel_load();
    for i in 1..num_nodes - 1 {
        if i % 2 == 0 {
            actions.push(Action::add_force(&joint_id(i), load, -90.0)?);
        }
    }

    Ok(actions)
}
