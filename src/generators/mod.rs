//! Parametric truss topology generators
//!
//! Each generator turns a handful of bridge parameters into a complete
//! joint/member/force set, emitted as ordinary [`Action`]s so a generated
//! truss goes through the same executor (and history) as hand edits.
//! Generation is deterministic: identical parameters produce identical
//! ids, coordinates and action order.
//!
//! Pratt and Howe share one lattice (chords, verticals, boundary
//! diagonals); only the sense of the interior diagonals differs. Their
//! wiring is generated for the left half of the span and mapped to the
//! right half with a parity-preserving mirror transform. The index
//! arithmetic is easy to get subtly wrong, so the per-type modules pin it
//! down against hand-enumerated lattices for small panel counts.

pub mod howe;
pub mod pratt;
pub mod warren;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::elements::JointKind;
use crate::error::{SceneError, SceneResult};
use crate::ids::joint_id;

/// Which canonical topology to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrussKind {
    /// Alternating zigzag diagonals, no verticals
    Warren,
    /// Diagonals slope down toward midspan
    Pratt,
    /// Diagonals slope up toward midspan
    Howe,
}

/// Geometry and loading parameters for truss generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrussSpec {
    /// Vertical distance between the chords
    pub height: f64,
    /// Length of one panel along the span
    pub member_length: f64,
    /// Total span
    pub bridge_length: f64,
    /// Deck width, used for tributary-area load lumping
    pub bridge_width: f64,
    /// Point load applied at each loaded joint
    pub joint_load: f64,
    /// Distributed load, lumped into the joint loads
    pub uniform_load: f64,
}

impl Default for TrussSpec {
    fn default() -> Self {
        Self {
            height: 1.0,
            member_length: 1.0,
            bridge_length: 1.0,
            bridge_width: 1.0,
            joint_load: 0.0,
            uniform_load: 0.0,
        }
    }
}

impl TrussSpec {
    /// Number of panels along the span.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidInput`] for non-positive or non-finite
    /// lengths and [`SceneError::InvalidSpan`] when the span is not a whole
    /// number of panels. Checked before any joint is created.
    pub fn sections(&self) -> SceneResult<usize> {
        for (name, value) in [
            ("height", self.height),
            ("member length", self.member_length),
            ("bridge length", self.bridge_length),
            ("bridge width", self.bridge_width),
            ("joint load", self.joint_load),
            ("uniform load", self.uniform_load),
        ] {
            if !value.is_finite() {
                return Err(SceneError::InvalidInput(format!(
                    "{name} is not a finite number"
                )));
            }
        }
        if self.member_length <= 0.0 || self.bridge_length <= 0.0 {
            return Err(SceneError::InvalidInput(
                "member length and bridge length must be positive".to_string(),
            ));
        }
        let ratio = self.bridge_length / self.member_length;
        if ratio.fract() != 0.0 {
            return Err(SceneError::InvalidSpan {
                bridge_length: self.bridge_length,
                member_length: self.member_length,
            });
        }
        Ok(ratio as usize)
    }

    /// Effective load at each loaded joint: the point load plus the
    /// distributed load lumped over the panel's tributary area.
    pub fn panel_load(&self) -> f64 {
        self.joint_load + self.uniform_load * (self.member_length * self.bridge_width / 2.0)
    }

    /// X coordinate of the left end of the span (the span is centered on 0)
    pub(crate) fn x_start(&self) -> f64 {
        -self.bridge_length / 2.0
    }
}

/// Generate the action batch for a truss of the given kind
pub fn generate(spec: &TrussSpec, kind: TrussKind) -> SceneResult<Vec<Action>> {
    match kind {
        TrussKind::Warren => warren::actions(spec),
        TrussKind::Pratt => pratt::actions(spec),
        TrussKind::Howe => howe::actions(spec),
    }
}

// ========================
// Shared Pratt/Howe lattice
// ========================
//
// With n panels there are N = 2n joints: even indices on the bottom chord,
// odd on the top, x advancing one panel every two indices, and the final
// index pulled down to the bottom chord. Column k (0..=n) owns bottom
// joint 2k (column n's is index 2n-1) and, for 1 <= k <= n-1, top joint
// 2k-1.

/// Index of the bottom-chord joint in column `k`
pub(crate) fn bottom(k: usize, sections: usize) -> usize {
    if k == sections {
        2 * sections - 1
    } else {
        2 * k
    }
}

/// Index of the top-chord joint in column `k` (valid for 1 <= k <= n-1)
pub(crate) fn top(k: usize) -> usize {
    2 * k - 1
}

/// Mirror a lattice index about midspan, preserving the chord it sits on.
///
/// The naive reflection `num_nodes - 1 - i` flips parity (and therefore
/// chord); the correction maps each same-column top/bottom pair onto the
/// mirrored column's pair. The two span ends map onto each other.
pub(crate) fn mirror(i: usize, num_nodes: usize) -> usize {
    if i == 0 {
        num_nodes - 1
    } else if i == num_nodes - 1 {
        0
    } else if i % 2 == 1 {
        num_nodes - 2 - i
    } else {
        num_nodes - i
    }
}

/// Joint actions for the shared Pratt/Howe lattice
pub(crate) fn panel_joints(spec: &TrussSpec, sections: usize) -> SceneResult<Vec<Action>> {
    let num_nodes = 2 * sections;
    let mut actions = Vec::with_capacity(num_nodes);
    for i in 0..num_nodes {
        let column = (i + 1) / 2;
        let x = spec.x_start() + column as f64 * spec.member_length;
        let y = if i % 2 == 1 && i != num_nodes - 1 {
            spec.height
        } else {
            0.0
        };
        let kind = if i == 0 {
            JointKind::Pin
        } else if i == num_nodes - 1 {
            JointKind::Roller
        } else {
            JointKind::Floating
        };
        actions.push(Action::add_joint([x, y], &joint_id(i), kind)?);
    }
    Ok(actions)
}

/// Chords, verticals and boundary diagonals common to Pratt and Howe
pub(crate) fn panel_frame(sections: usize) -> Vec<(usize, usize)> {
    let n = sections;
    let mut edges = Vec::new();
    for k in 0..n {
        edges.push((bottom(k, n), bottom(k + 1, n)));
    }
    for k in 1..n.saturating_sub(1) {
        edges.push((top(k), top(k + 1)));
    }
    for k in 1..n {
        edges.push((top(k), bottom(k, n)));
    }
    edges.push((bottom(0, n), top(1)));
    edges.push((top(n - 1), bottom(n, n)));
    edges
}

/// One interior diagonal per interior panel: the left half from `left_rule`
/// (panel index -> edge), the right half by mirroring it. A self-mirrored
/// middle panel gets the left-rule diagonal only.
pub(crate) fn mirrored_diagonals(
    sections: usize,
    left_rule: impl Fn(usize) -> (usize, usize),
) -> Vec<(usize, usize)> {
    let n = sections;
    let num_nodes = 2 * n;
    let mut edges = Vec::new();
    for panel in 1..=n.saturating_sub(2) {
        if 2 * panel > n - 1 {
            continue;
        }
        let (i, j) = left_rule(panel);
        edges.push((i, j));
        if 2 * panel < n - 1 {
            edges.push((mirror(i, num_nodes), mirror(j, num_nodes)));
        }
    }
    edges
}

/// Member actions for a list of index pairs
pub(crate) fn member_actions(edges: &[(usize, usize)]) -> SceneResult<Vec<Action>> {
    edges
        .iter()
        .map(|&(i, j)| Action::add_member(&joint_id(i), &joint_id(j), 0.0))
        .collect()
}

/// Downward lumped loads on every interior bottom-chord joint of the
/// Pratt/Howe lattice
pub(crate) fn panel_forces(spec: &TrussSpec, sections: usize) -> SceneResult<Vec<Action>> {
    let load = spec.panel_load();
    (1..sections)
        .map(|k| Action::add_force(&joint_id(bottom(k, sections)), load, -90.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_requires_integral_ratio() {
        let spec = TrussSpec {
            bridge_length: 7.0,
            member_length: 2.0,
            ..TrussSpec::default()
        };
        assert!(matches!(
            spec.sections(),
            Err(SceneError::InvalidSpan { .. })
        ));
    }

    #[test]
    fn test_sections_rejects_non_positive_lengths() {
        let spec = TrussSpec {
            bridge_length: 10.0,
            member_length: 0.0,
            ..TrussSpec::default()
        };
        assert!(matches!(spec.sections(), Err(SceneError::InvalidInput(_))));
    }

    #[test]
    fn test_panel_load_lumps_tributary_area() {
        let spec = TrussSpec {
            member_length: 2.0,
            bridge_width: 3.0,
            joint_load: 5.0,
            uniform_load: 4.0,
            ..TrussSpec::default()
        };
        // 5 + 4 * (2 * 3 / 2)
        assert_eq!(spec.panel_load(), 17.0);
    }

    #[test]
    fn test_mirror_preserves_chord() {
        // n = 4, N = 8: bottoms 0,2,4,6,7; tops 1,3,5
        let n = 8;
        assert_eq!(mirror(0, n), 7);
        assert_eq!(mirror(7, n), 0);
        assert_eq!(mirror(2, n), 6); // bottom col 1 -> bottom col 3
        assert_eq!(mirror(6, n), 2);
        assert_eq!(mirror(1, n), 5); // top col 1 -> top col 3
        assert_eq!(mirror(5, n), 1);
        assert_eq!(mirror(3, n), 3); // top col 2 mirrors onto itself
        assert_eq!(mirror(4, n), 4); // bottom col 2 mirrors onto itself
    }

    #[test]
    fn test_mirror_is_an_involution() {
        for sections in 2..=6 {
            let num_nodes = 2 * sections;
            for i in 0..num_nodes {
                assert_eq!(mirror(mirror(i, num_nodes), num_nodes), i);
            }
        }
    }

    #[test]
    fn test_frame_and_diagonals_are_statically_determinate() {
        // members = 2 * joints - 3 for a simply supported determinate truss
        for sections in 2..=7 {
            let num_nodes = 2 * sections;
            let frame = panel_frame(sections).len();
            let diagonals = mirrored_diagonals(sections, |p| (top(p), bottom(p + 1, sections))).len();
            assert_eq!(
                frame + diagonals,
                2 * num_nodes - 3,
                "sections = {sections}"
            );
        }
    }
}
