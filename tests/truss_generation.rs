//! End-to-end scenarios: generate a truss, edit it, unwind the history,
//! and project the result into the solver wire format.

use serde_json::{json, Value};

use truss_scene::prelude::*;
use truss_scene::query;

fn five_panel_spec() -> TrussSpec {
    TrussSpec {
        height: 3.0,
        member_length: 2.0,
        bridge_length: 10.0,
        bridge_width: 1.0,
        joint_load: 5.0,
        uniform_load: 0.0,
    }
}

#[test]
fn generated_truss_unwinds_to_an_empty_scene() {
    let mut scene = Scene::new();
    let empty = scene.snapshot();

    let applied = scene
        .generate(&five_panel_spec(), TrussKind::Warren)
        .expect("valid parameters");
    assert_eq!(scene.undo_depth(), applied);
    let built = scene.snapshot();

    while scene.undo().expect("undo succeeds") {}
    assert_eq!(
        scene.snapshot(),
        SceneSnapshot {
            separation: [1.0, 3.0],
            ..empty
        },
        "every store drains; only the grid hint persists"
    );

    while scene.redo().expect("redo succeeds") {}
    assert_eq!(scene.snapshot(), built);
}

#[test]
fn hand_edits_compose_with_generated_state() {
    let mut scene = Scene::new();
    scene
        .generate(&five_panel_spec(), TrussKind::Pratt)
        .unwrap();
    let generated = scene.snapshot();

    // Strengthen one member, reroute another, load a top-chord joint
    scene
        .apply(Action::set_linear_area("A", "C", 0.0, 2.5).unwrap())
        .unwrap();
    scene
        .apply(Action::remove_member("B", "C", 0.0).unwrap())
        .unwrap();
    scene
        .apply(Action::add_member("C", "D", 0.0).unwrap())
        .unwrap();
    scene
        .apply(Action::add_force("B", 1.5, 180.0).unwrap())
        .unwrap();

    assert_eq!(scene.member("A", "C").unwrap().linear_area, 2.5);
    assert!(!scene.has_member("B", "C"));
    assert!(scene.has_member("C", "D"));

    for _ in 0..4 {
        scene.undo().unwrap();
    }
    assert_eq!(scene.snapshot(), generated);
}

#[test]
fn every_generator_rejects_a_non_integral_span() {
    for kind in [TrussKind::Warren, TrussKind::Pratt, TrussKind::Howe] {
        let mut scene = Scene::new();
        let err = scene
            .generate(
                &TrussSpec {
                    bridge_length: 7.0,
                    member_length: 2.0,
                    ..five_panel_spec()
                },
                kind,
            )
            .expect_err("non-integral panel count");
        assert!(matches!(err, SceneError::InvalidSpan { .. }), "{kind:?}");
        assert_eq!(scene.joint_count(), 0, "{kind:?} created joints");
        assert_eq!(scene.member_count(), 0);
        assert_eq!(scene.undo_depth(), 0);
    }
}

#[test]
fn warren_query_payload_matches_wire_format() {
    let mut scene = Scene::new();
    scene
        .generate(&five_panel_spec(), TrussKind::Warren)
        .unwrap();

    let query = scene_query(&scene);

    let joints: Vec<Value> = as_array(&query.joints);
    assert_eq!(joints.len(), 11);
    assert_eq!(joints[0], json!(["A", [-5.0, 0.0], 0]));
    assert_eq!(joints[1], json!(["B", [-4.0, 3.0], 2]));
    assert_eq!(joints[10], json!(["K", [5.0, 0.0], 1]));

    let members: Vec<Value> = as_array(&query.members);
    assert_eq!(members.len(), 19);
    for member in &members {
        let pair = member.as_array().expect("pair");
        assert_eq!(pair.len(), 2);
        assert!(pair[0].as_str() < pair[1].as_str(), "unsorted pair {member}");
    }

    let forces: Vec<Value> = as_array(&query.forces);
    assert_eq!(
        forces,
        vec![
            json!(["C", 5.0, -90.0]),
            json!(["E", 5.0, -90.0]),
            json!(["G", 5.0, -90.0]),
            json!(["I", 5.0, -90.0]),
        ]
    );

    assert_eq!(as_array(&query.separation), vec![json!(1.0), json!(3.0)]);
}

#[test]
fn pratt_and_howe_disagree_only_on_diagonals() {
    let mut pratt = Scene::new();
    pratt.generate(&five_panel_spec(), TrussKind::Pratt).unwrap();
    let mut howe = Scene::new();
    howe.generate(&five_panel_spec(), TrussKind::Howe).unwrap();

    assert_eq!(
        scene_query(&pratt).joints,
        scene_query(&howe).joints,
        "identical lattices"
    );
    assert_eq!(scene_query(&pratt).forces, scene_query(&howe).forces);
    assert_ne!(scene_query(&pratt).members, scene_query(&howe).members);
}

#[test]
fn selection_does_not_leak_into_the_payload() {
    let mut scene = Scene::new();
    scene
        .generate(&five_panel_spec(), TrussKind::Warren)
        .unwrap();
    let before = scene_query(&scene);
    scene
        .apply(Action::select(vec!["A".to_string(), "C".to_string()]).unwrap())
        .unwrap();
    assert_eq!(scene_query(&scene), before);
}

fn scene_query(scene: &Scene) -> SolverQuery {
    query::encode(scene).expect("encodable scene")
}

fn as_array(field: &str) -> Vec<Value> {
    serde_json::from_str::<Value>(field)
        .expect("valid JSON")
        .as_array()
        .expect("array field")
        .clone()
}
