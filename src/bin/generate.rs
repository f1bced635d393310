//! Truss generation example - builds a canonical truss and prints the
//! solver query payload
//!
//! Usage: `truss-gen [warren|pratt|howe] [sections]`

use anyhow::{bail, Result};

use truss_scene::prelude::*;
use truss_scene::query;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let kind = match args.next().as_deref() {
        None | Some("warren") => TrussKind::Warren,
        Some("pratt") => TrussKind::Pratt,
        Some("howe") => TrussKind::Howe,
        Some(other) => bail!("unknown truss type '{other}' (expected warren, pratt or howe)"),
    };
    let sections: usize = match args.next() {
        Some(raw) => raw.parse()?,
        None => 5,
    };

    let spec = TrussSpec {
        height: 3.0,
        member_length: 2.0,
        bridge_length: 2.0 * sections as f64,
        bridge_width: 1.0,
        joint_load: 5.0,
        uniform_load: 0.0,
    };

    let mut scene = Scene::new();
    let applied = scene.generate(&spec, kind)?;

    println!(
        "=== {kind:?} truss: {} joints, {} members, {} loads ({applied} actions) ===\n",
        scene.joint_count(),
        scene.member_count(),
        scene.force_count(),
    );

    let query = query::encode(&scene)?;
    println!("joints:     {}", query.joints);
    println!("members:    {}", query.members);
    println!("forces:     {}", query.forces);
    println!("separation: {}", query.separation);

    Ok(())
}
