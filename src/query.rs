//! Query serializer - the wire format sent to the structural analysis service
//!
//! A pure projection of scene state into four string-encoded JSON arrays.
//! No physics happens here (or anywhere in this crate); the payload is a
//! well-formed problem description for the external solver. Store order is
//! already canonical (id order for joints and forces, sorted pairs for
//! members), so identical scenes encode byte-identically.

use serde::Serialize;

use crate::error::SceneResult;
use crate::scene::Scene;

/// The outbound solver payload: one JSON-encoded array per field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolverQuery {
    /// `[id, [x, y], typeCode]` per joint; 0 = Pin, 1 = Roller, 2 = Floating
    pub joints: String,
    /// `[idLow, idHigh]` per member, canonically ordered
    pub members: String,
    /// `[id, magnitude, directionDegrees]` per force
    pub forces: String,
    /// `[xSeparation, ySeparation]` display grid hint
    pub separation: String,
}

/// Encode the current scene state.
///
/// # Errors
///
/// Returns [`crate::error::SceneError::SerializationError`] if JSON
/// encoding fails.
pub fn encode(scene: &Scene) -> SceneResult<SolverQuery> {
    let joints: Vec<(&str, [f64; 2], u8)> = scene
        .joints()
        .map(|(id, joint)| (id, joint.position(), joint.kind.type_code()))
        .collect();
    let members: Vec<(&str, &str)> = scene
        .members()
        .map(|(key, _)| (key.low(), key.high()))
        .collect();
    let forces: Vec<(&str, f64, f64)> = scene
        .forces()
        .map(|(id, force)| (id, force.magnitude, force.direction))
        .collect();

    Ok(SolverQuery {
        joints: serde_json::to_string(&joints)?,
        members: serde_json::to_string(&members)?,
        forces: serde_json::to_string(&forces)?,
        separation: serde_json::to_string(&scene.separation())?,
    })
}
