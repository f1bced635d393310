//! Truss Scene - an editable scene model for planar truss design
//!
//! This library is the core of an interactive truss editor:
//! - A mutable graph of joints and members plus point forces
//! - A closed set of atomic, reversible edit actions with a full
//!   undo/redo history
//! - Parametric generators for canonical topologies (Warren, Pratt, Howe)
//! - A serializer producing the problem description consumed by an
//!   external structural analysis service
//!
//! It performs no physics itself: equilibrium solving belongs to the
//! external service, rendering and input dispatch to the surrounding
//! editor.
//!
//! ## Example
//! ```rust
//! use truss_scene::prelude::*;
//!
//! let mut scene = Scene::new();
//!
//! // Generate a five-panel Warren truss
//! let spec = TrussSpec {
//!     height: 3.0,
//!     member_length: 2.0,
//!     bridge_length: 10.0,
//!     bridge_width: 1.0,
//!     joint_load: 5.0,
//!     uniform_load: 0.0,
//! };
//! scene.generate(&spec, TrussKind::Warren).unwrap();
//! assert_eq!(scene.joint_count(), 11);
//!
//! // Hand edits go through the same action executor
//! scene
//!     .apply(Action::move_joint([0.0, 0.5], "B").unwrap())
//!     .unwrap();
//! scene.undo().unwrap();
//!
//! // Project the final state into the solver wire format
//! let query = truss_scene::query::encode(&scene).unwrap();
//! assert!(query.joints.starts_with("[[\"A\""));
//! ```

#![warn(missing_docs)]

pub mod action;
pub mod elements;
pub mod error;
pub mod generators;
pub mod graph;
pub mod ids;
pub mod playback;
pub mod query;
pub mod scene;

// Re-export common types
pub mod prelude {
    //! The most commonly used types, re-exported

    pub use crate::action::{Action, ActionCategory};
    pub use crate::elements::{Force, Joint, JointKind, Member, MemberKey};
    pub use crate::error::{SceneError, SceneResult};
    pub use crate::generators::{TrussKind, TrussSpec};
    pub use crate::graph::MemberGraph;
    pub use crate::query::SolverQuery;
    pub use crate::scene::{Scene, SceneSnapshot};
}
