//! Scene element types: joints, members and forces

pub mod force;
pub mod joint;
pub mod member;

pub use force::Force;
pub use joint::{Joint, JointKind};
pub use member::{Member, MemberKey};
