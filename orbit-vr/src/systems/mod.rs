#![allow(missing_docs)]
//! Systems are functions called each frame to derive the rig's world transforms
pub mod update_global_transform;
pub mod update_global_transform_with_parent;

pub use update_global_transform::update_global_transform_system;
pub use update_global_transform_with_parent::update_global_transform_with_parent_system;
