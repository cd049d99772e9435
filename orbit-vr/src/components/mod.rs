//! Components are the data attached to the camera rig's entities
/// Eyes and the rig's marker components
pub mod eye;
/// World transforms derived by the systems
pub mod global_transform;
/// Manipulator handedness
pub mod hand;
/// Debug names
pub mod info;
/// Transforms relative to a parent
pub mod local_transform;
/// Hierarchy links
pub mod parent;
/// VR render cameras
pub mod render_camera;

pub use eye::{Eye, EyeNode, RigRoot};
pub use global_transform::GlobalTransform;
pub use hand::Handedness;
pub use info::Info;
pub use local_transform::LocalTransform;
pub use parent::Parent;
pub use render_camera::{RenderCamera, RenderTargetId};
