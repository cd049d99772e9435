use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A position and orientation, either in device space or in host world space.
///
/// Poses use the host's left-handed convention: +X is right, +Y is up and +Z is forward.
/// Use [`crate::util::pose_from_posef`] to bring in poses from a right-handed runtime.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Pose {
    /// Where the pose is
    pub position: Vec3,
    /// Which way the pose is facing
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// The pose at the origin, facing forward
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Create a new pose
    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Convert the pose into a rigid [`glam::Affine3A`]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_rotation_translation(self.rotation, self.position)
    }

    /// Compose a pose expressed relative to this one: `self * child`
    pub fn compose(&self, child: &Pose) -> Pose {
        Pose {
            position: self.position + self.rotation * child.position,
            rotation: self.rotation * child.rotation,
        }
    }
}
