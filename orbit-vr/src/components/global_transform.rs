use glam::{Affine3A, Quat, Vec3};

use super::LocalTransform;
use crate::pose::Pose;

/// Component used to represent the global transform of the entity in the renderer.
/// This is the transformation from local to global (ie. host world) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalTransform(pub Affine3A);

impl Default for GlobalTransform {
    fn default() -> Self {
        Self(Affine3A::IDENTITY)
    }
}

impl GlobalTransform {
    /// Convenience function to decompose the [`GlobalTransform`] into its components
    pub fn to_scale_rotation_translation(&self) -> (Vec3, Quat, Vec3) {
        self.0.to_scale_rotation_translation()
    }

    /// The position and orientation of this transform, discarding scale
    pub fn to_pose(&self) -> Pose {
        let (_, rotation, translation) = self.to_scale_rotation_translation();
        Pose::new(translation, rotation)
    }
}

impl From<LocalTransform> for GlobalTransform {
    fn from(l: LocalTransform) -> Self {
        GlobalTransform(l.to_affine())
    }
}
