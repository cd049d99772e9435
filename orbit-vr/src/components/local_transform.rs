use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::pose::Pose;

/// The entity's transform relative to its [`super::Parent`].
///
/// Rig entities are positioned by writing to their `LocalTransform`; the transform systems
/// then derive the [`super::GlobalTransform`] used when the camera is rendered. If the entity
/// doesn't have a [`super::Parent`], then the global transform is just whatever you've set here.
#[derive(Clone, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct LocalTransform {
    /// The translation of the entity
    pub translation: Vec3,
    /// The rotation of the entity
    pub rotation: Quat,
    /// The non-uniform scale of the entity
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    /// Convenience function to convert the [`LocalTransform`] into a [`glam::Affine3A`]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Update the translation and rotation from a [`Pose`], leaving scale untouched
    pub fn update_from_pose(&mut self, pose: &Pose) {
        self.translation = pose.position;
        self.rotation = pose.rotation;
    }

    /// Update the translation, rotation and scale from a [`glam::Affine3A`]
    pub fn update_from_affine(&mut self, transform: &Affine3A) {
        let (scale, rotation, translation) = transform.to_scale_rotation_translation();
        self.scale = scale;
        self.rotation = rotation;
        self.translation = translation;
    }
}

impl From<Pose> for LocalTransform {
    fn from(pose: Pose) -> Self {
        Self {
            translation: pose.position,
            rotation: pose.rotation,
            scale: Vec3::ONE,
        }
    }
}
