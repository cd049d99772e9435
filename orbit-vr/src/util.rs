use glam::{Quat, Vec3};
use openxr::Posef;

use crate::pose::Pose;

/// The host's forward direction
pub const FORWARD: Vec3 = Vec3::Z;
/// The host's right direction
pub const RIGHT: Vec3 = Vec3::X;
/// The host's up direction
pub const UP: Vec3 = Vec3::Y;

#[inline]
/// Mirror a pose from a right-handed runtime (-Z forward) into the host's left-handed
/// convention (+Z forward) by reflecting it through the XY plane.
pub fn pose_from_right_handed(position: Vec3, rotation: Quat) -> Pose {
    Pose {
        position: Vec3::new(position.x, position.y, -position.z),
        rotation: Quat::from_xyzw(-rotation.x, -rotation.y, rotation.z, rotation.w),
    }
}

#[inline]
/// Convert a `Posef` from OpenXR into a host-space [`Pose`]
pub fn pose_from_posef(pose: Posef) -> Pose {
    let position: Vec3 = mint::Vector3::from(pose.position).into();
    let rotation: Quat = mint::Quaternion::from(pose.orientation).into();

    pose_from_right_handed(position, rotation)
}

#[inline]
/// Rotate `axis` by `rotation`, flatten the result onto the ground plane and normalize it.
/// Returns zero when the rotated axis points straight up or down.
pub fn horizontal_direction(rotation: Quat, axis: Vec3) -> Vec3 {
    let direction = rotation * axis;
    let flattened = Vec3::new(direction.x, 0., direction.z);
    if flattened.length_squared() < f32::EPSILON {
        return Vec3::ZERO;
    }
    flattened.normalize()
}
