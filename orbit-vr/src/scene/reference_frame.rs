use glam::{Quat, Vec3};

use crate::pose::Pose;

/// Where device-space origin sits in the host world.
///
/// The initial pose is sampled once on scene entry. The current pose is what transforms
/// actually use; flight scenes re-pin it to the initial pose every frame, while the editor
/// lets the player fly it around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFrame {
    /// Device-space origin in the world, as sampled on scene entry
    pub initial_position: Vec3,
    /// Device-space orientation in the world, as sampled on scene entry
    pub initial_rotation: Quat,
    /// Device-space origin in the world for this frame
    pub current_position: Vec3,
    /// Device-space orientation in the world for this frame
    pub current_rotation: Quat,
}

impl ReferenceFrame {
    /// A frame whose current pose starts at `initial`
    pub fn new(initial: Pose) -> Self {
        Self {
            initial_position: initial.position,
            initial_rotation: initial.rotation,
            current_position: initial.position,
            current_rotation: initial.rotation,
        }
    }

    /// Discard any displacement of the current pose
    pub fn pin(&mut self) {
        self.current_position = self.initial_position;
        self.current_rotation = self.initial_rotation;
    }

    /// The initial pose
    pub fn initial(&self) -> Pose {
        Pose::new(self.initial_position, self.initial_rotation)
    }

    /// The current pose
    pub fn current(&self) -> Pose {
        Pose::new(self.current_position, self.current_rotation)
    }

    /// `current_position + current_rotation * (position / world_scale)`
    pub fn device_position_to_world(&self, position: Vec3, inverse_world_scale: f32) -> Vec3 {
        self.current_position + self.current_rotation * (position * inverse_world_scale)
    }

    /// `current_rotation * rotation`
    pub fn device_rotation_to_world(&self, rotation: Quat) -> Quat {
        self.current_rotation * rotation
    }

    /// Map a device-space pose into the world
    pub fn device_pose_to_world(&self, pose: &Pose, inverse_world_scale: f32) -> Pose {
        Pose {
            position: self.device_position_to_world(pose.position, inverse_world_scale),
            rotation: self.device_rotation_to_world(pose.rotation),
        }
    }
}
