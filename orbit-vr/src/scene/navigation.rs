use glam::{Quat, Vec2};

use crate::util::{horizontal_direction, FORWARD, RIGHT, UP};

use super::ReferenceFrame;

/// Fly the editor reference frame up or down. `step` is the distance covered at full
/// deflection this frame. The frame can't be flown below the ground.
pub(crate) fn fly_vertical(reference: &mut ReferenceFrame, axis_y: f32, step: f32) {
    let mut position = reference.current_position + UP * (step * axis_y);
    position.y = position.y.max(0.);
    reference.current_position = position;
}

/// Fly the editor reference frame along the ground, relative to where the head is facing.
pub(crate) fn fly_horizontal(
    reference: &mut ReferenceFrame,
    head_rotation: Quat,
    axis: Vec2,
    step: f32,
) {
    let forward = horizontal_direction(head_rotation, FORWARD) * (step * axis.y);
    let right = horizontal_direction(head_rotation, RIGHT) * (step * axis.x);
    reference.current_position += forward + right;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::Pose;
    use approx::assert_relative_eq;
    use glam::Vec3;
    use std::f32::consts::FRAC_PI_2;

    fn editor_frame() -> ReferenceFrame {
        ReferenceFrame::new(Pose::new(Vec3::new(0., 0., -5.), Quat::IDENTITY))
    }

    #[test]
    pub fn test_fly_vertical() {
        let mut reference = editor_frame();
        fly_vertical(&mut reference, 1., 0.5);
        assert_relative_eq!(reference.current_position, Vec3::new(0., 0.5, -5.));

        fly_vertical(&mut reference, -1., 2.);
        assert_relative_eq!(reference.current_position, Vec3::new(0., 0., -5.));
    }

    #[test]
    pub fn test_fly_horizontal_follows_head_yaw() {
        let mut reference = editor_frame();
        // Head turned to face +X and pitched down; pitch must not leak into movement.
        let head_rotation = Quat::from_rotation_y(FRAC_PI_2) * Quat::from_rotation_x(0.6);
        fly_horizontal(&mut reference, head_rotation, Vec2::new(0., 1.), 2.);
        assert_relative_eq!(reference.current_position, Vec3::new(2., 0., -5.), epsilon = 1e-5);

        let mut reference = editor_frame();
        fly_horizontal(&mut reference, Quat::IDENTITY, Vec2::new(1., 1.), 1.);
        assert_relative_eq!(reference.current_position, Vec3::new(1., 0., -4.), epsilon = 1e-6);
    }

    #[test]
    pub fn test_fly_horizontal_looking_straight_up() {
        let mut reference = editor_frame();
        let head_rotation = Quat::from_rotation_x(-FRAC_PI_2);
        fly_horizontal(&mut reference, head_rotation, Vec2::new(0., 1.), 1.);
        assert_relative_eq!(reference.current_position, Vec3::new(0., 0., -5.), epsilon = 1e-6);
    }
}
