use glam::{Mat4, Vec4};
use openxr::Fovf;

use super::ClipPlanes;

/// An eye's asymmetric field of view, stored as the tangents of its half-angles.
///
/// Left and down are negative, right and up positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Tangent of the left half-angle
    pub tan_left: f32,
    /// Tangent of the right half-angle
    pub tan_right: f32,
    /// Tangent of the upper half-angle
    pub tan_up: f32,
    /// Tangent of the lower half-angle
    pub tan_down: f32,
}

impl Frustum {
    /// Build a frustum from half-angles in radians
    pub fn from_angles(left: f32, right: f32, up: f32, down: f32) -> Self {
        Self {
            tan_left: left.tan(),
            tan_right: right.tan(),
            tan_up: up.tan(),
            tan_down: down.tan(),
        }
    }

    /// Off-centre, left-handed (+Z forward) perspective projection with a zero-to-one depth
    /// range, for the given clip planes.
    pub fn projection(&self, clip_planes: ClipPlanes) -> Mat4 {
        let ClipPlanes { near, far } = clip_planes;
        let tan_angle_width = self.tan_right - self.tan_left;
        let tan_angle_height = self.tan_up - self.tan_down;

        Mat4::from_cols(
            Vec4::new(2.0 / tan_angle_width, 0., 0., 0.),
            Vec4::new(0., 2.0 / tan_angle_height, 0., 0.),
            Vec4::new(
                -(self.tan_right + self.tan_left) / tan_angle_width,
                -(self.tan_up + self.tan_down) / tan_angle_height,
                far / (far - near),
                1.,
            ),
            Vec4::new(0., 0., -(far * near) / (far - near), 0.),
        )
    }
}

impl From<Fovf> for Frustum {
    fn from(fov: Fovf) -> Self {
        Frustum::from_angles(fov.angle_left, fov.angle_right, fov.angle_up, fov.angle_down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec3;

    #[test]
    pub fn test_projection_depth_range() {
        let frustum = Frustum::from_angles(-0.8, 0.7, 0.75, -0.85);
        let clip_planes = ClipPlanes {
            near: 0.1,
            far: 400.,
        };
        let projection = frustum.projection(clip_planes);

        let near = projection.project_point3(Vec3::new(0., 0., 0.1));
        let far = projection.project_point3(Vec3::new(0., 0., 400.));
        assert_relative_eq!(near.z, 0., epsilon = 1e-5);
        assert_relative_eq!(far.z, 1., epsilon = 1e-4);
    }

    #[test]
    pub fn test_projection_edges() {
        let frustum = Frustum::from_angles(-0.8, 0.7, 0.75, -0.85);
        let projection = frustum.projection(ClipPlanes {
            near: 0.01,
            far: 50.,
        });

        let z = 2.0;
        let right_edge = projection.project_point3(Vec3::new(frustum.tan_right * z, 0., z));
        let left_edge = projection.project_point3(Vec3::new(frustum.tan_left * z, 0., z));
        let top_edge = projection.project_point3(Vec3::new(0., frustum.tan_up * z, z));
        assert_relative_eq!(right_edge.x, 1., epsilon = 1e-5);
        assert_relative_eq!(left_edge.x, -1., epsilon = 1e-5);
        assert_relative_eq!(top_edge.y, 1., epsilon = 1e-5);
    }

    #[test]
    pub fn test_from_fovf() {
        let fov = Fovf {
            angle_left: -0.5,
            angle_right: 0.5,
            angle_up: 0.5,
            angle_down: -0.5,
        };
        let frustum = Frustum::from(fov);
        assert_relative_eq!(frustum.tan_right, 0.5_f32.tan());
        assert_relative_eq!(frustum.tan_left, -frustum.tan_right);
    }
}
