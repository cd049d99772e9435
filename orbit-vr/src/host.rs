//! The seams between the camera rig core and the game it runs inside.
//!
//! The host integration layer implements these traits and passes them into the
//! [`crate::SceneCoordinator`] calls that need them.
use glam::{Affine3A, Quat, Vec3};

use crate::{
    components::{Eye, Handedness, RenderCamera},
    pose::Pose,
    rig::CameraSlot,
};

/// Handle to one of the host's native cameras
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostCameraId(pub u64);

/// Handle to a host object that can receive pointer events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerTargetId(pub u64);

/// A synthetic pointer notification sent to objects under a manipulator's fingertip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The trigger was pressed
    Down,
    /// The trigger was released
    Up,
}

/// How the headset runtime reports the device-space origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingSpace {
    /// Origin fixed at a calibrated seated position
    Seated,
    /// Origin on the room-scale floor
    Standing,
}

/// The host game's scene graph, as seen by the camera rig.
pub trait HostScene {
    /// Look up a native camera by name
    fn find_camera(&self, name: &str) -> Option<HostCameraId>;

    /// Enable or disable a native camera
    fn set_camera_enabled(&mut self, camera: HostCameraId, enabled: bool);

    /// World pose of the host's cockpit interior camera
    fn internal_camera_pose(&self) -> Pose;

    /// World pose of the vessel the player controls
    fn active_vessel_pose(&self) -> Pose;

    /// Map a position in the cockpit's internal space into world space
    fn internal_to_world_position(&self, position: Vec3) -> Vec3;

    /// Map a rotation in the cockpit's internal space into world space
    fn internal_to_world_rotation(&self, rotation: Quat) -> Quat;
}

/// The headset and manipulator runtime.
pub trait DeviceManager {
    /// Switch how device-space origin is reported
    fn set_tracking_space(&mut self, tracking_space: TrackingSpace);

    /// Make the headset's current pose the new seated origin
    fn reset_seated_zero_pose(&mut self);

    /// Objects currently under a manipulator's fingertip
    fn fingertip_targets(&self, handedness: Handedness) -> Vec<PointerTargetId>;

    /// Deliver a pointer event to an object
    fn send_pointer_event(&mut self, target: PointerTargetId, event: PointerEvent);
}

/// Everything needed to draw one VR camera.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest<'a> {
    /// The eye being drawn
    pub eye: Eye,
    /// The camera role being drawn
    pub slot: CameraSlot,
    /// The camera's parameters
    pub camera: &'a RenderCamera,
    /// Where the camera is in the world
    pub world_from_camera: Affine3A,
}

/// Draws VR cameras into their targets.
pub trait RenderBackend {
    /// Render a single camera. Called in draw order.
    fn render(&mut self, request: &RenderRequest<'_>);
}
