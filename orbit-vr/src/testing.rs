//! Stand-ins for the host game, the headset runtime and the renderer, used by tests.
use std::collections::HashMap;

use glam::{Affine3A, Quat, Vec3};

use crate::{
    components::{Eye, Handedness},
    host::{
        DeviceManager, HostCameraId, HostScene, PointerEvent, PointerTargetId, RenderBackend,
        RenderRequest, TrackingSpace,
    },
    pose::Pose,
    rig::CameraSlot,
};

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Host cameras by name, with their enabled state
#[derive(Debug)]
pub(crate) struct TestHost {
    pub cameras: HashMap<String, (HostCameraId, bool)>,
    pub enable_calls: Vec<(HostCameraId, bool)>,
    pub internal_camera_pose: Pose,
    pub active_vessel_pose: Pose,
    /// Internal space is world space shifted and turned by this pose
    pub world_from_internal: Pose,
}

impl TestHost {
    pub fn new(names: &[&str]) -> Self {
        let cameras = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), (HostCameraId(i as u64), true)))
            .collect();
        Self {
            cameras,
            enable_calls: Vec::new(),
            internal_camera_pose: Pose::new(Vec3::new(0.2, 0.9, 0.4), Quat::from_rotation_y(0.3)),
            active_vessel_pose: Pose::new(Vec3::new(100., 20., -40.), Quat::from_rotation_x(0.1)),
            world_from_internal: Pose::new(Vec3::new(1000., 0., 0.), Quat::from_rotation_z(0.5)),
        }
    }

    /// A host with every camera the rig knows about
    pub fn with_all_cameras() -> Self {
        let names: Vec<_> = CameraSlot::ALL
            .iter()
            .map(|slot| slot.host_camera_name())
            .collect();
        Self::new(&names)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.cameras[name].1
    }
}

impl HostScene for TestHost {
    fn find_camera(&self, name: &str) -> Option<HostCameraId> {
        self.cameras.get(name).map(|(id, _)| *id)
    }

    fn set_camera_enabled(&mut self, camera: HostCameraId, enabled: bool) {
        self.enable_calls.push((camera, enabled));
        for (id, state) in self.cameras.values_mut() {
            if *id == camera {
                *state = enabled;
            }
        }
    }

    fn internal_camera_pose(&self) -> Pose {
        self.internal_camera_pose
    }

    fn active_vessel_pose(&self) -> Pose {
        self.active_vessel_pose
    }

    fn internal_to_world_position(&self, position: Vec3) -> Vec3 {
        self.world_from_internal.position + self.world_from_internal.rotation * position
    }

    fn internal_to_world_rotation(&self, rotation: Quat) -> Quat {
        self.world_from_internal.rotation * rotation
    }
}

#[derive(Debug, Default)]
pub(crate) struct TestDevices {
    pub tracking_space: Option<TrackingSpace>,
    pub seated_resets: usize,
    pub fingertip_targets: HashMap<Handedness, Vec<PointerTargetId>>,
    pub pointer_events: Vec<(PointerTargetId, PointerEvent)>,
}

impl DeviceManager for TestDevices {
    fn set_tracking_space(&mut self, tracking_space: TrackingSpace) {
        self.tracking_space = Some(tracking_space);
    }

    fn reset_seated_zero_pose(&mut self) {
        self.seated_resets += 1;
    }

    fn fingertip_targets(&self, handedness: Handedness) -> Vec<PointerTargetId> {
        self.fingertip_targets
            .get(&handedness)
            .cloned()
            .unwrap_or_default()
    }

    fn send_pointer_event(&mut self, target: PointerTargetId, event: PointerEvent) {
        self.pointer_events.push((target, event));
    }
}

/// Remembers every render call
#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub rendered: Vec<(Eye, CameraSlot, Affine3A)>,
}

impl RenderBackend for RecordingBackend {
    fn render(&mut self, request: &RenderRequest<'_>) {
        assert_eq!(request.camera.eye, request.eye);
        assert_eq!(request.camera.slot, request.slot);
        self.rendered
            .push((request.eye, request.slot, request.world_from_camera));
    }
}
