//! The scene coordinator: decides which cameras render in each scene and where the headset
//! is in the host world
/// Which cameras render in each scene
pub mod active_camera_set;
/// The host's scenes and the VR scenes they map to
pub mod game_scene;
mod navigation;
/// Device-space origin in the world
pub mod reference_frame;
/// Per-scene world scale
pub mod world_scale;

pub use active_camera_set::ActiveCameraSet;
pub use game_scene::{is_vr_eligible, FlightMode, GameScene, VrScene, VR_SCENE_COUNT};
pub use reference_frame::ReferenceFrame;
pub use world_scale::WorldScale;

use glam::Quat;
use log::{debug, error, info};

use crate::{
    components::{Eye, Handedness},
    contexts::{InputContext, ManipulatorInput},
    host::{
        DeviceManager, HostCameraId, HostScene, PointerEvent, RenderBackend, RenderRequest,
        TrackingSpace,
    },
    pose::Pose,
    rig::{CameraRig, CameraSlot, DEFAULT_LAYER, INTERNAL_SPACE_LAYER},
    settings::Settings,
    OrbitVrError, OrbitVrResult, VIEW_COUNT,
};

/// Headset poses in world space, recomputed every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HmdPoseState {
    /// The head
    pub head: Pose,
    /// Each eye, indexed by [`Eye::index`]
    pub eyes: [Pose; VIEW_COUNT],
}

/// Everything that only exists while a VR scene is active.
#[derive(Debug, Clone)]
struct ActiveScene {
    scene: VrScene,
    cameras: ActiveCameraSet,
    reference: ReferenceFrame,
    tracking_space: TrackingSpace,
    render_layer: u32,
    disabled_host_cameras: Vec<HostCameraId>,
}

/// Drives the camera rig through the host's scenes.
///
/// The coordinator is either inactive or in exactly one [`VrScene`]. Scene changes always pass
/// through inactive: [`SceneCoordinator::setup_scene`] on entry, then
/// [`SceneCoordinator::update_scene`] and [`SceneCoordinator::render_vr_cameras`] once per eye
/// per frame, then [`SceneCoordinator::close_scene`] on exit.
pub struct SceneCoordinator {
    rig: CameraRig,
    settings: Settings,
    world_scale: WorldScale,
    active: Option<ActiveScene>,
    hmd: HmdPoseState,
}

impl SceneCoordinator {
    /// Take ownership of the rig. Fails if the settings hold an unusable world scale.
    pub fn new(rig: CameraRig, settings: Settings) -> OrbitVrResult<Self> {
        let world_scale = WorldScale::from_settings(&settings.world_scale)?;
        Ok(Self {
            rig,
            settings,
            world_scale,
            active: None,
            hmd: Default::default(),
        })
    }

    /// Enter a VR scene: choose its cameras, sample its reference frame, set the tracking
    /// space and disable the host cameras the VR cameras replace.
    pub fn setup_scene(
        &mut self,
        scene: GameScene,
        host: &mut impl HostScene,
        devices: &mut impl DeviceManager,
    ) -> OrbitVrResult<()> {
        if let Some(active) = &self.active {
            return Err(OrbitVrError::SceneAlreadyActive(active.scene));
        }
        let vr_scene = scene
            .vr_scene()
            .ok_or(OrbitVrError::UnsupportedScene(scene))?;

        let (tracking_space, render_layer, initial) = match vr_scene {
            VrScene::FlightIva => (
                TrackingSpace::Seated,
                INTERNAL_SPACE_LAYER,
                host.internal_camera_pose(),
            ),
            VrScene::FlightEva => (
                TrackingSpace::Seated,
                INTERNAL_SPACE_LAYER,
                host.active_vessel_pose(),
            ),
            VrScene::Editor => (
                TrackingSpace::Standing,
                DEFAULT_LAYER,
                Pose::new(self.settings.editor_start_position, Quat::IDENTITY),
            ),
        };
        devices.set_tracking_space(tracking_space);

        let cameras = ActiveCameraSet::for_scene(vr_scene);
        let disabled_host_cameras = disable_host_cameras(&cameras, host);
        let reference = ReferenceFrame::new(initial);

        let root = self.rig.root_entity();
        self.rig.set_local_pose(root, &reference.current());
        self.rig.update_transforms();

        info!(
            "[ORBIT_VR_SCENE] Entered {vr_scene:?}: {} cameras, {tracking_space:?} tracking, origin at {:?}",
            cameras.slots().len(),
            initial.position
        );

        self.active = Some(ActiveScene {
            scene: vr_scene,
            cameras,
            reference,
            tracking_space,
            render_layer,
            disabled_host_cameras,
        });
        Ok(())
    }

    /// Apply one eye's device poses for this frame.
    ///
    /// `head` is the headset pose in device space, `eye_offset` the eye's pose relative to the
    /// head. Flight scenes discard any displacement of the reference frame first.
    pub fn update_scene(
        &mut self,
        eye: Eye,
        head: &Pose,
        eye_offset: &Pose,
        host: &impl HostScene,
    ) -> OrbitVrResult<()> {
        let active = self.active.as_mut().ok_or(OrbitVrError::NoActiveScene)?;
        let inverse_world_scale = self.world_scale.inverse(active.scene);
        if active.scene.pins_reference_frame() {
            active.reference.pin();
        }

        let reference = &active.reference;
        let device_eye = head.compose(eye_offset);
        let world_eye = reference.device_pose_to_world(&device_eye, inverse_world_scale);

        match active.scene {
            VrScene::FlightIva => {
                place_eye(&mut self.rig, eye, reference, &device_eye, inverse_world_scale);

                // The world-space cameras live outside the cockpit's internal space.
                let world_space_pose = Pose::new(
                    host.internal_to_world_position(world_eye.position),
                    host.internal_to_world_rotation(world_eye.rotation),
                );
                for slot in CameraSlot::ALL.into_iter().filter(|s| s.is_world_space()) {
                    let entity = self.rig.camera_entity(eye, slot);
                    self.rig.set_local_pose(entity, &world_space_pose);
                }
            }
            // Vessel-attached cameras follow the vessel on their own.
            VrScene::FlightEva => {}
            VrScene::Editor => {
                place_eye(&mut self.rig, eye, reference, &device_eye, inverse_world_scale);
            }
        }
        self.rig.update_transforms();

        self.hmd.eyes[eye.index()] = world_eye;
        self.hmd.head = Pose::new(
            reference.current_position + reference.current_rotation * head.position,
            reference.current_rotation * head.rotation,
        );
        Ok(())
    }

    /// Leave the current scene, turning the host cameras back on. Does nothing when inactive.
    pub fn close_scene(&mut self, host: &mut impl HostScene) {
        let Some(active) = self.active.take() else {
            return;
        };
        for camera in &active.disabled_host_cameras {
            host.set_camera_enabled(*camera, true);
        }
        info!(
            "[ORBIT_VR_SCENE] Left {:?}, restored {} host cameras",
            active.scene,
            active.disabled_host_cameras.len()
        );
    }

    /// Render one eye's active cameras in the scene's draw order. Renders nothing when inactive.
    pub fn render_vr_cameras(&self, eye: Eye, backend: &mut impl RenderBackend) {
        let Some(active) = &self.active else {
            return;
        };
        for &slot in active.cameras.slots() {
            let entity = self.rig.camera_entity(eye, slot);
            let (Some(camera), Some(global_transform)) =
                (self.rig.camera(eye, slot), self.rig.global_transform(entity))
            else {
                continue;
            };
            backend.render(&RenderRequest {
                eye,
                slot,
                camera: &camera,
                world_from_camera: global_transform.0,
            });
        }
    }

    /// React to one manipulator's input for this frame.
    ///
    /// In the editor the touchpads fly the reference frame: the left one up and down, the right
    /// one along the ground. In any VR scene the menu button resets the seated origin and the
    /// trigger sends pointer events to whatever is under the fingertip.
    pub fn handle_manipulator_input(
        &mut self,
        handedness: Handedness,
        input: &ManipulatorInput,
        delta_time: f32,
        devices: &mut impl DeviceManager,
    ) {
        let Some(active) = self.active.as_mut() else {
            return;
        };

        if active.scene == VrScene::Editor && input.touchpad_button() {
            let step = self.settings.editor_movement_speed
                * self.world_scale.inverse(active.scene)
                * delta_time;
            let axis = input.touchpad_axis();
            match handedness {
                Handedness::Left => navigation::fly_vertical(&mut active.reference, axis.y, step),
                Handedness::Right => navigation::fly_horizontal(
                    &mut active.reference,
                    self.hmd.head.rotation,
                    axis,
                    step,
                ),
            }
        }

        if input.menu_button_just_pressed() {
            debug!("[ORBIT_VR_INPUT] Resetting seated origin");
            devices.reset_seated_zero_pose();
        }

        let pointer_event = if input.trigger_button_just_pressed() {
            Some(PointerEvent::Down)
        } else if input.trigger_button_just_released() {
            Some(PointerEvent::Up)
        } else {
            None
        };
        if let Some(event) = pointer_event {
            for target in devices.fingertip_targets(handedness) {
                devices.send_pointer_event(target, event);
            }
        }
    }

    /// Handle both manipulators from an [`InputContext`]
    pub fn handle_input(
        &mut self,
        input_context: &InputContext,
        delta_time: f32,
        devices: &mut impl DeviceManager,
    ) {
        self.handle_manipulator_input(Handedness::Left, &input_context.left, delta_time, devices);
        self.handle_manipulator_input(Handedness::Right, &input_context.right, delta_time, devices);
    }

    /// Map a device-space position into the world for the active scene
    pub fn device_position_to_world(&self, position: glam::Vec3) -> OrbitVrResult<glam::Vec3> {
        let active = self.active.as_ref().ok_or(OrbitVrError::NoActiveScene)?;
        Ok(active
            .reference
            .device_position_to_world(position, self.world_scale.inverse(active.scene)))
    }

    /// Map a device-space rotation into the world for the active scene
    pub fn device_rotation_to_world(&self, rotation: Quat) -> OrbitVrResult<Quat> {
        let active = self.active.as_ref().ok_or(OrbitVrError::NoActiveScene)?;
        Ok(active.reference.device_rotation_to_world(rotation))
    }

    /// Map a device-space pose into the world for the active scene
    pub fn device_pose_to_world(&self, pose: &Pose) -> OrbitVrResult<Pose> {
        let active = self.active.as_ref().ok_or(OrbitVrError::NoActiveScene)?;
        Ok(active
            .reference
            .device_pose_to_world(pose, self.world_scale.inverse(active.scene)))
    }

    /// The world scale for a scene
    pub fn world_scale(&self, scene: VrScene) -> f32 {
        self.world_scale.get(scene)
    }

    /// Change a scene's world scale. Takes effect from the next transform computed.
    pub fn set_world_scale(&mut self, scene: VrScene, scale: f32) -> OrbitVrResult<()> {
        self.world_scale.set(scene, scale)?;
        debug!("[ORBIT_VR_SCENE] World scale for {scene:?} is now {scale}");
        Ok(())
    }

    /// The active VR scene, if any
    pub fn active_scene(&self) -> Option<VrScene> {
        self.active.as_ref().map(|a| a.scene)
    }

    /// The active scene's cameras, if any
    pub fn active_cameras(&self) -> Option<&ActiveCameraSet> {
        self.active.as_ref().map(|a| &a.cameras)
    }

    /// The active scene's reference frame, if any
    pub fn reference_frame(&self) -> Option<&ReferenceFrame> {
        self.active.as_ref().map(|a| &a.reference)
    }

    /// Mutable access to the active scene's reference frame, eg. to teleport the player
    pub fn reference_frame_mut(&mut self) -> Option<&mut ReferenceFrame> {
        self.active.as_mut().map(|a| &mut a.reference)
    }

    /// The active scene's tracking space, if any
    pub fn tracking_space(&self) -> Option<TrackingSpace> {
        self.active.as_ref().map(|a| a.tracking_space)
    }

    /// The layer manipulator models should be drawn on in the active scene, if any
    pub fn render_layer(&self) -> Option<u32> {
        self.active.as_ref().map(|a| a.render_layer)
    }

    /// Host cameras disabled on entry to the active scene
    pub fn disabled_host_cameras(&self) -> &[HostCameraId] {
        self.active
            .as_ref()
            .map(|a| a.disabled_host_cameras.as_slice())
            .unwrap_or_default()
    }

    /// The head's world pose as of the last update
    pub fn hmd_pose(&self) -> Pose {
        self.hmd.head
    }

    /// An eye's world pose as of its last update
    pub fn hmd_eye_pose(&self, eye: Eye) -> Pose {
        self.hmd.eyes[eye.index()]
    }

    /// Every headset pose as of the last update
    pub fn hmd_pose_state(&self) -> &HmdPoseState {
        &self.hmd
    }

    /// The camera rig
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Mutable access to the camera rig, eg. to configure render targets
    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }
}

/// Put the rig root at the reference frame and the eye node at the scaled device pose, so
/// that the eye node's world pose is the reference frame's transform of the device pose.
fn place_eye(
    rig: &mut CameraRig,
    eye: Eye,
    reference: &ReferenceFrame,
    device_eye: &Pose,
    inverse_world_scale: f32,
) {
    let root = rig.root_entity();
    rig.set_local_pose(root, &reference.current());
    let scaled = Pose::new(device_eye.position * inverse_world_scale, device_eye.rotation);
    let eye_entity = rig.eye_entity(eye);
    rig.set_local_pose(eye_entity, &scaled);
}

fn disable_host_cameras(
    cameras: &ActiveCameraSet,
    host: &mut impl HostScene,
) -> Vec<HostCameraId> {
    let mut disabled = Vec::new();
    for name in cameras.host_camera_names() {
        match host.find_camera(name) {
            Some(camera) => {
                host.set_camera_enabled(camera, false);
                disabled.push(camera);
            }
            None => error!("[ORBIT_VR_SCENE] Could not find host camera {name:?}, skipping"),
        }
    }
    disabled
}
