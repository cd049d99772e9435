//! The stereo camera rig: one render camera per eye per host camera role
/// The host camera roles and their fixed parameters
pub mod camera_slot;
/// Per-eye fields of view and projections
pub mod frustum;

pub use camera_slot::{
    CameraSlot, ClearFlags, ClipPlanes, RenderLayers, CAMERA_SLOT_COUNT, DEFAULT_LAYER,
    INTERNAL_SPACE_LAYER,
};
pub use frustum::Frustum;

use glam::{Mat4, Vec4};
use hecs::{Entity, EntityBuilder, Ref, World};
use log::debug;

use crate::{
    components::{
        Eye, EyeNode, GlobalTransform, Info, LocalTransform, Parent, RenderCamera,
        RenderTargetId, RigRoot,
    },
    pose::Pose,
    settings::Settings,
    systems::{update_global_transform_system, update_global_transform_with_parent_system},
    VIEW_COUNT,
};

/// The VR camera rig.
///
/// Holds a root entity placed at the scene's reference frame, one node per eye parented to
/// the root, and a [`RenderCamera`] entity for every (eye, [`CameraSlot`]) pair. Rig-space
/// slots are parented to their eye node; world-space slots (see
/// [`CameraSlot::is_world_space`]) have no parent and are positioned directly.
///
/// The rig is built once and then handed to the [`crate::SceneCoordinator`], which owns it for
/// the rest of the process.
pub struct CameraRig {
    pub(crate) world: World,
    root: Entity,
    eyes: [Entity; VIEW_COUNT],
    cameras: [[Entity; CAMERA_SLOT_COUNT]; VIEW_COUNT],
}

impl CameraRig {
    /// Build the rig: 2 eyes x [`CAMERA_SLOT_COUNT`] cameras, configured from the fixed slot tables
    pub fn build(settings: &Settings) -> Self {
        let mut world = World::new();
        let root = world.spawn((
            RigRoot,
            Info::new("VR Rig"),
            LocalTransform::default(),
            GlobalTransform::default(),
        ));

        let eyes = Eye::BOTH.map(|eye| {
            world.spawn((
                EyeNode(eye),
                Info::new(format!("VR Eye {eye:?}")),
                Parent(root),
                LocalTransform::default(),
                GlobalTransform::default(),
            ))
        });

        let cameras = Eye::BOTH.map(|eye| {
            let eye_entity = eyes[eye.index()];
            CameraSlot::ALL.map(|slot| {
                let camera = create_camera(eye, slot, settings.internal_background);
                let info = Info::new(format!("VR {} {eye:?}", slot.host_camera_name()));
                let mut builder = EntityBuilder::new();
                builder
                    .add(camera)
                    .add(info)
                    .add(LocalTransform::default())
                    .add(GlobalTransform::default());
                if !slot.is_world_space() {
                    builder.add(Parent(eye_entity));
                }
                world.spawn(builder.build())
            })
        });

        debug!(
            "[ORBIT_VR_RIG] Built camera rig with {} cameras",
            VIEW_COUNT * CAMERA_SLOT_COUNT
        );

        Self {
            world,
            root,
            eyes,
            cameras,
        }
    }

    /// The entity all eye nodes are parented to
    pub fn root_entity(&self) -> Entity {
        self.root
    }

    /// The node rig-space cameras for `eye` are parented to
    pub fn eye_entity(&self, eye: Eye) -> Entity {
        self.eyes[eye.index()]
    }

    /// The camera entity for an eye and slot
    pub fn camera_entity(&self, eye: Eye, slot: CameraSlot) -> Entity {
        self.cameras[eye.index()][slot.index()]
    }

    /// The render camera for an eye and slot
    pub fn camera(&self, eye: Eye, slot: CameraSlot) -> Option<Ref<'_, RenderCamera>> {
        self.world.get::<&RenderCamera>(self.camera_entity(eye, slot)).ok()
    }

    /// How many render cameras the rig holds
    pub fn camera_count(&self) -> usize {
        self.world.query::<&RenderCamera>().iter().count()
    }

    /// Assign an eye's render target and give each of its cameras a projection built from the
    /// eye's field of view and that camera's own clip planes.
    pub fn configure_eye(&mut self, eye: Eye, target: RenderTargetId, frustum: &Frustum) {
        self.configure_eye_with(eye, target, |clip_planes| frustum.projection(clip_planes));
    }

    /// As [`CameraRig::configure_eye`], with projections supplied by the caller, eg. from the
    /// headset runtime.
    pub fn configure_eye_with<F>(&mut self, eye: Eye, target: RenderTargetId, projection: F)
    where
        F: Fn(ClipPlanes) -> Mat4,
    {
        for entity in self.cameras[eye.index()] {
            if let Ok(mut camera) = self.world.get::<&mut RenderCamera>(entity) {
                camera.target = Some(target);
                camera.projection = Some(projection(ClipPlanes {
                    near: camera.near,
                    far: camera.far,
                }));
            }
        }
    }

    /// Set an entity's transform relative to its parent, or to the world for roots
    pub fn set_local_pose(&mut self, entity: Entity, pose: &Pose) {
        if let Ok(mut local_transform) = self.world.get::<&mut LocalTransform>(entity) {
            local_transform.update_from_pose(pose);
        }
    }

    /// An entity's pose in world space, as of the last [`CameraRig::update_transforms`]
    pub fn global_pose(&self, entity: Entity) -> Option<Pose> {
        self.world
            .get::<&GlobalTransform>(entity)
            .ok()
            .map(|global_transform| global_transform.to_pose())
    }

    /// An entity's full world transform, as of the last [`CameraRig::update_transforms`]
    pub fn global_transform(&self, entity: Entity) -> Option<GlobalTransform> {
        self.world.get::<&GlobalTransform>(entity).ok().map(|g| *g)
    }

    /// Derive every entity's world transform from the local transforms
    pub fn update_transforms(&mut self) {
        update_global_transform_system(self);
        update_global_transform_with_parent_system(self);
    }
}

fn create_camera(eye: Eye, slot: CameraSlot, internal_background: Vec4) -> RenderCamera {
    let ClipPlanes { near, far } = slot.clip_planes();
    let background = match slot {
        CameraSlot::Internal => internal_background,
        _ => Vec4::ZERO,
    };

    RenderCamera {
        eye,
        slot,
        near,
        far,
        depth: slot.depth(),
        culling_mask: slot.culling_mask(),
        clear_flags: slot.clear_flags(),
        background,
        enabled: false,
        target: None,
        projection: None,
    }
}
