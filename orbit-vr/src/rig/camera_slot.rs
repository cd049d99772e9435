use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{OrbitVrError, OrbitVrResult};

/// Number of camera roles mirrored from the host
pub const CAMERA_SLOT_COUNT: usize = 8;

/// Layer the cockpit interior is drawn on
pub const INTERNAL_SPACE_LAYER: u32 = 20;
/// The host's default layer
pub const DEFAULT_LAYER: u32 = 0;

bitflags! {
    /// The host's render layers, as used by a camera's culling mask.
    pub struct RenderLayers: u32 {
        /// Everything not assigned elsewhere
        const DEFAULT = 1 << 0;
        /// Transparent effects
        const TRANSPARENT_FX = 1 << 1;
        /// Objects ignored by raycasts
        const IGNORE_RAYCAST = 1 << 2;
        /// Oceans
        const WATER = 1 << 4;
        /// Flat UI
        const UI = 1 << 5;
        /// Atmosphere shells
        const ATMOSPHERE = 1 << 9;
        /// Scaled-down planets and moons
        const SCALED_SCENERY = 1 << 10;
        /// Editor markers
        const UI_VECTORS = 1 << 12;
        /// Terrain and buildings near the vessel
        const LOCAL_SCENERY = 1 << 15;
        /// Crew portraits and crew inside the cockpit
        const KERBALS = 1 << 16;
        /// Crew outside the vessel
        const EVA = 1 << 17;
        /// The skybox
        const SKY_SPHERE = 1 << 18;
        /// Vessel parts
        const PHYSICAL_OBJECTS = 1 << 19;
        /// The cockpit interior
        const INTERNAL_SPACE = 1 << 20;
        /// Part trigger volumes
        const PART_TRIGGERS = 1 << 21;
        /// Objects excluded from aerodynamic effects
        const AERO_FX_IGNORE = 1 << 23;
        /// Map view effects
        const MAP_FX = 1 << 24;
        /// Surface effects, eg. dust
        const SURFACE_FX = 1 << 30;
        /// Debug vectors
        const VECTORS = 1 << 31;
    }
}

const fn layers(list: &[RenderLayers]) -> RenderLayers {
    let mut bits = 0;
    let mut i = 0;
    while i < list.len() {
        bits |= list[i].bits();
        i += 1;
    }
    RenderLayers::from_bits_truncate(bits)
}

/// How a camera clears its target before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ClearFlags {
    /// Fill color and depth with the background
    SolidColor,
    /// Keep what earlier cameras drew, only reset depth
    DepthOnly,
}

/// A camera's near and far clip planes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ClipPlanes {
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
}

impl ClipPlanes {
    const fn new(near: f32, far: f32) -> Self {
        Self { near, far }
    }
}

/// One of the host's native camera roles. Each eye gets one VR camera per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum CameraSlot {
    /// The cockpit interior
    Internal,
    /// Local scenery and vessels close to the camera
    NearField,
    /// Local scenery and vessels far from the camera
    FarField,
    /// Planets and moons, drawn at reduced scale
    ScaledSpace,
    /// The skybox
    Galaxy,
    /// Editor building
    Scenery,
    /// Editor vessel being built
    EditorMain,
    /// Editor markers, eg. centre of mass
    EditorMarker,
}

const CLIP_PLANES: [ClipPlanes; CAMERA_SLOT_COUNT] = [
    ClipPlanes::new(0.01, 50.),
    ClipPlanes::new(0.1, 400.),
    ClipPlanes::new(397., 750_000.),
    ClipPlanes::new(1., 3.0e7),
    ClipPlanes::new(0.1, 20.),
    ClipPlanes::new(0.5, 1200.),
    ClipPlanes::new(0.5, 1200.),
    ClipPlanes::new(0.3, 1000.),
];

const DEPTHS: [f32; CAMERA_SLOT_COUNT] = [3., 0., -1., -3., -4., -2., -1., 1.];

const LOCAL_SCENE: RenderLayers = layers(&[
    RenderLayers::DEFAULT,
    RenderLayers::TRANSPARENT_FX,
    RenderLayers::IGNORE_RAYCAST,
    RenderLayers::WATER,
    RenderLayers::LOCAL_SCENERY,
    RenderLayers::EVA,
    RenderLayers::PHYSICAL_OBJECTS,
    RenderLayers::AERO_FX_IGNORE,
    RenderLayers::SURFACE_FX,
    RenderLayers::VECTORS,
]);

const CULLING_MASKS: [RenderLayers; CAMERA_SLOT_COUNT] = [
    layers(&[RenderLayers::KERBALS, RenderLayers::INTERNAL_SPACE]),
    LOCAL_SCENE,
    LOCAL_SCENE,
    layers(&[RenderLayers::ATMOSPHERE, RenderLayers::SCALED_SCENERY]),
    RenderLayers::SKY_SPHERE,
    RenderLayers::LOCAL_SCENERY,
    layers(&[
        RenderLayers::DEFAULT,
        RenderLayers::TRANSPARENT_FX,
        RenderLayers::IGNORE_RAYCAST,
        RenderLayers::WATER,
        RenderLayers::EVA,
        RenderLayers::PHYSICAL_OBJECTS,
        RenderLayers::PART_TRIGGERS,
        RenderLayers::SURFACE_FX,
    ]),
    RenderLayers::UI_VECTORS,
];

const HOST_CAMERA_NAMES: [&str; CAMERA_SLOT_COUNT] = [
    "InternalCamera",
    "Camera 00",
    "Camera 01",
    "Camera ScaledSpace",
    "GalaxyCamera",
    "sceneryCam",
    "Main Camera",
    "markerCam",
];

impl CameraSlot {
    /// Every slot, in index order
    pub const ALL: [CameraSlot; CAMERA_SLOT_COUNT] = [
        CameraSlot::Internal,
        CameraSlot::NearField,
        CameraSlot::FarField,
        CameraSlot::ScaledSpace,
        CameraSlot::Galaxy,
        CameraSlot::Scenery,
        CameraSlot::EditorMain,
        CameraSlot::EditorMarker,
    ];

    /// Index of this slot into per-slot arrays
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Near and far clip planes for this slot
    pub fn clip_planes(self) -> ClipPlanes {
        CLIP_PLANES[self.index()]
    }

    /// Draw order for this slot; lower is drawn first
    pub fn depth(self) -> f32 {
        DEPTHS[self.index()]
    }

    /// The render layers this slot can see
    pub fn culling_mask(self) -> RenderLayers {
        CULLING_MASKS[self.index()]
    }

    /// Only the skybox clears to a solid color; every other slot draws over it.
    pub fn clear_flags(self) -> ClearFlags {
        match self {
            CameraSlot::Galaxy => ClearFlags::SolidColor,
            _ => ClearFlags::DepthOnly,
        }
    }

    /// Name of the host camera this slot replaces while VR is active
    pub fn host_camera_name(self) -> &'static str {
        HOST_CAMERA_NAMES[self.index()]
    }

    /// World-space slots render content anchored outside the cockpit's coordinate system,
    /// so they are positioned directly rather than through their eye node.
    pub fn is_world_space(self) -> bool {
        matches!(
            self,
            CameraSlot::NearField
                | CameraSlot::FarField
                | CameraSlot::ScaledSpace
                | CameraSlot::Galaxy
        )
    }
}

impl TryFrom<usize> for CameraSlot {
    type Error = OrbitVrError;

    fn try_from(index: usize) -> OrbitVrResult<Self> {
        CameraSlot::ALL
            .get(index)
            .copied()
            .ok_or(OrbitVrError::InvalidCameraSlot(index))
    }
}
