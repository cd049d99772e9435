use glam::{Mat4, Vec4};

use crate::{
    components::Eye,
    rig::{CameraSlot, ClearFlags, RenderLayers},
};

/// Identifies a render surface owned by the host's rendering pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderTargetId(pub u64);

/// Component describing one VR render camera: one per eye per [`CameraSlot`].
///
/// Cameras are never enabled; the scene coordinator renders the active ones explicitly,
/// in the order given by the scene's active camera set.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCamera {
    /// Which eye this camera renders for
    pub eye: Eye,
    /// Which host camera role this camera mirrors
    pub slot: CameraSlot,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
    /// Draw order; lower depths are drawn first
    pub depth: f32,
    /// The host render layers this camera can see
    pub culling_mask: RenderLayers,
    /// How the target is cleared before drawing
    pub clear_flags: ClearFlags,
    /// Background color as linear RGBA
    pub background: Vec4,
    /// Whether the host should render this camera automatically
    pub enabled: bool,
    /// The surface this camera renders into, once stereo rendering is configured
    pub target: Option<RenderTargetId>,
    /// The eye-specific projection, built from this camera's own clip planes
    pub projection: Option<Mat4>,
}
