use thiserror::Error;

use crate::scene::{GameScene, VrScene};

/// Everything that can go wrong inside orbit-vr
#[derive(Error, Debug)]
pub enum OrbitVrError {
    /// A camera slot index was out of range
    #[error("There is no camera slot with index {0}")]
    InvalidCameraSlot(usize),
    /// The host scene has no VR rendition
    #[error("The scene {0:?} does not support VR")]
    UnsupportedScene(GameScene),
    /// A VR scene is already set up
    #[error("The scene {0:?} is already active and must be closed first")]
    SceneAlreadyActive(VrScene),
    /// An operation needed an active VR scene
    #[error("No VR scene is active")]
    NoActiveScene,
    /// A world scale was zero, negative or not finite
    #[error("World scale must be a positive, finite number (got {0})")]
    InvalidWorldScale(f32),
    /// Settings JSON was malformed
    #[error("The settings could not be parsed")]
    InvalidSettings(#[from] serde_json::Error),
    /// Catch-all for host integration failures
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
