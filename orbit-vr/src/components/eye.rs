use serde::{Deserialize, Serialize};

use crate::VIEW_COUNT;

/// One of the two views rendered for the headset.
#[derive(Debug, PartialEq, Clone, Copy, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum Eye {
    /// The left eye
    Left,
    /// The right eye
    Right,
}

impl Eye {
    /// Both eyes, in view order
    pub const BOTH: [Eye; VIEW_COUNT] = [Eye::Left, Eye::Right];

    /// The view index of this eye, for use with per-eye arrays
    pub const fn index(self) -> usize {
        match self {
            Eye::Left => 0,
            Eye::Right => 1,
        }
    }
}

/// Marker component for the entity every eye node hangs off.
/// Placed at the scene's reference frame, ie. where device-space origin lands in the world.
#[derive(Debug, Clone, Copy)]
pub struct RigRoot;

/// Marker component for the per-eye node that rig-space cameras are parented to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EyeNode(pub Eye);
