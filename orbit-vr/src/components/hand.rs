use serde::{Deserialize, Serialize};

/// The "side" or "handedness" of a tracked manipulator.
/// Used by the input context and the scene coordinator to tell the two controllers apart.
#[derive(Debug, PartialEq, Clone, Copy, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum Handedness {
    /// Left hand side
    Left,
    /// Right hand side
    Right,
}
