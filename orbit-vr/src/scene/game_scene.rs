use serde::{Deserialize, Serialize};

/// Number of scenes that support VR
pub const VR_SCENE_COUNT: usize = 3;

/// What the player is looking at while in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum FlightMode {
    /// Inside the cockpit
    Iva,
    /// Outside the vessel as a crew member
    Eva,
    /// The regular chase camera
    External,
}

/// The scene the host game currently has loaded, as reported by its scene notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GameScene {
    /// Loading screens
    Loading,
    /// The title screen
    MainMenu,
    /// The overworld hub
    SpaceCenter,
    /// The vehicle editor
    Editor,
    /// Flying a vessel
    Flight(FlightMode),
    /// The map of everything in orbit
    TrackingStation,
}

/// A scene the camera rig knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum VrScene {
    /// Flight, inside the cockpit
    FlightIva,
    /// Flight, on EVA
    FlightEva,
    /// The vehicle editor
    Editor,
}

impl VrScene {
    /// Every VR scene, in index order
    pub const ALL: [VrScene; VR_SCENE_COUNT] =
        [VrScene::FlightIva, VrScene::FlightEva, VrScene::Editor];

    /// Index of this scene into per-scene arrays
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Flight scenes keep device-space origin pinned to where it was on entry
    pub fn pins_reference_frame(self) -> bool {
        matches!(self, VrScene::FlightIva | VrScene::FlightEva)
    }
}

impl GameScene {
    /// The VR scene this game scene maps to, if any
    pub fn vr_scene(self) -> Option<VrScene> {
        match self {
            GameScene::Flight(FlightMode::Iva) => Some(VrScene::FlightIva),
            GameScene::Flight(FlightMode::Eva) => Some(VrScene::FlightEva),
            GameScene::Editor => Some(VrScene::Editor),
            _ => None,
        }
    }
}

/// Can VR be switched on in this scene? Scenes that fail this must not be passed to
/// [`crate::SceneCoordinator::setup_scene`].
pub fn is_vr_eligible(scene: GameScene) -> bool {
    scene.vr_scene().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_vr_eligibility() {
        assert!(is_vr_eligible(GameScene::Flight(FlightMode::Iva)));
        assert!(is_vr_eligible(GameScene::Flight(FlightMode::Eva)));
        assert!(is_vr_eligible(GameScene::Editor));
        assert!(!is_vr_eligible(GameScene::Flight(FlightMode::External)));
        assert!(!is_vr_eligible(GameScene::SpaceCenter));
        assert!(!is_vr_eligible(GameScene::MainMenu));
    }

    #[test]
    pub fn test_scene_indices() {
        for (index, scene) in VrScene::ALL.iter().enumerate() {
            assert_eq!(scene.index(), index);
        }
    }
}
