use crate::rig::CameraSlot;

use super::VrScene;

// Back to front: each list is also the draw order.
const FLIGHT_IVA_CAMERAS: [CameraSlot; 5] = [
    CameraSlot::Galaxy,
    CameraSlot::ScaledSpace,
    CameraSlot::FarField,
    CameraSlot::NearField,
    CameraSlot::Internal,
];

const FLIGHT_EVA_CAMERAS: [CameraSlot; 4] = [
    CameraSlot::Galaxy,
    CameraSlot::ScaledSpace,
    CameraSlot::FarField,
    CameraSlot::NearField,
];

const EDITOR_CAMERAS: [CameraSlot; 3] = [
    CameraSlot::Scenery,
    CameraSlot::EditorMain,
    CameraSlot::EditorMarker,
];

/// The ordered cameras that render in a scene. Replaced wholesale on scene entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveCameraSet {
    scene: VrScene,
    slots: &'static [CameraSlot],
}

impl ActiveCameraSet {
    /// Look up the camera set for a scene
    pub fn for_scene(scene: VrScene) -> Self {
        let slots: &'static [CameraSlot] = match scene {
            VrScene::FlightIva => &FLIGHT_IVA_CAMERAS,
            VrScene::FlightEva => &FLIGHT_EVA_CAMERAS,
            VrScene::Editor => &EDITOR_CAMERAS,
        };
        Self { scene, slots }
    }

    /// The scene this set belongs to
    pub fn scene(&self) -> VrScene {
        self.scene
    }

    /// Slots to render, in draw order
    pub fn slots(&self) -> &'static [CameraSlot] {
        self.slots
    }

    /// Does this set render `slot`?
    pub fn contains(&self, slot: CameraSlot) -> bool {
        self.slots.contains(&slot)
    }

    /// Names of the host cameras the VR cameras stand in for
    pub fn host_camera_names(&self) -> impl Iterator<Item = &'static str> {
        let slots = self.slots;
        slots.iter().map(|slot| slot.host_camera_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_slots_are_in_depth_order() {
        for scene in VrScene::ALL {
            let slots = ActiveCameraSet::for_scene(scene).slots();
            assert!(!slots.is_empty());
            for pair in slots.windows(2) {
                assert!(pair[0].depth() <= pair[1].depth(), "{scene:?}: {pair:?}");
            }
        }
    }

    #[test]
    pub fn test_eva_has_no_cockpit() {
        assert!(ActiveCameraSet::for_scene(VrScene::FlightIva).contains(CameraSlot::Internal));
        assert!(!ActiveCameraSet::for_scene(VrScene::FlightEva).contains(CameraSlot::Internal));
    }

    #[test]
    pub fn test_host_camera_names() {
        let names: Vec<_> = ActiveCameraSet::for_scene(VrScene::Editor)
            .host_camera_names()
            .collect();
        assert_eq!(names, vec!["sceneryCam", "Main Camera", "markerCam"]);
    }
}
