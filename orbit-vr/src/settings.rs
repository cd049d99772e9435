use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::{scene::VrScene, OrbitVrResult};

/// World scale for each VR scene. `1.0` maps one device meter to one world unit.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WorldScaleSettings {
    /// Scale inside the cockpit
    pub flight_iva: f32,
    /// Scale during extravehicular activity
    pub flight_eva: f32,
    /// Scale in the vehicle editor
    pub editor: f32,
}

impl Default for WorldScaleSettings {
    fn default() -> Self {
        Self {
            flight_iva: 1.,
            flight_eva: 1.,
            editor: 1.,
        }
    }
}

impl WorldScaleSettings {
    /// The configured scale for a scene
    pub fn for_scene(&self, scene: VrScene) -> f32 {
        match scene {
            VrScene::FlightIva => self.flight_iva,
            VrScene::FlightEva => self.flight_eva,
            VrScene::Editor => self.editor,
        }
    }
}

/// Tunables for the rig and the scene coordinator, usually loaded from the host's
/// configuration directory.
///
/// Every field has a default, so a settings file only needs the values it changes:
/// ```
/// let settings = orbit_vr::Settings::from_json(r#"{ "editor_movement_speed": 2.5 }"#).unwrap();
/// assert_eq!(settings.editor_movement_speed, 2.5);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Editor fly speed, in world units per second at full touchpad deflection
    pub editor_movement_speed: f32,
    /// Initial world scale for each scene
    pub world_scale: WorldScaleSettings,
    /// Where device-space origin starts in the editor
    pub editor_start_position: Vec3,
    /// Background of the cockpit interior cameras
    pub internal_background: Vec4,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editor_movement_speed: 1.,
            world_scale: Default::default(),
            editor_start_position: Vec3::new(0., 0., -5.),
            internal_background: Vec4::new(0.05, 0.05, 0.1, 0.5),
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling in defaults for missing fields
    pub fn from_json(json: &str) -> OrbitVrResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OrbitVrError;

    #[test]
    pub fn test_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.editor_start_position, Vec3::new(0., 0., -5.));
    }

    #[test]
    pub fn test_partial_world_scale() {
        let settings = Settings::from_json(
            r#"{
                "world_scale": { "editor": 0.5 },
                "editor_start_position": [1.0, 0.0, -10.0]
            }"#,
        )
        .unwrap();
        assert_eq!(settings.world_scale.for_scene(VrScene::Editor), 0.5);
        assert_eq!(settings.world_scale.for_scene(VrScene::FlightIva), 1.);
        assert_eq!(settings.editor_start_position, Vec3::new(1., 0., -10.));
    }

    #[test]
    pub fn test_invalid_json() {
        let result = Settings::from_json(r#"{ "editor_movement_speed": "fast" }"#);
        assert!(matches!(result, Err(OrbitVrError::InvalidSettings(_))));
    }
}
