use crate::{settings::WorldScaleSettings, OrbitVrError, OrbitVrResult};

use super::{VrScene, VR_SCENE_COUNT};

/// Per-scene world scale, kept as reciprocals since every transform divides by it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldScale {
    inverse: [f32; VR_SCENE_COUNT],
}

impl Default for WorldScale {
    fn default() -> Self {
        Self {
            inverse: [1.; VR_SCENE_COUNT],
        }
    }
}

impl WorldScale {
    /// Build the table from settings, rejecting unusable scales
    pub fn from_settings(settings: &WorldScaleSettings) -> OrbitVrResult<Self> {
        let mut world_scale = WorldScale::default();
        for scene in VrScene::ALL {
            world_scale.set(scene, settings.for_scene(scene))?;
        }
        Ok(world_scale)
    }

    /// The world scale for a scene
    pub fn get(&self, scene: VrScene) -> f32 {
        1. / self.inverse[scene.index()]
    }

    /// The reciprocal of the world scale for a scene
    pub fn inverse(&self, scene: VrScene) -> f32 {
        self.inverse[scene.index()]
    }

    /// Change a scene's world scale. Only affects transforms computed afterwards.
    pub fn set(&mut self, scene: VrScene, scale: f32) -> OrbitVrResult<()> {
        if !scale.is_finite() || scale <= 0. {
            return Err(OrbitVrError::InvalidWorldScale(scale));
        }
        self.inverse[scene.index()] = 1. / scale;
        Ok(())
    }
}
