#![deny(missing_docs)]

//! G'day, and welcome to orbit-vr! 👋
//!
//! orbit-vr is the camera core of a VR layer for a space-flight game. It builds a stereo camera
//! rig that mirrors the game's own cameras, picks which of those cameras draw in each scene, and
//! maps the headset's tracked pose into the game world.
//!
//! # Getting started
//! Build a [`rig::CameraRig`] once, hand it to a [`SceneCoordinator`], then drive the
//! coordinator from the host's frame loop:
//!
//! 1. [`SceneCoordinator::setup_scene`] when a VR-capable scene loads (see [`scene::is_vr_eligible`])
//! 1. [`SceneCoordinator::update_scene`] and [`SceneCoordinator::render_vr_cameras`] for each eye, each frame
//! 1. [`SceneCoordinator::handle_input`] once per frame
//! 1. [`SceneCoordinator::close_scene`] when the scene unloads
//!
//! Everything the core needs from the game, the headset runtime and the renderer comes in through
//! the traits in [`host`].

pub use glam;
pub use hecs;
pub use openxr as xr;

pub use orbit_vr_error::OrbitVrError;
pub use pose::Pose;
pub use scene::{FlightMode, GameScene, SceneCoordinator, VrScene};
pub use settings::{Settings, WorldScaleSettings};

pub mod components;
/// Contexts wrap external state the coordinator reads each frame
pub mod contexts;
pub mod host;
mod orbit_vr_error;
mod pose;
pub mod rig;
pub mod scene;
mod settings;
pub mod systems;
#[cfg(test)]
pub(crate) mod testing;
/// Kitchen sink utility functions
pub mod util;

/// orbit-vr result type
pub type OrbitVrResult<T> = std::result::Result<T, OrbitVrError>;

/// Number of views
pub const VIEW_COUNT: usize = 2;
