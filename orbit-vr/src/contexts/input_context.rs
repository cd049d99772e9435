use glam::Vec2;

use crate::components::Handedness;

/// One frame's worth of raw state from a manipulator, as decoded by the device layer.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ManipulatorSample {
    /// Is the touchpad pressed?
    pub touchpad_button: bool,
    /// Where the thumb is on the touchpad, roughly in [-1, 1] on both axes
    pub touchpad_axis: Vec2,
    /// Is the menu button pressed?
    pub menu_button: bool,
    /// Is the trigger pressed?
    pub trigger_button: bool,
}

#[derive(Debug, Default, Clone)]
/// Input state for one manipulator, with the previous frame's buttons kept so that press
/// and release edges can be queried.
pub struct ManipulatorInput {
    touchpad_button: bool,
    touchpad_button_prev: bool,
    menu_button: bool,
    menu_button_prev: bool,
    trigger_button: bool,
    trigger_button_prev: bool,
    touchpad_axis: Vec2,
}

impl ManipulatorInput {
    pub fn touchpad_button(&self) -> bool {
        self.touchpad_button
    }
    pub fn touchpad_button_just_pressed(&self) -> bool {
        self.touchpad_button && !self.touchpad_button_prev
    }
    pub fn touchpad_button_just_released(&self) -> bool {
        !self.touchpad_button && self.touchpad_button_prev
    }
    pub fn menu_button(&self) -> bool {
        self.menu_button
    }
    pub fn menu_button_just_pressed(&self) -> bool {
        self.menu_button && !self.menu_button_prev
    }
    pub fn menu_button_just_released(&self) -> bool {
        !self.menu_button && self.menu_button_prev
    }
    pub fn trigger_button(&self) -> bool {
        self.trigger_button
    }
    pub fn trigger_button_just_pressed(&self) -> bool {
        self.trigger_button && !self.trigger_button_prev
    }
    pub fn trigger_button_just_released(&self) -> bool {
        !self.trigger_button && self.trigger_button_prev
    }
    pub fn touchpad_axis(&self) -> Vec2 {
        self.touchpad_axis
    }

    /// Roll the current state into the previous state and take on `sample`
    pub fn update(&mut self, sample: &ManipulatorSample) {
        self.touchpad_button_prev = self.touchpad_button;
        self.menu_button_prev = self.menu_button;
        self.trigger_button_prev = self.trigger_button;

        self.touchpad_button = sample.touchpad_button;
        self.menu_button = sample.menu_button;
        self.trigger_button = sample.trigger_button;
        self.touchpad_axis = sample.touchpad_axis;
    }
}

#[derive(Debug, Default, Clone)]
/// Context that holds input state for both manipulators. Allows the scene coordinator to
/// query for input edges without having to worry about the device layer.
pub struct InputContext {
    pub left: ManipulatorInput,
    pub right: ManipulatorInput,
}

impl InputContext {
    /// The input state for one side
    pub fn manipulator(&self, handedness: Handedness) -> &ManipulatorInput {
        match handedness {
            Handedness::Left => &self.left,
            Handedness::Right => &self.right,
        }
    }

    /// Synchronize the context with this frame's samples. Call once per frame, not once per eye.
    pub fn update(&mut self, left: &ManipulatorSample, right: &ManipulatorSample) {
        self.left.update(left);
        self.right.update(right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_trigger_edges() {
        let mut input_context = InputContext::default();
        let pressed = ManipulatorSample {
            trigger_button: true,
            ..Default::default()
        };
        let released = ManipulatorSample::default();

        input_context.update(&pressed, &released);
        assert!(input_context.left.trigger_button_just_pressed());
        assert!(!input_context.right.trigger_button_just_pressed());

        input_context.update(&pressed, &released);
        assert!(input_context.left.trigger_button());
        assert!(!input_context.left.trigger_button_just_pressed());

        input_context.update(&released, &released);
        assert!(input_context.left.trigger_button_just_released());
        assert!(!input_context.left.trigger_button());
    }

    #[test]
    pub fn test_menu_and_touchpad() {
        let mut input_context = InputContext::default();
        let sample = ManipulatorSample {
            menu_button: true,
            touchpad_button: true,
            touchpad_axis: Vec2::new(0.25, -1.0),
            ..Default::default()
        };
        input_context.update(&ManipulatorSample::default(), &sample);

        let right = input_context.manipulator(Handedness::Right);
        assert!(right.menu_button_just_pressed());
        assert!(right.touchpad_button_just_pressed());
        assert_eq!(right.touchpad_axis(), Vec2::new(0.25, -1.0));
        assert!(!input_context.manipulator(Handedness::Left).menu_button());
    }
}
