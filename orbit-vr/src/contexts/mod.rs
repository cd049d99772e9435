#![allow(missing_docs)]
pub mod input_context;

pub use input_context::{InputContext, ManipulatorInput, ManipulatorSample};
