//! Physics simulation module
//!
//! Kinematic контроллер персонажа: horizontal gate, jump, gravity, ground
//! check. Rapier — только для коллизий, velocity интегрируем сами.

pub mod movement;

// Re-export основных типов
pub use movement::{
    spawn_character, GroundSensor, JumpState, KinematicControllerPlugin,
};
