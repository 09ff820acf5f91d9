//! Motion sync domain — мост animation evaluator ↔ rigid body
//!
//! Содержит:
//! - MotionSync (intent + one-shot латчи действий)
//! - TargetLocked (event от lock-on слоя)
//! - Системы синхронизации root-motion → velocity и сброса латчей

pub mod components;
pub mod events;
pub mod systems;

// Re-export all components and events
pub use components::*;
pub use events::*;
