//! Animator parameter channel — общий протокол simulation ↔ animation evaluator
//!
//! ECS пишет сюда intent/heading/триггеры, animation evaluator (внешний слой)
//! читает их при выборе клипов и репортит обратно AnimationDelta + CombatPose.
//!
//! Ключи фиксированы (см. [`params::Param`]) — это стабильный протокол,
//! на который завязаны внешние анимационные ассеты.

pub mod params;
pub mod pose;


// Re-export all components
pub use params::*;
pub use pose::*;
