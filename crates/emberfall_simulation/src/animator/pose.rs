//! Обратный канал от animation evaluator: текущая поза + root-motion delta

use bevy::prelude::*;

/// Боевая поза, которую evaluator репортит обратно в симуляцию
///
/// Используется horizontal motion gate: Blocking (и Attacking в воздухе)
/// жёстко зануляет горизонтальную скорость.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum CombatPose {
    #[default]
    Neutral,
    Blocking,
    Attacking,
}

/// Текущее состояние evaluator'а (пишется внешним анимационным слоем)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AnimatorState {
    pub pose: CombatPose,
}

/// Root-motion отчёт evaluator'а за presentation-тик
///
/// `translation` — запечённое в клип смещение, `elapsed` — сколько времени
/// прошло по часам evaluator'а. Потребляется системой
/// [`crate::motion::systems::sync_animation_velocity`] и сбрасывается после
/// применения (отчёт действителен ровно один тик).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AnimationDelta {
    pub translation: Vec2,
    pub elapsed: f32,
}
