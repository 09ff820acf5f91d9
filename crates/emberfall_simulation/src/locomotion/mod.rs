//! Locomotion domain — presentation-тик: канал аниматора + поведение
//!
//! Presentation-тик (variable-rate, schedule `Update`) и physics-тик
//! (fixed-rate, `FixedUpdate`) — два кооперирующих цикла. Вся мутация
//! конкретного актора идёт на одном execution context, поэтому вместо
//! локов — строгий порядок систем внутри тика.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub mod systems;

pub use systems::{player_intent, update_animator_params, NORMAL_THRESHOLD};

/// Константы движения (оригинальный баланс персонажа)
///
/// Живут в Resource, сериализуются — tuning можно грузить из файла
/// или снапшотить вместе с миром.
#[derive(Resource, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocomotionTuning {
    /// Скорость шага (units/s, до умножения на Δt тика)
    pub walk_speed: f32,
    /// Скорость бега
    pub run_speed: f32,
    /// Вертикальный импульс прыжка (units/s)
    pub jump_force: f32,
    /// Накопленный подъём, после которого прыжок гасится
    pub max_jump_height: f32,
    /// Гравитация (units/s²)
    pub gravity: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            walk_speed: 100.0,
            run_speed: 175.0,
            jump_force: 5.0,
            max_jump_height: 15.0,
            gravity: -9.81,
        }
    }
}

/// Locomotion Plugin — драйвер presentation-тика
///
/// Порядок выполнения (strict chain, латчи живут ровно один тик):
/// 1. evaluate_behaviors — state machine решает, что актор делает
/// 2. player_intent — InputAxes → MotionSync intent (продюсер)
/// 3. update_animator_params — intent/латчи → канал аниматора (потребитель)
/// 4. sync_animation_velocity — root-motion отчёт → rigid-body velocity
/// 5. handle_target_lock — lock event → HasTarget
/// 6. consume_latches — сброс латчей (строго последним)
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<crate::motion::TargetLocked>();

        app.add_systems(
            Update,
            (
                crate::behavior::systems::evaluate_behaviors,
                systems::player_intent,
                systems::update_animator_params,
                crate::motion::systems::sync_animation_velocity,
                crate::motion::systems::handle_target_lock,
                crate::motion::systems::consume_latches,
            )
                .chain(), // Продюсеры → потребители → сброс
        );
    }
}
