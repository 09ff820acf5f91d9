//! Locomotion системы (presentation-тик)

use bevy::prelude::*;

use crate::animator::{AnimatorParams, Param};
use crate::components::{InputAxes, Player};
use crate::motion::MotionSync;

/// Порог, ниже которого intent не трогает heading
///
/// При |intent| < порога normals держат последнее значение — heading не
/// схлопывается в ноль, пока персонаж тормозит.
pub const NORMAL_THRESHOLD: f32 = 0.01;

/// Система: InputAxes → MotionSync intent (только player-controlled акторы)
///
/// AI-акторы получают intent от своего behavior-слоя, не отсюда.
pub fn player_intent(mut query: Query<(&InputAxes, &mut MotionSync), With<Player>>) {
    for (axes, mut motion) in query.iter_mut() {
        motion.pending_movement = Vec2::new(axes.horizontal, 0.0);
    }
}

/// Система: intent и латчи → канал аниматора, раз в presentation-тик
///
/// 1. Intent пишется в MovX/MovY как есть.
/// 2. При |intent| ≥ NORMAL_THRESHOLD в NormalX/NormalY уходит unit вектор,
///    иначе normals не трогаем (hold last heading).
/// 3. Взведённые латчи атаки/блока дают trigger pulse; сам латч здесь НЕ
///    сбрасывается — единственная точка сброса это consume_latches в конце
///    той же цепочки.
pub fn update_animator_params(mut query: Query<(&MotionSync, &mut AnimatorParams)>) {
    for (motion, mut params) in query.iter_mut() {
        let movement = motion.pending_movement;

        params.set_float(Param::MovX, movement.x);
        params.set_float(Param::MovY, movement.y);

        if movement.length_squared() >= NORMAL_THRESHOLD * NORMAL_THRESHOLD {
            let normal = movement.normalize();
            params.set_float(Param::NormalX, normal.x);
            params.set_float(Param::NormalY, normal.y);
        }

        if motion.pending_attack {
            params.set_trigger(Param::Attack);
        }
        if motion.block_held {
            params.set_trigger(Param::Block);
        }
    }
}
