//! Motion sync системы (presentation-тик)

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use crate::animator::{AnimationDelta, AnimatorParams, Param};
use crate::motion::{MotionSync, TargetLocked};

/// Система: root-motion отчёт evaluator'а → rigid-body velocity
///
/// Отчёт потребляется: после применения AnimationDelta обнуляется, чтобы
/// устаревшее смещение не перезатирало скорость на тиках без отчёта.
/// Вырожденный отчёт (elapsed == 0 при ненулевом смещении) даёт скорость
/// (0, 0) — явная ветка, не NaN.
pub fn sync_animation_velocity(mut query: Query<(&mut AnimationDelta, &mut Velocity)>) {
    for (mut delta, mut velocity) in query.iter_mut() {
        if delta.translation == Vec2::ZERO && delta.elapsed == 0.0 {
            // Evaluator ничего не репортил за этот тик
            continue;
        }

        velocity.linvel = MotionSync::apply_animation_delta(delta.translation, delta.elapsed);
        *delta = AnimationDelta::default();
    }
}

/// Система: TargetLocked event → HasTarget flag
///
/// Set-once семантика: флаг взводится при захвате цели и этим слоем
/// никогда не снимается.
pub fn handle_target_lock(
    mut lock_events: EventReader<TargetLocked>,
    mut query: Query<&mut AnimatorParams>,
) {
    for event in lock_events.read() {
        let Ok(mut params) = query.get_mut(event.entity) else {
            crate::log_warning(&format!(
                "TargetLocked: entity {:?} has no AnimatorParams component",
                event.entity
            ));
            continue;
        };

        params.set_flag(Param::HasTarget, true);
        crate::log(&format!("Lock acquired: {:?} HasTarget = true", event.entity));
    }
}

/// Система: сброс one-shot латчей
///
/// Последняя система presentation-цепочки. Инвариант тика:
/// продюсеры латчей → потребители → этот сброс, без переноса на следующий тик.
pub fn consume_latches(mut query: Query<&mut MotionSync>) {
    for mut motion in query.iter_mut() {
        motion.consume_latches();
    }
}
