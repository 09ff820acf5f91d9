//! Behavior evaluation система (presentation-тик)

use bevy::prelude::*;

use crate::animator::AnimatorParams;
use crate::behavior::state::{Behavior, BehaviorCtx};
use crate::motion::MotionSync;
use crate::physics::GroundSensor;

/// Система: оценка поведения каждого актора, раз в presentation-тик
///
/// Текущий state решает: `None` — остаться, `Some(next)` — перейти.
/// Единственное место, где переназначается Behavior.current.
pub fn evaluate_behaviors(
    mut query: Query<(Entity, &mut Behavior, &MotionSync, &AnimatorParams, &GroundSensor)>,
) {
    for (entity, mut behavior, motion, params, sensor) in query.iter_mut() {
        let ctx = BehaviorCtx {
            motion,
            params,
            grounded: sensor.grounded,
        };

        if let Some(next) = behavior.current.evaluate(&ctx) {
            crate::log(&format!(
                "Behavior: {:?} {} → {}",
                entity,
                behavior.current.name(),
                next.name()
            ));
            behavior.current = next;
        }
    }
}
