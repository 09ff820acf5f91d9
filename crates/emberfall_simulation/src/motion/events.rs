//! Motion events

use bevy::prelude::*;

/// Event: lock-on слой захватил цель для актора
///
/// Генерируется:
/// - Targeting system (внешний collaborator)
///
/// Обрабатывается:
/// - handle_target_lock: выставляет HasTarget в канале параметров (один раз,
///   этим слоем никогда не снимается)
#[derive(Event, Debug, Clone)]
pub struct TargetLocked {
    pub entity: Entity,
}
