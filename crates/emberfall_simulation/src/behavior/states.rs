//! Built-in поведения

use std::sync::Arc;

use crate::behavior::state::{BehaviorCtx, BehaviorState};

/// Стоит и атакует всё, что видит — заглушка-прототип поведения моба
///
/// Терминальный по построению: переходов нет, `evaluate` всегда `None`.
/// Реакция на цель целиком уходит через HasTarget flag в канал аниматора,
/// самому state'у менять нечего.
pub struct AttackOnSight;

impl AttackOnSight {
    pub const NAME: &'static str = "attack_on_sight";
}

impl BehaviorState for AttackOnSight {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(&self, _ctx: &BehaviorCtx) -> Option<Arc<dyn BehaviorState>> {
        None
    }
}
