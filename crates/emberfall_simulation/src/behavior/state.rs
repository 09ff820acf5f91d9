//! BehaviorState trait + per-actor Behavior компонент

use std::sync::Arc;

use bevy::prelude::*;

use crate::animator::AnimatorParams;
use crate::motion::MotionSync;

/// Снимок актора, который видит state при оценке
///
/// Только чтение: state'ы stateless и side-effect-free относительно
/// собственной идентичности, все мутации идут через возврат перехода.
pub struct BehaviorCtx<'a> {
    pub motion: &'a MotionSync,
    pub params: &'a AnimatorParams,
    pub grounded: bool,
}

/// Единица поведения (flyweight)
///
/// `evaluate` возвращает `None` — остаться в текущем state, либо новый
/// state — перейти. Терминальные state'ы легальны: state, всегда
/// возвращающий `None`, — корректное (пусть и вырожденное) поведение.
pub trait BehaviorState: Send + Sync {
    /// Стабильное имя поведения (ключ в registry)
    fn name(&self) -> &'static str;

    fn evaluate(&self, ctx: &BehaviorCtx) -> Option<Arc<dyn BehaviorState>>;
}

/// Текущее поведение актора
///
/// Присваивается при спавне (отсутствие initial state — ошибка конфигурации,
/// спавн не проходит). Переназначается только evaluate_behaviors, раз в тик.
#[derive(Component, Clone)]
pub struct Behavior {
    pub current: Arc<dyn BehaviorState>,
}

impl Behavior {
    pub fn new(initial: Arc<dyn BehaviorState>) -> Self {
        Self { current: initial }
    }
}

impl std::fmt::Debug for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Behavior")
            .field("current", &self.current.name())
            .finish()
    }
}
