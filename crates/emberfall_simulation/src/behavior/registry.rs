//! Flyweight registry поведений + ошибки конфигурации спавна

use std::collections::HashMap;
use std::sync::Arc;

use bevy::prelude::*;
use thiserror::Error;

use crate::behavior::state::BehaviorState;
use crate::behavior::states::AttackOnSight;

/// Ошибка конфигурации при конструировании актора
///
/// Fatal на construction-time: спавн прерывается, деградации в runtime нет.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpawnError {
    #[error("unknown behavior state '{0}'")]
    UnknownBehavior(String),
}

/// Registry flyweight-инстансов поведений, ключ — стабильное имя
///
/// Инстанс создаётся лениво при первом resolve и дальше шарится между
/// всеми акторами (обычный shared-ownership через `Arc`, никаких
/// синглтон-глобалов). Инстансы не уничтожаются и не мутируют.
#[derive(Resource, Default)]
pub struct BehaviorRegistry {
    states: HashMap<&'static str, Arc<dyn BehaviorState>>,
}

impl BehaviorRegistry {
    /// Регистрирует внешний state (например, game-specific поведение)
    pub fn register(&mut self, state: Arc<dyn BehaviorState>) {
        self.states.insert(state.name(), state);
    }

    /// Возвращает shared instance поведения, создавая built-in лениво
    ///
    /// Неизвестное имя — ошибка конфигурации вызывающего, не runtime-failure.
    pub fn resolve(&mut self, name: &str) -> Result<Arc<dyn BehaviorState>, SpawnError> {
        if let Some(state) = self.states.get(name) {
            return Ok(state.clone());
        }

        let built: Arc<dyn BehaviorState> = match name {
            AttackOnSight::NAME => Arc::new(AttackOnSight),
            _ => return Err(SpawnError::UnknownBehavior(name.to_string())),
        };

        self.states.insert(built.name(), built.clone());
        Ok(built)
    }
}
