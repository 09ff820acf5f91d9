//! Базовые компоненты акторов: Actor, Stats, Health

use bevy::prelude::*;

/// Актор (игрок, моб) — базовый компонент для персонажей
///
/// Через Required Components автоматически тянет полный набор
/// collaborator'ов: характеристики, канал аниматора, motion sync, ввод,
/// ground sensor и jump state. Отсутствие любого из них — ошибка
/// конфигурации, а не ситуация, которую чинят в runtime.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(
    Stats,
    Health,
    crate::animator::AnimatorParams,
    crate::animator::AnimatorState,
    crate::animator::AnimationDelta,
    crate::motion::MotionSync,
    crate::components::InputAxes,
    crate::physics::GroundSensor,
    crate::physics::JumpState
)]
pub struct Actor;

/// Характеристики актора
///
/// vitality определяет max HP (×10), resistance гасит физический урон
/// (0.2 за единицу).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Stats {
    pub vitality: u32,
    pub resistance: f32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            vitality: 10, // 100 HP
            resistance: 0.0,
        }
    }
}

/// Здоровье актора
///
/// Инвариант: 0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::from_stats(&Stats::default())
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// max HP = vitality × 10
    pub fn from_stats(stats: &Stats) -> Self {
        Self::new(stats.vitality * 10)
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.current = (self.current + amount).min(self.max);
    }
}
