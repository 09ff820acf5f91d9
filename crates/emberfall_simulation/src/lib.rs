//! EMBERFALL Simulation Core
//!
//! ECS-ядро персонажа на Bevy 0.16: state machine поведения, locomotion,
//! канал параметров аниматора, многотиковый прыжок.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = simulation core (behavior, intent, velocity, латчи действий)
//! - Animation evaluator / renderer = внешний слой; в ядро он репортит
//!   root-motion delta (AnimationDelta) и текущую позу (AnimatorState),
//!   из ядра читает канал параметров (AnimatorParams)
//!
//! Два кооперирующих цикла на актора, без shared mutable state между
//! акторами:
//! - presentation-тик (`Update`): behavior evaluation, запись канала
//!   аниматора, синхронизация root motion, сброс латчей
//! - physics-тик (`FixedUpdate`, 50Hz): ground check, gravity, horizontal
//!   gate, jump, интеграция velocity

use bevy::prelude::*;

// Публичные модули
pub mod animator;
pub mod behavior;
pub mod combat;
pub mod components;
pub mod locomotion;
pub mod logger;
pub mod motion;
pub mod physics;

// Re-export базовых типов для удобства
pub use animator::{AnimationDelta, AnimatorParams, AnimatorState, CombatPose, Param};
pub use behavior::{AttackOnSight, Behavior, BehaviorCtx, BehaviorRegistry, BehaviorState, SpawnError};
pub use combat::{calculate_damage, CombatPlugin, DamageInflicted, DamageTaken, Dead, EntityDied};
pub use components::*;
pub use locomotion::{LocomotionPlugin, LocomotionTuning, NORMAL_THRESHOLD};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger,
    set_logger_if_needed, LogLevel, LogPrinter,
};
pub use motion::{MotionSync, TargetLocked};
pub use physics::{spawn_character, GroundSensor, JumpState, KinematicControllerPlugin};

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 50Hz для physics-тика
            .insert_resource(Time::<Fixed>::from_hz(50.0))
            // Баланс движения + registry поведений
            .init_resource::<LocomotionTuning>()
            .init_resource::<BehaviorRegistry>()
            // Подсистемы
            .add_plugins((LocomotionPlugin, KinematicControllerPlugin, CombatPlugin));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_hz(50.0)); // 50Hz FixedUpdate

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Упрощённая версия: компоненты в детерминированном порядке (по Entity ID),
/// сериализация через Debug.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
