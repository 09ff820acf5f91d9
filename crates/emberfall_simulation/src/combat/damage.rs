//! Damage application на границе ядра

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use crate::behavior::Behavior;
use crate::components::{Health, InputAxes, Stats};
use crate::motion::MotionSync;

/// Событие: внешний слой применил урон к актору
///
/// Генерируется hit-детекцией/скриптами боя — ядро их не специфицирует.
#[derive(Event, Debug, Clone)]
pub struct DamageInflicted {
    pub target: Entity,
    pub physical: f32,
}

/// Событие: урон прошёл по Health
///
/// Broadcast для наблюдателей (презентация, UI, звук) — замена
/// рефлексивного fan-out'а явной подпиской через EventReader.
#[derive(Event, Debug, Clone)]
pub struct DamageTaken {
    pub entity: Entity,
    pub amount: u32,
}

/// Событие: entity умер (health == 0)
#[derive(Event, Debug, Clone)]
pub struct EntityDied {
    pub entity: Entity,
}

/// Компонент-маркер: entity мертв
///
/// Используется презентацией (death animation, fade-out). Деспавн не
/// автоматический.
#[derive(Component, Debug)]
pub struct Dead;

/// Итоговый урон по характеристикам цели
///
/// Формула: physical − resistance × 0.2, с полом в ноль (отрицательный
/// урон лечением не становится).
pub fn calculate_damage(physical: f32, stats: &Stats) -> u32 {
    (physical - stats.resistance * 0.2).max(0.0) as u32
}

/// Система: apply damage от DamageInflicted событий
///
/// 1. Читаем DamageInflicted события
/// 2. Вычисляем final damage по Stats цели
/// 3. Применяем damage к Health
/// 4. Broadcast DamageTaken и EntityDied
pub fn apply_damage(
    mut inflicted_events: EventReader<DamageInflicted>,
    mut taken_events: EventWriter<DamageTaken>,
    mut died_events: EventWriter<EntityDied>,
    mut targets: Query<(&Stats, &mut Health)>,
) {
    for event in inflicted_events.read() {
        let Ok((stats, mut health)) = targets.get_mut(event.target) else {
            crate::log_warning(&format!(
                "DamageInflicted: target {:?} has no Health component",
                event.target
            ));
            continue;
        };

        let final_damage = calculate_damage(event.physical, stats);

        let was_alive = health.is_alive();
        health.take_damage(final_damage);

        taken_events.send(DamageTaken {
            entity: event.target,
            amount: final_damage,
        });

        if was_alive && !health.is_alive() {
            died_events.send(EntityDied {
                entity: event.target,
            });
            crate::log_info(&format!("Entity {:?} died", event.target));
        }
    }
}

/// Система: мёртвые перестают двигаться и думать
///
/// Velocity и intent гасятся сразу (не через Commands); Behavior и InputAxes
/// снимаются через Commands, чтобы gate/jump перестали видеть актора;
/// добавляется маркер Dead.
pub fn disable_on_death(
    mut commands: Commands,
    mut death_events: EventReader<EntityDied>,
    mut query: Query<(&mut Velocity, &mut MotionSync)>,
) {
    for event in death_events.read() {
        if let Ok((mut velocity, mut motion)) = query.get_mut(event.entity) {
            velocity.linvel = Vec2::ZERO;
            motion.pending_movement = Vec2::ZERO;
        }

        if let Ok(mut entity_commands) = commands.get_entity(event.entity) {
            entity_commands.remove::<Behavior>();
            entity_commands.remove::<InputAxes>();
            entity_commands.insert(Dead);

            crate::log_info(&format!("Disabled behavior for dead entity {:?}", event.entity));
        }
    }
}
