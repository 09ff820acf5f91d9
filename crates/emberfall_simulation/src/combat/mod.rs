//! Combat boundary module
//!
//! Ядро урон НЕ считает по-настоящему: снаружи приходит
//! damage-applied notification (DamageInflicted), здесь — применение к
//! Health по формуле характеристик и широковещательный DamageTaken для
//! презентации/UI. Вместо рефлексивного broadcast — обычные ECS events,
//! на которые подписываются системы-наблюдатели.

use bevy::prelude::*;

pub mod damage;

// Re-export основных типов
pub use damage::{
    calculate_damage, Dead, DamageInflicted, DamageTaken, EntityDied,
};

/// Combat Plugin
///
/// Регистрирует damage-системы в FixedUpdate.
///
/// Порядок выполнения:
/// 1. apply_damage — DamageInflicted → Health, broadcast DamageTaken/EntityDied
/// 2. disable_on_death — мёртвые перестают двигаться и думать
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<DamageInflicted>()
            .add_event::<DamageTaken>()
            .add_event::<EntityDied>();

        // Регистрация систем в FixedUpdate, строго после kinematic-цепочки:
        // мёртвый актор гасится в том же тике, gate его уже не перезапишет
        app.add_systems(
            FixedUpdate,
            (damage::apply_damage, damage::disable_on_death)
                .chain()
                .after(crate::physics::movement::integrate_velocity_to_transform),
        );
    }
}
