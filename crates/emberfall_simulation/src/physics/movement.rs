//! Kinematic контроллер персонажа (fixed-тик)
//!
//! Архитектура:
//! - Rapier для коллизий (RigidBody::KinematicVelocityBased)
//! - Custom velocity integration (не используем Rapier forces)
//! - Horizontal gate + jump + gravity + ground check
//!
//! Детерминизм: fixed timestep (50Hz), на тик — строгая цепочка систем.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::animator::CombatPose;
use crate::behavior::{Behavior, BehaviorRegistry, SpawnError};
use crate::components::{Actor, InputAxes};
use crate::locomotion::LocomotionTuning;

/// Порог ground check: стоим на полу (y=0), небольшой запас на
/// numerical errors интеграции
const GROUNDED_MAX_HEIGHT: f32 = 0.05;

/// Датчик опоры: boolean «стоит ли персонаж на земле»
///
/// Обновляется первым в fixed-цепочке, всеми остальными системами тика
/// читается как данность.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct GroundSensor {
    pub grounded: bool,
}

/// Многотиковый прыжок как явный resumable state (вместо корутины)
///
/// Возобновляется раз в fixed-тик jump_controller'ом. Одновременно активна
/// максимум одна сессия на актора: повторный запрос при активной —
/// игнорируется, без очереди и без стакинга.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub enum JumpState {
    #[default]
    Inactive,
    Active {
        /// Высота в момент старта; current height = y − initial_height
        initial_height: f32,
    },
}

/// Система ground detection через простую Y-проверку
///
/// Stub для Vertical Slice: пол на y=0, grounded если y ≤ 0.05.
///
/// TODO: Заменить на raycast через RapierContext когда подключим полный
/// Rapier plugin
pub fn ground_detection(mut query: Query<(&Transform, &mut GroundSensor)>) {
    for (transform, mut sensor) in query.iter_mut() {
        sensor.grounded = transform.translation.y <= GROUNDED_MAX_HEIGHT;
    }
}

/// Система применения gravity к velocity
///
/// Работает в FixedUpdate (50Hz). В воздухе velocity.y набирает gravity;
/// на земле вертикаль не трогаем.
pub fn apply_gravity(
    mut query: Query<(&GroundSensor, &mut Velocity)>,
    tuning: Res<LocomotionTuning>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (sensor, mut velocity) in query.iter_mut() {
        if !sensor.grounded {
            velocity.linvel.y += tuning.gravity * delta;
        }
    }
}

/// Система: horizontal motion gate
///
/// Обычный кейс: velocity.x = horizontal × (run ? run_speed : walk_speed) × Δt.
/// Hard override: в позе Blocking, либо Attacking в воздухе, горизонталь
/// жёстко зануляется — это не blend. Вертикаль в обеих ветках проходит
/// без изменений.
pub fn horizontal_motion_gate(
    mut query: Query<(
        &InputAxes,
        &crate::animator::AnimatorState,
        &GroundSensor,
        &mut Velocity,
    )>,
    tuning: Res<LocomotionTuning>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (axes, animator, sensor, mut velocity) in query.iter_mut() {
        let gated = match animator.pose {
            CombatPose::Blocking => true,
            CombatPose::Attacking => !sensor.grounded,
            CombatPose::Neutral => false,
        };

        if gated {
            velocity.linvel.x = 0.0;
        } else {
            let speed = if axes.run_held() {
                tuning.run_speed
            } else {
                tuning.walk_speed
            };
            velocity.linvel.x = axes.horizontal * speed * delta;
        }
    }
}

/// Система: jump controller, возобновляется раз в fixed-тик
///
/// Старт: grounded ∧ jump axis нажата ∧ сессия неактивна.
/// Каждый активный тик: current height = y − initial; пока axis держится и
/// высота ниже капа — сброс вертикальной скорости + фиксированный импульс
/// (повторные импульсы не складываются). Отпустили axis или добрали кап —
/// вертикаль гасится немедленно, в этом же тике, не на следующем.
pub fn jump_controller(
    mut query: Query<(
        &InputAxes,
        &GroundSensor,
        &Transform,
        &mut JumpState,
        &mut Velocity,
    )>,
    tuning: Res<LocomotionTuning>,
) {
    for (axes, sensor, transform, mut jump, mut velocity) in query.iter_mut() {
        match *jump {
            JumpState::Inactive => {
                if axes.jump_held() && sensor.grounded {
                    velocity.linvel.y = tuning.jump_force;
                    *jump = JumpState::Active {
                        initial_height: transform.translation.y,
                    };
                }
            }
            JumpState::Active { initial_height } => {
                let current_height = transform.translation.y - initial_height;

                if axes.jump_held() && current_height < tuning.max_jump_height {
                    velocity.linvel.y = tuning.jump_force;
                } else {
                    velocity.linvel.y = 0.0;
                    *jump = JumpState::Inactive;
                }
            }
        }
    }
}

/// Система интеграции velocity → Transform (headless режим, без Rapier)
///
/// Напрямую применяет Velocity.linvel к Transform.translation.
/// Используется когда Rapier не подключен (headless симуляция).
pub fn integrate_velocity_to_transform(
    mut query: Query<(&Velocity, &mut Transform)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (velocity, mut transform) in query.iter_mut() {
        transform.translation += velocity.linvel.extend(0.0) * delta;
    }
}

/// Plugin для kinematic контроллера
///
/// Все системы в FixedUpdate, строгая цепочка:
/// ground check → gravity → horizontal gate → jump (переписывает вертикаль
/// последним, чтобы гарантии капа держались внутри одного тика) → интеграция.
pub struct KinematicControllerPlugin;

impl Plugin for KinematicControllerPlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier2d::plugin::PhysicsSet;

        // Наши системы запускаются ДО rapier physics step
        app.add_systems(
            FixedUpdate,
            (
                ground_detection,
                apply_gravity,
                horizontal_motion_gate,
                jump_controller,
                integrate_velocity_to_transform, // Прямая интеграция (rapier только для collisions)
            )
                .chain()
                .before(PhysicsSet::SyncBackend),
        );
    }
}

/// Spawn helper для создания персонажа
///
/// Собирает полный набор collaborator'ов: Transform, Actor (через Required
/// Components тянет Stats/Health/канал аниматора/MotionSync/ввод/сенсоры),
/// rapier body + collider + velocity, initial behavior из registry.
///
/// Неизвестное имя initial behavior — ошибка конфигурации: возвращаем Err,
/// entity не создаётся.
pub fn spawn_character(
    commands: &mut Commands,
    registry: &mut BehaviorRegistry,
    position: Vec2,
    initial_behavior: &str,
) -> Result<Entity, SpawnError> {
    let state = registry.resolve(initial_behavior)?;

    let entity = commands
        .spawn((
            // Bevy transform
            Transform::from_translation(position.extend(0.0)),
            // Наши компоненты
            Actor,
            Behavior::new(state),
            // Rapier physics (collision-слой)
            RigidBody::KinematicVelocityBased,
            Collider::capsule_y(0.75, 0.35),
            Velocity::zero(),
        ))
        .id();

    crate::log(&format!(
        "Spawned character {:?} (behavior '{}', pos {})",
        entity, initial_behavior, position
    ));

    Ok(entity)
}
