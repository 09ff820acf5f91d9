//! Locomotion integration tests
//!
//! Проверяем свойства тиков на headless App:
//! - канал аниматора (intent → MovX/MovY, unit heading + hold)
//! - one-shot латчи (пульс живёт ровно один presentation-тик)
//! - jump controller (кап по высоте, гашение вертикали в том же тике)
//! - horizontal gate (hard override в Blocking/Attacking-в-воздухе)
//! - damage boundary (формула, смерть, отключение управления)
//!
//! Тики гоняем вручную через run_schedule — полный app.update() завязан на
//! wall-clock и для точного счёта fixed-тиков не годится.

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use emberfall_simulation::*;

/// Helper: headless App со всеми подсистемами
fn create_app() -> App {
    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin);
    app
}

/// Helper: спавн персонажа с дефолтным (терминальным) поведением
fn spawn_actor(app: &mut App) -> Entity {
    let spawned = app
        .world_mut()
        .resource_scope(|world, mut registry: Mut<BehaviorRegistry>| {
            let mut commands = world.commands();
            spawn_character(&mut commands, &mut registry, Vec2::ZERO, AttackOnSight::NAME)
        })
        .expect("default behavior must resolve");
    app.world_mut().flush();
    spawned
}

/// Helper: один presentation-тик
fn tick_presentation(app: &mut App) {
    app.world_mut().run_schedule(Update);
}

/// Helper: один physics-тик (двигаем Time<Fixed> на ровно один step)
fn tick_fixed(app: &mut App) {
    let timestep = app.world().resource::<Time<Fixed>>().timestep();
    app.world_mut()
        .resource_mut::<Time<Fixed>>()
        .advance_by(timestep);
    app.world_mut().run_schedule(FixedUpdate);
}

fn fixed_dt(app: &App) -> f32 {
    app.world().resource::<Time<Fixed>>().timestep().as_secs_f32()
}

// --- Канал аниматора ---

#[test]
fn test_intent_written_verbatim_and_normalized() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);

    app.world_mut()
        .get_mut::<MotionSync>(actor)
        .unwrap()
        .pending_movement = Vec2::new(3.0, 4.0);
    tick_presentation(&mut app);

    let params = app.world().get::<AnimatorParams>(actor).unwrap();
    assert_eq!(params.float(Param::MovX), 3.0);
    assert_eq!(params.float(Param::MovY), 4.0);

    // Unit вектор в направлении intent'а
    let heading = params.heading();
    assert!((heading.x - 0.6).abs() < 1e-4);
    assert!((heading.y - 0.8).abs() < 1e-4);
    assert!((heading.length() - 1.0).abs() < 1e-4);
}

#[test]
fn test_heading_stays_unit_for_many_intents() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);

    let intents = [
        Vec2::new(0.01, 0.0),
        Vec2::new(-5.0, 0.3),
        Vec2::new(0.2, -0.2),
        Vec2::new(1000.0, 1.0),
        Vec2::new(-0.007, 0.008), // |v| ≈ 0.0106 — чуть выше порога
    ];

    for intent in intents {
        app.world_mut()
            .get_mut::<MotionSync>(actor)
            .unwrap()
            .pending_movement = intent;
        tick_presentation(&mut app);

        let heading = app.world().get::<AnimatorParams>(actor).unwrap().heading();
        assert!(
            (heading.length() - 1.0).abs() < 1e-4,
            "heading {:?} for intent {:?} is not unit",
            heading,
            intent
        );
    }
}

#[test]
fn test_heading_holds_below_threshold() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);

    // Разгоняемся: heading выставлен
    app.world_mut()
        .get_mut::<MotionSync>(actor)
        .unwrap()
        .pending_movement = Vec2::new(3.0, 4.0);
    tick_presentation(&mut app);

    // Тормозим до крошечного intent'а: heading не должен схлопнуться
    app.world_mut()
        .get_mut::<MotionSync>(actor)
        .unwrap()
        .pending_movement = Vec2::new(0.001, 0.002);
    tick_presentation(&mut app);
    tick_presentation(&mut app); // Повторный тик идемпотентен

    let params = app.world().get::<AnimatorParams>(actor).unwrap();
    // MovX/MovY — сырой intent, ушёл как есть
    assert_eq!(params.float(Param::MovX), 0.001);
    // Normals держат последнее «громкое» направление
    let heading = params.heading();
    assert!((heading.x - 0.6).abs() < 1e-4);
    assert!((heading.y - 0.8).abs() < 1e-4);
}

// --- One-shot латчи ---

#[test]
fn test_attack_latch_pulses_one_tick() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);

    app.world_mut()
        .get_mut::<MotionSync>(actor)
        .unwrap()
        .request_attack();
    tick_presentation(&mut app);

    // После тика N: пульс взведён, латч уже сброшен tick-driver'ом
    assert!(app
        .world()
        .get::<AnimatorParams>(actor)
        .unwrap()
        .flag(Param::Attack));
    assert!(!app.world().get::<MotionSync>(actor).unwrap().pending_attack);

    // Evaluator потребляет пульс ровно один раз
    assert!(app
        .world_mut()
        .get_mut::<AnimatorParams>(actor)
        .unwrap()
        .consume_trigger(Param::Attack));

    // Тик N+1 без нового запроса — пульса нет
    tick_presentation(&mut app);
    assert!(!app
        .world()
        .get::<AnimatorParams>(actor)
        .unwrap()
        .flag(Param::Attack));
}

#[test]
fn test_block_latch_does_not_survive_tick() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);

    app.world_mut()
        .get_mut::<MotionSync>(actor)
        .unwrap()
        .block_held = true;
    tick_presentation(&mut app);

    let motion = app.world().get::<MotionSync>(actor).unwrap();
    assert!(!motion.block_held, "латч обязан сброситься в том же тике");
    assert!(app
        .world()
        .get::<AnimatorParams>(actor)
        .unwrap()
        .flag(Param::Block));
}

// --- Root motion → velocity ---

#[test]
fn test_animation_delta_becomes_velocity() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);

    *app.world_mut().get_mut::<AnimationDelta>(actor).unwrap() = AnimationDelta {
        translation: Vec2::new(0.5, -0.1),
        elapsed: 0.025,
    };
    tick_presentation(&mut app);

    let velocity = app.world().get::<Velocity>(actor).unwrap();
    assert!((velocity.linvel.x - 20.0).abs() < 1e-4);
    assert!((velocity.linvel.y - (-4.0)).abs() < 1e-4);

    // Отчёт потреблён: следующий тик без отчёта скорость не трогает
    tick_presentation(&mut app);
    let velocity = app.world().get::<Velocity>(actor).unwrap();
    assert!((velocity.linvel.x - 20.0).abs() < 1e-4);
}

#[test]
fn test_zero_elapsed_report_yields_zero_velocity() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);

    *app.world_mut().get_mut::<AnimationDelta>(actor).unwrap() = AnimationDelta {
        translation: Vec2::new(1.0, 1.0),
        elapsed: 0.0,
    };
    tick_presentation(&mut app);

    let velocity = app.world().get::<Velocity>(actor).unwrap();
    assert_eq!(velocity.linvel, Vec2::ZERO);
    assert!(velocity.linvel.x.is_finite() && velocity.linvel.y.is_finite());
}

// --- Lock-on ---

#[test]
fn test_target_lock_sets_has_target_once() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);

    app.world_mut().send_event(TargetLocked { entity: actor });
    tick_presentation(&mut app);

    assert!(app
        .world()
        .get::<AnimatorParams>(actor)
        .unwrap()
        .flag(Param::HasTarget));

    // Этот слой флаг никогда не снимает
    for _ in 0..10 {
        tick_presentation(&mut app);
        tick_fixed(&mut app);
    }
    assert!(app
        .world()
        .get::<AnimatorParams>(actor)
        .unwrap()
        .flag(Param::HasTarget));
}

// --- Jump controller ---

#[test]
fn test_jump_sustained_until_height_cap() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);
    let dt = fixed_dt(&mut app);

    let tuning = *app.world().resource::<LocomotionTuning>();
    assert_eq!(tuning.jump_force, 5.0);
    assert_eq!(tuning.max_jump_height, 15.0);

    // Держим прыжок зажатым
    app.world_mut().entity_mut(actor).insert(InputAxes {
        horizontal: 0.0,
        run: 0.0,
        jump: 1.0,
    });

    let mut terminated_at_height = None;
    for tick in 0..400 {
        tick_fixed(&mut app);

        let height = app.world().get::<Transform>(actor).unwrap().translation.y;
        let jump = *app.world().get::<JumpState>(actor).unwrap();
        let velocity = app.world().get::<Velocity>(actor).unwrap().linvel;

        // Кап никогда не превышается больше чем на один тик подъёма
        assert!(
            height <= tuning.max_jump_height + tuning.jump_force * dt + 1e-3,
            "tick {}: height {} exceeds cap",
            tick,
            height
        );

        match jump {
            JumpState::Active { .. } => {
                // Каждый активный тик — фиксированный импульс, без стакинга
                assert_eq!(velocity.y, tuning.jump_force);
            }
            JumpState::Inactive if tick > 0 => {
                // Терминация: вертикаль погашена в этом же тике
                assert_eq!(velocity.y, 0.0);
                terminated_at_height = Some(height);
                break;
            }
            JumpState::Inactive => {}
        }
    }

    let final_height = terminated_at_height.expect("jump must terminate at the cap");
    assert!(
        final_height >= tuning.max_jump_height - tuning.jump_force * dt,
        "terminated too early: {}",
        final_height
    );
}

#[test]
fn test_jump_release_halts_vertical_same_tick() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);

    app.world_mut().entity_mut(actor).insert(InputAxes {
        jump: 1.0,
        ..Default::default()
    });

    for _ in 0..10 {
        tick_fixed(&mut app);
    }
    assert!(matches!(
        *app.world().get::<JumpState>(actor).unwrap(),
        JumpState::Active { .. }
    ));

    // Отпускаем кнопку: гашение в тот же fixed-тик, не на следующем
    app.world_mut().get_mut::<InputAxes>(actor).unwrap().jump = 0.0;
    tick_fixed(&mut app);

    assert_eq!(app.world().get::<Velocity>(actor).unwrap().linvel.y, 0.0);
    assert_eq!(
        *app.world().get::<JumpState>(actor).unwrap(),
        JumpState::Inactive
    );

    // Дальше персонаж в воздухе — гравитация тянет вниз
    tick_fixed(&mut app);
    assert!(app.world().get::<Velocity>(actor).unwrap().linvel.y < 0.0);
}

#[test]
fn test_jump_requires_ground() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);

    // Персонаж в воздухе
    app.world_mut()
        .get_mut::<Transform>(actor)
        .unwrap()
        .translation
        .y = 5.0;
    app.world_mut().entity_mut(actor).insert(InputAxes {
        jump: 1.0,
        ..Default::default()
    });

    tick_fixed(&mut app);
    assert_eq!(
        *app.world().get::<JumpState>(actor).unwrap(),
        JumpState::Inactive
    );
}

#[test]
fn test_active_jump_session_not_restarted() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);

    app.world_mut().entity_mut(actor).insert(InputAxes {
        jump: 1.0,
        ..Default::default()
    });

    tick_fixed(&mut app);
    let initial = match *app.world().get::<JumpState>(actor).unwrap() {
        JumpState::Active { initial_height } => initial_height,
        JumpState::Inactive => panic!("jump must start"),
    };

    // Кнопка всё ещё зажата — сессия одна, initial_height не переснимается
    for _ in 0..20 {
        tick_fixed(&mut app);
        if let JumpState::Active { initial_height } = *app.world().get::<JumpState>(actor).unwrap()
        {
            assert_eq!(initial_height, initial);
        }
    }
}

// --- Horizontal motion gate ---

#[test]
fn test_walk_and_run_speed() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);
    let dt = fixed_dt(&mut app);

    app.world_mut().entity_mut(actor).insert(InputAxes {
        horizontal: 1.0,
        ..Default::default()
    });
    tick_fixed(&mut app);
    let walk_velocity = app.world().get::<Velocity>(actor).unwrap().linvel.x;
    assert!((walk_velocity - 100.0 * dt).abs() < 1e-4);

    app.world_mut().get_mut::<InputAxes>(actor).unwrap().run = 1.0;
    tick_fixed(&mut app);
    let run_velocity = app.world().get::<Velocity>(actor).unwrap().linvel.x;
    assert!((run_velocity - 175.0 * dt).abs() < 1e-4);
}

#[test]
fn test_blocking_pose_zeroes_horizontal_keeps_vertical() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);

    app.world_mut().entity_mut(actor).insert(InputAxes {
        horizontal: 1.0,
        ..Default::default()
    });
    app.world_mut()
        .get_mut::<AnimatorState>(actor)
        .unwrap()
        .pose = CombatPose::Blocking;
    app.world_mut()
        .get_mut::<Velocity>(actor)
        .unwrap()
        .linvel
        .y = 3.0;

    tick_fixed(&mut app);

    let velocity = app.world().get::<Velocity>(actor).unwrap().linvel;
    assert_eq!(velocity.x, 0.0, "hard override, не blend");
    assert_eq!(velocity.y, 3.0, "вертикаль проходит без изменений");
}

#[test]
fn test_attacking_gates_only_airborne() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);
    let dt = fixed_dt(&mut app);

    app.world_mut().entity_mut(actor).insert(InputAxes {
        horizontal: 1.0,
        ..Default::default()
    });
    app.world_mut()
        .get_mut::<AnimatorState>(actor)
        .unwrap()
        .pose = CombatPose::Attacking;

    // На земле атака не запирает движение
    tick_fixed(&mut app);
    let grounded_velocity = app.world().get::<Velocity>(actor).unwrap().linvel.x;
    assert!((grounded_velocity - 100.0 * dt).abs() < 1e-4);

    // В воздухе — запирает
    app.world_mut()
        .get_mut::<Transform>(actor)
        .unwrap()
        .translation
        .y = 5.0;
    tick_fixed(&mut app);
    assert_eq!(app.world().get::<Velocity>(actor).unwrap().linvel.x, 0.0);
}

// --- Behavior state machine ---

#[test]
fn test_degenerate_state_is_terminal() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);

    // Сколько ни тикай — поведение не меняется (терминальный по построению)
    for _ in 0..50 {
        tick_presentation(&mut app);
    }
    let behavior = app.world().get::<Behavior>(actor).unwrap();
    assert_eq!(behavior.current.name(), AttackOnSight::NAME);
}

#[test]
fn test_unknown_initial_behavior_aborts_spawn() {
    let mut app = create_app();

    let result = app
        .world_mut()
        .resource_scope(|world, mut registry: Mut<BehaviorRegistry>| {
            let mut commands = world.commands();
            spawn_character(&mut commands, &mut registry, Vec2::ZERO, "warrior_dance")
        });

    assert_eq!(
        result.err(),
        Some(SpawnError::UnknownBehavior("warrior_dance".to_string()))
    );
}

// --- Damage boundary ---

#[test]
fn test_damage_reduces_health_and_broadcasts() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);

    app.world_mut().send_event(DamageInflicted {
        target: actor,
        physical: 30.0,
    });
    tick_fixed(&mut app);

    assert_eq!(app.world().get::<Health>(actor).unwrap().current, 70);

    // Broadcast для наблюдателей презентации
    let events = app.world().resource::<Events<DamageTaken>>();
    let mut cursor = events.get_cursor();
    let taken: Vec<_> = cursor.read(events).collect();
    assert_eq!(taken.len(), 1);
    assert_eq!(taken[0].amount, 30);
}

#[test]
fn test_death_detaches_control() {
    let mut app = create_app();
    let actor = spawn_actor(&mut app);

    app.world_mut().entity_mut(actor).insert(InputAxes {
        horizontal: 1.0,
        ..Default::default()
    });
    tick_fixed(&mut app);
    assert!(app.world().get::<Velocity>(actor).unwrap().linvel.x > 0.0);

    app.world_mut().send_event(DamageInflicted {
        target: actor,
        physical: 1000.0,
    });
    tick_fixed(&mut app);

    assert!(!app.world().get::<Health>(actor).unwrap().is_alive());
    assert!(app.world().get::<Dead>(actor).is_some());
    assert!(app.world().get::<Behavior>(actor).is_none());
    assert!(app.world().get::<InputAxes>(actor).is_none());
    assert_eq!(app.world().get::<Velocity>(actor).unwrap().linvel, Vec2::ZERO);

    // Мёртвый больше не двигается даже спустя тики
    tick_fixed(&mut app);
    assert_eq!(app.world().get::<Velocity>(actor).unwrap().linvel.x, 0.0);
}
