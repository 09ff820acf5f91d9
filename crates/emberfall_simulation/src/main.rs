//! Headless симуляция EMBERFALL
//!
//! Запускает Bevy App без рендера: один персонаж пробегает вправо и
//! прыгает с зажатой кнопкой до капа по высоте.

use bevy::prelude::*;

use emberfall_simulation::{
    create_headless_app, spawn_character, AttackOnSight, BehaviorRegistry, InputAxes, JumpState,
    Player, SimulationPlugin,
};

fn main() {
    println!("Starting EMBERFALL headless simulation");

    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin);

    // Спавним персонажа через командный буфер мира
    let spawned = app
        .world_mut()
        .resource_scope(|world, mut registry: Mut<BehaviorRegistry>| {
            let mut commands = world.commands();
            spawn_character(&mut commands, &mut registry, Vec2::ZERO, AttackOnSight::NAME)
        });

    let entity = match spawned {
        Ok(entity) => entity,
        Err(err) => {
            eprintln!("Character construction failed: {}", err);
            std::process::exit(1);
        }
    };
    app.world_mut().flush();

    // Бежим вправо с зажатым прыжком
    app.world_mut()
        .entity_mut(entity)
        .insert(Player)
        .insert(InputAxes {
            horizontal: 1.0,
            run: 1.0,
            jump: 1.0,
        });

    // Запускаем 600 тиков симуляции
    for tick in 0..600 {
        app.update();

        if tick % 100 == 0 {
            let world = app.world();
            let position = world.get::<Transform>(entity).unwrap().translation;
            let jump = world.get::<JumpState>(entity).unwrap();
            println!("Tick {}: pos ({:.2}, {:.2}), jump {:?}", tick, position.x, position.y, jump);
        }
    }

    println!("Simulation complete!");
}
