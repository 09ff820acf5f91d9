//! Behavior state machine — минимальный иерархический селектор поведения
//!
//! States — flyweight'ы: stateless, один shared `Arc` instance на поведение,
//! общий для всех акторов (per-actor данных в state нет). Создаются лениво
//! при первом запросе через [`BehaviorRegistry`], живут до конца процесса.
//!
//! Машина не держит shared mutable state: единственная мутация — поле
//! текущего state в [`Behavior`] компоненте актора, и пишет его только
//! система [`systems::evaluate_behaviors`], раз в presentation-тик.

pub mod registry;
pub mod state;
pub mod states;
pub mod systems;

// Re-export основных типов
pub use registry::{BehaviorRegistry, SpawnError};
pub use state::{Behavior, BehaviorCtx, BehaviorState};
pub use states::AttackOnSight;
