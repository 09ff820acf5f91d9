//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: базовые характеристики (Actor, Stats, Health)
//! - input: логические оси ввода (InputAxes)
//! - player: player control marker (Player)
//!
//! Motion/animator/physics компоненты живут в своих доменных модулях.

pub mod actor;
pub mod input;
pub mod player;

// Re-exports для удобного импорта
pub use actor::*;
pub use input::*;
pub use player::*;
