//! Логические оси ввода

use bevy::prelude::*;

/// Логические оси, читаемые симуляцией каждый тик (read-only для неё)
///
/// Заполняется внешним input-слоем (или AI). Для headless тестов —
/// mock input через этот компонент.
///
/// `horizontal` — continuous, конвенционально [-1, 1].
/// `run`/`jump` — оси, трактуемые как boolean через truncation
/// (аналоговое значение < 1.0 — это «не нажато»).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct InputAxes {
    pub horizontal: f32,
    pub run: f32,
    pub jump: f32,
}

impl InputAxes {
    #[inline]
    pub fn run_held(&self) -> bool {
        self.run as i32 == 1
    }

    #[inline]
    pub fn jump_held(&self) -> bool {
        self.jump as i32 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_truncate_to_bool() {
        let mut axes = InputAxes::default();
        assert!(!axes.jump_held());

        axes.jump = 0.99; // Недожатый триггер — не прыжок
        assert!(!axes.jump_held());

        axes.jump = 1.0;
        assert!(axes.jump_held());

        axes.run = 1.0;
        assert!(axes.run_held());
    }
}
