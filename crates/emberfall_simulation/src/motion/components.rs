//! MotionSync: intent вектор + one-shot латчи действий

use bevy::prelude::*;

/// Мост между командным слоем (input/AI) и презентацией
///
/// Владеет intent'ом и one-shot латчами. Латчи живут ровно один
/// presentation-тик: продюсеры взводят → потребители читают →
/// [`MotionSync::consume_latches`] сбрасывает (единственная точка сброса,
/// последняя система цепочки).
///
/// Heading/movement НЕ хранятся здесь — они derived из
/// [`crate::animator::AnimatorParams`], чтобы командный слой и evaluator
/// не могли разъехаться.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MotionSync {
    /// Intent вектор (magnitude не ограничена — клампит вызывающий)
    pub pending_movement: Vec2,
    /// Латч: запрошена атака
    pub pending_attack: bool,
    /// Латч: запрошен dodge
    pub pending_dodge: bool,
    /// Латч: блок удерживается
    pub block_held: bool,
}

impl MotionSync {
    /// Взводит латч атаки (идемпотентно в пределах тика)
    #[inline]
    pub fn request_attack(&mut self) {
        self.pending_attack = true;
    }

    /// Взводит латч dodge (идемпотентно в пределах тика)
    #[inline]
    pub fn request_dodge(&mut self) {
        self.pending_dodge = true;
    }

    /// Сбрасывает все one-shot латчи
    ///
    /// Вызывается tick-driver'ом ровно один раз за presentation-тик,
    /// строго после всех потребителей. Сигнал, не прочитанный до этого
    /// момента, потерян — латчи не переживают тик.
    #[inline]
    pub fn consume_latches(&mut self) {
        self.pending_attack = false;
        self.pending_dodge = false;
        self.block_held = false;
    }

    /// Переводит root-motion смещение evaluator'а в физическую скорость
    ///
    /// Контракт: `elapsed == 0` (платформа может отрепортить нулевой тик)
    /// даёт скорость (0, 0) — NaN/Inf в физику не пропускаем.
    #[inline]
    pub fn apply_animation_delta(delta: Vec2, elapsed: f32) -> Vec2 {
        if elapsed == 0.0 {
            Vec2::ZERO
        } else {
            delta / elapsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_delta_to_velocity() {
        let velocity = MotionSync::apply_animation_delta(Vec2::new(0.1, -0.05), 0.02);
        assert_eq!(velocity, Vec2::new(5.0, -2.5));
    }

    #[test]
    fn test_zero_elapsed_gives_zero_velocity() {
        // Нулевой тик платформы не должен породить NaN/Inf
        let velocity = MotionSync::apply_animation_delta(Vec2::new(1.0, 1.0), 0.0);
        assert_eq!(velocity, Vec2::ZERO);
        assert!(velocity.x.is_finite() && velocity.y.is_finite());
    }

    #[test]
    fn test_request_idempotent_within_tick() {
        let mut motion = MotionSync::default();
        motion.request_attack();
        motion.request_attack();
        assert!(motion.pending_attack);

        motion.request_dodge();
        assert!(motion.pending_dodge);
    }

    #[test]
    fn test_consume_resets_all_latches() {
        let mut motion = MotionSync::default();
        motion.request_attack();
        motion.request_dodge();
        motion.block_held = true;

        motion.consume_latches();

        assert!(!motion.pending_attack);
        assert!(!motion.pending_dodge);
        assert!(!motion.block_held);
    }
}
