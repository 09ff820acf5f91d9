//! Параметры аниматора: фиксированный набор ключей + slab-хранилище

use bevy::prelude::*;

/// Ключи параметров аниматора
///
/// Резолвятся в contiguous index один раз при компиляции — никаких
/// string-hash lookup'ов на каждый тик.
///
/// Семантика:
/// - `MovX`/`MovY` — сырой intent (continuous)
/// - `NormalX`/`NormalY` — unit heading; обновляется только при |intent| ≥ порога,
///   иначе держит последнее значение (инвариант: NormalX² + NormalY² ≈ 1)
/// - `HasTarget` — boolean, ставится один раз при захвате lock-on цели,
///   этим слоем никогда не сбрасывается
/// - `Attack`/`Block` — trigger pulses, потребляются evaluator'ом ровно один раз
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Param {
    MovX,
    MovY,
    NormalX,
    NormalY,
    HasTarget,
    Attack,
    Block,
}

impl Param {
    pub const COUNT: usize = 7;

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Slab параметров аниматора (один на актора)
///
/// Float'ы и boolean'ы живут в одном массиве `[f32; COUNT]` — boolean'ы
/// кодируются как 0.0/1.0, как в движковых параметр-таблицах.
/// Перезаписывается каждый presentation-тик, читается только evaluator'ом.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AnimatorParams {
    values: [f32; Param::COUNT],
}

impl AnimatorParams {
    #[inline]
    pub fn float(&self, param: Param) -> f32 {
        self.values[param.index()]
    }

    #[inline]
    pub fn set_float(&mut self, param: Param, value: f32) {
        self.values[param.index()] = value;
    }

    #[inline]
    pub fn flag(&self, param: Param) -> bool {
        self.values[param.index()] != 0.0
    }

    #[inline]
    pub fn set_flag(&mut self, param: Param, value: bool) {
        self.values[param.index()] = if value { 1.0 } else { 0.0 };
    }

    /// Взводит trigger pulse (идемпотентно в пределах тика)
    #[inline]
    pub fn set_trigger(&mut self, param: Param) {
        self.values[param.index()] = 1.0;
    }

    /// Снимает trigger pulse — контракт evaluator'а: прочитал ровно один раз
    ///
    /// Возвращает был ли триггер взведён.
    #[inline]
    pub fn consume_trigger(&mut self, param: Param) -> bool {
        let was_set = self.values[param.index()] != 0.0;
        self.values[param.index()] = 0.0;
        was_set
    }

    /// Сырой intent, как его последним записал locomotion-тик
    #[inline]
    pub fn movement(&self) -> Vec2 {
        Vec2::new(self.float(Param::MovX), self.float(Param::MovY))
    }

    /// Unit heading (последний записанный normal)
    #[inline]
    pub fn heading(&self) -> Vec2 {
        Vec2::new(self.float(Param::NormalX), self.float(Param::NormalY))
    }
}
