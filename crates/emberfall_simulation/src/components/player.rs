//! Player control marker component

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// Акторы С этим компонентом получают intent из InputAxes
/// (player_intent system). Акторы БЕЗ него водятся behavior-слоем/AI.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
