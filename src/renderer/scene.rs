//! Frame composition: turns game state into draw calls

use super::surface::{RenderSurface, colors};
use crate::consts::PETAL_RADIUS;
use crate::sim::GameState;

/// Draw one frame: clear, flower center, petals, then monsters
pub fn draw_frame(state: &GameState, surface: &mut impl RenderSurface) {
    surface.clear();

    surface.draw_circle(
        state.player.pos,
        state.player.radius,
        colors::FLOWER,
        None,
    );

    for petal in state.petal_positions() {
        surface.draw_circle(petal, PETAL_RADIUS, colors::PETAL, Some(colors::FLOWER));
    }

    for monster in &state.monsters {
        surface.draw_circle(monster.pos, monster.radius, colors::MONSTER, None);
    }
}
