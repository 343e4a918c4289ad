pub mod sprites;

pub use sprites::{SpriteSet, build_sprites};

use std::f32::consts::{FRAC_PI_2, PI};

use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::{Facing, Grid};

/// Cell edge length in pixels.
pub const CELL_SIZE: f32 = 10.0;

/// Fixed board dimensions, chosen so the grid fills the window exactly.
pub const GRID_WIDTH: usize = 80;
pub const GRID_HEIGHT: usize = 80;

/// Sprite rotation for a facing, clockwise from the up-pointing sprite.
fn facing_rotation(facing: Facing) -> f32 {
    match facing {
        Facing::Up => 0.0,
        Facing::Right => FRAC_PI_2,
        Facing::Down => PI,
        Facing::Left => PI + FRAC_PI_2,
    }
}

/// Draw the grid snapshot. Empty cells are skipped; occupied cells get their
/// kind's sprite rotated to match their facing. Read-only over the grid.
pub fn draw_grid(grid: &Grid, sprites: &SpriteSet) {
    for (x, y, cell) in grid.iter_cells() {
        let Some(texture) = sprites.for_kind(cell.kind) else {
            continue;
        };
        draw_texture_ex(
            texture,
            x as f32 * CELL_SIZE,
            y as f32 * CELL_SIZE,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(CELL_SIZE, CELL_SIZE)),
                rotation: facing_rotation(cell.facing),
                ..Default::default()
            },
        );
    }
}

/// Draw the status overlay in the top-left corner.
pub fn draw_hud(state: &GameState) {
    let status = if state.is_running { "Running" } else { "Paused" };
    let status_color = if state.is_running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };
    let brush = match state.brush {
        crate::domain::CellKind::Arrow => "Arrow",
        _ => "Filler",
    };

    let labels = [
        (format!("Gen: {}", state.generation), WHITE),
        (status.to_string(), status_color),
        (format!("Brush: {brush}"), GRAY),
        (format!("FPS: {}", get_fps()), GRAY),
    ];

    for (i, (text, color)) in labels.iter().enumerate() {
        draw_text(text, 6.0, 16.0 + i as f32 * 15.0, 14.0, *color);
    }

    // Every push is blocked once the board jams up; say so.
    if state.generation > 0 && !state.last_step_moved {
        draw_text("Settled", 6.0, 16.0 + labels.len() as f32 * 15.0, 14.0, GRAY);
    }
}
