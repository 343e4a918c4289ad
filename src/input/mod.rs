use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Cell;
use crate::rendering::CELL_SIZE;

/// Handle mouse painting on the grid. Painting is only allowed while
/// paused; left button paints the current brush, right button erases.
pub fn handle_mouse_paint(state: &mut GameState, mouse_pos: (f32, f32)) {
    if state.is_running {
        return;
    }

    let grid_x = (mouse_pos.0 / CELL_SIZE) as i32;
    let grid_y = (mouse_pos.1 / CELL_SIZE) as i32;

    if is_mouse_button_down(MouseButton::Left) {
        state.paint(grid_x, grid_y, Cell::new(state.brush));
    } else if is_mouse_button_down(MouseButton::Right) {
        state.paint(grid_x, grid_y, Cell::EMPTY);
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::S, GameState::step_once),
        (KeyCode::Tab, GameState::cycle_brush),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
