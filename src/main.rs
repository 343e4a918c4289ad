use std::time::{Duration, Instant};

use macroquad::prelude::*;
use ::rand::{Rng as _, SeedableRng, rngs::StdRng};

use arrow_grid::{GameState, input, rendering};
use arrow_grid::rendering::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};

/// Floor on frame duration, so the simulation pace is bounded on fast
/// machines.
const MIN_FRAME_TIME: Duration = Duration::from_millis(50);

fn window_conf() -> Conf {
    Conf {
        window_title: "Arrow Grid".to_owned(),
        window_width: (GRID_WIDTH as f32 * CELL_SIZE) as i32,
        window_height: (GRID_HEIGHT as f32 * CELL_SIZE) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let seed: u64 = StdRng::from_os_rng().random();
    info!("starting {}x{} grid, seed {}", GRID_WIDTH, GRID_HEIGHT, seed);

    let mut state = match GameState::new(GRID_WIDTH, GRID_HEIGHT, StdRng::seed_from_u64(seed)) {
        Ok(state) => state,
        Err(err) => {
            error!("grid setup failed: {}", err);
            return;
        }
    };
    let sprites = rendering::build_sprites();

    loop {
        let frame_start = Instant::now();

        state = input::process_keyboard_input(state);
        input::handle_mouse_paint(&mut state, mouse_position());

        state = state.tick();

        clear_background(BLACK);
        rendering::draw_grid(&state.grid, &sprites);
        rendering::draw_hud(&state);

        let frame_time = frame_start.elapsed();
        if frame_time < MIN_FRAME_TIME {
            std::thread::sleep(MIN_FRAME_TIME - frame_time);
        }

        next_frame().await;
    }
}
