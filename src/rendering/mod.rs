use macroquad::prelude::*;
use crate::application::{Controller, Mode};

const CURSOR_THICKNESS: f32 = 5.0;
const LABEL_SIZE: f32 = 25.0;

/// Side length of one cell so the whole board fits the window
pub fn cell_size(rows: usize, columns: usize) -> f32 {
    let by_width = screen_width() / columns.max(1) as f32;
    let by_height = screen_height() / rows.max(1) as f32;
    by_width.min(by_height)
}

/// Draw live cells as filled squares
fn draw_cells(controller: &Controller, size: f32) {
    controller
        .grid()
        .iter_cells()
        .filter(|&(_, _, alive)| alive)
        .for_each(|(row, col, _)| {
            draw_rectangle(col as f32 * size, row as f32 * size, size, size, BLACK);
        });
}

/// Outline the cell under the editing cursor
fn draw_cursor(controller: &Controller, size: f32) {
    let cursor = controller.cursor();
    draw_rectangle_lines(
        cursor.col as f32 * size,
        cursor.row as f32 * size,
        size,
        size,
        CURSOR_THICKNESS,
        BLUE,
    );
}

/// Mode name and generation count in the top-left corner
fn draw_status(controller: &Controller) {
    let label = format!("{}  gen {}", controller.mode(), controller.generation());
    draw_text(&label, 10.0, 10.0 + LABEL_SIZE, LABEL_SIZE, LIGHTGRAY);
}

/// Draw one frame. Reads the controller only.
pub fn draw_frame(controller: &Controller) {
    clear_background(WHITE);

    let (rows, columns) = controller.grid().dimensions();
    let size = cell_size(rows, columns);

    draw_cells(controller, size);
    if controller.mode() == Mode::Editing {
        draw_cursor(controller, size);
    }
    draw_status(controller);
}
