use macroquad::prelude::*;

use crate::application::{GridRenderer, SimulationStatus};
use crate::domain::{Grid, MARGIN, ScaleConfig};

/// Draws generations into the macroquad window
pub struct MacroquadRenderer {
    alive_color: Color,
}

impl MacroquadRenderer {
    pub fn new() -> Self {
        Self {
            alive_color: Color::from_rgba(0, 255, 150, 255),
        }
    }
}

impl Default for MacroquadRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a step delay as a human-readable period
fn format_delay(step_delay: i64) -> String {
    if step_delay >= 1_000_000 {
        format!("{:.0}ms", step_delay as f64 / 1_000_000.0)
    } else {
        format!("{:.0}us", step_delay as f64 / 1_000.0)
    }
}

const STATUS_FONT_SIZE: f32 = 12.0;

/// Baseline of the status line: in the strip under the last grid row,
/// pinned to the window's bottom edge when the strip is too thin
fn status_baseline(scale: &ScaleConfig, screen_height: f32) -> f32 {
    let (_, grid_bottom) = scale.grid_to_screen(0, scale.height);
    (grid_bottom + STATUS_FONT_SIZE).min(screen_height)
}

fn status_line(status: &SimulationStatus) -> String {
    format!(
        "{} | gen {} | pop {} | {} | {}",
        status.rule_name,
        status.generation,
        status.population,
        format_delay(status.step_delay),
        if status.paused { "PAUSED" } else { "running" },
    )
}

impl GridRenderer for MacroquadRenderer {
    /// One sprite per live cell at `(x * scale*30 + 10, y * scale*24 + 10)`
    fn draw(&mut self, grid: &Grid, scale: &ScaleConfig, status: &SimulationStatus) {
        clear_background(BLACK);

        // Drawn first; cells cover it where the bottom strip is too thin
        draw_text(
            &status_line(status),
            MARGIN,
            status_baseline(scale, screen_height()),
            STATUS_FONT_SIZE,
            GRAY,
        );

        let inset = scale.render_scale;
        let (w, h) = (scale.cell_width() - 2.0 * inset, scale.cell_height() - 2.0 * inset);
        for (x, y) in grid.iter_alive() {
            let (sx, sy) = scale.grid_to_screen(x, y);
            draw_rectangle(sx + inset, sy + inset, w, h, self.alive_color);
        }
    }
}
