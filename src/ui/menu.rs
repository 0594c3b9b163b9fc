//! Configuration menu shown before each session.
//!
//! Three button groups pick window width, window height and cell tier;
//! the two start buttons hand the finished `SessionConfig` back to the caller.

use macroquad::prelude::*;

use super::Button;
use crate::config::{HEIGHT_PRESETS, SeedMode, SessionConfig, WIDTH_PRESETS, WindowSize};
use crate::domain::CellTier;

pub const MENU_WIDTH: u32 = 550;
pub const MENU_HEIGHT: u32 = 400;

const SMALL_WIDTH: f32 = 80.0;
const SMALL_HEIGHT: f32 = 25.0;
const ROW_SPACING: f32 = 30.0;
const LEFT_COLUMN: f32 = 35.0;
const RIGHT_COLUMN: f32 = 140.0;

/// Menu text: rules, instructions and controls
pub const RULES_TEXT: &[&str] = &[
    "           <GAME OF LIFE RULES>",
    "1- A cell with fewer than two live",
    "   neighbors dies (underpopulation).",
    "2- A cell with two or three neighbors lives.",
    "3- A cell with more than three neighbors",
    "   dies (overcrowding).",
    "4- A dead cell with three or six",
    "   neighbors comes alive (reproduction).",
    "",
    "             <INSTRUCTIONS>",
    "1- Pick a width and height for the window",
    "2- Choose a cell size",
    "3- Start blank or randomly filled",
    "",
    "               <CONTROLS>",
    "PAUSE   = Right click / Space",
    "BLOB    = Left click",
    "DELETE  = Middle click on one cell",
    "SPEED   = Mouse wheel",
    "RANDOM  = R     CLEAR = C",
    "MENU    = Escape",
];

/// What the menu wants after a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Start(SessionConfig),
}

pub struct Menu {
    config: SessionConfig,
    width_buttons: Vec<(u32, Button)>,
    height_buttons: Vec<(u32, Button)>,
    tier_buttons: Vec<(CellTier, Button)>,
    start_blank: Button,
    start_random: Button,
}

impl Menu {
    /// Build the menu with `config` preselected
    pub fn new(config: SessionConfig) -> Self {
        let small = |x: f32, row: usize, text: String| {
            Button::new(x, 60.0 + row as f32 * ROW_SPACING, SMALL_WIDTH, SMALL_HEIGHT, text)
        };

        let width_buttons = WIDTH_PRESETS
            .iter()
            .enumerate()
            .map(|(row, &w)| (w, small(LEFT_COLUMN, row, w.to_string())))
            .collect();
        let height_buttons = HEIGHT_PRESETS
            .iter()
            .enumerate()
            .map(|(row, &h)| (h, small(RIGHT_COLUMN, row, h.to_string())))
            .collect();

        // Tiers 10..6 on the left, 5..1 on the right
        let tier_buttons = CellTier::all()
            .enumerate()
            .map(|(i, tier)| {
                let x = if i < 5 { LEFT_COLUMN } else { RIGHT_COLUMN };
                let y = 200.0 + (i % 5) as f32 * ROW_SPACING;
                (tier, Button::new(x, y, SMALL_WIDTH, SMALL_HEIGHT, tier.get().to_string()))
            })
            .collect();

        let start_color = Color::from_rgba(120, 200, 110, 255);
        let start_hover = Color::from_rgba(150, 230, 140, 255);
        let start_blank = Button::new(25.0, 355.0, 95.0, 35.0, "START BLANK")
            .with_color(start_color, start_hover);
        let start_random = Button::new(130.0, 355.0, 105.0, 35.0, "START RANDOM")
            .with_color(start_color, start_hover);

        let mut menu = Self {
            config,
            width_buttons,
            height_buttons,
            tier_buttons,
            start_blank,
            start_random,
        };
        menu.refresh_selection();
        menu
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn select_window(&mut self, window: WindowSize) {
        self.config.window = window;
        self.refresh_selection();
    }

    pub fn select_tier(&mut self, tier: CellTier) {
        self.config.tier = tier;
        self.refresh_selection();
    }

    fn refresh_selection(&mut self) {
        let window = self.config.window;
        for (w, button) in &mut self.width_buttons {
            button.set_selected(*w == window.width);
        }
        for (h, button) in &mut self.height_buttons {
            button.set_selected(*h == window.height);
        }
        for (tier, button) in &mut self.tier_buttons {
            button.set_selected(*tier == self.config.tier);
        }
    }

    /// Apply a left click at `pos`
    pub fn click(&mut self, pos: (f32, f32)) -> MenuAction {
        let window = self.config.window;
        if let Some(&(width, _)) = self.width_buttons.iter().find(|(_, b)| b.contains(pos)) {
            self.select_window(WindowSize { width, ..window });
        } else if let Some(&(height, _)) = self.height_buttons.iter().find(|(_, b)| b.contains(pos)) {
            self.select_window(WindowSize { height, ..window });
        } else if let Some(&(tier, _)) = self.tier_buttons.iter().find(|(_, b)| b.contains(pos)) {
            self.select_tier(tier);
        } else if self.start_blank.contains(pos) {
            return MenuAction::Start(self.config.with_seed_mode(SeedMode::Blank));
        } else if self.start_random.contains(pos) {
            return MenuAction::Start(self.config.with_seed_mode(SeedMode::Random));
        }
        MenuAction::None
    }

    /// Poll the mouse for this frame
    pub fn update(&mut self) -> MenuAction {
        if is_mouse_button_pressed(MouseButton::Left) {
            self.click(mouse_position())
        } else {
            MenuAction::None
        }
    }

    pub fn draw(&self) {
        let mouse_pos = mouse_position();
        clear_background(Color::from_rgba(60, 60, 60, 255));

        draw_rectangle(10.0, 10.0, 225.0, 135.0, LIGHTGRAY);
        draw_rectangle(10.0, 150.0, 225.0, 200.0, LIGHTGRAY);
        draw_text("-WINDOW-", 80.0, 28.0, 18.0, BLACK);
        draw_text("WIDE      |      TALL", 40.0, 50.0, 18.0, BLACK);
        draw_text("CELLULAR SCALE", 36.0, 185.0, 22.0, BLACK);

        self.width_buttons
            .iter()
            .chain(&self.height_buttons)
            .map(|(_, b)| b)
            .chain(self.tier_buttons.iter().map(|(_, b)| b))
            .chain([&self.start_blank, &self.start_random])
            .for_each(|b| b.draw(mouse_pos));

        for (i, line) in RULES_TEXT.iter().enumerate() {
            draw_text(line, 245.0, 22.0 + i as f32 * 17.0, 15.0, GREEN);
        }
    }
}
