mod button;
mod menu;

pub use button::Button;
pub use menu::{Menu, MenuAction, MENU_HEIGHT, MENU_WIDTH, RULES_TEXT};
