//! Ratatui screens. Screens hold only view state (cursors, focus, tab);
//! all game state stays in [`crate::core::session::GameSession`].

pub mod character_creation;
pub mod game_screen;
pub mod main_menu;

pub use character_creation::{CharacterCreationScreen, CreationFocus};
pub use game_screen::{GameScreen, GameTab};
pub use main_menu::{MainMenuScreen, MenuAction};
