//! Wayfarer - Terminal Idle RPG Library
//!
//! Exposes the simulation core (catalog, character, combat, adventure
//! session, persistence) for the binary and the integration tests.

pub mod catalog;
pub mod character;
pub mod combat;
pub mod core;
pub mod save;
pub mod ui;

pub use crate::core::constants::TICK_INTERVAL_MS;
pub use crate::core::session::{GameSession, TickResult};
