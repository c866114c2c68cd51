//! UI layer for the menu board: app shell and theme.

pub mod app;
pub mod theme;

pub use app::{MenuBoardApp, PersistedBoardSettings, SETTINGS_STORAGE_KEY};
