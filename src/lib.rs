//! Lamp board: a grid of toggleable lamps with linear undo history,
//! JSON import/export and PNG rendering.

pub mod board;
pub mod controller;
pub mod export;
pub mod history;
pub mod loader;
pub mod notify;
pub mod settings;
pub mod snapshot;
pub mod view;

pub use board::{Board, BoardError, Cell, parse_dimension};
pub use controller::LampBoard;
pub use history::UndoStack;
pub use settings::AppSettings;
pub use snapshot::Snapshot;
