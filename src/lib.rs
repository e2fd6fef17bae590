//! Driver for the Amazons engine: settings, players and a game controller.

pub mod config;
pub mod error;
pub mod player;
pub mod session;

pub use config::{PlayerKind, Settings};
pub use error::{AppError, AppResult};
pub use session::{GameReport, Session};
