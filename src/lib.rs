//! # ASCII Canvas
//!
//! Interactive text-mode drawing tool. Commands create a character grid,
//! draw horizontal/vertical lines and rectangles on it, bucket fill regions,
//! and the grid is rendered as bordered ASCII art after every command.
//!
//! ```text
//! enter command: C 20 4
//! enter command: L 1 2 6 2
//! ----------------------
//! |                    |
//! |xxxxxx              |
//! |                    |
//! |                    |
//! ----------------------
//! ```

pub mod canvas;
pub mod command;
pub mod config;
pub mod errors;
pub mod executor;
pub mod session;
pub mod writer;

pub use canvas::{Canvas, Grid, Point, Shape};
pub use command::{Command, Keyword};
pub use config::{load_config, Config};
pub use errors::{CanvasError, Result};
pub use executor::{CommandExecutor, SyncExecutor};
pub use session::{Flow, Session};
