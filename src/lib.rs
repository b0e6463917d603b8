pub mod core;
pub mod error;
pub mod models;
pub mod theme;
pub mod ui;
pub mod utils;

// Re-export commonly used types and traits
pub use crate::core::{Engine, Msg, PostSource};
pub use crate::error::{FolioError, LoadError};
pub use crate::models::{Config, Notice, PageId, Post, Route, ThemeMode};
pub use crate::ui::UiEvent;
