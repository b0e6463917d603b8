pub mod engine;
pub mod loader;
pub mod msg;
pub mod preference;
pub mod router;
pub mod search;
pub mod state;

pub use engine::Engine;
pub use loader::{HttpPostSource, PostSource, StaticPostSource};
pub use msg::{ContactField, Msg};
pub use preference::{FileThemeStore, MemoryThemeStore, ThemeStore};
pub use search::{CategorySelector, PostFilter};
pub use state::{AppState, ChromeState, LoadStatus};
