pub mod config;
pub mod types;

pub use config::{Config, SocialConfig, UserConfig, DEFAULT_POSTS_PER_PAGE};
pub use types::{Notice, PageId, Post, Route, ThemeMode};
