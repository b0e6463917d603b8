use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use crate::error::{FolioError, Result};
use crate::models::ThemeMode;

/// 主题偏好的持久化存储
pub trait ThemeStore: Send {
    /// 读取偏好；缺失或无法识别时为浅色
    fn load(&self) -> ThemeMode;

    fn save(&mut self, mode: ThemeMode) -> Result<()>;
}

/// 偏好文件内容，只有一个键
#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    theme: String,
}

/// 基于 JSON 文件的存储
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> ThemeMode {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => {
                debug!("No theme preference at {}", self.path.display());
                return ThemeMode::default();
            }
        };
        match serde_json::from_str::<StoredPreference>(&content) {
            Ok(stored) => ThemeMode::parse(&stored.theme),
            Err(e) => {
                warn!("Ignoring unreadable theme preference {}: {}", self.path.display(), e);
                ThemeMode::default()
            }
        }
    }

    fn save(&mut self, mode: ThemeMode) -> Result<()> {
        let stored = StoredPreference {
            theme: mode.as_str().to_string(),
        };
        let json = serde_json::to_string(&stored)?;
        fs::write(&self.path, json)
            .map_err(|e| FolioError::storage(format!("{}: {}", self.path.display(), e)))
    }
}

/// 内存存储；克隆体共享同一个值，用来模拟页面刷新
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Arc<Mutex<Option<String>>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(value.to_string()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.value.lock().ok().and_then(|v| v.clone())
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> ThemeMode {
        self.raw()
            .map(|v| ThemeMode::parse(&v))
            .unwrap_or_default()
    }

    fn save(&mut self, mode: ThemeMode) -> Result<()> {
        let mut slot = self
            .value
            .lock()
            .map_err(|_| FolioError::storage("theme store lock poisoned"))?;
        *slot = Some(mode.as_str().to_string());
        Ok(())
    }
}
