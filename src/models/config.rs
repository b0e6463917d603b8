use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::{FolioError, Result};

/// 博客列表每页文章数
pub const DEFAULT_POSTS_PER_PAGE: usize = 6;

/// 站点配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 文章接口地址
    pub api_url: String,
    /// 站点地址，用于生成分享链接
    pub site_url: String,
    /// 每页文章数
    pub posts_per_page: usize,
    /// 主题偏好文件
    pub theme_file: PathBuf,
    /// 默认输出文件
    pub output: Option<PathBuf>,
    /// 个人信息
    pub user: UserConfig,
    /// 社交链接
    pub social: SocialConfig,
}

/// 个人信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub name: String,
    pub tagline: String,
    pub photo: Option<String>,
    /// 首页简介
    pub short_bio: String,
    /// 关于页完整介绍（Markdown）
    pub long_bio: String,
    pub skills: Vec<String>,
    pub resume_url: Option<String>,
}

/// 社交链接，留空则不显示对应图标
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
}

impl SocialConfig {
    /// 按固定顺序返回非空链接
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("linkedin", &self.linkedin),
            ("github", &self.github),
            ("twitter", &self.twitter),
            ("instagram", &self.instagram),
        ]
        .into_iter()
        .filter_map(|(key, url)| {
            url.as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(|u| (key, u))
        })
        .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://blog-backend-1-r9bw.onrender.com/api/posts".to_string(),
            site_url: "http://localhost:8080/".to_string(),
            posts_per_page: DEFAULT_POSTS_PER_PAGE,
            theme_file: PathBuf::from(".folio-theme.json"),
            output: None,
            user: UserConfig::default(),
            social: SocialConfig::default(),
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            tagline: "Developer".to_string(),
            photo: None,
            short_bio: "Welcome to my personal blog.".to_string(),
            long_bio: String::new(),
            skills: Vec::new(),
            resume_url: None,
        }
    }
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// 加载站点目录下的 `_config.yml`，不存在时使用默认配置
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join("_config.yml");
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// 保存配置到文件
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.posts_per_page == 0 {
            return Err(FolioError::config("posts_per_page 必须大于 0"));
        }
        Url::parse(&self.api_url)
            .map_err(|e| FolioError::config(format!("api_url 无效: {} ({})", self.api_url, e)))?;
        Ok(())
    }

    /// 相对路径以站点目录为基准
    pub fn theme_path(&self, base_dir: &Path) -> PathBuf {
        if self.theme_file.is_absolute() {
            self.theme_file.clone()
        } else {
            base_dir.join(&self.theme_file)
        }
    }
}
