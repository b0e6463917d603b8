use thiserror::Error;

/// 文章加载错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    #[error("网络请求失败: {0}")]
    Network(String),

    #[error("文章数据解析失败: {0}")]
    Decode(String),
}

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("配置错误: {message}")]
    Config {
        message: String,
    },

    #[error("偏好存储失败: {message}")]
    Storage {
        message: String,
    },

    #[error("模板渲染失败: {0}")]
    Template(#[from] tera::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML 解析失败: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Load(#[from] LoadError),
}

impl FolioError {
    pub fn config(message: impl Into<String>) -> Self {
        FolioError::Config { message: message.into() }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        FolioError::Storage { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
