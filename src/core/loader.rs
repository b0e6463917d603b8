use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use crate::error::{FolioError, LoadError};
use crate::models::Post;

/// 文章数据源
#[async_trait]
pub trait PostSource: Send + Sync {
    /// 一次性拉取全部文章
    async fn fetch_posts(&self) -> Result<Vec<Post>, LoadError>;
}

/// 通过 HTTP GET 拉取文章
///
/// 不设超时、不重试，任何非 2xx 状态都视为失败。
#[derive(Debug, Clone)]
pub struct HttpPostSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpPostSource {
    pub fn new(endpoint: &str) -> Result<Self, FolioError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| FolioError::config(format!("api_url 无效: {} ({})", endpoint, e)))?;
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, LoadError> {
        debug!("GET {}", self.endpoint);
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        let posts: Vec<Post> =
            serde_json::from_str(&body).map_err(|e| LoadError::Decode(e.to_string()))?;

        info!("Fetched {} posts from {}", posts.len(), self.endpoint);
        Ok(posts)
    }
}

/// 固定数据源
#[derive(Debug, Clone)]
pub enum StaticPostSource {
    Posts(Vec<Post>),
    Fail(LoadError),
}

#[async_trait]
impl PostSource for StaticPostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, LoadError> {
        match self {
            StaticPostSource::Posts(posts) => Ok(posts.clone()),
            StaticPostSource::Fail(err) => Err(err.clone()),
        }
    }
}
