use serde::{Deserialize, Serialize};
use std::fmt;

/// 博客文章的基本结构
///
/// 加载后不可变；远端接口使用 `_id` 作为标识字段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawPost")]
pub struct Post {
    /// 文章标识
    #[serde(rename = "_id")]
    pub id: String,
    /// 文章标题
    pub title: String,
    /// 作者
    pub author: String,
    /// 发布日期（原始字符串）
    pub date: String,
    /// 分类
    pub category: String,
    /// 摘要
    pub excerpt: String,
    /// 正文（HTML 富文本）
    pub content: String,
    /// 封面图片
    pub image_url: Option<String>,
    /// 是否在首页推荐
    pub featured: bool,
}

/// 接口原始记录
///
/// `_id` 与 `id` 可以同时出现；任何字段缺失或为 null 都取默认值。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawPost {
    #[serde(rename = "_id")]
    underscore_id: Option<String>,
    id: Option<String>,
    title: Option<String>,
    author: Option<String>,
    date: Option<String>,
    category: Option<String>,
    excerpt: Option<String>,
    content: Option<String>,
    image_url: Option<String>,
    featured: Option<bool>,
}

impl From<RawPost> for Post {
    fn from(raw: RawPost) -> Self {
        Post {
            id: raw.underscore_id.or(raw.id).unwrap_or_default(),
            title: raw.title.unwrap_or_default(),
            author: raw.author.unwrap_or_default(),
            date: raw.date.unwrap_or_default(),
            category: raw.category.unwrap_or_default(),
            excerpt: raw.excerpt.unwrap_or_default(),
            content: raw.content.unwrap_or_default(),
            image_url: raw.image_url.filter(|u| !u.is_empty()),
            featured: raw.featured.unwrap_or(false),
        }
    }
}

impl Post {
    /// 文章详情页的路由片段
    pub fn fragment(&self) -> String {
        format!("#post/{}", self.id)
    }
}

/// 可识别的页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    About,
    Blog,
    Post,
    Contact,
}

impl PageId {
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::About,
        PageId::Blog,
        PageId::Post,
        PageId::Contact,
    ];

    pub fn parse(value: &str) -> Option<PageId> {
        PageId::ALL.into_iter().find(|page| page.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Blog => "blog",
            PageId::Post => "post",
            PageId::Contact => "contact",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 当前路由：页面标识加可选参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub page: PageId,
    pub param: Option<String>,
}

impl Route {
    pub fn new(page: PageId, param: Option<String>) -> Self {
        Self { page, param }
    }

    pub fn home() -> Self {
        Self::new(PageId::Home, None)
    }

    /// 解析 `#<pageId>` 或 `#<pageId>/<parameter>`
    ///
    /// 空片段和未知页面一律回落到首页。
    pub fn parse(fragment: &str) -> Self {
        let raw = fragment.strip_prefix('#').unwrap_or(fragment);
        let mut parts = raw.split('/');
        let page_id = parts.next().unwrap_or_default();
        let param = parts
            .next()
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        match PageId::parse(page_id) {
            Some(page) => Self::new(page, param),
            None => Self::home(),
        }
    }

    /// 片段中可识别的页面标识；空片段视为首页，未知标识为 `None`
    pub fn recognized_page(fragment: &str) -> Option<PageId> {
        let raw = fragment.strip_prefix('#').unwrap_or(fragment);
        match raw.split('/').next().unwrap_or_default() {
            "" => Some(PageId::Home),
            page_id => PageId::parse(page_id),
        }
    }

    pub fn to_fragment(&self) -> String {
        match &self.param {
            Some(param) => format!("#{}/{}", self.page, param),
            None => format!("#{}", self.page),
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::home()
    }
}

/// 显示主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// 未知值按浅色处理
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemeMode::Dark
    }

    /// 应用到 `<body>` 的 class
    pub fn body_class(&self) -> &'static str {
        match self {
            ThemeMode::Light => "",
            ThemeMode::Dark => "dark-mode",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 内容区域的两种终止显示状态
///
/// 两者都不是异常：渲染器用固定文案替换整个内容区域，不重试也不跳转。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    PostNotFound { id: String },
    LoadFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::PostNotFound { .. } => "Post not found.",
            Notice::LoadFailed => {
                "Error loading blog posts. Please ensure the backend server is running and refresh the page."
            }
        }
    }
}
