use std::collections::HashSet;
use std::ops::Range;

use crate::models::Post;

/// 分类下拉框中代表“全部”的选项
pub const ALL_CATEGORIES: &str = "All Categories";

/// 分类选择
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelector {
    #[default]
    All,
    /// 小写的分类名
    Only(String),
}

impl CategorySelector {
    /// 从下拉框的值构造，值与 [`option_value`] 一致
    pub fn from_value(value: &str) -> Self {
        let value = value.to_lowercase();
        if value == option_value(ALL_CATEGORIES) {
            CategorySelector::All
        } else {
            CategorySelector::Only(value)
        }
    }

    pub fn value(&self) -> String {
        match self {
            CategorySelector::All => option_value(ALL_CATEGORIES),
            CategorySelector::Only(category) => category.clone(),
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Only(selected) => category.to_lowercase() == *selected,
        }
    }
}

/// 下拉框选项的值
pub fn option_value(label: &str) -> String {
    label.to_lowercase()
}

/// 搜索词加分类的过滤条件
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostFilter {
    pub search: String,
    pub category: CategorySelector,
}

impl PostFilter {
    pub fn new(search: impl Into<String>, category: CategorySelector) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// 标题或正文包含搜索词（不区分大小写），且分类匹配
    pub fn matches(&self, post: &Post) -> bool {
        let term = self.search.to_lowercase();
        let text_hit = post.title.to_lowercase().contains(&term)
            || post.content.to_lowercase().contains(&term);
        text_hit && self.category.matches(&post.category)
    }

    /// 返回命中文章在原集合中的下标，保持原有顺序
    pub fn apply(&self, posts: &[Post]) -> Vec<usize> {
        posts
            .iter()
            .enumerate()
            .filter(|(_, post)| self.matches(post))
            .map(|(i, _)| i)
            .collect()
    }
}

/// 按首次出现顺序列出不重复的分类
pub fn distinct_categories(posts: &[Post]) -> Vec<&str> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .map(|p| p.category.as_str())
        .filter(|c| seen.insert(*c))
        .collect()
}

/// 总页数：ceil(total / page_size)
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    (total + page_size - 1) / page_size
}

/// 第 `page` 页（从 1 开始）在过滤结果中的切片范围
pub fn page_range(page: usize, page_size: usize, total: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

/// 只有多于一页时才显示分页控件
pub fn shows_pagination(total: usize, page_size: usize) -> bool {
    page_count(total, page_size) > 1
}
