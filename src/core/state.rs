use crate::core::msg::ContactField;
use crate::core::search::{self, CategorySelector, PostFilter};
use crate::models::{PageId, Post, Route, ThemeMode};

/// 首页最多展示的推荐文章数
pub const FEATURED_LIMIT: usize = 3;

pub const CONTACT_SUCCESS: &str = "Thank you for your message! I'll get back to you soon.";
pub const NEWSLETTER_SUCCESS: &str = "Thanks for subscribing!";

/// 文章加载状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// 请求尚未返回，内容区域保持空白
    Pending,
    Ready,
    /// 本次页面加载内不可恢复
    Failed,
}

/// 应用状态
///
/// 只由路由和过滤/分页操作修改。`filtered` 保存命中文章在 `posts` 中的下标，
/// 因此始终是 `posts` 的子集。
#[derive(Debug, Clone)]
pub struct AppState {
    route: Route,
    /// 导航栏高亮的页面；片段无法识别时为空
    active_nav: Option<PageId>,
    posts: Vec<Post>,
    status: LoadStatus,
    filter: PostFilter,
    filtered: Vec<usize>,
    current_page: usize,
    page_size: usize,
}

impl AppState {
    pub fn new(page_size: usize) -> Self {
        Self {
            route: Route::home(),
            active_nav: Some(PageId::Home),
            posts: Vec::new(),
            status: LoadStatus::Pending,
            filter: PostFilter::default(),
            filtered: Vec::new(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn set_route(&mut self, route: Route) {
        self.active_nav = Some(route.page);
        self.route = route;
    }

    pub fn active_nav(&self) -> Option<PageId> {
        self.active_nav
    }

    pub fn set_active_nav(&mut self, page: Option<PageId>) {
        self.active_nav = page;
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// 写入加载好的文章；只接受第一次结果
    pub fn load_posts(&mut self, posts: Vec<Post>) -> bool {
        if self.status != LoadStatus::Pending {
            return false;
        }
        self.posts = posts;
        self.status = LoadStatus::Ready;
        self.refilter();
        true
    }

    pub fn fail_load(&mut self) -> bool {
        if self.status != LoadStatus::Pending {
            return false;
        }
        self.status = LoadStatus::Failed;
        true
    }

    pub fn find_post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn featured_posts(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().filter(|p| p.featured).take(FEATURED_LIMIT)
    }

    pub fn filter(&self) -> &PostFilter {
        &self.filter
    }

    /// 应用新的过滤条件，页码回到 1
    pub fn apply_filter(&mut self, filter: PostFilter) {
        self.filter = filter;
        self.refilter();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let filter = PostFilter::new(search, self.filter.category.clone());
        self.apply_filter(filter);
    }

    pub fn set_category(&mut self, value: &str) {
        let filter = PostFilter::new(self.filter.search.clone(), CategorySelector::from_value(value));
        self.apply_filter(filter);
    }

    pub fn reset_filter(&mut self) {
        self.apply_filter(PostFilter::default());
    }

    fn refilter(&mut self) {
        self.filtered = self.filter.apply(&self.posts);
        self.current_page = 1;
    }

    pub fn filtered_posts(&self) -> Vec<&Post> {
        self.filtered.iter().map(|&i| &self.posts[i]).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        search::page_count(self.filtered.len(), self.page_size)
    }

    /// 跳到指定页；超出 [1, page_count] 的请求被忽略
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.page_count() {
            return false;
        }
        self.current_page = page;
        true
    }

    /// 当前页的文章
    pub fn page_posts(&self) -> Vec<&Post> {
        let range = search::page_range(self.current_page, self.page_size, self.filtered.len());
        self.filtered[range].iter().map(|&i| &self.posts[i]).collect()
    }
}

/// 表单草稿
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }
}

/// 页面外壳（导航、页脚、表单反馈）的状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChromeState {
    pub theme: ThemeMode,
    /// 移动端导航是否展开
    pub nav_open: bool,
    pub contact: ContactForm,
    pub contact_feedback: Option<&'static str>,
    pub newsletter_email: String,
    pub newsletter_feedback: Option<&'static str>,
}

impl ChromeState {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// 联系表单随页面模板重建，离开页面时清空
    pub fn reset_page_forms(&mut self) {
        self.contact = ContactForm::default();
        self.contact_feedback = None;
    }

    /// 提交不发送任何数据，总是显示成功
    pub fn submit_contact(&mut self) {
        self.contact = ContactForm::default();
        self.contact_feedback = Some(CONTACT_SUCCESS);
    }

    pub fn submit_newsletter(&mut self) {
        self.newsletter_email.clear();
        self.newsletter_feedback = Some(NEWSLETTER_SUCCESS);
    }
}
