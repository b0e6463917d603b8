use crate::models::Post;

/// 联系表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// 对应输入框的元素 id
    pub fn element_id(&self) -> &'static str {
        match self {
            ContactField::Name => "contact-name",
            ContactField::Email => "contact-email",
            ContactField::Message => "contact-message",
        }
    }
}

/// 引擎可以处理的消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 路由片段变化
    Navigate(String),
    /// 启动时的文章加载成功
    PostsLoaded(Vec<Post>),
    /// 启动时的文章加载失败
    PostsFailed(String),
    /// 搜索框输入
    SearchChanged(String),
    /// 分类下拉框变化（值为小写分类名或 "all categories"）
    CategoryChanged(String),
    /// 点击分页按钮
    PageSelected(usize),
    ContactFieldChanged { field: ContactField, value: String },
    ContactSubmitted,
    NewsletterEmailChanged(String),
    NewsletterSubmitted,
    ThemeToggled,
    /// 移动端导航开关
    MenuToggled,
}
