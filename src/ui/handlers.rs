use crate::core::msg::{ContactField, Msg};

/// 可绑定的 UI 事件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Input,
    Change,
    Submit,
}

/// 渲染表面派发给引擎的原始事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    /// 目标元素 id
    pub target: String,
    pub kind: EventKind,
    /// 输入框或下拉框的当前值
    pub value: Option<String>,
}

impl UiEvent {
    pub fn click(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            kind: EventKind::Click,
            value: None,
        }
    }

    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            kind: EventKind::Input,
            value: Some(value.into()),
        }
    }

    pub fn change(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            kind: EventKind::Change,
            value: Some(value.into()),
        }
    }

    pub fn submit(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            kind: EventKind::Submit,
            value: None,
        }
    }
}

/// 事件触发后执行的动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(String),
    Search,
    SelectCategory,
    GoToPage(usize),
    EditContact(ContactField),
    SubmitContact,
    EditNewsletter,
    SubmitNewsletter,
    ToggleTheme,
    ToggleMenu,
}

impl Action {
    fn into_msg(self, value: Option<String>) -> Msg {
        let value = value.unwrap_or_default();
        match self {
            Action::Navigate(fragment) => Msg::Navigate(fragment),
            Action::Search => Msg::SearchChanged(value),
            Action::SelectCategory => Msg::CategoryChanged(value),
            Action::GoToPage(page) => Msg::PageSelected(page),
            Action::EditContact(field) => Msg::ContactFieldChanged { field, value },
            Action::SubmitContact => Msg::ContactSubmitted,
            Action::EditNewsletter => Msg::NewsletterEmailChanged(value),
            Action::SubmitNewsletter => Msg::NewsletterSubmitted,
            Action::ToggleTheme => Msg::ThemeToggled,
            Action::ToggleMenu => Msg::MenuToggled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub target: String,
    pub kind: EventKind,
    pub action: Action,
}

/// 每个页面的事件处理注册表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerTable {
    bindings: Vec<Binding>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&mut self, target: impl Into<String>, kind: EventKind, action: Action) -> &mut Self {
        self.bindings.push(Binding {
            target: target.into(),
            kind,
            action,
        });
        self
    }

    pub fn lookup(&self, target: &str, kind: EventKind) -> Option<&Action> {
        self.bindings
            .iter()
            .find(|b| b.target == target && b.kind == kind)
            .map(|b| &b.action)
    }

    /// 把事件解析为消息；未注册的事件返回 `None`
    pub fn resolve(&self, event: &UiEvent) -> Option<Msg> {
        self.lookup(&event.target, event.kind)
            .cloned()
            .map(|action| action.into_msg(event.value.clone()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
