//! 页面渲染器
//!
//! 每个渲染器都是纯函数：读取 [`RenderContext`]，返回 [`PageView`]。

pub mod about;
pub mod blog;
pub mod chrome;
pub mod components;
pub mod contact;
pub mod home;
pub mod post;

use crate::core::state::{AppState, ChromeState};
use crate::models::{Config, Notice, Route};
use crate::ui::{Element, HandlerTable, Node};

/// 渲染所需的只读输入
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub state: &'a AppState,
    pub chrome: &'a ChromeState,
    /// 页脚显示的年份
    pub year: i32,
}

/// 一次渲染的结果：内容区域的 UI 树和该页的事件注册表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub route: Route,
    pub content: Node,
    pub handlers: HandlerTable,
    pub notice: Option<Notice>,
}

impl PageView {
    pub fn new(route: Route, content: impl Into<Node>, handlers: HandlerTable) -> Self {
        Self {
            route,
            content: content.into(),
            handlers,
            notice: None,
        }
    }

    /// 数据未到达时的空白内容区域
    pub fn blank(route: Route) -> Self {
        Self::new(route, Element::new("div").class("container"), HandlerTable::new())
    }

    /// 用固定文案替换整个内容区域
    pub fn with_notice(route: Route, notice: Notice) -> Self {
        let class = match notice {
            Notice::PostNotFound { .. } => "container not-found",
            Notice::LoadFailed => "container load-error",
        };
        let content = Element::new("p").class(class).text(notice.message());
        Self {
            route,
            content: content.into(),
            handlers: HandlerTable::new(),
            notice: Some(notice),
        }
    }
}
