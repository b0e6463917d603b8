//! 描述式 UI 树与事件注册表
//!
//! 页面渲染器只产出数据：一棵 [`Node`] 树和一张 [`HandlerTable`]。
//! 最终挂载（序列化进文档外壳）由 `theme::renderer` 完成。

pub mod handlers;
pub mod node;

pub use handlers::{Action, Binding, EventKind, HandlerTable, UiEvent};
pub use node::{Element, Node};
