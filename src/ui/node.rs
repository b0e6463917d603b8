use pulldown_cmark::escape::escape_html;
use std::fmt::Write;

/// 不需要闭合标签的元素
const VOID_ELEMENTS: &[&str] = &["img", "input", "br", "hr", "meta", "link"];

/// 描述式 UI 树的节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// 纯文本，序列化时转义
    Text(String),
    /// 可信 HTML 片段（文章正文、个人介绍），原样输出
    Raw(String),
}

/// 元素节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// 仅在条件成立时添加布尔属性
    pub fn flag(self, name: &str, on: bool) -> Self {
        if on {
            self.attr(name, name)
        } else {
            self
        }
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn raw(self, html: impl Into<String>) -> Self {
        self.child(Node::Raw(html.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// 拼接所有后代文本
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// 深度优先查找指定 id 的元素
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        let element = self.as_element()?;
        if element.get_attr("id") == Some(id) {
            return Some(element);
        }
        element.children.iter().find_map(|c| c.find_by_id(id))
    }

    /// 按文档顺序收集带有指定 class 的元素
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk_class(class, &mut found);
        found
    }

    fn walk_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            if element.has_class(class) {
                found.push(element);
            }
            for child in &element.children {
                child.walk_class(class, found);
            }
        }
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) | Node::Raw(t) => out.push_str(t),
            Node::Element(e) => {
                for child in &e.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// 序列化为 HTML
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(1024);
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => {
                let _ = escape_html(&mut *out, t);
            }
            Node::Raw(html) => out.push_str(html),
            Node::Element(e) => {
                let _ = write!(out, "<{}", e.tag);
                for (name, value) in &e.attrs {
                    let _ = write!(out, " {}=\"", name);
                    let _ = escape_html(&mut *out, value);
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&e.tag) {
                    return;
                }
                for child in &e.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", e.tag);
            }
        }
    }
}
