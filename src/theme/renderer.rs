use tera::{Context as TeraContext, Tera};
use tracing::{debug, error};

use crate::error::Result;
use crate::models::ThemeMode;
use crate::theme::pages::chrome::ChromeView;
use crate::theme::pages::PageView;

/// 嵌入的默认文档外壳
const LAYOUT_HTML: &str = include_str!("../../embed/theme/default/layout/layout.html");

const LAYOUT: &str = "layout.html";

/// 一次完整挂载所需的片段
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    pub title: &'a str,
    pub theme: ThemeMode,
    pub chrome: &'a ChromeView,
    pub page: &'a PageView,
    pub scroll_to_top: bool,
}

/// 最终挂载步骤：把 UI 树填入文档外壳
#[derive(Clone)]
pub struct DocumentRenderer {
    tera: Tera,
}

impl DocumentRenderer {
    /// 使用嵌入的默认布局
    pub fn new() -> Result<Self> {
        Self::with_layout(LAYOUT_HTML)
    }

    /// 使用自定义布局；模板可用变量见 [`DocumentRenderer::render`]
    pub fn with_layout(layout: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(LAYOUT, layout)?;
        Ok(Self { tera })
    }

    /// 渲染完整文档
    ///
    /// 模板变量：`title`、`body_class`、`route`、`scroll_to_top`、`nav`、`main`、`footer`。
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut context = TeraContext::new();
        context.insert("title", doc.title);
        context.insert("body_class", doc.theme.body_class());
        context.insert("route", &doc.page.route.to_fragment());
        context.insert("scroll_to_top", &doc.scroll_to_top);
        context.insert("nav", &doc.chrome.nav.to_html());
        context.insert("main", &doc.page.content.to_html());
        context.insert("footer", &doc.chrome.footer.to_html());

        debug!("Attaching {} to layout", doc.page.route.to_fragment());
        match self.tera.render(LAYOUT, &context) {
            Ok(html) => Ok(html),
            Err(e) => {
                error!("模板渲染失败: {}", e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Route;
    use crate::ui::{Element, HandlerTable};

    fn chrome() -> ChromeView {
        ChromeView {
            nav: Element::new("nav").text("nav").into(),
            footer: Element::new("footer").text("foot").into(),
            handlers: HandlerTable::new(),
        }
    }

    #[test]
    fn test_render_document() {
        let renderer = DocumentRenderer::new().unwrap();
        let chrome = chrome();
        let page = PageView::new(
            Route::home(),
            Element::new("p").text("<hello>"),
            HandlerTable::new(),
        );
        let html = renderer
            .render(&Document {
                title: "Ann & Co",
                theme: ThemeMode::Dark,
                chrome: &chrome,
                page: &page,
                scroll_to_top: true,
            })
            .unwrap();

        assert!(html.contains("<title>Ann &amp; Co</title>"));
        assert!(html.contains("<body class=\"dark-mode\" data-route=\"#home\" data-scroll=\"top\">"));
        assert!(html.contains("<p>&lt;hello&gt;</p>"));
        assert!(html.contains("<nav>nav</nav>"));
        assert!(html.contains("<footer>foot</footer>"));
    }

    #[test]
    fn test_light_mode_has_no_body_class() {
        let renderer = DocumentRenderer::with_layout("<body{% if body_class %} class=\"{{ body_class }}\"{% endif %}>").unwrap();
        let chrome = chrome();
        let page = PageView::blank(Route::home());
        let html = renderer
            .render(&Document {
                title: "t",
                theme: ThemeMode::Light,
                chrome: &chrome,
                page: &page,
                scroll_to_top: false,
            })
            .unwrap();
        assert_eq!(html, "<body>");
    }
}
