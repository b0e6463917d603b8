use chrono::{Datelike, Local};
use tracing::{debug, error, info, warn};

use crate::core::loader::PostSource;
use crate::core::msg::Msg;
use crate::core::preference::ThemeStore;
use crate::core::router;
use crate::core::state::{AppState, ChromeState};
use crate::error::Result;
use crate::models::{Config, ThemeMode};
use crate::theme::pages::chrome::{self, ChromeView};
use crate::theme::pages::{PageView, RenderContext};
use crate::theme::renderer::{Document, DocumentRenderer};
use crate::ui::UiEvent;

/// 渲染引擎
///
/// 持有唯一一份应用状态；每处理一条消息就重新渲染当前页面和外壳。
pub struct Engine {
    config: Config,
    state: AppState,
    chrome: ChromeState,
    store: Box<dyn ThemeStore>,
    renderer: DocumentRenderer,
    year: i32,
    page: PageView,
    chrome_view: ChromeView,
    /// 最近一次导航后需要回到页面顶部
    scroll_to_top: bool,
}

impl Engine {
    /// 创建引擎：读取主题偏好并渲染外壳，内容区域保持空白直到文章到达
    pub fn new(config: Config, store: Box<dyn ThemeStore>) -> Result<Self> {
        config.validate()?;
        let theme = store.load();
        info!("Theme preference: {}", theme);

        let state = AppState::new(config.posts_per_page);
        let chrome = ChromeState::new(theme);
        let year = Local::now().year();
        let (page, chrome_view) = {
            let ctx = RenderContext {
                config: &config,
                state: &state,
                chrome: &chrome,
                year,
            };
            (router::render(&ctx), chrome::render(&ctx))
        };

        Ok(Self {
            config,
            state,
            chrome,
            store,
            renderer: DocumentRenderer::new()?,
            year,
            page,
            chrome_view,
            scroll_to_top: false,
        })
    }

    /// 覆盖页脚年份
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self.rerender();
        self
    }

    /// 启动时唯一一次加载文章
    pub async fn start(&mut self, source: &dyn PostSource) {
        match source.fetch_posts().await {
            Ok(posts) => self.dispatch(Msg::PostsLoaded(posts)),
            Err(e) => {
                error!("Failed to fetch posts: {}", e);
                self.dispatch(Msg::PostsFailed(e.to_string()));
            }
        }
    }

    /// 通过当前页面和外壳的注册表派发 UI 事件；未注册的事件返回 false
    pub fn handle_event(&mut self, event: &UiEvent) -> bool {
        let msg = self
            .page
            .handlers
            .resolve(event)
            .or_else(|| self.chrome_view.handlers.resolve(event));
        match msg {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => {
                debug!("Ignoring unbound event {:?} on #{}", event.kind, event.target);
                false
            }
        }
    }

    /// 应用消息并重新渲染
    pub fn dispatch(&mut self, msg: Msg) {
        self.scroll_to_top = false;
        match msg {
            Msg::Navigate(fragment) => {
                router::navigate(&mut self.state, &fragment);
                self.chrome.nav_open = false;
                self.chrome.reset_page_forms();
                self.scroll_to_top = true;
            }
            Msg::PostsLoaded(posts) => {
                let count = posts.len();
                if self.state.load_posts(posts) {
                    info!("Loaded {} posts", count);
                } else {
                    warn!("Posts already settled, dropping late result");
                }
            }
            Msg::PostsFailed(reason) => {
                if self.state.fail_load() {
                    error!("Post loading failed: {}", reason);
                }
            }
            Msg::SearchChanged(term) => self.state.set_search(term),
            Msg::CategoryChanged(value) => self.state.set_category(&value),
            Msg::PageSelected(page) => {
                if !self.state.go_to_page(page) {
                    debug!("Page {} out of range (1..={})", page, self.state.page_count());
                }
            }
            Msg::ContactFieldChanged { field, value } => self.chrome.contact.set(field, value),
            Msg::ContactSubmitted => self.chrome.submit_contact(),
            Msg::NewsletterEmailChanged(email) => self.chrome.newsletter_email = email,
            Msg::NewsletterSubmitted => self.chrome.submit_newsletter(),
            Msg::ThemeToggled => self.toggle_theme(),
            Msg::MenuToggled => self.chrome.nav_open = !self.chrome.nav_open,
        }
        self.rerender();
    }

    fn toggle_theme(&mut self) {
        let theme = self.chrome.theme.toggled();
        self.chrome.theme = theme;
        if let Err(e) = self.store.save(theme) {
            warn!("Could not persist theme preference: {}", e);
        }
        info!("Theme switched to {}", theme);
    }

    fn rerender(&mut self) {
        let ctx = RenderContext {
            config: &self.config,
            state: &self.state,
            chrome: &self.chrome,
            year: self.year,
        };
        self.page = router::render(&ctx);
        self.chrome_view = chrome::render(&ctx);
    }

    /// 把当前 UI 树挂载到文档外壳
    pub fn document(&self) -> Result<String> {
        self.renderer.render(&Document {
            title: &self.config.user.name,
            theme: self.chrome.theme,
            chrome: &self.chrome_view,
            page: &self.page,
            scroll_to_top: self.scroll_to_top,
        })
    }

    pub fn page(&self) -> &PageView {
        &self.page
    }

    pub fn chrome_view(&self) -> &ChromeView {
        &self.chrome_view
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn chrome(&self) -> &ChromeState {
        &self.chrome
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> ThemeMode {
        self.chrome.theme
    }

    pub fn scroll_to_top(&self) -> bool {
        self.scroll_to_top
    }
}
