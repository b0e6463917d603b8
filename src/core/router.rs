use tracing::debug;

use crate::core::state::{AppState, LoadStatus};
use crate::models::{Notice, PageId, Route};
use crate::theme::pages::{self, PageView, RenderContext};

/// 把片段解析为路由并写入状态；未知页面静默回落到首页，但导航栏不高亮任何链接
pub fn navigate(state: &mut AppState, fragment: &str) -> Route {
    let route = Route::parse(fragment);
    debug!("Navigating to {} (fragment {:?})", route.to_fragment(), fragment);
    // 进入博客列表时搜索框和分类下拉框都是新的
    if route.page == PageId::Blog {
        state.reset_filter();
    }
    state.set_route(route.clone());
    state.set_active_nav(Route::recognized_page(fragment));
    route
}

/// 为当前路由选择页面渲染器
pub fn render(ctx: &RenderContext) -> PageView {
    let route = ctx.state.route().clone();
    match ctx.state.status() {
        LoadStatus::Pending => PageView::blank(route),
        LoadStatus::Failed => PageView::with_notice(route, Notice::LoadFailed),
        LoadStatus::Ready => match route.page {
            PageId::Home => pages::home::render(ctx),
            PageId::About => pages::about::render(ctx),
            PageId::Blog => pages::blog::render(ctx),
            PageId::Post => pages::post::render(ctx, route.param.as_deref()),
            PageId::Contact => pages::contact::render(ctx),
        },
    }
}
