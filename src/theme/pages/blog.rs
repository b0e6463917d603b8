use super::components::post_grid;
use super::{PageView, RenderContext};
use crate::core::search::{distinct_categories, option_value, shows_pagination, ALL_CATEGORIES};
use crate::core::state::AppState;
use crate::ui::{Action, Element, EventKind, HandlerTable};

pub const NO_POSTS: &str = "No posts found.";

/// 博客列表：搜索框、分类过滤、文章网格和分页
pub fn render(ctx: &RenderContext) -> PageView {
    let state = ctx.state;
    let mut handlers = HandlerTable::new();
    handlers
        .on("search-input", EventKind::Input, Action::Search)
        .on("category-filter", EventKind::Change, Action::SelectCategory);

    let search = Element::new("input")
        .id("search-input")
        .attr("type", "search")
        .attr("placeholder", "Search posts...")
        .attr("value", state.filter().search.as_str());

    let selected = state.filter().category.value();
    let labels = std::iter::once(ALL_CATEGORIES).chain(distinct_categories(state.posts()));
    let category = Element::new("select").id("category-filter").children(labels.map(|label| {
        let value = option_value(label);
        let is_selected = value == selected;
        Element::new("option")
            .attr("value", value)
            .flag("selected", is_selected)
            .text(label)
    }));

    let controls = Element::new("div")
        .class("blog-controls")
        .child(search)
        .child(category);

    let body = Element::new("div")
        .class("container")
        .child(Element::new("h2").text("Blog"))
        .child(controls)
        .child(grid(state, &mut handlers))
        .child(pagination(state, &mut handlers));

    let content = Element::new("section").id("blog-page").class("blog-page").child(body);
    PageView::new(state.route().clone(), content, handlers)
}

fn grid(state: &AppState, handlers: &mut HandlerTable) -> Element {
    let posts = state.page_posts();
    if posts.is_empty() {
        return Element::new("div")
            .id("blog-posts-grid")
            .class("posts-grid")
            .child(Element::new("p").text(NO_POSTS));
    }
    post_grid("blog-posts-grid", posts, handlers)
}

/// 页数不超过 1 时不渲染任何按钮
fn pagination(state: &AppState, handlers: &mut HandlerTable) -> Element {
    let container = Element::new("div").id("pagination-controls").class("pagination");
    if !shows_pagination(state.filtered_len(), state.page_size()) {
        return container;
    }

    container.children((1..=state.page_count()).map(|page| {
        let id = format!("page-button-{}", page);
        handlers.on(id.clone(), EventKind::Click, Action::GoToPage(page));
        let button = Element::new("button").id(id).text(page.to_string());
        if page == state.current_page() {
            button.class("active")
        } else {
            button
        }
    }))
}

