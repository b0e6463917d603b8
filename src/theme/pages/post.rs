use super::components::share_links;
use super::{PageView, RenderContext};
use crate::models::Notice;
use crate::ui::{Action, Element, EventKind, HandlerTable};
use crate::utils::format_long_date;

/// 文章详情；找不到文章时整页替换为 "Post not found."
pub fn render(ctx: &RenderContext, post_id: Option<&str>) -> PageView {
    let route = ctx.state.route().clone();
    let id = post_id.unwrap_or_default();
    let Some(post) = ctx.state.find_post(id) else {
        return PageView::with_notice(route, Notice::PostNotFound { id: id.to_string() });
    };

    let mut handlers = HandlerTable::new();
    handlers.on("back-to-blog", EventKind::Click, Action::Navigate("#blog".to_string()));

    let mut image = Element::new("div").id("post-image-container").class("post-image");
    if let Some(image_url) = &post.image_url {
        image = image.child(
            Element::new("img")
                .attr("src", image_url.as_str())
                .attr("alt", post.title.as_str()),
        );
    }

    let meta = Element::new("div")
        .class("post-meta")
        .child(Element::new("span").id("post-author").text(format!("By {}", post.author)))
        .child(Element::new("span").id("post-date").text(format_long_date(&post.date)))
        .child(Element::new("span").id("post-category").class("category-tag").text(post.category.as_str()));

    let share = Element::new("div")
        .class("share")
        .child(Element::new("h4").text("Share this post"))
        .child(share_links(&ctx.config.site_url, post));

    let body = Element::new("div")
        .class("container")
        .child(image)
        .child(Element::new("h1").id("post-title").text(post.title.as_str()))
        .child(meta)
        .child(Element::new("div").id("post-content-full").class("post-content").raw(post.content.as_str()))
        .child(share)
        .child(
            Element::new("a")
                .id("back-to-blog")
                .class("back-link")
                .attr("href", "#blog")
                .text("\u{2190} Back to Blog"),
        );

    let content = Element::new("article").id("single-post-page").class("single-post").child(body);
    PageView::new(route, content, handlers)
}
