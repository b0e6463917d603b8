use super::components::{photo, post_grid};
use super::{PageView, RenderContext};
use crate::ui::{Action, Element, EventKind, HandlerTable};

/// 首页：个人信息和最多三篇推荐文章
pub fn render(ctx: &RenderContext) -> PageView {
    let user = &ctx.config.user;
    let mut handlers = HandlerTable::new();
    handlers.on("hero-cta", EventKind::Click, Action::Navigate("#blog".to_string()));

    let hero = Element::new("section").class("hero").child(
        Element::new("div")
            .class("container hero-content")
            .child(photo("hero-photo-container", user.photo.as_deref(), &user.name))
            .child(Element::new("h1").id("hero-name").text(user.name.as_str()))
            .child(Element::new("p").id("hero-tagline").text(user.tagline.as_str()))
            .child(Element::new("p").id("hero-bio").text(user.short_bio.as_str()))
            .child(
                Element::new("a")
                    .id("hero-cta")
                    .class("btn")
                    .attr("href", "#blog")
                    .text("Read My Blog"),
            ),
    );

    let featured = Element::new("section").class("featured-posts").child(
        Element::new("div")
            .class("container")
            .child(Element::new("h2").text("Featured Posts"))
            .child(post_grid("featured-posts-grid", ctx.state.featured_posts(), &mut handlers)),
    );

    let content = Element::new("div").id("home-page").child(hero).child(featured);
    PageView::new(ctx.state.route().clone(), content, handlers)
}
