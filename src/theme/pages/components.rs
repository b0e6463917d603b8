use crate::models::Post;
use crate::ui::{Action, Element, EventKind, HandlerTable};
use crate::utils::{encode_component, post_url};

/// 文章卡片，同时注册 "Read More" 链接的点击
pub fn post_card(post: &Post, handlers: &mut HandlerTable) -> Element {
    let link_id = format!("post-link-{}", post.id);
    let fragment = post.fragment();
    handlers.on(link_id.clone(), EventKind::Click, Action::Navigate(fragment.clone()));

    let mut card = Element::new("article").class("post-card");
    if let Some(image_url) = &post.image_url {
        card = card.child(
            Element::new("div")
                .class("post-card-img")
                .child(Element::new("img").attr("src", image_url.as_str()).attr("alt", post.title.as_str())),
        );
    }
    card.child(
        Element::new("div")
            .class("post-card-content")
            .child(Element::new("h3").class("post-card-title").text(post.title.as_str()))
            .child(Element::new("p").class("post-card-excerpt").text(post.excerpt.as_str()))
            .child(
                Element::new("a")
                    .id(link_id)
                    .class("post-card-link")
                    .attr("href", fragment)
                    .text("Read More \u{2192}"),
            ),
    )
}

pub fn post_grid<'a>(
    id: &str,
    posts: impl IntoIterator<Item = &'a Post>,
    handlers: &mut HandlerTable,
) -> Element {
    let cards: Vec<Element> = posts.into_iter().map(|p| post_card(p, handlers)).collect();
    Element::new("div").id(id).class("posts-grid").children(cards)
}

/// 可选的照片容器
pub fn photo(container_id: &str, photo: Option<&str>, alt: &str) -> Element {
    let container = Element::new("div").id(container_id).class("photo-container");
    match photo.filter(|p| !p.is_empty()) {
        Some(src) => container.child(Element::new("img").attr("src", src).attr("alt", alt)),
        None => container,
    }
}

/// 分享按钮：X、LinkedIn、Facebook
pub fn share_links(site_url: &str, post: &Post) -> Element {
    let url = encode_component(&post_url(site_url, &post.id));
    let text = encode_component(&post.title);
    let links = [
        (
            format!("https://twitter.com/intent/tweet?url={}&text={}", url, text),
            "Share on X",
            "fa-brands fa-x-twitter",
        ),
        (
            format!("https://www.linkedin.com/shareArticle?mini=true&url={}&title={}", url, text),
            "Share on LinkedIn",
            "fa-brands fa-linkedin",
        ),
        (
            format!("https://www.facebook.com/sharer/sharer.php?u={}", url),
            "Share on Facebook",
            "fa-brands fa-facebook",
        ),
    ];

    Element::new("div")
        .id("social-share-buttons")
        .class("social-share")
        .children(links.into_iter().map(|(href, label, icon)| {
            Element::new("a")
                .attr("href", href)
                .attr("target", "_blank")
                .attr("aria-label", label)
                .child(Element::new("i").class(icon))
        }))
}
