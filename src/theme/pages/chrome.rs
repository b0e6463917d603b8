use super::RenderContext;
use crate::models::PageId;
use crate::ui::{Action, Element, EventKind, HandlerTable, Node};

/// 导航栏中的页面，`post` 没有对应链接
pub const NAV_PAGES: [(PageId, &str); 4] = [
    (PageId::Home, "Home"),
    (PageId::About, "About"),
    (PageId::Blog, "Blog"),
    (PageId::Contact, "Contact"),
];

/// 导航栏与页脚
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeView {
    pub nav: Node,
    pub footer: Node,
    pub handlers: HandlerTable,
}

fn social_icon(key: &str) -> Option<&'static str> {
    match key {
        "linkedin" => Some("fa-brands fa-linkedin"),
        "github" => Some("fa-brands fa-github"),
        "twitter" => Some("fa-brands fa-x-twitter"),
        "instagram" => Some("fa-brands fa-instagram"),
        _ => None,
    }
}

pub fn render(ctx: &RenderContext) -> ChromeView {
    let mut handlers = HandlerTable::new();
    let nav = render_nav(ctx, &mut handlers);
    let footer = render_footer(ctx, &mut handlers);
    ChromeView {
        nav: nav.into(),
        footer: footer.into(),
        handlers,
    }
}

fn render_nav(ctx: &RenderContext, handlers: &mut HandlerTable) -> Element {
    let active = ctx.state.active_nav();

    let links = NAV_PAGES.iter().map(|(page, label)| {
        let id = format!("nav-{}", page);
        let href = format!("#{}", page);
        handlers.on(id.clone(), EventKind::Click, Action::Navigate(href.clone()));
        let class = if Some(*page) == active { "nav-link active" } else { "nav-link" };
        Element::new("li").child(
            Element::new("a")
                .id(id)
                .class(class)
                .attr("href", href)
                .text(*label),
        )
    });
    let links: Vec<Element> = links.collect();

    handlers
        .on("mobile-nav-toggle", EventKind::Click, Action::ToggleMenu)
        .on("theme-toggle", EventKind::Click, Action::ToggleTheme);

    let list_class = if ctx.chrome.nav_open { "nav-links active" } else { "nav-links" };

    Element::new("nav").class("navbar").child(
        Element::new("div")
            .class("container")
            .child(
                Element::new("a")
                    .class("logo")
                    .attr("href", "#home")
                    .text(ctx.config.user.name.as_str()),
            )
            .child(Element::new("ul").id("nav-links").class(list_class).children(links))
            .child(
                Element::new("label").class("theme-switch").child(
                    Element::new("input")
                        .id("theme-toggle")
                        .attr("type", "checkbox")
                        .flag("checked", ctx.chrome.theme.is_dark()),
                ),
            )
            .child(
                Element::new("button")
                    .id("mobile-nav-toggle")
                    .class("mobile-nav-toggle")
                    .attr("aria-label", "Toggle navigation")
                    .child(Element::new("i").class("fa-solid fa-bars")),
            ),
    )
}

fn render_footer(ctx: &RenderContext, handlers: &mut HandlerTable) -> Element {
    handlers
        .on("newsletter-email", EventKind::Input, Action::EditNewsletter)
        .on("newsletter-form", EventKind::Submit, Action::SubmitNewsletter);

    let social = Element::new("div")
        .id("footer-social-links")
        .class("social-links")
        .children(ctx.config.social.links().into_iter().filter_map(|(key, url)| {
            social_icon(key).map(|icon| {
                Element::new("a")
                    .attr("href", url)
                    .attr("target", "_blank")
                    .attr("aria-label", key)
                    .child(Element::new("i").class(icon))
            })
        }));

    let newsletter = Element::new("form")
        .id("newsletter-form")
        .class("newsletter-form")
        .child(
            Element::new("input")
                .id("newsletter-email")
                .attr("type", "email")
                .attr("placeholder", "Your email")
                .attr("value", ctx.chrome.newsletter_email.as_str())
                .flag("required", true),
        )
        .child(Element::new("button").attr("type", "submit").text("Subscribe"));

    let mut feedback = Element::new("p").id("newsletter-feedback").class("form-feedback");
    if let Some(message) = ctx.chrome.newsletter_feedback {
        feedback = feedback.class("form-feedback success").text(message);
    }

    Element::new("footer").class("footer").child(
        Element::new("div")
            .class("container")
            .child(social)
            .child(newsletter)
            .child(feedback)
            .child(
                Element::new("p")
                    .class("copyright")
                    .text("\u{a9} ")
                    .child(Element::new("span").id("current-year").text(ctx.year.to_string()))
                    .text(format!(" {}. All rights reserved.", ctx.config.user.name)),
            ),
    )
}
