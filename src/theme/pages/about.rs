use super::components::photo;
use super::{PageView, RenderContext};
use crate::ui::{Element, HandlerTable};
use crate::utils::markdown;

/// 关于页：完整介绍、技能标签和简历链接
pub fn render(ctx: &RenderContext) -> PageView {
    let user = &ctx.config.user;

    let skills = Element::new("div")
        .id("skills-list")
        .class("skills-list")
        .children(
            user.skills
                .iter()
                .map(|skill| Element::new("span").class("skill-tag").text(skill.as_str())),
        );

    let mut body = Element::new("div")
        .class("container about-content")
        .child(photo("about-photo-container", user.photo.as_deref(), &user.name))
        .child(Element::new("h2").text("About Me"))
        .child(Element::new("div").id("about-bio").raw(markdown::render(&user.long_bio)))
        .child(Element::new("h3").text("My Skills"))
        .child(skills);

    if let Some(resume) = user.resume_url.as_deref().filter(|u| !u.is_empty()) {
        body = body.child(
            Element::new("a")
                .id("resume-link")
                .class("btn")
                .attr("href", resume)
                .attr("target", "_blank")
                .text("Download Resume"),
        );
    }

    let content = Element::new("section").id("about-page").class("about-page").child(body);
    PageView::new(ctx.state.route().clone(), content, HandlerTable::new())
}
