use super::{PageView, RenderContext};
use crate::core::msg::ContactField;
use crate::ui::{Action, Element, EventKind, HandlerTable};

/// 联系页；提交只在本地显示成功提示，不发送数据
pub fn render(ctx: &RenderContext) -> PageView {
    let form_state = &ctx.chrome.contact;
    let mut handlers = HandlerTable::new();
    for field in ContactField::ALL {
        handlers.on(field.element_id(), EventKind::Input, Action::EditContact(field));
    }
    handlers.on("contact-form", EventKind::Submit, Action::SubmitContact);

    let form = Element::new("form")
        .id("contact-form")
        .class("contact-form")
        .child(
            Element::new("input")
                .id(ContactField::Name.element_id())
                .attr("type", "text")
                .attr("name", "name")
                .attr("placeholder", "Your Name")
                .attr("value", form_state.get(ContactField::Name))
                .flag("required", true),
        )
        .child(
            Element::new("input")
                .id(ContactField::Email.element_id())
                .attr("type", "email")
                .attr("name", "email")
                .attr("placeholder", "Your Email")
                .attr("value", form_state.get(ContactField::Email))
                .flag("required", true),
        )
        .child(
            Element::new("textarea")
                .id(ContactField::Message.element_id())
                .attr("name", "message")
                .attr("placeholder", "Your Message")
                .flag("required", true)
                .text(form_state.get(ContactField::Message)),
        )
        .child(
            Element::new("button")
                .attr("type", "submit")
                .class("btn")
                .text("Send Message"),
        );

    let mut feedback = Element::new("p").id("contact-feedback").class("form-feedback");
    if let Some(message) = ctx.chrome.contact_feedback {
        feedback = feedback.class("form-feedback success").text(message);
    }

    let body = Element::new("div")
        .class("container")
        .child(Element::new("h2").text("Get In Touch"))
        .child(form)
        .child(feedback);

    let content = Element::new("section").id("contact-page").class("contact-page").child(body);
    PageView::new(ctx.state.route().clone(), content, handlers)
}
