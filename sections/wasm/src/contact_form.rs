//! Footer contact forms: intercept submit, build the `mailto:` link.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

use renu_sections::components::CONTACT_FORM_SELECTOR;
use renu_sections::contact::{ContactSubmission, MailtoTemplate, SubmitAction};

/// Template and action as rendered on the form element.
pub(crate) fn read_template(form: &Element) -> (MailtoTemplate, SubmitAction) {
    let mut template = MailtoTemplate::default();
    if let Some(recipient) = form.get_attribute("data-mailto-recipient") {
        template.recipient = recipient;
    }
    if let Some(subject) = form.get_attribute("data-mailto-subject") {
        template.subject = subject;
    }
    let action = form
        .get_attribute("data-submit-action")
        .map(|a| SubmitAction::parse(&a))
        .unwrap_or_default();
    (template, action)
}

/// Field values in document order.
pub(crate) fn field_values(form: &Element) -> Result<Vec<String>, JsValue> {
    let nodes = form.query_selector_all("input, textarea")?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| {
            let node = match node.dyn_into::<HtmlInputElement>() {
                Ok(input) => return Some(input.value()),
                Err(node) => node,
            };
            node.dyn_into::<HtmlTextAreaElement>()
                .ok()
                .map(|area| area.value())
        })
        .collect())
}

/// Attach the submit handler to every contact form; returns how many.
pub(crate) fn bind() -> Result<usize, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let forms = document.query_selector_all(CONTACT_FORM_SELECTOR)?;

    let mut count = 0;
    for i in 0..forms.length() {
        let Some(form) = forms.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        bind_form(&form)?;
        count += 1;
    }
    Ok(count)
}

fn bind_form(form: &Element) -> Result<(), JsValue> {
    let target = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: web_sys::Event| {
        event.prevent_default();
        if let Err(err) = submit(&target) {
            web_sys::console::error_2(&JsValue::from_str("renu: contact form"), &err);
        }
    }) as Box<dyn FnMut(_)>);

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget(); // Keep the closure alive
    Ok(())
}

/// Build the link for `form` and act on it; returns the link.
pub(crate) fn submit(form: &Element) -> Result<String, JsValue> {
    let (template, action) = read_template(form);
    let submission = ContactSubmission::from_fields(&field_values(form)?);
    let link = template.build(&submission);

    match action {
        SubmitAction::Log => {
            web_sys::console::log_1(&JsValue::from_str(&link));
        }
        SubmitAction::Navigate => {
            let window = web_sys::window().ok_or("no window")?;
            window.location().set_href(&link)?;
        }
    }
    Ok(link)
}
