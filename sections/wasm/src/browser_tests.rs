//! Client behaviour against markup produced by `render_page`.
//!
//! Run with `wasm-pack test --headless --firefox sections/wasm`.

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, PageTransitionEvent,
    PageTransitionEventInit,
};

use renu_sections::contact::{DEFAULT_RECIPIENT, DEFAULT_SUBJECT, SubmitAction};
use renu_sections::types::{FooterProps, Page, Section, TestimonialsProps};
use renu_sections::{render_page, ClientAssets};

use crate::{carousel, contact_form};

wasm_bindgen_test_configure!(run_in_browser);

fn render_into_body(sections: Vec<Section>) -> Element {
    let page = Page {
        sections,
        ..Default::default()
    };
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_inner_html(&render_page(&page, &ClientAssets::default()));
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element for {selector}"))
}

fn is_current(root: &Element, dot: usize) -> bool {
    find(root, &format!("[data-dot=\"{dot}\"]"))
        .get_attribute("aria-current")
        .as_deref()
        == Some("true")
}

fn is_disabled(root: &Element, selector: &str) -> bool {
    find(root, selector).has_attribute("disabled")
}

fn finite_testimonials() -> Section {
    Section::Testimonials(TestimonialsProps {
        infinite: false,
        interval: 0,
        ..Default::default()
    })
}

#[wasm_bindgen_test]
fn mounted_carousel_reads_rendered_options() {
    let container = render_into_body(vec![finite_testimonials()]);
    let root = find(&container, "[data-slider-root]");
    let window = web_sys::window().unwrap();

    let mounted = carousel::mount(&window, &root).unwrap();
    let slider = mounted.slider.borrow();
    assert_eq!(slider.root_id(), "depoimentos-carousel");
    assert_eq!(slider.len(), 5);
    assert_eq!(slider.autoplay().interval(), None);
    assert!(!slider.can_go_prev());
    drop(slider);

    container.remove();
}

#[wasm_bindgen_test]
fn navigation_keeps_dots_and_arrows_in_sync() {
    let container = render_into_body(vec![finite_testimonials()]);
    let root = find(&container, "[data-slider-root]");
    let window = web_sys::window().unwrap();
    let mounted = carousel::mount(&window, &root).unwrap();

    assert!(is_current(&root, 0));
    assert!(is_disabled(&root, "[data-slide=\"prev\"]"));

    find(&root, "[data-slide=\"next\"]")
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    assert_eq!(mounted.slider.borrow().current_index(), 1);
    assert!(is_current(&root, 1));
    assert!(!is_current(&root, 0));
    assert!(!is_disabled(&root, "[data-dot=\"0\"]"));
    assert!(is_disabled(&root, "[data-dot=\"1\"]"));
    assert!(!is_disabled(&root, "[data-slide=\"prev\"]"));

    find(&root, "[data-dot=\"4\"]")
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    assert_eq!(mounted.slider.borrow().current_index(), 4);
    assert!(is_disabled(&root, "[data-slide=\"next\"]"));

    container.remove();
    // a queued scroll event may still reach the listeners
    std::mem::forget(mounted);
}

#[wasm_bindgen_test]
fn scroll_sync_updates_controls() {
    let container = render_into_body(vec![finite_testimonials()]);
    let root = find(&container, "[data-slider-root]");
    let window = web_sys::window().unwrap();
    let mounted = carousel::mount(&window, &root).unwrap();

    assert!(mounted.slider.borrow_mut().sync_to(4));
    assert!(is_current(&root, 4));
    assert!(is_disabled(&root, "[data-slide=\"next\"]"));
    assert!(!is_disabled(&root, "[data-slide=\"prev\"]"));
    // the track was not moved, only the controls
    assert_eq!(find(&root, "[data-slider-track]").scroll_left(), 0);

    container.remove();
    std::mem::forget(mounted);
}

#[wasm_bindgen_test]
fn cached_pagehide_keeps_carousels_mounted() {
    let container = render_into_body(vec![finite_testimonials()]);
    let window = web_sys::window().unwrap();
    assert_eq!(carousel::mount_all().unwrap(), 1);

    let pagehide = |persisted: bool| {
        let init = PageTransitionEventInit::new();
        init.set_persisted(persisted);
        let event = PageTransitionEvent::new_with_event_init_dict("pagehide", &init).unwrap();
        window.dispatch_event(&event).unwrap();
    };

    // entering the back/forward cache
    pagehide(true);
    assert_eq!(carousel::mounted_flags(), vec![true]);

    // real unload
    pagehide(false);
    assert_eq!(carousel::mounted_flags(), vec![false]);

    container.remove();
}

#[wasm_bindgen_test]
fn form_template_and_fields_round_trip_through_markup() {
    let mut footer = FooterProps::default();
    footer.form.submit_action = SubmitAction::Log;
    let container = render_into_body(vec![Section::Footer(footer)]);
    let form = find(&container, "#nossos-contatos-form");

    let values = [
        ("first_name", "Ana"),
        ("last_name", "Silva"),
        ("phone", "11999999999"),
        ("email", "ana@x.com"),
    ];
    for (name, value) in values {
        find(&form, &format!("input[name=\"{name}\"]"))
            .dyn_into::<HtmlInputElement>()
            .unwrap()
            .set_value(value);
    }
    find(&form, "textarea[name=\"message\"]")
        .dyn_into::<HtmlTextAreaElement>()
        .unwrap()
        .set_value("Olá");

    let (template, action) = contact_form::read_template(&form);
    assert_eq!(template.recipient, DEFAULT_RECIPIENT);
    assert_eq!(template.subject, DEFAULT_SUBJECT);
    assert_eq!(action, SubmitAction::Log);

    assert_eq!(
        contact_form::field_values(&form).unwrap(),
        vec!["Ana", "Silva", "11999999999", "ana@x.com", "Olá"]
    );

    let link = contact_form::submit(&form).unwrap();
    assert!(link.starts_with("mailto:contato@renuenergia.com.br?"));
    assert!(link.contains("subject=Contato%20do%20site%20via%20formul%C3%A1rio"));
    assert!(link.contains("Nome:%20Ana%20Silva"));
    assert!(link.contains("Mensagem:%20Ol%C3%A1"));

    container.remove();
}

#[wasm_bindgen_test]
fn every_footer_form_is_bound() {
    let second = FooterProps {
        id: Some("contato-rodape".into()),
        ..Default::default()
    };
    let container = render_into_body(vec![
        Section::Footer(FooterProps::default()),
        Section::Footer(second),
    ]);

    assert_eq!(contact_form::bind().unwrap(), 2);

    container.remove();
}
