//! Browser client for the server-rendered Renu Energia sections.
//!
//! Mounts a [`Slider`](renu_sections::slider::Slider) on every element
//! marked `data-slider-root`, drives its autoplay from `setInterval`, and
//! turns the footer contact form into a `mailto:` link on submit.
//!
//! Build with `wasm-pack build --target web` and point
//! `ClientAssets::wasm_glue_path` at the generated JS glue.

use wasm_bindgen::prelude::*;

mod carousel;
mod contact_form;

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests;

pub use carousel::{parse_options, unmount_carousels};

use renu_sections::contact::{ContactSubmission, MailtoTemplate};

/// Install the panic hook and wire up the page.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    match carousel::mount_all() {
        Ok(count) => log(&format!("renu: {count} carousel(s) mounted")),
        Err(err) => web_sys::console::error_2(&JsValue::from_str("renu: carousel setup failed"), &err),
    }
    match contact_form::bind() {
        Ok(count) => log(&format!("renu: {count} contact form(s) bound")),
        Err(err) => {
            web_sys::console::error_2(&JsValue::from_str("renu: contact form setup failed"), &err)
        }
    }
}

// ============================================================================
// WASM Exports
// ============================================================================

/// Build the contact `mailto:` link from raw field values.
///
/// Handy for checking a template from the browser console.
#[wasm_bindgen]
pub fn build_mailto(
    recipient: &str,
    subject: &str,
    first_name: &str,
    last_name: &str,
    phone: &str,
    email: &str,
    message: &str,
) -> String {
    let template = MailtoTemplate {
        recipient: recipient.to_string(),
        subject: subject.to_string(),
    };
    let submission =
        ContactSubmission::from_fields(&[first_name, last_name, phone, email, message]);
    template.build(&submission)
}

/// Check if the WASM module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("renu-sections-wasm v{} ready", env!("CARGO_PKG_VERSION"))
}

fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

#[cfg(test)]
mod tests {
    use super::*;
    use renu_sections::contact::{DEFAULT_RECIPIENT, DEFAULT_SUBJECT};

    #[test]
    fn build_mailto_matches_library_template() {
        let link = build_mailto(
            DEFAULT_RECIPIENT,
            DEFAULT_SUBJECT,
            "Ana",
            "Silva",
            "11999999999",
            "ana@x.com",
            "Olá",
        );
        assert!(link.contains("subject=Contato%20do%20site%20via%20formul%C3%A1rio"));
        assert!(link.contains("Nome:%20Ana%20Silva"));
    }

    #[test]
    fn health_check_names_the_crate() {
        assert!(health_check().starts_with("renu-sections-wasm v"));
    }
}
