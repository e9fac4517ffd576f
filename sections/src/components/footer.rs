//! Footer: support column, contact form, link columns, social icons.
//!
//! The form carries its mailto template as data attributes; the wasm
//! client reads them back on submit.

use leptos::prelude::*;

use super::{Icon, Picture};
use crate::types::{FooterProps, Link};

/// DOM id of the contact form in a footer without an id.
pub const CONTACT_FORM_ID: &str = "contact_form";

/// Matches every rendered contact form, whatever its id.
pub const CONTACT_FORM_SELECTOR: &str = "form[data-mailto-recipient]";

/// DOM id of the contact form inside the footer `section_id`.
pub fn contact_form_id(section_id: Option<&str>) -> String {
    match section_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => format!("{id}-form"),
        None => CONTACT_FORM_ID.to_string(),
    }
}

/// Site footer.
#[component]
pub fn FooterSection(props: FooterProps) -> impl IntoView {
    let FooterProps {
        id,
        footer_logo,
        support_title,
        support_email,
        support_phone,
        contact_title,
        contact_email,
        sponsor_title,
        sponsor_items,
        links_title,
        links_items,
        form_title,
        form_description,
        form,
        copyright,
        social,
    } = props;

    let form_id = contact_form_id(id.as_deref());
    let support_mailto = format!("mailto:{support_email}");
    let support_tel = format!("tel:{support_phone}");
    let contact_mailto = format!("mailto:{contact_email}");

    let socials = social
        .into_iter()
        .map(|item| {
            view! {
                <a href=item.href aria-label=item.network.label() target="_blank" rel="noopener noreferrer">
                    <Icon path=item.network.path() size="24" />
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer id=id class="site-footer">
            <div class="container site-footer__grid">
                <div>
                    <h3>{support_title}</h3>
                    <p>"Entre em contato por e-mail via"</p>
                    <a href=support_mailto>{support_email}</a>
                    <p>"ou por telefone via"</p>
                    <a href=support_tel>{support_phone}</a>
                </div>
                <div>
                    <h3>{form_title}</h3>
                    <p>{form_description}</p>
                    <form
                        id=form_id
                        class="contact-form"
                        data-mailto-recipient=form.mailto.recipient
                        data-mailto-subject=form.mailto.subject
                        data-submit-action=form.submit_action.as_str()
                    >
                        <input type="text" name="first_name" placeholder="Primeiro Nome" required=true />
                        <input type="text" name="last_name" placeholder="Sobrenome" />
                        <input type="tel" name="phone" placeholder="Telefone" required=true />
                        <input type="email" name="email" placeholder="E-mail" required=true />
                        <textarea
                            class="contact-form__wide"
                            name="message"
                            placeholder="Mensagem"
                            rows="4"
                            required=true
                        ></textarea>
                        <button type="submit" class="btn btn--solid contact-form__wide">"Enviar"</button>
                    </form>
                </div>
            </div>

            <div class="container">
                <div style="width: 8rem; margin: 4rem auto 3rem">
                    <Picture
                        src=footer_logo.src
                        alt=footer_logo.alt
                        width=footer_logo.width.unwrap_or(128)
                    />
                </div>
                <div class="site-footer__columns">
                    <div>
                        <h3>{contact_title}</h3>
                        <p>"Email: " <a href=contact_mailto>{contact_email}</a></p>
                    </div>
                    <LinkColumn title=sponsor_title links=sponsor_items />
                    <LinkColumn title=links_title links=links_items />
                </div>
                <div class="site-footer__bottom">
                    <span>{copyright}</span>
                    <div class="social">{socials}</div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(title: String, links: Vec<Link>) -> impl IntoView {
    view! {
        <div>
            <h3>{title}</h3>
            <ul>
                {links
                    .into_iter()
                    .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
