//! Contact form to `mailto:` link.
//!
//! The footer form never talks to a server. On submit the client collects
//! the five fields, encodes them and hands a single `mailto:` URI to the
//! visitor's mail client (or just logs it, see [`SubmitAction`]).

use serde::{Deserialize, Serialize};

/// Default recipient of the contact form.
pub const DEFAULT_RECIPIENT: &str = "contato@renuenergia.com.br";

/// Default subject line of the contact form.
pub const DEFAULT_SUBJECT: &str = "Contato do site via formulário";

/// What the client does with the computed link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitAction {
    /// Write the link to the browser console only
    #[default]
    Log,
    /// Point `window.location` at the link
    Navigate,
}

impl SubmitAction {
    /// Attribute value used in the rendered form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Navigate => "navigate",
        }
    }

    /// Inverse of [`SubmitAction::as_str`]; unknown values fall back to `Log`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "navigate" => Self::Navigate,
            _ => Self::Log,
        }
    }
}

/// Values typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// "Primeiro Nome"
    pub first_name: String,
    /// "Sobrenome"
    pub last_name: String,
    /// "Telefone"
    pub phone: String,
    /// "E-mail"
    pub email: String,
    /// "Mensagem"
    pub message: String,
}

impl ContactSubmission {
    /// Build from the form fields in document order:
    /// first name, last name, phone, email, message.
    ///
    /// Values are trimmed; missing trailing fields are empty.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Self {
        let field = |i: usize| {
            fields
                .get(i)
                .map(|s| s.as_ref().trim().to_string())
                .unwrap_or_default()
        };
        Self {
            first_name: field(0),
            last_name: field(1),
            phone: field(2),
            email: field(3),
            message: field(4),
        }
    }
}

/// Recipient and subject of the generated link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailtoTemplate {
    /// Address the link is sent to
    pub recipient: String,
    /// Subject line, encoded when the link is built
    pub subject: String,
}

impl Default for MailtoTemplate {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }
}

impl MailtoTemplate {
    /// Compose the `mailto:` URI for a submission.
    ///
    /// Each value is percent-encoded on its own; the labels and the `%0A`
    /// line breaks between them are fixed.
    pub fn build(&self, submission: &ContactSubmission) -> String {
        let enc = |s: &str| urlencoding::encode(s).into_owned();

        let full_name = format!(
            "{}%20{}",
            enc(&submission.first_name),
            enc(&submission.last_name)
        );

        format!(
            "mailto:{recipient}?subject={subject}&body=Nome:%20{full_name}%0ATelefone:%20{phone}%0AEmail:%20{email}%0AMensagem:%20{message}",
            recipient = self.recipient.trim(),
            subject = enc(&self.subject),
            phone = enc(&submission.phone),
            email = enc(&submission.email),
            message = enc(&submission.message),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_link_from_form_fields() {
        let submission =
            ContactSubmission::from_fields(&["Ana", "Silva", "11999999999", "ana@x.com", "Olá"]);
        let link = MailtoTemplate::default().build(&submission);

        assert!(link.starts_with("mailto:contato@renuenergia.com.br?"));
        assert!(link.contains("subject=Contato%20do%20site%20via%20formul%C3%A1rio"));
        assert!(link.contains("Nome:%20Ana%20Silva"));
        assert_eq!(
            link,
            "mailto:contato@renuenergia.com.br?subject=Contato%20do%20site%20via%20formul%C3%A1rio\
             &body=Nome:%20Ana%20Silva%0ATelefone:%2011999999999%0AEmail:%20ana%40x.com%0AMensagem:%20Ol%C3%A1"
        );
    }

    #[test]
    fn fields_are_trimmed_and_missing_ones_empty() {
        let submission = ContactSubmission::from_fields(&["  Ana ", "Silva\n"]);
        assert_eq!(submission.first_name, "Ana");
        assert_eq!(submission.last_name, "Silva");
        assert_eq!(submission.message, "");

        let link = MailtoTemplate::default().build(&submission);
        assert!(link.ends_with("Mensagem:%20"));
    }

    #[test]
    fn user_input_cannot_inject_parameters() {
        let submission = ContactSubmission::from_fields(&[
            "Ana&cc=spam@x.com",
            "",
            "",
            "",
            "linha 1\nlinha 2",
        ]);
        let link = MailtoTemplate::default().build(&submission);
        assert!(!link.contains("&cc="));
        assert!(link.contains("Ana%26cc%3Dspam%40x.com"));
        assert!(link.contains("linha%201%0Alinha%202"));
    }

    #[test]
    fn custom_template() {
        let template = MailtoTemplate {
            recipient: "vendas@renuenergia.com.br".into(),
            subject: "Orçamento".into(),
        };
        let link = template.build(&ContactSubmission::default());
        assert!(link.starts_with("mailto:vendas@renuenergia.com.br?subject=Or%C3%A7amento&body="));
    }

    #[test]
    fn submit_action_round_trips_through_attribute() {
        assert_eq!(SubmitAction::parse(SubmitAction::Navigate.as_str()), SubmitAction::Navigate);
        assert_eq!(SubmitAction::parse("anything"), SubmitAction::Log);
    }
}
