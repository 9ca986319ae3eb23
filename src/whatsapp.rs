use crate::i18n::Language;

/// Base URL of WhatsApp's click-to-chat links
pub const WA_ME_BASE: &str = "https://wa.me";

/// One of the two phone numbers the call-to-action links open a chat with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTarget {
    /// (321) number, linked from the primary call-to-action
    Primary,
    /// (407) number, linked from the secondary call-to-action
    Secondary,
}

impl ContactTarget {
    pub const ALL: [ContactTarget; 2] = [ContactTarget::Primary, ContactTarget::Secondary];

    /// Phone number in international format without `+`, as wa.me expects it
    pub fn phone_id(self) -> &'static str {
        match self {
            ContactTarget::Primary => "13212403690",
            ContactTarget::Secondary => "14079639347",
        }
    }

    /// Chat URL without a pre-filled message
    pub fn base_url(self) -> String {
        format!("{}/{}", WA_ME_BASE, self.phone_id())
    }
}

/// Greeting pre-filled in the chat compose box, in the page's language
pub fn initial_message(language: Language) -> &'static str {
    match language {
        Language::En => "Hello! I came from EM SERVICES website. I’d like assistance.",
        Language::Pt => "Olá! Vim pelo site da EM SERVICES. Gostaria de atendimento.",
        Language::Es => "¡Hola! Vengo del sitio de EM SERVICES. Me gustaría atención.",
    }
}

/// Greeting percent-encoded for a URL query component.
///
/// Everything outside `A-Z a-z 0-9 - _ . ~` is escaped as UTF-8 bytes, so
/// spaces, `!`, typographic apostrophes and accented letters all survive the
/// trip through the chat app's URL handler.
pub fn encoded_message(language: Language) -> String {
    urlencoding::encode(initial_message(language)).into_owned()
}

/// Click-to-chat link for a contact with the greeting for `language` pre-filled
pub fn chat_link(target: ContactTarget, language: Language) -> String {
    encoded_link(target, &encoded_message(language))
}

/// Click-to-chat link pre-filling an arbitrary message
pub fn message_link(target: ContactTarget, message: &str) -> String {
    encoded_link(target, &urlencoding::encode(message))
}

/// Click-to-chat link from a message that is already percent-encoded
pub fn encoded_link(target: ContactTarget, encoded_text: &str) -> String {
    format!("{}?text={}", target.base_url(), encoded_text)
}
