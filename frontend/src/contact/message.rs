use crate::config;

use super::fields::FormFields;

const GREETING: &str = "Olá! Vim pelo site e gostaria de mais informações.";

/// Text that lands in the WhatsApp chat box once the deep link opens.
pub fn compose(fields: &FormFields) -> String {
    format!(
        "{GREETING}\n\n*Nome:* {}\n*Email:* {}\n*Telefone:* {}\n*Mensagem:* {}",
        fields.name, fields.email, fields.phone, fields.message
    )
    .trim()
    .to_string()
}

/// `https://api.whatsapp.com/send?phone=...&text=...` for the given chat text.
pub fn deep_link(text: &str) -> String {
    format!(
        "{}?phone={}&text={}",
        config::DEEP_LINK_BASE,
        urlencoding::encode(config::DESTINATION_PHONE),
        urlencoding::encode(text)
    )
}
