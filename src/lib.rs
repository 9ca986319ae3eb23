//! EM SERVICES landing page.
//!
//! A trilingual (English / Portuguese / Spanish) brochure page whose
//! call-to-action links open WhatsApp chats with a greeting pre-filled in
//! the visitor's language. Pages are rendered once and then served over HTTP
//! or exported as static files.

pub mod config;
pub mod export;
pub mod i18n;
pub mod logging;
pub mod server;
pub mod site;
pub mod view;
pub mod whatsapp;
