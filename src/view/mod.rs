//! Landing page view.
//!
//! `LandingPage` owns the active language and is changed only through
//! [`Msg`]. Rendering reads the state, looks up the copy bundle and the
//! encoded greeting, and hands them to the section components as plain
//! values.

mod components;
pub mod html;
mod page;

pub use components::BRAND;
pub use page::{LandingPage, Msg};
