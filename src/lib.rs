pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod events;
pub mod form;
pub mod theme;
pub mod ui;

pub use app::App;
pub use form::{ContactForm, FormField};
