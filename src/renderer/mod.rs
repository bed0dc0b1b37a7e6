//! HTML renderer for validated résumés
//!
//! This module takes a [`Resume`](crate::model::Resume) and produces a
//! complete standalone HTML document inside one of the compiled-in
//! templates.

pub mod config;
pub mod html;
mod template;

pub use config::{HtmlConfig, HtmlTemplate};
pub use html::{render_html, HtmlBuilder};
