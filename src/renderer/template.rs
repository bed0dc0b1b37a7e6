//! Static document shells
//!
//! The stylesheet and surrounding markup are compiled in so that rendered
//! output is byte-stable across builds.

use super::config::HtmlTemplate;

const PRINT_HEAD: &str = include_str!("templates/print_head.html");
const PRINT_TAIL: &str = include_str!("templates/print_tail.html");
const INTERACTIVE_HEAD: &str = include_str!("templates/interactive_head.html");
const INTERACTIVE_TAIL: &str = include_str!("templates/interactive_tail.html");

/// Fixed markup around the résumé body, plus the per-template details of
/// the body markup itself
#[derive(Debug, Clone, Copy)]
pub(crate) struct Shell {
    pub head: &'static str,
    pub tail: &'static str,
    /// Indentation of the outermost body blocks
    pub indent: usize,
    /// Opening tag of an item heading paragraph
    pub paragraph: &'static str,
    /// Opening tag of a bullet list
    pub list: &'static str,
    /// `line-height` of the website line under the contact details
    pub website_line_height: &'static str,
}

impl Shell {
    pub(crate) fn for_template(template: HtmlTemplate) -> Self {
        match template {
            HtmlTemplate::Print => Shell {
                head: PRINT_HEAD,
                tail: PRINT_TAIL,
                indent: 8,
                paragraph: "<p>",
                list: "<ul>",
                website_line_height: "1",
            },
            HtmlTemplate::Interactive => Shell {
                head: INTERACTIVE_HEAD,
                tail: INTERACTIVE_TAIL,
                indent: 16,
                paragraph: r#"<p style="margin-bottom: 0; margin-top: 0;">"#,
                list: r#"<ul style="margin-top: 0;">"#,
                website_line_height: "1.2",
            },
        }
    }
}
