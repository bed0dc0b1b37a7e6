//! HTML generation from résumé records

use tracing::debug;

use crate::markup::expand;
use crate::model::{group_skills, Education, Experience, Project, Publication, Resume, Section};

use super::template::Shell;
use super::HtmlConfig;

/// Extra indentation per nesting level
const INDENT_STEP: usize = 4;

/// Build the HTML document incrementally.
///
/// Every block starts with an empty line and each line carries its
/// indentation relative to the template's body indent. Text is inserted
/// without escaping.
pub struct HtmlBuilder {
    shell: Shell,
    out: String,
}

impl HtmlBuilder {
    /// Create a builder and emit the document head
    pub fn new(config: &HtmlConfig) -> Self {
        let shell = Shell::for_template(config.template);
        let mut out = String::with_capacity(shell.head.len() + shell.tail.len() + 8 * 1024);
        out.push_str(shell.head);
        Self { shell, out }
    }

    fn block(&mut self) {
        self.out.push('\n');
    }

    fn line(&mut self, depth: usize, text: &str) {
        let width = self.shell.indent + depth * INDENT_STEP;
        self.out.extend(std::iter::repeat(' ').take(width));
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Add the name, contact line and optional website
    pub fn add_header(&mut self, resume: &Resume) {
        let website = match resume.website() {
            Some(site) => format!(
                r#"<p style="margin: 2px 0; font-size: 10pt; line-height: {}">{}</p>"#,
                self.shell.website_line_height,
                expand(site)
            ),
            None => String::new(),
        };

        self.block();
        self.line(0, r#"<div class="header">"#);
        self.line(1, &format!("<h1>{}</h1>", resume.name));
        self.line(1, r#"<p class="contact-info">"#);
        self.line(
            2,
            &format!(
                "<span>{}</span> | <span>{}</span> | <span>{}</span>",
                expand(&resume.location),
                expand(&resume.phone),
                expand(&resume.email)
            ),
        );
        self.line(1, "</p>");
        self.line(1, &website);
        self.line(0, "</div>");
    }

    fn open_section(&mut self, heading: &str, container: &str) {
        self.block();
        self.line(0, r#"<div class="section">"#);
        self.line(1, &format!("<h2>{}</h2>", heading));
        self.line(1, container);
    }

    fn close_section(&mut self) {
        self.block();
        self.line(1, "</div>");
        self.line(0, "</div>");
    }

    fn open_item(&mut self, section: Section) {
        self.block();
        self.line(2, &format!(r#"<div class="{}">"#, section.item_class()));
    }

    fn close_item(&mut self) {
        self.block();
        self.line(2, "</div>");
    }

    /// Open an item heading paragraph with the given content lines
    fn add_item_heading(&mut self, lines: &[String]) {
        let paragraph = self.shell.paragraph;
        self.line(3, paragraph);
        for line in lines {
            self.line(4, line);
        }
        self.line(3, "</p>");
    }

    /// Add a bullet list; empty lists produce nothing
    fn add_list(&mut self, entries: &[String]) {
        if entries.is_empty() {
            return;
        }
        let list = self.shell.list;
        self.block();
        self.line(3, list);
        for entry in entries {
            self.block();
            self.line(4, &format!("<li>{}</li>", expand(entry)));
        }
        self.block();
        self.line(3, "</ul>");
    }

    fn open_list_section(&mut self, section: Section) {
        self.open_section(
            section.heading(),
            &format!(r#"<div id="{}">"#, section.container_id()),
        );
    }

    /// Add the education section
    pub fn add_education(&mut self, items: &[Education]) {
        if items.is_empty() {
            return;
        }
        debug!(items = items.len(), "rendering education");
        self.open_list_section(Section::Education);
        for edu in items {
            self.open_item(Section::Education);
            self.add_item_heading(&[
                format!(
                    "<strong>{}</strong>, {}",
                    expand(edu.institution.as_str()),
                    expand(edu.location.as_str())
                ),
                format!(
                    r#"<span class="date-range">{}</span><br>"#,
                    expand(edu.graduation_date.as_str())
                ),
                format!(
                    "{}{}",
                    expand(edu.degree.as_str()),
                    edu.gpa_suffix().unwrap_or_default()
                ),
            ]);

            let coursework = edu.coursework();
            if !coursework.is_empty() {
                let courses = coursework
                    .iter()
                    .map(|course| expand(course))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.block();
                self.line(3, r#"<p class="coursework">"#);
                self.line(4, &format!("Relevant Coursework: {}", courses));
                self.line(3, "</p>");
            }
            self.close_item();
        }
        self.close_section();
    }

    /// Add the technical skills grid
    pub fn add_skills(&mut self, skills: &[String]) {
        if skills.is_empty() {
            return;
        }
        let groups = group_skills(skills);
        debug!(categories = groups.len(), "rendering technical skills");
        self.open_section(
            "TECHNICAL SKILLS",
            r#"<div id="technicalSkillsList" class="skills-container">"#,
        );
        for group in &groups {
            let items = group
                .items
                .iter()
                .map(|item| expand(item))
                .collect::<Vec<_>>()
                .join(", ");
            self.block();
            self.line(
                2,
                &format!(
                    r#"<div class="skill-category-title">{}:</div>"#,
                    expand(&group.label)
                ),
            );
            self.line(2, &format!(r#"<div class="skill-items">{}</div>"#, items));
        }
        self.close_section();
    }

    /// Add the experience section
    pub fn add_experience(&mut self, items: &[Experience]) {
        if items.is_empty() {
            return;
        }
        debug!(items = items.len(), "rendering experience");
        self.open_list_section(Section::Experience);
        for job in items {
            self.open_item(Section::Experience);
            self.add_item_heading(&[
                format!(
                    r#"<strong>{}</strong>, <span class="job-title">{}</span>, {}"#,
                    expand(job.company.as_str()),
                    expand(job.title.as_str()),
                    expand(job.location.as_str())
                ),
                format!(
                    r#"<span class="date-range">{}</span>"#,
                    expand(job.date_range.as_str())
                ),
            ]);
            self.add_list(job.bullets());
            self.close_item();
        }
        self.close_section();
    }

    /// Add the projects section; the first bullet becomes a subtitle
    pub fn add_projects(&mut self, items: &[Project]) {
        if items.is_empty() {
            return;
        }
        debug!(items = items.len(), "rendering projects");
        self.open_list_section(Section::Projects);
        for project in items {
            self.open_item(Section::Projects);
            self.add_item_heading(&[
                format!(
                    r#"<span class="project-title">{}</span>"#,
                    expand(project.name.as_str())
                ),
                format!(
                    r#"<span class="date-range">{}</span>"#,
                    expand(project.date_range.as_str())
                ),
            ]);
            if let Some(subtitle) = project.subtitle() {
                self.block();
                self.line(
                    3,
                    &format!(r#"<p class="project-subtitle">{}</p>"#, expand(subtitle)),
                );
            }
            self.add_list(project.details());
            self.close_item();
        }
        self.close_section();
    }

    /// Add the publications section
    pub fn add_publications(&mut self, items: &[Publication]) {
        if items.is_empty() {
            return;
        }
        debug!(items = items.len(), "rendering publications");
        self.open_list_section(Section::Publications);
        for publication in items {
            self.open_item(Section::Publications);
            self.add_item_heading(&[format!(
                r#"<span class="publication-title">{}</span>, {}"#,
                expand(publication.title.as_str()),
                expand(publication.citation.as_str())
            )]);
            self.add_list(publication.bullets());
            self.close_item();
        }
        self.close_section();
    }

    /// Emit the closing markup and return the document
    pub fn finish(mut self) -> String {
        self.out.push_str(self.shell.tail);
        self.out
    }
}

/// Render a résumé to a standalone HTML document.
///
/// The output depends only on `resume` and `config`: equal inputs give
/// byte-identical documents.
pub fn render_html(resume: &Resume, config: &HtmlConfig) -> String {
    let mut builder = HtmlBuilder::new(config);
    builder.add_header(resume);
    builder.add_education(resume.education());
    builder.add_skills(resume.technical_skills());
    builder.add_experience(resume.experience());
    builder.add_projects(resume.projects());
    builder.add_publications(resume.publications());
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::HtmlTemplate;
    use serde_json::json;

    fn resume(value: serde_json::Value) -> Resume {
        Resume::from_value(&value).expect("Should convert")
    }

    fn minimal() -> serde_json::Value {
        json!({"name": "A", "location": "B", "phone": "C", "email": "D"})
    }

    #[test]
    fn test_header_layout() {
        let html = render_html(&resume(minimal()), &HtmlConfig::default());
        let expected = concat!(
            "\n",
            "        <div class=\"header\">\n",
            "            <h1>A</h1>\n",
            "            <p class=\"contact-info\">\n",
            "                <span>B</span> | <span>C</span> | <span>D</span>\n",
            "            </p>\n",
            "            \n",
            "        </div>\n",
        );
        assert!(html.contains(expected), "header block missing:\n{}", html);
    }

    #[test]
    fn test_name_is_not_expanded() {
        let mut value = minimal();
        value["name"] = json!("**Jane**");
        value["location"] = json!("**Remote**");
        let html = render_html(&resume(value), &HtmlConfig::default());
        assert!(html.contains("<h1>**Jane**</h1>"));
        assert!(html.contains("<span><strong>Remote</strong></span>"));
    }

    #[test]
    fn test_website_line() {
        let mut value = minimal();
        value["website"] = json!("https://example.com");
        let html = render_html(&resume(value.clone()), &HtmlConfig::default());
        assert!(html.contains(
            r#"            <p style="margin: 2px 0; font-size: 10pt; line-height: 1">https://example.com</p>"#
        ));

        let config = HtmlConfig::new().with_template(HtmlTemplate::Interactive);
        let html = render_html(&resume(value), &config);
        assert!(html.contains(
            r#"                    <p style="margin: 2px 0; font-size: 10pt; line-height: 1.2">https://example.com</p>"#
        ));
    }

    #[test]
    fn test_empty_sections_are_skipped() {
        let mut value = minimal();
        value["education"] = json!([]);
        value["technicalSkills"] = json!([]);
        let html = render_html(&resume(value), &HtmlConfig::default());
        assert!(!html.contains("EDUCATION"));
        assert!(!html.contains("TECHNICAL SKILLS"));
        assert!(!html.contains(r#"class="section""#));
    }

    #[test]
    fn test_education_item_layout() {
        let mut value = minimal();
        value["education"] = json!([{
            "institution": "**State U**",
            "location": "Springfield",
            "graduationDate": "May 2020",
            "degree": "BS Physics",
            "gpa": "3.8",
            "coursework": ["Optics", "**Quantum**"]
        }]);
        let html = render_html(&resume(value), &HtmlConfig::default());
        let expected = concat!(
            "\n",
            "                <div class=\"education-item\">\n",
            "                    <p>\n",
            "                        <strong><strong>State U</strong></strong>, Springfield\n",
            "                        <span class=\"date-range\">May 2020</span><br>\n",
            "                        BS Physics | GPA: 3.8\n",
            "                    </p>\n",
            "\n",
            "                    <p class=\"coursework\">\n",
            "                        Relevant Coursework: Optics, <strong>Quantum</strong>\n",
            "                    </p>\n",
            "\n",
            "                </div>\n",
        );
        assert!(html.contains(expected), "education block missing:\n{}", html);
    }

    #[test]
    fn test_skills_grid() {
        let mut value = minimal();
        value["technicalSkills"] = json!(["Languages: Go, Rust", "Other thing"]);
        let html = render_html(&resume(value), &HtmlConfig::default());
        let expected = concat!(
            "\n",
            "                <div class=\"skill-category-title\">Languages:</div>\n",
            "                <div class=\"skill-items\">Go, Rust</div>\n",
            "\n",
            "                <div class=\"skill-category-title\">Other:</div>\n",
            "                <div class=\"skill-items\">Other thing</div>\n",
        );
        assert!(html.contains(expected), "skills block missing:\n{}", html);
    }

    #[test]
    fn test_experience_bullets() {
        let mut value = minimal();
        value["experience"] = json!([{
            "title": "Engineer",
            "company": "Acme",
            "location": "Remote",
            "dateRange": "2021 - 2023",
            "bullets": ["Cut latency by **40%**"]
        }]);
        let html = render_html(&resume(value), &HtmlConfig::default());
        assert!(html.contains(
            r#"<strong>Acme</strong>, <span class="job-title">Engineer</span>, Remote"#
        ));
        let expected = concat!(
            "\n",
            "                    <ul>\n",
            "\n",
            "                        <li>Cut latency by <strong>40%</strong></li>\n",
            "\n",
            "                    </ul>\n",
        );
        assert!(html.contains(expected), "bullet list missing:\n{}", html);
    }

    #[test]
    fn test_project_subtitle_without_list() {
        let mut value = minimal();
        value["projects"] = json!([{"name": "P", "dateRange": "2024", "bullets": ["only"]}]);
        let html = render_html(&resume(value), &HtmlConfig::default());
        assert!(html.contains(r#"<p class="project-subtitle">only</p>"#));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_publication_line() {
        let mut value = minimal();
        value["publications"] = json!([{"title": "**Paper**", "citation": "Journal, 2022"}]);
        let html = render_html(&resume(value), &HtmlConfig::default());
        assert!(html.contains(
            r#"<span class="publication-title"><strong>Paper</strong></span>, Journal, 2022"#
        ));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_interactive_item_markup() {
        let mut value = minimal();
        value["experience"] = json!([{
            "title": "T", "company": "C", "location": "L", "dateRange": "D",
            "bullets": ["b"]
        }]);
        let config = HtmlConfig::new().with_template(HtmlTemplate::Interactive);
        let html = render_html(&resume(value), &config);
        assert!(html.contains(
            "                            <p style=\"margin-bottom: 0; margin-top: 0;\">\n"
        ));
        assert!(html.contains("                            <ul style=\"margin-top: 0;\">\n"));
        assert!(html.contains("                                <li>b</li>\n"));
    }
}
