//! Typed résumé records
//!
//! These are built from a JSON value that has already passed
//! [`validate`](crate::validate::validate). Optional fields stay `Option`
//! here; the renderer decides what an absent value looks like.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::markup;

/// Category used for technical skills written without a `Label:` prefix
pub const OTHER_CATEGORY: &str = "Other";

/// The structured list sections of a résumé
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Education,
    Experience,
    Projects,
    Publications,
}

impl Section {
    /// All sections in validation order
    pub const ALL: [Section; 4] = [
        Section::Education,
        Section::Experience,
        Section::Projects,
        Section::Publications,
    ];

    /// JSON key of the section array
    pub fn key(self) -> &'static str {
        match self {
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Publications => "publications",
        }
    }

    /// Capitalized singular noun used in diagnostics ("Project item 0 ...")
    pub fn item_label(self) -> &'static str {
        match self {
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Projects => "Project",
            Section::Publications => "Publication",
        }
    }

    /// Lowercase singular noun used in diagnostics ("... in project item 0")
    pub fn item_noun(self) -> &'static str {
        match self {
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "project",
            Section::Publications => "publication",
        }
    }

    /// Fields every item must carry, in check order
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Section::Education => &["institution", "location", "graduationDate", "degree"],
            Section::Experience => &["title", "company", "location", "dateRange"],
            Section::Projects => &["name", "dateRange"],
            Section::Publications => &["title", "citation"],
        }
    }

    /// Optional string-list field carried by each item
    pub fn list_field(self) -> &'static str {
        match self {
            Section::Education => "coursework",
            _ => "bullets",
        }
    }

    /// Name of one entry of [`Section::list_field`] in diagnostics
    pub fn list_entry_label(self) -> &'static str {
        match self {
            Section::Education => "Course",
            _ => "Bullet",
        }
    }

    /// Section heading as rendered
    pub fn heading(self) -> &'static str {
        match self {
            Section::Education => "EDUCATION",
            Section::Experience => "EXPERIENCE",
            Section::Projects => "PROJECTS",
            Section::Publications => "PUBLICATIONS",
        }
    }

    /// `id` of the rendered item container
    pub fn container_id(self) -> &'static str {
        match self {
            Section::Education => "educationList",
            Section::Experience => "experienceList",
            Section::Projects => "projectsList",
            Section::Publications => "publicationsList",
        }
    }

    /// CSS class of one rendered item
    pub fn item_class(self) -> &'static str {
        match self {
            Section::Education => "education-item",
            Section::Experience => "experience-item",
            Section::Projects => "project-item",
            Section::Publications => "publication-item",
        }
    }
}

/// A leaf text value.
///
/// Item fields are only checked for presence, so any JSON value may show
/// up here. Null renders empty, other non-strings keep their literal JSON
/// text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text(String);

impl Text {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Value> for Text {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Text::default(),
            other => Text(markup::literal(other).into_owned()),
        }
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text(value.to_string())
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Text::from(&value))
    }
}

/// Root résumé record
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub website: Option<Value>,
    pub technical_skills: Option<Vec<String>>,
    pub education: Option<Vec<Education>>,
    pub experience: Option<Vec<Experience>>,
    pub projects: Option<Vec<Project>>,
    pub publications: Option<Vec<Publication>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: Text,
    pub location: Text,
    pub graduation_date: Text,
    pub degree: Text,
    pub gpa: Option<Value>,
    pub coursework: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: Text,
    pub company: Text,
    pub location: Text,
    pub date_range: Text,
    pub bullets: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: Text,
    pub date_range: Text,
    pub bullets: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub title: Text,
    pub citation: Text,
    pub bullets: Option<Vec<String>>,
}

impl Resume {
    /// Build the typed record from an already validated value
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Resume::deserialize(value)
    }

    /// Website line text, only when it is a non-empty string
    pub fn website(&self) -> Option<&str> {
        match &self.website {
            Some(Value::String(site)) if !site.is_empty() => Some(site),
            _ => None,
        }
    }

    pub fn technical_skills(&self) -> &[String] {
        self.technical_skills.as_deref().unwrap_or(&[])
    }

    pub fn education(&self) -> &[Education] {
        self.education.as_deref().unwrap_or(&[])
    }

    pub fn experience(&self) -> &[Experience] {
        self.experience.as_deref().unwrap_or(&[])
    }

    pub fn projects(&self) -> &[Project] {
        self.projects.as_deref().unwrap_or(&[])
    }

    pub fn publications(&self) -> &[Publication] {
        self.publications.as_deref().unwrap_or(&[])
    }
}

impl Education {
    /// ` | GPA: {gpa}` when the GPA is truthy, inserted literally
    pub fn gpa_suffix(&self) -> Option<String> {
        self.gpa
            .as_ref()
            .filter(|gpa| is_truthy(gpa))
            .map(|gpa| format!(" | GPA: {}", markup::literal(gpa)))
    }

    pub fn coursework(&self) -> &[String] {
        self.coursework.as_deref().unwrap_or(&[])
    }
}

impl Experience {
    pub fn bullets(&self) -> &[String] {
        self.bullets.as_deref().unwrap_or(&[])
    }
}

impl Project {
    pub fn bullets(&self) -> &[String] {
        self.bullets.as_deref().unwrap_or(&[])
    }

    /// First bullet, shown as a subtitle line under the project name
    pub fn subtitle(&self) -> Option<&str> {
        self.bullets().first().map(String::as_str)
    }

    /// Bullets after the subtitle
    pub fn details(&self) -> &[String] {
        self.bullets().get(1..).unwrap_or(&[])
    }
}

impl Publication {
    pub fn bullets(&self) -> &[String] {
        self.bullets.as_deref().unwrap_or(&[])
    }
}

/// One row of the technical skills grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub label: String,
    pub items: Vec<String>,
}

/// Group `"Label: a, b"` skill strings by label, in first-seen order.
///
/// Strings without a colon land unchanged in [`OTHER_CATEGORY`]. A label
/// seen again extends the existing row.
pub fn group_skills(skills: &[String]) -> Vec<SkillCategory> {
    let mut groups: Vec<SkillCategory> = Vec::new();

    for skill in skills {
        let (label, items): (&str, Vec<String>) = match skill.split_once(':') {
            Some((label, rest)) => (
                label.trim(),
                rest.split(',').map(|item| item.trim().to_string()).collect(),
            ),
            None => (OTHER_CATEGORY, vec![skill.clone()]),
        };

        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.items.extend(items),
            None => groups.push(SkillCategory {
                label: label.to_string(),
                items,
            }),
        }
    }

    groups
}

/// Truthiness of a JSON value: null, false, zero and empty values are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_group_skills_labels_and_other() {
        let groups = group_skills(&strings(&["Languages: Go, Rust", "Other thing"]));
        assert_eq!(
            groups,
            vec![
                SkillCategory {
                    label: "Languages".to_string(),
                    items: strings(&["Go", "Rust"]),
                },
                SkillCategory {
                    label: "Other".to_string(),
                    items: strings(&["Other thing"]),
                },
            ]
        );
    }

    #[test]
    fn test_group_skills_extends_repeated_label() {
        let groups = group_skills(&strings(&[
            "Tools: Git",
            "Languages: C",
            "Tools: Docker, Make",
        ]));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Tools");
        assert_eq!(groups[0].items, strings(&["Git", "Docker", "Make"]));
        assert_eq!(groups[1].label, "Languages");
    }

    #[test]
    fn test_group_skills_explicit_other_merges_with_implicit() {
        let groups = group_skills(&strings(&["Soldering", "Other: CI/CD, Agile"]));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items, strings(&["Soldering", "CI/CD", "Agile"]));
    }

    #[test]
    fn test_group_skills_splits_on_first_colon() {
        let groups = group_skills(&strings(&["Protocols: HTTP: 1.1, gRPC"]));
        assert_eq!(groups[0].label, "Protocols");
        assert_eq!(groups[0].items, strings(&["HTTP: 1.1", "gRPC"]));
    }

    #[test]
    fn test_text_coerces_non_strings() {
        assert_eq!(Text::from(&json!("Cornell")).as_str(), "Cornell");
        assert_eq!(Text::from(&json!(2024)).as_str(), "2024");
        assert_eq!(Text::from(&json!(false)).as_str(), "false");
        assert_eq!(Text::from(&json!(null)).as_str(), "");
    }

    #[test]
    fn test_resume_from_value_optional_fields() {
        let value = json!({
            "name": "A",
            "location": "B",
            "phone": "C",
            "email": "D",
            "website": "",
            "education": [{
                "institution": "U",
                "location": "L",
                "graduationDate": 2020,
                "degree": "BS",
                "gpa": 3.9
            }]
        });
        let resume = Resume::from_value(&value).expect("Should convert");
        assert_eq!(resume.website(), None);
        assert!(resume.projects.is_none());
        assert!(resume.projects().is_empty());

        let edu = &resume.education()[0];
        assert_eq!(edu.graduation_date.as_str(), "2020");
        assert_eq!(edu.gpa_suffix(), Some(" | GPA: 3.9".to_string()));
        assert!(edu.coursework().is_empty());
    }

    #[test]
    fn test_gpa_suffix_skips_falsy_values() {
        for gpa in [json!(""), json!(0), json!(null), json!(false)] {
            let edu = Education {
                institution: Text::from("U"),
                location: Text::from("L"),
                graduation_date: Text::from("2020"),
                degree: Text::from("BS"),
                gpa: Some(gpa),
                coursework: None,
            };
            assert_eq!(edu.gpa_suffix(), None);
        }
    }

    #[test]
    fn test_project_subtitle_and_details() {
        let project = Project {
            name: Text::from("P"),
            date_range: Text::from("2024"),
            bullets: Some(strings(&["sub", "item1", "item2"])),
        };
        assert_eq!(project.subtitle(), Some("sub"));
        assert_eq!(project.details(), &strings(&["item1", "item2"])[..]);

        let single = Project {
            bullets: Some(strings(&["only"])),
            ..project.clone()
        };
        assert_eq!(single.subtitle(), Some("only"));
        assert!(single.details().is_empty());

        let bare = Project {
            bullets: None,
            ..project
        };
        assert_eq!(bare.subtitle(), None);
        assert!(bare.details().is_empty());
    }

    #[test]
    fn test_section_table() {
        assert_eq!(Section::Projects.key(), "projects");
        assert_eq!(Section::Projects.item_label(), "Project");
        assert_eq!(Section::Education.list_field(), "coursework");
        assert_eq!(Section::Publications.list_field(), "bullets");
        assert_eq!(Section::Experience.required_fields()[3], "dateRange");
    }
}
