use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// A resume as described by the input JSON. Every field is optional;
/// the renderer substitutes placeholders where structure demands text.
#[derive(Debug, Default, Deserialize)]
pub struct ResumeData {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub education: Vec<Education>,
    pub skills: Option<Skills>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub additional_sections: Vec<Section>,
}

/// JSON `null` for a list field reads as an empty list, like an absent key.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Experience {
    pub position: Option<String>,
    pub company: Option<String>,
    pub period: Option<String>,
    pub description: Option<Description>,
}

/// Free text or a bullet list; the JSON may use either shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Bullets(Vec<String>),
}

impl Description {
    pub fn is_empty(&self) -> bool {
        match self {
            Description::Text(text) => text.is_empty(),
            Description::Bullets(items) => items.is_empty(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Education {
    pub degree: Option<String>,
    pub school: Option<String>,
    pub period: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Skills {
    Inline(String),
    List(Vec<String>),
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        match self {
            Skills::Inline(text) => text.is_empty(),
            Skills::List(items) => items.is_empty(),
        }
    }
}

/// An extra section appended after the fixed ones, e.g. certifications
/// or languages.
#[derive(Debug, Default, Deserialize)]
pub struct Section {
    pub title: Option<String>,
    pub content: Option<SectionContent>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SectionContent {
    Text(String),
    Items(Vec<SectionItem>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SectionItem {
    Pair(KeyValue),
    Line(String),
}

#[derive(Debug, Default, Deserialize)]
pub struct KeyValue {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// A field counts as present only when it holds non-empty text.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|text| !text.is_empty())
}

pub(crate) fn load(path: &Path) -> Result<ResumeData, Error> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(Error::Io(e)),
    };
    Ok(serde_json::from_str(&raw)?)
}
