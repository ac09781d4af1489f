//! Portfolio content - the view model.
//!
//! Immutable data consumed only for interpolation: parsed once at startup
//! from TOML (a compiled-in default or a user file), validated, then never
//! touched again. No logic lives here beyond loading and invariant checks.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// The compiled-in default document.
const DEFAULT_CONTENT: &str = include_str!("default.toml");

// =============================================================================
// Document types
// =============================================================================

/// The whole portfolio document.
#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    /// Typing-banner phrases; must be non-empty (validated on load).
    pub phrases: Vec<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub resume: Vec<ResumeEntry>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    pub contact: Contact,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    pub email: String,
    pub bio: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 0-100; drives the skill-bar fill at reveal time.
    pub proficiency: u8,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    pub tagline: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeEntry {
    pub period: String,
    pub title: String,
    pub org: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub heading: String,
    #[serde(default)]
    pub blurb: String,
}

// =============================================================================
// Loading
// =============================================================================

impl Portfolio {
    /// The compiled-in default document.
    pub fn embedded() -> Self {
        // The default document ships inside the binary; a parse failure here
        // is a build defect, caught by tests.
        Self::from_toml(DEFAULT_CONTENT).expect("embedded portfolio content is valid")
    }

    /// Load and validate a document from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::ContentRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let doc: Portfolio = toml::from_str(raw)?;
        doc.validate()?;
        Ok(doc)
    }

    fn validate(&self) -> Result<()> {
        if self.phrases.is_empty() {
            return Err(Error::EmptyPhraseSequence);
        }
        for skill in &self.skills {
            if skill.proficiency > 100 {
                return Err(Error::ContentInvalid(format!(
                    "skill {:?} has proficiency {} (max 100)",
                    skill.name, skill.proficiency
                )));
            }
        }
        if self.profile.name.trim().is_empty() {
            return Err(Error::ContentInvalid("profile.name is empty".into()));
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_content_is_valid() {
        let doc = Portfolio::embedded();
        assert!(!doc.phrases.is_empty());
        assert!(!doc.skills.is_empty());
        assert!(!doc.projects.is_empty());
        assert_eq!(doc.profile.name, "Alex Ferreira");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DEFAULT_CONTENT.as_bytes()).unwrap();

        let doc = Portfolio::load(file.path()).unwrap();
        assert_eq!(doc.profile.name, Portfolio::embedded().profile.name);
    }

    #[test]
    fn test_missing_file_is_content_read_error() {
        let err = Portfolio::load(Path::new("/nonexistent/portfolio.toml")).unwrap_err();
        assert!(matches!(err, Error::ContentRead { .. }));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = Portfolio::from_toml("not [valid toml").unwrap_err();
        assert!(matches!(err, Error::ContentParse(_)));
    }

    #[test]
    fn test_empty_phrases_rejected() {
        let raw = DEFAULT_CONTENT.replace(
            "phrases = [
    \"I design *storage engines*.\",
    \"I debug distributed systems.\",
    \"I write tools people actually use.\",
    \"I make terminals do *too much*.\",
]",
            "phrases = []",
        );
        assert!(raw.contains("phrases = []"), "replacement must apply");
        let err = Portfolio::from_toml(&raw).unwrap_err();
        assert!(matches!(err, Error::EmptyPhraseSequence));
    }

    #[test]
    fn test_overlarge_proficiency_rejected() {
        let raw = DEFAULT_CONTENT.replace("proficiency = 92", "proficiency = 101");
        let err = Portfolio::from_toml(&raw).unwrap_err();
        assert!(matches!(err, Error::ContentInvalid(_)));
    }
}
