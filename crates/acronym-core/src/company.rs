// Company records and per-letter assignment entries

use serde::{Deserialize, Serialize};

/// Logo reference carried by every synthesized placeholder company.
pub const PLACEHOLDER_LOGO: &str = "placeholder.svg";

/// A company that can stand in for a letter.
///
/// `name` is the unique identifier used for reuse tracking; `logo` is an
/// opaque reference to an image asset (usually a file name such as
/// `"apple.svg"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub logo: String,
}

impl Company {
    /// Create a new company record.
    pub fn new(name: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo: logo.into(),
        }
    }

    /// Synthesize the placeholder company for a letter: `"<letter>-Company"`.
    pub fn placeholder(letter: char) -> Self {
        Self {
            name: format!("{letter}-Company"),
            logo: PLACEHOLDER_LOGO.to_string(),
        }
    }
}

/// One letter of the rendered word and the company chosen for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentEntry {
    /// The normalized (uppercase) letter.
    pub letter: char,
    /// The selected company, or a synthesized placeholder.
    pub company: Company,
    /// `true` when no unused candidate was left for this occurrence.
    pub is_placeholder: bool,
}

impl AssignmentEntry {
    /// Entry backed by a real candidate company.
    pub fn assigned(letter: char, company: Company) -> Self {
        Self {
            letter,
            company,
            is_placeholder: false,
        }
    }

    /// Entry backed by the synthesized `"<letter>-Company"` placeholder.
    pub fn placeholder(letter: char) -> Self {
        Self {
            letter,
            company: Company::placeholder(letter),
            is_placeholder: true,
        }
    }

    /// Company name, or `None` for placeholders.
    pub fn company_name(&self) -> Option<&str> {
        if self.is_placeholder {
            None
        } else {
            Some(self.company.name.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_company_name() {
        let c = Company::placeholder('A');
        assert_eq!(c.name, "A-Company");
        assert_eq!(c.logo, PLACEHOLDER_LOGO);
    }

    #[test]
    fn placeholder_entry_has_no_company_name() {
        let e = AssignmentEntry::placeholder('Q');
        assert!(e.is_placeholder);
        assert_eq!(e.letter, 'Q');
        assert_eq!(e.company_name(), None);
    }

    #[test]
    fn assigned_entry_exposes_name() {
        let e = AssignmentEntry::assigned('G', Company::new("Google", "google.svg"));
        assert!(!e.is_placeholder);
        assert_eq!(e.company_name(), Some("Google"));
    }

    #[test]
    fn entry_serializes_camel_case() {
        let e = AssignmentEntry::assigned('M', Company::new("Meta", "meta.svg"));
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["letter"], "M");
        assert_eq!(json["company"]["name"], "Meta");
        assert_eq!(json["company"]["logo"], "meta.svg");
        assert_eq!(json["isPlaceholder"], false);
    }

    #[test]
    fn company_deserializes_from_table_record() {
        let c: Company = serde_json::from_str(r#"{"name":"Nvidia","logo":"nvidia.svg"}"#).unwrap();
        assert_eq!(c, Company::new("Nvidia", "nvidia.svg"));
    }
}
