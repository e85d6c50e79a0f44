use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the leads table. Column names are the spreadsheet headers the
/// table was imported from, so both serde and sqlx rename every field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Lead {
    #[serde(rename = "First Name", default)]
    #[sqlx(rename = "First Name")]
    pub first_name: Option<String>,
    #[serde(rename = "Last Name", default)]
    #[sqlx(rename = "Last Name")]
    pub last_name: Option<String>,
    #[serde(rename = "Title", default)]
    #[sqlx(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Company Name", default)]
    #[sqlx(rename = "Company Name")]
    pub company_name: Option<String>,
    #[serde(rename = "Linkedin Url", default)]
    #[sqlx(rename = "Linkedin Url")]
    pub linkedin_url: Option<String>,
    #[serde(rename = "Email", default)]
    #[sqlx(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Seniority", default)]
    #[sqlx(rename = "Seniority")]
    pub seniority: Option<String>,
    #[serde(rename = "Departments", default)]
    #[sqlx(rename = "Departments")]
    pub departments: Option<String>,
    #[serde(rename = "Phone", default)]
    #[sqlx(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "City", default)]
    #[sqlx(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State", default)]
    #[sqlx(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "Country", default)]
    #[sqlx(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Secondary Email", default)]
    #[sqlx(rename = "Secondary Email")]
    pub secondary_email: Option<String>,
}

/// Columns selected from the leads table, in struct order.
pub const LEAD_COLUMNS: [&str; 13] = [
    "First Name",
    "Last Name",
    "Title",
    "Company Name",
    "Linkedin Url",
    "Email",
    "Seniority",
    "Departments",
    "Phone",
    "City",
    "State",
    "Country",
    "Secondary Email",
];

impl Lead {
    pub fn first_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or_default()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_deref().unwrap_or_default()
    }

    /// `"First Last"`, trimmed when either half is missing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
            .trim()
            .to_string()
    }

    /// City, state and country joined with `", "`, skipping blanks.
    pub fn location(&self) -> String {
        [&self.city, &self.state, &self.country]
            .into_iter()
            .filter_map(|part| non_blank(part))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Two rows are the same lead when first name, last name and email match
    /// exactly. The table has no reliable key, so this is a policy rather than
    /// an identity.
    pub fn same_identity(&self, other: &Lead) -> bool {
        self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.email == other.email
    }
}

/// Returns the trimmed value unless it is missing or blank.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(first: &str, last: &str, email: &str) -> Lead {
        Lead {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            email: Some(email.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_deserializes_table_column_names() {
        let json = r#"{
            "First Name": "Ada",
            "Last Name": "Lovelace",
            "Company Name": "Analytic",
            "Departments": "Engineering",
            "Secondary Email": null
        }"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.first_name.as_deref(), Some("Ada"));
        assert_eq!(lead.company_name.as_deref(), Some("Analytic"));
        assert_eq!(lead.departments.as_deref(), Some("Engineering"));
        assert!(lead.secondary_email.is_none());
        assert!(lead.title.is_none());
    }

    #[test]
    fn test_serializes_with_table_column_names() {
        let value = serde_json::to_value(lead("Ada", "Lovelace", "ada@example.com")).unwrap();
        assert_eq!(value["First Name"], "Ada");
        assert_eq!(value["Email"], "ada@example.com");
    }

    #[test]
    fn test_full_name_handles_missing_last_name() {
        let mut l = lead("Ada", "", "");
        l.last_name = None;
        assert_eq!(l.full_name(), "Ada");
        assert_eq!(lead("Ada", "Lovelace", "").full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_location_skips_blank_parts() {
        let l = Lead {
            city: Some("London".into()),
            state: Some("  ".into()),
            country: Some("UK".into()),
            ..Default::default()
        };
        assert_eq!(l.location(), "London, UK");
        assert_eq!(Lead::default().location(), "");
    }

    #[test]
    fn test_same_identity_ignores_other_fields() {
        let a = lead("Ada", "Lovelace", "ada@example.com");
        let mut b = a.clone();
        b.title = Some("Countess".into());
        assert!(a.same_identity(&b));
    }

    #[test]
    fn test_same_identity_is_case_sensitive() {
        let a = lead("Ada", "Lovelace", "ada@example.com");
        let b = lead("Ada", "Lovelace", "ADA@example.com");
        assert!(!a.same_identity(&b));
    }
}
