use crate::generation::prompts::UNKNOWN_FIELD;
use crate::models::lead::{non_blank, Lead};

/// A system + user prompt pair, ready for one completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Which recipient lines a prompt wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientDetail {
    /// Name, title, company, location, department, seniority.
    WithLocation,
    /// Same, minus location.
    WithoutLocation,
}

/// Renders the lead as `- Label: value` lines. Empty fields read "Not specified".
pub fn describe_recipient(lead: &Lead, detail: RecipientDetail) -> String {
    let name = lead.full_name();
    let location = lead.location();

    let mut lines = vec![
        field("Name", non_empty(&name)),
        field("Title", non_blank(&lead.title)),
        field("Company", non_blank(&lead.company_name)),
    ];
    if detail == RecipientDetail::WithLocation {
        lines.push(field("Location", non_empty(&location)));
    }
    lines.push(field("Department", non_blank(&lead.departments)));
    lines.push(field("Seniority", non_blank(&lead.seniority)));

    lines.join("\n")
}

fn field(label: &str, value: Option<&str>) -> String {
    format!("- {label}: {}", value.unwrap_or(UNKNOWN_FIELD))
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.is_empty())
}
