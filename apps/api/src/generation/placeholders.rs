//! Local placeholder substitution: renders templates against a lead without
//! calling the model. Used for previews.

use serde::Serialize;

use crate::models::lead::{non_blank, Lead};
use crate::models::UserSettings;

/// Templates rendered for one lead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplatePreview {
    pub subject: String,
    pub body: String,
    pub linkedin_messages: Vec<String>,
}

/// Replaces the lead placeholders in `template`.
///
/// `{title}` and `{company}` fall back to "your role" / "your company"; the
/// rest become empty when the lead has no value. Unknown placeholders such as
/// `{industry}` are left in place.
pub fn render_template(template: &str, lead: &Lead) -> String {
    let or = |value: &Option<String>, fallback: &'static str| {
        non_blank(value).unwrap_or(fallback).to_string()
    };

    template
        .replace("{firstName}", lead.first_name())
        .replace("{lastName}", lead.last_name())
        .replace("{title}", &or(&lead.title, "your role"))
        .replace("{company}", &or(&lead.company_name, "your company"))
        .replace("{city}", &or(&lead.city, ""))
        .replace("{state}", &or(&lead.state, ""))
        .replace("{department}", &or(&lead.departments, ""))
}

/// Renders the email template and every LinkedIn template for `lead`.
pub fn preview(lead: &Lead, settings: &UserSettings) -> TemplatePreview {
    TemplatePreview {
        subject: format!("Introduction - {} {}", lead.first_name(), lead.last_name()),
        body: render_template(&settings.template, lead),
        linkedin_messages: settings
            .linkedin_templates
            .iter()
            .map(|t| render_template(t, lead))
            .collect(),
    }
}
