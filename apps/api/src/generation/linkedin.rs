//! LinkedIn connection-note prompt assembly. Pure: no I/O.

use crate::generation::prompts::{LINKEDIN_SYSTEM, LINKEDIN_USER_TEMPLATE};
use crate::generation::recipient::{describe_recipient, PromptPair, RecipientDetail};
use crate::models::{Lead, UserSettings};

/// Builds the LinkedIn prompts: recipient details plus every configured
/// template, numbered in order.
pub fn build_linkedin_prompts(lead: &Lead, settings: &UserSettings) -> PromptPair {
    let templates = settings
        .linkedin_templates
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. {}", i + 1, t))
        .collect::<Vec<_>>()
        .join("\n");

    let user = LINKEDIN_USER_TEMPLATE
        .replace("{templates}", &templates)
        .replace(
            "{recipient}",
            &describe_recipient(lead, RecipientDetail::WithoutLocation),
        );

    PromptPair {
        system: LINKEDIN_SYSTEM.to_string(),
        user,
    }
}
