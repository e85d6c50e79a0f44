//! Email prompt assembly and post-processing. Pure: no I/O.

use serde::{Deserialize, Serialize};

use crate::generation::prompts::{
    EMAIL_BLURB_DIRECTIVE, EMAIL_BLURB_SECTION, EMAIL_NOTES_SECTION, EMAIL_SYSTEM_TEMPLATE,
    EMAIL_USER_TEMPLATE,
};
use crate::generation::recipient::{describe_recipient, PromptPair, RecipientDetail};
use crate::models::{Lead, UserSettings};

/// A generated email. Both parts stay editable; nothing re-checks them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

/// True when the notes mention "blurb" in any casing.
pub fn wants_blurb(notes: &str) -> bool {
    notes.to_lowercase().contains("blurb")
}

/// Builds the email prompts from the lead, the sender's settings and the notes.
pub fn build_email_prompts(lead: &Lead, settings: &UserSettings, notes: &str) -> PromptPair {
    let include_blurb = wants_blurb(notes);

    let mut system = EMAIL_SYSTEM_TEMPLATE.replace("{template}", &settings.template);
    if include_blurb {
        system.push_str("\n\n");
        system.push_str(EMAIL_BLURB_DIRECTIVE);
    }

    let mut user = EMAIL_USER_TEMPLATE
        .replace("{sender_name}", &settings.name)
        .replace("{sender_title}", &settings.title)
        .replace(
            "{recipient}",
            &describe_recipient(lead, RecipientDetail::WithLocation),
        );
    if !notes.is_empty() {
        user.push_str("\n\n");
        user.push_str(&EMAIL_NOTES_SECTION.replace("{notes}", notes));
    }
    if include_blurb {
        user.push_str("\n\n");
        user.push_str(&EMAIL_BLURB_SECTION.replace("{blurb}", &settings.blurb));
    }

    PromptPair { system, user }
}

/// `"{lead first name} <> {sender name}"`.
pub fn email_subject(lead: &Lead, settings: &UserSettings) -> String {
    format!("{} <> {}", lead.first_name(), settings.name)
}
