// All LLM prompt text for the Generation module.
// Builders in email.rs / linkedin.rs fill these with `.replace` and append the
// optional sections.

/// Sampling temperature for every generation call.
pub const GENERATION_TEMPERATURE: f32 = 0.7;

/// Email system prompt. Replace `{template}` before sending.
pub const EMAIL_SYSTEM_TEMPLATE: &str = r#"You write short, personalized cold outreach emails on behalf of the sender.

Follow this email template. Keep its structure and wording, replace {firstName} with the recipient's first name, and turn any other text in curly braces into content that fits the recipient:

{template}

Keep the email short and simple: plain language, no buzzwords, no more than a few sentences beyond the template.
Return only the email body. Do not include a subject line."#;

/// Appended to the email system prompt when the notes ask for the blurb.
pub const EMAIL_BLURB_DIRECTIVE: &str = "The sender asked for the company blurb. Include the blurb provided in the user message where the template indicates, rendered in italics with *asterisks* around the whole blurb.";

/// Email user prompt. Replace: {recipient}, {sender_name}, {sender_title}.
/// The notes and blurb sections are appended only when they apply.
pub const EMAIL_USER_TEMPLATE: &str = r#"Write an email to this person.

RECIPIENT:
{recipient}

SENDER:
- Name: {sender_name}
- Title: {sender_title}"#;

/// Notes section of the email user prompt. Replace `{notes}`.
pub const EMAIL_NOTES_SECTION: &str = r#"NOTES FROM THE SENDER (follow these):
{notes}"#;

/// Blurb section of the email user prompt. Replace `{blurb}`.
pub const EMAIL_BLURB_SECTION: &str = r#"COMPANY BLURB:
{blurb}"#;

/// LinkedIn system prompt.
pub const LINKEDIN_SYSTEM: &str = "You write LinkedIn connection request notes on behalf of the sender. \
    Respond with a single line of plain text: no line breaks, no quotes, no hashtags, no emojis. \
    The note must sound natural and human, stay under 300 characters, \
    and be adapted from one of the sender's templates.";

/// LinkedIn user prompt. Replace: {recipient}, {templates}.
pub const LINKEDIN_USER_TEMPLATE: &str = r#"Write a connection note for this person.

RECIPIENT:
{recipient}

SENDER'S TEMPLATES:
{templates}

Pick the template that fits this person best and adapt it. Fill placeholders such as {department}, {company} or {industry} from the recipient's details, and rephrase slightly if a placeholder has no matching detail."#;

/// Shown for recipient fields the lead row leaves empty.
pub const UNKNOWN_FIELD: &str = "Not specified";
