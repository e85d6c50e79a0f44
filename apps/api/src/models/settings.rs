use serde::{Deserialize, Serialize};

const DEFAULT_NAME: &str = "Shubham";
const DEFAULT_TITLE: &str = "Co-founder, Questera";

const DEFAULT_TEMPLATE: &str = "Hi {firstName},

{Super short 1 simple personalized line like Love your background in marketing, Are you actively Angel Investing? or Have been following you for a while, big fan!}

I am Shubham, Co-founder of Questera, building Agentic Customer Engagement Platform. Would love to connect and get some feedback about what we are building!

{ONLY If I ask to add Blurb in the email in notes, then add the blurb saved in {userSettings.blurb}\"}

Thanks,
Shubham
Co-founder, Questera";

const DEFAULT_BLURB: &str = "Here is a quick intro: Questera is the first Agentic customer engagement platform powering lifecycle marketers to predict user behavior and launch hyper-personalized campaigns, unlocking millions in revenue growth. Our team previously worked in Data & AI Infra at Amazon, Nvidia & LinkedIn and have been building in the personalization problem space for over a decade. We are post-revenue and starting up our seed round soon.";

const DEFAULT_LINKEDIN_TEMPLATES: [&str; 5] = [
    "Love your background in {department}, would love to connect!",
    "Really impressed by your work at {company}, would love to connect!",
    "Fellow {department} enthusiast here, would love to connect!",
    "Your experience in {industry} caught my eye, would love to connect!",
    "Big fan of your work in the {department} space, would love to connect!",
];

/// The sender's configuration. There is exactly one of these per deployment.
///
/// Key names are camelCase so settings saved by earlier dashboard builds keep
/// loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub name: String,
    pub title: String,
    /// Email template handed to the model verbatim. `{...}` spans are either
    /// lead placeholders or free-form guidance for the model.
    pub template: String,
    pub blurb: String,
    pub linkedin_templates: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            title: DEFAULT_TITLE.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            blurb: DEFAULT_BLURB.to_string(),
            linkedin_templates: DEFAULT_LINKEDIN_TEMPLATES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            openai_api_key: Some(String::new()),
        }
    }
}

impl UserSettings {
    /// Applies every field present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: SettingsPatch) {
        let SettingsPatch {
            name,
            title,
            template,
            blurb,
            linkedin_templates,
            openai_api_key,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(template) = template {
            self.template = template;
        }
        if let Some(blurb) = blurb {
            self.blurb = blurb;
        }
        if let Some(templates) = linkedin_templates {
            self.linkedin_templates = templates;
        }
        if let Some(key) = openai_api_key {
            self.openai_api_key = Some(key);
        }
    }

    /// The configured API key, if it is non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Copy safe to hand to a client: the API key keeps only its prefix and
    /// last four characters.
    pub fn masked(&self) -> Self {
        Self {
            openai_api_key: self.masked_api_key(),
            ..self.clone()
        }
    }

    /// The API key as [`UserSettings::masked`] shows it.
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key().map(mask_key)
    }
}

/// Keys this short are hidden entirely; longer ones keep 7 characters.
const FULL_MASK_MAX_LEN: usize = 12;

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= FULL_MASK_MAX_LEN {
        return "*".repeat(chars.len());
    }
    let prefix: String = chars[..3].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}…{suffix}")
}

/// A partial settings update. Absent keys keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blurb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_templates: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
}
