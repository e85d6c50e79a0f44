//! Outreach generation: orchestrates the two generation pipelines.
//!
//! Flow: require lead → resolve API key → assemble prompts (pure) →
//!       one chat-completion call → post-process.
//!
//! Both preconditions are checked before any network traffic.

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::email::{build_email_prompts, email_subject, EmailDraft};
use crate::generation::linkedin::build_linkedin_prompts;
use crate::generation::prompts::GENERATION_TEMPERATURE;
use crate::generation::recipient::PromptPair;
use crate::llm_client::{ChatCompletion, ChatRequest, LlmError};
use crate::models::{Lead, UserSettings};

/// Inputs for one generation, captured by value when the request starts.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub lead: Option<&'a Lead>,
    pub settings: &'a UserSettings,
    pub notes: &'a str,
}

/// Runs generations against a chat-completion backend.
#[derive(Clone)]
pub struct Generator {
    llm: Arc<dyn ChatCompletion>,
    /// Used when the settings carry no key.
    fallback_api_key: Option<String>,
}

impl Generator {
    pub fn new(llm: Arc<dyn ChatCompletion>, fallback_api_key: Option<String>) -> Self {
        Self {
            llm,
            fallback_api_key,
        }
    }

    /// Generates a personalized email for the selected lead.
    ///
    /// The body is the model's output verbatim; the subject is
    /// `"{first name} <> {sender name}"`.
    pub async fn generate_email(&self, request: GenerationRequest<'_>) -> Result<EmailDraft, AppError> {
        let lead = request.lead.ok_or(AppError::NoLeadSelected)?;
        let api_key = self.api_key(request.settings)?;

        let prompts = build_email_prompts(lead, request.settings, request.notes);
        info!("Generating email for {}", lead.full_name());

        let body = self.complete(api_key, prompts).await?;

        Ok(EmailDraft {
            subject: email_subject(lead, request.settings),
            body,
        })
    }

    /// Generates a one-line LinkedIn connection note. Notes are not used.
    pub async fn generate_linkedin_message(
        &self,
        request: GenerationRequest<'_>,
    ) -> Result<String, AppError> {
        let lead = request.lead.ok_or(AppError::NoLeadSelected)?;
        let api_key = self.api_key(request.settings)?;

        let prompts = build_linkedin_prompts(lead, request.settings);
        info!("Generating LinkedIn message for {}", lead.full_name());

        let message = self.complete(api_key, prompts).await?;
        Ok(message.trim().to_string())
    }

    fn api_key<'a>(&'a self, settings: &'a UserSettings) -> Result<&'a str, AppError> {
        settings
            .api_key()
            .or(self.fallback_api_key.as_deref())
            .ok_or(AppError::ApiKeyMissing)
    }

    /// The single network round-trip of a generation.
    async fn complete(&self, api_key: &str, prompts: PromptPair) -> Result<String, AppError> {
        let request = ChatRequest::new(prompts.system, prompts.user, GENERATION_TEMPERATURE);

        let response = self
            .llm
            .complete(api_key, &request)
            .await
            .map_err(|e| {
                if let LlmError::Api { status, .. } = &e {
                    warn!(status, "Completion API rejected the request");
                }
                AppError::GenerationFailed(e.to_string())
            })?;

        response
            .text()
            .map(str::to_string)
            .ok_or(AppError::EmptyGeneration)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::generation::prompts::EMAIL_BLURB_DIRECTIVE;
    use crate::llm_client::{ChatResponse, Choice, ChoiceMessage, Role};

    /// Canned completion backend that records every request it receives.
    pub(crate) struct MockCompletion {
        reply: Mutex<Result<Option<String>, (u16, String)>>,
        pub(crate) calls: Mutex<Vec<(String, ChatRequest)>>,
    }

    impl MockCompletion {
        pub(crate) fn replying(content: &str) -> Self {
            Self::with(Ok(Some(content.to_string())))
        }

        pub(crate) fn with(reply: Result<Option<String>, (u16, String)>) -> Self {
            Self {
                reply: Mutex::new(reply),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub(crate) fn last_request(&self) -> ChatRequest {
            self.calls.lock().unwrap().last().unwrap().1.clone()
        }
    }

    #[async_trait]
    impl ChatCompletion for MockCompletion {
        async fn complete(
            &self,
            api_key: &str,
            request: &ChatRequest,
        ) -> Result<ChatResponse, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((api_key.to_string(), request.clone()));

            match self.reply.lock().unwrap().clone() {
                Ok(content) => Ok(ChatResponse {
                    choices: vec![Choice {
                        message: ChoiceMessage { content },
                    }],
                    usage: None,
                }),
                Err((status, message)) => Err(LlmError::Api { status, message }),
            }
        }
    }

    fn ada() -> Lead {
        Lead {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            title: Some("Engineer".into()),
            company_name: Some("Analytic".into()),
            city: Some("London".into()),
            country: Some("UK".into()),
            ..Default::default()
        }
    }

    fn keyed_settings() -> UserSettings {
        UserSettings {
            openai_api_key: Some("sk-settings".into()),
            ..UserSettings::default()
        }
    }

    fn generator(mock: &Arc<MockCompletion>) -> Generator {
        Generator::new(mock.clone(), Some("sk-env".into()))
    }

    #[tokio::test]
    async fn test_email_end_to_end_with_defaults() {
        let mock = Arc::new(MockCompletion::replying("Hi Ada,\n\nLoved your work.\n"));
        let lead = ada();
        let settings = UserSettings::default();

        let draft = generator(&mock)
            .generate_email(GenerationRequest {
                lead: Some(&lead),
                settings: &settings,
                notes: "",
            })
            .await
            .unwrap();

        assert_eq!(draft.subject, "Ada <> Shubham");
        assert_eq!(draft.body, "Hi Ada,\n\nLoved your work.\n");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_email_request_shape() {
        let mock = Arc::new(MockCompletion::replying("body"));
        let lead = ada();
        let settings = keyed_settings();

        generator(&mock)
            .generate_email(GenerationRequest {
                lead: Some(&lead),
                settings: &settings,
                notes: "include the Blurb",
            })
            .await
            .unwrap();

        let (api_key, request) = mock.calls.lock().unwrap()[0].clone();
        assert_eq!(api_key, "sk-settings");
        assert!((request.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert!(request.messages[0].content.contains(EMAIL_BLURB_DIRECTIVE));
        assert_eq!(request.messages[1].role, Role::User);
        assert!(request.messages[1].content.contains(&settings.blurb));
    }

    #[tokio::test]
    async fn test_no_lead_fails_before_any_call() {
        let mock = Arc::new(MockCompletion::replying("unused"));
        let settings = keyed_settings();
        let generator = generator(&mock);
        let request = GenerationRequest {
            lead: None,
            settings: &settings,
            notes: "blurb",
        };

        let email = generator.generate_email(request).await;
        assert!(matches!(email, Err(AppError::NoLeadSelected)));

        let message = generator.generate_linkedin_message(request).await;
        assert!(matches!(message, Err(AppError::NoLeadSelected)));

        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_any_call() {
        let mock = Arc::new(MockCompletion::replying("unused"));
        let generator = Generator::new(mock.clone(), None);
        let lead = ada();
        let settings = UserSettings::default();

        let result = generator
            .generate_email(GenerationRequest {
                lead: Some(&lead),
                settings: &settings,
                notes: "",
            })
            .await;

        assert!(matches!(result, Err(AppError::ApiKeyMissing)));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_env_key_used_when_settings_key_blank() {
        let mock = Arc::new(MockCompletion::replying("body"));
        let lead = ada();
        let settings = UserSettings::default();

        generator(&mock)
            .generate_email(GenerationRequest {
                lead: Some(&lead),
                settings: &settings,
                notes: "",
            })
            .await
            .unwrap();

        assert_eq!(mock.calls.lock().unwrap()[0].0, "sk-env");
    }

    #[tokio::test]
    async fn test_empty_content_is_an_empty_generation() {
        for reply in [None, Some(String::new()), Some("  \n".to_string())] {
            let mock = Arc::new(MockCompletion::with(Ok(reply)));
            let lead = ada();
            let settings = keyed_settings();
            let result = generator(&mock)
                .generate_email(GenerationRequest {
                    lead: Some(&lead),
                    settings: &settings,
                    notes: "",
                })
                .await;
            assert!(matches!(result, Err(AppError::EmptyGeneration)));
        }
    }

    #[tokio::test]
    async fn test_api_failure_propagates_upstream_message() {
        let mock = Arc::new(MockCompletion::with(Err((
            429,
            "Rate limit reached for gpt-4o-mini".into(),
        ))));
        let lead = ada();
        let settings = keyed_settings();

        let result = generator(&mock)
            .generate_linkedin_message(GenerationRequest {
                lead: Some(&lead),
                settings: &settings,
                notes: "",
            })
            .await;

        match result {
            Err(AppError::GenerationFailed(msg)) => {
                assert_eq!(msg, "Rate limit reached for gpt-4o-mini")
            }
            other => panic!("expected GenerationFailed, got {other:?}"),
        }
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_linkedin_message_is_trimmed() {
        let mock = Arc::new(MockCompletion::replying(
            "\n  Love your background in research, would love to connect!  \n",
        ));
        let lead = ada();
        let settings = keyed_settings();

        let message = generator(&mock)
            .generate_linkedin_message(GenerationRequest {
                lead: Some(&lead),
                settings: &settings,
                notes: "blurb",
            })
            .await
            .unwrap();

        assert_eq!(
            message,
            "Love your background in research, would love to connect!"
        );
        let request = mock.last_request();
        assert!(request.messages[1].content.contains("SENDER'S TEMPLATES"));
        assert!(!request.messages[1].content.contains(&settings.blurb));
    }
}
