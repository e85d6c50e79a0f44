// Content Generation: prompt assembly from lead + settings + notes, one
// chat-completion call, and post-processing into drafts.
// All LLM calls go through llm_client; no direct HTTP calls here.

pub mod email;
pub mod generator;
pub mod handlers;
pub mod linkedin;
pub mod mailto;
pub mod placeholders;
pub mod prompts;
pub mod recipient;

pub use generator::Generator;
