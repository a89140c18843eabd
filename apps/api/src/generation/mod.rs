// Devotional generation: request validation, prompt construction, the upstream
// proxy, response parsing, and the compose pipeline.
// All LLM calls go through llm_client — nothing here talks to the API directly.

pub mod composer;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod validation;
