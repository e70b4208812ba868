// Job-posting analysis: prompt construction, the one model call, and parsing
// of the returned JSON into the fixed analysis schema.
// All LLM calls go through llm::CompletionModel — no direct Gemini calls here.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod prompts;
