// Resume / job-description fit analysis.
// Implements: input validation, prompt construction, model call, fence stripping,
// normalization over the failsafe template, and the `/api/analyze` endpoint.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod normalize;
pub mod prompts;
pub mod schema;
pub mod service;
