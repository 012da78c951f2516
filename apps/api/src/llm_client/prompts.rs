// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Keeps the model inside the texts it was given.
pub const GROUNDING_INSTRUCTION: &str = "\
    Your evaluation must be based strictly on the content provided in the resume \
    and the job description. Do not make assumptions or use external knowledge.";

/// Appended to prompts whose output is constrained by a response schema.
pub const JSON_SCHEMA_INSTRUCTION: &str = "\
    Respond with a single JSON object that follows the attached response schema. \
    Do NOT include any text outside the JSON object.";
