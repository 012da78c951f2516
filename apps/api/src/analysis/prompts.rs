// All LLM prompt constants for the Analysis module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, JSON_SCHEMA_INSTRUCTION};

/// Role framing for the analyzer.
pub const ANALYZER_ROLE: &str = "You are an expert resume analyzer and career coach. \
    Your task is to evaluate a candidate's resume against a specific job description.";

/// System instruction sent with every analysis.
pub fn system_instruction() -> String {
    format!("{ANALYZER_ROLE} {GROUNDING_INSTRUCTION}")
}

/// User prompt. The texts are inserted verbatim, job description first.
pub fn user_prompt(job_description: &str, resume_text: &str) -> String {
    format!(
        r#"Job Description:
{job_description}

Resume text:
{resume_text}

Instructions:
1. Provide a detailed, structured evaluation based on the attached schema.
2. Ensure the analysis is based only on the provided texts.
3. Scores are integers from 0 to 100; confidence is a number from 0 to 1.
4. verdict is exactly one of: "Strong Apply", "Apply after tailoring", "Consider", "Don't Apply".
5. suggested_resume_bullets rewrite lines that already exist in the resume; "old" must quote the resume.

{JSON_SCHEMA_INSTRUCTION}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_instruction_forbids_external_knowledge() {
        let system = system_instruction();
        assert!(system.starts_with(ANALYZER_ROLE));
        assert!(system.contains("Do not make assumptions or use external knowledge"));
    }

    #[test]
    fn test_user_prompt_contains_both_texts_in_order() {
        let prompt = user_prompt("Senior React role", "7 years React");
        let jd_at = prompt.find("Senior React role").unwrap();
        let resume_at = prompt.find("7 years React").unwrap();
        assert!(jd_at < resume_at);
    }

    #[test]
    fn test_user_prompt_is_deterministic() {
        assert_eq!(user_prompt("a", "b"), user_prompt("a", "b"));
    }

    #[test]
    fn test_user_prompt_keeps_braces_in_input() {
        let prompt = user_prompt("{resume_text}", "{}");
        assert!(prompt.contains("Job Description:\n{resume_text}\n"));
        assert!(prompt.contains("Resume text:\n{}\n"));
    }
}
