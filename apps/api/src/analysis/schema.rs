//! Response schema sent with every analysis so the model answers in the
//! `AnalysisResult` shape.

use serde_json::{json, Value};

use crate::models::analysis::{ComponentScores, RawMatches, Verdict};

fn string_list(description: &str) -> Value {
    json!({
        "type": "array",
        "items": { "type": "string" },
        "description": description
    })
}

fn score(description: &str) -> Value {
    json!({ "type": "integer", "description": description })
}

/// JSON schema for the model's answer. `Error` is not offered as a verdict.
pub fn response_schema() -> Value {
    let verdicts: Vec<&str> = Verdict::ALL
        .iter()
        .filter(|v| **v != Verdict::Error)
        .map(Verdict::as_str)
        .collect();

    let component_properties: serde_json::Map<String, Value> = ComponentScores::FIELDS
        .iter()
        .map(|field| (field.to_string(), score("Sub-score from 0 to 100.")))
        .collect();

    let raw_match_properties: serde_json::Map<String, Value> = RawMatches::FIELDS
        .iter()
        .map(|field| (field.to_string(), string_list("Skills as written in the source text.")))
        .collect();

    json!({
        "type": "object",
        "properties": {
            "overall_score": score("Overall fit score from 0 to 100."),
            "component_scores": {
                "type": "object",
                "properties": component_properties,
                "required": ComponentScores::FIELDS
            },
            "verdict": {
                "type": "string",
                "enum": verdicts,
                "description": "Overall recommendation."
            },
            "confidence": {
                "type": "number",
                "description": "Confidence in the evaluation, from 0 to 1."
            },
            "top_reasons": string_list("The main reasons behind the verdict."),
            "strengths": string_list("3-5 reasons the candidate is a strong fit."),
            "weaknesses": string_list("3-5 gaps between the resume and the job."),
            "missing_must_have_skills": string_list("Required skills absent from the resume."),
            "suggested_resume_bullets": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "old": { "type": "string" },
                        "new": { "type": "string" }
                    },
                    "required": ["old", "new"]
                },
                "description": "Existing resume bullets with a tailored rewrite."
            },
            "suggested_cover_letter_opening": {
                "type": "string",
                "description": "Opening paragraph for a cover letter."
            },
            "apply_if_changes": string_list("Changes that would make applying worthwhile."),
            "raw_matches": {
                "type": "object",
                "properties": raw_match_properties,
                "required": RawMatches::FIELDS
            },
            "notes": {
                "type": "string",
                "description": "Caveats about the evaluation."
            }
        },
        "required": [
            "overall_score",
            "component_scores",
            "verdict",
            "confidence",
            "top_reasons",
            "strengths",
            "weaknesses",
            "missing_must_have_skills",
            "suggested_resume_bullets",
            "suggested_cover_letter_opening",
            "apply_if_changes",
            "raw_matches",
            "notes"
        ]
    })
}
