//! Normalization: backfills a partially-formed model answer over a template
//! so the presentation layer always receives the full `AnalysisResult` shape.
//!
//! Rules, applied field by field:
//! - absent field → template value
//! - `component_scores` / `raw_matches` → same rule one level down
//! - declared sequence that is not an array (e.g. `null`) → empty sequence
//! - scalar of the wrong type → template value
//! - scores rounded and clamped to 0–100, confidence clamped to 0–1
//! - unknown verdict label → template verdict

use serde_json::{Map, Value};

use crate::models::analysis::{
    AnalysisResult, ComponentScores, RawMatches, SuggestedBullet, Verdict,
};

/// Merges `parsed` over `fallback`. A non-object `parsed` yields `fallback`.
pub fn normalize(parsed: &Value, fallback: &AnalysisResult) -> AnalysisResult {
    let mut result = fallback.clone();
    let Some(obj) = parsed.as_object() else {
        return result;
    };

    if let Some(score) = obj.get("overall_score").and_then(as_score) {
        result.overall_score = score;
    }

    if let Some(scores) = obj.get("component_scores").and_then(Value::as_object) {
        merge_component_scores(scores, &mut result.component_scores);
    }

    if let Some(verdict) = obj
        .get("verdict")
        .and_then(Value::as_str)
        .and_then(|label| Verdict::from_label(label.trim()))
    {
        result.verdict = verdict;
    }

    if let Some(confidence) = obj.get("confidence").and_then(Value::as_f64) {
        result.confidence = confidence.clamp(0.0, 1.0);
    }

    merge_string_list(obj, "top_reasons", &mut result.top_reasons);
    merge_string_list(obj, "strengths", &mut result.strengths);
    merge_string_list(obj, "weaknesses", &mut result.weaknesses);
    merge_string_list(
        obj,
        "missing_must_have_skills",
        &mut result.missing_must_have_skills,
    );
    merge_string_list(obj, "apply_if_changes", &mut result.apply_if_changes);

    if let Some(bullets) = obj.get("suggested_resume_bullets") {
        result.suggested_resume_bullets = bullet_list(bullets);
    }

    if let Some(opening) = obj
        .get("suggested_cover_letter_opening")
        .and_then(Value::as_str)
    {
        result.suggested_cover_letter_opening = opening.to_string();
    }

    if let Some(matches) = obj.get("raw_matches").and_then(Value::as_object) {
        merge_raw_matches(matches, &mut result.raw_matches);
    }

    if let Some(notes) = obj.get("notes").and_then(Value::as_str) {
        result.notes = notes.to_string();
    }

    result
}

fn merge_component_scores(parsed: &Map<String, Value>, scores: &mut ComponentScores) {
    for field in ComponentScores::FIELDS {
        let parsed_score = parsed.get(field).and_then(as_score);
        if let (Some(slot), Some(score)) = (scores.get_mut(field), parsed_score) {
            *slot = score;
        }
    }
}

fn merge_raw_matches(parsed: &Map<String, Value>, matches: &mut RawMatches) {
    for field in RawMatches::FIELDS {
        if let (Some(slot), Some(value)) = (matches.get_mut(field), parsed.get(field)) {
            *slot = string_list(value);
        }
    }
}

fn merge_string_list(obj: &Map<String, Value>, key: &str, slot: &mut Vec<String>) {
    if let Some(value) = obj.get(key) {
        *slot = string_list(value);
    }
}

/// 0–100 integer from any JSON number.
fn as_score(value: &Value) -> Option<u32> {
    value
        .as_f64()
        .map(|n| n.round().clamp(0.0, 100.0) as u32)
}

/// String items of an array; anything else is an empty list.
fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Object items of an array as `{old, new}` pairs; missing halves become "".
fn bullet_list(value: &Value) -> Vec<SuggestedBullet> {
    let Some(items) = value.as_array() else {
        return vec![];
    };

    items
        .iter()
        .filter_map(Value::as_object)
        .map(|item| SuggestedBullet {
            old: item
                .get("old")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            new: item
                .get("new")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}
