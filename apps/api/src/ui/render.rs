//! Rendering is a pure function of `Session`.

use std::f64::consts::PI;

use askama::Template;

use crate::models::analysis::{AnalysisResult, SuggestedBullet, Verdict};
use crate::ui::session::{Session, ViewState};

const DONUT_SIZE: f64 = 160.0;
const DONUT_STROKE: f64 = 12.0;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage<'a> {
    job_description: &'a str,
    resume_text: &'a str,
    loading: bool,
    error: Option<&'a str>,
    result: Option<ResultView>,
}

struct ResultView {
    score: u32,
    score_color: &'static str,
    circumference: String,
    dash_offset: String,
    verdict: &'static str,
    verdict_class: &'static str,
    confidence_pct: u32,
    notes: String,
    top_reasons: Vec<String>,
    strengths: Vec<String>,
    weaknesses: Vec<String>,
    missing_skills: Vec<String>,
    apply_if_changes: Vec<String>,
    bullets: Vec<SuggestedBullet>,
    cover_letter: String,
    score_bars: Vec<ScoreBar>,
    match_groups: Vec<MatchGroup>,
}

struct ScoreBar {
    label: String,
    score: u32,
}

struct MatchGroup {
    label: String,
    skills: Vec<String>,
}

pub fn render_page(session: &Session) -> Result<String, askama::Error> {
    let (error, result) = match &session.view {
        ViewState::Failed(message) => (Some(message.as_str()), None),
        ViewState::Ready(result) => (None, Some(result_view(result))),
        ViewState::Idle | ViewState::Loading => (None, None),
    };

    IndexPage {
        job_description: &session.job_description,
        resume_text: &session.resume_text,
        loading: session.is_loading(),
        error,
        result,
    }
    .render()
}

fn result_view(result: &AnalysisResult) -> ResultView {
    let radius = (DONUT_SIZE - DONUT_STROKE) / 2.0;
    let circumference = 2.0 * PI * radius;
    let score = result.overall_score.min(100);
    let offset = circumference - (score as f64 / 100.0) * circumference;

    let m = &result.raw_matches;
    let match_groups = [
        ("jd_must_have_skills", &m.jd_must_have_skills),
        ("jd_nice_to_have", &m.jd_nice_to_have),
        ("resume_skills_found", &m.resume_skills_found),
    ]
    .into_iter()
    .map(|(field, skills)| MatchGroup {
        label: title_case(field),
        skills: skills.clone(),
    })
    .collect();

    ResultView {
        score,
        score_color: score_color(score),
        circumference: format!("{circumference:.2}"),
        dash_offset: format!("{offset:.2}"),
        verdict: result.verdict.as_str(),
        verdict_class: verdict_class(result.verdict),
        confidence_pct: (result.confidence.clamp(0.0, 1.0) * 100.0).round() as u32,
        notes: result.notes.clone(),
        top_reasons: result.top_reasons.clone(),
        strengths: result.strengths.clone(),
        weaknesses: result.weaknesses.clone(),
        missing_skills: result.missing_must_have_skills.clone(),
        apply_if_changes: result.apply_if_changes.clone(),
        bullets: result.suggested_resume_bullets.clone(),
        cover_letter: result.suggested_cover_letter_opening.clone(),
        score_bars: result
            .component_scores
            .entries()
            .into_iter()
            .map(|(field, score)| ScoreBar {
                label: title_case(field),
                score: score.min(100),
            })
            .collect(),
        match_groups,
    }
}

fn score_color(score: u32) -> &'static str {
    match score {
        85.. => "#4ade80",
        70..=84 => "#facc15",
        50..=69 => "#fb923c",
        _ => "#f87171",
    }
}

fn verdict_class(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::StrongApply => "verdict-strong",
        Verdict::ApplyAfterTailoring => "verdict-tailor",
        Verdict::Consider => "verdict-consider",
        Verdict::DontApply => "verdict-dont",
        Verdict::Error => "verdict-error",
    }
}

/// `ats_format` → `Ats Format`
fn title_case(field: &str) -> String {
    field
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
