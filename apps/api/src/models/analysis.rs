use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze`.
///
/// Missing fields deserialize to empty strings so they fail validation with a
/// 400 instead of an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume_text: String,
}

impl AnalysisRequest {
    /// Character (not byte) lengths of the job description and resume.
    pub fn char_counts(&self) -> (usize, usize) {
        (
            self.job_description.chars().count(),
            self.resume_text.chars().count(),
        )
    }
}

/// Closed set of overall judgments. `Error` only ever comes from the failsafe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Strong Apply")]
    StrongApply,
    #[serde(rename = "Apply after tailoring")]
    ApplyAfterTailoring,
    #[serde(rename = "Consider")]
    Consider,
    #[serde(rename = "Don't Apply")]
    DontApply,
    #[default]
    #[serde(rename = "Error")]
    Error,
}

impl Verdict {
    pub const ALL: [Verdict; 5] = [
        Verdict::StrongApply,
        Verdict::ApplyAfterTailoring,
        Verdict::Consider,
        Verdict::DontApply,
        Verdict::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::StrongApply => "Strong Apply",
            Verdict::ApplyAfterTailoring => "Apply after tailoring",
            Verdict::Consider => "Consider",
            Verdict::DontApply => "Don't Apply",
            Verdict::Error => "Error",
        }
    }

    pub fn from_label(label: &str) -> Option<Verdict> {
        Verdict::ALL.into_iter().find(|v| v.as_str() == label)
    }
}

/// The seven 0–100 sub-scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub skills: u32,
    pub experience: u32,
    pub achievements: u32,
    pub seniority: u32,
    pub ats_format: u32,
    pub soft_fit: u32,
    pub location_salary_visa: u32,
}

impl ComponentScores {
    pub const FIELDS: [&'static str; 7] = [
        "skills",
        "experience",
        "achievements",
        "seniority",
        "ats_format",
        "soft_fit",
        "location_salary_visa",
    ];

    /// (field name, score) pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, u32); 7] {
        [
            ("skills", self.skills),
            ("experience", self.experience),
            ("achievements", self.achievements),
            ("seniority", self.seniority),
            ("ats_format", self.ats_format),
            ("soft_fit", self.soft_fit),
            ("location_salary_visa", self.location_salary_visa),
        ]
    }

    pub fn get_mut(&mut self, field: &str) -> Option<&mut u32> {
        match field {
            "skills" => Some(&mut self.skills),
            "experience" => Some(&mut self.experience),
            "achievements" => Some(&mut self.achievements),
            "seniority" => Some(&mut self.seniority),
            "ats_format" => Some(&mut self.ats_format),
            "soft_fit" => Some(&mut self.soft_fit),
            "location_salary_visa" => Some(&mut self.location_salary_visa),
            _ => None,
        }
    }
}

/// A resume line and its suggested rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedBullet {
    pub old: String,
    pub new: String,
}

/// Skill lists the model extracted from both texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMatches {
    pub jd_must_have_skills: Vec<String>,
    pub jd_nice_to_have: Vec<String>,
    pub resume_skills_found: Vec<String>,
}

impl RawMatches {
    pub const FIELDS: [&'static str; 3] =
        ["jd_must_have_skills", "jd_nice_to_have", "resume_skills_found"];

    pub fn get_mut(&mut self, field: &str) -> Option<&mut Vec<String>> {
        match field {
            "jd_must_have_skills" => Some(&mut self.jd_must_have_skills),
            "jd_nice_to_have" => Some(&mut self.jd_nice_to_have),
            "resume_skills_found" => Some(&mut self.resume_skills_found),
            _ => None,
        }
    }
}

/// Full evaluation handed to the presentation layer. Every field is always
/// present; see `analysis::normalize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: u32,
    pub component_scores: ComponentScores,
    pub verdict: Verdict,
    pub confidence: f64,
    pub top_reasons: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub missing_must_have_skills: Vec<String>,
    pub suggested_resume_bullets: Vec<SuggestedBullet>,
    pub suggested_cover_letter_opening: String,
    pub apply_if_changes: Vec<String>,
    pub raw_matches: RawMatches,
    pub notes: String,
}

impl AnalysisResult {
    /// The fixed result returned whenever an analysis cannot be completed,
    /// and the template absent fields are filled from.
    pub fn failsafe() -> Self {
        Self {
            overall_score: 0,
            component_scores: ComponentScores::default(),
            verdict: Verdict::Error,
            confidence: 0.0,
            top_reasons: vec!["Service temporarily unavailable.".to_string()],
            strengths: vec!["ERROR: Service failed to respond.".to_string()],
            weaknesses: vec!["Please check the server logs or try again later.".to_string()],
            missing_must_have_skills: vec![],
            suggested_resume_bullets: vec![],
            suggested_cover_letter_opening: "Error: Failed to generate cover letter opening."
                .to_string(),
            apply_if_changes: vec![],
            raw_matches: RawMatches::default(),
            notes: "Analysis failed due to a server error or AI issue.".to_string(),
        }
    }
}
