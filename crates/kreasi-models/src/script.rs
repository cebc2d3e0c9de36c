//! Script generation request and result types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::idea::{Idea, IdeaRequest};
use crate::validation::{require_custom_value, require_non_empty, ValidationError};

/// Narrative formula, each defining an ordered sequence of named stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptFormula {
    #[serde(rename = "PAS")]
    Pas,
    #[serde(rename = "AIDA")]
    Aida,
    #[serde(rename = "PASTOR")]
    Pastor,
    #[serde(rename = "BAB")]
    Bab,
    #[serde(rename = "STAR")]
    Star,
    ObjectionHandling,
    #[serde(rename = "BFAC")]
    Bfac,
    #[serde(rename = "HPR")]
    Hpr,
    #[serde(rename = "FPO")]
    Fpo,
    HerosJourney,
    ComparisonContrast,
    FourP,
}

impl ScriptFormula {
    pub const ALL: &'static [ScriptFormula] = &[
        ScriptFormula::Pas,
        ScriptFormula::Aida,
        ScriptFormula::Pastor,
        ScriptFormula::Bab,
        ScriptFormula::Star,
        ScriptFormula::ObjectionHandling,
        ScriptFormula::Bfac,
        ScriptFormula::Hpr,
        ScriptFormula::Fpo,
        ScriptFormula::HerosJourney,
        ScriptFormula::ComparisonContrast,
        ScriptFormula::FourP,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptFormula::Pas => "PAS",
            ScriptFormula::Aida => "AIDA",
            ScriptFormula::Pastor => "PASTOR",
            ScriptFormula::Bab => "BAB",
            ScriptFormula::Star => "STAR",
            ScriptFormula::ObjectionHandling => "ObjectionHandling",
            ScriptFormula::Bfac => "BFAC",
            ScriptFormula::Hpr => "HPR",
            ScriptFormula::Fpo => "FPO",
            ScriptFormula::HerosJourney => "HerosJourney",
            ScriptFormula::ComparisonContrast => "ComparisonContrast",
            ScriptFormula::FourP => "FourP",
        }
    }

    /// Display label with the expanded acronym where the formula has one.
    pub fn label(&self) -> &'static str {
        match self {
            ScriptFormula::Pas => "PAS (Problem, Agitate, Solution)",
            ScriptFormula::Aida => "AIDA (Attention, Interest, Desire, Action)",
            ScriptFormula::Pastor => "PASTOR",
            ScriptFormula::Bab => "BAB (Before, After, Bridge)",
            ScriptFormula::Star => "STAR (Situation, Task, Action, Result)",
            ScriptFormula::ObjectionHandling => "Objection Handling",
            ScriptFormula::Bfac => "BFAC (Big Promise, Feature, Advantage, CTA)",
            ScriptFormula::Hpr => "HPR (Hook, Problem, Resolution)",
            ScriptFormula::Fpo => "FPO (Feature, Proof, Outcome)",
            ScriptFormula::HerosJourney => "Hero's Journey",
            ScriptFormula::ComparisonContrast => "Comparison & Contrast",
            ScriptFormula::FourP => "4P (Promise, Picture, Proof, Push)",
        }
    }

    /// One-line guidance on when to reach for this formula.
    pub fn description(&self) -> &'static str {
        match self {
            ScriptFormula::Pas => "Cocok untuk jualan & konten problem-solving.",
            ScriptFormula::Aida => "Formula copywriting klasik, bagus untuk penjualan.",
            ScriptFormula::Pastor => "Storytelling yang komprehensif, cocok untuk brand.",
            ScriptFormula::Bab => "Efektif untuk menunjukkan transformasi.",
            ScriptFormula::Star => "Ideal untuk studi kasus dan storytelling personal.",
            ScriptFormula::ObjectionHandling => "Mengatasi keraguan audiens secara langsung.",
            ScriptFormula::Bfac => "To-the-point, bagus untuk konten singkat.",
            ScriptFormula::Hpr => "Struktur video pendek yang sangat efektif.",
            ScriptFormula::Fpo => "Menyoroti fitur produk dengan bukti & hasil.",
            ScriptFormula::HerosJourney => "Struktur cerita epik untuk brand & personal story.",
            ScriptFormula::ComparisonContrast => {
                "Membandingkan dua hal untuk menyoroti keunggulan."
            }
            ScriptFormula::FourP => "Mirip AIDA, membangun gambaran & bukti kuat.",
        }
    }

    /// The ordered stage labels a script body must follow for this formula.
    pub fn stages(&self) -> &'static [&'static str] {
        match self {
            ScriptFormula::Pas => &["Problem", "Agitate", "Solution"],
            ScriptFormula::Aida => &["Attention", "Interest", "Desire", "Action"],
            ScriptFormula::Pastor => &[
                "Problem",
                "Amplify",
                "Story",
                "Transformation",
                "Offer",
                "Response",
            ],
            ScriptFormula::Bab => &["Before", "After", "Bridge"],
            ScriptFormula::Star => &["Situation", "Task", "Action", "Result"],
            ScriptFormula::ObjectionHandling => &[
                "IdentifyObjection",
                "ValidateObjection",
                "ProvideCounterpoint",
                "ShowProof",
            ],
            ScriptFormula::Bfac => &["BigPromise", "Feature", "Advantage", "CallToAction"],
            ScriptFormula::Hpr => &["Hook", "Problem", "Resolution"],
            ScriptFormula::Fpo => &["Feature", "Proof", "Outcome"],
            ScriptFormula::HerosJourney => &[
                "OrdinaryWorld",
                "CallToAdventure",
                "Struggle",
                "Transformation",
            ],
            ScriptFormula::ComparisonContrast => &[
                "IntroduceOptionA",
                "IntroduceOptionB",
                "HighlightKeyDifference",
                "DeclareWinner",
            ],
            ScriptFormula::FourP => &["Promise", "Picture", "Proof", "Push"],
        }
    }
}

impl fmt::Display for ScriptFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who is producing the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    CreatorPemula,
    Umkm,
    Marketer,
    PersonalBrand,
    Others,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::CreatorPemula => "creator_pemula",
            UserType::Umkm => "umkm",
            UserType::Marketer => "marketer",
            UserType::PersonalBrand => "personal_brand",
            UserType::Others => "others",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the script is trying to achieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptGoal {
    Edukasi,
    Hiburan,
    JualanSoft,
    JualanHard,
    PersonalBranding,
    Engagement,
    Others,
}

impl ScriptGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptGoal::Edukasi => "edukasi",
            ScriptGoal::Hiburan => "hiburan",
            ScriptGoal::JualanSoft => "jualan_soft",
            ScriptGoal::JualanHard => "jualan_hard",
            ScriptGoal::PersonalBranding => "personal_branding",
            ScriptGoal::Engagement => "engagement",
            ScriptGoal::Others => "others",
        }
    }
}

impl fmt::Display for ScriptGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Call-to-action the script closes with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptCta {
    Follow,
    Save,
    Comment,
    Dm,
    KlikLink,
    BeliSekarang,
}

impl ScriptCta {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptCta::Follow => "follow",
            ScriptCta::Save => "save",
            ScriptCta::Comment => "comment",
            ScriptCta::Dm => "dm",
            ScriptCta::KlikLink => "klik_link",
            ScriptCta::BeliSekarang => "beli_sekarang",
        }
    }
}

impl fmt::Display for ScriptCta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How aware the audience is of the problem/product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudienceAwareness {
    Unaware,
    ProblemAware,
    SolutionAware,
    ProductAware,
}

impl AudienceAwareness {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudienceAwareness::Unaware => "unaware",
            AudienceAwareness::ProblemAware => "problem_aware",
            AudienceAwareness::SolutionAware => "solution_aware",
            AudienceAwareness::ProductAware => "product_aware",
        }
    }
}

impl fmt::Display for AudienceAwareness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Form input for a formula-driven script, optionally carrying a free-text
/// revision instruction against a prior result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaScriptRequest {
    pub formula: ScriptFormula,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type_other: Option<String>,
    pub goal: ScriptGoal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_other: Option<String>,
    /// Target duration in seconds.
    pub duration: u32,
    pub audience: String,
    pub topic_and_points: String,
    pub offer: String,
    pub cta: ScriptCta,
    pub style_and_persona: String,
    pub awareness: AudienceAwareness,
    /// Free-text tweak to apply against a previously generated script.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

impl Default for FormulaScriptRequest {
    fn default() -> Self {
        Self {
            formula: ScriptFormula::Pas,
            user_type: UserType::CreatorPemula,
            user_type_other: None,
            goal: ScriptGoal::Edukasi,
            goal_other: None,
            duration: 60,
            audience: String::new(),
            topic_and_points: String::new(),
            offer: String::new(),
            cta: ScriptCta::Save,
            style_and_persona: "Santai - Teman".to_string(),
            awareness: AudienceAwareness::ProblemAware,
            revision: None,
        }
    }
}

impl FormulaScriptRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_custom_value(
            "user_type",
            self.user_type == UserType::Others,
            self.user_type_other.as_deref(),
        )?;
        require_custom_value(
            "goal",
            self.goal == ScriptGoal::Others,
            self.goal_other.as_deref(),
        )?;
        require_non_empty("topic_and_points", &self.topic_and_points)?;
        require_non_empty("audience", &self.audience)?;
        Ok(())
    }

    pub fn user_type_text(&self) -> &str {
        match self.user_type {
            UserType::Others => self.user_type_other.as_deref().unwrap_or_default(),
            other => other.as_str(),
        }
    }

    pub fn goal_text(&self) -> &str {
        match self.goal {
            ScriptGoal::Others => self.goal_other.as_deref().unwrap_or_default(),
            other => other.as_str(),
        }
    }
}

/// Request to turn one generated idea into a free-text script, keeping the
/// audience/voice context of the idea batch it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptFromIdeaRequest {
    pub context: IdeaRequest,
    pub idea: Idea,
}

impl ScriptFromIdeaRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.context.validate()
    }
}

/// Alternative hook suggestion for A/B testing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookVariation {
    /// Hook type (e.g. Fear-based, Curiosity)
    #[serde(rename = "type")]
    pub kind: String,
    pub hook: String,
    /// Visual or voice-over recommendation
    pub usage: String,
}

/// One stage of a script body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptSection {
    pub stage: String,
    pub content: String,
}

/// Normalized formula-driven script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedScript {
    pub title: String,
    pub hook: String,
    #[serde(default)]
    pub hook_variations: Vec<HookVariation>,
    /// Stage labels match the formula's declared stage order.
    pub body: Vec<ScriptSection>,
    pub cta: String,
    pub delivery_notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_formula_has_stages() {
        assert_eq!(ScriptFormula::ALL.len(), 12);
        for formula in ScriptFormula::ALL {
            assert!(!formula.stages().is_empty(), "{} has no stages", formula);
        }
    }

    #[test]
    fn test_stage_order_is_fixed() {
        assert_eq!(
            ScriptFormula::Pastor.stages(),
            &["Problem", "Amplify", "Story", "Transformation", "Offer", "Response"]
        );
        assert_eq!(ScriptFormula::Hpr.stages(), &["Hook", "Problem", "Resolution"]);
    }

    #[test]
    fn test_formula_display_metadata() {
        assert_eq!(
            ScriptFormula::Pas.label(),
            "PAS (Problem, Agitate, Solution)"
        );
        assert_eq!(
            ScriptFormula::Pas.description(),
            "Cocok untuk jualan & konten problem-solving."
        );
        assert_eq!(ScriptFormula::HerosJourney.label(), "Hero's Journey");

        let mut labels: Vec<&str> = ScriptFormula::ALL.iter().map(|f| f.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 12);
    }

    #[test]
    fn test_formula_serde_names() {
        assert_eq!(
            serde_json::to_string(&ScriptFormula::FourP).unwrap(),
            "\"FourP\""
        );
        assert_eq!(
            serde_json::from_str::<ScriptFormula>("\"PAS\"").unwrap(),
            ScriptFormula::Pas
        );
    }

    #[test]
    fn test_validate_others_sentinels() {
        let mut request = FormulaScriptRequest {
            audience: "pemula saham".to_string(),
            topic_and_points: "cara mulai nabung saham".to_string(),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        request.goal = ScriptGoal::Others;
        assert_eq!(
            request.validate(),
            Err(ValidationError::MissingCustomValue { field: "goal" })
        );
        request.goal_other = Some("komunitas".to_string());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_hook_variations_default_empty() {
        let json = r#"{
            "title": "t", "hook": "h",
            "body": [{"stage": "Problem", "content": "c"}],
            "cta": "save", "delivery_notes": "n"
        }"#;
        let script: GeneratedScript = serde_json::from_str(json).unwrap();
        assert!(script.hook_variations.is_empty());
    }
}
