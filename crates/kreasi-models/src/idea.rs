//! Content-idea generation request and result types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::{require_custom_value, require_non_empty, ValidationError};

/// Industry vertical the content targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Finance,
    Beauty,
    Education,
    Gaming,
    Fnb,
    Property,
    Automotive,
    Health,
    Parenting,
    Travel,
    Tech,
    Fashion,
    B2bSaas,
    Others,
}

impl Industry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Finance => "finance",
            Industry::Beauty => "beauty",
            Industry::Education => "education",
            Industry::Gaming => "gaming",
            Industry::Fnb => "fnb",
            Industry::Property => "property",
            Industry::Automotive => "automotive",
            Industry::Health => "health",
            Industry::Parenting => "parenting",
            Industry::Travel => "travel",
            Industry::Tech => "tech",
            Industry::Fashion => "fashion",
            Industry::B2bSaas => "b2b_saas",
            Industry::Others => "others",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Content format (tutorial, storytelling, listicle, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentFormat {
    Tutorial,
    Debunking,
    Storytelling,
    CaseStudy,
    Review,
    BeforeAfter,
    Qna,
    Listicle,
    Reaction,
    Skit,
    Carousel,
    Thread,
    Others,
}

impl ContentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentFormat::Tutorial => "tutorial",
            ContentFormat::Debunking => "debunking",
            ContentFormat::Storytelling => "storytelling",
            ContentFormat::CaseStudy => "case_study",
            ContentFormat::Review => "review",
            ContentFormat::BeforeAfter => "before_after",
            ContentFormat::Qna => "qna",
            ContentFormat::Listicle => "listicle",
            ContentFormat::Reaction => "reaction",
            ContentFormat::Skit => "skit",
            ContentFormat::Carousel => "carousel",
            ContentFormat::Thread => "thread",
            ContentFormat::Others => "others",
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Primary goal the content serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentGoal {
    Awareness,
    Education,
    Engagement,
    Leads,
    Sales,
    Authority,
    Retention,
    Others,
}

impl ContentGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentGoal::Awareness => "awareness",
            ContentGoal::Education => "education",
            ContentGoal::Engagement => "engagement",
            ContentGoal::Leads => "leads",
            ContentGoal::Sales => "sales",
            ContentGoal::Authority => "authority",
            ContentGoal::Retention => "retention",
            ContentGoal::Others => "others",
        }
    }
}

impl fmt::Display for ContentGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl AudienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudienceLevel::Beginner => "beginner",
            AudienceLevel::Intermediate => "intermediate",
            AudienceLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for AudienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How deep the content should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthLevel {
    Surface,
    Practical,
    Technical,
    DataCase,
}

impl DepthLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DepthLevel::Surface => "surface",
            DepthLevel::Practical => "practical",
            DepthLevel::Technical => "technical",
            DepthLevel::DataCase => "data_case",
        }
    }
}

impl fmt::Display for DepthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How adventurous the generated ideas should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Balanced,
    Bold,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Balanced => "balanced",
            RiskLevel::Bold => "bold",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Estimated production effort of an idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionEffort {
    Low,
    Medium,
    High,
}

impl ProductionEffort {
    pub const ALL: &'static [&'static str] = &["low", "medium", "high"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductionEffort::Low => "low",
            ProductionEffort::Medium => "medium",
            ProductionEffort::High => "high",
        }
    }
}

impl fmt::Display for ProductionEffort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Form input for a batch of content ideas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaRequest {
    pub industry: Industry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_other: Option<String>,
    pub sub_niche: String,
    pub content_format: ContentFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_format_other: Option<String>,
    pub audience_segment: String,
    pub audience_level: AudienceLevel,
    pub audience_geo: String,
    pub content_goal: ContentGoal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_goal_other: Option<String>,
    pub brand_voice_tags: Vec<String>,
    pub depth_level: DepthLevel,
    pub blacklist_topics: Vec<String>,
    pub idea_count: u32,
    pub risk_level: RiskLevel,
    pub include_cta: bool,
    pub include_hashtags: bool,
}

impl Default for IdeaRequest {
    fn default() -> Self {
        Self {
            industry: Industry::Tech,
            industry_other: None,
            sub_niche: String::new(),
            content_format: ContentFormat::Tutorial,
            content_format_other: None,
            audience_segment: String::new(),
            audience_level: AudienceLevel::Beginner,
            audience_geo: String::new(),
            content_goal: ContentGoal::Education,
            content_goal_other: None,
            brand_voice_tags: vec!["bersahabat".to_string(), "to-the-point".to_string()],
            depth_level: DepthLevel::Practical,
            blacklist_topics: vec![
                "motivasi umum".to_string(),
                "tips sukses generik".to_string(),
            ],
            idea_count: 10,
            risk_level: RiskLevel::Balanced,
            include_cta: true,
            include_hashtags: true,
        }
    }
}

impl IdeaRequest {
    /// Reject before dispatch if any `others` selector lacks its free-text
    /// companion or a required field is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_custom_value(
            "industry",
            self.industry == Industry::Others,
            self.industry_other.as_deref(),
        )?;
        require_custom_value(
            "content_format",
            self.content_format == ContentFormat::Others,
            self.content_format_other.as_deref(),
        )?;
        require_custom_value(
            "content_goal",
            self.content_goal == ContentGoal::Others,
            self.content_goal_other.as_deref(),
        )?;
        require_non_empty("sub_niche", &self.sub_niche)?;
        require_non_empty("audience_segment", &self.audience_segment)?;
        if self.idea_count == 0 {
            return Err(ValidationError::BelowMinimum {
                field: "idea_count",
                min: 1,
            });
        }
        Ok(())
    }

    /// Resolved industry text, never the `others` sentinel.
    pub fn industry_text(&self) -> &str {
        match self.industry {
            Industry::Others => self.industry_other.as_deref().unwrap_or_default(),
            other => other.as_str(),
        }
    }

    /// Resolved content-format text, never the `others` sentinel.
    pub fn content_format_text(&self) -> &str {
        match self.content_format {
            ContentFormat::Others => self.content_format_other.as_deref().unwrap_or_default(),
            other => other.as_str(),
        }
    }

    /// Resolved content-goal text, never the `others` sentinel.
    pub fn content_goal_text(&self) -> &str {
        match self.content_goal {
            ContentGoal::Others => self.content_goal_other.as_deref().unwrap_or_default(),
            other => other.as_str(),
        }
    }
}

/// Per-idea quality scores, each in [0, 10].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdeaScores {
    pub relevance: f64,
    pub novelty: f64,
    pub engagement_potential: f64,
    pub production_fit: f64,
}

impl IdeaScores {
    /// Weighted total in [0, 100].
    ///
    /// Weights: relevance 0.40, engagement potential 0.25, production fit
    /// 0.20, novelty 0.15. Inputs are clamped to [0, 10] first so the
    /// total stays within range whatever the provider returned.
    pub fn total_score(&self) -> u32 {
        let clamp = |v: f64| v.clamp(0.0, 10.0);
        let weighted = clamp(self.relevance) * 0.40
            + clamp(self.engagement_potential) * 0.25
            + clamp(self.production_fit) * 0.20
            + clamp(self.novelty) * 0.15;
        (weighted * 10.0).round() as u32
    }
}

/// A single normalized content idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    /// Locally generated identifier; provider-supplied ids are discarded.
    pub id: String,
    /// Candidate hooks, first entry is the primary.
    pub hooks: Vec<String>,
    pub summary: String,
    pub unique_angle: String,
    pub outline: Vec<String>,
    pub cta: String,
    pub keywords: Vec<String>,
    pub hashtags: Vec<String>,
    pub effort: ProductionEffort,
    pub scores: IdeaScores,
    /// Always recomputed locally from `scores`, never trusted verbatim.
    pub total_score: u32,
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> IdeaRequest {
        IdeaRequest {
            sub_niche: "belajar saham".to_string(),
            audience_segment: "karyawan muda".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_total_score_weighting() {
        let scores = IdeaScores {
            relevance: 8.0,
            novelty: 6.0,
            engagement_potential: 7.0,
            production_fit: 9.0,
        };
        // 10 * (8*0.40 + 7*0.25 + 9*0.20 + 6*0.15) = 76.5 -> 77
        assert_eq!(scores.total_score(), 77);
    }

    #[test]
    fn test_total_score_bounds() {
        let max = IdeaScores {
            relevance: 10.0,
            novelty: 10.0,
            engagement_potential: 10.0,
            production_fit: 10.0,
        };
        assert_eq!(max.total_score(), 100);

        let min = IdeaScores {
            relevance: 0.0,
            novelty: 0.0,
            engagement_potential: 0.0,
            production_fit: 0.0,
        };
        assert_eq!(min.total_score(), 0);
    }

    #[test]
    fn test_total_score_clamps_out_of_range_inputs() {
        let scores = IdeaScores {
            relevance: 14.0,
            novelty: -3.0,
            engagement_potential: 10.0,
            production_fit: 10.0,
        };
        assert!(scores.total_score() <= 100);
    }

    #[test]
    fn test_validate_others_requires_custom_value() {
        let mut request = valid_request();
        request.industry = Industry::Others;
        assert_eq!(
            request.validate(),
            Err(ValidationError::MissingCustomValue { field: "industry" })
        );

        request.industry_other = Some("peternakan lebah".to_string());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_idea_count() {
        let mut request = valid_request();
        request.idea_count = 0;
        assert!(matches!(
            request.validate(),
            Err(ValidationError::BelowMinimum { .. })
        ));
    }

    #[test]
    fn test_resolved_text_never_leaks_sentinel() {
        let mut request = valid_request();
        request.content_goal = ContentGoal::Others;
        request.content_goal_other = Some("komunitas".to_string());
        assert_eq!(request.content_goal_text(), "komunitas");
        assert_eq!(request.industry_text(), "tech");
    }
}
