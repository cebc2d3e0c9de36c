//! Hook generation request and result types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::{require_non_empty, ValidationError};

/// Output language for generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLanguage {
    English,
    #[default]
    Indonesia,
}

impl OutputLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputLanguage::English => "english",
            OutputLanguage::Indonesia => "indonesia",
        }
    }
}

impl fmt::Display for OutputLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The 12 fixed psychological hook frameworks. Every hook generation run
/// must cover each framework exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookFramework {
    FearBased,
    WakeUpCall,
    UrgencyTime,
    CuriosityMystery,
    ValuePromise,
    RelatableEmpathy,
    Storytelling,
    Question,
    NegativityContrarian,
    CallOut,
    ListNumbered,
    Trend,
}

impl HookFramework {
    pub const ALL: &'static [HookFramework] = &[
        HookFramework::FearBased,
        HookFramework::WakeUpCall,
        HookFramework::UrgencyTime,
        HookFramework::CuriosityMystery,
        HookFramework::ValuePromise,
        HookFramework::RelatableEmpathy,
        HookFramework::Storytelling,
        HookFramework::Question,
        HookFramework::NegativityContrarian,
        HookFramework::CallOut,
        HookFramework::ListNumbered,
        HookFramework::Trend,
    ];

    /// Framework name as it appears in prompts and provider output.
    pub fn as_str(&self) -> &'static str {
        match self {
            HookFramework::FearBased => "Fear-Based",
            HookFramework::WakeUpCall => "Wake-Up Call",
            HookFramework::UrgencyTime => "Urgency/Time",
            HookFramework::CuriosityMystery => "Curiosity/Mystery",
            HookFramework::ValuePromise => "Value/Promise",
            HookFramework::RelatableEmpathy => "Relatable/Empathy",
            HookFramework::Storytelling => "Storytelling/Personal Journey",
            HookFramework::Question => "Question",
            HookFramework::NegativityContrarian => "Negativity/Contrarian",
            HookFramework::CallOut => "Call-Out",
            HookFramework::ListNumbered => "List/Numbered",
            HookFramework::Trend => "Trend",
        }
    }
}

impl fmt::Display for HookFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Form input for a hook set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HookRequest {
    /// Description of the content the hooks should open.
    pub script: String,
    /// Free-text tone; empty means the documented casual default.
    pub tone: String,
    pub output_language: OutputLanguage,
}

impl HookRequest {
    /// Default tone used when the free-text tone is left blank.
    pub const DEFAULT_TONE: &'static str = "bahasa sehari hari yang informal";

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("script", &self.script)
    }

    /// Effective tone text, falling back to [`Self::DEFAULT_TONE`].
    pub fn tone_text(&self) -> &str {
        let tone = self.tone.trim();
        if tone.is_empty() {
            Self::DEFAULT_TONE
        } else {
            tone
        }
    }
}

/// One generated hook pair for a framework.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedHook {
    /// Framework label as reported by the provider.
    pub framework: String,
    /// 4-6 impactful words for on-screen text.
    pub visual_hook: String,
    /// Speakable, punchy narration of 15-20 words.
    pub voice_over_hook: String,
}

/// A normalized hook set: exactly one hook per framework.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookSet {
    pub hooks: Vec<GeneratedHook>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_frameworks() {
        assert_eq!(HookFramework::ALL.len(), 12);
        let mut names: Vec<&str> = HookFramework::ALL.iter().map(|f| f.as_str()).collect();
        names.dedup();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_tone_defaults_when_blank() {
        let request = HookRequest {
            script: "cara ngatur uang gaji pertama".to_string(),
            tone: "  ".to_string(),
            output_language: OutputLanguage::Indonesia,
        };
        assert_eq!(request.tone_text(), HookRequest::DEFAULT_TONE);
    }

    #[test]
    fn test_empty_script_rejected() {
        let request = HookRequest::default();
        assert_eq!(
            request.validate(),
            Err(ValidationError::EmptyField { field: "script" })
        );
    }
}
