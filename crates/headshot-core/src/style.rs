//! Style catalog: the fixed set of headshot presets and the prompt they steer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Instruction sent ahead of every style request. The style's detail text is
/// appended directly after the trailing `Current Style Request: `.
pub const SYSTEM_PROMPT: &str = "You are a professional portrait photographer and photo editor specializing in high-end corporate headshots.
Your task is to transform a personal, casual photo into a professional studio-quality headshot suitable for a resume or LinkedIn profile.

Instructions:
1. Maintain the person's identity and facial features accurately.
2. Change the attire to professional business wear (as specified by the user's selected style).
3. Set the background to a clean, professional studio backdrop (light grey, white, or subtle blue gradient).
4. Apply professional studio lighting (soft shadows, clear focus).
5. Improve the person's grooming (tidy hair, clean look) while keeping it natural.
6. The output must be a single, high-resolution image part.

Current Style Request: ";

/// A named headshot style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylePreset {
    #[default]
    FormalSuit,
    BusinessCasual,
    CreativeProfessional,
    PassportStyle,
}

impl StylePreset {
    /// Every preset, in display order.
    pub const ALL: [StylePreset; 4] = [
        StylePreset::FormalSuit,
        StylePreset::BusinessCasual,
        StylePreset::CreativeProfessional,
        StylePreset::PassportStyle,
    ];

    /// Human-readable label shown in the style picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::FormalSuit => "Formal Suit (Dark)",
            Self::BusinessCasual => "Business Casual",
            Self::CreativeProfessional => "Creative Professional",
            Self::PassportStyle => "Standard ID Style",
        }
    }

    /// Attire and framing description that steers the model.
    pub fn detail(self) -> &'static str {
        match self {
            Self::FormalSuit => {
                "Dark professional blazer, white shirt, and tie (if male) or blouse (if female). Formal and authoritative."
            }
            Self::BusinessCasual => {
                "Clean button-down shirt or smart sweater. Modern and approachable."
            }
            Self::CreativeProfessional => {
                "Smart jacket with a stylish shirt. Artistic yet professional."
            }
            Self::PassportStyle => {
                "Very clean white background, standard attire, neutral expression, perfectly centered."
            }
        }
    }

    /// Identifier used in config and serialized output.
    pub fn slug(self) -> &'static str {
        match self {
            Self::FormalSuit => "formal-suit",
            Self::BusinessCasual => "business-casual",
            Self::CreativeProfessional => "creative-professional",
            Self::PassportStyle => "passport-style",
        }
    }

    /// Full prompt for this style: system instruction followed by the detail.
    pub fn prompt(self) -> String {
        format!("{SYSTEM_PROMPT}{}", self.detail())
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StylePreset {
    type Err = String;

    /// Accepts either the display label or the kebab-case identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|style| {
                style.label().eq_ignore_ascii_case(needle)
                    || style.slug().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|style| style.slug()).collect();
                format!(
                    "Unknown style preset: {needle} (expected one of {})",
                    known.join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_formal_suit() {
        assert_eq!(StylePreset::default(), StylePreset::FormalSuit);
    }

    #[test]
    fn test_prompt_appends_detail_after_style_request() {
        let prompt = StylePreset::BusinessCasual.prompt();
        assert!(prompt.starts_with("You are a professional portrait photographer"));
        assert!(prompt.ends_with(
            "Current Style Request: Clean button-down shirt or smart sweater. Modern and approachable."
        ));
    }

    #[test]
    fn test_every_preset_has_distinct_label_and_detail() {
        for (i, a) in StylePreset::ALL.iter().enumerate() {
            for b in &StylePreset::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
                assert_ne!(a.detail(), b.detail());
            }
        }
    }

    #[test]
    fn test_from_str_accepts_label_and_slug() {
        assert_eq!(
            "Standard ID Style".parse::<StylePreset>().unwrap(),
            StylePreset::PassportStyle
        );
        assert_eq!(
            "business-casual".parse::<StylePreset>().unwrap(),
            StylePreset::BusinessCasual
        );
        let err = "smoking jacket".parse::<StylePreset>().unwrap_err();
        assert!(err.contains("business-casual"), "Got: {err}");
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&StylePreset::CreativeProfessional).unwrap();
        assert_eq!(json, "\"creative-professional\"");
    }
}
