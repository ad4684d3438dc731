//! Validated results produced by the generative tools.

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::text::{TextError, require_text, require_texts};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArtifactError {
    #[error(transparent)]
    Text(#[from] TextError),

    #[error("generated image is empty")]
    EmptyImage,

    #[error("palette needs at least one color")]
    EmptyPalette,

    #[error("`{0}` is not a #RRGGBB color")]
    InvalidColor(String),

    #[error("audit score {0} is outside 0..=100")]
    ScoreOutOfRange(i64),
}

//
// ─── IMAGE ─────────────────────────────────────────────────────────────────────
//

#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    mime_type: String,
    bytes: Vec<u8>,
}

impl GeneratedImage {
    /// # Errors
    ///
    /// Returns `ArtifactError::EmptyImage` if there are no bytes.
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ArtifactError> {
        if bytes.is_empty() {
            return Err(ArtifactError::EmptyImage);
        }
        Ok(Self {
            mime_type: require_text("image mime type", mime_type)?,
            bytes,
        })
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for GeneratedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedImage")
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

//
// ─── VIBE MANIFESTO ────────────────────────────────────────────────────────────
//

/// Palette, typography and mood produced for a project brief.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VibeManifesto {
    palette: Vec<String>,
    fonts: Vec<String>,
    description: String,
}

impl VibeManifesto {
    /// Colors are normalized to uppercase `#RRGGBB`.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactError` if the palette is empty, a color is malformed,
    /// a font name is blank, or the description is blank.
    pub fn new(
        palette: Vec<String>,
        fonts: Vec<String>,
        description: impl Into<String>,
    ) -> Result<Self, ArtifactError> {
        if palette.is_empty() {
            return Err(ArtifactError::EmptyPalette);
        }
        let palette = palette
            .into_iter()
            .map(|color| normalize_hex(&color).ok_or(ArtifactError::InvalidColor(color)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            palette,
            fonts: require_texts("font", fonts)?,
            description: require_text("vibe description", description)?,
        })
    }

    #[must_use]
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    #[must_use]
    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

fn normalize_hex(raw: &str) -> Option<String> {
    let digits = raw.trim().strip_prefix('#').unwrap_or(raw.trim());
    let digits = match digits.len() {
        6 => digits.to_string(),
        3 => digits.chars().flat_map(|ch| [ch, ch]).collect(),
        _ => return None,
    };
    if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    Some(format!("#{}", digits.to_ascii_uppercase()))
}

//
// ─── PROMPT AUDIT ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptAudit {
    score: u8,
    feedback: String,
    level: String,
}

impl PromptAudit {
    /// # Errors
    ///
    /// Returns `ArtifactError` if the score is outside 0..=100 or a text field is blank.
    pub fn new(
        score: i64,
        feedback: impl Into<String>,
        level: impl Into<String>,
    ) -> Result<Self, ArtifactError> {
        let score = u8::try_from(score)
            .ok()
            .filter(|value| *value <= 100)
            .ok_or(ArtifactError::ScoreOutOfRange(score))?;
        Ok(Self {
            score,
            feedback: require_text("audit feedback", feedback)?,
            level: require_text("audit level", level)?,
        })
    }

    #[must_use]
    pub fn score(&self) -> u8 {
        self.score
    }

    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }
}

//
// ─── CERTIFICATE ───────────────────────────────────────────────────────────────
//

/// Proof of graduation. Only issued once every module is mastered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub learner: String,
    pub issued_on: NaiveDate,
    pub xp: u32,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_normalized() {
        let vibe = VibeManifesto::new(
            vec!["#1e40af".into(), "fff".into()],
            vec!["Inter".into()],
            "Calm and focused",
        )
        .unwrap();
        assert_eq!(vibe.palette(), ["#1E40AF", "#FFFFFF"]);
    }

    #[test]
    fn palette_rejects_named_colors() {
        let err = VibeManifesto::new(vec!["blue".into()], Vec::new(), "x").unwrap_err();
        assert_eq!(err, ArtifactError::InvalidColor("blue".into()));
    }

    #[test]
    fn empty_palette_is_rejected() {
        let err = VibeManifesto::new(Vec::new(), Vec::new(), "x").unwrap_err();
        assert_eq!(err, ArtifactError::EmptyPalette);
    }

    #[test]
    fn audit_score_must_be_a_percentage() {
        assert_eq!(
            PromptAudit::new(101, "ok", "Pro").unwrap_err(),
            ArtifactError::ScoreOutOfRange(101)
        );
        assert_eq!(
            PromptAudit::new(-1, "ok", "Pro").unwrap_err(),
            ArtifactError::ScoreOutOfRange(-1)
        );
        assert_eq!(PromptAudit::new(87, "ok", "Pro").unwrap().score(), 87);
    }

    #[test]
    fn empty_image_is_rejected() {
        assert_eq!(
            GeneratedImage::new("image/png", Vec::new()).unwrap_err(),
            ArtifactError::EmptyImage
        );
    }
}
