use std::fmt;

use thiserror::Error;
use url::Url;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaValidationError {
    #[error("media link cannot be empty")]
    EmptyLink,

    #[error("media link `{raw}` is not a valid URL")]
    InvalidUrl { raw: String },

    #[error("media link `{raw}` must use http or https")]
    UnsupportedScheme { raw: String },
}

//
// ─── MEDIA LINK ────────────────────────────────────────────────────────────────
//

/// Absolute http(s) link to an external resource (video, reference image, tool site).
#[derive(Clone, PartialEq, Eq)]
pub struct MediaLink(Url);

impl MediaLink {
    /// Parses and validates a link.
    ///
    /// # Errors
    ///
    /// Returns `MediaValidationError` if the value is blank, not a URL, or not http(s).
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyLink);
        }
        let url = Url::parse(s).map_err(|_| MediaValidationError::InvalidUrl { raw: s.to_string() })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(MediaValidationError::UnsupportedScheme { raw: s.to_string() });
        }
        Ok(Self(url))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the embeddable form of a YouTube watch link, or the link itself.
    #[must_use]
    pub fn embed_url(&self) -> String {
        let host = self.0.host_str().unwrap_or_default();
        if host.ends_with("youtube.com") && self.0.path() == "/watch" {
            if let Some((_, id)) = self.0.query_pairs().find(|(key, _)| key == "v") {
                return format!("https://www.youtube.com/embed/{id}");
            }
        }
        if host == "youtu.be" {
            let id = self.0.path().trim_start_matches('/');
            if !id.is_empty() {
                return format!("https://www.youtube.com/embed/{id}");
            }
        }
        self.0.to_string()
    }
}

impl fmt::Debug for MediaLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MediaLink({})", self.0)
    }
}

impl fmt::Display for MediaLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
