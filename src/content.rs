//! Bundled page copy and per-widget carousel settings.
//!
//! The page is static, so everything lives in `content/site.json` and is
//! compiled into the binary. Components read it through context.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use carousel::CarouselConfig;
use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("section `{0}` is listed twice")]
    DuplicateSection(String),
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteContent {
    pub brand: String,
    pub sections: Vec<NavSection>,
    pub hero: Deck<HeroSlide>,
    pub stats: Vec<Stat>,
    pub methodology: Vec<MethodStep>,
    pub case_studies: Deck<CaseStudy>,
    pub team: Deck<TeamMember>,
    pub countries: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NavSection {
    pub id: String,
    pub label: String,
}

/// Slides plus the carousel settings that drive them.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Deck<T> {
    pub carousel: CarouselConfig,
    pub slides: Vec<T>,
}

impl<T> Default for Deck<T> {
    fn default() -> Self {
        Self { carousel: CarouselConfig::default(), slides: Vec::new() }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    /// Section id the call to action scrolls to.
    pub cta_target: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Stat {
    /// Display value such as `50+` or `98%`.
    pub value: String,
    pub label: String,
    pub detail: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MethodStep {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CaseStudy {
    pub client: String,
    pub industry: String,
    pub summary: String,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
}

impl SiteContent {
    /// Parse site content from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] for malformed JSON or repeated section ids.
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        for (i, section) in content.sections.iter().enumerate() {
            if content.sections[..i].iter().any(|s| s.id == section.id) {
                return Err(ContentError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(content)
    }

    /// The compiled-in site. A broken bundle renders an empty page rather
    /// than failing hydration.
    pub fn bundled() -> Self {
        match Self::parse(SITE_JSON) {
            Ok(content) => content,
            Err(e) => {
                leptos::logging::warn!("bundled site content rejected: {e}");
                Self::default()
            }
        }
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }
}
