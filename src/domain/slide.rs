use serde::{Deserialize, Serialize};
use strum::Display;

/// Horizontal placement of a slide's content block inside the hero banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

/// One rotating promotional entry of the hero banner
///
/// `image` is an opaque reference resolved by whatever serves assets; it is
/// stored and displayed verbatim, never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta: String,
    #[serde(default)]
    pub alignment: Alignment,
}

impl Slide {
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        description: impl Into<String>,
        cta: impl Into<String>,
        alignment: Alignment,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            description: description.into(),
            cta: cta.into(),
            alignment,
        }
    }

    /// CTA label as rendered on the banner button
    pub fn cta_label(&self) -> String {
        self.cta.to_uppercase()
    }
}
