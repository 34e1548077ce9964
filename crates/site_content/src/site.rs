//! Site document schema: branding, navigation, footer, and homepage copy.

use serde::{Deserialize, Serialize};

use crate::lenient;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
/// Content document served as `site.json`.
pub struct SiteDocument {
    /// Brand title shown in the header.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Brand tagline.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub claim: Option<String>,
    /// Logo image URL.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Header navigation entries in display order.
    #[serde(deserialize_with = "lenient::entries")]
    pub nav: Vec<NavItem>,
    /// Footer text lines.
    #[serde(deserialize_with = "lenient::section")]
    pub footer: FooterLines,
    /// Homepage-only copy and tiles.
    #[serde(deserialize_with = "lenient::section")]
    pub start: StartSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
/// One header navigation link.
pub struct NavItem {
    /// Link target; matched against the current path after normalization.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Link text.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
/// Two independent footer text lines.
pub struct FooterLines {
    /// First footer line.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    /// Second footer line.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
/// Homepage heading, intro paragraph, and content tiles.
pub struct StartSection {
    /// Homepage heading.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub h1: Option<String>,
    /// Homepage intro paragraph.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    /// Tiles in display order.
    #[serde(deserialize_with = "lenient::entries")]
    pub tiles: Vec<Tile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
/// A homepage content card.
pub struct Tile {
    /// Card heading, rendered uppercased.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Card body text.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Link behind the card button.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}
