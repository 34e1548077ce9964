//! Render-ready projections of the site document.
//!
//! These are pure functions of the document (plus the current path for navigation) and carry
//! every default the page shows when a field is missing.

use serde::{Deserialize, Serialize};

use crate::{
    lenient,
    route::is_active_route,
    site::{FooterLines, NavItem, SiteDocument, StartSection, Tile},
};

/// Brand title used when the site document has none.
pub const DEFAULT_BRAND_TITLE: &str = "Ortsgemeinschaft";
/// Button label on every homepage tile.
pub const DEFAULT_TILE_LINK_LABEL: &str = "Öffnen";
/// Tile link target used when a tile has no href.
pub const TILE_FALLBACK_HREF: &str = "#";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Fixed page copy that does not come from the site document.
pub struct MountLabels {
    /// Brand title shown when the document has none.
    pub fallback_title: String,
    /// Text of the button link inside each tile card.
    pub tile_link_label: String,
}

impl Default for MountLabels {
    fn default() -> Self {
        Self {
            fallback_title: DEFAULT_BRAND_TITLE.to_string(),
            tile_link_label: DEFAULT_TILE_LINK_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Header branding.
pub struct BrandView {
    /// Title text.
    pub title: String,
    /// Tagline text.
    pub claim: String,
    /// Logo source; `None` means the logo element is hidden.
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rendered navigation anchor.
pub struct NavLinkView {
    /// Anchor href; `None` renders an anchor without a target.
    pub href: Option<String>,
    /// Anchor text.
    pub label: String,
    /// Marks the entry for the page currently shown.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Footer text.
pub struct FooterView {
    /// First line.
    pub line1: String,
    /// Second line.
    pub line2: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Homepage heading, intro, and cards.
pub struct StartView {
    /// Heading text.
    pub h1: String,
    /// Intro paragraph text.
    pub intro: String,
    /// Cards in document order.
    pub tiles: Vec<TileCardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rendered homepage card.
pub struct TileCardView {
    /// Uppercased tile title.
    pub heading: String,
    /// Tile body text.
    pub text: String,
    /// Button link target.
    pub href: String,
    /// Button link text.
    pub link_label: String,
}

/// Builds the header branding from the site document.
pub fn brand_view(site: &SiteDocument, labels: &MountLabels) -> BrandView {
    BrandView {
        title: lenient::non_empty(&site.title)
            .unwrap_or(labels.fallback_title.as_str())
            .to_string(),
        claim: site.claim.clone().unwrap_or_default(),
        logo: lenient::non_empty(&site.logo).map(str::to_string),
    }
}

/// Builds navigation anchors in document order, flagging the one matching `current_path`.
pub fn nav_links(items: &[NavItem], current_path: &str) -> Vec<NavLinkView> {
    items
        .iter()
        .map(|item| NavLinkView {
            href: item.href.clone(),
            label: item.label.clone().unwrap_or_default(),
            active: is_active_route(item.href.as_deref(), current_path),
        })
        .collect()
}

/// Builds the footer text lines.
pub fn footer_view(footer: &FooterLines) -> FooterView {
    FooterView {
        line1: footer.line1.clone().unwrap_or_default(),
        line2: footer.line2.clone().unwrap_or_default(),
    }
}

/// Builds one homepage card per tile.
pub fn tile_cards(tiles: &[Tile], link_label: &str) -> Vec<TileCardView> {
    tiles
        .iter()
        .map(|tile| TileCardView {
            heading: tile.title.as_deref().unwrap_or_default().to_uppercase(),
            text: tile.text.clone().unwrap_or_default(),
            href: lenient::non_empty(&tile.href)
                .unwrap_or(TILE_FALLBACK_HREF)
                .to_string(),
            link_label: link_label.to_string(),
        })
        .collect()
}

/// Builds the homepage section.
pub fn start_view(start: &StartSection, labels: &MountLabels) -> StartView {
    StartView {
        h1: start.h1.clone().unwrap_or_default(),
        intro: start.intro.clone().unwrap_or_default(),
        tiles: tile_cards(&start.tiles, &labels.tile_link_label),
    }
}
