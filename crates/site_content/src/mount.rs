//! Mounters that project the site document onto a [`SiteSurface`].
//!
//! Each mounter is idempotent: list mounters clear prior output before rendering and text
//! mounters overwrite in place, so re-running with a new document never leaks old entries.

use crate::{
    site::{FooterLines, NavItem, SiteDocument, StartSection},
    surface::{ElementSlot, SiteSurface},
    view::{brand_view, footer_view, nav_links, start_view, MountLabels},
};

/// Sets brand title, tagline, and logo.
///
/// A missing logo hides the logo element; a present logo only changes its source.
pub fn mount_brand<S: SiteSurface + ?Sized>(
    surface: &S,
    site: &SiteDocument,
    labels: &MountLabels,
) {
    let brand = brand_view(site, labels);
    surface.set_text(ElementSlot::BrandTitle, &brand.title);
    surface.set_text(ElementSlot::BrandClaim, &brand.claim);
    match brand.logo {
        Some(src) => {
            surface.set_image_source(ElementSlot::BrandLogo, &src);
        }
        None => {
            surface.hide(ElementSlot::BrandLogo);
        }
    }
}

/// Re-renders the navigation for the surface's current path.
///
/// Returns the number of anchors rendered, or `0` when the page has no navigation container.
pub fn mount_nav<S: SiteSurface + ?Sized>(surface: &S, items: &[NavItem]) -> usize {
    let links = nav_links(items, &surface.current_path());
    if surface.replace_nav_links(&links) {
        links.len()
    } else {
        0
    }
}

/// Sets both footer lines.
pub fn mount_footer<S: SiteSurface + ?Sized>(surface: &S, footer: &FooterLines) {
    let footer = footer_view(footer);
    surface.set_text(ElementSlot::FooterLine1, &footer.line1);
    surface.set_text(ElementSlot::FooterLine2, &footer.line2);
}

/// Sets homepage heading and intro and re-renders the tile cards.
///
/// Returns the number of cards rendered, or `0` when the page has no tile container.
pub fn mount_start<S: SiteSurface + ?Sized>(
    surface: &S,
    start: &StartSection,
    labels: &MountLabels,
) -> usize {
    let start = start_view(start, labels);
    surface.set_text(ElementSlot::HomeH1, &start.h1);
    surface.set_text(ElementSlot::HomeIntro, &start.intro);
    if surface.replace_tile_cards(&start.tiles) {
        start.tiles.len()
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::surface::MemorySurface;

    fn site(value: serde_json::Value) -> SiteDocument {
        serde_json::from_value(value).expect("site document")
    }

    #[test]
    fn brand_without_logo_hides_the_logo() {
        let surface = MemorySurface::new("/");
        mount_brand(&surface, &SiteDocument::default(), &MountLabels::default());

        assert_eq!(
            surface.text(ElementSlot::BrandTitle).as_deref(),
            Some("Ortsgemeinschaft")
        );
        assert_eq!(surface.text(ElementSlot::BrandClaim).as_deref(), Some(""));
        assert!(surface.is_hidden(ElementSlot::BrandLogo));
        assert_eq!(surface.image_source(ElementSlot::BrandLogo), None);
    }

    #[test]
    fn brand_with_logo_sets_source_and_keeps_visibility() {
        let surface = MemorySurface::new("/");
        let doc = site(json!({ "title": "Dorf", "claim": "Gemeinsam", "logo": "/logo.svg" }));
        mount_brand(&surface, &doc, &MountLabels::default());

        assert_eq!(surface.text(ElementSlot::BrandTitle).as_deref(), Some("Dorf"));
        assert_eq!(
            surface.image_source(ElementSlot::BrandLogo).as_deref(),
            Some("/logo.svg")
        );
        assert!(!surface.is_hidden(ElementSlot::BrandLogo));
    }

    #[test]
    fn nav_marks_active_entry_for_current_path() {
        let surface = MemorySurface::new("/b");
        let doc = site(json!({
            "nav": [{ "href": "/a", "label": "A" }, { "href": "/b/", "label": "B" }]
        }));

        assert_eq!(mount_nav(&surface, &doc.nav), 2);
        let links = surface.nav_links();
        assert!(!links[0].active);
        assert!(links[1].active);
    }

    #[test]
    fn nav_remount_replaces_previous_entries() {
        let surface = MemorySurface::new("/");
        let first = site(json!({
            "nav": [{ "href": "/", "label": "Start" }, { "href": "/alt", "label": "Alt" }]
        }));
        let second = site(json!({ "nav": [{ "href": "/neu", "label": "Neu" }] }));

        mount_nav(&surface, &first.nav);
        mount_nav(&surface, &second.nav);

        let labels: Vec<String> = surface
            .nav_links()
            .into_iter()
            .map(|link| link.label)
            .collect();
        assert_eq!(labels, vec!["Neu".to_string()]);
    }

    #[test]
    fn nav_without_container_renders_nothing() {
        let surface = MemorySurface::with_slots("/", [ElementSlot::BrandTitle]);
        let doc = site(json!({ "nav": [{ "href": "/", "label": "Start" }] }));
        assert_eq!(mount_nav(&surface, &doc.nav), 0);
        assert!(surface.nav_links().is_empty());
    }

    #[test]
    fn footer_sets_both_lines_with_empty_defaults() {
        let surface = MemorySurface::new("/");
        mount_footer(&surface, &site(json!({ "footer": { "line1": "Impressum" } })).footer);

        assert_eq!(
            surface.text(ElementSlot::FooterLine1).as_deref(),
            Some("Impressum")
        );
        assert_eq!(surface.text(ElementSlot::FooterLine2).as_deref(), Some(""));
    }

    #[test]
    fn start_renders_uppercased_cards_and_replaces_on_remount() {
        let surface = MemorySurface::new("/");
        let doc = site(json!({
            "start": {
                "h1": "Willkommen",
                "tiles": [{ "title": "home", "text": "t", "href": "/h" }]
            }
        }));

        assert_eq!(mount_start(&surface, &doc.start, &MountLabels::default()), 1);
        assert_eq!(surface.text(ElementSlot::HomeH1).as_deref(), Some("Willkommen"));
        assert_eq!(surface.text(ElementSlot::HomeIntro).as_deref(), Some(""));
        let cards = surface.tile_cards();
        assert_eq!(cards[0].heading, "HOME");
        assert_eq!(cards[0].href, "/h");

        assert_eq!(
            mount_start(&surface, &StartSection::default(), &MountLabels::default()),
            0
        );
        assert!(surface.tile_cards().is_empty());
    }

    #[test]
    fn start_on_content_page_touches_nothing() {
        let surface = MemorySurface::content_page("/verein");
        let doc = site(json!({
            "start": { "h1": "Willkommen", "tiles": [{ "title": "a" }] }
        }));

        assert_eq!(mount_start(&surface, &doc.start, &MountLabels::default()), 0);
        assert_eq!(surface.text(ElementSlot::HomeH1), None);
        assert!(surface.tile_cards().is_empty());
    }
}
