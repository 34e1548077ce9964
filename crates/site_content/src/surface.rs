//! Output surface contract for the mounters and an in-memory adapter.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
};

use crate::view::{NavLinkView, TileCardView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Page elements the mounters write to, addressed by stable DOM ids.
pub enum ElementSlot {
    /// Navigation container.
    SiteMenu,
    /// Brand title text.
    BrandTitle,
    /// Brand tagline text.
    BrandClaim,
    /// Brand logo image.
    BrandLogo,
    /// First footer line.
    FooterLine1,
    /// Second footer line.
    FooterLine2,
    /// Homepage heading.
    HomeH1,
    /// Homepage intro paragraph.
    HomeIntro,
    /// Homepage tile container.
    HomeTiles,
}

impl ElementSlot {
    /// Every slot, in mount order.
    pub const ALL: [ElementSlot; 9] = [
        ElementSlot::SiteMenu,
        ElementSlot::BrandTitle,
        ElementSlot::BrandClaim,
        ElementSlot::BrandLogo,
        ElementSlot::FooterLine1,
        ElementSlot::FooterLine2,
        ElementSlot::HomeH1,
        ElementSlot::HomeIntro,
        ElementSlot::HomeTiles,
    ];

    /// Homepage-only slots.
    pub const HOMEPAGE: [ElementSlot; 3] = [
        ElementSlot::HomeH1,
        ElementSlot::HomeIntro,
        ElementSlot::HomeTiles,
    ];

    /// Returns the `id` attribute of the element backing this slot.
    pub const fn dom_id(self) -> &'static str {
        match self {
            ElementSlot::SiteMenu => "siteMenu",
            ElementSlot::BrandTitle => "brandTitle",
            ElementSlot::BrandClaim => "brandClaim",
            ElementSlot::BrandLogo => "brandLogo",
            ElementSlot::FooterLine1 => "footerLine1",
            ElementSlot::FooterLine2 => "footerLine2",
            ElementSlot::HomeH1 => "homeH1",
            ElementSlot::HomeIntro => "homeIntro",
            ElementSlot::HomeTiles => "homeTiles",
        }
    }
}

/// Handle to the page the mounters render into.
///
/// Element-writing methods return `false` when the backing element does not exist on the
/// current page; callers treat that as "skip this step", never as an error.
pub trait SiteSurface {
    /// Path of the page being rendered, as reported by the location bar.
    fn current_path(&self) -> String;

    /// Sets a CSS custom property on the document root.
    fn set_css_variable(&self, name: &str, value: &str);

    /// Replaces the text content of an element.
    fn set_text(&self, slot: ElementSlot, text: &str) -> bool;

    /// Points an image element at `src`.
    fn set_image_source(&self, slot: ElementSlot, src: &str) -> bool;

    /// Hides an element.
    fn hide(&self, slot: ElementSlot) -> bool;

    /// Clears the navigation container and renders `links` into it.
    fn replace_nav_links(&self, links: &[NavLinkView]) -> bool;

    /// Clears the tile container and renders `cards` into it.
    fn replace_tile_cards(&self, cards: &[TileCardView]) -> bool;
}

#[derive(Debug, Default)]
struct MemorySurfaceState {
    current_path: String,
    present: BTreeSet<ElementSlot>,
    css_variables: BTreeMap<String, String>,
    text: BTreeMap<ElementSlot, String>,
    image_sources: BTreeMap<ElementSlot, String>,
    hidden: BTreeSet<ElementSlot>,
    nav_links: Vec<NavLinkView>,
    tile_cards: Vec<TileCardView>,
}

#[derive(Debug, Clone, Default)]
/// In-memory surface recording every write, for tests and non-browser targets.
pub struct MemorySurface {
    inner: Rc<RefCell<MemorySurfaceState>>,
}

impl MemorySurface {
    /// Creates a surface at `current_path` with every element present.
    pub fn new(current_path: &str) -> Self {
        Self::with_slots(current_path, ElementSlot::ALL)
    }

    /// Creates a surface at `current_path` where only `slots` exist.
    pub fn with_slots(current_path: &str, slots: impl IntoIterator<Item = ElementSlot>) -> Self {
        let state = MemorySurfaceState {
            current_path: current_path.to_string(),
            present: slots.into_iter().collect(),
            ..MemorySurfaceState::default()
        };
        Self {
            inner: Rc::new(RefCell::new(state)),
        }
    }

    /// Creates a surface for a content page: every element except the homepage ones.
    pub fn content_page(current_path: &str) -> Self {
        Self::with_slots(
            current_path,
            ElementSlot::ALL
                .into_iter()
                .filter(|slot| !ElementSlot::HOMEPAGE.contains(slot)),
        )
    }

    /// Returns a CSS variable value when one was set.
    pub fn css_variable(&self, name: &str) -> Option<String> {
        self.inner.borrow().css_variables.get(name).cloned()
    }

    /// Returns every CSS variable set so far.
    pub fn css_variables(&self) -> BTreeMap<String, String> {
        self.inner.borrow().css_variables.clone()
    }

    /// Returns an element's text when it was set.
    pub fn text(&self, slot: ElementSlot) -> Option<String> {
        self.inner.borrow().text.get(&slot).cloned()
    }

    /// Returns an image element's source when it was set.
    pub fn image_source(&self, slot: ElementSlot) -> Option<String> {
        self.inner.borrow().image_sources.get(&slot).cloned()
    }

    /// Returns whether an element was hidden.
    pub fn is_hidden(&self, slot: ElementSlot) -> bool {
        self.inner.borrow().hidden.contains(&slot)
    }

    /// Returns the navigation anchors currently rendered.
    pub fn nav_links(&self) -> Vec<NavLinkView> {
        self.inner.borrow().nav_links.clone()
    }

    /// Returns the tile cards currently rendered.
    pub fn tile_cards(&self) -> Vec<TileCardView> {
        self.inner.borrow().tile_cards.clone()
    }

    fn has(&self, slot: ElementSlot) -> bool {
        self.inner.borrow().present.contains(&slot)
    }
}

impl SiteSurface for MemorySurface {
    fn current_path(&self) -> String {
        self.inner.borrow().current_path.clone()
    }

    fn set_css_variable(&self, name: &str, value: &str) {
        self.inner
            .borrow_mut()
            .css_variables
            .insert(name.to_string(), value.to_string());
    }

    fn set_text(&self, slot: ElementSlot, text: &str) -> bool {
        if !self.has(slot) {
            return false;
        }
        self.inner.borrow_mut().text.insert(slot, text.to_string());
        true
    }

    fn set_image_source(&self, slot: ElementSlot, src: &str) -> bool {
        if !self.has(slot) {
            return false;
        }
        self.inner
            .borrow_mut()
            .image_sources
            .insert(slot, src.to_string());
        true
    }

    fn hide(&self, slot: ElementSlot) -> bool {
        if !self.has(slot) {
            return false;
        }
        self.inner.borrow_mut().hidden.insert(slot);
        true
    }

    fn replace_nav_links(&self, links: &[NavLinkView]) -> bool {
        if !self.has(ElementSlot::SiteMenu) {
            return false;
        }
        self.inner.borrow_mut().nav_links = links.to_vec();
        true
    }

    fn replace_tile_cards(&self, cards: &[TileCardView]) -> bool {
        if !self.has(ElementSlot::HomeTiles) {
            return false;
        }
        self.inner.borrow_mut().tile_cards = cards.to_vec();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_are_unique() {
        let ids: BTreeSet<&str> = ElementSlot::ALL.iter().map(|slot| slot.dom_id()).collect();
        assert_eq!(ids.len(), ElementSlot::ALL.len());
    }

    #[test]
    fn memory_surface_skips_missing_elements() {
        let surface = MemorySurface::with_slots("/", [ElementSlot::BrandTitle]);

        assert!(surface.set_text(ElementSlot::BrandTitle, "Titel"));
        assert!(!surface.set_text(ElementSlot::BrandClaim, "Claim"));
        assert!(!surface.hide(ElementSlot::BrandLogo));
        assert!(!surface.replace_nav_links(&[]));
        assert!(!surface.replace_tile_cards(&[]));

        assert_eq!(surface.text(ElementSlot::BrandTitle).as_deref(), Some("Titel"));
        assert_eq!(surface.text(ElementSlot::BrandClaim), None);
        assert!(!surface.is_hidden(ElementSlot::BrandLogo));
    }

    #[test]
    fn content_page_lacks_homepage_elements_only() {
        let surface = MemorySurface::content_page("/verein");
        assert_eq!(surface.current_path(), "/verein");
        assert!(surface.set_text(ElementSlot::FooterLine1, "x"));
        assert!(!surface.set_text(ElementSlot::HomeH1, "x"));
        assert!(!surface.replace_tile_cards(&[]));
    }

    #[test]
    fn clones_share_recorded_state() {
        let surface = MemorySurface::new("/");
        let handle = surface.clone();
        handle.set_css_variable("--bg", "white");
        assert_eq!(surface.css_variable("--bg").as_deref(), Some("white"));
    }
}
