//! DOM-backed output surface.

use site_content::{ElementSlot, NavLinkView, SiteSurface, TileCardView};

#[derive(Debug, Clone, Copy, Default)]
/// Surface writing to `document` of the current browser window.
///
/// Elements are looked up by id on every call, so the surface stays valid across re-renders of
/// the surrounding page.
pub struct DomSurface;

impl SiteSurface for DomSurface {
    fn current_path(&self) -> String {
        crate::interop::current_path()
    }

    fn set_css_variable(&self, name: &str, value: &str) {
        crate::interop::set_root_css_variable(name, value);
    }

    fn set_text(&self, slot: ElementSlot, text: &str) -> bool {
        crate::interop::set_element_text(slot.dom_id(), text)
    }

    fn set_image_source(&self, slot: ElementSlot, src: &str) -> bool {
        crate::interop::set_element_attribute(slot.dom_id(), "src", src)
    }

    fn hide(&self, slot: ElementSlot) -> bool {
        crate::interop::hide_element(slot.dom_id())
    }

    fn replace_nav_links(&self, links: &[NavLinkView]) -> bool {
        crate::interop::replace_nav_links(ElementSlot::SiteMenu.dom_id(), links)
    }

    fn replace_tile_cards(&self, cards: &[TileCardView]) -> bool {
        crate::interop::replace_tile_cards(ElementSlot::HomeTiles.dom_id(), cards)
    }
}
