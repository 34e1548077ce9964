//! Target routing for browser interop.
//!
//! This module forwards to the web-sys implementation on `wasm32` and to an inert shim elsewhere,
//! keeping one API for the loader and surface adapters.

use serde_json::Value;
use site_content::{ContentError, NavLinkView, TileCardView};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn fetch_json(path: &str) -> Result<Value, ContentError> {
    imp::fetch_json(path).await
}

pub fn current_path() -> String {
    imp::current_path()
}

pub fn set_root_css_variable(name: &str, value: &str) {
    imp::set_root_css_variable(name, value)
}

pub fn set_element_text(id: &str, text: &str) -> bool {
    imp::set_element_text(id, text)
}

pub fn set_element_attribute(id: &str, name: &str, value: &str) -> bool {
    imp::set_element_attribute(id, name, value)
}

pub fn hide_element(id: &str) -> bool {
    imp::hide_element(id)
}

pub fn replace_nav_links(id: &str, links: &[NavLinkView]) -> bool {
    imp::replace_nav_links(id, links)
}

pub fn replace_tile_cards(id: &str, cards: &[TileCardView]) -> bool {
    imp::replace_tile_cards(id, cards)
}
