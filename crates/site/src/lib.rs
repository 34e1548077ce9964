//! Browser entry crate for the community site mounter.
//!
//! [`mount_site`] is the one-shot render pass; [`mount`] wires it to the live document when the
//! crate is built for the browser.

mod boot;
mod config;

pub use boot::{mount_site, MountReport};
pub use config::{MountConfig, SITE_DOCUMENT_PATH, THEME_DOCUMENT_PATH};

/// Mounts theme and site content onto the current page.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::spawn_local(async {
        let config = MountConfig::default();
        let report = mount_site(
            &site_host_web::DomSurface,
            &site_host_web::WebDocumentLoader,
            &config,
        )
        .await;
        if !report.is_complete() {
            leptos::logging::log!(
                "site mounted with fallbacks ({} nav links, {} tiles)",
                report.nav_links,
                report.tile_cards
            );
        }
    });
}
