//! Page-load boot sequence: load both documents and run every mounter once.

use leptos::logging;
use site_content::{
    apply_theme, load_document_with, mount_brand, mount_footer, mount_nav, mount_start,
    ContentError, DocumentLoader, SiteDocument, SiteSurface, ThemeDocument,
};

use crate::config::MountConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Outcome of one [`mount_site`] pass.
pub struct MountReport {
    /// Why the theme document was skipped, if it was.
    pub theme_error: Option<ContentError>,
    /// Why the site document fell back to defaults, if it did.
    pub site_error: Option<ContentError>,
    /// CSS variables written from the theme.
    pub css_variables: usize,
    /// Navigation anchors rendered.
    pub nav_links: usize,
    /// Homepage cards rendered.
    pub tile_cards: usize,
}

impl MountReport {
    /// Returns whether both documents loaded.
    pub fn is_complete(&self) -> bool {
        self.theme_error.is_none() && self.site_error.is_none()
    }
}

/// Loads the theme and site documents and mounts them onto `surface`.
///
/// The theme is loaded and applied before the site document is requested. A failed theme load
/// leaves the stylesheet defaults in place; a failed site load mounts every component from an
/// empty document. Failures are logged and reported, never raised.
pub async fn mount_site<S, L>(surface: &S, loader: &L, config: &MountConfig) -> MountReport
where
    S: SiteSurface + ?Sized,
    L: DocumentLoader + ?Sized,
{
    let mut report = MountReport::default();

    let theme: Result<ThemeDocument, ContentError> =
        load_document_with(loader, &config.theme_path).await;
    match theme {
        Ok(theme) => report.css_variables = apply_theme(surface, &theme),
        Err(err) => {
            logging::warn!("theme document skipped: {err}");
            report.theme_error = Some(err);
        }
    }

    let site: Result<SiteDocument, ContentError> =
        load_document_with(loader, &config.site_path).await;
    let site = match site {
        Ok(site) => site,
        Err(err) => {
            logging::warn!("site document skipped, mounting defaults: {err}");
            report.site_error = Some(err);
            SiteDocument::default()
        }
    };

    mount_brand(surface, &site, &config.labels);
    report.nav_links = mount_nav(surface, &site.nav);
    mount_footer(surface, &site.footer);
    report.tile_cards = mount_start(surface, &site.start, &config.labels);

    report
}
