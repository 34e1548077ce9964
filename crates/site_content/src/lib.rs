//! Typed content documents and host-agnostic mounting for the community site.
//!
//! This crate owns the `theme.json` / `site.json` schemas, their projections onto CSS variables
//! and render-ready views, and the two service seams the browser layer implements:
//! [`DocumentLoader`] for fetching documents and [`SiteSurface`] for writing to the page. Concrete
//! browser adapters live in `site_host_web`; in-memory adapters here back the tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod lenient;
pub mod loader;
pub mod mount;
pub mod route;
pub mod site;
pub mod surface;
pub mod theme;
pub mod view;

pub use loader::{
    load_document_with, ContentError, DocumentLoader, DocumentLoaderFuture, MemoryDocumentLoader,
    NoopDocumentLoader,
};
pub use mount::{mount_brand, mount_footer, mount_nav, mount_start};
pub use route::{is_active_route, normalize_route_path};
pub use site::{FooterLines, NavItem, SiteDocument, StartSection, Tile};
pub use surface::{ElementSlot, MemorySurface, SiteSurface};
pub use theme::{
    apply_theme, theme_css_variables, CssVariable, ThemeColors, ThemeDocument, ThemeLayout,
    ThemePattern,
};
pub use view::{
    brand_view, footer_view, nav_links, start_view, tile_cards, BrandView, FooterView,
    MountLabels, NavLinkView, StartView, TileCardView, DEFAULT_BRAND_TITLE,
    DEFAULT_TILE_LINK_LABEL,
};
