//! Browser (`wasm32`) implementations of the [`site_content`] service contracts.
//!
//! [`WebDocumentLoader`] fetches content documents with the HTTP cache bypassed and
//! [`DomSurface`] writes mounter output into the live document. All web-sys calls are routed
//! through `interop`, which swaps in an inert shim on non-wasm targets so the crate still builds
//! and tests natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dom;
mod interop;
pub mod loader;

pub use dom::DomSurface;
pub use loader::WebDocumentLoader;
