//! Fetch-backed document loader.

use serde_json::Value;
use site_content::{ContentError, DocumentLoader, DocumentLoaderFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Browser document loader backed by `window.fetch` with `cache: "no-store"`.
pub struct WebDocumentLoader;

impl DocumentLoader for WebDocumentLoader {
    fn load_json<'a>(
        &'a self,
        path: &'a str,
    ) -> DocumentLoaderFuture<'a, Result<Value, ContentError>> {
        Box::pin(async move { crate::interop::fetch_json(path).await })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_builds_report_a_transport_error() {
        let err = block_on(WebDocumentLoader.load_json("/assets/content/site.json"))
            .expect_err("no fetch outside the browser");
        assert!(matches!(err, ContentError::Transport { .. }));
        assert_eq!(err.path(), "/assets/content/site.json");
    }
}
