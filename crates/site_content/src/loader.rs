//! Document loader contracts, typed load errors, and in-memory adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Object-safe boxed future used by [`DocumentLoader`] async methods.
pub type DocumentLoaderFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure to obtain a content document.
pub enum ContentError {
    /// The server answered with a non-success status.
    #[error("failed to load {path} ({status})")]
    Load {
        /// Requested path.
        path: String,
        /// HTTP status code.
        status: u16,
    },
    /// The body was not valid JSON, or not a JSON object.
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// Requested path.
        path: String,
        /// Decoder message.
        message: String,
    },
    /// The request never produced a response.
    #[error("request for {path} failed: {message}")]
    Transport {
        /// Requested path.
        path: String,
        /// Transport message.
        message: String,
    },
}

impl ContentError {
    /// Returns the path whose load failed.
    pub fn path(&self) -> &str {
        match self {
            ContentError::Load { path, .. }
            | ContentError::Parse { path, .. }
            | ContentError::Transport { path, .. } => path,
        }
    }
}

/// Fetches JSON content documents by path.
///
/// Implementations must bypass any HTTP cache so every page load sees the current documents.
pub trait DocumentLoader {
    /// Loads and parses the JSON document at `path`.
    fn load_json<'a>(
        &'a self,
        path: &'a str,
    ) -> DocumentLoaderFuture<'a, Result<Value, ContentError>>;
}

/// Loads a document through a [`DocumentLoader`] and decodes it into `T`.
///
/// # Errors
///
/// Propagates loader failures, and returns [`ContentError::Parse`] when the top-level value is
/// not a JSON object or does not decode.
pub async fn load_document_with<L: DocumentLoader + ?Sized, T: DeserializeOwned>(
    loader: &L,
    path: &str,
) -> Result<T, ContentError> {
    let value = loader.load_json(path).await?;
    if !value.is_object() {
        return Err(ContentError::Parse {
            path: path.to_string(),
            message: "expected a JSON object".to_string(),
        });
    }
    serde_json::from_value(value).map_err(|err| ContentError::Parse {
        path: path.to_string(),
        message: err.to_string(),
    })
}

#[derive(Debug, Clone, Copy, Default)]
/// Loader for targets without a network stack; every request fails with a transport error.
pub struct NoopDocumentLoader;

impl DocumentLoader for NoopDocumentLoader {
    fn load_json<'a>(
        &'a self,
        path: &'a str,
    ) -> DocumentLoaderFuture<'a, Result<Value, ContentError>> {
        Box::pin(async move {
            Err(ContentError::Transport {
                path: path.to_string(),
                message: "no document transport available".to_string(),
            })
        })
    }
}

#[derive(Debug, Clone)]
enum MemoryResponse {
    Body(String),
    Status(u16),
}

#[derive(Debug, Default)]
struct MemoryLoaderState {
    responses: HashMap<String, MemoryResponse>,
    requested: Vec<String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory loader serving fixed response bodies or statuses keyed by path.
///
/// Paths without a registered response answer `404`.
pub struct MemoryDocumentLoader {
    inner: Rc<RefCell<MemoryLoaderState>>,
}

impl MemoryDocumentLoader {
    /// Serves `body` as the response text for `path`.
    pub fn insert_body(&self, path: &str, body: impl Into<String>) {
        self.inner
            .borrow_mut()
            .responses
            .insert(path.to_string(), MemoryResponse::Body(body.into()));
    }

    /// Serves serialized `value` for `path`.
    pub fn insert_json(&self, path: &str, value: &Value) {
        self.insert_body(path, value.to_string());
    }

    /// Answers `path` with a non-success `status`.
    pub fn insert_status(&self, path: &str, status: u16) {
        self.inner
            .borrow_mut()
            .responses
            .insert(path.to_string(), MemoryResponse::Status(status));
    }

    /// Returns every requested path in request order.
    pub fn requested_paths(&self) -> Vec<String> {
        self.inner.borrow().requested.clone()
    }
}

impl DocumentLoader for MemoryDocumentLoader {
    fn load_json<'a>(
        &'a self,
        path: &'a str,
    ) -> DocumentLoaderFuture<'a, Result<Value, ContentError>> {
        Box::pin(async move {
            let response = {
                let mut state = self.inner.borrow_mut();
                state.requested.push(path.to_string());
                state.responses.get(path).cloned()
            };
            match response {
                Some(MemoryResponse::Body(body)) => {
                    serde_json::from_str(&body).map_err(|err| ContentError::Parse {
                        path: path.to_string(),
                        message: err.to_string(),
                    })
                }
                Some(MemoryResponse::Status(status)) => Err(ContentError::Load {
                    path: path.to_string(),
                    status,
                }),
                None => Err(ContentError::Load {
                    path: path.to_string(),
                    status: 404,
                }),
            }
        })
    }
}
