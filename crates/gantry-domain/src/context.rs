//! Per-request value objects
//!
//! `RequestContext` is the unit of request-specific state handed to the
//! bootstrap layer by the framework runtime. It is owned by exactly one
//! request and is never shared across concurrent requests.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Context for a single inbound request
///
/// Carries the request identity and an open item bag for
/// framework-specific state. A copy of the context is typically bound
/// into the request scope by the scope configuration hook so that
/// resolved services can reach it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// HTTP method of the request (informational; routing is external)
    pub method: String,
    /// Request path (informational; routing is external)
    pub path: String,
    /// Framework-specific per-request items
    pub items: HashMap<String, String>,
}

impl RequestContext {
    /// Create a context for the given method and path
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            items: HashMap::new(),
        }
    }

    /// Attach a per-request item
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }
}

/// Response produced by a handler module
///
/// Minimal surface: the transport and content negotiation live outside
/// this adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleResponse {
    /// Status code to surface to the transport
    pub status: u16,
    /// Response body
    pub body: String,
}

impl ModuleResponse {
    /// Create a response with the given status and body
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Convenience constructor for a 200 response
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}
