//! Handler Module Ports
//!
//! A handler module is a keyed, per-request unit of request-handling
//! logic. Modules are stateful for the duration of one request and are
//! therefore constructed fresh on every resolution, never cached and
//! never shared across requests.

use crate::context::{ModuleResponse, RequestContext};
use crate::error::Result;

/// A per-request unit of request-handling logic
pub trait HandlerModule: Send + Sync {
    /// Human-readable module name, used for diagnostics
    fn name(&self) -> &str;

    /// Handle the request this module instance was resolved for
    fn handle(&self, ctx: &RequestContext) -> Result<ModuleResponse>;
}

/// Derives the catalog key for a handler module type
///
/// The default implementation keys modules by their full type name,
/// which is unique per module type and stable across processes.
pub trait ModuleKeyGenerator: Send + Sync {
    /// Compute the key under which a module type is registered
    fn key_for(&self, type_name: &str) -> String;
}
