//! Internal Engine Service Port
//!
//! The engine is the framework's request-processing pipeline. The
//! composition root registers exactly one engine implementation as a
//! singleton and exposes it to the host after bootstrap; it does not
//! implement request processing itself.

use crate::context::{ModuleResponse, RequestContext};
use crate::error::Result;

/// The framework's request-processing pipeline
pub trait Engine: Send + Sync {
    /// Process a single request through the framework pipeline
    fn process(&self, ctx: &RequestContext) -> Result<ModuleResponse>;
}
