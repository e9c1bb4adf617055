//! Default internal service implementations
//!
//! Null and default implementations registered when the framework catalog
//! supplies no override, so the composition root is always complete after
//! bootstrap.

use gantry_domain::context::{ModuleResponse, RequestContext};
use gantry_domain::error::Result;
use gantry_domain::ports::{Engine, ModuleKeyGenerator, RootPathProvider};

/// Engine that answers every request with 501
///
/// Stands in until the host supplies a real pipeline via
/// [`crate::catalog::FrameworkCatalog::with_engine`].
#[derive(Debug, Default)]
pub struct NullEngine;

impl Engine for NullEngine {
    fn process(&self, _ctx: &RequestContext) -> Result<ModuleResponse> {
        Ok(ModuleResponse::new(501, "no engine configured"))
    }
}

/// Keys modules by their full type name
///
/// Type names are unique per module type, which keeps keyed lookup
/// unambiguous without any coordination from the host.
#[derive(Debug, Default)]
pub struct TypeNameKeyGenerator;

impl ModuleKeyGenerator for TypeNameKeyGenerator {
    fn key_for(&self, type_name: &str) -> String {
        type_name.to_string()
    }
}

/// Root path provider anchored at the process working directory
#[derive(Debug)]
pub struct DefaultRootPathProvider {
    root: String,
}

impl DefaultRootPathProvider {
    /// Create a provider rooted at the current directory
    pub fn new() -> Self {
        Self { root: ".".into() }
    }

    /// Create a provider rooted at an explicit path
    pub fn with_root(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for DefaultRootPathProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RootPathProvider for DefaultRootPathProvider {
    fn root_path(&self) -> &str {
        &self.root
    }
}
