//! # gantry
//!
//! A composition-root adapter: binds a request-handling framework to a
//! dependency-injection container, so framework abstractions (engine,
//! module catalog, view engines, model binders, type converters, body
//! deserializers) are resolved through the container rather than
//! constructed directly.
//!
//! ## Layers
//!
//! - `domain` - Error taxonomy, request context, and port traits
//! - `container` - Capability registry, lifetimes, and scope hierarchy
//! - `bootstrap` - Startup sequencing and request-time module resolution
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use gantry::bootstrap::{Bootstrapper, FrameworkCatalog};
//! use gantry::domain::{ModuleResponse, RequestContext};
//! use gantry::domain::error::Result;
//! use gantry::domain::ports::HandlerModule;
//!
//! struct HomeModule;
//!
//! impl HandlerModule for HomeModule {
//!     fn name(&self) -> &str {
//!         "home"
//!     }
//!
//!     fn handle(&self, _ctx: &RequestContext) -> Result<ModuleResponse> {
//!         Ok(ModuleResponse::ok("hello"))
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let catalog = FrameworkCatalog::new().with_keyed_module("home", || HomeModule);
//! let bootstrapper = Bootstrapper::initialize(catalog)?;
//!
//! let ctx = RequestContext::new("GET", "/home");
//! let resolved = bootstrapper.get_module_by_key("home", &ctx)?;
//! assert_eq!(resolved.module.handle(&ctx)?.body, "hello");
//! // Dropping the resolution tears down the request scope.
//! drop(resolved);
//! # Ok(())
//! # }
//! ```

/// Domain layer - error taxonomy, request context, and port traits
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use gantry_domain::*;
}

/// Container layer - capability registry, lifetimes, and scope hierarchy
///
/// Re-exports from the container crate for convenience
pub mod container {
    pub use gantry_container::*;
}

/// Bootstrap layer - startup sequencing and request-time module resolution
///
/// Re-exports from the bootstrap crate for convenience
pub mod bootstrap {
    pub use gantry_bootstrap::*;
}

// Most-used types at the crate root
pub use gantry_bootstrap::{Bootstrapper, FrameworkCatalog};
pub use gantry_container::{Lifetime, Registry, Scope};
pub use gantry_domain::{Error, ModuleResponse, RequestContext, Result};
