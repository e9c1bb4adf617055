//! # gantry-bootstrap
//!
//! Startup sequencing and request-time module resolution for the gantry
//! composition root.
//!
//! ## Architecture
//!
//! ```text
//! FrameworkCatalog (discovered types)      startup
//!         │
//!         ▼
//! Bootstrapper::initialize()
//!   ├─ internal services as singletons (engine, key generator, root path)
//!   ├─ extension points as singletons (multi-bound)
//!   └─ handler modules transient, keyed
//!         │
//!         ▼                                 per request
//! get_all_modules(ctx) / get_module_by_key(key, ctx)
//!   ├─ create request scope from root
//!   ├─ ScopeConfigurer hook (request-local overrides)
//!   └─ resolve; scope returned to the caller for teardown
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let catalog = FrameworkCatalog::new()
//!     .with_body_deserializer(|| Arc::new(JsonBodyDeserializer))
//!     .with_keyed_module("home", || HomeModule::default());
//!
//! let bootstrapper = Bootstrapper::initialize(catalog)?;
//! let resolved = bootstrapper.get_module_by_key("home", &ctx)?;
//! let response = resolved.module.handle(&ctx)?;
//! drop(resolved); // request scope torn down here
//! ```

pub mod bootstrap;
pub mod catalog;
pub mod defaults;
pub mod logging;

pub use bootstrap::{
    Bootstrapper, ModuleResolution, ModuleSet, NullScopeConfigurer, RequestContextConfigurer,
    ScopeConfigurer,
};
pub use catalog::{FrameworkCatalog, ModuleCatalog};
pub use defaults::{DefaultRootPathProvider, NullEngine, TypeNameKeyGenerator};
pub use logging::{init_logging, LoggingConfig};
