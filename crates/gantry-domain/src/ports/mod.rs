//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the composition root and the
//! framework runtime. Ports follow the Dependency Inversion Principle:
//! this crate defines the interfaces, the framework runtime and host
//! application implement them.
//!
//! ## Organization
//!
//! - **extensions** - Framework extension points resolved as multi-bindings
//!   (view engines, view source providers, model binders, type converters,
//!   body deserializers, root path provider)
//! - **modules** - Handler modules and module key generation
//! - **engine** - Internal engine-level services

/// Internal engine-level service ports
pub mod engine;
/// Framework extension point ports
pub mod extensions;
/// Handler module ports
pub mod modules;

// Re-export commonly used port traits for convenience
pub use engine::Engine;
pub use extensions::{
    BodyDeserializer, ModelBinder, RootPathProvider, TypeConverter, ViewEngine, ViewSourceProvider,
};
pub use modules::{HandlerModule, ModuleKeyGenerator};
