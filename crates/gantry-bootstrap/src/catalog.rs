//! Framework Catalog
//!
//! The framework runtime discovers implementation types for each
//! extension point at startup and supplies them here as explicit
//! factories. No runtime reflection: every entry is a constructor
//! function, and the catalog is consumed once by
//! [`crate::bootstrap::Bootstrapper::initialize`].

use std::sync::Arc;

use gantry_domain::ports::{
    BodyDeserializer, Engine, HandlerModule, ModelBinder, ModuleKeyGenerator, RootPathProvider,
    TypeConverter, ViewEngine, ViewSourceProvider,
};

/// Constructor function for an implementation of capability `T`
pub type Factory<T> = Arc<dyn Fn() -> Arc<T> + Send + Sync>;

/// A handler module awaiting registration
///
/// The key is optional; entries without one are keyed by the module key
/// generator applied to the module's type name.
pub(crate) struct ModuleEntry {
    pub(crate) key: Option<String>,
    pub(crate) type_name: &'static str,
    pub(crate) factory: Factory<dyn HandlerModule>,
}

/// Startup type lists supplied by the framework runtime
///
/// Built once, consumed by the bootstrap sequencer. Engine and module-key
/// generator overrides are optional; defaults from
/// [`crate::defaults`] are used when absent.
#[derive(Default)]
pub struct FrameworkCatalog {
    pub(crate) engine: Option<Factory<dyn Engine>>,
    pub(crate) key_generator: Option<Arc<dyn ModuleKeyGenerator>>,
    pub(crate) root_path_provider: Option<Factory<dyn RootPathProvider>>,
    pub(crate) view_engines: Vec<Factory<dyn ViewEngine>>,
    pub(crate) view_source_providers: Vec<Factory<dyn ViewSourceProvider>>,
    pub(crate) model_binders: Vec<Factory<dyn ModelBinder>>,
    pub(crate) type_converters: Vec<Factory<dyn TypeConverter>>,
    pub(crate) body_deserializers: Vec<Factory<dyn BodyDeserializer>>,
    pub(crate) modules: Vec<ModuleEntry>,
}

impl FrameworkCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the engine implementation
    pub fn with_engine<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn Engine> + Send + Sync + 'static,
    {
        self.engine = Some(Arc::new(factory));
        self
    }

    /// Override the module key generator
    pub fn with_key_generator(mut self, generator: Arc<dyn ModuleKeyGenerator>) -> Self {
        self.key_generator = Some(generator);
        self
    }

    /// Override the root path provider
    pub fn with_root_path_provider<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn RootPathProvider> + Send + Sync + 'static,
    {
        self.root_path_provider = Some(Arc::new(factory));
        self
    }

    /// Add a view engine
    pub fn with_view_engine<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn ViewEngine> + Send + Sync + 'static,
    {
        self.view_engines.push(Arc::new(factory));
        self
    }

    /// Add a view source provider
    pub fn with_view_source_provider<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn ViewSourceProvider> + Send + Sync + 'static,
    {
        self.view_source_providers.push(Arc::new(factory));
        self
    }

    /// Add a model binder
    pub fn with_model_binder<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn ModelBinder> + Send + Sync + 'static,
    {
        self.model_binders.push(Arc::new(factory));
        self
    }

    /// Add a type converter
    pub fn with_type_converter<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn TypeConverter> + Send + Sync + 'static,
    {
        self.type_converters.push(Arc::new(factory));
        self
    }

    /// Add a body deserializer
    pub fn with_body_deserializer<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn BodyDeserializer> + Send + Sync + 'static,
    {
        self.body_deserializers.push(Arc::new(factory));
        self
    }

    /// Add a handler module keyed by its type name
    pub fn with_module<M, F>(self, factory: F) -> Self
    where
        M: HandlerModule + 'static,
        F: Fn() -> M + Send + Sync + 'static,
    {
        self.push_module::<M, F>(None, factory)
    }

    /// Add a handler module under an explicit key
    pub fn with_keyed_module<M, F>(self, key: impl Into<String>, factory: F) -> Self
    where
        M: HandlerModule + 'static,
        F: Fn() -> M + Send + Sync + 'static,
    {
        self.push_module::<M, F>(Some(key.into()), factory)
    }

    fn push_module<M, F>(mut self, key: Option<String>, factory: F) -> Self
    where
        M: HandlerModule + 'static,
        F: Fn() -> M + Send + Sync + 'static,
    {
        self.modules.push(ModuleEntry {
            key,
            type_name: std::any::type_name::<M>(),
            factory: Arc::new(move || Arc::new(factory())),
        });
        self
    }
}

impl std::fmt::Debug for FrameworkCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameworkCatalog")
            .field("view_engines", &self.view_engines.len())
            .field("view_source_providers", &self.view_source_providers.len())
            .field("model_binders", &self.model_binders.len())
            .field("type_converters", &self.type_converters.len())
            .field("body_deserializers", &self.body_deserializers.len())
            .field("modules", &self.modules.len())
            .finish()
    }
}

/// Immutable view of the registered module catalog
///
/// Registered into the root scope as a singleton so engine-level services
/// can enumerate the known modules. Module *instances* are never cached
/// here; this is keys and type names only.
#[derive(Debug, Clone)]
pub struct ModuleCatalog {
    entries: Vec<(String, &'static str)>,
}

impl ModuleCatalog {
    pub(crate) fn new(entries: Vec<(String, &'static str)>) -> Self {
        Self { entries }
    }

    /// All registered module keys, in registration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Type name registered under a key, if any
    pub fn type_name_for(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|&(_, type_name)| type_name)
    }

    /// Number of registered modules
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no modules are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
