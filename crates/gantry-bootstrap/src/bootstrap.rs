//! Bootstrap Sequencer
//!
//! One-time startup orchestration plus the two request-time entry points
//! the framework runtime calls: [`Bootstrapper::get_all_modules`] and
//! [`Bootstrapper::get_module_by_key`].
//!
//! ## Scope ownership
//!
//! Request-time entry points return the request scope alongside the
//! resolved instances ([`ModuleSet`] / [`ModuleResolution`]). The request
//! pipeline owns the scope and tears it down by dropping it when request
//! handling ends; the sequencer never disposes a scope behind the
//! caller's back.

use std::sync::Arc;

use gantry_container::{Lifetime, Registry, Scope};
use gantry_domain::context::RequestContext;
use gantry_domain::error::{Error, Result};
use gantry_domain::ports::{
    BodyDeserializer, Engine, HandlerModule, ModelBinder, ModuleKeyGenerator, RootPathProvider,
    TypeConverter, ViewEngine, ViewSourceProvider,
};
use tracing::{debug, info};

use crate::catalog::{FrameworkCatalog, ModuleCatalog};
use crate::defaults::{DefaultRootPathProvider, NullEngine, TypeNameKeyGenerator};

/// Per-request extension hook, invoked once per created request scope
///
/// Runs before any resolution against the scope, so registrations added
/// here are visible to every subsequent resolution on that scope and are
/// isolated from every other concurrently-active request scope.
pub trait ScopeConfigurer: Send + Sync {
    /// Apply request-specific overrides to a freshly created scope
    fn configure(&self, scope: &mut Scope, ctx: &RequestContext);
}

/// No-op configurer, the default
#[derive(Debug, Default)]
pub struct NullScopeConfigurer;

impl ScopeConfigurer for NullScopeConfigurer {
    fn configure(&self, _scope: &mut Scope, _ctx: &RequestContext) {}
}

/// Configurer that binds the current request's context into the scope
///
/// Services resolved from the scope can then take `RequestContext` as a
/// dependency.
#[derive(Debug, Default)]
pub struct RequestContextConfigurer;

impl ScopeConfigurer for RequestContextConfigurer {
    fn configure(&self, scope: &mut Scope, ctx: &RequestContext) {
        scope.register_local_instance::<RequestContext>(Arc::new(ctx.clone()));
    }
}

/// All handler modules resolved for one request, plus the owning scope
///
/// Drop this value to tear down the request scope.
pub struct ModuleSet {
    /// Freshly constructed module instances, in registration order
    pub modules: Vec<Arc<dyn HandlerModule>>,
    /// The request scope the modules were resolved from
    pub scope: Scope,
}

/// One handler module resolved by key, plus the owning scope
///
/// Drop this value to tear down the request scope.
pub struct ModuleResolution {
    /// Freshly constructed module instance
    pub module: Arc<dyn HandlerModule>,
    /// The request scope the module was resolved from
    pub scope: Scope,
}

/// The composition root
///
/// Owns the root scope and the per-request configuration hook. Built
/// once at startup from a [`FrameworkCatalog`]; request-time operations
/// take `&self` and may run concurrently.
pub struct Bootstrapper {
    root: Scope,
    configurer: Arc<dyn ScopeConfigurer>,
}

impl Bootstrapper {
    /// Initialize the composition root with the default no-op configurer
    pub fn initialize(catalog: FrameworkCatalog) -> Result<Self> {
        Self::with_configurer(catalog, Arc::new(NullScopeConfigurer))
    }

    /// Initialize the composition root with a per-request configurer
    ///
    /// Registers internal engine services and the module key generator as
    /// singletons, each supplied extension-point factory as a singleton
    /// under its capability, and every handler module transient under its
    /// key. Required internal capabilities are resolved eagerly; any
    /// failure aborts startup instead of deferring to the first request.
    pub fn with_configurer(
        catalog: FrameworkCatalog,
        configurer: Arc<dyn ScopeConfigurer>,
    ) -> Result<Self> {
        let key_generator: Arc<dyn ModuleKeyGenerator> = catalog
            .key_generator
            .unwrap_or_else(|| Arc::new(TypeNameKeyGenerator));

        let mut builder = Registry::builder();

        // Internal engine-level services, singletons.
        builder = match catalog.engine {
            Some(factory) => {
                builder.register::<dyn Engine, _>(Lifetime::Singleton, move |_| factory())
            }
            None => {
                builder.register::<dyn Engine, _>(Lifetime::Singleton, |_| Arc::new(NullEngine))
            }
        };
        builder = builder.register_instance::<dyn ModuleKeyGenerator>(key_generator.clone());
        builder = match catalog.root_path_provider {
            Some(factory) => builder
                .register::<dyn RootPathProvider, _>(Lifetime::Singleton, move |_| factory()),
            None => builder.register::<dyn RootPathProvider, _>(Lifetime::Singleton, |_| {
                Arc::new(DefaultRootPathProvider::new())
            }),
        };

        // Extension points, each singleton and multi-bound under its
        // capability so the runtime can enumerate the full set.
        let view_engines = catalog.view_engines.len();
        for factory in catalog.view_engines {
            builder = builder.register::<dyn ViewEngine, _>(Lifetime::Singleton, move |_| {
                factory()
            });
        }
        let view_source_providers = catalog.view_source_providers.len();
        for factory in catalog.view_source_providers {
            builder = builder
                .register::<dyn ViewSourceProvider, _>(Lifetime::Singleton, move |_| factory());
        }
        let model_binders = catalog.model_binders.len();
        for factory in catalog.model_binders {
            builder = builder.register::<dyn ModelBinder, _>(Lifetime::Singleton, move |_| {
                factory()
            });
        }
        let type_converters = catalog.type_converters.len();
        for factory in catalog.type_converters {
            builder = builder.register::<dyn TypeConverter, _>(Lifetime::Singleton, move |_| {
                factory()
            });
        }
        let body_deserializers = catalog.body_deserializers.len();
        for factory in catalog.body_deserializers {
            builder = builder
                .register::<dyn BodyDeserializer, _>(Lifetime::Singleton, move |_| factory());
        }

        // Handler modules: transient, keyed. Instances are constructed
        // fresh per resolution and never shared across requests.
        let mut catalog_entries = Vec::with_capacity(catalog.modules.len());
        for entry in catalog.modules {
            let key = entry
                .key
                .unwrap_or_else(|| key_generator.key_for(entry.type_name));
            catalog_entries.push((key.clone(), entry.type_name));
            let factory = entry.factory;
            builder = builder.register_keyed::<dyn HandlerModule, _>(
                key,
                Lifetime::Transient,
                move |_| factory(),
            );
        }
        let module_catalog = ModuleCatalog::new(catalog_entries);
        let modules = module_catalog.len();
        builder = builder.register_instance::<ModuleCatalog>(Arc::new(module_catalog));

        let registry = builder.build()?;
        let root = Scope::root(registry);

        // Startup validation: required internal capabilities must resolve
        // now, not on the first request.
        root.resolve::<dyn Engine>()
            .map_err(|e| Error::bootstrap_with_source("engine service unavailable", e))?;
        root.resolve::<dyn ModuleKeyGenerator>()
            .map_err(|e| Error::bootstrap_with_source("module key generator unavailable", e))?;

        info!(
            view_engines,
            view_source_providers,
            model_binders,
            type_converters,
            body_deserializers,
            modules,
            "composition root initialized"
        );

        Ok(Self { root, configurer })
    }

    /// The root scope
    pub fn root(&self) -> &Scope {
        &self.root
    }

    /// Resolve the engine from the root scope
    pub fn engine(&self) -> Result<Arc<dyn Engine>> {
        self.root.resolve::<dyn Engine>()
    }

    /// The registered module catalog view
    pub fn module_catalog(&self) -> Result<Arc<ModuleCatalog>> {
        self.root.resolve::<ModuleCatalog>()
    }

    /// Resolve every handler module for one request
    ///
    /// Creates a request scope, applies the configurer, and constructs
    /// one fresh instance per registered module, in registration order.
    pub fn get_all_modules(&self, ctx: &RequestContext) -> Result<ModuleSet> {
        let mut scope = self.root.create_child();
        self.configurer.configure(&mut scope, ctx);
        let modules = scope
            .resolve_all::<dyn HandlerModule>()
            .collect::<Result<Vec<_>>>()?;
        debug!(count = modules.len(), "resolved all handler modules");
        Ok(ModuleSet { modules, scope })
    }

    /// Resolve one handler module by its catalog key for one request
    ///
    /// Fails with [`Error::ModuleNotFound`] when the key is unregistered.
    pub fn get_module_by_key(&self, key: &str, ctx: &RequestContext) -> Result<ModuleResolution> {
        let mut scope = self.root.create_child();
        self.configurer.configure(&mut scope, ctx);
        let module = scope
            .resolve_by_key::<dyn HandlerModule>(key)
            .map_err(|e| match e {
                Error::KeyNotFound { key, .. } => Error::ModuleNotFound { key },
                other => other,
            })?;
        debug!(key, module = module.name(), "resolved handler module");
        Ok(ModuleResolution { module, scope })
    }
}

impl std::fmt::Debug for Bootstrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bootstrapper")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
