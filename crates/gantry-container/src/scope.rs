//! Scope Hierarchy
//!
//! Two scope kinds exist: the unique, process-lived **root** scope, and
//! **request** scopes created from it, one per inbound request. A request
//! scope inherits every root registration by reference and may add local
//! registrations that shadow the root's for that capability within the
//! scope only. Request scopes are terminal: they are never shared across
//! requests and are dropped by their owner when request handling ends.
//!
//! Scope creation never fails. A misconfigured capability surfaces at
//! resolve time, not at scope creation (lazy resolution).

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use gantry_domain::error::{Error, Result};
use tracing::trace;

use crate::lifetime::Lifetime;
use crate::multi::AllOf;
use crate::registry::{Registration, Registry, Shared};

/// Position of a scope in the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// The unique, process-lived top of the hierarchy
    Root,
    /// A per-request child of the root; terminal once dropped
    Request,
}

/// A resolution context over the frozen [`Registry`]
///
/// The root scope owns the singleton cache; request scopes share it by
/// reference, so a singleton resolved from any scope is the same instance
/// everywhere in the hierarchy. Local registrations and local singleton
/// memoization belong to one scope alone and die with it.
pub struct Scope {
    registry: Arc<Registry>,
    /// Singleton cache of the hierarchy root, keyed by registration id
    singletons: Arc<DashMap<usize, Shared>>,
    kind: ScopeKind,
    /// Scope-local registrations; shadow the registry per capability
    local: HashMap<TypeId, Vec<Registration>>,
    /// Memoized scope-local singletons
    local_singletons: DashMap<usize, Shared>,
    next_local_id: usize,
}

impl Scope {
    /// Create the root scope over a frozen registry
    pub fn root(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
            singletons: Arc::new(DashMap::new()),
            kind: ScopeKind::Root,
            local: HashMap::new(),
            local_singletons: DashMap::new(),
            next_local_id: 0,
        }
    }

    /// This scope's position in the hierarchy
    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    /// Create a request scope that inherits this hierarchy's registrations
    ///
    /// The child shares the root's registry and singleton cache by
    /// reference and starts with no local registrations. Request scopes
    /// are terminal; children are always derived from the root state, so
    /// local registrations never leak into a sibling.
    pub fn create_child(&self) -> Scope {
        trace!("creating request scope");
        Scope {
            registry: self.registry.clone(),
            singletons: self.singletons.clone(),
            kind: ScopeKind::Request,
            local: HashMap::new(),
            local_singletons: DashMap::new(),
            next_local_id: 0,
        }
    }

    /// Add a scope-local factory registration for capability `T`
    ///
    /// Local registrations shadow the inherited set for `T` within this
    /// scope only, and are visible to every resolution performed against
    /// this scope afterwards.
    pub fn register_local<T, F>(&mut self, lifetime: Lifetime, factory: F)
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Scope) -> Arc<T> + Send + Sync + 'static,
    {
        let id = self.next_local_id;
        self.next_local_id += 1;
        self.local
            .entry(TypeId::of::<T>())
            .or_default()
            .push(Registration {
                id,
                capability: std::any::type_name::<T>(),
                lifetime,
                key: None,
                factory: Arc::new(move |scope| Arc::new(factory(scope)) as Shared),
            });
    }

    /// Add a scope-local instance registration for capability `T`
    ///
    /// Typically used by the request-scope configuration hook to bind the
    /// current request's context.
    pub fn register_local_instance<T>(&mut self, instance: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.register_local::<T, _>(Lifetime::Singleton, move |_| instance.clone());
    }

    /// Resolve the single registered implementation of capability `T`
    ///
    /// Fails with [`Error::NotFound`] when nothing is registered and
    /// [`Error::AmbiguousRegistration`] when more than one registration
    /// exists; callers wanting the full set use [`Scope::resolve_all`].
    pub fn resolve<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let capability = std::any::type_name::<T>();
        let (regs, local) = self.lookup(TypeId::of::<T>());
        match regs {
            [] => Err(Error::NotFound { capability }),
            [reg] => downcast::<T>(self.instantiate(reg, local), capability),
            many => Err(Error::AmbiguousRegistration {
                capability,
                count: many.len(),
            }),
        }
    }

    /// Lazily enumerate every registered implementation of capability `T`
    ///
    /// Yields one instance per registration, in registration order. Each
    /// traversal re-triggers construction for transient registrations and
    /// returns the shared instance for singletons.
    pub fn resolve_all<T>(&self) -> AllOf<'_, T>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let (regs, local) = self.lookup(TypeId::of::<T>());
        AllOf::new(self, regs.to_vec(), local)
    }

    /// Resolve the implementation of capability `T` registered under `key`
    pub fn resolve_by_key<T>(&self, key: &str) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let capability = std::any::type_name::<T>();
        let (regs, local) = self.lookup(TypeId::of::<T>());
        let reg = regs
            .iter()
            .find(|reg| reg.key.as_deref() == Some(key))
            .ok_or_else(|| Error::KeyNotFound {
                capability,
                key: key.to_string(),
            })?;
        downcast::<T>(self.instantiate(reg, local), capability)
    }

    /// Registrations visible for a capability: local overrides shadow the
    /// registry for that capability entirely
    fn lookup(&self, capability: TypeId) -> (&[Registration], bool) {
        match self.local.get(&capability) {
            Some(regs) => (regs.as_slice(), true),
            None => (self.registry.registrations(capability), false),
        }
    }

    /// Construct or fetch the instance for one registration
    ///
    /// `local` selects the memoization cache: scope-local singletons
    /// memoize in this scope, root singletons in the shared root cache.
    pub(crate) fn instantiate(&self, reg: &Registration, local: bool) -> Shared {
        match reg.lifetime {
            Lifetime::Transient => (reg.factory)(self),
            Lifetime::Singleton => {
                let cache = if local {
                    &self.local_singletons
                } else {
                    self.singletons.as_ref()
                };
                if let Some(hit) = cache.get(&reg.id) {
                    return hit.value().clone();
                }
                // Construct outside any map guard: factories may resolve
                // further singletons through this same scope.
                let built = (reg.factory)(self);
                cache.entry(reg.id).or_insert(built).value().clone()
            }
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        if self.kind == ScopeKind::Request {
            trace!(
                local_registrations = self.next_local_id,
                "request scope dropped"
            );
        }
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("kind", &self.kind)
            .field("registry", &self.registry)
            .field("local_registrations", &self.next_local_id)
            .finish()
    }
}

/// Recover the typed `Arc<T>` from an erased instance
///
/// The typed registration API keys erased values by `TypeId::of::<T>()`,
/// so a mismatch here means a registration invariant was broken.
pub(crate) fn downcast<T>(shared: Shared, capability: &'static str) -> Result<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    shared
        .downcast_ref::<Arc<T>>()
        .cloned()
        .ok_or(Error::TypeMismatch { capability })
}
