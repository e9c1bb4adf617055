//! Capability Registry
//!
//! A process-wide store mapping an abstract capability (a trait object or
//! concrete type) to one or more registrations, each carrying a lifetime
//! policy and, for keyed capabilities such as handler modules, a string
//! key.
//!
//! The registry is built once at startup through [`RegistryBuilder`] and
//! frozen by [`RegistryBuilder::build`]. Resolution happens through
//! [`crate::scope::Scope`], never against the registry directly.
//!
//! ## Type erasure
//!
//! Instances are stored as `Arc<dyn Any>` wrapping an `Arc<T>`, so a
//! capability `T` may be unsized (`dyn Trait`). The typed `register`
//! methods are the only way to add registrations, which guarantees the
//! erased value under `TypeId::of::<T>()` always holds an `Arc<T>`.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use gantry_domain::error::{Error, Result};
use tracing::debug;

use crate::lifetime::Lifetime;
use crate::scope::Scope;

/// Erased shared instance: an `Arc<dyn Any>` wrapping an `Arc<T>`
pub(crate) type Shared = Arc<dyn Any + Send + Sync>;

/// Erased factory invoked against the scope performing the resolution,
/// so factories can resolve their own dependencies recursively
pub(crate) type ErasedFactory = Arc<dyn Fn(&Scope) -> Shared + Send + Sync>;

/// A single capability-to-implementation binding
#[derive(Clone)]
pub(crate) struct Registration {
    /// Slot in the singleton cache of the owning hierarchy
    pub(crate) id: usize,
    /// Capability type name, for diagnostics
    pub(crate) capability: &'static str,
    pub(crate) lifetime: Lifetime,
    /// Present only for keyed capabilities (handler modules)
    pub(crate) key: Option<String>,
    pub(crate) factory: ErasedFactory,
}

/// Accumulates registrations at startup
///
/// Multiple registrations for one capability are permitted and preserve
/// insertion order; that order is the enumeration order of
/// [`crate::scope::Scope::resolve_all`].
#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<TypeId, Vec<Registration>>,
    next_id: usize,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for capability `T` with the given lifetime
    pub fn register<T, F>(mut self, lifetime: Lifetime, factory: F) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Scope) -> Arc<T> + Send + Sync + 'static,
    {
        self.push::<T>(lifetime, None, factory);
        self
    }

    /// Register a factory for capability `T` under a string key
    ///
    /// Keys must be unique within a capability; duplicates are rejected
    /// by [`RegistryBuilder::build`].
    pub fn register_keyed<T, F>(
        mut self,
        key: impl Into<String>,
        lifetime: Lifetime,
        factory: F,
    ) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Scope) -> Arc<T> + Send + Sync + 'static,
    {
        self.push::<T>(lifetime, Some(key.into()), factory);
        self
    }

    /// Register an already-constructed singleton instance for capability `T`
    pub fn register_instance<T>(mut self, instance: Arc<T>) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.push::<T>(Lifetime::Singleton, None, move |_| instance.clone());
        self
    }

    fn push<T>(
        &mut self,
        lifetime: Lifetime,
        key: Option<String>,
        factory: impl Fn(&Scope) -> Arc<T> + Send + Sync + 'static,
    ) where
        T: ?Sized + Send + Sync + 'static,
    {
        let capability = std::any::type_name::<T>();
        let id = self.next_id;
        self.next_id += 1;
        debug!(capability, %lifetime, key = key.as_deref(), "registering capability");
        self.entries
            .entry(TypeId::of::<T>())
            .or_default()
            .push(Registration {
                id,
                capability,
                lifetime,
                key,
                factory: Arc::new(move |scope| Arc::new(factory(scope)) as Shared),
            });
    }

    /// Freeze the accumulated registrations into an immutable [`Registry`]
    ///
    /// Fails with [`Error::DuplicateKey`] if two registrations under one
    /// capability carry the same key, which would make keyed lookup
    /// ambiguous.
    pub fn build(self) -> Result<Registry> {
        for regs in self.entries.values() {
            let mut seen: Vec<&str> = Vec::new();
            for reg in regs {
                if let Some(key) = reg.key.as_deref() {
                    if seen.contains(&key) {
                        return Err(Error::DuplicateKey {
                            capability: reg.capability,
                            key: key.to_string(),
                        });
                    }
                    seen.push(key);
                }
            }
        }
        Ok(Registry {
            entries: self.entries,
            registration_count: self.next_id,
        })
    }
}

/// Frozen registration table, shared by reference into every scope
pub struct Registry {
    entries: HashMap<TypeId, Vec<Registration>>,
    registration_count: usize,
}

impl Registry {
    /// Start building a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Total number of registrations across all capabilities
    pub fn registration_count(&self) -> usize {
        self.registration_count
    }

    /// Registrations for one capability, in registration order
    pub(crate) fn registrations(&self, capability: TypeId) -> &[Registration] {
        self.entries
            .get(&capability)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("capabilities", &self.entries.len())
            .field("registrations", &self.registration_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Marker: Send + Sync {}
    struct A;
    impl Marker for A {}

    #[test]
    fn build_rejects_duplicate_keys() {
        let result = Registry::builder()
            .register_keyed::<dyn Marker, _>("home", Lifetime::Transient, |_| Arc::new(A))
            .register_keyed::<dyn Marker, _>("home", Lifetime::Transient, |_| Arc::new(A))
            .build();
        assert!(matches!(
            result,
            Err(Error::DuplicateKey { key, .. }) if key == "home"
        ));
    }

    #[test]
    fn build_counts_registrations() {
        let registry = Registry::builder()
            .register::<dyn Marker, _>(Lifetime::Singleton, |_| Arc::new(A))
            .register::<dyn Marker, _>(Lifetime::Singleton, |_| Arc::new(A))
            .build()
            .unwrap();
        assert_eq!(registry.registration_count(), 2);
    }
}
