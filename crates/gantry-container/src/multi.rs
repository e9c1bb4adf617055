//! Multi-Binding Resolver
//!
//! Lazily enumerates every registration of a capability without forcing
//! eager construction upfront. The framework's extension points (view
//! engines, model binders, type converters, body deserializers) are
//! consumed through this iterator so the runtime always sees the full
//! registered set.
//!
//! Order is registration (insertion) order, deterministic and finite.
//! Each traversal may re-trigger construction: transient registrations
//! yield a fresh instance per pass, singletons the shared one.

use std::marker::PhantomData;
use std::sync::Arc;

use gantry_domain::error::Result;

use crate::registry::Registration;
use crate::scope::{downcast, Scope};

/// Lazy iterator over all instances registered for capability `T`
///
/// Returned by [`Scope::resolve_all`]. Construction happens on `next`,
/// one registration at a time.
pub struct AllOf<'a, T: ?Sized> {
    scope: &'a Scope,
    regs: Vec<Registration>,
    local: bool,
    next: usize,
    _capability: PhantomData<fn() -> Arc<T>>,
}

impl<'a, T: ?Sized> AllOf<'a, T> {
    pub(crate) fn new(scope: &'a Scope, regs: Vec<Registration>, local: bool) -> Self {
        Self {
            scope,
            regs,
            local,
            next: 0,
            _capability: PhantomData,
        }
    }

    /// Number of registrations this iterator will yield in total
    pub fn registration_count(&self) -> usize {
        self.regs.len()
    }
}

impl<T> Iterator for AllOf<'_, T>
where
    T: ?Sized + Send + Sync + 'static,
{
    type Item = Result<Arc<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let reg = self.regs.get(self.next)?;
        self.next += 1;
        let shared = self.scope.instantiate(reg, self.local);
        Some(downcast::<T>(shared, reg.capability))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.regs.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for AllOf<'_, T> where T: ?Sized + Send + Sync + 'static {}
