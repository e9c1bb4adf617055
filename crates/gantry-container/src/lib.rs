//! # gantry-container
//!
//! Capability registry and scope hierarchy for the gantry composition root.
//!
//! ## Architecture
//!
//! ```text
//! RegistryBuilder (startup, mutable)
//!        │ build()
//!        ▼
//! Registry (frozen)
//!        │ Scope::root()
//!        ▼
//! Root Scope ──────────────── singleton cache (shared, concurrent)
//!        │ create_child()           ▲
//!        ▼                          │ singleton hits
//! Request Scope ── local overrides ─┘
//!   (one per request, terminal, owned by the request pipeline)
//! ```
//!
//! Registration is confined to startup: once built, the [`Registry`] is
//! immutable and shared by reference into every scope. Request scopes add
//! local registrations that shadow the root's for that capability within
//! the scope only. Singleton instances memoize in a cache owned by the
//! hierarchy root; transient registrations construct a fresh instance per
//! resolution.
//!
//! ## Usage
//!
//! ```ignore
//! let registry = Registry::builder()
//!     .register::<dyn ViewEngine, _>(Lifetime::Singleton, |_| Arc::new(HtmlEngine))
//!     .register_keyed::<dyn HandlerModule, _>("home", Lifetime::Transient, |_| Arc::new(HomeModule))
//!     .build()?;
//!
//! let root = Scope::root(registry);
//! let scope = root.create_child();
//! let module = scope.resolve_by_key::<dyn HandlerModule>("home")?;
//! ```

pub mod lifetime;
pub mod multi;
pub mod registry;
pub mod scope;

pub use lifetime::Lifetime;
pub use multi::AllOf;
pub use registry::{Registry, RegistryBuilder};
pub use scope::{Scope, ScopeKind};
