//! Tests for the scope hierarchy and lifetime model
//!
//! Covers singleton memoization per hierarchy root, transient
//! construction per resolution, multi-binding order, keyed lookup, and
//! isolation between sibling request scopes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gantry_container::{Lifetime, Registry, Scope};
use gantry_domain::error::Error;

trait Service: Send + Sync {
    fn id(&self) -> &'static str;
}

struct Alpha;
impl Service for Alpha {
    fn id(&self) -> &'static str {
        "alpha"
    }
}

struct Beta;
impl Service for Beta {
    fn id(&self) -> &'static str {
        "beta"
    }
}

struct Gamma;
impl Service for Gamma {
    fn id(&self) -> &'static str {
        "gamma"
    }
}

trait Counted: Send + Sync {}
struct CountedImpl;
impl Counted for CountedImpl {}

#[test]
fn singleton_resolves_to_same_instance_within_scope() {
    let registry = Registry::builder()
        .register::<dyn Service, _>(Lifetime::Singleton, |_| Arc::new(Alpha))
        .build()
        .unwrap();
    let root = Scope::root(registry);

    let first = root.resolve::<dyn Service>().unwrap();
    let second = root.resolve::<dyn Service>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn transient_resolves_to_distinct_instances() {
    let registry = Registry::builder()
        .register::<dyn Service, _>(Lifetime::Transient, |_| Arc::new(Alpha))
        .build()
        .unwrap();
    let root = Scope::root(registry);

    let first = root.resolve::<dyn Service>().unwrap();
    let second = root.resolve::<dyn Service>().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn singleton_constructed_once_across_scopes() {
    static BUILDS: AtomicUsize = AtomicUsize::new(0);

    let registry = Registry::builder()
        .register::<dyn Counted, _>(Lifetime::Singleton, |_| {
            BUILDS.fetch_add(1, Ordering::SeqCst);
            Arc::new(CountedImpl)
        })
        .build()
        .unwrap();
    let root = Scope::root(registry);

    let a = root.create_child().resolve::<dyn Counted>().unwrap();
    let b = root.create_child().resolve::<dyn Counted>().unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
}

#[test]
fn sibling_scopes_get_distinct_transient_instances() {
    let registry = Registry::builder()
        .register_keyed::<dyn Service, _>("alpha", Lifetime::Transient, |_| Arc::new(Alpha))
        .build()
        .unwrap();
    let root = Scope::root(registry);

    let first_scope = root.create_child();
    let second_scope = root.create_child();
    let first = first_scope.resolve_by_key::<dyn Service>("alpha").unwrap();
    let second = second_scope.resolve_by_key::<dyn Service>("alpha").unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn resolve_fails_when_nothing_registered() {
    let registry = Registry::builder().build().unwrap();
    let root = Scope::root(registry);

    let err = root.resolve::<dyn Service>().err().unwrap();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn resolve_fails_when_ambiguous() {
    let registry = Registry::builder()
        .register::<dyn Service, _>(Lifetime::Singleton, |_| Arc::new(Alpha))
        .register::<dyn Service, _>(Lifetime::Singleton, |_| Arc::new(Beta))
        .build()
        .unwrap();
    let root = Scope::root(registry);

    let err = root.resolve::<dyn Service>().err().unwrap();
    assert!(matches!(
        err,
        Error::AmbiguousRegistration { count: 2, .. }
    ));
}

#[test]
fn resolve_all_yields_registration_order() {
    let registry = Registry::builder()
        .register::<dyn Service, _>(Lifetime::Singleton, |_| Arc::new(Alpha))
        .register::<dyn Service, _>(Lifetime::Singleton, |_| Arc::new(Beta))
        .register::<dyn Service, _>(Lifetime::Singleton, |_| Arc::new(Gamma))
        .build()
        .unwrap();
    let root = Scope::root(registry);

    let all: Vec<_> = root
        .resolve_all::<dyn Service>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let ids: Vec<_> = all.iter().map(|svc| svc.id()).collect();
    assert_eq!(ids, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn resolve_all_is_lazy_for_transients() {
    static BUILDS: AtomicUsize = AtomicUsize::new(0);

    let registry = Registry::builder()
        .register::<dyn Counted, _>(Lifetime::Transient, |_| {
            BUILDS.fetch_add(1, Ordering::SeqCst);
            Arc::new(CountedImpl)
        })
        .register::<dyn Counted, _>(Lifetime::Transient, |_| {
            BUILDS.fetch_add(1, Ordering::SeqCst);
            Arc::new(CountedImpl)
        })
        .build()
        .unwrap();
    let root = Scope::root(registry);

    let mut all = root.resolve_all::<dyn Counted>();
    assert_eq!(all.registration_count(), 2);
    assert_eq!(BUILDS.load(Ordering::SeqCst), 0);

    all.next().unwrap().unwrap();
    assert_eq!(BUILDS.load(Ordering::SeqCst), 1);

    all.next().unwrap().unwrap();
    assert_eq!(BUILDS.load(Ordering::SeqCst), 2);
    assert!(all.next().is_none());
}

#[test]
fn resolve_by_key_returns_exact_registration() {
    let registry = Registry::builder()
        .register_keyed::<dyn Service, _>("alpha", Lifetime::Transient, |_| Arc::new(Alpha))
        .register_keyed::<dyn Service, _>("beta", Lifetime::Transient, |_| Arc::new(Beta))
        .build()
        .unwrap();
    let root = Scope::root(registry);

    let svc = root.resolve_by_key::<dyn Service>("beta").unwrap();
    assert_eq!(svc.id(), "beta");
}

#[test]
fn resolve_by_key_fails_for_unknown_key() {
    let registry = Registry::builder()
        .register_keyed::<dyn Service, _>("alpha", Lifetime::Transient, |_| Arc::new(Alpha))
        .build()
        .unwrap();
    let root = Scope::root(registry);

    let err = root.resolve_by_key::<dyn Service>("missing").err().unwrap();
    assert!(matches!(err, Error::KeyNotFound { key, .. } if key == "missing"));
}

#[test]
fn local_override_shadows_root_within_scope_only() {
    let registry = Registry::builder()
        .register::<dyn Service, _>(Lifetime::Singleton, |_| Arc::new(Alpha))
        .build()
        .unwrap();
    let root = Scope::root(registry);

    let mut overridden = root.create_child();
    overridden.register_local::<dyn Service, _>(Lifetime::Transient, |_| Arc::new(Beta));
    assert_eq!(overridden.resolve::<dyn Service>().unwrap().id(), "beta");

    // A sibling created afterwards must not see the override.
    let sibling = root.create_child();
    assert_eq!(sibling.resolve::<dyn Service>().unwrap().id(), "alpha");
}

#[test]
fn local_instance_is_shared_within_its_scope() {
    let registry = Registry::builder().build().unwrap();
    let root = Scope::root(registry);

    let mut scope = root.create_child();
    scope.register_local_instance::<dyn Service>(Arc::new(Gamma));

    let first = scope.resolve::<dyn Service>().unwrap();
    let second = scope.resolve::<dyn Service>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn factories_resolve_dependencies_through_the_scope() {
    struct Wrapper {
        inner: Arc<dyn Service>,
    }
    trait Facade: Send + Sync {
        fn inner_id(&self) -> &'static str;
    }
    impl Facade for Wrapper {
        fn inner_id(&self) -> &'static str {
            self.inner.id()
        }
    }

    let registry = Registry::builder()
        .register::<dyn Service, _>(Lifetime::Singleton, |_| Arc::new(Alpha))
        .register::<dyn Facade, _>(Lifetime::Singleton, |scope| {
            Arc::new(Wrapper {
                inner: scope.resolve::<dyn Service>().expect("dependency registered"),
            })
        })
        .build()
        .unwrap();
    let root = Scope::root(registry);

    let facade = root.resolve::<dyn Facade>().unwrap();
    assert_eq!(facade.inner_id(), "alpha");
}

#[test]
fn concurrent_scopes_share_one_singleton() {
    let registry = Registry::builder()
        .register::<dyn Service, _>(Lifetime::Singleton, |_| Arc::new(Alpha))
        .build()
        .unwrap();
    let root = Arc::new(Scope::root(registry));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let root = root.clone();
            std::thread::spawn(move || {
                let scope = root.create_child();
                scope.resolve::<dyn Service>().unwrap()
            })
        })
        .collect();

    let resolved: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for pair in resolved.windows(2) {
        assert!(Arc::ptr_eq(&pair[0], &pair[1]));
    }
}
