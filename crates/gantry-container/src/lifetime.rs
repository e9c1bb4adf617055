//! Lifetime policies for registrations

/// How long a resolved instance lives and who shares it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifetime {
    /// One shared instance per scope-hierarchy root, memoized on first
    /// resolution and returned to every descendant scope thereafter.
    /// Singleton implementations must be immutable after construction or
    /// internally thread-safe; the registry does not synchronize them.
    Singleton,
    /// A new instance per resolution. Used for per-request services such
    /// as handler modules, which are stateful and must never be shared
    /// across requests.
    Transient,
}

impl std::fmt::Display for Lifetime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lifetime::Singleton => write!(f, "singleton"),
            Lifetime::Transient => write!(f, "transient"),
        }
    }
}
