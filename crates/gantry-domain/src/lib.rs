//! # gantry-domain
//!
//! Domain layer for the gantry composition-root adapter.
//!
//! Defines the contracts shared by the container and bootstrap layers:
//!
//! - **error** - Error taxonomy for registration and resolution failures
//! - **context** - Per-request value objects passed through resolution
//! - **ports** - Boundary traits implemented by the framework runtime
//!   (extension points, handler modules, engine services)
//!
//! This crate is a pure library: no I/O, no async, no global state.

pub mod context;
pub mod error;
pub mod ports;

pub use context::{ModuleResponse, RequestContext};
pub use error::{Error, Result};
