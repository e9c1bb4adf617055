//! Framework Extension Point Ports
//!
//! Each trait here is a capability with potentially many registered
//! implementations. The framework runtime enumerates the full set via
//! multi-binding resolution; it never assumes a single implementation.
//!
//! All extension points are registered as singletons: implementations must
//! be immutable after construction or internally thread-safe, since one
//! shared instance serves every concurrent request.

use crate::context::RequestContext;
use crate::error::Result;

/// Renders a view template into response text
pub trait ViewEngine: Send + Sync {
    /// File extensions this engine claims (e.g. `["html", "hbs"]`)
    fn extensions(&self) -> &[&str];

    /// Render the named view with the given request context
    fn render(&self, view_name: &str, ctx: &RequestContext) -> Result<String>;
}

/// Locates view source text for a view name
pub trait ViewSourceProvider: Send + Sync {
    /// Return the view source, or `None` if this provider cannot locate it
    fn locate(&self, view_name: &str) -> Option<String>;
}

/// Binds request data to a model value
pub trait ModelBinder: Send + Sync {
    /// Whether this binder can produce the named model type
    fn can_bind(&self, model_type: &str) -> bool;

    /// Bind a model value from the request context
    fn bind(&self, ctx: &RequestContext, model_type: &str) -> Result<serde_json::Value>;
}

/// Converts a captured string value to a typed value
pub trait TypeConverter: Send + Sync {
    /// Whether this converter handles the named target type
    fn can_convert(&self, target_type: &str) -> bool;

    /// Convert the raw string into the target representation
    fn convert(&self, raw: &str, target_type: &str) -> Result<serde_json::Value>;
}

/// Deserializes a request body for a given content type
pub trait BodyDeserializer: Send + Sync {
    /// Whether this deserializer handles the content type
    fn can_deserialize(&self, content_type: &str) -> bool;

    /// Deserialize the body bytes into a structured value
    fn deserialize(&self, content_type: &str, body: &[u8]) -> Result<serde_json::Value>;
}

/// Supplies the application root path used to locate views and content
pub trait RootPathProvider: Send + Sync {
    /// Absolute root path of the hosted application
    fn root_path(&self) -> &str;
}
