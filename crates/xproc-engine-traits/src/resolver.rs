//! URI and entity resolution seams.
//!
//! The host editor configures resolvers by name rather than by handing over
//! instances, so the registry maps resolver names to factories. An unknown
//! name is an initialization failure on the adapter side.

use std::collections::HashMap;

use crate::error::{EngineError, Result};

/// A resolved source the engine can read a pipeline or document from
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PipelineSource {
    uri: String,
}

impl PipelineSource {
    pub fn new<S: Into<String>>(uri: S) -> Self {
        Self { uri: uri.into() }
    }

    /// The absolute URI of the source
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// Trait for URI resolvers supplied by the host
pub trait UriResolver: Send + Sync {
    /// Resolve `href` (optionally against `base`) to an absolute URI
    fn resolve(&self, href: &str, base: Option<&str>) -> Result<String>;
}

/// Trait for external-entity resolvers supplied by the host
pub trait EntityResolver: Send + Sync {
    /// Resolve an external entity to a replacement URI, or `None` to let the
    /// engine use its default handling
    fn resolve_entity(&self, public_id: Option<&str>, system_id: &str) -> Result<Option<String>>;
}

/// Resolver that returns every href unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityResolver;

impl UriResolver for IdentityResolver {
    fn resolve(&self, href: &str, _base: Option<&str>) -> Result<String> {
        Ok(href.to_string())
    }
}

impl EntityResolver for IdentityResolver {
    fn resolve_entity(&self, _public_id: Option<&str>, _system_id: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

type UriResolverFactory = Box<dyn Fn() -> Box<dyn UriResolver> + Send + Sync>;
type EntityResolverFactory = Box<dyn Fn() -> Box<dyn EntityResolver> + Send + Sync>;

/// Registry mapping resolver names to factories
#[derive(Default)]
pub struct ResolverRegistry {
    uri_resolvers: HashMap<String, UriResolverFactory>,
    entity_resolvers: HashMap<String, EntityResolverFactory>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a URI resolver factory under `name`
    pub fn register_uri_resolver<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> Box<dyn UriResolver> + Send + Sync + 'static,
    {
        self.uri_resolvers.insert(name.to_string(), Box::new(factory));
    }

    /// Register an entity resolver factory under `name`
    pub fn register_entity_resolver<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> Box<dyn EntityResolver> + Send + Sync + 'static,
    {
        self.entity_resolvers
            .insert(name.to_string(), Box::new(factory));
    }

    /// Instantiate the URI resolver registered under `name`
    pub fn uri_resolver(&self, name: &str) -> Result<Box<dyn UriResolver>> {
        self.uri_resolvers
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| EngineError::resolver(format!("unknown URI resolver '{name}'")))
    }

    /// Instantiate the entity resolver registered under `name`
    pub fn entity_resolver(&self, name: &str) -> Result<Box<dyn EntityResolver>> {
        self.entity_resolvers
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| EngineError::resolver(format!("unknown entity resolver '{name}'")))
    }
}
