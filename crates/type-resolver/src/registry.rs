//! Discriminator → constructor registry.

use std::collections::HashMap;
use std::sync::Arc;

use common::{JsonObject, Result};

use crate::resolver::NestedResolver;

/// A constructor that copies one variant's declared fields out of a payload.
///
/// The [`NestedResolver`] resolves embedded payloads of the same family
/// against the registry currently in use.
pub type Factory<V> =
    Arc<dyn Fn(&JsonObject<'_>, &NestedResolver<'_, V>) -> Result<V> + Send + Sync>;

/// Maps discriminator values to variant constructors.
///
/// A registry is populated once, then handed to a
/// [`TypeResolver`](crate::TypeResolver), which owns it read-only from then on.
/// Registering a discriminator that is already present replaces the previous
/// constructor.
pub struct VariantRegistry<V> {
    factories: HashMap<String, Factory<V>>,
}

impl<V> VariantRegistry<V> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Associates a discriminator value with a constructor.
    ///
    /// Last registration wins.
    pub fn register<F>(&mut self, discriminator: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&JsonObject<'_>) -> Result<V> + Send + Sync + 'static,
    {
        self.register_nested(discriminator, move |object, _| factory(object))
    }

    /// Associates a discriminator value with a constructor that resolves
    /// embedded payloads of the same family (a set's element type, say).
    pub fn register_nested<F>(&mut self, discriminator: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&JsonObject<'_>, &NestedResolver<'_, V>) -> Result<V> + Send + Sync + 'static,
    {
        let discriminator = discriminator.into();
        if self
            .factories
            .insert(discriminator.clone(), Arc::new(factory))
            .is_some()
        {
            tracing::debug!(%discriminator, "variant factory replaced");
        }
        self
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with<F>(mut self, discriminator: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&JsonObject<'_>) -> Result<V> + Send + Sync + 'static,
    {
        self.register(discriminator, factory);
        self
    }

    /// Builder-style variant of [`register_nested`](Self::register_nested).
    pub fn with_nested<F>(mut self, discriminator: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&JsonObject<'_>, &NestedResolver<'_, V>) -> Result<V> + Send + Sync + 'static,
    {
        self.register_nested(discriminator, factory);
        self
    }

    /// Returns the constructor for a discriminator.
    pub fn get(&self, discriminator: &str) -> Option<&Factory<V>> {
        self.factories.get(discriminator)
    }

    pub fn contains(&self, discriminator: &str) -> bool {
        self.factories.contains_key(discriminator)
    }

    /// Returns the registered discriminators in sorted order.
    pub fn discriminators(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<V> Default for VariantRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for VariantRegistry<V> {
    fn clone(&self) -> Self {
        Self {
            factories: self.factories.clone(),
        }
    }
}

impl<V> std::fmt::Debug for VariantRegistry<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantRegistry")
            .field("discriminators", &self.discriminators())
            .finish()
    }
}
