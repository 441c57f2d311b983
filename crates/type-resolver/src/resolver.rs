//! Discriminator-based payload resolution.

use common::{JsonKind, JsonObject, MalformedInput, MappingError, Result};
use serde_json::Value;

use crate::config::ResolverConfig;
use crate::registry::VariantRegistry;
use crate::variant::Variant;

/// Turns raw payloads into variants of one family.
///
/// Resolution reads the configured discriminator field, looks up the
/// registered constructor and runs it against the whole payload:
/// - a payload that is not an object is [`MalformedInput::NotAnObject`]
/// - an absent (or `null`) discriminator is [`MappingError::MissingDiscriminator`]
/// - a discriminator without a constructor is [`MappingError::UnknownVariant`]
/// - a constructor failure is wrapped in [`MalformedInput::Variant`]
///
/// The resolver owns its registry and never mutates it, so a single
/// instance can be shared freely across threads.
pub struct TypeResolver<V> {
    config: ResolverConfig,
    registry: VariantRegistry<V>,
}

impl<V> Clone for TypeResolver<V> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            registry: self.registry.clone(),
        }
    }
}

impl<V> std::fmt::Debug for TypeResolver<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeResolver")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish()
    }
}

impl<V: Variant> TypeResolver<V> {
    /// Creates a resolver over a fully-populated registry.
    pub fn new(config: ResolverConfig, registry: VariantRegistry<V>) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn family(&self) -> &str {
        &self.config.family
    }

    /// Returns true if a constructor is registered for the discriminator.
    pub fn is_registered(&self, discriminator: &str) -> bool {
        self.registry.contains(discriminator)
    }

    /// Returns the registered discriminators in sorted order.
    pub fn discriminators(&self) -> Vec<&str> {
        self.registry.discriminators()
    }

    /// Resolves a payload into a variant.
    #[tracing::instrument(skip(self, payload), fields(family = %self.config.family))]
    pub fn resolve(&self, payload: &Value) -> Result<V> {
        let resolved = self.nested().resolve(payload);
        self.record(&resolved);
        resolved
    }

    /// Resolves an already-wrapped payload object.
    pub fn resolve_object(&self, object: &JsonObject<'_>) -> Result<V> {
        let resolved = self.nested().resolve_object(object);
        self.record(&resolved);
        resolved
    }

    /// Resolves a list of payloads, stopping at the first failure.
    ///
    /// Failures are reported as [`MalformedInput::Element`] of `results`, the
    /// field query responses carry their items in.
    pub fn resolve_all(&self, payloads: &[Value]) -> Result<Vec<V>> {
        payloads
            .iter()
            .enumerate()
            .map(|(index, payload)| {
                self.resolve(payload).map_err(|source| {
                    MappingError::from(MalformedInput::Element {
                        field: "results".to_string(),
                        index,
                        source: Box::new(source),
                    })
                })
            })
            .collect()
    }

    /// Resolves a mandatory nested field of `object`.
    pub fn resolve_field(&self, object: &JsonObject<'_>, field: &str) -> Result<V> {
        self.resolve(object.required(field)?)
    }

    /// Resolves an optional nested field of `object`.
    pub fn resolve_optional_field(&self, object: &JsonObject<'_>, field: &str) -> Result<Option<V>> {
        object
            .get(field)
            .map(|payload| self.resolve(payload))
            .transpose()
    }

    /// Resolves every element of an array field of `object`, in order.
    pub fn resolve_list(&self, object: &JsonObject<'_>, field: &str) -> Result<Vec<V>> {
        object.map_array(field, |payload| self.resolve(payload))
    }

    fn nested(&self) -> NestedResolver<'_, V> {
        NestedResolver { resolver: self }
    }

    // Counted once per top-level payload, labelled with the innermost cause.
    fn record(&self, resolved: &Result<V>) {
        match resolved {
            Ok(_) => {
                metrics::counter!("type_resolver_resolved_total", "family" => self.config.family.clone())
                    .increment(1);
            }
            Err(err) => {
                metrics::counter!(
                    "type_resolver_failures_total",
                    "family" => self.config.family.clone(),
                    "reason" => failure_reason(err)
                )
                .increment(1);
            }
        }
    }
}

/// Resolution handle passed to factories.
///
/// Embedded payloads of the same family resolve against the registry of the
/// resolver that invoked the factory, so overrides apply at every depth.
/// Nested failures surface through the outer payload and are not counted on
/// their own.
pub struct NestedResolver<'r, V> {
    resolver: &'r TypeResolver<V>,
}

impl<V: Variant> NestedResolver<'_, V> {
    pub fn family(&self) -> &str {
        &self.resolver.config.family
    }

    /// Resolves an embedded payload.
    pub fn resolve(&self, payload: &Value) -> Result<V> {
        let object = JsonObject::new(payload)?;
        self.resolve_object(&object)
    }

    /// Resolves an embedded, already-wrapped payload object.
    pub fn resolve_object(&self, object: &JsonObject<'_>) -> Result<V> {
        let config = &self.resolver.config;
        let discriminator = self.discriminator(object)?;

        let Some(factory) = self.resolver.registry.get(discriminator) else {
            tracing::warn!(family = %config.family, %discriminator, "unknown variant");
            return Err(MappingError::UnknownVariant {
                family: config.family.clone(),
                discriminator: discriminator.to_string(),
            });
        };

        match factory(object, self) {
            Ok(variant) => {
                tracing::trace!(discriminator = variant.discriminator(), "variant resolved");
                Ok(variant)
            }
            Err(source) => Err(MalformedInput::Variant {
                family: config.family.clone(),
                discriminator: discriminator.to_string(),
                source: Box::new(source),
            }
            .into()),
        }
    }

    /// Resolves a mandatory embedded field of `object`.
    pub fn resolve_field(&self, object: &JsonObject<'_>, field: &str) -> Result<V> {
        self.resolve(object.required(field)?)
    }

    /// Resolves an optional embedded field of `object`.
    pub fn resolve_optional_field(&self, object: &JsonObject<'_>, field: &str) -> Result<Option<V>> {
        object
            .get(field)
            .map(|payload| self.resolve(payload))
            .transpose()
    }

    /// Resolves every element of an embedded array field of `object`, in order.
    pub fn resolve_list(&self, object: &JsonObject<'_>, field: &str) -> Result<Vec<V>> {
        object.map_array(field, |payload| self.resolve(payload))
    }

    fn discriminator<'a>(&self, object: &JsonObject<'a>) -> Result<&'a str> {
        let config = &self.resolver.config;
        let field = config.discriminator_field.as_str();
        match object.get(field) {
            Some(Value::String(discriminator)) => Ok(discriminator.as_str()),
            Some(other) => Err(MappingError::wrong_kind(field, JsonKind::String, other)),
            None => Err(MappingError::MissingDiscriminator {
                family: config.family.clone(),
                field: field.to_string(),
            }),
        }
    }
}

/// Metric label for a failure, taken from its innermost cause.
fn failure_reason(err: &MappingError) -> &'static str {
    match err {
        MappingError::MalformedInput(
            MalformedInput::Variant { source, .. } | MalformedInput::Element { source, .. },
        ) => failure_reason(source),
        MappingError::MalformedInput(_) => "malformed",
        MappingError::MissingDiscriminator { .. } => "missing_discriminator",
        MappingError::UnknownVariant { .. } => "unknown_variant",
    }
}
