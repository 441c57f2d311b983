//! Resolver configuration.

/// Describes one variant family.
///
/// - `family`: name used in logs, metrics and errors (default: `"variant"`)
/// - `discriminator_field`: payload field holding the discriminator (default: `"type"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub family: String,
    pub discriminator_field: String,
}

impl ResolverConfig {
    /// Creates a configuration for the named family using the default
    /// discriminator field.
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            ..Self::default()
        }
    }

    /// Sets the discriminator field.
    pub fn discriminator_field(mut self, field: impl Into<String>) -> Self {
        self.discriminator_field = field.into();
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            family: "variant".to_string(),
            discriminator_field: "type".to_string(),
        }
    }
}
