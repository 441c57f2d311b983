//! Polymorphic type resolution for API payloads.
//!
//! Many API payloads form a family of shapes told apart by a discriminator
//! field (`{"name": "Enum", ...}`, `{"type": "ProductCreated", ...}`). This
//! crate provides:
//! - [`Variant`], the capability every family member shares
//! - [`VariantRegistry`], mapping discriminator values to constructors
//! - [`TypeResolver`], which reads the discriminator and runs the matching constructor
//! - [`NestedResolver`], handed to constructors for embedded payloads of the same family
//! - [`ResolverConfig`], naming the family and its discriminator field

pub mod config;
pub mod registry;
pub mod resolver;
pub mod variant;

pub use common::{JsonKind, JsonObject, MalformedInput, MappingError, Result};
pub use config::ResolverConfig;
pub use registry::{Factory, VariantRegistry};
pub use resolver::{NestedResolver, TypeResolver};
pub use variant::Variant;
