//! Shared primitives for mapping commercetools API payloads into typed models.
//!
//! This crate provides:
//! - [`MappingError`] and [`MalformedInput`], the error taxonomy of the mapping layer
//! - [`JsonObject`], typed accessors over a parsed JSON object
//! - [`LocalizedString`], language-keyed display strings
//! - [`ResourceId`], the identifier shared by all API resources

pub mod error;
pub mod json;
pub mod localized;
pub mod types;

pub use error::{JsonKind, MalformedInput, MappingError, Result};
pub use json::JsonObject;
pub use localized::LocalizedString;
pub use types::ResourceId;
