//! The shared capability of polymorphic payload types.

/// A member of a family of payload shapes selected by a discriminator.
///
/// Implemented by the family type (usually an enum of flat records) so
/// callers can recover the discriminator a value was built from.
pub trait Variant {
    /// Returns the discriminator value of this variant as it appears on the wire.
    fn discriminator(&self) -> &str;
}

impl<V: Variant + ?Sized> Variant for Box<V> {
    fn discriminator(&self) -> &str {
        (**self).discriminator()
    }
}
