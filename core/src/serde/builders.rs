#![allow(dead_code)]

use crate::serde::correction::ErrorCorrectionDefault;

/// Storage for a required builder field.
///
/// Required members have no meaningful "unset" representation of their own, so the
/// builder wraps them in `Required` and defers to [`ErrorCorrectionDefault`] if the
/// member was never set, matching [Smithy client error
/// correction](https://smithy.io/2.0/spec/aggregate-types.html#client-error-correction).
#[derive(Clone, Debug)]
pub enum Required<T> {
    Unset,
    Set(T),
}

impl<T> Required<T> {
    /// Returns the set value, or the type's error-correction default if unset.
    pub fn get(self) -> T
    where
        T: ErrorCorrectionDefault,
    {
        match self {
            Required::Set(value) => value,
            Required::Unset => T::default(),
        }
    }
}

/// A builder field that targets another buildable shape.
///
/// Generated setters accept either the built shape directly (`Struct`) or its builder
/// (`Builder`, via a `_builder` setter), so a caller doesn't have to fully build nested
/// shapes just to set them on a parent builder.
#[derive(Clone, Debug)]
pub enum MaybeBuilt<S, B> {
    Struct(S),
    Builder(B),
}

/// A builder for a Smithy shape `S`.
///
/// Implemented by the `#[derive(SmithyShape)]` macro for generated `<Shape>Builder`
/// types. The lifetime matches [`crate::serde::de::Deserializer`]'s, since builders are
/// also the target of [`crate::serde::de::DeserializeWithSchema`].
pub trait ShapeBuilder<'de, S>: Sized {
    fn new() -> Self;
}

/// Marker for a shape `S` that can be built via builder `B`.
///
/// Lets generic code go from a built shape's type to its builder type without
/// threading the builder type through every call site.
pub trait Buildable<'de, B>: Sized
where
    B: ShapeBuilder<'de, Self>,
{
}
