/// Builds a [`crate::schema::TraitList`] (`Vec<TraitRef>`) from a list of trait values.
///
/// Each argument must implement [`crate::schema::SmithyTrait`]; it is wrapped in a
/// [`crate::schema::TraitRef`] automatically.
#[macro_export]
macro_rules! traits {
    () => { ::std::vec![] };
    ($($x:expr),+ $(,)?) => {
        ::std::vec![$($crate::schema::TraitRef::from($x)),*]
    };
}

/// Declares a `static LazyLock<SchemaRef>` built from an expression, evaluated once.
#[macro_export]
macro_rules! lazy_schema {
    ($schema_name:ident, $build_expr:expr) => {
        pub(crate) static $schema_name: ::std::sync::LazyLock<$crate::schema::SchemaRef> =
            ::std::sync::LazyLock::new(|| $build_expr);
    };
}

#[macro_export]
macro_rules! lazy_member_schema {
    ($member_schema_name:ident, $parent_schema:ident, $identifier:literal) => {
        static $member_schema_name: ::std::sync::LazyLock<&$crate::schema::SchemaRef> =
            ::std::sync::LazyLock::new(|| $parent_schema.expect_member($identifier));
    };
}

#[macro_export]
macro_rules! lazy_shape_id {
    ($id_name:ident, $identifier:literal) => {
        static $id_name: ::std::sync::LazyLock<$crate::schema::ShapeId> =
            ::std::sync::LazyLock::new(|| $crate::schema::ShapeId::from($identifier));
    };
}

/// Declares a zero-field marker trait (`@sensitive`-style annotation trait) whose
/// value is always [`crate::schema::DefaultDocumentValue::Null`].
#[macro_export]
macro_rules! annotation_trait {
    ($name:ident, $id:literal) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name;

        impl $name {
            #[must_use]
            pub const fn new() -> Self {
                $name
            }
        }

        $crate::static_id!($name, $id);

        impl $crate::schema::SmithyTrait for $name {
            fn id(&self) -> &$crate::schema::ShapeId {
                Self::trait_id()
            }

            fn value(&self) -> &$crate::schema::DefaultDocumentValue {
                static NULL: $crate::schema::DefaultDocumentValue =
                    $crate::schema::DefaultDocumentValue::Null;
                &NULL
            }
        }
    };
}

/// Implements [`crate::schema::StaticTraitId`] for a type using a `LazyLock`-cached
/// [`crate::schema::ShapeId`] built from the literal.
#[macro_export]
macro_rules! static_id {
    ($name:ident, $id:literal) => {
        impl $crate::schema::StaticTraitId for $name {
            fn trait_id() -> &'static $crate::schema::ShapeId {
                static ID: ::std::sync::LazyLock<$crate::schema::ShapeId> =
                    ::std::sync::LazyLock::new(|| $crate::schema::ShapeId::from($id));
                &ID
            }
        }
    };
}

/// Sets a required builder field from the current member if its schema matches
/// `$field_schema`, otherwise falls through (for the next arm, or the unknown-field
/// case) without touching `$builder`.
///
/// Generated by `#[derive(SmithyShape)]` for structure/union builder deserialization;
/// not meant to be written by hand. `$member_schema` is the [`crate::schema::SchemaRef`]
/// of the member currently being read, `$field_schema` its static member schema,
/// `$de` the deserializer, `$builder` the builder folded so far, `$setter` the
/// corresponding builder setter, and `$ty` the type to deserialize the member as.
#[macro_export]
macro_rules! deserialize_member {
    ($member_schema:ident, $field_schema:expr, $de:ident, $builder:ident, $setter:ident, $ty:ty) => {
        if &$member_schema == *$field_schema {
            return ::std::result::Result::Ok(
                $builder.$setter(<$ty>::deserialize_with_schema(&$member_schema, $de)?),
            );
        }
    };
}

/// As [`deserialize_member!`], for optional builder fields. Setters already accept the
/// bare (unwrapped) value for both required and optional fields, so the expansion is
/// identical; the two macros exist to mirror the required/optional split in generated
/// code.
#[macro_export]
macro_rules! deserialize_optional_member {
    ($member_schema:ident, $field_schema:expr, $de:ident, $builder:ident, $setter:ident, $ty:ty) => {
        if &$member_schema == *$field_schema {
            return ::std::result::Result::Ok(
                $builder.$setter(<$ty>::deserialize_with_schema(&$member_schema, $de)?),
            );
        }
    };
}

/// Resolves a member target token to an `Into<MemberTarget>` expression.
///
/// `(@self)` refers back to the aggregate shape currently being built (its
/// `Arc<SchemaBuilder>`, still under construction); any other token is a plain schema
/// reference (a `LazyLock<SchemaRef>` static, possibly one built by a sibling `smithy!`
/// invocation).
#[doc(hidden)]
#[macro_export]
macro_rules! __smithy_member_target {
    ((@self), $builder:expr) => {
        &$builder
    };
    ($target:ident, $builder:expr) => {
        &$target
    };
}

/// Builds an aggregate (structure/union/list/map) schema and the `LazyLock<&SchemaRef>`
/// member-schema constants (named `_{shape}_MEMBER_{member}`, matching what
/// `#[derive(SmithyShape)]`-generated code looks up) that go with it.
///
/// Not meant to be written by hand; expanded into by [`smithy!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __smithy_aggregate {
    (
        $builder_ctor:ident, $id:literal, $name:ident, [$($trait_expr:expr),*],
        [$($(@ $member_trait:expr;)* $member:ident : $target:tt = $wire:literal)*]
    ) => {
        pub(crate) static $name: ::std::sync::LazyLock<$crate::schema::SchemaRef> =
            ::std::sync::LazyLock::new(|| {
                let builder = ::std::sync::Arc::new(
                    $crate::schema::Schema::$builder_ctor($id, $crate::traits![$($trait_expr),*])
                );
                $(
                    let _ = builder.put_member(
                        $wire,
                        $crate::__smithy_member_target!($target, builder),
                        $crate::traits![$($member_trait),*],
                    );
                )*
                builder.build()
            });

        ::pastey::paste! {
            $(
                #[allow(non_snake_case)]
                static [<_ $name _MEMBER_ $member>]: ::std::sync::LazyLock<&$crate::schema::SchemaRef> =
                    ::std::sync::LazyLock::new(|| $name.expect_member($wire));
            )*
        }
    };
}

/// Declares a named schema (and, for aggregates, its member-schema constants) bound to
/// `static` `LazyLock`s.
///
/// This is a small DSL used by hand-written prelude/fixture schemas (generated
/// code builds schemas directly via the `Schema`/`SchemaBuilder` API instead).
///
/// ```rust,ignore
/// smithy!("smithy.api#Unit": {
///     @UnitTypeTrait;
///     structure UNIT {}
/// });
///
/// smithy!("com.example#Example": {
///     structure SCHEMA {
///         @JsonNameTrait::new("renamed");
///         A: STRING = "a"
///         NEXT: (@self) = "next"
///     }
/// });
/// ```
#[macro_export]
macro_rules! smithy {
    ($id:literal : { $(@ $trait_expr:expr;)* structure $name:ident {} }) => {
        $crate::lazy_schema!(
            $name,
            $crate::schema::Schema::structure_builder($id, $crate::traits![$($trait_expr),*]).build()
        );
    };
    ($id:literal : { $(@ $trait_expr:expr;)* string $name:ident }) => {
        $crate::lazy_schema!(
            $name,
            $crate::schema::Schema::create_string($id, $crate::traits![$($trait_expr),*])
        );
    };
    ($id:literal : {
        $(@ $trait_expr:expr;)*
        structure $name:ident {
            $($(@ $member_trait:expr;)* $member:ident : $target:tt = $wire:literal)+
        }
    }) => {
        $crate::__smithy_aggregate!(
            structure_builder, $id, $name, [$($trait_expr),*],
            [$($(@ $member_trait;)* $member : $target = $wire)+]
        );
    };
    ($id:literal : {
        $(@ $trait_expr:expr;)*
        union $name:ident {
            $($(@ $member_trait:expr;)* $member:ident : $target:tt = $wire:literal)+
        }
    }) => {
        $crate::__smithy_aggregate!(
            union_builder, $id, $name, [$($trait_expr),*],
            [$($(@ $member_trait;)* $member : $target = $wire)+]
        );
    };
    ($id:literal : {
        $(@ $trait_expr:expr;)*
        list $name:ident {
            member : $target:tt
        }
    }) => {
        $crate::__smithy_aggregate!(
            list_builder, $id, $name, [$($trait_expr),*],
            [member : $target = "member"]
        );
    };
    ($id:literal : {
        $(@ $trait_expr:expr;)*
        map $name:ident {
            key : $key_target:tt
            value : $value_target:tt
        }
    }) => {
        $crate::__smithy_aggregate!(
            map_builder, $id, $name, [$($trait_expr),*],
            [key : $key_target = "key" value : $value_target = "value"]
        );
    };
    ($id:literal : {
        $(@ $trait_expr:expr;)*
        enum $name:ident {
            $($variant:ident = $value:literal)+
        }
    }) => {
        $crate::lazy_schema!(
            $name,
            $crate::schema::Schema::create_enum(
                $id,
                ::std::boxed::Box::new([$($value),+]),
                $crate::traits![$($trait_expr),*],
            )
        );
    };
    ($id:literal : {
        $(@ $trait_expr:expr;)*
        int_enum $name:ident {
            $($variant:ident = $value:literal)+
        }
    }) => {
        $crate::lazy_schema!(
            $name,
            $crate::schema::Schema::create_int_enum(
                $id,
                ::std::boxed::Box::new([$($value),+]),
                $crate::traits![$($trait_expr),*],
            )
        );
    };
}
