//! Derive macros for `smithy4rs-core` shapes and traits.
//!
//! The main entry point is `#[derive(SmithyShape)]`, which reads a `#[smithy_schema(...)]`
//! attribute pointing at a `static SchemaRef` and generates the schema-driven
//! serialization/deserialization glue (`StaticSchemaShape`, `SerializeWithSchema`,
//! `DeserializeWithSchema`, a builder, and a schema-aware `Debug` impl) for the
//! annotated struct, enum, or union.

extern crate proc_macro;

#[cfg(feature = "serde-adapter")]
mod adapter;
mod builder;
mod debug;
mod deserialization;
mod schema;
mod serialization;
mod traits;
mod utils;

use proc_macro::TokenStream;
use proc_macro2::Ident;
use quote::quote;
use syn::{Data, DeriveInput, parse_macro_input};

pub(crate) use utils::parse_schema;
use builder::get_builder_fields;
use utils::{get_builder_ident, get_crate_info};

/// Derives the schema-driven runtime for a Smithy shape.
///
/// Requires a `#[smithy_schema(SCHEMA_STATIC)]` attribute on the item, and one on every
/// field/variant pointing at its member schema. Structures additionally get a
/// `<Shape>Builder` (used for deserialization and client error correction); unions use
/// the same builder machinery keyed by variant instead of field.
#[proc_macro_derive(SmithyShape, attributes(smithy_schema, enum_value, default))]
pub fn smithy_shape_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_smithy_shape(&input).into()
}

fn expand_smithy_shape(input: &DeriveInput) -> proc_macro2::TokenStream {
    let shape_name = &input.ident;
    let schema_ident = parse_schema(&input.attrs);
    let (extern_import, crate_ident) = get_crate_info();

    let schema_block = {
        let body = schema::schema_impl(shape_name, &schema_ident);
        quote! {
            const _: () = {
                #extern_import
                use #crate_ident::schema::SchemaRef as _SchemaRef;
                use #crate_ident::schema::StaticSchemaShape as _StaticSchemaShape;
                #body
            };
        }
    };

    let debug_block = {
        let body = debug::debug_impl(shape_name, &schema_ident);
        quote! {
            const _: () = {
                #extern_import
                use #crate_ident::serde::debug::DebugWrapper as _DebugWrapper;
                #body
            };
        }
    };

    let serialization_block = {
        let body = serialization::serialization_impl(&crate_ident, shape_name, &schema_ident, input);
        quote! {
            const _: () = {
                #extern_import
                use #crate_ident::schema::SchemaRef as _SchemaRef;
                #body
            };
        }
    };

    let deserialization_block = {
        let body =
            deserialization::deserialization_impl(&crate_ident, shape_name, &schema_ident, input);
        quote! {
            const _: () = {
                #extern_import
                use #crate_ident::schema::SchemaRef as _SchemaRef;
                #body
            };
        }
    };

    // Structures get a generated builder; plain enums deserialize directly into
    // themselves (via `deserialize_enum`) and unions build their variant directly
    // (via `deserialize_union`), so neither needs one.
    let builder_block = if let Data::Struct(data) = &input.data {
        let field_data = get_builder_fields(&schema_ident, data);
        let builder_name = get_builder_ident(shape_name);
        let struct_def = builder::builder_struct(shape_name, &field_data);
        let impls = builder::builder_impls(shape_name, &field_data);
        let buildable = builder::buildable(shape_name, &builder_name);
        quote! {
            #struct_def

            const _: () = {
                #extern_import
                use #crate_ident::serde::correction::ErrorCorrection as _ErrorCorrection;
                use #crate_ident::serde::correction::ErrorCorrectionDefault as _ErrorCorrectionDefault;
                use #crate_ident::serde::ShapeBuilder as _ShapeBuilder;
                use #crate_ident::serde::Buildable as _Buildable;
                #impls
                #buildable
            };
        }
    } else {
        quote! {}
    };

    let adapter_block = adapter_block(&extern_import, &crate_ident, shape_name, input);

    quote! {
        #schema_block
        #debug_block
        #serialization_block
        #deserialization_block
        #builder_block
        #adapter_block
    }
}

/// Generates the optional `serde::Serialize`/`Deserialize` bridge.
///
/// Gated on the `serde-adapter` feature; deserialization via the adapter additionally
/// requires a builder, so it's only emitted for plain structures.
#[cfg(feature = "serde-adapter")]
fn adapter_block(
    extern_import: &proc_macro2::TokenStream,
    crate_ident: &proc_macro2::TokenStream,
    shape_name: &Ident,
    input: &DeriveInput,
) -> proc_macro2::TokenStream {
    let schema_ident = parse_schema(&input.attrs);
    let ser_body = adapter::ser_adapter_impl(crate_ident, shape_name, &schema_ident);
    let ser_block = quote! {
        const _: () = {
            #extern_import
            use ::serde as _serde;
            #ser_body
        };
    };

    if matches!(&input.data, Data::Struct(_)) {
        let deser_body = adapter::deser_adapter_impl(crate_ident, shape_name);
        let deser_block = quote! {
            const _: () = {
                #extern_import
                use ::serde as _serde;
                #deser_body
            };
        };
        quote! {
            #ser_block
            #deser_block
        }
    } else {
        ser_block
    }
}

#[cfg(not(feature = "serde-adapter"))]
fn adapter_block(
    _extern_import: &proc_macro2::TokenStream,
    _crate_ident: &proc_macro2::TokenStream,
    _shape_name: &Ident,
    _input: &DeriveInput,
) -> proc_macro2::TokenStream {
    quote! {}
}

/// Derives `StaticTraitId` and `SmithyTrait` for a hand-written trait value type, plus a
/// `new` constructor/builder accessor (`#[derive(SmithyTraitImpl)] #[smithy_trait_id("...")]`).
#[proc_macro_derive(SmithyTraitImpl, attributes(smithy_trait_id))]
pub fn smithy_trait_impl_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_smithy_trait_impl(&input).into()
}

fn expand_smithy_trait_impl(input: &DeriveInput) -> proc_macro2::TokenStream {
    let trait_ident = &input.ident;
    let (extern_import, crate_ident) = get_crate_info();

    let constructor = traits::constructor(trait_ident, input);
    let id_impl = traits::static_trait_id_impl(trait_ident, &input.attrs);
    let value_impl = traits::trait_value_impl(trait_ident, input);

    quote! {
        #constructor

        const _: () = {
            #extern_import
            use #crate_ident::LazyLock as _LazyLock;
            use #crate_ident::schema::ShapeId as _ShapeId;
            use #crate_ident::schema::StaticTraitId as _StaticTraitId;
            use #crate_ident::schema::SmithyTrait as _SmithyTrait;
            use #crate_ident::schema::DefaultDocumentValue as _DefaultDocumentValue;
            #id_impl
            #value_impl
        };
    }
}

/// Marks an enum as a Smithy union: every declared variant must carry a
/// `#[smithy_schema(...)]` attribute naming its member schema. Appends a hidden
/// `Unknown(String)` catch-all variant, used by generated deserialization for members
/// not recognized by any declared variant, unless one is already present.
#[proc_macro_attribute]
pub fn smithy_union(_attrs: TokenStream, item: TokenStream) -> TokenStream {
    add_unknown_variant(item, false)
}

/// Marks an enum as a Smithy (string/int) enum. Appends a hidden `Unknown(<repr>)`
/// variant used to round-trip values absent from the modeled set, unless one is
/// already present.
#[proc_macro_attribute]
pub fn smithy_enum(_attrs: TokenStream, item: TokenStream) -> TokenStream {
    add_unknown_variant(item, true)
}

fn add_unknown_variant(item: TokenStream, is_enum: bool) -> TokenStream {
    let mut input = parse_macro_input!(item as DeriveInput);
    let Data::Enum(data) = &mut input.data else {
        panic!("`smithy_union`/`smithy_enum` can only be applied to enums");
    };
    let has_unknown = data.variants.iter().any(|v| v.ident == "Unknown");
    if !has_unknown {
        let repr = if is_enum {
            enum_repr_type(data)
        } else {
            quote! { String }
        };
        let unknown_variant: syn::Variant = syn::parse_quote! {
            #[doc(hidden)]
            Unknown(#repr)
        };
        data.variants.push(unknown_variant);
    }
    quote! { #input }.into()
}

/// Determines the wire representation (`String` or `i32`) carried by a generated
/// `Unknown` variant, based on the first declared variant's `#[enum_value(...)]`.
fn enum_repr_type(data: &syn::DataEnum) -> proc_macro2::TokenStream {
    let first = data
        .variants
        .iter()
        .find(|v| v.ident != "Unknown")
        .expect("enum must have at least one modeled variant");
    match utils::parse_enum_value(&first.attrs) {
        Some(syn::Lit::Int(_)) => quote! { i32 },
        _ => quote! { String },
    }
}
