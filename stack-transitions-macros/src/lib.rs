use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Derive macro generating a partial overlay for a configuration record
///
/// For a struct `Name` this generates `NameOverlay`, where every field of `Name`
/// is wrapped in `Option`. A field left as `None` keeps the base value, a field
/// set to `Some(value)` replaces it. Merging is shallow: nested records are
/// replaced as a whole, never merged field by field.
///
/// Optional fields become `Option<Option<T>>`, so an overlay can also clear them.
///
/// # Generated items
/// - `NameOverlay` with `new()`, `is_empty()` and one builder setter per field
///   accepting `impl Into<FieldType>`
/// - `impl Overlay for Name` with `type Partial = NameOverlay`
///
/// # Example
/// ```ignore
/// #[derive(Clone, Debug, Overlay)]
/// pub struct Config {
///     pub duration_ms: f32,
///     pub background: Option<Color>,
/// }
///
/// let merged = base.overlay(ConfigOverlay::new().background(Color::BLACK));
/// ```
#[proc_macro_derive(Overlay)]
pub fn derive_overlay(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_overlay(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_overlay(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let vis = &input.vis;
    let overlay_name = format_ident!("{}Overlay", struct_name);

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Overlay cannot be derived for generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "Overlay can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "Overlay can only be derived for structs",
            ));
        }
    };

    let names: Vec<_> = fields.iter().filter_map(|f| f.ident.clone()).collect();
    let types: Vec<_> = fields.iter().map(|f| f.ty.clone()).collect();

    let struct_doc = format!(
        "Partial overlay for [`{}`]. Fields left as `None` keep the base value.",
        struct_name
    );

    // Generate overlay field definitions
    let field_defs = names.iter().zip(types.iter()).map(|(name, ty)| {
        let doc = format!("Replacement for `{}`, if any", name);
        quote! {
            #[doc = #doc]
            #vis #name: ::std::option::Option<#ty>
        }
    });

    // Generate builder setters
    let setters = names.iter().zip(types.iter()).map(|(name, ty)| {
        let doc = format!("Replace `{}` when this overlay is applied", name);
        quote! {
            #[doc = #doc]
            #vis fn #name(mut self, value: impl ::std::convert::Into<#ty>) -> Self {
                self.#name = ::std::option::Option::Some(value.into());
                self
            }
        }
    });

    let merges = names.iter().map(|name| {
        quote! {
            if let ::std::option::Option::Some(value) = partial.#name {
                self.#name = value;
            }
        }
    });

    Ok(quote! {
        #[doc = #struct_doc]
        #[derive(Clone, Debug, Default)]
        #vis struct #overlay_name {
            #(#field_defs,)*
        }

        impl #overlay_name {
            /// Create an overlay that changes nothing
            #vis fn new() -> Self {
                ::std::default::Default::default()
            }

            /// Returns true if applying this overlay would leave the base untouched
            #vis fn is_empty(&self) -> bool {
                true #(&& self.#names.is_none())*
            }

            #(#setters)*
        }

        impl ::stack_transitions::Overlay for #struct_name {
            type Partial = #overlay_name;

            fn overlay(mut self, partial: Self::Partial) -> Self {
                #(#merges)*
                self
            }
        }
    })
}
